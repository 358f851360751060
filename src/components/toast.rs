//! Toast host. Messages pushed through the context auto-dismiss after a few
//! seconds; the provider renders them stacked in a corner of the viewport.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

const DISMISS_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            Self::Info => "toast-info",
            Self::Success => "toast-success",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    id: u32,
    message: String,
    kind: ToastKind,
}

enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

/// Live toast list. Updates go through the reducer so a dismissal always
/// applies to the current list, not the list as of the push that armed its
/// timer.
#[derive(Clone, Default, PartialEq)]
struct ToastList {
    toasts: Vec<Toast>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        let toasts = match action {
            ToastAction::Push(toast) => {
                let mut toasts = self.toasts.clone();
                toasts.push(toast);
                toasts
            }
            ToastAction::Dismiss(id) => self
                .toasts
                .iter()
                .filter(|toast| toast.id != id)
                .cloned()
                .collect(),
        };
        Rc::new(Self { toasts })
    }
}

#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub push: Callback<(String, ToastKind)>,
}

#[hook]
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().expect("ToastProvider is not mounted")
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);
    let next_id = use_mut_ref(|| 0u32);

    let push = {
        let list = list.clone();
        Callback::from(move |(message, kind): (String, ToastKind)| {
            let id = {
                let mut counter = next_id.borrow_mut();
                *counter += 1;
                *counter
            };
            list.dispatch(ToastAction::Push(Toast { id, message, kind }));

            let list = list.clone();
            Timeout::new(DISMISS_MS, move || {
                list.dispatch(ToastAction::Dismiss(id));
            })
            .forget();
        })
    };

    let context = ToastContext { push };

    html! {
        <ContextProvider<ToastContext> context={context}>
            { for props.children.iter() }
            <div class="toast-host">
                { for list.toasts.iter().map(|toast| html! {
                    <div key={toast.id} class={classes!("toast", toast.kind.class())}>
                        {toast.message.clone()}
                    </div>
                }) }
            </div>
            <style>
                {r#"
                .toast-host {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    z-index: 200;
                }
                .toast {
                    padding: 0.75rem 1.25rem;
                    border-radius: 8px;
                    color: #fff;
                    font-size: 0.95rem;
                    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.3);
                }
                .toast-info {
                    background: rgba(30, 30, 30, 0.95);
                    border: 1px solid rgba(124, 58, 237, 0.3);
                }
                .toast-success {
                    background: rgba(22, 101, 52, 0.95);
                    border: 1px solid rgba(34, 197, 94, 0.4);
                }
                "#}
            </style>
        </ContextProvider<ToastContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u32, message: &str) -> Toast {
        Toast {
            id,
            message: message.to_string(),
            kind: ToastKind::Info,
        }
    }

    #[test]
    fn dismissing_an_earlier_toast_keeps_ones_pushed_after_it() {
        let list = Rc::new(ToastList::default())
            .reduce(ToastAction::Push(toast(1, "first")))
            .reduce(ToastAction::Push(toast(2, "second")))
            .reduce(ToastAction::Dismiss(1));
        let ids: Vec<u32> = list.toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, [2]);
        assert_eq!(list.toasts[0].message, "second");
    }

    #[test]
    fn dismissing_an_unknown_id_changes_nothing() {
        let list = Rc::new(ToastList::default())
            .reduce(ToastAction::Push(toast(1, "only")))
            .reduce(ToastAction::Dismiss(7));
        assert_eq!(list.toasts.len(), 1);
    }

    #[test]
    fn toasts_render_in_push_order() {
        let list = Rc::new(ToastList::default())
            .reduce(ToastAction::Push(toast(1, "a")))
            .reduce(ToastAction::Push(toast(2, "b")))
            .reduce(ToastAction::Push(toast(3, "c")));
        let ids: Vec<u32> = list.toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }
}
