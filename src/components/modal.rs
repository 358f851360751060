//! Modal host. Pages open dialogs through the context callbacks; the
//! provider owns the overlay so individual pages never manage stacking.

use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct ModalContext {
    pub open: Callback<Html>,
    pub close: Callback<()>,
}

#[hook]
pub fn use_modal() -> ModalContext {
    use_context::<ModalContext>().expect("ModalProvider is not mounted")
}

#[derive(Properties, PartialEq)]
pub struct ModalProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ModalProvider)]
pub fn modal_provider(props: &ModalProviderProps) -> Html {
    let content = use_state(|| None::<Html>);

    let open = {
        let content = content.clone();
        Callback::from(move |modal: Html| content.set(Some(modal)))
    };
    let close = {
        let content = content.clone();
        Callback::from(move |_| content.set(None))
    };

    let context = ModalContext {
        open,
        close: close.clone(),
    };

    let on_overlay_click = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };
    let swallow_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <ContextProvider<ModalContext> context={context}>
            { for props.children.iter() }
            if let Some(modal) = (*content).clone() {
                <div class="modal-overlay" onclick={on_overlay_click}>
                    <div class="modal-body" onclick={swallow_click}>
                        { modal }
                    </div>
                </div>
            }
            <style>
                {r#"
                .modal-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.6);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 100;
                }
                .modal-body {
                    background: rgba(30, 30, 30, 0.95);
                    border: 1px solid rgba(124, 58, 237, 0.3);
                    border-radius: 16px;
                    padding: 2rem;
                    max-width: 480px;
                    width: calc(100% - 2rem);
                }
                .theme-light .modal-body {
                    background: #fff;
                    border-color: rgba(124, 58, 237, 0.2);
                }
                "#}
            </style>
        </ContextProvider<ModalContext>>
    }
}
