//! Theme provider: the shell's "theme state" capability.
//!
//! Components read the active mode and resolve presenter style tokens
//! through the context instead of reaching into globals. The preference is
//! persisted in local storage; without one, the system preference wins.

use gloo_console::log;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::pricing::StyleToken;

const STORAGE_KEY: &str = "agencynest-theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Class applied to the app shell; the stylesheet keys off it.
    pub fn shell_class(self) -> &'static str {
        match self {
            Self::Light => "theme-light",
            Self::Dark => "theme-dark",
        }
    }
}

/// Maps a presenter token to the class name the stylesheet styles. Token
/// names are stable across modes; the shell class carries the mode.
pub fn resolve_token(token: StyleToken) -> &'static str {
    match token {
        StyleToken::Primary => "primary",
        StyleToken::Muted => "muted",
    }
}

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub mode: ThemeMode,
    pub toggle: Callback<()>,
}

impl ThemeContext {
    pub fn resolve(&self, token: StyleToken) -> &'static str {
        resolve_token(token)
    }
}

#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeProvider is not mounted")
}

fn stored_mode() -> Option<ThemeMode> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let value = storage.get_item(STORAGE_KEY).ok()??;
    ThemeMode::from_str(&value)
}

fn system_mode() -> ThemeMode {
    let prefers_dark = web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(true);
    if prefers_dark {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    }
}

fn persist_mode(mode: ThemeMode) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if storage.set_item(STORAGE_KEY, mode.as_str()).is_err() {
                log!("Failed to persist theme preference");
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let mode = use_state(|| stored_mode().unwrap_or_else(system_mode));

    // Follow the system preference until the user picks a mode explicitly.
    {
        let mode = mode.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(query) = web_sys::window()
                    .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok())
                    .flatten()
                {
                    let callback = Closure::<dyn Fn()>::new({
                        let query = query.clone();
                        move || {
                            if stored_mode().is_none() {
                                mode.set(if query.matches() {
                                    ThemeMode::Dark
                                } else {
                                    ThemeMode::Light
                                });
                            }
                        }
                    });
                    if query
                        .add_event_listener_with_callback(
                            "change",
                            callback.as_ref().unchecked_ref(),
                        )
                        .is_err()
                    {
                        log!("Failed to attach color scheme listener");
                    }
                    Box::new(move || {
                        let _ = query.remove_event_listener_with_callback(
                            "change",
                            callback.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                destructor
            },
            (),
        );
    }

    let toggle = {
        let mode = mode.clone();
        Callback::from(move |_| {
            let next = (*mode).flipped();
            persist_mode(next);
            mode.set(next);
        })
    };

    let context = ThemeContext {
        mode: *mode,
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            <div class={classes!("app-shell", mode.shell_class())}>
                { for props.children.iter() }
            </div>
        </ContextProvider<ThemeContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_round_trips_through_storage_format() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(ThemeMode::from_str(mode.as_str()), Some(mode));
        }
        assert_eq!(ThemeMode::from_str("solarized"), None);
    }

    #[test]
    fn toggling_flips_between_the_two_modes() {
        assert_eq!(ThemeMode::Light.flipped(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.flipped(), ThemeMode::Light);
    }

    #[test]
    fn tokens_resolve_to_distinct_classes() {
        assert_ne!(
            resolve_token(StyleToken::Primary),
            resolve_token(StyleToken::Muted)
        );
    }
}
