pub mod catalog;
pub mod components;
pub mod config;
pub mod pages;
pub mod pricing;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::modal::ModalProvider;
use crate::components::theme::ThemeProvider;
use crate::components::toast::ToastProvider;
use crate::pages::agency::AgencyOnboarding;
use crate::pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/agency")]
    Agency,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Landing => html! { <Landing /> },
        Route::Agency => html! { <AgencyOnboarding /> },
        Route::NotFound => html! {
            <div style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center;">
                <h1>{"404"}</h1>
                <p>{"This page does not exist."}</p>
            </div>
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <ThemeProvider>
                <ModalProvider>
                    <ToastProvider>
                        <Switch<Route> render={switch} />
                    </ToastProvider>
                </ModalProvider>
            </ThemeProvider>
        </BrowserRouter>
    }
}
