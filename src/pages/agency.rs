use gloo_console::log;
use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_router::components::Link;
use yew_router::prelude::*;

use crate::catalog::{tier_for_price_id, PlanTier};
use crate::components::toast::{use_toast, ToastKind};
use crate::Route;

/// Query parameters the pricing page carries into onboarding.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanQuery {
    #[serde(default)]
    pub plan: String,
}

/// Entry point of the onboarding flow. Surfaces the plan chosen on the
/// pricing page; account creation itself happens further down the flow.
#[function_component(AgencyOnboarding)]
pub fn agency_onboarding() -> Html {
    let query = use_location()
        .and_then(|location| location.query::<PlanQuery>().ok())
        .unwrap_or_default();
    let tier: Option<&'static PlanTier> = tier_for_price_id(&query.plan);
    let toast = use_toast();

    {
        let plan = query.plan.clone();
        let tier_title = tier.map(|t| t.title);
        let push = toast.push.clone();
        use_effect_with_deps(
            move |_| {
                match tier_title {
                    Some(title) => {
                        push.emit((format!("{} plan selected", title), ToastKind::Success));
                    }
                    None if plan.is_empty() => {
                        log!("Onboarding entered without a plan selection");
                    }
                    None => {
                        log!("Onboarding entered with unknown plan token:", plan);
                    }
                }
                || ()
            },
            query.plan.clone(),
        );
    }

    html! {
        <div class="agency-page">
            <h1>{"Create your agency"}</h1>
            {
                if let Some(tier) = tier {
                    html! {
                        <div class="selected-plan">
                            <p>
                                {"You picked the "}<b>{tier.title}</b>
                                {" plan at "}<b>{format!("{}{}", tier.price, crate::pricing::PERIOD_SUFFIX)}</b>{"."}
                            </p>
                            <p class="plan-note">{tier.description}</p>
                        </div>
                    }
                } else {
                    html! {
                        <div class="selected-plan">
                            <p>{"No plan selected yet."}</p>
                            <Link<Route> to={Route::Landing} classes="back-link">
                                {"Compare plans"}
                            </Link<Route>>
                        </div>
                    }
                }
            }
            <style>
                {r#"
    .agency-page {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        gap: 1rem;
        text-align: center;
        padding: 2rem;
        box-sizing: border-box;
    }
    .theme-dark .agency-page {
        background: #09090b;
        color: #fafafa;
    }
    .theme-light .agency-page {
        background: #fff;
        color: #09090b;
    }
    .selected-plan p {
        margin: 0.25rem 0;
    }
    .plan-note {
        color: #a1a1aa;
    }
    .back-link {
        color: #7c3aed;
        text-decoration: none;
        font-weight: 600;
    }
    .back-link:hover {
        text-decoration: underline;
    }
                "#}
            </style>
        </div>
    }
}
