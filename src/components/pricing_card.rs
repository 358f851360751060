//! Pricing card component. Mounts one presenter-decided card; all styling
//! decisions arrive in the `RenderedCard`, so this component only maps
//! tokens to classes through the injected theme.

use yew::prelude::*;

use crate::components::theme::use_theme;
use crate::pricing::{Emphasis, RenderedCard};

#[derive(Properties, PartialEq)]
pub struct PricingCardProps {
    pub card: RenderedCard,
}

#[function_component(PricingCard)]
pub fn pricing_card(props: &PricingCardProps) -> Html {
    let theme = use_theme();
    let card = &props.card;

    let card_class = classes!(
        "pricing-card",
        (card.emphasis == Emphasis::Featured).then_some("featured"),
    );
    let title_class = classes!("card-title", theme.resolve(card.emphasis.title_token()));
    let cta_class = classes!("card-cta", theme.resolve(card.emphasis.cta_token()));

    html! {
        <div class={card_class}>
            <div class="card-header">
                <h3 class={title_class}>{card.title.clone()}</h3>
                <p class="card-description">{card.description.clone()}</p>
            </div>
            <div class="card-price">
                <span class="amount">{card.price.clone()}</span>
                <span class="period">{card.period}</span>
            </div>
            <div class="card-footer">
                <div class="card-features">
                    { for card.features.iter().map(|row| html! {
                        <div class="feature-row">
                            <i class={classes!("fas", row.icon)}></i>
                            <p>{row.label.clone()}</p>
                        </div>
                    }) }
                </div>
                <a class={cta_class} href={card.cta_href.clone()}>
                    {card.cta_label}
                </a>
            </div>
        </div>
    }
}
