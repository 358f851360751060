use yew::prelude::*;
use yew_router::components::Link;

use crate::catalog::pricing_cards;
use crate::components::pricing_card::PricingCard;
use crate::components::theme::{use_theme, ThemeMode};
use crate::config;
use crate::pricing;
use crate::Route;

#[function_component(Landing)]
pub fn landing() -> Html {
    let theme = use_theme();

    let toggle_theme = {
        let toggle = theme.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };
    let toggle_icon = if theme.mode == ThemeMode::Dark {
        "fa-sun"
    } else {
        "fa-moon"
    };

    // All card decisions happen in the presenter; the markup below only
    // mounts its output.
    let cards = pricing::render(pricing_cards(), config::get_featured_tier());

    html! {
        <div class="landing-page">
            <head>
                <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css" integrity="sha512-SnH5WK+bZxgPHs44uWIX+LLJAJ9/2PkPKZ5QiAj6Ta86w+fsb2TkcmfRyVX3pBnMFcV7oQPJkl9QevSCWr3W6A==" crossorigin="anonymous" referrerpolicy="no-referrer" />
            </head>
            <nav class="top-nav">
                <Link<Route> to={Route::Landing} classes="nav-logo">
                    {config::get_product_name()}
                </Link<Route>>
                <button class="theme-toggle" onclick={toggle_theme} aria-label="Toggle theme">
                    <i class={classes!("fas", toggle_icon)}></i>
                </button>
            </nav>
            <header class="hero">
                <div class="hero-grid"></div>
                <p class="hero-tagline">{"Run your agency, in one place"}</p>
                <div class="hero-title-wrap">
                    <h1 class="hero-title">{config::get_product_name()}</h1>
                </div>
                <div class="hero-preview">
                    <img src="/assets/preview.png" alt="Dashboard preview" loading="lazy" />
                    <div class="hero-preview-fade"></div>
                </div>
            </header>
            <section class="pricing-section">
                <h2>{"Choose what fits you right"}</h2>
                <p class="pricing-subtitle">
                    {"Our straightforward pricing plans are tailored to meet your needs. If you're not"}<br/>
                    {"ready to commit you can get started for free."}
                </p>
                <div class="pricing-grid">
                    { for cards.into_iter().map(|card| {
                        let key = card.title.clone();
                        html! { <PricingCard key={key} {card} /> }
                    }) }
                </div>
            </section>
            <style>
                {r#"
    .landing-page {
        min-height: 100vh;
        overflow-x: hidden;
    }
    .theme-dark .landing-page {
        background: #09090b;
        color: #fafafa;
    }
    .theme-light .landing-page {
        background: #fff;
        color: #09090b;
    }
    .top-nav {
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 1rem 2rem;
        position: relative;
        z-index: 2;
    }
    .nav-logo {
        font-size: 1.25rem;
        font-weight: 700;
        text-decoration: none;
        color: inherit;
    }
    .theme-toggle {
        background: transparent;
        border: 1px solid rgba(124, 58, 237, 0.3);
        border-radius: 8px;
        color: inherit;
        padding: 0.5rem 0.75rem;
        cursor: pointer;
        transition: border-color 0.3s ease;
    }
    .theme-toggle:hover {
        border-color: rgba(124, 58, 237, 0.7);
    }
    .hero {
        position: relative;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        padding-top: 9rem;
        text-align: center;
    }
    .hero-grid {
        position: absolute;
        inset: 0;
        background:
            linear-gradient(to right, #161616 1px, transparent 1px),
            linear-gradient(to bottom, #161616 1px, transparent 1px);
        background-size: 4rem 4rem;
        -webkit-mask-image: radial-gradient(ellipse 60% 50% at 50% 0%, #000 70%, transparent 110%);
        mask-image: radial-gradient(ellipse 60% 50% at 50% 0%, #000 70%, transparent 110%);
        z-index: 0;
    }
    .theme-light .hero-grid {
        background:
            linear-gradient(to right, #eaeaea 1px, transparent 1px),
            linear-gradient(to bottom, #eaeaea 1px, transparent 1px);
        background-size: 4rem 4rem;
    }
    .hero-tagline {
        position: relative;
        z-index: 1;
        margin: 0;
    }
    .hero-title-wrap {
        position: relative;
        z-index: 1;
        background: linear-gradient(to right, #7c3aed, #d8b4fe);
        -webkit-background-clip: text;
        background-clip: text;
    }
    .hero-title {
        font-size: clamp(4rem, 18vw, 18rem);
        font-weight: 700;
        margin: 0;
        color: transparent;
        line-height: 1;
    }
    .hero-preview {
        position: relative;
        z-index: 1;
        display: flex;
        justify-content: center;
        margin-top: -2rem;
    }
    .hero-preview img {
        max-width: min(1200px, 90vw);
        height: auto;
        border: 2px solid rgba(124, 58, 237, 0.2);
        border-radius: 1rem 1rem 0 0;
    }
    .hero-preview-fade {
        position: absolute;
        left: 0;
        right: 0;
        top: 50%;
        bottom: 0;
        z-index: 2;
    }
    .theme-dark .hero-preview-fade {
        background: linear-gradient(to top, #09090b, transparent);
    }
    .theme-light .hero-preview-fade {
        background: linear-gradient(to top, #fff, transparent);
    }
    .pricing-section {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 1rem;
        padding: 5rem 1rem;
        position: relative;
        z-index: 1;
    }
    .pricing-section h2 {
        font-size: 2.5rem;
        margin: 0;
        text-align: center;
    }
    .pricing-subtitle {
        text-align: center;
        margin: 0;
        color: #a1a1aa;
    }
    .pricing-grid {
        display: flex;
        justify-content: center;
        flex-wrap: wrap;
        gap: 1rem;
        margin-top: 1.5rem;
    }
    .pricing-card {
        width: 300px;
        display: flex;
        flex-direction: column;
        justify-content: space-between;
        border: 1px solid rgba(161, 161, 170, 0.3);
        border-radius: 12px;
        padding: 1.5rem;
        box-sizing: border-box;
    }
    .pricing-card.featured {
        border: 2px solid #7c3aed;
    }
    .card-title {
        margin: 0 0 0.5rem 0;
        font-size: 1.3rem;
    }
    .card-title.muted {
        color: #a1a1aa;
    }
    .card-description {
        margin: 0;
        color: #a1a1aa;
        font-size: 0.95rem;
    }
    .card-price {
        margin: 1.5rem 0;
    }
    .card-price .amount {
        font-size: 2rem;
        font-weight: 700;
    }
    .card-price .period {
        color: #a1a1aa;
    }
    .card-footer {
        display: flex;
        flex-direction: column;
        align-items: flex-start;
        gap: 1rem;
    }
    .feature-row {
        display: flex;
        align-items: center;
        gap: 0.5rem;
    }
    .feature-row i {
        color: #a1a1aa;
    }
    .feature-row p {
        margin: 0.25rem 0;
    }
    .card-cta {
        width: 100%;
        text-align: center;
        padding: 0.5rem 0;
        border-radius: 6px;
        text-decoration: none;
        color: #fff;
        box-sizing: border-box;
    }
    .card-cta.primary {
        background: #7c3aed;
    }
    .card-cta.muted {
        background: #71717a;
    }
    @media (max-width: 768px) {
        .hero {
            padding-top: 6rem;
        }
        .pricing-section h2 {
            font-size: 2rem;
        }
    }
                "#}
            </style>
        </div>
    }
}
