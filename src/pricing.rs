//! Pricing tier presentation.
//!
//! Pure transformation from the plan catalog to fully decided cards: which
//! tier is emphasized, what each feature list contains, and where each
//! call-to-action navigates. No DOM types live here; the components layer
//! mounts the output and the theme layer resolves the style tokens.

use crate::catalog::PlanTier;
use crate::config;

/// Fixed billing period suffix shown after the price.
pub const PERIOD_SUFFIX: &str = "/m";

/// Call-to-action label, identical on every card.
pub const CTA_LABEL: &str = "Get Started";

/// Icon class rendered in front of every feature row.
pub const FEATURE_ICON: &str = "fa-check";

/// Named visual weight, resolved to concrete styling by the theme layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleToken {
    Primary,
    Muted,
}

/// Emphasis decision for a whole card. Exactly one applies per tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
    Featured,
    Muted,
}

impl Emphasis {
    pub fn title_token(self) -> StyleToken {
        match self {
            Self::Featured => StyleToken::Primary,
            Self::Muted => StyleToken::Muted,
        }
    }

    pub fn cta_token(self) -> StyleToken {
        match self {
            Self::Featured => StyleToken::Primary,
            Self::Muted => StyleToken::Muted,
        }
    }
}

/// One row in a card's feature list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureRow {
    pub label: String,
    pub icon: &'static str,
}

/// A fully decided pricing card. The component layer mounts this without
/// further branching.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedCard {
    pub title: String,
    pub description: String,
    pub price: String,
    pub period: &'static str,
    pub features: Vec<FeatureRow>,
    pub emphasis: Emphasis,
    pub cta_label: &'static str,
    pub cta_href: String,
}

/// Builds the onboarding link for a tier: the fixed onboarding path with the
/// billing token carried in the `plan` query parameter. The token is passed
/// through verbatim apart from standard query-value escaping; an empty token
/// yields an empty query value.
pub fn plan_link(price_id: &str) -> String {
    format!(
        "{}?plan={}",
        config::get_onboarding_path(),
        urlencoding::encode(price_id)
    )
}

/// Decides emphasis for one tier. Exact title equality, no case folding.
pub fn emphasis_for(tier: &PlanTier, featured_title: &str) -> Emphasis {
    if tier.title == featured_title {
        Emphasis::Featured
    } else {
        Emphasis::Muted
    }
}

/// Transforms the catalog into renderable cards, preserving catalog order.
/// Pure: same catalog in, same cards out, every call.
pub fn render(catalog: &[PlanTier], featured_title: &str) -> Vec<RenderedCard> {
    catalog
        .iter()
        .map(|tier| RenderedCard {
            title: tier.title.to_string(),
            description: tier.description.to_string(),
            price: tier.price.to_string(),
            period: PERIOD_SUFFIX,
            features: tier
                .features
                .iter()
                .map(|label| FeatureRow {
                    label: (*label).to_string(),
                    icon: FEATURE_ICON,
                })
                .collect(),
            emphasis: emphasis_for(tier, featured_title),
            cta_label: CTA_LABEL,
            cta_href: plan_link(tier.price_id),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn starter() -> PlanTier {
        PlanTier {
            title: "Starter",
            description: "Perfect for trying out AgencyNest",
            price: "$0",
            price_id: "price_free",
            features: &["3 Sub Accounts"],
        }
    }

    fn unlimited() -> PlanTier {
        PlanTier {
            title: "Unlimited Saas",
            description: "The ultimate agency kit",
            price: "$199",
            price_id: "price_unlimited",
            features: &["Unlimited Sub Accounts", "Priority Support"],
        }
    }

    #[test]
    fn render_preserves_length_and_order() {
        let catalog = [starter(), unlimited()];
        let cards = render(&catalog, "Unlimited Saas");
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].title, "Starter");
        assert_eq!(cards[1].title, "Unlimited Saas");
    }

    #[test]
    fn featured_iff_title_matches_exactly() {
        let catalog = [starter(), unlimited()];
        let cards = render(&catalog, "Unlimited Saas");
        assert_eq!(cards[0].emphasis, Emphasis::Muted);
        assert_eq!(cards[1].emphasis, Emphasis::Featured);

        // No case folding, no partial matching.
        let cards = render(&catalog, "unlimited saas");
        assert!(cards.iter().all(|c| c.emphasis == Emphasis::Muted));
    }

    #[test]
    fn featured_cards_get_primary_tokens_and_muted_cards_get_muted() {
        assert_eq!(Emphasis::Featured.title_token(), StyleToken::Primary);
        assert_eq!(Emphasis::Featured.cta_token(), StyleToken::Primary);
        assert_eq!(Emphasis::Muted.title_token(), StyleToken::Muted);
        assert_eq!(Emphasis::Muted.cta_token(), StyleToken::Muted);
    }

    #[test]
    fn feature_rows_match_catalog_entries_in_order() {
        let catalog = [unlimited()];
        let cards = render(&catalog, "Unlimited Saas");
        let labels: Vec<&str> = cards[0].features.iter().map(|row| row.label.as_str()).collect();
        assert_eq!(labels, ["Unlimited Sub Accounts", "Priority Support"]);
        assert!(cards[0].features.iter().all(|row| row.icon == FEATURE_ICON));
    }

    #[test]
    fn cta_target_carries_the_price_id() {
        let cards = render(&[starter()], "Unlimited Saas");
        assert_eq!(cards[0].cta_href, "/agency?plan=price_free");
    }

    #[test]
    fn cta_target_escapes_reserved_characters() {
        assert_eq!(plan_link("price 1+2"), "/agency?plan=price%201%2B2");
        assert_eq!(plan_link("a&b=c"), "/agency?plan=a%26b%3Dc");
    }

    #[test]
    fn empty_price_id_degrades_to_an_empty_query_value() {
        let tier = PlanTier {
            price_id: "",
            ..starter()
        };
        let cards = render(&[tier], "Unlimited Saas");
        assert_eq!(cards[0].cta_href, "/agency?plan=");
    }

    #[test]
    fn price_display_appends_the_monthly_suffix() {
        let cards = render(&[unlimited()], "Unlimited Saas");
        assert_eq!(format!("{}{}", cards[0].price, cards[0].period), "$199/m");
    }

    #[test]
    fn render_is_idempotent() {
        let catalog = [starter(), unlimited()];
        assert_eq!(
            render(&catalog, "Unlimited Saas"),
            render(&catalog, "Unlimited Saas")
        );
    }

    #[test]
    fn starter_and_unlimited_scenario() {
        let catalog = [starter(), unlimited()];
        let cards = render(&catalog, "Unlimited Saas");

        assert_eq!(cards[0].emphasis, Emphasis::Muted);
        assert_eq!(cards[0].cta_href, "/agency?plan=price_free");
        assert_eq!(cards[0].features.len(), 1);

        assert_eq!(cards[1].emphasis, Emphasis::Featured);
        assert_eq!(cards[1].cta_href, "/agency?plan=price_unlimited");
        assert_eq!(cards[1].features.len(), 2);
        assert_eq!(cards[1].cta_label, "Get Started");
    }

    #[test]
    fn shipped_catalog_renders_one_featured_card() {
        let cards = render(
            crate::catalog::pricing_cards(),
            crate::config::get_featured_tier(),
        );
        let featured: Vec<&RenderedCard> = cards
            .iter()
            .filter(|card| card.emphasis == Emphasis::Featured)
            .collect();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].title, "Unlimited Saas");
    }
}
