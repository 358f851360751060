//! Static pricing catalog.
//!
//! The catalog is pure configuration: an ordered list of tiers defined once
//! at startup and never mutated. Tier order is display order.

use once_cell::sync::Lazy;

/// One entry in the pricing catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanTier {
    /// Unique within the catalog; also the matching key for the featured rule.
    pub title: &'static str,
    pub description: &'static str,
    /// Display amount per month, without the "/m" suffix.
    pub price: &'static str,
    /// Opaque billing token, forwarded verbatim to the onboarding flow.
    pub price_id: &'static str,
    /// Display order is insertion order.
    pub features: &'static [&'static str],
}

static PRICING_CARDS: Lazy<Vec<PlanTier>> = Lazy::new(|| {
    vec![
        PlanTier {
            title: "Starter",
            description: "Perfect for trying out AgencyNest",
            price: "$0",
            price_id: "price_free",
            features: &["3 Sub Accounts", "2 Team Members", "Unlimited Pipelines"],
        },
        PlanTier {
            title: "Unlimited Saas",
            description: "The ultimate agency kit",
            price: "$199",
            price_id: "price_unlimited",
            features: &["Rebilling", "24/7 Support Team", "Unlimited Sub Accounts"],
        },
        PlanTier {
            title: "Basic",
            description: "For serious agency owners",
            price: "$49",
            price_id: "price_basic",
            features: &["Everything in Starter", "Unlimited Team Members", "Priority Support"],
        },
    ]
});

/// The full ordered catalog.
pub fn pricing_cards() -> &'static [PlanTier] {
    &PRICING_CARDS
}

/// Looks a tier up by its billing token.
pub fn tier_for_price_id(price_id: &str) -> Option<&'static PlanTier> {
    pricing_cards().iter().find(|tier| tier.price_id == price_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // Catalog validity is enforced here rather than in the presenter; a
    // defect in this data is fixed by editing the catalog, not at runtime.

    #[test]
    fn titles_are_unique() {
        let mut seen = HashSet::new();
        for tier in pricing_cards() {
            assert!(seen.insert(tier.title), "duplicate tier title: {}", tier.title);
        }
    }

    #[test]
    fn price_ids_are_non_empty_tokens() {
        for tier in pricing_cards() {
            assert!(!tier.price_id.is_empty(), "tier {} has no price id", tier.title);
            assert!(
                !tier.price_id.contains(char::is_whitespace),
                "tier {} has a price id with whitespace",
                tier.title
            );
        }
    }

    #[test]
    fn every_tier_lists_at_least_one_feature() {
        for tier in pricing_cards() {
            assert!(!tier.features.is_empty(), "tier {} has no features", tier.title);
        }
    }

    #[test]
    fn featured_tier_exists_in_catalog() {
        assert!(pricing_cards()
            .iter()
            .any(|tier| tier.title == crate::config::get_featured_tier()));
    }

    #[test]
    fn lookup_by_price_id_round_trips() {
        assert_eq!(
            tier_for_price_id("price_unlimited").map(|t| t.title),
            Some("Unlimited Saas")
        );
        assert_eq!(tier_for_price_id("price_nope"), None);
    }
}
