//! Compiled-in configuration for the marketing frontend.

/// Product name shown in the hero and the document title.
pub fn get_product_name() -> &'static str {
    "AgencyNest"
}

/// Relative path of the onboarding flow that plan selection links into.
pub fn get_onboarding_path() -> &'static str {
    "/agency"
}

/// Title of the tier that gets emphasized styling on the pricing grid.
/// Matched against `PlanTier::title` by exact string equality.
pub fn get_featured_tier() -> &'static str {
    "Unlimited Saas"
}
