pub mod modal;
pub mod pricing_card;
pub mod theme;
pub mod toast;
