//! App theme: colors and spacing. Light/dark selected at runtime.

#[derive(Clone, Copy)]
pub struct AppColors;

impl AppColors {
    // Light
    pub const LIGHT_PRIMARY: &'static str = "#1B6B52";
    pub const LIGHT_SURFACE: &'static str = "#F6F9F7";
    pub const LIGHT_ON_SURFACE: &'static str = "#1A1C1B";
    pub const LIGHT_INCOME: &'static str = "#029C76";
    pub const LIGHT_EXPENSE: &'static str = "#BA1A1A";

    // Dark
    pub const DARK_PRIMARY: &'static str = "#7ED9B9";
    pub const DARK_SURFACE: &'static str = "#121514";
    pub const DARK_ON_SURFACE: &'static str = "#E2E5E3";
    pub const DARK_INCOME: &'static str = "#4CC79D";
    pub const DARK_EXPENSE: &'static str = "#FFB4AB";

    pub fn primary(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_PRIMARY
        } else {
            Self::LIGHT_PRIMARY
        }
    }
    pub fn surface(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_SURFACE
        } else {
            Self::LIGHT_SURFACE
        }
    }
    pub fn on_surface(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_ON_SURFACE
        } else {
            Self::LIGHT_ON_SURFACE
        }
    }
    pub fn income(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_INCOME
        } else {
            Self::LIGHT_INCOME
        }
    }
    pub fn expense(is_dark: bool) -> &'static str {
        if is_dark {
            Self::DARK_EXPENSE
        } else {
            Self::LIGHT_EXPENSE
        }
    }
}

/// 8dp grid spacing.
pub mod spacing {
    pub const XS: &'static str = "4px";
    pub const SM: &'static str = "8px";
    pub const MD: &'static str = "16px";
    pub const LG: &'static str = "24px";
    pub const CARD_PADDING: &'static str = "16px";
}
