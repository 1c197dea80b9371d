//! Theme module for Prompt Practice Studio.
//!
//! - Color palette fed to Iced (`palette`)
//! - App-specific colors via the [`StudioColors`] extension trait (`colors`)
//! - Spacing constants (`spacing`)
//! - Widget style functions (`style`)

pub mod colors;
pub mod palette;
pub mod spacing;
pub mod style;

pub use colors::{StudioColorSet, StudioColors};
pub use palette::studio_theme;

pub use spacing::{
    BORDER_RADIUS_FULL, BORDER_RADIUS_MD, BORDER_RADIUS_SM, CONTENT_MAX_WIDTH, SIDEBAR_WIDTH,
    SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, SPACING_XS,
};

pub use style::{
    button_primary, button_secondary, container_bar, container_card, container_sidebar,
    container_tinted, progress_bar_primary, progress_bar_success,
};
