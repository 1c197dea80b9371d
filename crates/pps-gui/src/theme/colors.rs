//! Studio color extension trait for app-specific colors.
//!
//! Provides `StudioColors`, which adds the colors Iced's `ExtendedPalette`
//! does not cover.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::theme::StudioColors;
//!
//! .style(|theme: &Theme| container::Style {
//!     background: Some(theme.studio().background_elevated.into()),
//!     ..Default::default()
//! })
//! ```

use iced::{Color, Theme};

// =============================================================================
// STUDIO COLOR SET
// =============================================================================

/// App-specific colors not covered by Iced's ExtendedPalette.
#[derive(Debug, Clone, Copy)]
pub struct StudioColorSet {
    // === Accent Tints ===
    /// Light tint of primary accent (active sidebar entry, hover)
    pub accent_primary_light: Color,
    /// Accent hover color
    pub accent_hover: Color,
    /// Accent pressed color
    pub accent_pressed: Color,
    /// Accent disabled color
    pub accent_disabled: Color,

    // === Status Colors ===
    /// Success status light background
    pub status_success_light: Color,
    /// Warning status light background
    pub status_warning_light: Color,
    /// Error status light background
    pub status_error_light: Color,

    // === Borders ===
    /// Default border color
    pub border_default: Color,
    /// Subtle/lighter border
    pub border_subtle: Color,

    // === Backgrounds ===
    /// Secondary background (cards, surfaces)
    pub background_secondary: Color,
    /// Elevated surface (cards, bars)
    pub background_elevated: Color,

    // === Text ===
    /// Secondary text color
    pub text_secondary: Color,
    /// Muted text (descriptions, hints)
    pub text_muted: Color,
    /// Disabled text
    pub text_disabled: Color,
    /// Text on accent color backgrounds
    pub text_on_accent: Color,

    // === Special ===
    /// Shadow color for elevation
    pub shadow: Color,
}

// =============================================================================
// EXTENSION TRAIT
// =============================================================================

/// Extension trait for studio-specific colors.
///
/// Use it inside style closures that receive a `&Theme`.
pub trait StudioColors {
    /// Get the studio color set for this theme.
    fn studio(&self) -> StudioColorSet;
}

impl StudioColors for Theme {
    fn studio(&self) -> StudioColorSet {
        let palette = self.extended_palette();

        StudioColorSet {
            accent_primary_light: blend_color(palette.primary.base.color, Color::WHITE, 0.88),
            accent_hover: palette.primary.strong.color,
            accent_pressed: blend_color(palette.primary.base.color, Color::BLACK, 0.15),
            accent_disabled: Color::from_rgb(0.82, 0.84, 0.88),

            status_success_light: blend_color(palette.success.base.color, Color::WHITE, 0.88),
            status_warning_light: blend_color(palette.warning.base.color, Color::WHITE, 0.88),
            status_error_light: blend_color(palette.danger.base.color, Color::WHITE, 0.88),

            border_default: palette.background.strong.color,
            border_subtle: Color::from_rgb(0.89, 0.91, 0.94),

            background_secondary: palette.background.weak.color,
            background_elevated: Color::WHITE,

            text_secondary: Color::from_rgb(0.28, 0.33, 0.41),
            text_muted: Color::from_rgb(0.39, 0.45, 0.55),
            text_disabled: Color::from_rgb(0.58, 0.64, 0.72),
            text_on_accent: Color::WHITE,

            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
        }
    }
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Blend two colors together.
///
/// `factor` of 0.0 returns `base`, 1.0 returns `blend`.
fn blend_color(base: Color, blend: Color, factor: f32) -> Color {
    Color::from_rgb(
        base.r + (blend.r - base.r) * factor,
        base.g + (blend.g - base.g) * factor,
        base.b + (blend.b - base.b) * factor,
    )
}
