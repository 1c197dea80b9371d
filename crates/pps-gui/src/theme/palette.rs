//! Studio color palette.
//!
//! A single light palette fed into Iced's theme system via `Palette`.

use iced::theme::Palette;
use iced::{Color, Theme};

/// Light palette with a blue primary accent.
pub fn studio_palette() -> Palette {
    Palette {
        background: Color::from_rgb(0.97, 0.98, 0.99), // slate-50
        text: Color::from_rgb(0.06, 0.09, 0.16),       // slate-900
        primary: Color::from_rgb(0.23, 0.51, 0.96),    // blue-500
        success: Color::from_rgb(0.13, 0.77, 0.37),    // green-500
        warning: Color::from_rgb(0.92, 0.70, 0.03),    // yellow-500
        danger: Color::from_rgb(0.94, 0.27, 0.27),     // red-500
    }
}

/// Creates the studio theme.
pub fn studio_theme() -> Theme {
    Theme::custom("Studio Light".to_string(), studio_palette())
}
