//! Widget style functions.
//!
//! Style functions receive `&Theme` and read colors from it, so they can be
//! passed directly to `.style(...)`:
//!
//! ```rust,ignore
//! button(text("평가받기")).style(button_primary)
//! ```

use iced::widget::{button, container, progress_bar};
use iced::{Border, Color, Shadow, Theme, Vector};

use super::colors::StudioColors;
use super::spacing;

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Primary button style - main actions.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let studio = theme.studio();

    let (background, text_color) = match status {
        button::Status::Active => (palette.primary.base.color, studio.text_on_accent),
        button::Status::Hovered => (studio.accent_hover, studio.text_on_accent),
        button::Status::Pressed => (studio.accent_pressed, studio.text_on_accent),
        button::Status::Disabled => (studio.accent_disabled, studio.text_muted),
    };

    button::Style {
        background: Some(background.into()),
        text_color,
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: match status {
            button::Status::Active | button::Status::Hovered => Shadow {
                color: studio.shadow,
                offset: Vector::new(0.0, 1.0),
                blur_radius: 2.0,
            },
            button::Status::Pressed | button::Status::Disabled => Shadow::default(),
        },
        ..Default::default()
    }
}

/// Secondary button style - alternative actions.
pub fn button_secondary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let studio = theme.studio();

    let (background, text_color, border_color) = match status {
        button::Status::Active => (
            studio.background_elevated,
            studio.text_secondary,
            studio.border_default,
        ),
        button::Status::Hovered => (
            palette.background.base.color,
            studio.text_secondary,
            studio.text_disabled,
        ),
        button::Status::Pressed => (
            studio.background_secondary,
            studio.text_secondary,
            studio.border_default,
        ),
        button::Status::Disabled => (
            studio.background_secondary,
            studio.text_disabled,
            studio.border_subtle,
        ),
    };

    button::Style {
        background: Some(background.into()),
        text_color,
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: border_color,
        },
        ..Default::default()
    }
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Card container style - elevated surface.
pub fn container_card(theme: &Theme) -> container::Style {
    let studio = theme.studio();

    container::Style {
        background: Some(studio.background_elevated.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_MD.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: studio.border_subtle,
        },
        shadow: Shadow {
            color: studio.shadow,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

/// Bar container style - top bar and quick-access bar.
pub fn container_bar(theme: &Theme) -> container::Style {
    let studio = theme.studio();

    container::Style {
        background: Some(studio.background_elevated.into()),
        border: Border {
            radius: 0.0.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: studio.border_subtle,
        },
        ..Default::default()
    }
}

/// Sidebar container style - navigation panel.
pub fn container_sidebar(theme: &Theme) -> container::Style {
    let studio = theme.studio();

    container::Style {
        background: Some(studio.background_elevated.into()),
        border: Border {
            radius: 0.0.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        ..Default::default()
    }
}

/// Tinted panel used for the good/bad examples and feedback lists.
pub fn container_tinted(background: Color, border: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(background.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: border,
        },
        ..Default::default()
    }
}

// =============================================================================
// PROGRESS BAR STYLES
// =============================================================================

/// Primary progress bar style.
pub fn progress_bar_primary(theme: &Theme) -> progress_bar::Style {
    let palette = theme.extended_palette();
    let studio = theme.studio();

    progress_bar::Style {
        background: studio.border_subtle.into(),
        bar: palette.primary.base.color.into(),
        border: Border {
            radius: spacing::BORDER_RADIUS_FULL.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

/// Success progress bar style.
pub fn progress_bar_success(theme: &Theme) -> progress_bar::Style {
    let palette = theme.extended_palette();
    let studio = theme.studio();

    progress_bar::Style {
        background: studio.border_subtle.into(),
        bar: palette.success.base.color.into(),
        border: Border {
            radius: spacing::BORDER_RADIUS_FULL.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}
