//! Reusable UI components.
//!
//! Components are plain functions or small builders returning `Element`s.
//! They hold no state and read colors from the theme inside style closures.

mod banner;
mod bullet_list;
mod progress_bar;
mod section_card;
mod sidebar;
mod stat_card;

pub use banner::warning_banner;
pub use bullet_list::{bullet_list, titled_list};
pub use progress_bar::ProgressBar;
pub use section_card::SectionCard;
pub use sidebar::{SidebarItem, sidebar};
pub use stat_card::stat_card;

pub use iced_fonts::LUCIDE_FONT_BYTES;
