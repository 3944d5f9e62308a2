mod card;
mod chart;
mod modal;
mod page_background;
mod stat_card;

pub use card::Card;
pub use chart::{Chart, ChartKind};
pub use modal::Modal;
pub use page_background::PageBackground;
pub use stat_card::StatCard;
