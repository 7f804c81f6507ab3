pub mod location_banner;
pub mod result_panel;
pub mod search_bar;
pub mod widget_card;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use location_banner::{LocationBanner, LocationBannerProps};
pub use result_panel::{ResultPanel, ResultPanelProps};
pub use search_bar::{SearchBar, SearchBarProps};
pub use widget_card::{ERROR_ICON, WidgetCard, WidgetCardProps};
