pub mod forecast_panel;
pub mod location_header;
pub mod search_bar;
pub mod weather_body;
pub mod weather_display;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use forecast_panel::{ForecastPanel, ForecastPanelProps};
pub use location_header::{LocationHeader, LocationHeaderProps};
pub use search_bar::{SearchBar, SearchBarProps};
pub use weather_body::{WeatherBody, WeatherBodyProps};
pub use weather_display::{ERROR_ICON, WeatherDisplay, WeatherDisplayProps};
