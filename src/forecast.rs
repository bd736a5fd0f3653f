//! Display rows for the forecast panel and temperature formatting

use chrono::NaiveDate;

use crate::sprites::{WeatherIcon, derive_icon};
use crate::state::{ForecastDay, WeatherResult};

/// Condition assumed for a day without a usable noon sample
pub const FALLBACK_CONDITION: &str = "Partly cloudy";

/// One forecast column, ready to render
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForecastRow {
    pub label: String,
    pub icon: WeatherIcon,
    pub temperatures: String,
}

/// Round half toward positive infinity (2.5 → 3, -2.5 → -2).
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// "16°C"
pub fn format_celsius(value: f64) -> String {
    format!("{}°C", round_half_up(value))
}

/// "18° / 10°"
pub fn format_temp_range(max: f64, min: f64) -> String {
    format!("{}° / {}°", round_half_up(max), round_half_up(min))
}

/// "Today" for `today`, the abbreviated weekday otherwise. Dates that don't
/// parse are shown as sent.
pub fn date_label(date: &str, today: NaiveDate) -> String {
    let day = date
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok());
    match day {
        Some(day) if day == today => "Today".to_string(),
        Some(day) => day.format("%a").to_string(),
        None => date.to_string(),
    }
}

pub fn forecast_row(day: &ForecastDay, today: NaiveDate) -> ForecastRow {
    let condition = day.noon_condition().unwrap_or(FALLBACK_CONDITION);
    ForecastRow {
        label: date_label(&day.date, today),
        icon: derive_icon(Some(condition)),
        temperatures: format_temp_range(day.max_temp, day.min_temp),
    }
}

/// Rows in API order, or `None` when the result carries no forecast.
pub fn forecast_rows(result: &WeatherResult, today: NaiveDate) -> Option<Vec<ForecastRow>> {
    let days = result.forecast.as_ref()?;
    Some(days.iter().map(|day| forecast_row(day, today)).collect())
}
