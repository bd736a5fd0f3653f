//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch the forecast for `query`; the result is tagged with `seq`
    FetchWeather { seq: u64, query: String },
}
