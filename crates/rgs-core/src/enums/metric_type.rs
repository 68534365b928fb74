//! Metrics aggregation window.

reference_enum! {
    /// Length of the window questionnaire data is grouped by.
    pub enum MetricType: &'static str {
        Day = "day",
        Week = "week",
        Month = "month",
    }
}

impl Default for MetricType {
    fn default() -> Self {
        Self::Week
    }
}
