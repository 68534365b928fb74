//! Patient categories.

reference_enum! {
    /// Monitoring programme a patient is enrolled in.
    pub enum Category: &'static str {
        Diabetic = "diabetic",
        Hypertensive = "hypertensive",
        Cardiac = "cardiac",
        Pregnant = "pregnant",
        Covid = "covid",
    }
}
