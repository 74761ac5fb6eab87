use crate::models::{FootfallSummary, Sample};

impl FootfallSummary {
    pub fn total(&self) -> f64 {
        self.samples.iter().map(|sample| sample.count).sum()
    }

    /// Hour with the highest count; `None` for plain series without hours.
    /// Ties resolve to the earliest hour.
    pub fn busiest_hour(&self) -> Option<&Sample> {
        self.samples
            .iter()
            .filter(|sample| sample.hour.is_some())
            .fold(None, |best: Option<&Sample>, sample| match best {
                Some(current) if current.count >= sample.count => Some(current),
                _ => Some(sample),
            })
    }
}

/// Formats a count without a trailing `.0` for whole numbers.
pub fn format_count(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
