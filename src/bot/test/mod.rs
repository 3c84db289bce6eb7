use chrono::{TimeZone, Utc};

use crate::model::status::{HealthResult, Report};


/// A report generated at a fixed time, so embeds are deterministic.
fn report(title: &str, results: Vec<HealthResult>) -> Report {
    Report {
        title: title.to_string(),
        results,
        generated_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
    }
}
