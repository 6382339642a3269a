use crate::errors::{AppError, AppResult};
use crate::models::{ApplicationRecord, StatsReport};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Build the summary report. The report is undefined for zero records, so an
/// empty slice is an `EmptyStore` error rather than a report full of zeros.
pub fn build_report(records: &[ApplicationRecord], as_of: NaiveDate) -> AppResult<StatsReport> {
    if records.is_empty() {
        return Err(AppError::EmptyStore);
    }

    Ok(StatsReport {
        total: records.len(),
        status_counts: status_counts(records),
        pending_follow_up_count: records.iter().filter(|r| r.is_follow_up_due(as_of)).count(),
    })
}

/// Count each distinct status, descending by count. The sort is stable, so
/// equal counts keep first-appearance order.
pub fn status_counts(records: &[ApplicationRecord]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut slot: HashMap<&str, usize> = HashMap::new();

    for rec in records {
        match slot.get(rec.status.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                slot.insert(rec.status.as_str(), counts.len());
                counts.push((rec.status.clone(), 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
