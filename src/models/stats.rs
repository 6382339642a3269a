use serde::Serialize;

/// Summary report over the whole store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    pub total: usize,
    /// Distinct statuses with their counts, descending by count.
    /// Ties keep the order in which the statuses first appear in the store.
    pub status_counts: Vec<(String, usize)>,
    pub pending_follow_up_count: usize,
}

impl StatsReport {
    pub fn count(&self, status: &str) -> usize {
        self.status_counts
            .iter()
            .find(|(s, _)| s == status)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    /// `count / total * 100`, rounded to one decimal place (0.0 on empty).
    pub fn status_percentage(&self, status: &str) -> f64 {
        percentage(self.count(status), self.total)
    }

    /// Share of all applications currently holding the `target` status.
    pub fn conversion_rate(&self, target: &str) -> f64 {
        self.status_percentage(target)
    }

    pub fn interview_rate(&self) -> f64 {
        self.conversion_rate("Interview")
    }

    pub fn offer_rate(&self) -> f64 {
        self.conversion_rate("Offer")
    }
}

pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = count as f64 / total as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}
