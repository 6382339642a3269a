use crate::utils::date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fixed column header of the applications table, in file order.
pub const COLUMNS: [&str; 8] = [
    "Date",
    "Company",
    "Role",
    "Application Method",
    "Contact",
    "Status",
    "Follow-up Date",
    "Notes",
];

/// One tracked job application (one row of the table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    #[serde(rename = "Date")]
    pub date: NaiveDate, // ⇔ "Date" (TEXT "YYYY-MM-DD")
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Role")]
    pub role: String,
    #[serde(rename = "Application Method")]
    pub method: String,
    #[serde(rename = "Contact")]
    pub contact: String,
    #[serde(rename = "Status")]
    pub status: String, // free text, never validated
    /// Blank in the file ⇔ `None`. Text that is not a valid date also loads
    /// as `None`, so it is never reported as due.
    #[serde(rename = "Follow-up Date", deserialize_with = "csv::invalid_option")]
    pub follow_up: Option<NaiveDate>,
    #[serde(rename = "Notes")]
    pub notes: String,
}

impl ApplicationRecord {
    pub fn date_str(&self) -> String {
        date::format_date(&self.date)
    }

    pub fn follow_up_str(&self) -> String {
        self.follow_up
            .as_ref()
            .map(date::format_date)
            .unwrap_or_default()
    }

    /// Follow-up is due when present and on or before `as_of`.
    pub fn is_follow_up_due(&self, as_of: NaiveDate) -> bool {
        matches!(self.follow_up, Some(d) if d <= as_of)
    }

    /// Short human label, e.g. "Acme - Backend Engineer".
    pub fn label(&self) -> String {
        format!("{} - {}", self.company, self.role)
    }
}

/// A record together with its current 1-based display index.
///
/// The index is positional: it is recomputed on every read and becomes stale
/// as soon as an earlier record is deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedRecord {
    pub index: usize,
    pub record: ApplicationRecord,
}

/// Raw field input for a new application, exactly as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct NewApplication {
    pub date: String,
    pub company: String,
    pub role: String,
    pub method: String,
    pub contact: String,
    pub status: String,
    pub follow_up: String,
    pub notes: String,
}

impl NewApplication {
    /// Build the stored record from raw input.
    ///
    /// - date: `YYYY-MM-DD`, blank or unparseable → `today`
    /// - follow-up: `YYYY-MM-DD`, blank or unparseable → none
    /// - text fields and status are trimmed and kept verbatim
    pub fn normalize(&self, today: NaiveDate) -> ApplicationRecord {
        ApplicationRecord {
            date: date::parse_date(&self.date).unwrap_or(today),
            company: self.company.trim().to_string(),
            role: self.role.trim().to_string(),
            method: self.method.trim().to_string(),
            contact: self.contact.trim().to_string(),
            status: self.status.trim().to_string(),
            follow_up: date::parse_date(&self.follow_up),
            notes: self.notes.trim().to_string(),
        }
    }
}
