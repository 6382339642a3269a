// src/export/model.rs

use crate::models::IndexedRecord;
use serde::Serialize;

/// Flat export row: the display index followed by the table columns.
#[derive(Serialize, Clone, Debug)]
pub struct ApplicationExport {
    #[serde(rename = "#")]
    pub index: usize,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Role")]
    pub role: String,
    #[serde(rename = "Application Method")]
    pub method: String,
    #[serde(rename = "Contact")]
    pub contact: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Follow-up Date")]
    pub follow_up: String,
    #[serde(rename = "Notes")]
    pub notes: String,
}

impl From<&IndexedRecord> for ApplicationExport {
    fn from(r: &IndexedRecord) -> Self {
        let rec = &r.record;
        Self {
            index: r.index,
            date: rec.date_str(),
            company: rec.company.clone(),
            role: rec.role.clone(),
            method: rec.method.clone(),
            contact: rec.contact.clone(),
            status: rec.status.clone(),
            follow_up: rec.follow_up_str(),
            notes: rec.notes.clone(),
        }
    }
}

/// Header for XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    let mut h = vec!["#"];
    h.extend(crate::models::COLUMNS);
    h
}
