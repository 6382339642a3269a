//! Text rendering of store results, shared by the subcommands and the menu.

use crate::models::{COLUMNS, IndexedRecord, StatsReport, Status};
use crate::ui::messages::header;
use crate::utils::colors::{GREY, ORANGE, RESET};
use crate::utils::table::{Cell, Table};
use chrono::NaiveDate;

pub const NO_APPLICATIONS: &str = "No applications found.";

/// Table of records with their display index. Status is colour-coded and
/// follow-up dates due on or before `as_of` are highlighted.
pub fn render_records(title: &str, records: &[IndexedRecord], as_of: NaiveDate) -> String {
    let mut headers = vec!["#"];
    headers.extend(COLUMNS);

    let mut table = Table::new(&headers[..]);

    for item in records {
        let rec = &item.record;
        let follow_color = if rec.is_follow_up_due(as_of) {
            ORANGE
        } else {
            RESET
        };

        table.add_row(vec![
            Cell::plain(item.index.to_string()),
            Cell::plain(rec.date_str()),
            Cell::plain(rec.company.clone()),
            Cell::plain(rec.role.clone()),
            Cell::plain(rec.method.clone()),
            optional_cell(&rec.contact),
            Cell::colored(rec.status.clone(), Status::color_for(&rec.status)),
            Cell::colored(rec.follow_up_str(), follow_color),
            Cell::plain(rec.notes.clone()),
        ]);
    }

    format!("{}{}", header(title), table.render())
}

/// Empty values are shown as a grey "--".
fn optional_cell(value: &str) -> Cell {
    if value.trim().is_empty() {
        Cell::colored("--", GREY)
    } else {
        Cell::plain(value)
    }
}

fn status_label(status: &str) -> String {
    if status.is_empty() {
        "(blank)".to_string()
    } else {
        status.to_string()
    }
}

pub fn render_stats(report: &StatsReport) -> String {
    let mut table = Table::new(&["Status", "Count", "Percentage"]);

    for (status, count) in &report.status_counts {
        table.add_row(vec![
            Cell::colored(status_label(status), Status::color_for(status)),
            Cell::plain(count.to_string()),
            Cell::plain(format!("{:.1}%", report.status_percentage(status))),
        ]);
    }

    let mut out = header("Application Stats");
    out.push_str(&table.render());
    out.push_str(&format!(
        "\nApplications → Interview: {:.1}%\n",
        report.interview_rate()
    ));
    out.push_str(&format!(
        "Applications → Offer: {:.1}%\n",
        report.offer_rate()
    ));
    out.push_str(&format!(
        "Follow-ups pending today or earlier: {}\n",
        report.pending_follow_up_count
    ));
    out.push_str(&format!("\nTotal Applications: {}\n", report.total));
    out
}
