//! Table rendering utilities for CLI outputs.

use crate::utils::colors::{BOLD, RESET, paint};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cells wider than this are truncated with "...".
const MAX_COL_WIDTH: usize = 40;

pub struct Cell {
    pub text: String,
    pub color: &'static str,
}

impl Cell {
    pub fn plain<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            color: RESET,
        }
    }

    pub fn colored<S: Into<String>>(text: S, color: &'static str) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new<S: AsRef<str>>(headers: &[S]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.as_ref().to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .map(|h| UnicodeWidthStr::width(h.as_str()))
            .collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                let w = UnicodeWidthStr::width(cell.text.as_str()).min(MAX_COL_WIDTH);
                widths[i] = widths[i].max(w);
            }
        }
        widths
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        let header_line: Vec<String> = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| pad(h, *w))
            .collect();
        out.push_str(&format!("{BOLD}{}{RESET}\n", header_line.join(" │ ")));

        let sep: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
        out.push_str(&sep.join("─┼─"));
        out.push('\n');

        // Rows
        for row in &self.rows {
            let line: Vec<String> = widths
                .iter()
                .enumerate()
                .map(|(i, w)| match row.get(i) {
                    Some(cell) => paint(&pad(&truncate(&cell.text), *w), cell.color),
                    None => " ".repeat(*w),
                })
                .collect();
            out.push_str(&line.join(" │ "));
            out.push('\n');
        }

        out
    }
}

/// Pad on the right up to `width` display columns.
fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

fn truncate(s: &str) -> String {
    let s = s.replace(['\r', '\n'], " ");
    if UnicodeWidthStr::width(s.as_str()) <= MAX_COL_WIDTH {
        return s;
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let cw = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + cw > MAX_COL_WIDTH - 3 {
            break;
        }
        out.push(ch);
        used += cw;
    }
    out.push_str("...");
    out
}
