// src/table.rs
//! TableData: the results table as display-ready strings.
//!
//! Purpose:
//! - Fix the six result columns and their order in one place.
//! - Decide how a missing `Value` reads on screen (`N/A`), so the GUI table,
//!   the clipboard copy and the CLI output all agree.
//! - Keep `data_table.rs` a pure view: it only consumes `TableData`.

use crate::config::consts::MISSING_VALUE;
use crate::csv;
use crate::model::ResultRow;

pub const HEADERS: [&str; 6] = [
    "Country",
    "Income Group",
    "EM and Developed Markets",
    "Year",
    "Dataset",
    "Value",
];

/// Index of the only numeric column.
pub const VALUE_COL: usize = 5;

/// The table model used by the GUI and CLI
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableData {
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    /// One row per result, input order preserved.
    pub fn from_rows(rows: &[ResultRow]) -> Self {
        Self { rows: rows.iter().map(cells).collect() }
    }

    pub fn headers(&self) -> Vec<String> {
        HEADERS.iter().map(|h| s!(*h)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn ncols(&self) -> usize {
        HEADERS.len()
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Serialize for clipboard/stdout.
    pub fn to_delimited(&self, sep: char, include_headers: bool) -> String {
        let headers = include_headers.then(|| self.headers());
        csv::rows_to_string(&self.rows, &headers, sep)
    }
}

pub fn format_value(v: Option<f64>) -> String {
    match v {
        Some(x) => x.to_string(),
        None => s!(MISSING_VALUE),
    }
}

fn cells(r: &ResultRow) -> Vec<String> {
    vec![
        r.country.clone(),
        r.income_group.clone(),
        r.market_classification.clone(),
        r.year.clone(),
        r.dataset.clone(),
        format_value(r.value),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(country: &str, year: &str, value: Option<f64>) -> ResultRow {
        ResultRow {
            country: s!(country),
            income_group: s!("Upper"),
            market_classification: s!("EM"),
            year: s!(year),
            dataset: s!("GDP"),
            value,
        }
    }

    #[test]
    fn cells_follow_header_order() {
        let t = TableData::from_rows(&[row("Turkey", "2020", Some(750.5))]);
        assert_eq!(t.nrows(), 1);
        assert_eq!(t.rows[0], ["Turkey", "Upper", "EM", "2020", "GDP", "750.5"]);
    }

    #[test]
    fn missing_value_reads_na_and_integers_have_no_fraction() {
        assert_eq!(format_value(None), "N/A");
        assert_eq!(format_value(Some(1000.0)), "1000");
        assert_eq!(format_value(Some(-0.25)), "-0.25");
    }

    #[test]
    fn delimited_output_keeps_input_order() {
        let t = TableData::from_rows(&[
            row("Turkey", "2021", None),
            row("Chad", "2020", Some(3.0)),
        ]);
        let txt = t.to_delimited('\t', true);
        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Country\tIncome Group"));
        assert_eq!(lines[1], "Turkey\tUpper\tEM\t2021\tGDP\tN/A");
        assert_eq!(lines[2], "Chad\tUpper\tEM\t2020\tGDP\t3");
    }
}
