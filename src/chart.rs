// src/chart.rs
//
// Line chart model: one series per country, x = years (descending),
// y = value, with a gap wherever the backend had no value.

use std::cmp::Ordering;

use crate::model::ResultRow;

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    /// Aligned with `ChartModel::years`; `None` is a gap.
    pub points: Vec<Option<f64>>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartModel {
    pub years: Vec<String>,
    pub series: Vec<Series>,
}

impl ChartModel {
    pub fn from_rows(rows: &[ResultRow]) -> Self {
        let mut years: Vec<String> = Vec::new();
        for r in rows {
            if !years.contains(&r.year) {
                years.push(r.year.clone());
            }
        }
        years.sort_by(|a, b| year_order(b, a));

        let mut series: Vec<Series> = Vec::new();
        for r in rows {
            let ix = match series.iter().position(|s| s.name == r.country) {
                Some(ix) => ix,
                None => {
                    series.push(Series { name: r.country.clone(), points: vec![None; years.len()] });
                    series.len() - 1
                }
            };
            if let Some(yx) = years.iter().position(|y| *y == r.year) {
                // A later duplicate only fills, never erases
                if r.value.is_some() {
                    series[ix].points[yx] = r.value;
                }
            }
        }

        Self { years, series }
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// (min, max) over all present values.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .flat_map(|s| s.points.iter().flatten().copied())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    pub fn point(&self, country: &str, year: &str) -> Option<f64> {
        let yx = self.years.iter().position(|y| y == year)?;
        self.series.iter().find(|s| s.name == country)?.points[yx]
    }
}

/// Numeric when both parse, text otherwise.
fn year_order(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.cmp(b),
    }
}
