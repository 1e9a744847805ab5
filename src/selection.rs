// src/selection.rs
//
// What the user has picked, and the derived country checklist.
//
// - SelectionState: chosen countries/years (insertion-ordered sets) and the
//                   single dataset. Only user events mutate it.
// - CheckEntry:     one row of a checklist (value + checked flag).
// - country_list:   the visible checklist for a search query, selected first.

use crate::core::collate::Locale;
use crate::model::{DataQuery, FilterOptions};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    countries: Vec<String>,
    years: Vec<String>,
    dataset: Option<String>,
}

impl SelectionState {
    pub fn countries(&self) -> &[String] { &self.countries }
    pub fn years(&self) -> &[String] { &self.years }
    pub fn dataset(&self) -> Option<&str> { self.dataset.as_deref() }

    #[inline]
    pub fn has_country(&self, c: &str) -> bool { self.countries.iter().any(|x| x == c) }
    #[inline]
    pub fn has_year(&self, y: &str) -> bool { self.years.iter().any(|x| x == y) }

    /// Returns true if the set changed.
    pub fn set_country(&mut self, country: &str, checked: bool) -> bool {
        set_member(&mut self.countries, country, checked)
    }

    pub fn set_year(&mut self, year: &str, checked: bool) -> bool {
        set_member(&mut self.years, year, checked)
    }

    pub fn set_dataset(&mut self, dataset: Option<&str>) -> bool {
        let next = dataset.map(String::from);
        if self.dataset == next { return false; }
        self.dataset = next;
        true
    }

    pub fn select_countries<'a, I>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        names.into_iter().filter(|n| self.set_country(n, true)).count()
    }

    pub fn clear_countries(&mut self) -> usize {
        std::mem::take(&mut self.countries).len()
    }

    /// Drop countries no longer offered. Returns how many were removed.
    pub fn retain_countries(&mut self, known: &[String]) -> usize {
        retain_known(&mut self.countries, known)
    }

    /// Drop years no longer offered. Returns how many were removed.
    pub fn retain_years(&mut self, known: &[String]) -> usize {
        retain_known(&mut self.years, known)
    }

    /// Keep the dataset if still offered, otherwise fall back to the first one
    /// (what a freshly populated single-select shows).
    pub fn reconcile_dataset(&mut self, known: &[String]) {
        let keep = self.dataset.as_ref().is_some_and(|d| known.contains(d));
        if !keep {
            self.dataset = known.first().cloned();
        }
    }

    /// Prune against a complete options set.
    pub fn reconcile(&mut self, opts: &FilterOptions) -> usize {
        let pruned = self.retain_countries(&opts.countries) + self.retain_years(&opts.years);
        self.reconcile_dataset(&opts.datasets);
        pruned
    }

    /// `None` unless at least one country and one year are selected.
    pub fn to_query(&self) -> Option<DataQuery> {
        if self.countries.is_empty() || self.years.is_empty() {
            return None;
        }
        Some(DataQuery {
            countries: self.countries.clone(),
            years: self.years.clone(),
            dataset: self.dataset.clone().unwrap_or_default(),
        })
    }
}

fn set_member(set: &mut Vec<String>, value: &str, present: bool) -> bool {
    let pos = set.iter().position(|x| x == value);
    match (present, pos) {
        (true, None) => { set.push(s!(value)); true }
        (false, Some(i)) => { set.remove(i); true }
        _ => false,
    }
}

fn retain_known(set: &mut Vec<String>, known: &[String]) -> usize {
    let before = set.len();
    set.retain(|x| known.contains(x));
    before - set.len()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckEntry {
    pub value: String,
    pub checked: bool,
}

/// Visible country checklist.
///
/// `sorted` must already be in collation order. Entries whose lowercased name
/// starts with the lowercased `query` are kept; selected ones move to the top,
/// and both groups keep collation order.
pub fn country_list(
    sorted: &[String],
    sel: &SelectionState,
    query: &str,
    locale: Locale,
) -> Vec<CheckEntry> {
    let needle = locale.to_lower(query);

    let (mut picked, rest): (Vec<CheckEntry>, Vec<CheckEntry>) = sorted
        .iter()
        .filter(|c| needle.is_empty() || locale.to_lower(c).starts_with(&needle))
        .map(|c| CheckEntry { value: c.clone(), checked: sel.has_country(c) })
        .partition(|e| e.checked);

    picked.extend(rest);
    picked
}

/// Year checklist in backend order.
pub fn year_list(years: &[String], sel: &SelectionState) -> Vec<CheckEntry> {
    years
        .iter()
        .map(|y| CheckEntry { value: y.clone(), checked: sel.has_year(y) })
        .collect()
}
