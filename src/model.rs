// src/model.rs
//
// Wire types for the income API.
//
// - FilterOptions: what the filter controls offer (countries/datasets/years).
// - ResultRow:     one record from `/data`; keys follow the backend's column names.
// - DataQuery:     a validated submission, flattened into repeated query pairs.
//
// The backend is loose about types (years come back as integers from SQLite,
// text columns may be null), so labels accept strings or numbers.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FilterOptions {
    #[serde(default, deserialize_with = "labels")]
    pub countries: Vec<String>,
    #[serde(default, deserialize_with = "labels")]
    pub datasets: Vec<String>,
    #[serde(default, deserialize_with = "labels")]
    pub years: Vec<String>,
}

impl FilterOptions {
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty() && self.datasets.is_empty() && self.years.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ResultRow {
    #[serde(rename = "Country", default, deserialize_with = "text")]
    pub country: String,
    #[serde(rename = "Income Group", default, deserialize_with = "text")]
    pub income_group: String,
    #[serde(rename = "EM and Developed Markets", default, deserialize_with = "text")]
    pub market_classification: String,
    #[serde(rename = "Year", default, deserialize_with = "text")]
    pub year: String,
    #[serde(rename = "Dataset", default, deserialize_with = "text")]
    pub dataset: String,
    #[serde(rename = "Value", default, deserialize_with = "value")]
    pub value: Option<f64>,
}

/// A submission that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataQuery {
    pub countries: Vec<String>,
    pub years: Vec<String>,
    pub dataset: String,
}

impl DataQuery {
    /// `country` and `year` repeat once per value; `dataset` appears once.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::with_capacity(self.countries.len() + self.years.len() + 1);
        out.extend(self.countries.iter().map(|c| ("country", c.clone())));
        out.extend(self.years.iter().map(|y| ("year", y.clone())));
        out.push(("dataset", self.dataset.clone()));
        out
    }
}

/* ---------------- lenient field decoding ---------------- */

#[derive(Deserialize)]
#[serde(untagged)]
enum Label {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Label {
    fn into_string(self) -> String {
        match self {
            Label::Text(s) => s,
            Label::Int(i) => i.to_string(),
            Label::Float(f) => f.to_string(),
            Label::Bool(b) => b.to_string(),
        }
    }
}

fn labels<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    let raw: Option<Vec<Option<Label>>> = Option::deserialize(d)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .map(Label::into_string)
        .collect())
}

fn text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    let raw: Option<Label> = Option::deserialize(d)?;
    Ok(raw.map(Label::into_string).unwrap_or_default())
}

fn value<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    let raw: Option<Label> = Option::deserialize(d)?;
    Ok(match raw {
        Some(Label::Int(i)) => Some(i as f64),
        Some(Label::Float(f)) if f.is_finite() => Some(f),
        Some(Label::Text(s)) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_accept_numeric_years() {
        let json = r#"{"countries":["Turkey","Germany"],"datasets":["GDP"],"years":[2021,"2020",null]}"#;
        let f: FilterOptions = serde_json::from_str(json).unwrap();
        assert_eq!(f.countries, ["Turkey", "Germany"]);
        assert_eq!(f.years, ["2021", "2020"]);
    }

    #[test]
    fn filters_missing_keys_default_to_empty() {
        let f: FilterOptions = serde_json::from_str(r#"{"countries":["A"]}"#).unwrap();
        assert!(f.datasets.is_empty());
        assert!(f.years.is_empty());
        assert!(!f.is_empty());
    }

    #[test]
    fn row_uses_backend_column_names() {
        let json = r#"{
            "Country": "Turkey",
            "Income Group": "Upper",
            "EM and Developed Markets": "EM",
            "Year": 2020,
            "Dataset": "GDP",
            "Value": 750.5
        }"#;
        let r: ResultRow = serde_json::from_str(json).unwrap();
        assert_eq!(r.country, "Turkey");
        assert_eq!(r.income_group, "Upper");
        assert_eq!(r.market_classification, "EM");
        assert_eq!(r.year, "2020");
        assert_eq!(r.dataset, "GDP");
        assert_eq!(r.value, Some(750.5));
    }

    #[test]
    fn null_value_and_null_text() {
        let json = r#"{"Country":"Chad","Income Group":null,"Year":"2019","Dataset":"GDP","Value":null}"#;
        let r: ResultRow = serde_json::from_str(json).unwrap();
        assert_eq!(r.income_group, "");
        assert_eq!(r.market_classification, "");
        assert_eq!(r.value, None);
    }

    #[test]
    fn query_pairs_repeat_multi_values() {
        let q = DataQuery {
            countries: vec![s!("Turkey"), s!("Germany")],
            years: vec![s!("2020"), s!("2021")],
            dataset: s!("GDP"),
        };
        let keys: Vec<&str> = q.pairs().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["country", "country", "year", "year", "dataset"]);
        assert_eq!(q.pairs()[1].1, "Germany");
    }
}
