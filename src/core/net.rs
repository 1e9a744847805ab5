// src/core/net.rs
//
// HTTP backend over reqwest's blocking client.
// One shared client (connection pool); every call is a plain GET + JSON.

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT as UA};
use serde::de::DeserializeOwned;

use crate::{
    backend::{Backend, Endpoint},
    config::{consts::USER_AGENT, options::NetOptions},
    model::{DataQuery, FilterOptions, ResultRow},
};
use super::error::{FetchError, FetchResult};

pub struct HttpBackend {
    client: Client,
    net: NetOptions,
}

impl HttpBackend {
    pub fn new(net: &NetOptions) -> FetchResult<Self> {
        let client = Client::builder()
            .timeout(net.timeout())
            .build()
            .map_err(|e| FetchError::Network { url: s!(net.base_url()), reason: e.to_string() })?;

        Ok(Self { client, net: net.clone() })
    }

    pub fn base_url(&self) -> &str { self.net.base_url() }

    fn get_json<T: DeserializeOwned>(&self, ep: Endpoint, query: &[(&str, String)]) -> FetchResult<T> {
        let url = self.net.url_for(ep.path());
        logd!("HTTP: GET {} params={:?}", url, query);

        let resp = self.client
            .get(&url)
            .header(UA, USER_AGENT)
            .header(ACCEPT, "application/json")
            .query(query)
            .send()
            .map_err(|e| FetchError::Network { url: url.clone(), reason: e.to_string() })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Http { url, status: status.as_u16() });
        }

        let body = resp
            .text()
            .map_err(|e| FetchError::Network { url: url.clone(), reason: e.to_string() })?;

        let parsed = serde_json::from_str(&body)
            .map_err(|e| FetchError::Decode { url: url.clone(), reason: e.to_string() })?;
        logd!("HTTP: {} OK ({} bytes)", url, body.len());
        Ok(parsed)
    }

    /// Flat string arrays (`/countries`, `/datasets`, `/years`).
    fn get_labels(&self, ep: Endpoint, query: &[(&str, String)]) -> FetchResult<Vec<String>> {
        // Years come back as integers from older backends
        let raw: Vec<serde_json::Value> = self.get_json(ep, query)?;
        Ok(raw.into_iter().filter_map(label_of).collect())
    }
}

fn label_of(v: serde_json::Value) -> Option<String> {
    match v {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

impl Backend for HttpBackend {
    fn filters(&self) -> FetchResult<FilterOptions> {
        self.get_json(Endpoint::Filters, &[])
    }

    fn countries(&self) -> FetchResult<Vec<String>> {
        self.get_labels(Endpoint::Countries, &[])
    }

    fn datasets(&self) -> FetchResult<Vec<String>> {
        self.get_labels(Endpoint::Datasets, &[])
    }

    fn years(&self, country: Option<&str>) -> FetchResult<Vec<String>> {
        let query: Vec<(&str, String)> = country.map(|c| ("country", s!(c))).into_iter().collect();
        self.get_labels(Endpoint::Years, &query)
    }

    fn data(&self, query: &DataQuery) -> FetchResult<Vec<ResultRow>> {
        self.get_json(Endpoint::Data, &query.pairs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_keep_strings_and_numbers() {
        let raw = vec![
            serde_json::json!("2020"),
            serde_json::json!(2021),
            serde_json::Value::Null,
        ];
        let out: Vec<String> = raw.into_iter().filter_map(label_of).collect();
        assert_eq!(out, ["2020", "2021"]);
    }

    #[test]
    fn unreachable_host_is_a_network_error() {
        let mut net = NetOptions::default();
        // Port 9 (discard) on loopback: nothing listens in CI
        net.set_base_url("http://127.0.0.1:9");
        net.timeout_secs = 2;
        let backend = HttpBackend::new(&net).unwrap();
        match backend.filters() {
            Err(FetchError::Network { url, .. }) => assert!(url.ends_with("/filters")),
            other => panic!("expected network error, got {other:?}"),
        }
    }
}
