// src/backend.rs
//
// The read-only collaborator. Implementations block; the panel decides
// where they run (inline or on a worker thread) via `panel::tasks`.

use crate::config::consts::*;
use crate::core::error::FetchResult;
use crate::model::{DataQuery, FilterOptions, ResultRow};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Filters,
    Countries,
    Datasets,
    Years,
    Data,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Filters => FILTERS_PATH,
            Endpoint::Countries => COUNTRIES_PATH,
            Endpoint::Datasets => DATASETS_PATH,
            Endpoint::Years => YEARS_PATH,
            Endpoint::Data => DATA_PATH,
        }
    }
}

pub trait Backend: Send + Sync {
    /// `GET /filters`
    fn filters(&self) -> FetchResult<FilterOptions>;

    /// `GET /countries` (split endpoints)
    fn countries(&self) -> FetchResult<Vec<String>>;

    /// `GET /datasets` (split endpoints)
    fn datasets(&self) -> FetchResult<Vec<String>>;

    /// `GET /years`, optionally narrowed to one country (split endpoints)
    fn years(&self, country: Option<&str>) -> FetchResult<Vec<String>>;

    /// `GET /data?country=..&year=..&dataset=..`
    fn data(&self, query: &DataQuery) -> FetchResult<Vec<ResultRow>>;
}
