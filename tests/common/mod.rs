// tests/common/mod.rs
//
// In-memory backend and a queueing executor shared by the integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Instant;

use income_explorer::{
    backend::{Backend, Endpoint},
    config::options::{EndpointMode, ViewOptions},
    core::error::{FetchError, FetchResult},
    gui::screen::Screen,
    model::{DataQuery, FilterOptions, ResultRow},
    panel::{FilterPanel, tasks::{Inline, Job, Spawn}},
};

type DataFn = dyn Fn(&DataQuery) -> FetchResult<Vec<ResultRow>> + Send + Sync;
type YearsFn = dyn Fn(Option<&str>) -> FetchResult<Vec<String>> + Send + Sync;

pub struct MockBackend {
    filters: Mutex<FetchResult<FilterOptions>>,
    data: Box<DataFn>,
    years: Box<YearsFn>,
    pub calls: Mutex<Vec<Endpoint>>,
    pub queries: Mutex<Vec<DataQuery>>,
    pub years_asked: Mutex<Vec<Option<String>>>,
}

impl MockBackend {
    pub fn new(opts: FilterOptions) -> Self {
        let years = opts.years.clone();
        Self {
            filters: Mutex::new(Ok(opts)),
            data: Box::new(|_| Ok(Vec::new())),
            years: Box::new(move |_| Ok(years.clone())),
            calls: Mutex::new(Vec::new()),
            queries: Mutex::new(Vec::new()),
            years_asked: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        let b = Self::new(FilterOptions::default());
        b.set_filters(Err(FetchError::Http { url: "http://test/filters".into(), status: 500 }));
        b
    }

    /// What the next `/filters` (and split list) calls return.
    pub fn set_filters(&self, next: FetchResult<FilterOptions>) {
        *self.filters.lock().unwrap() = next;
    }

    pub fn with_data<F>(mut self, f: F) -> Self
    where
        F: Fn(&DataQuery) -> FetchResult<Vec<ResultRow>> + Send + Sync + 'static,
    {
        self.data = Box::new(f);
        self
    }

    pub fn with_years<F>(mut self, f: F) -> Self
    where
        F: Fn(Option<&str>) -> FetchResult<Vec<String>> + Send + Sync + 'static,
    {
        self.years = Box::new(f);
        self
    }

    pub fn count(&self, ep: Endpoint) -> usize {
        self.calls.lock().unwrap().iter().filter(|e| **e == ep).count()
    }

    fn hit(&self, ep: Endpoint) {
        self.calls.lock().unwrap().push(ep);
    }
}

impl Backend for MockBackend {
    fn filters(&self) -> FetchResult<FilterOptions> {
        self.hit(Endpoint::Filters);
        self.filters.lock().unwrap().clone()
    }

    fn countries(&self) -> FetchResult<Vec<String>> {
        self.hit(Endpoint::Countries);
        self.filters.lock().unwrap().clone().map(|f| f.countries)
    }

    fn datasets(&self) -> FetchResult<Vec<String>> {
        self.hit(Endpoint::Datasets);
        self.filters.lock().unwrap().clone().map(|f| f.datasets)
    }

    fn years(&self, country: Option<&str>) -> FetchResult<Vec<String>> {
        self.hit(Endpoint::Years);
        self.years_asked.lock().unwrap().push(country.map(String::from));
        (self.years)(country)
    }

    fn data(&self, query: &DataQuery) -> FetchResult<Vec<ResultRow>> {
        self.hit(Endpoint::Data);
        self.queries.lock().unwrap().push(query.clone());
        (self.data)(query)
    }
}

/// Holds jobs until the test runs them, in any order.
#[derive(Clone, Default)]
pub struct Deferred {
    jobs: Arc<Mutex<Vec<Option<Job>>>>,
}

impl Deferred {
    pub fn len(&self) -> usize {
        self.jobs.lock().unwrap().len()
    }

    /// Run the job queued at position `ix` (0 = first spawned).
    pub fn run(&self, ix: usize) {
        let job = self.jobs.lock().unwrap()[ix].take().expect("job already ran");
        job();
    }

    pub fn run_all(&self) {
        for ix in 0..self.len() {
            let job = self.jobs.lock().unwrap()[ix].take();
            if let Some(job) = job {
                job();
            }
        }
    }
}

impl Spawn for Deferred {
    fn spawn(&self, job: Job) -> Result<(), Job> {
        self.jobs.lock().unwrap().push(Some(job));
        Ok(())
    }
}

/// Never starts anything; every job comes straight back.
#[derive(Clone, Copy, Default)]
pub struct Refusing;

impl Spawn for Refusing {
    fn spawn(&self, job: Job) -> Result<(), Job> {
        Err(job)
    }
}

pub fn strings(xs: &[&str]) -> Vec<String> {
    xs.iter().map(|s| s.to_string()).collect()
}

pub fn options(countries: &[&str], datasets: &[&str], years: &[&str]) -> FilterOptions {
    FilterOptions {
        countries: strings(countries),
        datasets: strings(datasets),
        years: strings(years),
    }
}

pub fn row(country: &str, year: &str, dataset: &str, value: Option<f64>) -> ResultRow {
    ResultRow {
        country: country.into(),
        income_group: "Upper".into(),
        market_classification: "EM".into(),
        year: year.into(),
        dataset: dataset.into(),
        value,
    }
}

/// Panel with the inline executor, filters already loaded.
pub fn loaded(backend: Arc<MockBackend>, mode: EndpointMode) -> (FilterPanel, Screen) {
    let mut panel = FilterPanel::new(backend, Box::new(Inline), mode, &ViewOptions::default());
    let mut screen = Screen::default();
    panel.load_filters(&mut screen);
    panel.poll(Instant::now(), &mut screen);
    (panel, screen)
}

pub fn checked(entries: &[income_explorer::selection::CheckEntry]) -> Vec<String> {
    entries.iter().filter(|e| e.checked).map(|e| e.value.clone()).collect()
}

pub fn values(entries: &[income_explorer::selection::CheckEntry]) -> Vec<String> {
    entries.iter().map(|e| e.value.clone()).collect()
}
