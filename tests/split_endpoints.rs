// tests/split_endpoints.rs
//
// Older backends serve /countries, /datasets and /years separately, with
// years narrowed to a single selected country.
mod common;

use std::sync::Arc;
use std::time::Instant;

use common::*;
use income_explorer::{
    backend::Endpoint,
    config::options::EndpointMode,
    gui::screen::Screen,
    panel::{FilterPanel, view::Banner},
};

fn backend() -> MockBackend {
    MockBackend::new(options(&["Turkey", "Germany", "Chad"], &["GDP"], &["2021", "2020", "2019"]))
        .with_years(|country| match country {
            Some("Turkey") => Ok(strings(&["2020"])),
            Some(_) => Ok(strings(&["2021"])),
            None => Ok(strings(&["2021", "2020", "2019"])),
        })
}

#[test]
fn loads_each_endpoint_once() {
    let b = Arc::new(backend());
    let (panel, screen) = loaded(b.clone(), EndpointMode::Split);

    assert_eq!(b.count(Endpoint::Filters), 0);
    assert_eq!(b.count(Endpoint::Countries), 1);
    assert_eq!(b.count(Endpoint::Datasets), 1);
    assert_eq!(b.count(Endpoint::Years), 1);
    assert_eq!(*b.years_asked.lock().unwrap(), [None::<String>]);

    assert_eq!(values(&screen.countries), ["Chad", "Germany", "Turkey"]);
    assert_eq!(screen.dataset.as_deref(), Some("GDP"));
    assert_eq!(values(&screen.years), ["2021", "2020", "2019"]);
    assert!(!panel.is_busy());
}

#[test]
fn single_country_narrows_years() {
    let b = Arc::new(backend());
    let (mut panel, mut screen) = loaded(b.clone(), EndpointMode::Split);

    panel.toggle_year("2019", true, &mut screen);
    panel.toggle_country("Turkey", true, &mut screen);
    panel.poll(Instant::now(), &mut screen);
    assert_eq!(values(&screen.years), ["2020"]);
    // 2019 is no longer offered
    assert!(panel.selection().years().is_empty());

    panel.toggle_country("Germany", true, &mut screen);
    panel.poll(Instant::now(), &mut screen);
    assert_eq!(values(&screen.years), ["2021", "2020", "2019"]);

    assert_eq!(
        *b.years_asked.lock().unwrap(),
        [None, Some("Turkey".to_string()), None]
    );
}

#[test]
fn endpoint_failure_names_the_endpoint() {
    let (_panel, screen) = loaded(Arc::new(MockBackend::failing()), EndpointMode::Split);

    // countries failed first, then datasets; the banner shows the latest
    assert_eq!(screen.banner, Some(Banner::EndpointFailed(Endpoint::Datasets)));
    assert_eq!(
        screen.banner.as_ref().map(Banner::text).as_deref(),
        Some("Failed to load data from /datasets.")
    );
}

#[test]
fn stale_years_response_is_dropped() {
    let b = Arc::new(backend());
    let jobs = Deferred::default();
    let mut panel = FilterPanel::new(b, Box::new(jobs.clone()), EndpointMode::Split, &Default::default());
    let mut screen = Screen::default();

    panel.load_filters(&mut screen);
    assert_eq!(jobs.len(), 3);
    jobs.run_all();
    panel.poll(Instant::now(), &mut screen);

    panel.toggle_country("Turkey", true, &mut screen);   // job 3: years for Turkey
    panel.toggle_country("Germany", true, &mut screen);  // job 4: all years
    jobs.run(4);
    jobs.run(3);
    panel.poll(Instant::now(), &mut screen);

    assert_eq!(values(&screen.years), ["2021", "2020", "2019"]);
    assert!(!panel.is_busy());
}
