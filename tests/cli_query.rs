// tests/cli_query.rs
#![cfg(feature = "cli")]
mod common;

use std::sync::Arc;

use clap::Parser;
use common::*;
use income_explorer::{
    cli::{Args, Command, run_with},
    config::{
        args::{Launch, apply_gui_args},
        options::{AppOptions, EndpointMode, ExportFormat},
    },
    core::Locale,
};

fn backend() -> Arc<MockBackend> {
    Arc::new(
        MockBackend::new(options(&["Turkey", "Germany"], &["GDP", "GNI"], &["2020", "2019"]))
            .with_data(|q| {
                Ok(q.countries
                    .iter()
                    .map(|c| row(c, &q.years[0], &q.dataset, if c == "Turkey" { Some(750.5) } else { None }))
                    .collect())
            }),
    )
}

fn query(countries: &[&str], years: &[&str]) -> Command {
    Command::Query {
        countries: strings(countries),
        years: strings(years),
        dataset: None,
        format: ExportFormat::Csv,
        headers: true,
        chart: false,
    }
}

fn run(b: Arc<MockBackend>, cmd: &Command) -> (color_eyre::Result<()>, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let res = run_with(b, &AppOptions::default(), cmd, &mut out, &mut err);
    (res, String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
}

#[test]
fn query_prints_csv_with_headers() {
    let (res, out, _) = run(backend(), &query(&["Turkey", "Germany"], &["2020"]));
    assert!(res.is_ok());
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "Country,Income Group,EM and Developed Markets,Year,Dataset,Value");
    assert_eq!(lines[1], "Turkey,Upper,EM,2020,GDP,750.5");
    assert_eq!(lines[2], "Germany,Upper,EM,2020,GDP,N/A");
    assert_eq!(lines.len(), 3);
}

#[test]
fn chart_flag_prints_series() {
    let cmd = Command::Query {
        countries: strings(&["Turkey"]),
        years: strings(&["2020"]),
        dataset: Some("GNI".into()),
        format: ExportFormat::Tsv,
        headers: false,
        chart: true,
    };
    let b = backend();
    let (res, out, _) = run(b.clone(), &cmd);
    assert!(res.is_ok());
    assert!(out.starts_with("Turkey\tUpper\tEM\t2020\tGNI\t750.5\n"));
    assert!(out.contains("Turkey: 2020=750.5"));
    assert_eq!(b.queries.lock().unwrap()[0].dataset, "GNI");
}

#[test]
fn missing_year_is_an_error_and_sends_nothing() {
    let b = backend();
    let (res, out, _) = run(b.clone(), &query(&["Turkey"], &[]));
    let err = res.unwrap_err().to_string();
    assert_eq!(err, "Please select at least one country and one year.");
    assert!(out.is_empty());
    assert!(b.queries.lock().unwrap().is_empty());
}

#[test]
fn unknown_country_is_rejected() {
    let (res, _, _) = run(backend(), &query(&["Atlantis"], &["2020"]));
    assert!(res.unwrap_err().to_string().contains("Atlantis"));
}

#[test]
fn empty_result_is_a_notice_not_an_error() {
    let b = Arc::new(MockBackend::new(options(&["Chad"], &["GDP"], &["2020"])));
    let (res, out, err) = run(b, &query(&["Chad"], &["2020"]));
    assert!(res.is_ok());
    assert!(out.is_empty());
    assert_eq!(err.trim(), "No data found for the selected filters.");
}

#[test]
fn filters_failure_exits_with_banner_text() {
    let (res, _, _) = run(Arc::new(MockBackend::failing()), &Command::Filters { search: None });
    assert_eq!(res.unwrap_err().to_string(), "Failed to load filter data.");
}

#[test]
fn filters_lists_options() {
    let (res, out, _) = run(backend(), &Command::Filters { search: Some("t".into()) });
    assert!(res.is_ok());
    assert!(out.contains("Countries (1):\n  Turkey\n"));
    assert!(out.contains(" *GDP"));
    assert!(out.contains("  2020, 2019"));
}

#[test]
fn args_parse_into_options() {
    let args = Args::try_parse_from([
        "cli", "--url", "http://example.test/api/", "--split", "--locale", "root",
        "query", "-c", "Turkey", "-c", "Germany", "-y", "2020", "--format", "csv",
    ])
    .unwrap();
    let opts = args.options();
    assert_eq!(opts.net.base_url(), "http://example.test/api");
    assert_eq!(opts.net.endpoints, EndpointMode::Split);
    assert_eq!(opts.view.locale, Locale::Root);
    match args.command {
        Command::Query { countries, years, format, headers, .. } => {
            assert_eq!(countries, ["Turkey", "Germany"]);
            assert_eq!(years, ["2020"]);
            assert_eq!(format, ExportFormat::Csv);
            assert!(!headers);
        }
        other => panic!("unexpected command {:?}", other),
    }
}

#[test]
fn gui_and_cli_agree_on_shared_flags() {
    let shared = ["--url", "http://example.test/api/", "--split", "--locale", "root"];

    let mut gui = AppOptions::default();
    assert_eq!(apply_gui_args(&mut gui, shared.iter().map(|s| s.to_string())), Ok(Launch::Run));

    let mut argv = vec!["cli"];
    argv.extend(shared);
    argv.push("filters");
    let cli = Args::try_parse_from(argv).unwrap().options();

    assert_eq!(gui.net, cli.net);
    assert_eq!(gui.view, cli.view);
}
