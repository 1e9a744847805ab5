// src/cli.rs
//
// Command-line frontend. Drives the same FilterPanel as the GUI, with the
// inline executor, and prints what the panel ends up showing.

use std::{io::{self, Write}, sync::Arc, time::Instant};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{bail, eyre};

use crate::{
    backend::Backend,
    chart::{ChartModel, Series},
    config::{
        consts::{BASE_URL_ENV, DEFAULT_BASE_URL, REQUEST_TIMEOUT_SECS},
        options::{AppOptions, EndpointMode, ExportFormat},
    },
    core::{collate::Locale, net::HttpBackend},
    panel::{
        FilterPanel, Phase, Submitted,
        tasks::Inline,
        view::{Banner, Choice, PanelView},
    },
    selection::CheckEntry,
    table::{TableData, format_value},
};

#[derive(Parser, Debug)]
#[command(name = "cli", version, about = "Query the income classification API from the terminal")]
pub struct Args {
    /// Backend base URL
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub url: String,

    /// Use the older /countries, /datasets, /years endpoints
    #[arg(long)]
    pub split: bool,

    /// Collation for sorting and search (tr, root)
    #[arg(long, default_value = "tr", value_parser = parse_locale)]
    pub locale: Locale,

    /// Request timeout in seconds
    #[arg(long, default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the available countries, datasets and years
    Filters {
        /// Only countries starting with this text
        #[arg(long)]
        search: Option<String>,
    },
    /// Submit a selection and print the rows
    Query {
        /// Country to include (repeatable)
        #[arg(short = 'c', long = "country")]
        countries: Vec<String>,

        /// Year to include (repeatable)
        #[arg(short = 'y', long = "year")]
        years: Vec<String>,

        /// Dataset (defaults to the first one offered)
        #[arg(short = 'd', long)]
        dataset: Option<String>,

        #[arg(long, value_enum, default_value_t = ExportFormat::Tsv)]
        format: ExportFormat,

        /// Print a header row
        #[arg(long)]
        headers: bool,

        /// Also print one line per chart series
        #[arg(long)]
        chart: bool,
    },
}

fn parse_locale(s: &str) -> Result<Locale, String> {
    Locale::parse(s).ok_or_else(|| format!("unknown locale '{}' (expected tr or root)", s))
}

impl Args {
    pub fn options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        opts.net.set_base_url(&self.url);
        opts.net.timeout_secs = self.timeout;
        if self.split {
            opts.net.endpoints = EndpointMode::Split;
        }
        opts.view.locale = self.locale;
        opts
    }
}

pub fn run() -> color_eyre::Result<()> {
    let args = Args::parse();
    let opts = args.options();
    logf!("CLI: url={}, endpoints={:?}, command={:?}", opts.net.base_url(), opts.net.endpoints, args.command);

    let backend: Arc<dyn Backend> = Arc::new(HttpBackend::new(&opts.net)?);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(backend, &opts, &args.command, &mut out, &mut io::stderr())
}

/// Run one command against `backend`. Rows go to `out`, notices to `err`.
/// Any error banner the panel raises becomes the returned error.
pub fn run_with(
    backend: Arc<dyn Backend>,
    opts: &AppOptions,
    command: &Command,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> color_eyre::Result<()> {
    // CLI has nothing to wait for between keystrokes
    let mut view_opts = opts.view.clone();
    view_opts.debounce_ms = 0;

    let mut panel = FilterPanel::new(backend, Box::new(Inline), opts.net.endpoints, &view_opts);
    let mut view = TextView;

    panel.load_filters(&mut view);
    settle(&mut panel, &mut view)?;

    match command {
        Command::Filters { search } => {
            if let Some(q) = search {
                panel.on_search_input(q, Instant::now());
                panel.flush_search(&mut view);
            }
            print_filters(&panel, out)?;
        }
        Command::Query { countries, years, dataset, format, headers, chart } => {
            for c in countries {
                if !panel.options().countries.contains(c) {
                    bail!("Unknown country: {}", c);
                }
                panel.toggle_country(c, true, &mut view);
                settle(&mut panel, &mut view)?;
            }
            for y in years {
                if !panel.options().years.contains(y) {
                    bail!("Unknown year: {}", y);
                }
                panel.toggle_year(y, true, &mut view);
            }
            if let Some(d) = dataset {
                if !panel.options().datasets.contains(d) {
                    bail!("Unknown dataset: {}", d);
                }
                panel.on_dataset_change(&Choice(Some(d.as_str())), &mut view);
            }

            if let Submitted::Sent(seq) = panel.submit(&mut view) {
                logd!("CLI: Submitted #{}", seq);
            }
            settle(&mut panel, &mut view)?;

            match panel.phase() {
                Phase::Rendered => {
                    out.write_all(panel.table().to_delimited(format.delim(), *headers).as_bytes())?;
                    if *chart {
                        if let Some(model) = panel.chart() {
                            print_chart(model, out)?;
                        }
                    }
                }
                Phase::Empty => {
                    writeln!(err, "{}", Banner::NoData.text())?;
                }
                phase => {
                    let msg = panel.banner().map(Banner::text).unwrap_or_else(|| format!("{:?}", phase));
                    return Err(eyre!(msg));
                }
            }
        }
    }

    out.flush()?;
    Ok(())
}

/// Apply finished requests; fail if the filter options could not be loaded.
fn settle(panel: &mut FilterPanel, view: &mut TextView) -> color_eyre::Result<()> {
    panel.poll(Instant::now(), view);
    match panel.banner() {
        Some(b @ (Banner::FiltersFailed | Banner::EndpointFailed(_))) => Err(eyre!(b.text())),
        _ => Ok(()),
    }
}

fn print_filters(panel: &FilterPanel, out: &mut dyn Write) -> io::Result<()> {
    let countries = panel.visible_countries();
    writeln!(out, "Countries ({}):", countries.len())?;
    for c in &countries {
        writeln!(out, "  {}", c.value)?;
    }

    let datasets = &panel.options().datasets;
    writeln!(out, "Datasets ({}):", datasets.len())?;
    for d in datasets {
        let mark = if panel.selection().dataset() == Some(d.as_str()) { "*" } else { " " };
        writeln!(out, " {}{}", mark, d)?;
    }

    let years = &panel.options().years;
    writeln!(out, "Years ({}):", years.len())?;
    writeln!(out, "  {}", years.join(", "))?;
    Ok(())
}

fn print_chart(chart: &ChartModel, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out)?;
    for Series { name, points } in &chart.series {
        let parts: Vec<String> = chart
            .years
            .iter()
            .zip(points)
            .map(|(y, v)| format!("{}={}", y, format_value(*v)))
            .collect();
        writeln!(out, "{}: {}", name, parts.join(", "))?;
    }
    Ok(())
}

/// The terminal has no widgets; it only traces what the panel rendered.
struct TextView;

impl PanelView for TextView {
    fn render_countries(&mut self, entries: &[CheckEntry]) {
        logd!("CLI: {} countries listed", entries.len());
    }

    fn render_datasets(&mut self, datasets: &[String], selected: Option<&str>) {
        logd!("CLI: {} datasets, selected {:?}", datasets.len(), selected);
    }

    fn render_years(&mut self, entries: &[CheckEntry]) {
        logd!("CLI: {} years listed", entries.len());
    }

    fn show_banner(&mut self, banner: &Banner) {
        logd!("CLI: Banner {:?}", banner.text());
    }

    fn hide_banner(&mut self) {}

    fn render_table(&mut self, table: &TableData) {
        logd!("CLI: Table {} rows", table.nrows());
    }

    fn clear_table(&mut self) {}

    fn render_chart(&mut self, chart: &ChartModel) {
        logd!("CLI: Chart {} series", chart.series.len());
    }

    fn clear_chart(&mut self) {}
}
