// src/config/args.rs
//
// GUI launch flags. The window binary has no `cli` feature, so clap is not
// available here; the flag names match the CLI's global options.

use super::options::{AppOptions, EndpointMode};
use crate::core::collate::Locale;

pub const GUI_USAGE: &str = "Usage: income_explorer [--url <base>] [--split] [--locale tr|root] [--no-chart]";

#[derive(Debug, PartialEq, Eq)]
pub enum Launch {
    Run,
    Help,
}

/// Apply flags (program name already skipped) on top of `opts`.
pub fn apply_gui_args<I>(opts: &mut AppOptions, args: I) -> Result<Launch, String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--url" => {
                let v = args.next().ok_or("Missing value for --url")?;
                opts.net.set_base_url(&v);
            }
            "--split" => opts.net.endpoints = EndpointMode::Split,
            "--locale" => {
                let v = args.next().ok_or("Missing value for --locale")?;
                opts.view.locale = Locale::parse(&v).ok_or_else(|| format!("Unknown locale: {}", v))?;
            }
            "--no-chart" => opts.view.show_chart = false,
            "-h" | "--help" => return Ok(Launch::Help),
            _ => return Err(format!("Unknown arg: {}", a)),
        }
    }
    Ok(Launch::Run)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn flags_override_defaults() {
        let mut opts = AppOptions::default();
        let out = apply_gui_args(&mut opts, args(&["--url", "http://h:1/", "--split", "--locale", "root", "--no-chart"]));
        assert_eq!(out, Ok(Launch::Run));
        assert_eq!(opts.net.base_url(), "http://h:1");
        assert_eq!(opts.net.endpoints, EndpointMode::Split);
        assert_eq!(opts.view.locale, Locale::Root);
        assert!(!opts.view.show_chart);
    }

    #[test]
    fn bad_input_is_reported() {
        let mut opts = AppOptions::default();
        assert_eq!(apply_gui_args(&mut opts, args(&["--url"])), Err(s!("Missing value for --url")));
        assert_eq!(apply_gui_args(&mut opts, args(&["--locale", "xx"])), Err(s!("Unknown locale: xx")));
        assert_eq!(apply_gui_args(&mut opts, args(&["--bogus"])), Err(s!("Unknown arg: --bogus")));
        assert_eq!(apply_gui_args(&mut opts, args(&["-h"])), Ok(Launch::Help));
    }
}
