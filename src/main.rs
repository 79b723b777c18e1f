use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;

use customer_validation::logging::init_logging;
use customer_validation::{
    load_csv, sample_customers, CustomerRecord, CustomerValidator, ValidationReport,
    ValidatorConfig, VERSION,
};

const USAGE: &str = "\
Usage: customer-validation [validate <customers.csv>] [options]

Without a command, validates the built-in sample customers.

Options:
  --json             Print the report as JSON
  --summary          Print batch statistics after the report
  --config <file>    Load validator settings from a JSON file
  -v, -vv            Increase log verbosity (RUST_LOG overrides)
  -h, --help         Show this help
  -V, --version      Show version";

#[derive(Debug, Default)]
struct Options {
    input: Option<PathBuf>,
    config: Option<PathBuf>,
    json: bool,
    summary: bool,
    verbosity: u8,
    help: bool,
    version: bool,
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = parse_args(&args)?;

    if options.help {
        println!("{}", USAGE);
        return Ok(());
    }
    if options.version {
        println!("customer-validation {}", VERSION);
        return Ok(());
    }

    init_logging(options.verbosity);

    run(&options)
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "validate" => {
                let path = iter.next().context("validate needs a CSV file path")?;
                options.input = Some(PathBuf::from(path));
            }
            "--config" => {
                let path = iter.next().context("--config needs a file path")?;
                options.config = Some(PathBuf::from(path));
            }
            "--json" => options.json = true,
            "--summary" => options.summary = true,
            "-v" => options.verbosity = options.verbosity.saturating_add(1),
            "-vv" => options.verbosity = options.verbosity.saturating_add(2),
            "-h" | "--help" => options.help = true,
            "-V" | "--version" => options.version = true,
            other => bail!("unknown argument '{}'\n\n{}", other, USAGE),
        }
    }

    Ok(options)
}

fn run(options: &Options) -> Result<()> {
    let config = match &options.config {
        Some(path) => ValidatorConfig::from_file(path)?,
        None => ValidatorConfig::default(),
    }
    .with_env_overrides();

    let customers: Vec<CustomerRecord> = match &options.input {
        Some(path) => load_csv(path)?,
        None => sample_customers(),
    };

    let validator = CustomerValidator::with_config(config);
    let report = validator.validate_batch(&customers);

    if options.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    } else {
        print_report(&report);
    }

    if options.summary {
        println!("\n{}", report.summary().summary());
    }

    Ok(())
}

fn print_report(report: &ValidationReport) {
    for (key, errors) in report.iter() {
        if errors.is_empty() {
            println!("{}: []", key);
            continue;
        }

        println!("{}:", key);
        for error in errors {
            println!("  - {}", error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_args_defaults() {
        let options = parse_args(&[]).unwrap();

        assert!(options.input.is_none());
        assert!(!options.json);
        assert_eq!(options.verbosity, 0);
    }

    #[test]
    fn test_parse_args_validate_with_flags() {
        let options =
            parse_args(&args(&["validate", "customers.csv", "--json", "--summary", "-vv"]))
                .unwrap();

        assert_eq!(options.input, Some(PathBuf::from("customers.csv")));
        assert!(options.json);
        assert!(options.summary);
        assert_eq!(options.verbosity, 2);
    }

    #[test]
    fn test_parse_args_missing_path() {
        assert!(parse_args(&args(&["validate"])).is_err());
        assert!(parse_args(&args(&["--config"])).is_err());
    }

    #[test]
    fn test_parse_args_help_and_version() {
        assert!(parse_args(&args(&["--json", "-h"])).unwrap().help);
        assert!(parse_args(&args(&["--version"])).unwrap().version);
    }

    #[test]
    fn test_parse_args_dash_path_after_validate() {
        let options = parse_args(&args(&["validate", "-h"])).unwrap();

        assert_eq!(options.input, Some(PathBuf::from("-h")));
        assert!(!options.help);
    }

    #[test]
    fn test_parse_args_unknown() {
        assert!(parse_args(&args(&["--frobnicate"])).is_err());
    }
}
