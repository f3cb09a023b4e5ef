use anyhow::{Context, Result};
use clap::ArgMatches;
use happiness_report::config::ReportConfig;
use std::fs;
use std::path::Path;

use crate::util::{validate_input_file, TABLE_EXTENSIONS};

/// Load a report configuration from a JSON file.
///
/// Missing or invalid fields keep their defaults and are logged.
pub fn load_report_config<P: AsRef<Path>>(config_path: P) -> Result<ReportConfig> {
    let config_path = config_path.as_ref();
    let config_json = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

    let partial: serde_json::Value = serde_json::from_str(&config_json)
        .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
    let mut config = ReportConfig::default();

    macro_rules! load_or_default {
        ($field:ident) => {
            if let Some(val) = partial.get(stringify!($field)) {
                if let Ok(parsed) = serde_json::from_value(val.clone()) {
                    config.$field = parsed;
                } else {
                    log::warn!(
                        "Config Invalid value for '{}', using default: {:?}",
                        stringify!($field), config.$field
                    );
                }
            } else {
                log::debug!(
                    "Config Missing field '{}', using default: {:?}",
                    stringify!($field), config.$field
                );
            }
        };
    }

    load_or_default!(data_path);
    load_or_default!(descriptions_path);
    load_or_default!(output_file);
    load_or_default!(title);
    load_or_default!(year);
    load_or_default!(country);
    load_or_default!(comparisons);
    load_or_default!(metric);

    Ok(config)
}

/// Start from the config file named by the `config` argument, or defaults.
pub fn base_config(matches: &ArgMatches) -> Result<ReportConfig> {
    match matches.get_one::<String>("config") {
        Some(path) => {
            log::info!("[Happiness] Using config: {}", path);
            load_report_config(path)
        }
        None => {
            log::info!("[Happiness] No config file provided; using defaults.");
            Ok(ReportConfig::default())
        }
    }
}

/// Apply `--data` / `--descriptions` and check both inputs exist.
pub fn apply_input_overrides(config: &mut ReportConfig, matches: &ArgMatches) -> Result<()> {
    if let Some(data) = matches.get_one::<String>("data") {
        config.data_path = data.clone();
    }
    if let Some(descriptions) = matches.get_one::<String>("descriptions") {
        config.descriptions_path = descriptions.clone();
    }
    validate_input_file(&config.data_path, &TABLE_EXTENSIONS)?;
    validate_input_file(&config.descriptions_path, &TABLE_EXTENSIONS)?;
    Ok(())
}

/// Apply the selection and output flags shared by `render` and `interactive`.
pub fn apply_selection_overrides(config: &mut ReportConfig, matches: &ArgMatches) {
    if let Some(year) = matches.get_one::<i32>("year") {
        config.year = Some(*year);
    }
    if let Some(country) = matches.get_one::<String>("country") {
        config.country = Some(country.clone());
    }
    if let Some(compare) = matches.get_many::<String>("compare") {
        config.comparisons = Some(compare.cloned().collect());
    }
    if let Some(metric) = matches.get_one::<String>("metric") {
        config.metric = Some(metric.clone());
    }
    if let Some(output_file) = matches.get_one::<String>("output_file") {
        config.output_file = output_file.clone();
    }
}
