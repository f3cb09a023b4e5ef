use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use happiness_cli::interactive::run_interactive;
use happiness_cli::report::input::{apply_input_overrides, apply_selection_overrides, base_config};
use happiness_cli::report::options::format_options;
use happiness_cli::report::render::{load_session, run_render};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("HAPPINESS_LOG", "error,happiness=info"))
        .init();

    let matches = Command::new("happiness")
        .version(clap::crate_version!())
        .about("World Happiness Report builder - filtered tables, year-over-year metrics and line charts")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("render")
                .about("Render an HTML report for one selection")
                .arg(config_arg())
                .args(input_args())
                .args(selection_args())
                .arg(
                    Arg::new("chart_spec")
                        .long("chart-spec")
                        .help("Also write the line chart specification as JSON to this path")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("options")
                .about("List the years, countries and metrics available for selection")
                .arg(config_arg())
                .args(input_args()),
        )
        .subcommand(
            Command::new("interactive")
                .about("Read selection changes from stdin and re-render the report after each one")
                .arg(config_arg())
                .args(input_args())
                .args(selection_args()),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    let outcome = match matches.subcommand() {
        Some(("render", sub_m)) => handle_render(sub_m),
        Some(("options", sub_m)) => handle_options(sub_m),
        Some(("interactive", sub_m)) => handle_interactive(sub_m),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    };

    if let Err(e) = outcome {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn config_arg() -> Arg {
    Arg::new("config")
        .help("Path to report JSON configuration file")
        .required(false)
        .value_parser(clap::builder::NonEmptyStringValueParser::new())
        .value_hint(ValueHint::FilePath)
}

fn input_args() -> Vec<Arg> {
    vec![
        Arg::new("data")
            .short('d')
            .long("data")
            .value_parser(clap::builder::NonEmptyStringValueParser::new())
            .help(
                "Path to the happiness CSV. Overrides the data file \
                 specified in the configuration file.",
            )
            .value_hint(ValueHint::FilePath),
        Arg::new("descriptions")
            .long("descriptions")
            .value_parser(clap::builder::NonEmptyStringValueParser::new())
            .help(
                "Path to the semicolon-separated column descriptions. Overrides the \
                 descriptions file specified in the configuration file.",
            )
            .value_hint(ValueHint::FilePath),
    ]
}

fn selection_args() -> Vec<Arg> {
    vec![
        Arg::new("year")
            .short('y')
            .long("year")
            .help("Year to generate the report for")
            .value_parser(clap::value_parser!(i32)),
        Arg::new("country")
            .short('c')
            .long("country")
            .help("Country to generate the report for")
            .value_parser(clap::builder::NonEmptyStringValueParser::new()),
        Arg::new("compare")
            .long("compare")
            .help("Countries to compare with the selected country")
            .num_args(1..)
            .action(ArgAction::Append)
            .value_parser(clap::builder::NonEmptyStringValueParser::new()),
        Arg::new("metric")
            .short('m')
            .long("metric")
            .help("Column to draw in the line chart")
            .value_parser(clap::builder::NonEmptyStringValueParser::new()),
        Arg::new("output_file")
            .short('o')
            .long("output")
            .help("Path to write the HTML report. Overrides the output file in the configuration file.")
            .value_parser(clap::builder::NonEmptyStringValueParser::new())
            .value_hint(ValueHint::FilePath),
    ]
}

fn handle_render(matches: &ArgMatches) -> Result<()> {
    let mut config = base_config(matches)?;
    apply_input_overrides(&mut config, matches)?;
    apply_selection_overrides(&mut config, matches);

    if matches.get_one::<String>("config").is_none() {
        let default_json = serde_json::to_string_pretty(&config).unwrap_or_default();
        println!("{}", default_json);
    }

    let chart_spec = matches.get_one::<PathBuf>("chart_spec");
    run_render(&config, chart_spec.map(PathBuf::as_path), clap::crate_version!())
}

fn handle_options(matches: &ArgMatches) -> Result<()> {
    let mut config = base_config(matches)?;
    apply_input_overrides(&mut config, matches)?;
    let session = load_session(&config)?;
    print!("{}", format_options(&session));
    Ok(())
}

fn handle_interactive(matches: &ArgMatches) -> Result<()> {
    let mut config = base_config(matches)?;
    apply_input_overrides(&mut config, matches)?;
    apply_selection_overrides(&mut config, matches);
    let session = load_session(&config)?;
    let stdin = std::io::stdin();
    run_interactive(&session, &config, stdin.lock(), clap::crate_version!())?;
    Ok(())
}
