//! Line-driven report session: each accepted command re-renders the report.
use std::io::BufRead;

use anyhow::{anyhow, Context, Result};
use happiness_report::config::ReportConfig;
use happiness_report::{ReportSession, Selection};

use crate::report::output::{summarize, write_report};

/// A single control change read from the session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Year(i32),
    Country(String),
    Compare(Vec<String>),
    Metric(String),
    Show,
    Quit,
}

pub const HELP: &str = "Commands: year <n> | country <name> | compare <a, b, ...> | metric <name> | show | quit";

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> Result<Option<SessionCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((k, r)) => (k, r.trim()),
        None => (line, ""),
    };

    let cmd = match keyword.to_lowercase().as_str() {
        "year" => SessionCommand::Year(
            rest.parse::<i32>()
                .with_context(|| format!("Invalid year: '{}'", rest))?,
        ),
        "country" if !rest.is_empty() => SessionCommand::Country(rest.to_string()),
        "compare" => SessionCommand::Compare(
            rest.split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .collect(),
        ),
        "metric" if !rest.is_empty() => SessionCommand::Metric(rest.to_string()),
        "show" => SessionCommand::Show,
        "quit" | "exit" => SessionCommand::Quit,
        _ => return Err(anyhow!("Unknown command: '{}'. {}", line, HELP)),
    };
    Ok(Some(cmd))
}

/// The selection after `cmd`, or `None` for commands that change nothing.
pub fn apply_command(selection: &Selection, cmd: &SessionCommand) -> Option<Selection> {
    match cmd {
        SessionCommand::Year(year) => Some(selection.with_year(*year)),
        SessionCommand::Country(country) => Some(selection.with_country(country.as_str())),
        SessionCommand::Compare(countries) => Some(selection.with_comparisons(countries.clone())),
        SessionCommand::Metric(metric) => Some(selection.with_metric(metric.as_str())),
        SessionCommand::Show => Some(selection.clone()),
        SessionCommand::Quit => None,
    }
}

/// Read commands from `input` until `quit` or end of input.
///
/// The report is rendered once up front and again after every accepted
/// command. A rejected command or selection is logged and the previous
/// selection stays active.
pub fn run_interactive<R: BufRead>(
    session: &ReportSession,
    config: &ReportConfig,
    input: R,
    version: &str,
) -> Result<usize> {
    let mut selection = config
        .selection(session.dataset(), session.descriptions())
        .context("Failed to resolve selection")?;
    let mut renders = 0;

    let view = session
        .handle_selection(&selection)
        .context("Failed to build initial report view")?;
    write_report(&view, version, &config.output_file)?;
    eprintln!("{}", summarize(&view));
    renders += 1;
    eprintln!("{}", HELP);

    for line in input.lines() {
        let line = line.context("Failed to read command")?;
        let cmd = match parse_command(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(e) => {
                log::error!("{:#}", e);
                continue;
            }
        };
        let Some(next) = apply_command(&selection, &cmd) else {
            break;
        };

        match session.handle_selection(&next) {
            Ok(view) => {
                write_report(&view, version, &config.output_file)?;
                eprintln!("{}", summarize(&view));
                selection = next;
                renders += 1;
            }
            Err(e) => log::error!("Selection rejected: {}", e),
        }
    }

    log::info!("Interactive session ended after {} renders", renders);
    Ok(renders)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_controls() {
        assert_eq!(parse_command("year 2019").unwrap(), Some(SessionCommand::Year(2019)));
        assert_eq!(
            parse_command("country  United Kingdom ").unwrap(),
            Some(SessionCommand::Country("United Kingdom".to_string()))
        );
        assert_eq!(
            parse_command("compare Germany, Japan,").unwrap(),
            Some(SessionCommand::Compare(vec!["Germany".to_string(), "Japan".to_string()]))
        );
        assert_eq!(parse_command("compare").unwrap(), Some(SessionCommand::Compare(vec![])));
        assert_eq!(parse_command("QUIT").unwrap(), Some(SessionCommand::Quit));
        assert_eq!(parse_command("  # note").unwrap(), None);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_command("year twenty").is_err());
        assert!(parse_command("country").is_err());
        assert!(parse_command("zoom 3").is_err());
    }

    #[test]
    fn apply_builds_new_selection() {
        let base = Selection::new(2018, "Finland", vec![], "Score");
        let next = apply_command(&base, &SessionCommand::Year(2017)).unwrap();
        assert_eq!(next.year, 2017);
        assert_eq!(base.year, 2018);
        assert!(apply_command(&base, &SessionCommand::Quit).is_none());
    }
}
