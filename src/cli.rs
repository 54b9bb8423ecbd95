//! Command-line interface definition.
//!
//! This module builds the argument parser and turns parsed arguments into an
//! application `Command`.

use crate::api::Resource;
use crate::app::{Command, Edit};
use crate::error::{AppError, AppResult};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};

const RESOURCES: &[&str] = &["agents", "job-orders"];

/// Arguments shared by commands that edit a list location.
///
fn edit_args() -> Vec<Arg<'static, 'static>> {
    vec![
        Arg::with_name("resource")
            .help("Resource to list")
            .required(true)
            .possible_values(RESOURCES),
        Arg::with_name("at")
            .long("at")
            .value_name("LOCATION")
            .takes_value(true)
            .help("Start from a shared location, e.g. '/agents?f0=acme&page=2'"),
        Arg::with_name("clear")
            .long("clear")
            .help("Reset every filter and the page"),
        Arg::with_name("filter")
            .short("f")
            .long("filter")
            .value_name("VALUE")
            .takes_value(true)
            .multiple(true)
            .number_of_values(1)
            .help("Replace the filters positionally; missing trailing filters are emptied"),
        Arg::with_name("set")
            .short("s")
            .long("set")
            .value_name("FIELD=VALUE")
            .takes_value(true)
            .multiple(true)
            .number_of_values(1)
            .help("Change one named filter, keeping the others"),
        Arg::with_name("page")
            .short("p")
            .long("page")
            .value_name("N")
            .takes_value(true)
            .allow_hyphen_values(true)
            .help("Move to page N, keeping the filters"),
    ]
}

/// Build the argument parser.
///
pub fn build() -> App<'static, 'static> {
    App::new("agent-console")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Browse foreign agents and job orders")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .takes_value(true)
                .help("Directory holding config.yml"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Increase log verbosity"),
        )
        .subcommand(
            SubCommand::with_name("list")
                .about("Fetch and print one page of a resource")
                .args(&edit_args()),
        )
        .subcommand(
            SubCommand::with_name("url")
                .about("Print the location resulting from an edit, without fetching")
                .args(&edit_args()),
        )
        .subcommand(
            SubCommand::with_name("show")
                .about("Fetch and print one agent")
                .arg(Arg::with_name("id").required(true).help("Agent id")),
        )
}

/// Turn parsed arguments into a command.
///
pub fn command(matches: &ArgMatches) -> AppResult<Command> {
    match matches.subcommand() {
        ("list", Some(sub)) => Ok(Command::List {
            resource: resource(sub)?,
            edit: edit(sub)?,
        }),
        ("url", Some(sub)) => Ok(Command::Url {
            resource: resource(sub)?,
            edit: edit(sub)?,
        }),
        ("show", Some(sub)) => Ok(Command::Show {
            id: sub.value_of("id").unwrap_or_default().to_string(),
        }),
        (name, _) => Err(AppError::Usage(format!("unknown command '{}'", name))),
    }
}

fn resource(matches: &ArgMatches) -> AppResult<Resource> {
    Ok(matches.value_of("resource").unwrap_or_default().parse()?)
}

fn edit(matches: &ArgMatches) -> AppResult<Edit> {
    let page = match matches.value_of("page") {
        Some(raw) => Some(
            raw.trim()
                .parse::<i64>()
                .map_err(|_| AppError::Usage(format!("page must be a number, got '{}'", raw)))?,
        ),
        None => None,
    };
    let sets = matches
        .values_of("set")
        .map(|values| values.map(parse_set).collect::<AppResult<Vec<_>>>())
        .transpose()?
        .unwrap_or_default();
    Ok(Edit {
        at: matches.value_of("at").map(str::to_string),
        clear: matches.is_present("clear"),
        filters: matches
            .values_of("filter")
            .map(|values| values.map(str::to_string).collect()),
        sets,
        page,
    })
}

fn parse_set(raw: &str) -> AppResult<(String, String)> {
    match raw.split_once('=') {
        Some((field, value)) if !field.trim().is_empty() => {
            Ok((field.trim().to_string(), value.to_string()))
        }
        _ => Err(AppError::Usage(format!(
            "expected FIELD=VALUE, got '{}'",
            raw
        ))),
    }
}
