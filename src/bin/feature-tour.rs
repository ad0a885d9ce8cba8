//! feature-tour CLI - command line entry point
//!
//! Front-end only: parses arguments, sets up configuration and logging,
//! then calls the API and hands the results to the platform layer.

use clap::Parser;
use std::process;

use feature_tour::{
    core::logger::init_with_format,
    init_config, list_cases,
    platform::{format_case_list, format_json, print_error, print_report},
    run_configured, Config, Group, LogConfig, LogFormat, LogLevel, OutputFormat, RunOptions,
};

#[derive(Parser)]
#[command(
    name = "feature-tour",
    about = "Ordered, verifiable language feature demonstrations",
    version
)]
struct Cli {
    /// List every case and exit
    #[arg(long)]
    list: bool,

    /// Run only this case (repeatable); opt-in cases need this
    #[arg(long = "case", value_name = "ID")]
    cases: Vec<String>,

    /// Run only this group (repeatable)
    #[arg(long = "group", value_enum, value_name = "GROUP")]
    groups: Vec<GroupArg>,

    /// Print `== <id> ==` before each case
    #[arg(long)]
    headers: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: FormatArg,

    /// Skip expected-output checks
    #[arg(long)]
    no_verify: bool,

    /// Log level (-v=info, -vv=debug, -vvv=trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Runner log level
    #[arg(long, value_enum)]
    log_runner: Option<LogLevelArg>,

    /// Basics group log level
    #[arg(long, value_enum)]
    log_basics: Option<LogLevelArg>,

    /// Values group log level
    #[arg(long, value_enum)]
    log_values: Option<LogLevelArg>,

    /// Entities group log level
    #[arg(long, value_enum)]
    log_entities: Option<LogLevelArg>,

    /// Contracts group log level
    #[arg(long, value_enum)]
    log_contracts: Option<LogLevelArg>,

    /// Optionals group log level
    #[arg(long, value_enum)]
    log_optionals: Option<LogLevelArg>,

    /// Errors group log level
    #[arg(long, value_enum)]
    log_errors: Option<LogLevelArg>,

    /// Closures group log level
    #[arg(long, value_enum)]
    log_closures: Option<LogLevelArg>,

    /// Collections group log level
    #[arg(long, value_enum)]
    log_collections: Option<LogLevelArg>,

    /// Control-flow group log level
    #[arg(long, value_enum)]
    log_control_flow: Option<LogLevelArg>,

    /// Functions group log level
    #[arg(long, value_enum)]
    log_functions: Option<LogLevelArg>,

    /// Log output format (logs always go to stderr)
    #[arg(long, value_enum, default_value = "compact")]
    log_format: LogFormatArg,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum GroupArg {
    Basics,
    Values,
    Entities,
    Contracts,
    Optionals,
    Errors,
    Closures,
    Collections,
    ControlFlow,
    Functions,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn main() {
    let cli = Cli::parse();

    if cli.list {
        print!("{}", format_case_list(&list_cases()));
        return;
    }

    let config = build_config(&cli);
    let options = config.run.clone();
    init_config(config);

    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    init_with_format(format);

    let code = match options.format {
        OutputFormat::Text => run_text(&options),
        OutputFormat::Json => run_json(),
    };
    process::exit(code);
}

fn run_text(options: &RunOptions) -> i32 {
    match run_configured(|report| print_report(report, options)) {
        Ok(_) => 0,
        Err(e) => {
            print_error(&e);
            e.exit_code()
        }
    }
}

fn run_json() -> i32 {
    let mut reports = Vec::new();
    let result = run_configured(|report| reports.push(report.clone()));
    match result {
        Ok(summary) => {
            println!("{}", format_json(&reports, Some(&summary), None));
            0
        }
        Err(e) => {
            println!("{}", format_json(&reports, None, Some(&e)));
            print_error(&e);
            e.exit_code()
        }
    }
}

fn build_config(cli: &Cli) -> Config {
    let mut log = LogConfig {
        global: LogLevel::from_verbosity(cli.verbose),
        runner: cli.log_runner.map(to_log_level),
        ..Default::default()
    };

    let overrides = [
        (Group::Basics, cli.log_basics),
        (Group::Values, cli.log_values),
        (Group::Entities, cli.log_entities),
        (Group::Contracts, cli.log_contracts),
        (Group::Optionals, cli.log_optionals),
        (Group::Errors, cli.log_errors),
        (Group::Closures, cli.log_closures),
        (Group::Collections, cli.log_collections),
        (Group::ControlFlow, cli.log_control_flow),
        (Group::Functions, cli.log_functions),
    ];
    for (group, level) in overrides {
        if let Some(level) = level {
            log.groups.insert(group, to_log_level(level));
        }
    }

    Config {
        log,
        run: RunOptions {
            cases: cli.cases.clone(),
            groups: cli.groups.iter().copied().map(to_group).collect(),
            show_headers: cli.headers,
            format: match cli.format {
                FormatArg::Text => OutputFormat::Text,
                FormatArg::Json => OutputFormat::Json,
            },
            verify_fixtures: !cli.no_verify,
        },
    }
}

fn to_group(group: GroupArg) -> Group {
    match group {
        GroupArg::Basics => Group::Basics,
        GroupArg::Values => Group::Values,
        GroupArg::Entities => Group::Entities,
        GroupArg::Contracts => Group::Contracts,
        GroupArg::Optionals => Group::Optionals,
        GroupArg::Errors => Group::Errors,
        GroupArg::Closures => Group::Closures,
        GroupArg::Collections => Group::Collections,
        GroupArg::ControlFlow => Group::ControlFlow,
        GroupArg::Functions => Group::Functions,
    }
}

fn to_log_level(level: LogLevelArg) -> LogLevel {
    match level {
        LogLevelArg::Off => LogLevel::Off,
        LogLevelArg::Error => LogLevel::Error,
        LogLevelArg::Warn => LogLevel::Warn,
        LogLevelArg::Info => LogLevel::Info,
        LogLevelArg::Debug => LogLevel::Debug,
        LogLevelArg::Trace => LogLevel::Trace,
    }
}
