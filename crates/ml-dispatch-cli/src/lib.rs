//! Command definitions and rendering for the `ml-dispatch` binary.
//!
//! Kept in a library so the argument parser and output can be tested
//! without spawning the binary.
use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};

use ml_dispatch::{list_models, param_blueprint, param_descriptions, TaskType};

pub fn build_cli() -> Command {
    Command::new("ml-dispatch")
        .version(clap::crate_version!())
        .about("Inspect the models and default hyperparameters known to ml-dispatch")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("models")
                .about("List model identifiers per task type")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the registry as a JSON object")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("blueprint")
                .about("Print the default hyperparameters of a model")
                .arg(
                    Arg::new("model")
                        .help("Model identifier, e.g. random_forest")
                        .required(true)
                        .value_parser(clap::builder::NonEmptyStringValueParser::new()),
                )
                .arg(
                    Arg::new("task")
                        .short('t')
                        .long("task")
                        .help("Task type the defaults are for")
                        .default_value("classification")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new()),
                )
                .arg(
                    Arg::new("describe")
                        .short('d')
                        .long("describe")
                        .help("Include a description of every parameter")
                        .action(ArgAction::SetTrue),
                ),
        )
}

/// Produce the text printed for a parsed command line.
pub fn render(matches: &ArgMatches) -> Result<String> {
    match matches.subcommand() {
        Some(("models", sub)) => render_models(sub.get_flag("json")),
        Some(("blueprint", sub)) => {
            // Both arguments are required or defaulted by the parser.
            let model = sub
                .get_one::<String>("model")
                .context("missing model identifier")?;
            let task = sub
                .get_one::<String>("task")
                .context("missing task type")?;
            render_blueprint(model, task, sub.get_flag("describe"))
        }
        Some((other, _)) => anyhow::bail!("unknown subcommand '{}'", other),
        None => anyhow::bail!("no subcommand given"),
    }
}

fn render_models(json: bool) -> Result<String> {
    let registry = list_models();
    if json {
        return serde_json::to_string_pretty(&registry).context("failed to serialize registry");
    }
    let lines: Vec<String> = TaskType::ALL
        .iter()
        .map(|task| format!("{}: {}", task, registry.for_task(*task).join(", ")))
        .collect();
    Ok(lines.join("\n"))
}

fn render_blueprint(model: &str, task: &str, describe: bool) -> Result<String> {
    let rendered = if describe {
        let described = param_descriptions(model, task)?;
        serde_json::to_string_pretty(&described)
    } else {
        let params = param_blueprint(model, task)?;
        serde_json::to_string_pretty(&params)
    };
    rendered.with_context(|| format!("failed to serialize blueprint for '{}'", model))
}
