use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use paisa_agents::ResponderAgent;
use paisa_core::RuleSet;
use paisa_observability::{init_tracing, AppMetrics};
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(name = "paisa")]
#[command(about = "Paisa Advisor CLI")]
struct Cli {
    /// JSON rule table to load; the builtin finance table is used otherwise.
    #[arg(long)]
    rules: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive chat loop.
    Chat,
    /// Answer a single question and print the full match outcome.
    Ask { text: String },
    Rules {
        #[command(subcommand)]
        command: RulesCommand,
    },
}

#[derive(Debug, Subcommand)]
enum RulesCommand {
    List,
}

#[derive(Debug, Serialize)]
struct RuleListing {
    response_preview: String,
    trigger_words: usize,
    required_words: usize,
    is_exact: bool,
}

fn main() -> Result<()> {
    init_tracing("paisa_cli");
    let cli = Cli::parse();

    let rules = load_rules(cli.rules.as_deref())?;
    let agent = ResponderAgent::new(Arc::new(rules), AppMetrics::shared());

    match cli.command {
        Command::Chat => run_chat(&agent)?,
        Command::Ask { text } => {
            let outcome = agent.respond(&text);
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        Command::Rules { command } => match command {
            RulesCommand::List => {
                let listing = agent
                    .rules()
                    .rules()
                    .iter()
                    .map(|rule| RuleListing {
                        response_preview: preview(&rule.response, 72),
                        trigger_words: rule.trigger_count,
                        required_words: rule.required_stems.len(),
                        is_exact: rule.is_exact,
                    })
                    .collect::<Vec<_>>();
                println!("{}", serde_json::to_string_pretty(&listing)?);
            }
        },
    }

    Ok(())
}

fn load_rules(path: Option<&Path>) -> Result<RuleSet> {
    match path {
        Some(path) => RuleSet::from_json_file(path)
            .with_context(|| format!("failed loading rule table from {}", path.display())),
        None => Ok(RuleSet::builtin()),
    }
}

fn run_chat(agent: &ResponderAgent) -> Result<()> {
    println!("Paisa Advisor chat mode. type 'exit' to quit.");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        let message = line.trim();
        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            break;
        }

        if message.is_empty() {
            continue;
        }

        let outcome = agent.respond(message);
        println!("\n{}\n", outcome.reply_text);
    }

    Ok(())
}

fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        text.chars().take(max_chars).collect::<String>() + "..."
    }
}
