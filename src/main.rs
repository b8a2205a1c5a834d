use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use wordcond_rs::condition::Condition;
use wordcond_rs::config::ConfigLoader;
use wordcond_rs::error::WordcondError;
use wordcond_rs::matcher::TextMatcher;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a condition against a single text
    Eval {
        /// The condition, e.g. "(apple or orange) and banana"
        #[arg(short, long)]
        condition: String,

        /// The text to test words against
        #[arg(short, long)]
        text: String,

        /// Path to a YAML config file
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Compile a condition and print its postfix program
    Compile {
        #[arg(short, long)]
        condition: String,

        /// Print the instructions as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the lines of the input that satisfy a condition
    Filter {
        #[arg(short, long)]
        condition: String,

        /// Input file, one text per line (stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Path to a YAML config file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Eval {
            condition,
            text,
            config,
        } => {
            let config = ConfigLoader::new().resolve(config.as_deref())?;
            let matcher = TextMatcher::new(config.matching);

            let result = Condition::compile(&condition)
                .map_err(WordcondError::from)
                .and_then(|cond| Ok(matcher.matches(&cond, &text)?));
            let result = config
                .on_error
                .apply(result, &condition)
                .with_context(|| format!("Failed to evaluate condition '{}'", condition))?;
            println!("{}", result);
        }
        Commands::Compile { condition, json } => {
            let cond = Condition::compile(&condition)
                .with_context(|| format!("Failed to compile condition '{}'", condition))?;
            if json {
                println!("{}", cond.to_json_pretty()?);
            } else {
                println!("{}", cond);
            }
        }
        Commands::Filter {
            condition,
            input,
            config,
        } => {
            let config = ConfigLoader::new().resolve(config.as_deref())?;
            let matcher = TextMatcher::new(config.matching);

            let reader: Box<dyn BufRead> = match &input {
                Some(path) => Box::new(BufReader::new(
                    File::open(path)
                        .with_context(|| format!("Failed to open {}", path.display()))?,
                )),
                None => Box::new(BufReader::new(io::stdin())),
            };

            let stdout = io::stdout();
            matcher
                .filter_lines(&condition, reader, stdout.lock(), config.on_error)
                .with_context(|| format!("Failed to filter with condition '{}'", condition))?;
        }
    }

    Ok(())
}
