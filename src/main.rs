use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use rill::compiler::{CompilationPipeline, CompilationState};
use rill::error::RillError;
use rill::lexer::{format_tokens, tokenize};
use rill::Parser as RillParser;

#[derive(Parser)]
#[command(name = "rill")]
#[command(author, version, about = "The Rill language front end", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Lex and parse a Rill source file, reporting the first error
    Check {
        /// The source file to check
        input: PathBuf,

        /// Dump tokens to stdout
        #[arg(long)]
        dump_tokens: bool,

        /// Dump the parsed function declarations to stdout
        #[arg(long)]
        dump_functions: bool,

        /// Print dumps as JSON
        #[arg(long)]
        json: bool,

        /// Render the error with a source snippet
        #[arg(long)]
        pretty: bool,
    },

    /// Print the token stream of a Rill source file
    Tokens {
        /// The source file to tokenize
        input: PathBuf,

        /// Print tokens as JSON
        #[arg(long)]
        json: bool,
    },

    /// Evaluate a single binary expression such as `3 + 4`
    Eval {
        /// The expression to evaluate
        #[arg(allow_hyphen_values = true)]
        expression: String,

        /// Append the type name to the result, e.g. `7(int)`
        #[arg(long)]
        with_type: bool,
    },

    /// Start an interactive expression evaluator
    Repl {
        /// Append the type name to each result
        #[arg(long)]
        with_type: bool,
    },
}

/// 診断をすでにソース付きで表示したエラー
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
struct Reported(RillError);

fn main() -> Result<()> {
    // Initialize logger before parsing CLI args
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Set log level based on verbose flag
    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    let result = match cli.command {
        Commands::Check {
            input,
            dump_tokens,
            dump_functions,
            json,
            pretty,
        } => check(input, dump_tokens, dump_functions, json, pretty),
        Commands::Tokens { input, json } => dump_tokens(input, json),
        Commands::Eval {
            expression,
            with_type,
        } => eval(&expression, with_type, cli.verbose),
        Commands::Repl { with_type } => repl(with_type),
    };

    if let Err(e) = result {
        if e.downcast_ref::<Reported>().is_none() {
            match e.downcast_ref::<RillError>() {
                Some(error) => eprintln!("{}", error.render()),
                None => eprintln!("ERROR: {:#}", e),
            }
        }
        std::process::exit(1);
    }

    Ok(())
}

fn check(
    input: PathBuf,
    dump_tokens: bool,
    dump_functions: bool,
    json: bool,
    pretty: bool,
) -> Result<()> {
    log::info!("Checking {:?}", input);

    let state = CompilationState::new(&input)?;
    let pipeline = CompilationPipeline::new(state);

    let outcome = pipeline.tokenize().and_then(|tokens| {
        if dump_tokens {
            println!("{}", "=== Tokens ===".blue().bold());
            if json {
                println!("{}", serde_json::to_string_pretty(&tokens).map_err(|e| RillError::Other(e.to_string()))?);
            } else {
                println!("{}", format_tokens(&tokens));
            }
            println!();
        }
        pipeline.parse(tokens)
    });

    let functions = match outcome {
        Ok(functions) => functions,
        Err(e) => {
            if pretty {
                pipeline.state().report_diagnostic(&e)?;
                return Err(Reported(e).into());
            }
            return Err(e.into());
        }
    };

    if dump_functions {
        println!("{}", "=== Functions ===".blue().bold());
        if json {
            println!("{}", serde_json::to_string_pretty(&functions)?);
        } else {
            for function in &functions {
                println!("{}", function.inspect());
            }
        }
        println!();
    }

    println!(
        "{}: {} function declaration(s), no errors found",
        "success".green().bold(),
        functions.len()
    );
    Ok(())
}

fn dump_tokens(input: PathBuf, json: bool) -> Result<()> {
    let state = CompilationState::new(&input)?;
    let tokens = CompilationPipeline::new(state).tokenize()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tokens)?);
    } else {
        for token in &tokens {
            println!("{}: {}", token.location, token.inspect());
        }
    }
    Ok(())
}

/// 1つの式を字句解析・構文解析して評価する
fn evaluate_source(source: &str, file: &str) -> Result<rill::Value, RillError> {
    let tokens = tokenize(source, file)?;
    let expression = RillParser::new(tokens).parse_expression()?;
    log::debug!("evaluating {}", expression.to_display_string(true));
    Ok(expression.evaluate()?)
}

fn eval(expression: &str, with_type: bool, verbose: bool) -> Result<()> {
    let value = evaluate_source(expression, "<eval>")?;

    if verbose {
        println!("{} = {}", expression.trim(), value.to_display_string(with_type));
    } else {
        println!("{}", value.to_display_string(with_type));
    }
    Ok(())
}

fn repl(with_type: bool) -> Result<()> {
    println!("{}", "Rill expression REPL".blue().bold());
    println!("Type ':quit' or ':q' to exit, ':help' for help\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();
    let mut line_number = 1;

    loop {
        print!("rill:{:03}> ", line_number);
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();

        match input {
            ":quit" | ":q" => {
                println!("Goodbye!");
                break;
            }
            ":help" | ":h" => {
                println!("REPL commands:");
                println!("  :quit, :q    Exit the REPL");
                println!("  :help, :h    Show this help message");
                println!("\nEnter an expression such as `3 + 4` or `\"ab\" + \"cd\"`.");
                continue;
            }
            "" => continue,
            _ => {}
        }

        match evaluate_source(input, &format!("<repl:{}>", line_number)) {
            Ok(value) => println!("{}: {}", "result".green(), value.to_display_string(with_type)),
            Err(e) => eprintln!("{}", e.render().red()),
        }

        line_number += 1;
    }

    Ok(())
}
