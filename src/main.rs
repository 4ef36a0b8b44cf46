use clap::{Parser, Subcommand};
use colored::Colorize;
use humaniser_client::validation::validate_input;
use humaniser_client::view::{busy_line, render};
use humaniser_client::{ClientConfig, HttpTransport, SubmissionController};
use std::io::{self, BufRead, Read, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "humanise", about = "Send text to a humanise service and print the result")]
struct Args {
    /// Base URL of the service (overrides HUMANISER_URL)
    #[arg(long, global = true)]
    url: Option<String>,

    /// Request timeout in milliseconds, 0 for none (overrides HUMANISER_TIMEOUT_MS)
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Humanise TEXT, or all of stdin when TEXT is omitted
    Submit { text: Option<String> },
    /// Humanise each line typed on stdin
    Interactive,
    /// Check that the service is up
    Health,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = ClientConfig::from_env_with(args.url.as_deref(), args.timeout_ms)?;

    let mut controller = SubmissionController::new(HttpTransport::new(config)?);

    match args.command {
        Command::Submit { text } => {
            let input = match text {
                Some(text) => text,
                None => {
                    let mut buf = String::new();
                    io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };

            controller.edit(&input);
            if validate_input(&input).is_ok() {
                eprintln!("{}", busy_line());
            }
            let state = controller.submit(&input);
            print!("{}", render(&state));

            if state.is_failed() {
                std::process::exit(1);
            }
        }
        Command::Interactive => {
            println!("{}", "Paste text to humanise, one submission per line (Ctrl-D to quit).".dimmed());
            let stdin = io::stdin();
            prompt()?;
            for line in stdin.lock().lines() {
                let line = line?;
                controller.edit(&line);
                if validate_input(&line).is_ok() {
                    eprintln!("{}", busy_line());
                }
                let state = controller.submit(&line);
                print!("{}", render(&state));
                prompt()?;
            }
            println!();
        }
        Command::Health => match controller.health() {
            Ok(health) if health.is_ok() => println!("{}", "ok".green()),
            Ok(health) => {
                println!("{}", format!("unexpected status: {}", health.status).yellow());
                std::process::exit(1);
            }
            Err(err) => {
                println!("{}", err.user_message().red());
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}
