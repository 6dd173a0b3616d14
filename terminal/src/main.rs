mod render;
mod session;

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::Term;
use crate::session::{Config, Core, Outcome, TerminalConfig};
use std::fs;
use std::io::BufRead;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "BlockchainOS - interactive linear topology network simulator",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long, value_name = "FILE", default_value_os_t = PathBuf::from("terminal.toml"))]
    config: PathBuf,

    /// Print reports without ANSI colours
    #[arg(long)]
    no_color: bool,

    /// Run these commands in order, print their reports and exit
    #[arg(short = 'e', long = "exec", value_name = "COMMAND")]
    exec: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    GenerateConfig {
        #[arg(short, long, value_name = "FILE", default_value_os_t = PathBuf::from("terminal.toml"))]
        output: PathBuf,
    },
}

// Log lines go to a file so they never interleave with reports on stdout.
fn init_tracing(config: &TerminalConfig) -> Result<WorkerGuard> {
    fs::create_dir_all(&config.log_dir)?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("blockchain-os.log")
        .build(&config.log_dir)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(guard)
}

// Blocking stdin reads live on their own thread so shutdown never waits on
// a pending read.
fn spawn_stdin_reader() -> kanal::AsyncReceiver<String> {
    let (line_sender, line_receiver) = kanal::bounded(16);
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if line_sender.send(line).is_err() {
                break;
            }
        }
    });
    line_receiver.clone_async()
}

async fn run_terminal(core: &mut Core) -> Result<()> {
    let term = Term::stdout();
    let lines = spawn_stdin_reader();
    println!("{}", core.render(&core.welcome()));
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            line = lines.recv() => {
                // reader thread hit EOF
                let Ok(line) = line else { break };
                match core.handle(&line) {
                    Outcome::Report(report) => println!("{}", core.render(&report)),
                    Outcome::Clear => term.clear_screen()?,
                    Outcome::Exit => break,
                    Outcome::Skip => {}
                }
            }
            _ = &mut ctrl_c => {
                println!();
                break;
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(Commands::GenerateConfig { output }) = &cli.command {
        return Config::generate(output);
    }
    let mut config = Config::load(&cli.config)?;
    if cli.no_color {
        config.terminal.color = false;
    }
    let _guard = init_tracing(&config.terminal)?;
    tracing::info!(config = %cli.config.display(), "configuration loaded");

    let mut core = Core::new(config)?;
    if cli.exec.is_empty() {
        run_terminal(&mut core).await?;
    } else {
        for command in &cli.exec {
            if let Outcome::Report(report) = core.handle(command) {
                println!("{}", core.render(&report));
            }
        }
    }
    core.log_summary();
    Ok(())
}
