//! NoxChrono CLI
//!
//! Terminal front end for the NoxChrono dashboard:
//! - Run the stopwatch
//! - Print the dashboard panels
//! - Generate a config file

use anyhow::Context;
use chrono::{DateTime, Local};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

use noxchrono::config::{generate_default_config, Config};
use noxchrono::dashboard::{self, Dashboard};
use noxchrono::timer::driver::{self, IntervalFrames, TimerHandle};
use noxchrono::timer::{format_minutes, TimerSnapshot, RESET_LABEL};

#[derive(Parser)]
#[command(name = "noxchrono")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Focus dashboard and stopwatch")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the stopwatch in this terminal
    Run,

    /// Print the dashboard panels
    Dashboard {
        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// A line typed while the stopwatch runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Toggle,
    Reset,
    Quit,
}

enum Event {
    Line(Option<String>),
    /// `false` once the driver has dropped its snapshot sender
    Changed(bool),
    Interrupt,
}

fn parse_input(line: &str) -> Option<Input> {
    match line.trim().to_ascii_lowercase().as_str() {
        "" | "s" | "space" | "start" | "pause" => Some(Input::Toggle),
        "r" | "reset" => Some(Input::Reset),
        "q" | "quit" | "exit" => Some(Input::Quit),
        _ => None,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::resolve(cli.config.as_deref()).context("loading configuration")?;
    noxchrono::logging::init(&config.logging).context("initializing logging")?;

    tracing::info!("NoxChrono v{}", env!("CARGO_PKG_VERSION"));
    tracing::debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Run => run_stopwatch(&config).await,
        Commands::Dashboard { format } => Ok(print_dashboard(&config, format)?),
        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
            Ok(())
        }
    }
}

async fn run_stopwatch(config: &Config) -> anyhow::Result<()> {
    let frames = IntervalFrames::new(config.timer.frame_interval());
    let (timer, task) = driver::spawn(frames);
    let started_at = Local::now();

    println!("Enter or 's' to start/pause, 'r' to reset, 'q' to quit.");

    let mut stdout = std::io::stdout();
    let mut shown = String::new();
    render(&mut stdout, &timer.snapshot(), &mut shown)?;

    let mut snapshots = timer.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        let event = tokio::select! {
            line = lines.next_line() => Event::Line(line.context("reading stdin")?),
            changed = snapshots.changed() => Event::Changed(changed.is_ok()),
            _ = &mut ctrl_c => Event::Interrupt,
        };

        match event {
            Event::Line(None) | Event::Changed(false) | Event::Interrupt => break,
            Event::Line(Some(line)) => {
                match parse_input(&line) {
                    Some(Input::Toggle) => timer.toggle()?,
                    Some(Input::Reset) => timer.reset()?,
                    Some(Input::Quit) => break,
                    None => tracing::debug!("Ignoring input {:?}", line),
                }
                // The echoed newline moved the cursor; draw on the new line
                shown.clear();
                render(&mut stdout, &timer.snapshot(), &mut shown)?;
            }
            Event::Changed(true) => {
                let snapshot = *snapshots.borrow_and_update();
                render(&mut stdout, &snapshot, &mut shown)?;
            }
        }
    }

    finish(timer, task, started_at).await
}

/// Redraw the readout line if what it shows changed
fn render(
    out: &mut impl Write,
    snapshot: &TimerSnapshot,
    shown: &mut String,
) -> std::io::Result<()> {
    let line = format!(
        "  {}   [{}]  [{}]",
        snapshot.readout(),
        snapshot.control_label(),
        RESET_LABEL
    );
    if *shown == line {
        return Ok(());
    }

    write!(out, "\r{}", line)?;
    out.flush()?;
    *shown = line;
    Ok(())
}

async fn finish(
    timer: TimerHandle,
    task: tokio::task::JoinHandle<noxchrono::ElapsedTimer>,
    started_at: DateTime<Local>,
) -> anyhow::Result<()> {
    // The task may already be gone if stdin closed first
    if timer.shutdown().is_err() {
        tracing::debug!("Timer driver already stopped");
    }
    drop(timer);

    let final_timer = task.await.context("timer task panicked")?;
    let ended_at = Local::now();

    tracing::info!(
        accumulated_ms = final_timer.accumulated_ms(),
        "Session ended"
    );
    println!(
        "\nSession {} to {}, timed {}",
        started_at.format("%H:%M:%S"),
        ended_at.format("%H:%M:%S"),
        final_timer.readout()
    );

    Ok(())
}

fn print_dashboard(config: &Config, format: OutputFormat) -> noxchrono::Result<()> {
    let board = Dashboard::builtin();

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&board)?);
        return Ok(());
    }

    println!("NoxChrono ({} theme)\n", config.display.theme);

    println!("{}", dashboard::TODAY_TITLE);
    for total in &board.today {
        println!("  {:<12} {:>8}", total.activity, total.duration_label());
    }

    println!("\n{}", dashboard::QUICK_ACTIONS_TITLE);
    for action in &board.quick_actions {
        println!("  {:<14} {}", action, dashboard::QUICK_ACTION_HINT);
    }

    println!(
        "\n{} ({}, {} total)",
        dashboard::WEEK_TITLE,
        dashboard::WEEK_CAPTION,
        format_minutes(board.week_total())
    );
    for bar in &board.week {
        let width = (bar.height_percent() / 5) as usize;
        println!("  {}  {:<20} {:>3}", bar.day + 1, "#".repeat(width), bar.minutes);
    }

    println!("\n{}", dashboard::LEADERBOARD_TITLE);
    for entry in &board.leaderboard {
        println!("  {:<12} {:>8}", entry.ranked_name(), entry.minutes_label());
    }

    println!("\n{}", dashboard::FRIENDS_TITLE);
    for friend in &board.friends.friends {
        println!("  {}", friend);
    }
    println!("  {}", board.friends.suggestions_line());

    println!("\n{}", dashboard::PREFERENCES_TITLE);
    println!("  GitHub: {}", board.repository_url);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_input(""), Some(Input::Toggle));
        assert_eq!(parse_input(" s "), Some(Input::Toggle));
        assert_eq!(parse_input("R"), Some(Input::Reset));
        assert_eq!(parse_input("quit"), Some(Input::Quit));
        assert_eq!(parse_input("lap"), None);
    }

    #[test]
    fn test_render_skips_unchanged_line() {
        let mut out = Vec::new();
        let mut shown = String::new();
        let snapshot = TimerSnapshot {
            accumulated_ms: 61_500,
            running: true,
        };

        render(&mut out, &snapshot, &mut shown).unwrap();
        render(&mut out, &snapshot, &mut shown).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "\r  00:01:01   [Pause]  [Reset]");
    }
}
