use crate::config::Config;
use crate::error::StoreError;
use crate::plane::Plane;
use crate::runway::queue::LoadReport;
use crate::tower::Tower;
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::path::PathBuf;
use tabled::Tabled;
use tabled::settings::Style;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod plane;
mod runway;
mod tower;

#[derive(Parser)]
struct Args {
    /// Path to a JSON config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Queue store, one `<flight> - <airline>` per line
    #[arg(short, long, value_name = "FILE")]
    runway: Option<PathBuf>,
    /// Takeoff log, appended on every takeoff
    #[arg(short, long, value_name = "FILE")]
    log: Option<PathBuf>,
    /// Maximum number of planes waiting for takeoff
    #[arg(long, value_name = "N")]
    capacity: Option<usize>,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let mut candidates = Vec::new();

        for cmd in &self.commands {
            if cmd.starts_with(line) {
                candidates.push(Pair {
                    display: cmd.clone(),
                    replacement: format!("{} ", cmd),
                });
            }
        }

        Ok((0, candidates))
    }
}

#[derive(Tabled)]
struct Slot {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(inline)]
    plane: Plane,
}

fn show_queue(tower: &Tower) {
    let planes = tower.runway().list_all();
    if planes.is_empty() {
        println!("<Queue is empty>");
        return;
    }
    let slots: Vec<Slot> = planes
        .into_iter()
        .enumerate()
        .map(|(i, plane)| Slot { position: i + 1, plane })
        .collect();
    let mut table = tabled::Table::new(&slots);
    table.with(Style::rounded());
    table.with(tabled::settings::Alignment::left());
    println!("{}", table);
}

fn show_plane(title: &str, plane: &Plane) {
    println!("{}", title.bold());
    println!("  Flight : {}", plane.flight_number());
    println!("  Airline: {}", plane.airline_name());
}

fn show_load_report(tower: &Tower, report: &LoadReport) {
    let runway = tower.runway();
    if report.missing {
        println!("Tower online. No queue at {}, starting empty.", runway.path().display());
    } else {
        println!(
            "Tower online. Loaded {} planes from {}",
            report.loaded,
            runway.path().display()
        );
    }
    println!("Takeoffs are logged to {}", tower.takeoff_log().path().display());
    if report.malformed > 0 {
        println!("{}", format!("Skipped {} unreadable lines.", report.malformed).yellow());
    }
    if report.overflow > 0 {
        println!(
            "{}",
            format!("Dropped {} planes over the capacity of {}.", report.overflow, runway.capacity()).yellow()
        );
    }
}

fn show_storage_warnings<'a>(warnings: impl IntoIterator<Item = &'a StoreError>) {
    for warning in warnings {
        println!("{}", format!("Warning: {}", warning).yellow());
    }
}

/// Splits `add <flight> <airline...>` arguments. The airline keeps its inner spaces.
fn split_add_args(args: &str) -> Option<(&str, &str)> {
    let (flight, airline) = args.trim_start().split_once(char::is_whitespace)?;
    Some((flight, airline.trim_start()))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    }
    .override_with(args.capacity, args.runway, args.log)?;

    let (mut tower, report) = Tower::open(&config);
    show_load_report(&tower, &report);
    show_storage_warnings(tower.runway().last_store_error());
    show_queue(&tower);

    let rl_config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: vec![
            "add".to_string(),
            "takeoff".to_string(),
            "ls".to_string(),
            "refresh".to_string(),
            "front".to_string(),
            "empty".to_string(),
            "full".to_string(),
            "size".to_string(),
            "help".to_string(),
            "exit".to_string(),
        ],
    };

    let mut rl = Editor::with_config(rl_config)?;
    rl.set_helper(Some(helper));

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() { continue; }

                rl.add_history_entry(trimmed)?;

                let (cmd, rest) = trimmed.split_once(char::is_whitespace).unwrap_or((trimmed, ""));
                match cmd {
                    "add" => {
                        let Some((flight, airline)) = split_add_args(rest) else {
                            println!("Usage: add <flight> <airline>");
                            continue;
                        };
                        match tower.add_plane(flight, airline) {
                            Ok(plane) => {
                                println!("{}", format!("Plane {} added to takeoff queue.", plane).green());
                                show_queue(&tower);
                                show_storage_warnings(tower.runway().last_store_error());
                            },
                            Err(e) => println!("{}", e.to_string().red()),
                        }
                    },
                    "takeoff" => {
                        match tower.allow_takeoff() {
                            Ok(plane) => {
                                show_plane("Plane Taking Off:", &plane);
                                show_queue(&tower);
                                show_storage_warnings(tower.storage_warnings());
                            },
                            Err(e) => println!("{}", e.to_string().red()),
                        }
                    },
                    "ls" | "refresh" => show_queue(&tower),
                    "front" => match tower.front() {
                        Some(plane) => show_plane("Front Plane Details:", plane),
                        None => println!("Queue is empty. No front plane."),
                    },
                    "empty" => {
                        if tower.runway().is_empty() {
                            println!("Queue is EMPTY.");
                        } else {
                            println!("Queue is NOT empty.");
                        }
                    },
                    "full" => {
                        if tower.runway().is_full() {
                            println!("Queue is FULL.");
                        } else {
                            println!("Queue is NOT full.");
                        }
                    },
                    "size" => {
                        let runway = tower.runway();
                        println!("Queue Size: {} / {}", runway.len(), runway.capacity());
                    },
                    "help" | "?" => {
                        println!("\nAvailable Commands:");
                        println!("  add <flight> <airline> - Add a plane to the end of the takeoff queue");
                        println!("  takeoff                - Let the plane at the front take off and log it");
                        println!("  ls / refresh           - Show the queue, front first");
                        println!("  front                  - Show the plane at the front without removing it");
                        println!("  empty / full / size    - Query the queue occupancy");
                        println!("  help / ?               - Show this help menu");
                        println!("  exit / quit            - Leave the tower\n");
                    },
                    "exit" | "quit" => break,
                    _ => println!("Unknown command: {}", cmd),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_add_args() {
        assert_eq!(Some(("LO281", "LOT")), split_add_args("LO281 LOT"));
        assert_eq!(Some(("BA1", "British Airways")), split_add_args("  BA1   British Airways"));
        assert_eq!(None, split_add_args("LO281"));
        assert_eq!(None, split_add_args(""));
    }
}
