use std::io::{self, BufRead, Write};

use colored::Colorize;
use serde_json::json;
use tracing::{info, warn};

use tilt_core::{Command, Response, TiltConfig, TiltSession, TiltSnapshot};

use crate::render;

pub fn run(config: TiltConfig, json: bool) -> Result<(), String> {
    let seed = config.seed;
    let mut session = TiltSession::initialize(config);

    for warning in session.load_warnings() {
        warn!("{warning}; using built-in phrases");
    }
    info!(
        wins = session.phrases().win_count(),
        losses = session.phrases().lose_count(),
        "phrases loaded"
    );

    if !json {
        println!(
            "  {} tilt session for {}",
            "Starting".bold(),
            session.player_name().bold()
        );
        match seed {
            Some(seed) => println!("  Seed: {seed}"),
            None => println!("  Seed: random"),
        }
        println!("{}", render::scale(&session.snapshot()));
        println!("  Type 'win' or 'lose' after each game, 'help' for commands.\n");
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        if !json {
            print!("> ");
            io::stdout().flush().map_err(|e| e.to_string())?;
        }

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                if json {
                    eprintln!("{e}");
                } else {
                    println!("{}\n", e.to_string().yellow());
                }
                continue;
            }
        };

        let response = session.execute(command);
        if json {
            print_json(&response)?;
        } else {
            print_text(&response);
        }

        if response == Response::Quit {
            break;
        }
    }

    Ok(())
}

fn print_text(response: &Response) {
    match response {
        Response::Event {
            snapshot, message, ..
        } => {
            println!("{}", render::scale(snapshot));
            if snapshot.extreme {
                println!("  {}\n", message.bold());
            } else {
                println!("  {message}\n");
            }
        }
        Response::Status(snapshot) => println!("{}\n", render::scale(snapshot)),
        other => println!("{other}\n"),
    }
}

fn print_json(response: &Response) -> Result<(), String> {
    let value = match response {
        Response::Event {
            outcome,
            snapshot,
            message,
        } => event_json(Some(outcome.to_string()), snapshot, Some(message.as_str())),
        Response::Status(snapshot) => event_json(None, snapshot, None),
        other => {
            eprintln!("{other}");
            return Ok(());
        }
    };
    let text = serde_json::to_string(&value).map_err(|e| e.to_string())?;
    println!("{text}");
    Ok(())
}

fn event_json(
    outcome: Option<String>,
    snapshot: &TiltSnapshot,
    message: Option<&str>,
) -> serde_json::Value {
    json!({
        "outcome": outcome,
        "score": snapshot.score,
        "band": snapshot.band,
        "extreme": snapshot.extreme,
        "progress": snapshot.progress,
        "message": message,
    })
}
