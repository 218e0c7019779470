//! Interactive terminal front-end for the board-sync client
//!
//! Renders the glyph grid and the server-sourced panels (status, history,
//! evaluation, suggestion) and relays typed commands to the session:
//!
//! ```text
//! move e2 e4    submit a move
//! reset         reinitialize the remote game
//! resume        re-synchronize from saved server state
//! undo          take back the last move
//! show          redraw the board
//! quit          exit
//! ```

use anyhow::Context;
use chessboard_client::{
    BoardStore, ClientConfig, GameEvent, GameSession, HttpGameService, Square,
};
use clap::Parser;
use crossbeam_channel::Receiver;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "chessboard-client", about = "Terminal chess board synced to a remote service")]
struct Args {
    /// Base URL of the remote game service
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    server_url: Url,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut config = ClientConfig::new(args.server_url);
    config.request_timeout_secs = args.timeout;

    let service = HttpGameService::new(config).context("building HTTP service")?;
    let mut session = GameSession::new(Arc::new(service));
    let events = session.events().subscribe();

    println!("Chess Game System - type 'help' for commands");
    render(session.store());

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();

        let outcome = match parts.as_slice() {
            ["move", from, to] => submit(&mut session, from, to).await,
            ["reset"] => session.reset().await.map_err(Into::into),
            ["resume"] => session.resume().await.map_err(Into::into),
            ["undo"] => session.undo().await.map_err(Into::into),
            ["show"] => Ok(()),
            ["help"] => {
                println!("commands: move <from> <to> | reset | resume | undo | show | quit");
                continue;
            }
            ["quit"] | ["exit"] => break,
            [] => continue,
            other => {
                println!("unrecognized command: {}", other.join(" "));
                continue;
            }
        };

        drain_events(&events);
        if let Err(err) = outcome {
            eprintln!("error: {err}");
        }
        render(session.store());
    }

    Ok(())
}

async fn submit(session: &mut GameSession, from: &str, to: &str) -> anyhow::Result<()> {
    let from = Square::from_algebraic(from)?;
    let to = Square::from_algebraic(to)?;
    if !session.begin_drag(from) {
        anyhow::bail!("no piece on {from}, or the session is busy");
    }
    session.drop_on(to).await?;
    Ok(())
}

fn drain_events(events: &Receiver<GameEvent>) {
    for event in events.try_iter() {
        match event {
            GameEvent::MoveRejected { reason } => println!("move rejected: {reason}"),
            GameEvent::RequestFailed { reason } => println!("request failed: {reason}"),
            GameEvent::FollowUpFailed { endpoint, reason } => {
                println!("({endpoint} unavailable: {reason})");
            }
            GameEvent::SessionResumed => println!("game resumed successfully"),
            GameEvent::SessionReset => println!("game reset"),
            _ => {}
        }
    }
}

fn render(store: &BoardStore) {
    println!();
    for (row, cells) in store.grid().rows().enumerate() {
        print!("  {} ", 8 - row);
        for cell in cells {
            match cell {
                Some(piece) => print!(" {}", piece.glyph()),
                None => print!(" ."),
            }
        }
        println!();
    }
    println!("     a b c d e f g h");
    println!();
    println!("  status: {}", store.status_text());
    if !store.evaluation().is_empty() {
        println!("  evaluation: {}", store.evaluation());
    }
    if !store.suggestion().is_empty() {
        println!("  suggestion: {}", store.suggestion());
    }
    if !store.move_history().is_empty() {
        println!("  history:");
        for (index, entry) in store.move_history().iter().enumerate() {
            let mover = match store.mover_at(index) {
                chessboard_client::PieceColor::White => "White",
                chessboard_client::PieceColor::Black => "Black",
            };
            println!("    {}. {mover}: {entry}", index + 1);
        }
    }
}
