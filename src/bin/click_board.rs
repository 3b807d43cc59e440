//! Terminal front end for the click-to-move board.
//!
//! Each stdin line is one input:
//! - `x y`: a click at surface pixel (x, y)
//! - `e2`: a click on a named square
//! - `reset`: start a new game
//! - `quit`: exit
//!
//! After every input the board is printed with its highlights.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use rust_chessboard::controller::{InteractionController, UiEvent};
use rust_chessboard::core::{BoardConfig, Square, DEFAULT_SQUARE_SIZE, MAX_SQUARE_SIZE};
use rust_chessboard::games::standard::{StandardChess, START_FEN};
use rust_chessboard::ui::{BoardGeometry, BoardView, HighlightState};

#[derive(Parser, Debug)]
#[command(name = "click_board")]
#[command(about = "Click-to-move chess board driven from stdin")]
struct Args {
    /// Edge length of one square in pixels
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_SQUARE_SIZE,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_SQUARE_SIZE))
    )]
    square_size: u32,

    /// Starting position in FEN
    #[arg(short, long, default_value = START_FEN)]
    fen: String,

    /// Draw Black at the bottom
    #[arg(long)]
    flipped: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Pixel(i32, i32),
    Square(Square),
    Reset,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let first = parts.next()?;
    match (first, parts.next(), parts.next()) {
        ("quit" | "exit", None, _) => Some(Command::Quit),
        ("reset", None, _) => Some(Command::Reset),
        (x, Some(y), None) => Some(Command::Pixel(x.parse().ok()?, y.parse().ok()?)),
        (name, None, _) => name.parse().ok().map(Command::Square),
        _ => None,
    }
}

fn new_game(fen: &str) -> Result<StandardChess> {
    StandardChess::from_fen(fen).with_context(|| format!("invalid FEN: {fen}"))
}

fn draw(
    out: &mut impl Write,
    controller: &InteractionController<StandardChess>,
    highlights: &HighlightState,
    config: &BoardConfig,
) -> io::Result<()> {
    let view = BoardView::capture(controller.engine(), highlights, config);
    write!(out, "{view}")?;
    if let Some(mv) = highlights.last_move {
        writeln!(out, "last move: {mv}")?;
    }
    out.flush()
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = BoardConfig::new()
        .with_square_size(args.square_size)
        .with_flipped(args.flipped);
    let geometry = BoardGeometry::from_config(&config);

    let mut controller = InteractionController::new(new_game(&args.fen)?);
    let mut highlights = HighlightState::new();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    draw(&mut out, &controller, &highlights, &config)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        let events: Vec<UiEvent> = match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::Reset) => {
                highlights = HighlightState::new();
                controller.reset(new_game(&args.fen)?)
            }
            Some(Command::Pixel(x, y)) => controller.handle_pointer(&geometry, x, y),
            Some(Command::Square(square)) => controller.handle_click(square),
            None => {
                log::warn!("unrecognised input: {line:?}");
                continue;
            }
        };
        for event in &events {
            log::debug!("{event:?}");
        }
        highlights.apply_all(&events);
        draw(&mut out, &controller, &highlights, &config)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("quit"), Some(Command::Quit));
        assert_eq!(parse_command(" reset "), Some(Command::Reset));
        assert_eq!(parse_command("325 485"), Some(Command::Pixel(325, 485)));
        assert_eq!(parse_command("-3 10"), Some(Command::Pixel(-3, 10)));
        assert_eq!(
            parse_command("e2"),
            Some(Command::Square("e2".parse().unwrap()))
        );
        assert_eq!(parse_command("z9"), None);
        assert_eq!(parse_command("1 2 3"), None);
        assert_eq!(parse_command(""), None);
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["click_board"]);
        assert_eq!(args.square_size, 80);
        assert_eq!(args.fen, START_FEN);
        assert!(!args.flipped);
    }

    #[test]
    fn test_args_reject_bad_square_size() {
        assert!(Args::try_parse_from(["click_board", "--square-size", "0"]).is_err());
        assert!(Args::try_parse_from(["click_board", "--square-size", "400000000"]).is_err());
        let args = Args::try_parse_from(["click_board", "--square-size", "4096"]).unwrap();
        assert_eq!(args.square_size, MAX_SQUARE_SIZE);
    }
}
