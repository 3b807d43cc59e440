//! Render model: what a front end draws after each batch of events.
//!
//! A front end keeps a `HighlightState`, folds every `UiEvent` into it and
//! captures a `BoardView` to draw. The capture reads the position through
//! `&RulesEngine` only.
//!
//! ## Drawing Order
//!
//! For each cell: fill the square with its shade, draw the marker dot if
//! the cell is a candidate destination, then draw the glyph centred.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::controller::UiEvent;
use crate::core::{BoardConfig, Move, Palette, Square};
use crate::rules::{GameResult, RulesEngine};

use super::geometry::{BoardGeometry, Rect};
use super::glyph::glyph;

/// Highlights accumulated from controller events.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightState {
    /// Selected origin square.
    pub origin: Option<Square>,

    /// Candidate destinations of the selected piece.
    pub destinations: Vec<Square>,

    /// Most recently applied move.
    pub last_move: Option<Move>,

    /// Result, once the game has ended.
    pub result: Option<GameResult>,
}

impl HighlightState {
    /// Empty highlights.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the highlights.
    pub fn apply(&mut self, event: &UiEvent) {
        match event {
            UiEvent::SelectionChanged {
                origin,
                destinations,
            } => {
                self.origin = *origin;
                self.destinations.clone_from(destinations);
            }
            UiEvent::MoveApplied { mv } => {
                self.origin = None;
                self.destinations.clear();
                self.last_move = Some(*mv);
            }
            UiEvent::GameEnded { result } => {
                self.result = Some(*result);
            }
        }
    }

    /// Fold a batch of events in order.
    pub fn apply_all<'a>(&mut self, events: impl IntoIterator<Item = &'a UiEvent>) {
        for event in events {
            self.apply(event);
        }
    }

    /// Check if a square carries a destination marker.
    #[must_use]
    pub fn is_destination(&self, square: Square) -> bool {
        self.destinations.contains(&square)
    }
}

/// Fill used for a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shade {
    Light,
    Dark,
    /// The selected origin.
    Selected,
}

impl Shade {
    /// Palette colour for this shade.
    #[must_use]
    pub fn colour<'a>(&self, palette: &'a Palette) -> &'a str {
        match self {
            Shade::Light => &palette.light,
            Shade::Dark => &palette.dark,
            Shade::Selected => &palette.selected,
        }
    }
}

/// One drawn square.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub square: Square,
    pub rect: Rect,
    pub shade: Shade,
    /// Palette colour for `shade`.
    pub fill: String,
    /// Candidate destination dot.
    pub marker: bool,
    pub glyph: Option<char>,
}

/// Snapshot of everything drawn for one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    /// Cells in display order: top row first, left to right.
    cells: Vec<CellView>,
    marker_radius: u32,
    marker_colour: String,
    status: String,
}

impl BoardView {
    /// Capture the current frame.
    ///
    /// ```
    /// use rust_chessboard::core::BoardConfig;
    /// use rust_chessboard::games::standard::StandardChess;
    /// use rust_chessboard::ui::{BoardView, HighlightState};
    ///
    /// let view = BoardView::capture(
    ///     &StandardChess::new(),
    ///     &HighlightState::new(),
    ///     &BoardConfig::default(),
    /// );
    /// assert_eq!(view.cells().len(), 64);
    /// assert_eq!(view.status(), "White to move");
    /// ```
    #[must_use]
    pub fn capture<R: RulesEngine + ?Sized>(
        engine: &R,
        highlights: &HighlightState,
        config: &BoardConfig,
    ) -> Self {
        let geometry = BoardGeometry::from_config(config);
        let mut cells = Vec::with_capacity(Square::COUNT);
        for row in 0..8 {
            for col in 0..8 {
                let Some(square) = geometry.square_at_cell(col, row) else {
                    continue;
                };
                let shade = if highlights.origin == Some(square) {
                    Shade::Selected
                } else if square.is_dark() {
                    Shade::Dark
                } else {
                    Shade::Light
                };
                cells.push(CellView {
                    square,
                    rect: geometry.square_rect(square),
                    shade,
                    fill: shade.colour(&config.palette).to_string(),
                    marker: highlights.is_destination(square),
                    glyph: engine.piece_at(square).map(glyph),
                });
            }
        }

        let status = match highlights.result.or_else(|| engine.result()) {
            Some(result) => format!("Game Over: {result}"),
            None => format!("{} to move", engine.side_to_move()),
        };

        Self {
            cells,
            marker_radius: geometry.marker_radius(),
            marker_colour: config.palette.marker.clone(),
            status,
        }
    }

    /// All cells, top row first.
    #[must_use]
    pub fn cells(&self) -> &[CellView] {
        &self.cells
    }

    /// Cell drawn for a square.
    #[must_use]
    pub fn cell(&self, square: Square) -> Option<&CellView> {
        self.cells.iter().find(|cell| cell.square == square)
    }

    /// Radius of destination marker dots.
    #[must_use]
    pub fn marker_radius(&self) -> u32 {
        self.marker_radius
    }

    /// Colour of destination marker dots.
    #[must_use]
    pub fn marker_colour(&self) -> &str {
        &self.marker_colour
    }

    /// Status line: side to move, or the final result.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Plain-text rendering for terminals.
    ///
    /// The selected origin is bracketed, candidate destinations show `*`
    /// (or parentheses around a capturable piece).
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for row in self.cells.chunks(8) {
            if let Some(first) = row.first() {
                let _ = write!(out, "{} ", first.square.rank() + 1);
            }
            for cell in row {
                let symbol = cell.glyph.unwrap_or('.');
                let text = match (cell.shade, cell.marker, cell.glyph) {
                    (Shade::Selected, _, _) => format!("[{symbol}]"),
                    (_, true, None) => " * ".to_string(),
                    (_, true, Some(g)) => format!("({g})"),
                    _ => format!(" {symbol} "),
                };
                out.push_str(&text);
            }
            out.push('\n');
        }
        out.push_str("  ");
        for cell in self.cells.iter().take(8) {
            let _ = write!(out, " {} ", (b'a' + cell.square.file()) as char);
        }
        out.push('\n');
        out.push_str(&self.status);
        out.push('\n');
        out
    }
}

impl std::fmt::Display for BoardView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::InteractionController;
    use crate::core::Side;
    use crate::games::standard::StandardChess;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_highlight_fold() {
        let mut h = HighlightState::new();
        h.apply(&UiEvent::SelectionChanged {
            origin: Some(sq("e2")),
            destinations: vec![sq("e3"), sq("e4")],
        });
        assert_eq!(h.origin, Some(sq("e2")));
        assert!(h.is_destination(sq("e4")));

        h.apply(&UiEvent::MoveApplied {
            mv: Move::new(sq("e2"), sq("e4")),
        });
        assert_eq!(h.origin, None);
        assert!(h.destinations.is_empty());
        assert_eq!(h.last_move, Some(Move::new(sq("e2"), sq("e4"))));

        h.apply(&UiEvent::GameEnded {
            result: GameResult::Draw,
        });
        assert_eq!(h.result, Some(GameResult::Draw));
    }

    #[test]
    fn test_cleared_event_drops_highlights() {
        let mut h = HighlightState::new();
        h.apply(&UiEvent::SelectionChanged {
            origin: Some(sq("b1")),
            destinations: vec![sq("a3"), sq("c3")],
        });
        h.apply(&UiEvent::cleared());
        assert_eq!(h.origin, None);
        assert!(h.destinations.is_empty());
    }

    #[test]
    fn test_capture_start_position() {
        let view = BoardView::capture(
            &StandardChess::new(),
            &HighlightState::new(),
            &BoardConfig::default(),
        );
        assert_eq!(view.cells()[0].square, sq("a8"));
        assert_eq!(view.cells()[0].glyph, Some('♜'));
        assert_eq!(view.cells()[63].square, sq("h1"));
        assert_eq!(view.cell(sq("e1")).unwrap().glyph, Some('♔'));
        assert_eq!(view.cell(sq("a1")).unwrap().shade, Shade::Dark);
        assert_eq!(view.cell(sq("h1")).unwrap().shade, Shade::Light);
        assert_eq!(view.marker_radius(), 13);
        assert!(view.cells().iter().all(|c| !c.marker));
    }

    #[test]
    fn test_capture_flipped() {
        let config = BoardConfig::new().flipped();
        let view = BoardView::capture(&StandardChess::new(), &HighlightState::new(), &config);
        assert_eq!(view.cells()[0].square, sq("h1"));
        assert_eq!(view.cells()[0].rect.x, 0);
        assert_eq!(view.cells()[63].square, sq("a8"));
    }

    #[test]
    fn test_capture_selection() {
        let mut c = InteractionController::new(StandardChess::new());
        let mut h = HighlightState::new();
        h.apply_all(&c.handle_click(sq("g1")));

        let view = BoardView::capture(c.engine(), &h, &BoardConfig::default());
        assert_eq!(view.cell(sq("g1")).unwrap().shade, Shade::Selected);
        assert!(view.cell(sq("f3")).unwrap().marker);
        assert!(view.cell(sq("h3")).unwrap().marker);
        assert_eq!(view.cells().iter().filter(|c| c.marker).count(), 2);

        assert_eq!(view.cell(sq("g1")).unwrap().fill, "#F6F669");
        assert_eq!(view.cell(sq("a1")).unwrap().fill, "#B58863");
        assert_eq!(view.cell(sq("h1")).unwrap().fill, "#F0D9B5");
        assert_eq!(view.marker_colour(), "gray");
    }

    #[test]
    fn test_capture_uses_palette_and_size() {
        let mut config = BoardConfig::new().with_square_size(30);
        config.palette.dark = "#000000".to_string();
        config.palette.marker = "red".to_string();
        let view = BoardView::capture(&StandardChess::new(), &HighlightState::new(), &config);

        assert_eq!(view.cell(sq("a1")).unwrap().fill, "#000000");
        assert_eq!(view.cell(sq("a1")).unwrap().rect.y, 210);
        assert_eq!(view.marker_colour(), "red");
        assert_eq!(view.marker_radius(), 5);
    }

    #[test]
    fn test_capture_oversized_geometry() {
        let config = BoardConfig {
            square_size: 400_000_000,
            ..BoardConfig::default()
        };
        let view = BoardView::capture(&StandardChess::new(), &HighlightState::new(), &config);
        assert_eq!(view.cells().len(), 64);
        assert_eq!(view.cell(sq("h1")).unwrap().rect.x, i32::MAX);
    }

    #[test]
    fn test_status_line() {
        let mut c = InteractionController::new(StandardChess::new());
        let mut h = HighlightState::new();
        for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
            h.apply_all(&c.handle_click(sq(from)));
            h.apply_all(&c.handle_click(sq(to)));
        }
        assert_eq!(h.result, Some(GameResult::Winner(Side::Black)));

        let view = BoardView::capture(c.engine(), &h, &BoardConfig::default());
        assert_eq!(view.status(), "Game Over: 0-1");
    }

    #[test]
    fn test_status_from_terminal_fen() {
        let engine = StandardChess::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        let view = BoardView::capture(&engine, &HighlightState::new(), &BoardConfig::default());
        assert_eq!(view.status(), "Game Over: 1/2-1/2");
    }

    #[test]
    fn test_render_text() {
        let mut c = InteractionController::new(StandardChess::new());
        let mut h = HighlightState::new();
        h.apply_all(&c.handle_click(sq("e2")));
        let text = BoardView::capture(c.engine(), &h, &BoardConfig::default()).render_text();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 10);
        assert!(lines[0].starts_with("8  ♜ "));
        assert!(lines[4].contains(" * "));
        assert!(lines[6].contains("[♙]"));
        assert_eq!(lines[8].trim(), "a  b  c  d  e  f  g  h");
        assert_eq!(lines[9], "White to move");
    }
}
