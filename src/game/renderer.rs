/// Board renderer: the 10×10 grid, turn narrative and status lines
use std::io::{self, Write};

use crate::core::renderer::GameRenderer;
use crate::core::terminal::{TerminalColor, TerminalContext};

use super::board::{square_name, FeatureKind, FINISH, START};
use super::state::{GameState, TurnOutcome};

pub const GRID_SIDE: u8 = 10;
const CELL_WIDTH: usize = 4;

/// Square shown at `row` (1 = bottom, 10 = top) and `col` (1 = left).
/// Odd rows run left to right, even rows right to left.
pub fn square_at(row: u8, col: u8) -> u8 {
    let offset = if row % 2 == 0 { GRID_SIDE + 1 - col } else { col };
    (row - 1) * GRID_SIDE + offset
}

pub fn player_color(player: u8) -> TerminalColor {
    match player {
        1 => TerminalColor::Yellow,
        2 => TerminalColor::Blue,
        3 => TerminalColor::Magenta,
        4 => TerminalColor::Cyan,
        _ => TerminalColor::Default,
    }
}

pub fn feature_color(kind: FeatureKind) -> TerminalColor {
    match kind {
        FeatureKind::Snake => TerminalColor::Red,
        FeatureKind::Ladder => TerminalColor::Green,
    }
}

/// Text and color for one cell: player marker, then feature label, then
/// start/finish names, then the bare number.
pub fn cell(state: &GameState, square: u8) -> (String, TerminalColor) {
    if let Some(player) = state.player_on(square) {
        return (format!("P{}", player), player_color(player));
    }
    if let Some(feature) = state.board().feature_at(square) {
        return (feature.label(), feature_color(feature.kind));
    }
    let text = match square {
        START => "St".to_string(),
        FINISH => "Fs".to_string(),
        n => n.to_string(),
    };
    (text, TerminalColor::Default)
}

#[derive(Debug, Default)]
pub struct BoardRenderer;

impl BoardRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Snake/ladder announcement, printed before the board is redrawn in the
    /// feature's own color.
    pub fn render_narrative<W: Write>(&self, outcome: &TurnOutcome, ctx: &mut TerminalContext<W>) -> io::Result<()> {
        let (Some(hit), Some(line)) = (outcome.feature.as_ref(), outcome.narrative()) else {
            return Ok(());
        };
        ctx.print_colored_line(&line, feature_color(hit.kind))
    }

    pub fn render_status<W: Write>(&self, outcome: &TurnOutcome, ctx: &mut TerminalContext<W>) -> io::Result<()> {
        ctx.empty_line()?;
        ctx.print_line(&format!(
            "Player {} rolled a {}. Current position: {}",
            outcome.player,
            outcome.roll,
            square_name(outcome.position)
        ))
    }
}

impl GameRenderer<GameState> for BoardRenderer {
    fn render<W: Write>(&self, state: &GameState, ctx: &mut TerminalContext<W>) -> io::Result<()> {
        ctx.empty_line()?;
        ctx.print_line("Board:")?;
        for row in (1..=GRID_SIDE).rev() {
            for col in 1..=GRID_SIDE {
                let (text, color) = cell(state, square_at(row, col));
                let padded = format!("{:>width$}", text, width = CELL_WIDTH);
                match color {
                    TerminalColor::Default => ctx.print(&padded)?,
                    _ => ctx.print_colored(&padded, color)?,
                }
                ctx.print(" ")?;
            }
            ctx.empty_line()?;
        }
        ctx.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::Board;

    fn render_plain(state: &GameState) -> String {
        let mut ctx = TerminalContext::new(Vec::new(), false);
        BoardRenderer::new().render(state, &mut ctx).unwrap();
        String::from_utf8(ctx.into_inner()).unwrap()
    }

    #[test]
    fn grid_is_boustrophedon() {
        assert_eq!(square_at(1, 1), 1);
        assert_eq!(square_at(1, 10), 10);
        assert_eq!(square_at(2, 1), 20);
        assert_eq!(square_at(2, 10), 11);
        assert_eq!(square_at(10, 1), 100);
        assert_eq!(square_at(10, 10), 91);
        assert_eq!(square_at(9, 1), 81);
    }

    #[test]
    fn grid_covers_every_square_once() {
        let mut all: Vec<u8> = (1..=10)
            .flat_map(|r| (1..=10).map(move |c| square_at(r, c)))
            .collect();
        all.sort_unstable();
        assert_eq!(all, (1..=100).collect::<Vec<u8>>());
    }

    #[test]
    fn cell_priority() {
        let board = Board::from_pairs(&[(40, 12)], &[(7, 63)]).unwrap();
        let mut state = GameState::new(board, 2);
        assert_eq!(cell(&state, 40), ("S1".to_string(), TerminalColor::Red));
        assert_eq!(cell(&state, 63), ("L1".to_string(), TerminalColor::Green));
        assert_eq!(cell(&state, 100), ("Fs".to_string(), TerminalColor::Default));
        assert_eq!(cell(&state, 55), ("55".to_string(), TerminalColor::Default));

        state.apply_roll(4);
        state.apply_roll(4);
        assert_eq!(cell(&state, 4), ("P1".to_string(), TerminalColor::Yellow));

        // a player standing on a feature hides its label
        let board = Board::from_pairs(&[(5, 2)], &[]).unwrap();
        let mut state = GameState::new(board, 3);
        state.apply_roll(2);
        state.apply_roll(1);
        state.apply_roll(1);
        assert_eq!(cell(&state, 5), ("P1".to_string(), TerminalColor::Yellow));
        assert_eq!(cell(&state, 1), ("P2".to_string(), TerminalColor::Blue));
    }

    #[test]
    fn rendered_board_layout() {
        let board = Board::from_pairs(&[(40, 12)], &[(7, 63)]).unwrap();
        let state = GameState::new(board, 2);
        let out = render_plain(&state);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "Board:");
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[2], "  Fs   99   98   97   96   95   94   93   92   91 ");
        assert_eq!(lines[11], "   1    2    3    4    5    6   L1    8    9   10 ");
        assert!(lines[8].contains("  S1 "));
        assert!(lines.iter().all(|l| l.is_empty() || l == &"Board:" || l.len() == 50));
    }

    #[test]
    fn colored_board_contains_escapes() {
        let board = Board::from_pairs(&[(40, 12)], &[]).unwrap();
        let state = GameState::new(board, 2);
        let mut ctx = TerminalContext::new(Vec::new(), true);
        BoardRenderer::new().render(&state, &mut ctx).unwrap();
        let out = String::from_utf8(ctx.into_inner()).unwrap();
        assert!(out.contains('\u{1b}'));
        assert!(out.contains("S1"));
    }

    #[test]
    fn narrative_is_colored_by_feature() {
        let board = Board::from_pairs(&[(4, 2)], &[(3, 63)]).unwrap();
        let mut state = GameState::new(board, 2);
        let snake = state.apply_roll(4);
        let ladder = state.apply_roll(3);

        let mut ctx = TerminalContext::new(Vec::new(), true);
        BoardRenderer::new().render_narrative(&snake, &mut ctx).unwrap();
        let mut expected = TerminalContext::new(Vec::new(), true);
        expected
            .print_colored("Oops! You landed on snake S1. Sliding to square 2.", TerminalColor::Red)
            .unwrap();
        expected.empty_line().unwrap();
        assert_eq!(ctx.into_inner(), expected.into_inner());

        let mut ctx = TerminalContext::new(Vec::new(), false);
        BoardRenderer::new().render_narrative(&ladder, &mut ctx).unwrap();
        assert_eq!(
            String::from_utf8(ctx.into_inner()).unwrap(),
            "Yay! You found ladder L1. Climbing to square 63.\n"
        );
    }

    #[test]
    fn plain_move_has_no_narrative_output() {
        let board = Board::from_pairs(&[(40, 12)], &[]).unwrap();
        let mut state = GameState::new(board, 2);
        let outcome = state.apply_roll(5);
        let mut ctx = TerminalContext::new(Vec::new(), true);
        BoardRenderer::new().render_narrative(&outcome, &mut ctx).unwrap();
        assert!(ctx.into_inner().is_empty());
    }

    #[test]
    fn status_line() {
        let board = Board::from_pairs(&[], &[(7, 63)]).unwrap();
        let mut state = GameState::new(board, 2);
        let outcome = state.apply_roll(1);
        let mut ctx = TerminalContext::new(Vec::new(), false);
        BoardRenderer::new().render_status(&outcome, &mut ctx).unwrap();
        assert_eq!(
            String::from_utf8(ctx.into_inner()).unwrap(),
            "\nPlayer 1 rolled a 1. Current position: 1\n"
        );
    }
}
