/// Game state and the turn engine
use tracing::debug;

use super::board::{Board, FeatureKind, FINISH, START};
use super::dice::Roll;

pub const MIN_PLAYERS: u8 = 2;
pub const MAX_PLAYERS: u8 = 4;

/// Move `position` forward by `roll`, unless that would pass the finish.
pub fn update_position(position: u8, roll: u8) -> u8 {
    let target = u16::from(position) + u16::from(roll);
    if target <= u16::from(FINISH) {
        target as u8
    } else {
        position
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    /// 1-based seat.
    pub number: u8,
    pub position: u8,
}

/// A snake or ladder that fired during a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureHit {
    pub kind: FeatureKind,
    pub label: String,
    pub from: u8,
    pub to: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub player: u8,
    pub roll: u8,
    pub start: u8,
    /// Square reached by the roll alone.
    pub landed: u8,
    pub overshot: bool,
    pub feature: Option<FeatureHit>,
    pub position: u8,
    pub won: bool,
}

impl TurnOutcome {
    /// The line announcing a snake or ladder, if one fired.
    pub fn narrative(&self) -> Option<String> {
        self.feature.as_ref().map(|hit| match hit.kind {
            FeatureKind::Snake => format!(
                "Oops! You landed on snake {}. Sliding to square {}.",
                hit.label, hit.to
            ),
            FeatureKind::Ladder => format!(
                "Yay! You found ladder {}. Climbing to square {}.",
                hit.label, hit.to
            ),
        })
    }
}

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    players: Vec<Player>,
    current: usize,
    winner: Option<u8>,
    turns: u32,
}

impl GameState {
    /// # Panics
    ///
    /// If `player_count` is outside `MIN_PLAYERS..=MAX_PLAYERS`. Setup and the
    /// CLI only hand over counts they have already bounded.
    pub fn new(board: Board, player_count: u8) -> Self {
        assert!(
            (MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count),
            "player count must be {MIN_PLAYERS}-{MAX_PLAYERS}"
        );
        let players = (1..=player_count)
            .map(|number| Player { number, position: START })
            .collect();
        Self {
            board,
            players,
            current: 0,
            winner: None,
            turns: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Seat number of the player about to move.
    pub fn current_player(&self) -> u8 {
        self.players[self.current].number
    }

    pub fn winner(&self) -> Option<u8> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn turns_played(&self) -> u32 {
        self.turns
    }

    /// Lowest-numbered player standing on `square`.
    pub fn player_on(&self, square: u8) -> Option<u8> {
        self.players
            .iter()
            .find(|p| p.position == square)
            .map(|p| p.number)
    }

    /// Roll for the current player and move them.
    pub fn take_turn<D: Roll + ?Sized>(&mut self, dice: &mut D) -> TurnOutcome {
        let roll = dice.roll_die();
        self.apply_roll(roll)
    }

    /// Move the current player by `roll`, resolve any snake or ladder, and pass
    /// the turn on unless the game was won.
    ///
    /// # Panics
    ///
    /// If the game already has a winner.
    pub fn apply_roll(&mut self, roll: u8) -> TurnOutcome {
        assert!(!self.is_over(), "game already won by player {:?}", self.winner);

        let player = &mut self.players[self.current];
        let start = player.position;
        let landed = update_position(start, roll);
        let overshot = landed == start;

        let feature = if overshot {
            None
        } else {
            self.board.feature_at(landed).and_then(|f| {
                f.partner_of(landed).map(|to| FeatureHit {
                    kind: f.kind,
                    label: f.label(),
                    from: landed,
                    to,
                })
            })
        };
        let position = feature.as_ref().map_or(landed, |hit| hit.to);
        player.position = position;

        let won = position == FINISH;
        let outcome = TurnOutcome {
            player: player.number,
            roll,
            start,
            landed,
            overshot,
            feature,
            position,
            won,
        };
        debug!(?outcome, "turn resolved");

        self.turns += 1;
        if won {
            self.winner = Some(outcome.player);
        } else {
            self.current = (self.current + 1) % self.players.len();
        }
        outcome
    }
}
