/// The 100-square track and its snake/ladder features
use std::collections::HashMap;
use std::fmt;

use thiserror::Error;
use tracing::info;

use super::dice::GameRng;

pub const START: u8 = 0;
pub const FINISH: u8 = 100;

/// Feature squares are drawn from this range; neither start nor finish can carry one.
pub const FIRST_FEATURE_SQUARE: u8 = 1;
pub const LAST_FEATURE_SQUARE: u8 = 99;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    Snake,
    Ladder,
}

impl FeatureKind {
    fn prefix(self) -> char {
        match self {
            FeatureKind::Snake => 'S',
            FeatureKind::Ladder => 'L',
        }
    }
}

/// A snake or ladder joining two squares. The label is shared by both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub kind: FeatureKind,
    /// 1-based number within its kind.
    pub number: u8,
    pub squares: (u8, u8),
}

impl Feature {
    pub fn label(&self) -> String {
        format!("{}{}", self.kind.prefix(), self.number)
    }

    /// The other end of this feature, if `square` is one of its ends.
    pub fn partner_of(&self, square: u8) -> Option<u8> {
        let (a, b) = self.squares;
        if square == a {
            Some(b)
        } else if square == b {
            Some(a)
        } else {
            None
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}<->{}", self.label(), self.squares.0, self.squares.1)
    }
}

/// Number of snake pairs, and of ladder pairs, on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 3;

    pub fn level(self) -> u8 {
        self.0
    }

    /// Distinct squares a board of this difficulty occupies.
    pub fn square_count(self) -> usize {
        4 * usize::from(self.0)
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = BoardError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(BoardError::Difficulty(level))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("difficulty {0} is outside {min}-{max}", min = Difficulty::MIN, max = Difficulty::MAX)]
    Difficulty(u8),
    #[error("square {0} cannot hold a snake or ladder")]
    SquareOutOfRange(u8),
    #[error("square {0} is used by more than one snake or ladder end")]
    SquareReused(u8),
}

/// Features are stored once, and every feature square maps straight to the
/// feature that owns it, so the partner of any feature square is one lookup.
#[derive(Debug, Clone, Default)]
pub struct Board {
    features: Vec<Feature>,
    by_square: HashMap<u8, usize>,
}

impl Board {
    /// Random board: `4 × difficulty` distinct squares, shuffled, the first half
    /// paired into snakes and the second half into ladders.
    ///
    /// Direction is not enforced; a "snake" whose first square is lower still
    /// joins the same two squares.
    pub fn generate(difficulty: Difficulty, rng: &mut GameRng) -> Self {
        let mut squares = rng.sample_distinct(
            FIRST_FEATURE_SQUARE,
            LAST_FEATURE_SQUARE,
            difficulty.square_count(),
        );
        rng.shuffle(&mut squares);

        let (snake_squares, ladder_squares) = squares.split_at(squares.len() / 2);
        let mut board = Board::default();
        for (kind, half) in [(FeatureKind::Snake, snake_squares), (FeatureKind::Ladder, ladder_squares)] {
            for (i, pair) in half.chunks_exact(2).enumerate() {
                board.insert(Feature {
                    kind,
                    number: i as u8 + 1,
                    squares: (pair[0], pair[1]),
                });
            }
        }

        info!(difficulty = difficulty.level(), seed = rng.seed(), board = %board, "generated board");
        board
    }

    /// Board from explicit `(from, to)` pairs, numbered in the given order.
    pub fn from_pairs(snakes: &[(u8, u8)], ladders: &[(u8, u8)]) -> Result<Self, BoardError> {
        let mut board = Board::default();
        for (kind, pairs) in [(FeatureKind::Snake, snakes), (FeatureKind::Ladder, ladders)] {
            for (i, &(a, b)) in pairs.iter().enumerate() {
                for square in [a, b] {
                    if !(FIRST_FEATURE_SQUARE..=LAST_FEATURE_SQUARE).contains(&square) {
                        return Err(BoardError::SquareOutOfRange(square));
                    }
                    if board.by_square.contains_key(&square) {
                        return Err(BoardError::SquareReused(square));
                    }
                }
                if a == b {
                    return Err(BoardError::SquareReused(a));
                }
                board.insert(Feature {
                    kind,
                    number: i as u8 + 1,
                    squares: (a, b),
                });
            }
        }
        Ok(board)
    }

    fn insert(&mut self, feature: Feature) {
        let idx = self.features.len();
        self.by_square.insert(feature.squares.0, idx);
        self.by_square.insert(feature.squares.1, idx);
        self.features.push(feature);
    }

    pub fn feature_at(&self, square: u8) -> Option<&Feature> {
        self.by_square.get(&square).map(|&idx| &self.features[idx])
    }

    /// Square sharing a label with `square`, never `square` itself.
    pub fn partner(&self, square: u8) -> Option<u8> {
        self.feature_at(square).and_then(|f| f.partner_of(square))
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn snakes(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter().filter(|f| f.kind == FeatureKind::Snake)
    }

    pub fn ladders(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter().filter(|f| f.kind == FeatureKind::Ladder)
    }

    /// Every square carrying a feature end.
    pub fn occupied_squares(&self) -> impl Iterator<Item = u8> + '_ {
        self.by_square.keys().copied()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, feature) in self.features.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", feature)?;
        }
        Ok(())
    }
}

/// Name of a square in status text: `St` for the start, the number otherwise.
pub fn square_name(square: u8) -> String {
    match square {
        START => "St".to_string(),
        n => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn difficulty_bounds() {
        assert!(Difficulty::try_from(0).is_err());
        assert_eq!(Difficulty::try_from(1).unwrap().square_count(), 4);
        assert_eq!(Difficulty::try_from(3).unwrap().square_count(), 12);
        assert_eq!(Difficulty::try_from(4), Err(BoardError::Difficulty(4)));
    }

    #[test]
    fn difficulty_one_has_one_snake_and_one_ladder() {
        let mut rng = GameRng::new(5);
        let board = Board::generate(Difficulty::try_from(1).unwrap(), &mut rng);
        assert_eq!(board.snakes().count(), 1);
        assert_eq!(board.ladders().count(), 1);
        assert_eq!(board.occupied_squares().collect::<HashSet<_>>().len(), 4);
    }

    #[test]
    fn generated_labels_are_numbered_per_kind() {
        let mut rng = GameRng::new(9);
        let board = Board::generate(Difficulty::try_from(3).unwrap(), &mut rng);
        let snakes: Vec<_> = board.snakes().map(Feature::label).collect();
        let ladders: Vec<_> = board.ladders().map(Feature::label).collect();
        assert_eq!(snakes, ["S1", "S2", "S3"]);
        assert_eq!(ladders, ["L1", "L2", "L3"]);
    }

    #[test]
    fn same_seed_same_board() {
        let d = Difficulty::try_from(2).unwrap();
        let a = Board::generate(d, &mut GameRng::new(77));
        let b = Board::generate(d, &mut GameRng::new(77));
        assert_eq!(a.features(), b.features());
    }

    #[test]
    fn partner_is_the_other_end() {
        let board = Board::from_pairs(&[(40, 12)], &[(7, 63)]).unwrap();
        assert_eq!(board.partner(40), Some(12));
        assert_eq!(board.partner(12), Some(40));
        assert_eq!(board.partner(7), Some(63));
        assert_eq!(board.partner(63), Some(7));
        assert_eq!(board.partner(50), None);
        assert_eq!(board.feature_at(12).map(Feature::label), Some("S1".to_string()));
    }

    #[test]
    fn from_pairs_rejects_reused_squares() {
        assert_eq!(
            Board::from_pairs(&[(40, 12)], &[(12, 63)]).unwrap_err(),
            BoardError::SquareReused(12)
        );
        assert_eq!(
            Board::from_pairs(&[(30, 30)], &[]).unwrap_err(),
            BoardError::SquareReused(30)
        );
    }

    #[test]
    fn from_pairs_rejects_start_and_finish() {
        assert_eq!(
            Board::from_pairs(&[(100, 12)], &[]).unwrap_err(),
            BoardError::SquareOutOfRange(100)
        );
        assert_eq!(
            Board::from_pairs(&[], &[(0, 12)]).unwrap_err(),
            BoardError::SquareOutOfRange(0)
        );
    }

    #[test]
    fn display_lists_features() {
        let board = Board::from_pairs(&[(40, 12)], &[(7, 63)]).unwrap();
        assert_eq!(board.to_string(), "S1 40<->12, L1 7<->63");
    }

    #[test]
    fn start_square_has_a_name() {
        assert_eq!(square_name(0), "St");
        assert_eq!(square_name(42), "42");
    }
}
