//! Die values and roll outcomes

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of faces on each die.
pub const DIE_FACES: u8 = 6;

/// A single face value in `1..=6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DieValue(u8);

impl DieValue {
    pub const ONE: DieValue = DieValue(1);

    pub fn new(value: u8) -> Option<Self> {
        (1..=DIE_FACES).contains(&value).then_some(Self(value))
    }

    /// Draw a fresh value uniformly from `1..=6`.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self(rng.gen_range(1..=DIE_FACES))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Unicode die face glyph, used by the terminal front end.
    pub fn glyph(self) -> char {
        match self.0 {
            1 => '\u{2680}',
            2 => '\u{2681}',
            3 => '\u{2682}',
            4 => '\u{2683}',
            5 => '\u{2684}',
            _ => '\u{2685}',
        }
    }
}

impl Default for DieValue {
    fn default() -> Self {
        Self::ONE
    }
}

impl std::fmt::Display for DieValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who won a roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    Player1,
    Player2,
    Draw,
}

/// Final values of one roll cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    pub player1: DieValue,
    pub player2: DieValue,
}

impl RollOutcome {
    pub fn new(player1: DieValue, player2: DieValue) -> Self {
        Self { player1, player2 }
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::new(DieValue::random(rng), DieValue::random(rng))
    }

    pub fn winner(&self) -> Winner {
        match self.player1.cmp(&self.player2) {
            std::cmp::Ordering::Greater => Winner::Player1,
            std::cmp::Ordering::Less => Winner::Player2,
            std::cmp::Ordering::Equal => Winner::Draw,
        }
    }

    /// The `a : b` score pair.
    pub fn score(&self) -> String {
        format!("{} : {}", self.player1, self.player2)
    }

    /// Human-readable result embedding both values.
    pub fn message(&self, names: &PlayerNames) -> String {
        match self.winner() {
            Winner::Player1 => format!("{} Wins! ({})", names.player1, self.score()),
            Winner::Player2 => format!("{} Wins! \u{2691} ({})", names.player2, self.score()),
            Winner::Draw => format!("Draw! ({})", self.score()),
        }
    }
}

/// Display names for the two players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerNames {
    #[serde(default = "default_player1")]
    pub player1: String,
    #[serde(default = "default_player2")]
    pub player2: String,
}

fn default_player1() -> String {
    "Player 1".to_string()
}

fn default_player2() -> String {
    "Player 2".to_string()
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self {
            player1: default_player1(),
            player2: default_player2(),
        }
    }
}
