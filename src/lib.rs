//! Dice Duel: a two-player dice roll with a responsive, animated board.

pub mod duel;
