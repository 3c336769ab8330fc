pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game_lobby;
mod game_logic;
pub mod game_state;
pub mod player;
pub mod random_playing_computer;
pub mod scoring;
pub mod tiebreak;
pub mod utils;

/// Seats per session. The rules are written for three players; the deal
/// arithmetic (52 cards, 5 per hand, one re-deal per elimination) is only
/// validated for this count.
pub const PLAYER_COUNT: usize = 3;
