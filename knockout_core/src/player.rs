use crate::{card::Card, event::Event};

pub type PlayerId = usize;

/// A player's decision for their turn: keep the hand as dealt, or swap
/// the card at the given index for a random replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Keep,
    Replace(usize),
}

pub struct PlayerData {
    name: String,
}

impl PlayerData {
    pub fn new(name: String) -> Self {
        PlayerData { name }
    }
}

/// Decision provider for one seat. Implementations own only their name and
/// whatever I/O they need; hands and the deck stay inside the game state,
/// so a provider can never mutate cards behind the engine's back.
pub trait Player {
    fn data(&self) -> &PlayerData;

    fn data_mut(&mut self) -> &mut PlayerData;

    fn name(&self) -> &String {
        &self.data().name
    }

    fn notify(&self, game_log: &[Event], players: &[&String]);

    fn obtain_action(&self, hand: &[Card], players: &[&String], game_log: &[Event]) -> Action;
}
