use rand::Rng;

use crate::{
    card::Card,
    event::Event,
    player::{Action, Player, PlayerData, PlayerId},
};

/// Decision provider that flips a coin on replacing and picks the slot at
/// random. Fills empty seats so fewer than three humans can play.
pub struct RandomPlayingComputer {
    pub data: PlayerData,
}

impl RandomPlayingComputer {
    pub fn new(id: PlayerId) -> Self {
        RandomPlayingComputer {
            data: PlayerData::new(format!("Computer {}", id + 1)),
        }
    }
}

impl Player for RandomPlayingComputer {
    fn data(&self) -> &PlayerData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut PlayerData {
        &mut self.data
    }

    fn notify(&self, _game_log: &[Event], _players: &[&String]) {}

    fn obtain_action(&self, hand: &[Card], _players: &[&String], _game_log: &[Event]) -> Action {
        let mut rng = rand::thread_rng();
        if hand.is_empty() || rng.gen_bool(0.5) {
            Action::Keep
        } else {
            Action::Replace(rng.gen_range(0..hand.len()))
        }
    }
}
