use crate::{card::Card, deck::Deck, player::PlayerId};

pub struct PlayerState {
    hand: Vec<Card>,
    eliminated: bool,
}

impl PlayerState {
    fn new() -> Self {
        PlayerState {
            hand: vec![],
            eliminated: false,
        }
    }

    pub fn hand(&self) -> &Vec<Card> {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut Vec<Card> {
        &mut self.hand
    }

    pub fn is_active(&self) -> bool {
        !self.eliminated
    }

    /// Elimination is permanent; there is no way back to active.
    pub fn set_eliminated(&mut self) {
        self.eliminated = true;
    }
}

pub struct GameState {
    pub deck: Deck,
    pub players: Vec<PlayerState>,
    pub round: usize,
}

impl GameState {
    pub fn new(player_count: usize, deck: Deck) -> Self {
        GameState {
            deck,
            players: (0..player_count).map(|_| PlayerState::new()).collect(),
            round: 1,
        }
    }

    /// Seats still in the game, in seat order. Order matters: bottom-score
    /// ties are broken positionally.
    pub fn active_players(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .enumerate()
            .filter(|&(_, p)| p.is_active())
            .map(|(id, _)| id)
            .collect()
    }

    pub fn game_over(&self) -> bool {
        self.active_players().len() <= 1
    }
}
