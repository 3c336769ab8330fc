use log::info;

use crate::{
    card::Card,
    deck::Deck,
    error::GameError,
    event::Event,
    game_state::GameState,
    player::{Player, PlayerId},
    tiebreak::{overall_winner, Verdict},
};

/// Owns the decision providers and drives the round engine against them.
/// Hands and the deck live in the `GameState`; providers only ever see
/// events and their own hand, and answer with an `Action`.
pub struct GameLobby {
    players: Vec<Box<dyn Player>>,
}

impl GameLobby {
    pub fn new() -> Self {
        GameLobby { players: vec![] }
    }

    pub fn add_player<C, T>(&mut self, player_constructor: C)
    where
        C: FnOnce() -> T,
        T: Player + 'static,
    {
        let player = player_constructor();
        self.players.push(Box::new(player));
    }

    pub fn player_names(&self) -> Vec<&String> {
        self.players.iter().map(|p| p.name()).collect::<Vec<_>>()
    }

    /// Elimination game: one player is knocked out per round until a sole
    /// survivor remains. With three players that is exactly two rounds.
    pub fn run(&mut self, deck: Deck) -> Result<PlayerId, GameError> {
        let mut game_log: Vec<Event> = vec![];
        let mut reported = 0;
        let mut state = GameState::new(self.players.len(), deck);

        while !state.game_over() {
            state.begin_round(&mut game_log)?;
            self.broadcast(&game_log, &mut reported);

            self.replacement_phase(&mut state, &mut game_log, &mut reported);

            let scores = state.score_round(&mut game_log);
            state.eliminate_lowest(&scores, &mut game_log);
            state.finish_round();
            self.broadcast(&game_log, &mut reported);
        }

        let winner = *state
            .active_players()
            .first()
            .expect("lobby must hold at least one player");
        info!("player {} wins after {} rounds", winner, state.round - 1);
        game_log.push(Event::Winner(vec![winner]));
        self.broadcast(&game_log, &mut reported);
        Ok(winner)
    }

    /// Single-deal showdown: one deal, one optional replacement each, then
    /// the tie-break cascade picks the overall winner (or declares a tie).
    pub fn run_showdown(&mut self, deck: Deck) -> Result<Verdict, GameError> {
        let mut game_log: Vec<Event> = vec![];
        let mut reported = 0;
        let mut state = GameState::new(self.players.len(), deck);

        state.begin_round(&mut game_log)?;
        self.broadcast(&game_log, &mut reported);

        self.replacement_phase(&mut state, &mut game_log, &mut reported);
        state.score_round(&mut game_log);

        let hands: Vec<&[Card]> = state.players.iter().map(|p| p.hand().as_slice()).collect();
        let verdict = overall_winner(&hands);
        info!("showdown verdict: {:?}", verdict);
        game_log.push(Event::Winner(match &verdict {
            Verdict::Winner(id) => vec![*id],
            Verdict::Tie(ids) => ids.clone(),
        }));
        self.broadcast(&game_log, &mut reported);
        Ok(verdict)
    }

    /// Offer every active seat, in order, one optional replacement.
    fn replacement_phase(
        &self,
        state: &mut GameState,
        game_log: &mut Vec<Event>,
        reported: &mut usize,
    ) {
        for id in state.active_players() {
            let action = self.players[id].obtain_action(
                state.players[id].hand(),
                &self.player_names(),
                &game_log[..],
            );
            state.apply_action(id, action, game_log);
            self.broadcast(game_log, reported);
        }
    }

    /// Push every not-yet-reported log entry to every provider.
    fn broadcast(&self, game_log: &[Event], reported: &mut usize) {
        let names = self.player_names();
        for player in &self.players {
            player.notify(&game_log[*reported..], &names);
        }
        *reported = game_log.len();
    }
}

impl Default for GameLobby {
    fn default() -> Self {
        Self::new()
    }
}
