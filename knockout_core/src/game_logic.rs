use log::{debug, info};

use crate::{
    card::Card,
    deck::HAND_SIZE,
    error::GameError,
    event::Event,
    game_state::GameState,
    player::{Action, PlayerId},
    scoring::hand_points,
};

/// The per-round engine. One round walks three phases: optional
/// replacements, scoring, elimination of the lowest score.
impl GameState {
    /// Open a round: round 1 generates and shuffles the deck, every round
    /// deals 5 fresh cards to each active seat (old cards go to discards).
    pub fn begin_round(&mut self, game_log: &mut Vec<Event>) -> Result<(), GameError> {
        info!("round {} started", self.round);
        game_log.push(Event::RoundStarted(self.round));
        if self.round == 1 {
            self.deck.generate()?;
            self.deck.shuffle();
        }
        self.deal_active_hands(game_log)
    }

    fn deal_active_hands(&mut self, game_log: &mut Vec<Event>) -> Result<(), GameError> {
        let ids = self.active_players();
        let Self { deck, players, .. } = self;
        {
            let mut hands: Vec<&mut Vec<Card>> = players
                .iter_mut()
                .filter(|p| p.is_active())
                .map(|p| p.hand_mut())
                .collect();
            deck.deal(&mut hands, HAND_SIZE)?;
        }
        for id in ids {
            game_log.push(Event::Dealt(id, players[id].hand().clone()));
        }
        Ok(())
    }

    /// Apply one seat's replacement decision. An out-of-range index is not
    /// fatal: it is logged and the replacement is skipped for this turn.
    pub fn apply_action(&mut self, player_id: PlayerId, action: Action, game_log: &mut Vec<Event>) {
        let index = match action {
            Action::Keep => return,
            Action::Replace(index) => index,
        };
        let Self { deck, players, .. } = self;
        match deck.replace_card(players[player_id].hand_mut(), index) {
            Ok((discarded, drawn)) => {
                debug!("player {} swapped {} for {}", player_id, discarded, drawn);
                game_log.push(Event::Replaced(
                    player_id,
                    discarded,
                    drawn,
                    players[player_id].hand().clone(),
                ));
            }
            Err(e) => {
                debug!("player {} replacement skipped: {}", player_id, e);
                game_log.push(Event::ReplacementRejected(player_id, index));
            }
        }
    }

    /// Score every active hand, in seat order.
    pub fn score_round(&self, game_log: &mut Vec<Event>) -> Vec<(PlayerId, u32)> {
        self.active_players()
            .into_iter()
            .map(|id| {
                let points = hand_points(self.players[id].hand());
                game_log.push(Event::Scored(id, self.players[id].hand().clone(), points));
                (id, points)
            })
            .collect()
    }

    /// Remove the first seat holding the minimum score. Bottom ties break
    /// by seat position, not by the overall-winner cascade. The loser's
    /// hand goes to the discard pile.
    pub fn eliminate_lowest(
        &mut self,
        scores: &[(PlayerId, u32)],
        game_log: &mut Vec<Event>,
    ) -> PlayerId {
        let mut loser = scores[0];
        for &entry in &scores[1..] {
            if entry.1 < loser.1 {
                loser = entry;
            }
        }
        let Self { deck, players, .. } = self;
        deck.discard(players[loser.0].hand_mut());
        players[loser.0].set_eliminated();
        info!("player {} eliminated with {} points", loser.0, loser.1);
        game_log.push(Event::Eliminated(loser.0));
        loser.0
    }

    pub fn finish_round(&mut self) {
        self.round += 1;
    }
}
