use log::debug;
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};

use crate::{
    card::Card,
    error::GameError,
};

/// Cards dealt to each active player.
pub const HAND_SIZE: usize = 5;

/// The pool of cards not currently held in a hand. Cards leave the draw
/// pile by dealing and return to it only through `replace_card`; cards
/// cleared from hands land on the discard pile, so the draw pile, the
/// discard pile and all hands together always form the full 52 card set.
pub struct Deck {
    draw_pile: Vec<Card>,
    discards: Vec<Card>,
    rng: SmallRng,
}

impl Deck {
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    /// Deterministic deck for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    fn with_rng(rng: SmallRng) -> Self {
        Deck {
            draw_pile: vec![],
            discards: vec![],
            rng,
        }
    }

    /// Fill the draw pile with the full card set, suit-major rank-minor.
    /// Must only be called once per session, before any dealing.
    pub fn generate(&mut self) -> Result<(), GameError> {
        if !self.draw_pile.is_empty() {
            return Err(GameError::DeckAlreadyGenerated(self.draw_pile.len()));
        }
        self.draw_pile = Card::deck();
        Ok(())
    }

    pub fn shuffle(&mut self) {
        self.draw_pile.shuffle(&mut self.rng);
    }

    /// Deal `count` cards into each hand, in the given order. Every hand is
    /// cleared onto the discard pile first. Fails before touching any hand
    /// if the draw pile cannot cover the whole deal.
    pub fn deal(&mut self, hands: &mut [&mut Vec<Card>], count: usize) -> Result<(), GameError> {
        let needed = count * hands.len();
        if self.draw_pile.len() < needed {
            return Err(GameError::InsufficientCards {
                needed,
                available: self.draw_pile.len(),
            });
        }
        for hand in hands.iter_mut() {
            self.discards.append(hand);
            for _ in 0..count {
                let card = self.draw_pile.pop().expect("deal size checked up front");
                hand.push(card);
            }
        }
        debug!(
            "dealt {} cards to {} hands, {} left in the draw pile",
            needed,
            hands.len(),
            self.draw_pile.len()
        );
        Ok(())
    }

    /// Swap the card at `index` for a random one: the card goes back into
    /// the draw pile, the pile is reshuffled and one card is drawn. The
    /// returned card may come straight back by chance. Hand size and draw
    /// pile size are unchanged on success; nothing is touched on error.
    pub fn replace_card(
        &mut self,
        hand: &mut Vec<Card>,
        index: usize,
    ) -> Result<(Card, Card), GameError> {
        if index >= hand.len() {
            return Err(GameError::InvalidIndex {
                index,
                hand_size: hand.len(),
            });
        }
        let discarded = hand.remove(index);
        self.draw_pile.push(discarded);
        self.shuffle();
        let drawn = self
            .draw_pile
            .pop()
            .expect("draw pile holds at least the returned card");
        hand.push(drawn);
        debug!("replaced {} with {}", discarded, drawn);
        Ok((discarded, drawn))
    }

    /// Move a whole hand onto the discard pile (elimination).
    pub fn discard(&mut self, hand: &mut Vec<Card>) {
        self.discards.append(hand);
    }

    pub fn remaining(&self) -> usize {
        self.draw_pile.len()
    }

    /// Every card the deck accounts for: draw pile plus discards. Together
    /// with the live hands this must always be the full card set.
    pub fn pool(&self) -> impl Iterator<Item = &Card> {
        self.draw_pile.iter().chain(self.discards.iter())
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{Deck, HAND_SIZE};
    use crate::{
        card::{Card, DECK_SIZE},
        error::GameError,
    };

    fn full_deck() -> Deck {
        let mut deck = Deck::seeded(7);
        deck.generate().unwrap();
        deck
    }

    #[test]
    fn generate_should_fill_the_draw_pile_once() {
        let mut deck = full_deck();
        assert_eq!(deck.remaining(), DECK_SIZE);
        assert_eq!(
            deck.generate(),
            Err(GameError::DeckAlreadyGenerated(DECK_SIZE))
        );
        assert_eq!(deck.remaining(), DECK_SIZE);
    }

    #[test]
    fn shuffle_should_permute_but_preserve_the_card_set() {
        let mut deck = full_deck();
        deck.shuffle();
        assert_ne!(deck.draw_pile, Card::deck());
        assert_eq!(
            deck.draw_pile.iter().collect::<HashSet<_>>().len(),
            DECK_SIZE
        );
    }

    #[test]
    fn seeded_decks_should_shuffle_identically() {
        let mut first = full_deck();
        let mut second = full_deck();
        first.shuffle();
        second.shuffle();
        assert_eq!(first.draw_pile, second.draw_pile);
    }

    #[test]
    fn deal_should_give_each_hand_five_cards_from_the_pile_end() {
        let mut deck = full_deck();
        deck.shuffle();
        let mut first = vec![];
        let mut second = vec![];
        let mut third = vec![];
        deck.deal(&mut [&mut first, &mut second, &mut third], HAND_SIZE)
            .unwrap();
        assert_eq!(first.len(), HAND_SIZE);
        assert_eq!(second.len(), HAND_SIZE);
        assert_eq!(third.len(), HAND_SIZE);
        assert_eq!(deck.remaining(), DECK_SIZE - 3 * HAND_SIZE);
    }

    #[test]
    fn deal_should_clear_old_hands_onto_the_discard_pile() {
        let mut deck = full_deck();
        let mut hand = vec![];
        deck.deal(&mut [&mut hand], HAND_SIZE).unwrap();
        let old_hand = hand.clone();
        deck.deal(&mut [&mut hand], HAND_SIZE).unwrap();
        assert_eq!(hand.len(), HAND_SIZE);
        assert!(old_hand.iter().all(|c| deck.discards.contains(c)));
        assert_eq!(deck.remaining(), DECK_SIZE - 2 * HAND_SIZE);
    }

    #[test]
    fn deal_should_reject_an_uncovered_deal_before_mutating_any_hand() {
        let mut deck = Deck::seeded(7);
        let mut hand = vec![];
        assert_eq!(
            deck.deal(&mut [&mut hand], HAND_SIZE),
            Err(GameError::InsufficientCards {
                needed: HAND_SIZE,
                available: 0,
            })
        );
        assert!(hand.is_empty());

        let mut deck = full_deck();
        let mut hands: Vec<Vec<Card>> = vec![vec![]; 10];
        {
            let mut refs: Vec<&mut Vec<Card>> = hands.iter_mut().collect();
            deck.deal(&mut refs, HAND_SIZE).unwrap();
        }
        assert_eq!(deck.remaining(), 2);
        let mut extra = vec![];
        assert_eq!(
            deck.deal(&mut [&mut extra], HAND_SIZE),
            Err(GameError::InsufficientCards {
                needed: HAND_SIZE,
                available: 2,
            })
        );
        assert!(extra.is_empty());
        assert_eq!(deck.remaining(), 2);
    }

    #[test]
    fn replace_card_should_keep_hand_and_pile_sizes() {
        let mut deck = full_deck();
        deck.shuffle();
        let mut hand = vec![];
        deck.deal(&mut [&mut hand], HAND_SIZE).unwrap();
        let before = deck.remaining();

        let (discarded, drawn) = deck.replace_card(&mut hand, 2).unwrap();
        assert_eq!(hand.len(), HAND_SIZE);
        assert_eq!(deck.remaining(), before);
        assert_eq!(*hand.last().unwrap(), drawn);
        assert!(!hand.contains(&discarded) || discarded == drawn);
    }

    #[test]
    fn replace_card_should_leave_everything_untouched_on_a_bad_index() {
        let mut deck = full_deck();
        deck.shuffle();
        let mut hand = vec![];
        deck.deal(&mut [&mut hand], HAND_SIZE).unwrap();
        let hand_before = hand.clone();
        let pile_before = deck.remaining();

        assert_eq!(
            deck.replace_card(&mut hand, 7),
            Err(GameError::InvalidIndex {
                index: 7,
                hand_size: HAND_SIZE,
            })
        );
        assert_eq!(hand, hand_before);
        assert_eq!(deck.remaining(), pile_before);
    }

    #[test]
    fn pool_and_hands_should_always_cover_the_full_card_set() {
        let mut deck = full_deck();
        deck.shuffle();
        let mut first = vec![];
        let mut second = vec![];
        deck.deal(&mut [&mut first, &mut second], HAND_SIZE).unwrap();
        deck.replace_card(&mut first, 0).unwrap();
        deck.deal(&mut [&mut second], HAND_SIZE).unwrap();
        deck.discard(&mut first);

        let tracked: HashSet<Card> = deck
            .pool()
            .copied()
            .chain(first.iter().copied())
            .chain(second.iter().copied())
            .collect();
        assert_eq!(tracked.len(), DECK_SIZE);
    }
}
