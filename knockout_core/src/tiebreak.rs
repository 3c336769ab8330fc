use std::hash::Hash;

use itertools::Itertools;

use crate::{card::Card, player::PlayerId, scoring::hand_points, utils::SliceExtensions};

/// Outcome of the overall-winner pass. A tie carries every player still
/// level after the whole cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Winner(PlayerId),
    Tie(Vec<PlayerId>),
}

/// Pick the overall winner among the given hands (indexed by seat).
///
/// The cascade: highest point total wins outright; among top-score ties,
/// the largest single-suit group decides; among those still level, the
/// largest single-rank group decides; anything left is a declared tie.
/// Only the maximum group size is compared, so players with different but
/// equally sized concentration patterns stay tied.
pub fn overall_winner(hands: &[&[Card]]) -> Verdict {
    if hands.is_empty() {
        return Verdict::Tie(vec![]);
    }
    let scores: Vec<u32> = hands.iter().map(|hand| hand_points(hand)).collect();
    let top = *scores.iter().max().unwrap();
    let tied: Vec<PlayerId> = (0..hands.len()).filter(|&id| scores[id] == top).collect();
    if let Some(&id) = tied.single_element() {
        return Verdict::Winner(id);
    }

    let suit_tied = most_concentrated(&tied, hands, |card| card.suit);
    if let Some(&id) = suit_tied.single_element() {
        return Verdict::Winner(id);
    }

    let rank_tied = most_concentrated(&suit_tied, hands, |card| card.rank);
    if let Some(&id) = rank_tied.single_element() {
        return Verdict::Winner(id);
    }
    Verdict::Tie(rank_tied)
}

/// Keep the candidates whose hand holds the largest single group under
/// `key` (all of them, when several share the maximum).
fn most_concentrated<K, F>(candidates: &[PlayerId], hands: &[&[Card]], key: F) -> Vec<PlayerId>
where
    K: Eq + Hash,
    F: Fn(&Card) -> K,
{
    let groups: Vec<usize> = candidates
        .iter()
        .map(|&id| largest_group(hands[id], &key))
        .collect();
    let best = *groups.iter().max().unwrap();
    candidates
        .iter()
        .zip(groups.iter())
        .filter(|&(_, &group)| group == best)
        .map(|(&id, _)| id)
        .collect()
}

fn largest_group<K: Eq + Hash>(hand: &[Card], key: impl Fn(&Card) -> K) -> usize {
    hand.iter()
        .map(key)
        .counts()
        .into_values()
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{overall_winner, Verdict};
    use crate::card::Card;

    fn hand(cards: &[&str]) -> Vec<Card> {
        cards.iter().map(|s| Card::from_str(s).unwrap()).collect()
    }

    #[test]
    fn strictly_highest_score_should_win_outright() {
        let first = hand(&["S-2", "H-3", "D-4", "C-5", "S-6"]);
        let second = hand(&["H-A", "D-K", "C-Q", "S-J", "H-10"]);
        let third = hand(&["D-2", "C-3", "S-4", "H-5", "D-6"]);
        let verdict = overall_winner(&[&first, &second, &third]);
        assert_eq!(verdict, Verdict::Winner(1));
    }

    #[test]
    fn top_score_tie_should_fall_to_suit_concentration() {
        // All three score 20; only the first holds three of one suit.
        let first = hand(&["S-2", "S-3", "S-4", "H-5", "D-6"]);
        let second = hand(&["H-2", "H-3", "D-4", "C-5", "S-6"]);
        let third = hand(&["D-2", "D-3", "C-4", "S-5", "H-6"]);
        let verdict = overall_winner(&[&first, &second, &third]);
        assert_eq!(verdict, Verdict::Winner(0));
    }

    #[test]
    fn suit_tie_should_fall_to_rank_concentration() {
        // Equal scores and both peak at two cards of one suit; only the
        // first holds a rank pair.
        let first = hand(&["S-2", "H-2", "S-3", "H-4", "D-9"]);
        let second = hand(&["C-2", "D-3", "C-4", "H-5", "D-6"]);
        let verdict = overall_winner(&[&first, &second]);
        assert_eq!(verdict, Verdict::Winner(0));
    }

    #[test]
    fn fully_level_hands_should_be_a_declared_tie() {
        let first = hand(&["S-2", "S-3", "H-4", "D-5", "C-6"]);
        let second = hand(&["H-2", "H-3", "S-4", "C-5", "D-6"]);
        let verdict = overall_winner(&[&first, &second]);
        assert_eq!(verdict, Verdict::Tie(vec![0, 1]));
    }

    #[test]
    fn lower_scoring_players_should_not_reach_the_cascade() {
        // The third hand has the best suit concentration but a lower
        // score, so the cascade only sees the first two.
        let first = hand(&["S-2", "H-2", "S-3", "H-4", "D-9"]);
        let second = hand(&["C-2", "D-3", "C-4", "H-5", "D-6"]);
        let third = hand(&["C-3", "C-5", "C-6", "D-2", "H-3"]);
        assert_eq!(overall_winner(&[&first, &second, &third]), Verdict::Winner(0));
    }

    #[test]
    fn no_hands_should_be_an_empty_tie() {
        assert_eq!(overall_winner(&[]), Verdict::Tie(vec![]));
    }
}
