use crate::card::Card;

/// Point total of a hand: the sum of the per-rank values. Pure and
/// order-invariant, so hands compare by a plain integer.
pub fn hand_points(hand: &[Card]) -> u32 {
    hand.iter().map(|card| card.rank.points()).sum()
}
