use crate::{card::Card, player::PlayerId};

/// Entries of the game log. The lobby broadcasts new entries to every
/// decision provider after each step; UI crates render them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    RoundStarted(usize),
    Dealt(PlayerId, Vec<Card>),
    /// Discarded card, drawn card, hand after the swap.
    Replaced(PlayerId, Card, Card, Vec<Card>),
    /// Replacement skipped because the chosen index was out of range.
    ReplacementRejected(PlayerId, usize),
    Scored(PlayerId, Vec<Card>, u32),
    Eliminated(PlayerId),
    /// Sole survivor of an elimination game, or every still-tied player
    /// of a showdown. More than one entry means a declared tie.
    Winner(Vec<PlayerId>),
}
