use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// `Deck::generate` was called while the draw pile still holds cards.
    #[error("deck already generated, draw pile holds {0} cards")]
    DeckAlreadyGenerated(usize),

    /// A deal was requested that the draw pile cannot cover. Fatal: the
    /// session must stop rather than deal short or duplicate cards.
    #[error("not enough cards to deal: need {needed}, draw pile holds {available}")]
    InsufficientCards { needed: usize, available: usize },

    /// A replacement named a card slot outside the hand. Recoverable: the
    /// round engine reports it and skips the replacement.
    #[error("invalid card index {index} for a hand of {hand_size} cards")]
    InvalidIndex { index: usize, hand_size: usize },
}
