use std::{fmt, str::FromStr};

use itertools::iproduct;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Number of cards in a freshly generated deck.
pub const DECK_SIZE: usize = 52;

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Display, EnumIter, EnumString)]
pub enum Suit {
    #[strum(serialize = "S")]
    Spades,
    #[strum(serialize = "H")]
    Hearts,
    #[strum(serialize = "D")]
    Diamonds,
    #[strum(serialize = "C")]
    Clubs,
}

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Display, EnumIter, EnumString)]
pub enum Rank {
    #[strum(serialize = "2")]
    Two,
    #[strum(serialize = "3")]
    Three,
    #[strum(serialize = "4")]
    Four,
    #[strum(serialize = "5")]
    Five,
    #[strum(serialize = "6")]
    Six,
    #[strum(serialize = "7")]
    Seven,
    #[strum(serialize = "8")]
    Eight,
    #[strum(serialize = "9")]
    Nine,
    #[strum(serialize = "10")]
    Ten,
    #[strum(serialize = "J")]
    Jack,
    #[strum(serialize = "Q")]
    Queen,
    #[strum(serialize = "K")]
    King,
    #[strum(serialize = "A")]
    Ace,
}

impl Rank {
    /// Point value used by the scoring policy. Numeric ranks score their
    /// face value, court cards score 11/12/13 and the ace scores 20.
    pub fn points(&self) -> u32 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
            Rank::Ace => 20,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// The full 52 card set in suit-major, rank-minor order.
    pub fn deck() -> Vec<Card> {
        iproduct!(Suit::iter(), Rank::iter())
            .map(|(suit, rank)| Card { suit, rank })
            .collect()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.suit, self.rank)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseCardError;

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (suit, rank) = s.split_once('-').ok_or(ParseCardError)?;
        Ok(Card {
            suit: Suit::from_str(suit).map_err(|_| ParseCardError)?,
            rank: Rank::from_str(rank).map_err(|_| ParseCardError)?,
        })
    }
}
