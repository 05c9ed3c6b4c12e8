//! Card identities: suit, rank and the immutable card value.
//!
//! Cards carry no per-instance state. Two cards with the same suit and rank
//! are the same card; the catalog guarantees each identity appears once.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in catalog order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Diamonds and Hearts are red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Diamonds | Suit::Hearts)
    }

    /// Clubs and Spades are black.
    #[must_use]
    pub const fn is_black(self) -> bool {
        !self.is_red()
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = CatalogError;

    /// Case-insensitive suit name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "clubs" => Ok(Suit::Clubs),
            "diamonds" => Ok(Suit::Diamonds),
            "hearts" => Ok(Suit::Hearts),
            "spades" => Ok(Suit::Spades),
            _ => Err(CatalogError::UnknownSuit(s.to_string())),
        }
    }
}

/// Card rank, 2 through 14 (Ace high).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const TWO: Rank = Rank(2);
    pub const TEN: Rank = Rank(10);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);
    pub const ACE: Rank = Rank(14);

    /// Lowest and highest legal rank values.
    pub const MIN: u8 = 2;
    pub const MAX: u8 = 14;

    /// Create a rank, rejecting values outside 2..=14.
    pub fn new(value: u8) -> Result<Self, CatalogError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CatalogError::RankOutOfRange(value))
        }
    }

    /// Every rank from Two to Ace.
    pub fn all() -> impl Iterator<Item = Rank> {
        (Self::MIN..=Self::MAX).map(Rank)
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Jack, Queen, King and Ace.
    #[must_use]
    pub const fn is_face(self) -> bool {
        self.0 >= Self::JACK.0
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self.0 {
            2 => "Two",
            3 => "Three",
            4 => "Four",
            5 => "Five",
            6 => "Six",
            7 => "Seven",
            8 => "Eight",
            9 => "Nine",
            10 => "Ten",
            11 => "Jack",
            12 => "Queen",
            13 => "King",
            _ => "Ace",
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = CatalogError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value)
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rank {
    type Err = CatalogError;

    /// Asset-style rank: `2`..`10`, or `j`, `q`, `k`, `a` in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "j" => Ok(Rank::JACK),
            "q" => Ok(Rank::QUEEN),
            "k" => Ok(Rank::KING),
            "a" => Ok(Rank::ACE),
            "2" => Ok(Rank(2)),
            "3" => Ok(Rank(3)),
            "4" => Ok(Rank(4)),
            "5" => Ok(Rank(5)),
            "6" => Ok(Rank(6)),
            "7" => Ok(Rank(7)),
            "8" => Ok(Rank(8)),
            "9" => Ok(Rank(9)),
            "10" => Ok(Rank::TEN),
            _ => Err(CatalogError::UnknownRank(s.to_string())),
        }
    }
}

/// A playing card. Identity is structural.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Build a card from a raw rank value.
    pub fn from_parts(suit: Suit, rank: u8) -> Result<Self, CatalogError> {
        Ok(Self::new(suit, Rank::new(rank)?))
    }

    #[must_use]
    pub const fn is_red(self) -> bool {
        self.suit.is_red()
    }

    #[must_use]
    pub const fn is_face(self) -> bool {
        self.rank.is_face()
    }

    /// Rank as an integer for synergy arithmetic.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.rank.0 as u32
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.suit, self.rank)
    }
}

impl FromStr for Card {
    type Err = CatalogError;

    /// Parse asset names like `Clubs_2` or `hearts_J`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('_');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(suit), Some(rank), None) => Ok(Card::new(suit.parse()?, rank.parse()?)),
            _ => Err(CatalogError::MalformedName(s.to_string())),
        }
    }
}
