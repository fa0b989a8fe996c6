//! 卡牌定義
//!
//! 單張卡片的不可變事實：花色、點數、計分值、順子排序值。
//! `revealed` 與 `suit_hidden` 是顯示層狀態，只由 Boss 效果修改，
//! 不影響任何計分判定。

use serde::Serialize;

/// 花色
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Spades,
    Clubs,
}

impl Suit {
    /// 是否為紅色花色（Hearts / Diamonds）
    pub fn is_red(&self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Spades => "Spades",
            Suit::Clubs => "Clubs",
        }
    }

    /// 顯示符號
    pub fn symbol(&self) -> &'static str {
        match self {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Spades => "♠",
            Suit::Clubs => "♣",
        }
    }

    /// 所有花色（用於建構牌組）
    pub fn all() -> &'static [Suit] {
        &[Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs]
    }
}

/// 點數
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// 顯示標籤（唯一，rank 分組以此為鍵）
    pub fn label(&self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Rank::Ace => "Ace",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
        }
    }

    /// 計分值：2..10 照點數，J/Q/K = 11，Ace = 12
    pub fn value(&self) -> i64 {
        match self {
            Rank::Ace => 12,
            Rank::Jack | Rank::Queen | Rank::King => 11,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
        }
    }

    /// 順子排序值：Ace = 1，2..10 照點數，J=11, Q=12, K=13
    ///
    /// 只用於順子判定與排列，與計分值無關。
    pub fn order_index(&self) -> u8 {
        match self {
            Rank::Ace => 1,
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
        }
    }

    /// 是否為人頭牌或 Ace（J/Q/K/A）
    pub fn is_face_or_ace(&self) -> bool {
        matches!(self, Rank::Jack | Rank::Queen | Rank::King | Rank::Ace)
    }

    /// 所有點數（用於建構牌組）
    pub fn all() -> &'static [Rank] {
        &[
            Rank::Ace,
            Rank::Two,
            Rank::Three,
            Rank::Four,
            Rank::Five,
            Rank::Six,
            Rank::Seven,
            Rank::Eight,
            Rank::Nine,
            Rank::Ten,
            Rank::Jack,
            Rank::Queen,
            Rank::King,
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
    /// 是否正面朝上（Braille Boss 會蓋住高牌）
    pub revealed: bool,
    /// 花色是否被隱藏（No Money for a Suit Boss）
    pub suit_hidden: bool,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            revealed: true,
            suit_hidden: false,
        }
    }

    pub fn value(&self) -> i64 {
        self.rank.value()
    }

    pub fn order_index(&self) -> u8 {
        self.rank.order_index()
    }

    pub fn is_red(&self) -> bool {
        self.suit.is_red()
    }

    pub fn is_face_or_ace(&self) -> bool {
        self.rank.is_face_or_ace()
    }

    /// 完整名稱，例如 "Ace of Hearts"
    pub fn name(&self) -> String {
        format!("{} of {}", self.rank.display_name(), self.suit.name())
    }
}

/// 創建標準 52 張牌組（未洗牌）
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(crate::game::DECK_SIZE);
    for &suit in Suit::all() {
        for &rank in Rank::all() {
            deck.push(Card::new(rank, suit));
        }
    }
    deck
}

// ============================================================================
// 單元測試
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rank_values() {
        assert_eq!(Rank::Ace.value(), 12);
        assert_eq!(Rank::King.value(), 11);
        assert_eq!(Rank::Queen.value(), 11);
        assert_eq!(Rank::Jack.value(), 11);
        assert_eq!(Rank::Seven.value(), 7);
        assert_eq!(Rank::Two.value(), 2);
    }

    #[test]
    fn test_rank_order_index() {
        assert_eq!(Rank::Ace.order_index(), 1);
        assert_eq!(Rank::Two.order_index(), 2);
        assert_eq!(Rank::Ten.order_index(), 10);
        assert_eq!(Rank::Jack.order_index(), 11);
        assert_eq!(Rank::Queen.order_index(), 12);
        assert_eq!(Rank::King.order_index(), 13);
    }

    #[test]
    fn test_face_or_ace() {
        assert!(Rank::Ace.is_face_or_ace());
        assert!(Rank::King.is_face_or_ace());
        assert!(!Rank::Ten.is_face_or_ace());
    }

    #[test]
    fn test_red_suits() {
        assert!(Suit::Hearts.is_red());
        assert!(Suit::Diamonds.is_red());
        assert!(!Suit::Spades.is_red());
        assert!(!Suit::Clubs.is_red());
    }

    #[test]
    fn test_card_name() {
        let card = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(card.name(), "Ace of Hearts");
        assert_eq!(Card::new(Rank::Ten, Suit::Clubs).name(), "10 of Clubs");
    }

    #[test]
    fn test_standard_deck_is_unique_52() {
        let deck = standard_deck();
        assert_eq!(deck.len(), 52);

        let mut seen = HashSet::new();
        for card in deck {
            assert!(seen.insert((card.rank, card.suit)));
            assert!(card.revealed);
            assert!(!card.suit_hidden);
        }
    }
}
