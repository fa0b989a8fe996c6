//! 牌型定義

use serde::Serialize;

/// 牌型判定旗標
///
/// 各旗標彼此獨立、可同時成立：葫蘆（Full House）即以
/// `three_of_a_kind && pair` 同時為真的方式編碼，交由倍率階梯解讀。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HandFlags {
    pub pair: bool,
    pub two_pair: bool,
    pub three_of_a_kind: bool,
    pub four_of_a_kind: bool,
    pub straight: bool,
    pub flush: bool,
    /// 10-J-Q-K-A 順子的標記。沿用既有行為：不要求同花也會設起，
    /// 30 倍獎勵仍需 `royal && flush` 才成立。
    pub royal: bool,
}

impl HandFlags {
    /// 是否為葫蘆編碼（三條 + 對子）
    pub fn is_full_house(&self) -> bool {
        self.three_of_a_kind && self.pair
    }
}

/// 牌型 ID
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum HandId {
    HighCard,
    Pair,
    TwoPair,
    ThreeKind,
    Straight,
    Flush,
    FullHouse,
    FourKind,
    StraightFlush,
    RoyalFlush,
}

impl HandId {
    /// 由旗標決定牌型：優先階梯，先符合者先贏（順序即規則）
    pub fn from_flags(flags: &HandFlags) -> HandId {
        if flags.royal && flags.flush {
            HandId::RoyalFlush
        } else if flags.straight && flags.flush {
            HandId::StraightFlush
        } else if flags.four_of_a_kind {
            HandId::FourKind
        } else if flags.is_full_house() {
            HandId::FullHouse
        } else if flags.flush {
            HandId::Flush
        } else if flags.straight {
            HandId::Straight
        } else if flags.three_of_a_kind {
            HandId::ThreeKind
        } else if flags.two_pair {
            HandId::TwoPair
        } else if flags.pair {
            HandId::Pair
        } else {
            HandId::HighCard
        }
    }

    /// 牌型倍率
    pub fn multiplier(&self) -> i64 {
        match self {
            HandId::RoyalFlush => 30,
            HandId::StraightFlush => 15,
            HandId::FourKind => 12,
            HandId::FullHouse => 10,
            HandId::Flush => 8,
            HandId::Straight => 7,
            HandId::ThreeKind => 5,
            HandId::TwoPair => 4,
            HandId::Pair => 2,
            HandId::HighCard => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HandId::RoyalFlush => "Royal Flush",
            HandId::StraightFlush => "Straight Flush",
            HandId::FourKind => "Four of a Kind",
            HandId::FullHouse => "Full House",
            HandId::Flush => "Flush",
            HandId::Straight => "Straight",
            HandId::ThreeKind => "Three of a Kind",
            HandId::TwoPair => "Two Pair",
            HandId::Pair => "Pair",
            HandId::HighCard => "High Card",
        }
    }
}

/// 手牌計分結果
///
/// 每次手牌選擇變動時重新計算，不跨結算保存。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    /// 空手牌時為 `None`（標籤為空字串）
    pub hand: Option<HandId>,
    pub base_points: i64,
    pub multiplier: i64,
}

impl ScoreResult {
    /// 空手牌結果：`{ "", 0, 0 }`
    pub fn empty() -> Self {
        Self {
            hand: None,
            base_points: 0,
            multiplier: 0,
        }
    }

    pub fn label(&self) -> &'static str {
        self.hand.map(|h| h.label()).unwrap_or("")
    }

    /// 未含 Joker/Boss 修正的原始分數
    pub fn raw_total(&self) -> i64 {
        self.base_points * self.multiplier
    }
}

// ============================================================================
// 單元測試
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_priority_royal_needs_flush() {
        let mut flags = HandFlags {
            straight: true,
            royal: true,
            ..Default::default()
        };
        // royal 但非同花：當成普通順子計分
        assert_eq!(HandId::from_flags(&flags), HandId::Straight);
        assert_eq!(HandId::from_flags(&flags).multiplier(), 7);

        flags.flush = true;
        assert_eq!(HandId::from_flags(&flags), HandId::RoyalFlush);
        assert_eq!(HandId::from_flags(&flags).multiplier(), 30);
    }

    #[test]
    fn test_full_house_encoding() {
        let flags = HandFlags {
            pair: true,
            three_of_a_kind: true,
            ..Default::default()
        };
        assert!(flags.is_full_house());
        assert_eq!(HandId::from_flags(&flags), HandId::FullHouse);
        assert_eq!(HandId::from_flags(&flags).multiplier(), 10);
    }

    #[test]
    fn test_ladder_order_matters() {
        // 四條優先於同花/順子判定之前已由旗標組合決定
        let flags = HandFlags {
            four_of_a_kind: true,
            ..Default::default()
        };
        assert_eq!(HandId::from_flags(&flags).multiplier(), 12);

        let flags = HandFlags {
            straight: true,
            flush: true,
            ..Default::default()
        };
        assert_eq!(HandId::from_flags(&flags), HandId::StraightFlush);
        assert_eq!(HandId::from_flags(&flags).multiplier(), 15);
    }

    #[test]
    fn test_empty_score_result() {
        let result = ScoreResult::empty();
        assert_eq!(result.label(), "");
        assert_eq!(result.base_points, 0);
        assert_eq!(result.multiplier, 0);
        assert_eq!(result.raw_total(), 0);
    }

    #[test]
    fn test_all_multipliers() {
        assert_eq!(HandId::HighCard.multiplier(), 1);
        assert_eq!(HandId::Pair.multiplier(), 2);
        assert_eq!(HandId::TwoPair.multiplier(), 4);
        assert_eq!(HandId::ThreeKind.multiplier(), 5);
        assert_eq!(HandId::Straight.multiplier(), 7);
        assert_eq!(HandId::Flush.multiplier(), 8);
        assert_eq!(HandId::FullHouse.multiplier(), 10);
        assert_eq!(HandId::FourKind.multiplier(), 12);
        assert_eq!(HandId::StraightFlush.multiplier(), 15);
        assert_eq!(HandId::RoyalFlush.multiplier(), 30);
    }
}
