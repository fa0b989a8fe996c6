//! Boss 系統
//!
//! 每個 Ante 的第 3 回合啟用一個 Boss，效果分為四類：
//! 需求調整（回合開始）、資源調整（回合開始）、結算修正（每手）、
//! 顯示遮蔽（蓋牌 / 隱藏花色，不影響計分）。
//! Boss 從每局的池子中不重複抽出，池子抽空後整池補回。

use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;

use super::cards::{Card, Suit};
use super::hand_types::HandFlags;

/// Boss 總數
pub const BOSS_COUNT: usize = 7;

/// Boss 唯一識別碼
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum BossId {
    TheWall,         // 分數需求 x1.5
    ILoveTwos,       // 只有對子 / 兩對的手牌得分
    HeartBreak,      // 紅心牌的值從該手分數中扣除
    Braille,         // 人頭牌與 Ace 蓋牌顯示
    GoodLuck,        // 出牌 -2、棄牌 +2
    NoMoneyForASuit, // 隱藏所有牌的花色顯示
    InsiderTrading,  // 每手結算後總分 x0.9
}

impl BossId {
    pub fn display_name(&self) -> &'static str {
        match self {
            BossId::TheWall => "The Wall Boss",
            BossId::ILoveTwos => "I Love Twos Boss",
            BossId::HeartBreak => "Heart Break Boss",
            BossId::Braille => "Braille Boss",
            BossId::GoodLuck => "Good Luck Boss",
            BossId::NoMoneyForASuit => "No Money for a Suit Boss",
            BossId::InsiderTrading => "Insider Trading Boss",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BossId::TheWall => "Increases points requirement by x1.5.",
            BossId::ILoveTwos => "Only allows pair or two-pair to be valid.",
            BossId::HeartBreak => "Subtracts the value of Heart cards from total.",
            BossId::Braille => "Face cards J,Q,K,A are not revealed.",
            BossId::GoodLuck => "One less hand and two more discards.",
            BossId::NoMoneyForASuit => "Hides the suit of all cards in the deck.",
            BossId::InsiderTrading => "Reduces total points by 10%.",
        }
    }

    /// 回合開始時套用在分數需求上的倍數
    pub fn requirement_multiplier(&self) -> f64 {
        match self {
            BossId::TheWall => 1.5,
            _ => 1.0,
        }
    }

    /// 回合開始時的出牌次數修正
    pub fn hands_delta(&self) -> i32 {
        match self {
            BossId::GoodLuck => -2,
            _ => 0,
        }
    }

    /// 回合開始時的棄牌次數修正
    pub fn discards_delta(&self) -> i32 {
        match self {
            BossId::GoodLuck => 2,
            _ => 0,
        }
    }

    /// 該手牌型是否允許得分（I Love Twos 的否決）
    pub fn allows_hand(&self, flags: &HandFlags) -> bool {
        match self {
            BossId::ILoveTwos => flags.pair || flags.two_pair,
            _ => true,
        }
    }

    /// 從該手分數中扣除的點數（Heart Break 扣掉手牌中所有紅心的值）
    pub fn point_deduction(&self, hand: &[Card]) -> i64 {
        match self {
            BossId::HeartBreak => hand
                .iter()
                .filter(|c| c.suit == Suit::Hearts)
                .map(|c| c.value())
                .sum(),
            _ => 0,
        }
    }

    /// 是否蓋住高牌（value 11/12 的 J/Q/K/A）的顯示
    pub fn hides_high_cards(&self) -> bool {
        matches!(self, BossId::Braille)
    }

    /// 是否隱藏花色顯示
    pub fn masks_suits(&self) -> bool {
        matches!(self, BossId::NoMoneyForASuit)
    }

    /// 每手結算後套用在累積總分上的倍數
    pub fn score_decay(&self) -> f64 {
        match self {
            BossId::InsiderTrading => 0.9,
            _ => 1.0,
        }
    }

    /// 所有 Boss（抽取池來源）
    pub fn all() -> &'static [BossId] {
        &[
            BossId::TheWall,
            BossId::ILoveTwos,
            BossId::HeartBreak,
            BossId::Braille,
            BossId::GoodLuck,
            BossId::NoMoneyForASuit,
            BossId::InsiderTrading,
        ]
    }
}

// ============================================================================
// Boss 抽取池
// ============================================================================

/// 每局一個：不重複抽出，抽空後整池補回
#[derive(Clone, Debug)]
pub struct BossPool {
    remaining: Vec<BossId>,
}

impl BossPool {
    pub fn new() -> Self {
        Self {
            remaining: BossId::all().to_vec(),
        }
    }

    /// 隨機抽出一個 Boss
    pub fn draw(&mut self, rng: &mut StdRng) -> BossId {
        if self.remaining.is_empty() {
            self.remaining = BossId::all().to_vec();
        }
        let idx = rng.gen_range(0..self.remaining.len());
        self.remaining.remove(idx)
    }

    pub fn remaining_len(&self) -> usize {
        self.remaining.len()
    }
}

impl Default for BossPool {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// 單元測試
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::cards::Rank;

    #[test]
    fn test_requirement_multiplier() {
        assert_eq!(BossId::TheWall.requirement_multiplier(), 1.5);
        assert_eq!(BossId::HeartBreak.requirement_multiplier(), 1.0);
    }

    #[test]
    fn test_good_luck_resource_deltas() {
        assert_eq!(BossId::GoodLuck.hands_delta(), -2);
        assert_eq!(BossId::GoodLuck.discards_delta(), 2);
        assert_eq!(BossId::TheWall.hands_delta(), 0);
        assert_eq!(BossId::TheWall.discards_delta(), 0);
    }

    #[test]
    fn test_i_love_twos_veto() {
        let pair = HandFlags {
            pair: true,
            ..Default::default()
        };
        let two_pair = HandFlags {
            two_pair: true,
            ..Default::default()
        };
        let trips = HandFlags {
            three_of_a_kind: true,
            ..Default::default()
        };
        assert!(BossId::ILoveTwos.allows_hand(&pair));
        assert!(BossId::ILoveTwos.allows_hand(&two_pair));
        assert!(!BossId::ILoveTwos.allows_hand(&trips));
        assert!(BossId::TheWall.allows_hand(&trips));
    }

    #[test]
    fn test_heart_break_deduction() {
        let hand = vec![
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Seven, Suit::Hearts),
            Card::new(Rank::King, Suit::Spades),
        ];
        assert_eq!(BossId::HeartBreak.point_deduction(&hand), 12 + 7);
        assert_eq!(BossId::TheWall.point_deduction(&hand), 0);
    }

    #[test]
    fn test_visibility_flags() {
        assert!(BossId::Braille.hides_high_cards());
        assert!(!BossId::Braille.masks_suits());
        assert!(BossId::NoMoneyForASuit.masks_suits());
        assert!(!BossId::NoMoneyForASuit.hides_high_cards());
    }

    #[test]
    fn test_insider_trading_decay() {
        assert_eq!(BossId::InsiderTrading.score_decay(), 0.9);
        assert_eq!(BossId::Braille.score_decay(), 1.0);
    }

    #[test]
    fn test_pool_draws_without_replacement_then_refills() {
        use rand::SeedableRng;
        let mut rng = StdRng::seed_from_u64(11);
        let mut pool = BossPool::new();

        let mut drawn = Vec::new();
        for _ in 0..BOSS_COUNT {
            drawn.push(pool.draw(&mut rng));
        }
        drawn.sort_by_key(|b| b.display_name());
        drawn.dedup();
        assert_eq!(drawn.len(), BOSS_COUNT);
        assert_eq!(pool.remaining_len(), 0);

        // 抽空之後整池補回再抽
        let _ = pool.draw(&mut rng);
        assert_eq!(pool.remaining_len(), BOSS_COUNT - 1);
    }
}
