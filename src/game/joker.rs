//! Joker 系統
//!
//! 12 種 Joker 以封閉 enum 定義，效果用 pattern match 靜態分發。
//! 每手結算類效果是 `(手牌, 上下文) -> JokerBonus` 的純函數；
//! TheWorld / Brimstone 不參與每手結算，只在回合開始時提供
//! 額外的出牌 / 棄牌次數。

use serde::Serialize;

use super::cards::Card;
use super::constants::BOSS_ROUND;
use super::scoring::{classify_hand, score_hand, winning_cards};

/// Joker 總數
pub const JOKER_COUNT: usize = 12;

/// Joker 唯一識別碼
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum JokerId {
    ClassicJoker,   // +4 multiplier
    RedRageJoker,   // 紅色牌 >= 3 時每張 +20 points
    HalfJoker,      // 手牌 <= 3 張時 +15 multiplier
    GigachadJoker,  // 順子 / 葫蘆時 +5x 最高牌值
    ToiletJoker,    // 同花時 +10 multiplier
    KnightlyJoker,  // 有人頭牌或 Ace 時，每張得分牌補到 21 點
    GhastlyJoker,   // Boss 回合 +0.5x 自身倍率
    DoggJoker,      // 手牌張數 x 桌面最高牌值
    TheWorldJoker,  // 本回合 +2 出牌次數（回合開始結算）
    BrimstoneJoker, // 本回合 +2 棄牌次數（回合開始結算）
    NegativeJoker,  // 非得分牌也計分；倍率 = 剩餘出牌 + 棄牌
    GodJoker,       // 每張 +50 points、+5x 自身倍率
}

impl JokerId {
    pub fn display_name(&self) -> &'static str {
        match self {
            JokerId::ClassicJoker => "Classic Joker",
            JokerId::RedRageJoker => "Red Rage Joker",
            JokerId::HalfJoker => "Half Joker",
            JokerId::GigachadJoker => "Gigachad Joker",
            JokerId::ToiletJoker => "Toilet Joker",
            JokerId::KnightlyJoker => "Knightly Joker",
            JokerId::GhastlyJoker => "Ghastly Joker",
            JokerId::DoggJoker => "Dogg Joker",
            JokerId::TheWorldJoker => "The World Joker",
            JokerId::BrimstoneJoker => "Brimstone Joker",
            JokerId::NegativeJoker => "Negative Joker",
            JokerId::GodJoker => "God Joker",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            JokerId::ClassicJoker => "+4 multiplier.",
            JokerId::RedRageJoker => "+20 points per red card if 3+ red cards in the hand.",
            JokerId::HalfJoker => "+15 multiplier if hand has 3 or fewer cards.",
            JokerId::GigachadJoker => {
                "+Highest card value x5 for a Straight or Full House."
            }
            JokerId::ToiletJoker => "+10 multiplier for a Flush.",
            JokerId::KnightlyJoker => {
                "Face cards (incl. Ace) make all winning cards worth 21 points."
            }
            JokerId::GhastlyJoker => "+0.5x of the hand's own multiplier in Boss Rounds.",
            JokerId::DoggJoker => "All cards take the value of the highest card on your table.",
            JokerId::TheWorldJoker => "2 extra hands this round.",
            JokerId::BrimstoneJoker => "2 extra discards this round.",
            JokerId::NegativeJoker => {
                "+1 multiplier per discard/hand left; all cards count for points."
            }
            JokerId::GodJoker => "x5 multiplier and +50 points per card in the winning hand.",
        }
    }

    /// 回合開始時的額外出牌次數（每個佔用欄位各計一次）
    pub fn hands_bonus(&self) -> i32 {
        match self {
            JokerId::TheWorldJoker => 2,
            _ => 0,
        }
    }

    /// 回合開始時的額外棄牌次數（每個佔用欄位各計一次）
    pub fn discards_bonus(&self) -> i32 {
        match self {
            JokerId::BrimstoneJoker => 2,
            _ => 0,
        }
    }

    /// 所有 Joker（選擇階段的抽取池來源）
    pub fn all() -> &'static [JokerId] {
        &[
            JokerId::ClassicJoker,
            JokerId::RedRageJoker,
            JokerId::HalfJoker,
            JokerId::GigachadJoker,
            JokerId::ToiletJoker,
            JokerId::KnightlyJoker,
            JokerId::GhastlyJoker,
            JokerId::DoggJoker,
            JokerId::TheWorldJoker,
            JokerId::BrimstoneJoker,
            JokerId::NegativeJoker,
            JokerId::GodJoker,
        ]
    }
}

// ============================================================================
// Joker Bonus 結構
// ============================================================================

/// 單個 Joker 對一手牌的加成
///
/// 倍率加成允許小數（Ghastly 會貢獻 0.5 倍的自身倍率）。
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct JokerBonus {
    pub points: i64,
    pub mult: f64,
}

impl JokerBonus {
    pub fn new() -> Self {
        Self::default()
    }

    /// 合併另一個 bonus（兩個欄位的貢獻各自相加）
    pub fn merge(&mut self, other: &JokerBonus) {
        self.points += other.points;
        self.mult += other.mult;
    }
}

// ============================================================================
// Joker 計分上下文
// ============================================================================

/// 計算 Joker 效果時的上下文資訊
pub struct ScoringContext<'a> {
    pub table: &'a [Card],
    pub hands_left: i32,
    pub discards_left: i32,
    pub round: i32,
    pub ante: i32,
    pub boss_active: bool,
}

// ============================================================================
// Joker 效果計算
// ============================================================================

/// 計算單個 Joker 的每手加成
///
/// 純函數：不修改手牌與上下文。TheWorld / Brimstone 在這裡恆為零，
/// 它們的效果在回合開始時由 `hands_bonus` / `discards_bonus` 結算。
pub fn compute_joker_effect(id: JokerId, hand: &[Card], ctx: &ScoringContext) -> JokerBonus {
    let mut bonus = JokerBonus::new();

    match id {
        JokerId::ClassicJoker => bonus.mult += 4.0,

        JokerId::RedRageJoker => {
            let red_count = hand.iter().filter(|c| c.is_red()).count() as i64;
            if red_count >= 3 {
                bonus.points += red_count * 20;
            }
        }

        JokerId::HalfJoker => {
            if hand.len() <= 3 {
                bonus.mult += 15.0;
            }
        }

        JokerId::GigachadJoker => {
            let flags = classify_hand(hand);
            let highest = hand.iter().map(|c| c.value()).max().unwrap_or(0);
            if flags.straight {
                bonus.points += highest * 5;
            }
            // 葫蘆也觸發，兩個條件各自加一次
            if flags.is_full_house() {
                bonus.points += highest * 5;
            }
        }

        JokerId::ToiletJoker => {
            if classify_hand(hand).flush {
                bonus.mult += 10.0;
            }
        }

        JokerId::KnightlyJoker => {
            if hand.iter().any(|c| c.is_face_or_ace()) {
                let result = score_hand(hand);
                for card in winning_cards(hand, result.multiplier) {
                    bonus.points += 21 - card.value();
                }
            }
        }

        JokerId::GhastlyJoker => {
            if ctx.round == BOSS_ROUND && ctx.boss_active {
                bonus.mult += score_hand(hand).multiplier as f64 * 0.5;
            }
        }

        JokerId::DoggJoker => {
            if let Some(highest) = ctx.table.iter().map(|c| c.value()).max() {
                bonus.points += hand.len() as i64 * highest;
            }
        }

        JokerId::NegativeJoker => {
            let hand_sum: i64 = hand.iter().map(|c| c.value()).sum();
            let result = score_hand(hand);
            let winning_sum: i64 = winning_cards(hand, result.multiplier)
                .iter()
                .map(|c| c.value())
                .sum();
            bonus.points += hand_sum - winning_sum;
            bonus.mult += (ctx.hands_left + ctx.discards_left) as f64;
        }

        JokerId::GodJoker => {
            bonus.points += hand.len() as i64 * 50;
            bonus.mult += score_hand(hand).multiplier as f64 * 5.0;
        }

        // 回合開始結算類：每手結算無貢獻
        JokerId::TheWorldJoker | JokerId::BrimstoneJoker => {}
    }

    bonus
}

// ============================================================================
// 單元測試
// ============================================================================
