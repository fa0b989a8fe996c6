//! 計分引擎
//!
//! 牌型判定與基礎計分：旗標判定、得分牌選取、基礎分加總。
//! 所有函數都不修改呼叫端的手牌（內部排序一律在複本上進行，
//! 呼叫端會沿用同一份手牌做顯示）。

use super::cards::Card;
use super::constants::HAND_CAPACITY;
use super::hand_types::{HandFlags, HandId, ScoreResult};

/// 以順子排序值為索引統計各點數張數（index 0 = Ace）
fn rank_counts(hand: &[Card]) -> [u8; 13] {
    let mut counts = [0u8; 13];
    for card in hand {
        counts[(card.order_index() - 1) as usize] += 1;
    }
    counts
}

/// 判定手牌旗標
///
/// 順子 / 同花 / royal 只在剛好 5 張時判定；不足 5 張永遠為 false。
pub fn classify_hand(hand: &[Card]) -> HandFlags {
    let mut flags = HandFlags::default();
    if hand.is_empty() {
        return flags;
    }

    let counts = rank_counts(hand);

    let pair_ranks = counts.iter().filter(|&&c| c == 2).count();
    flags.pair = pair_ranks == 1;
    flags.two_pair = pair_ranks == 2;
    flags.three_of_a_kind = counts.iter().any(|&c| c == 3);
    flags.four_of_a_kind = counts.iter().any(|&c| c == 4);

    if hand.len() == HAND_CAPACITY {
        let mut indices: Vec<u8> = counts
            .iter()
            .enumerate()
            .filter(|(_, &c)| c > 0)
            .map(|(i, _)| (i + 1) as u8)
            .collect();
        indices.sort_unstable();

        // 5 個相異且嚴格連續的排序值 = 4 組相鄰對
        let adjacent = indices.windows(2).filter(|w| w[0] + 1 == w[1]).count();
        if adjacent == 4 {
            flags.straight = true;
        }

        // 10-J-Q-K-A：Ace 視為接在 King 之後的特例，同時標記 royal。
        // royal 不檢查花色；30 倍獎勵由倍率階梯以 royal && flush 把關。
        const BROADWAY: [u8; 5] = [1, 10, 11, 12, 13];
        if BROADWAY.iter().all(|i| indices.contains(i)) {
            flags.straight = true;
            flags.royal = true;
        }

        let suit = hand[0].suit;
        flags.flush = hand.iter().all(|c| c.suit == suit);
    }

    flags
}

/// 選出計入基礎分的得分牌
///
/// 依倍率層級決定範圍：
/// - 1（高牌）：排序值最高的單張
/// - 2 / 4（對子 / 兩對）：所有屬於成對點數的牌
/// - 5（三條）：三條的三張
/// - 其他：整手牌
pub fn winning_cards(hand: &[Card], multiplier: i64) -> Vec<Card> {
    if hand.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<Card> = hand.to_vec();
    sorted.sort_by(|a, b| b.order_index().cmp(&a.order_index()));

    let counts = rank_counts(hand);
    match multiplier {
        1 => vec![sorted[0]],
        2 | 4 => sorted
            .into_iter()
            .filter(|c| counts[(c.order_index() - 1) as usize] == 2)
            .collect(),
        5 => sorted
            .into_iter()
            .filter(|c| counts[(c.order_index() - 1) as usize] == 3)
            .collect(),
        _ => sorted,
    }
}

/// 得分牌的基礎分加總
pub fn base_points(winning: &[Card]) -> i64 {
    winning.iter().map(|c| c.value()).sum()
}

/// 計分入口：手牌 → 牌型標籤 / 基礎分 / 倍率
///
/// 空手牌直接回傳空結果，不進行判定。
pub fn score_hand(hand: &[Card]) -> ScoreResult {
    if hand.is_empty() {
        return ScoreResult::empty();
    }

    let flags = classify_hand(hand);
    let hand_id = HandId::from_flags(&flags);
    let multiplier = hand_id.multiplier();
    let winning = winning_cards(hand, multiplier);

    ScoreResult {
        hand: Some(hand_id),
        base_points: base_points(&winning),
        multiplier,
    }
}

// ============================================================================
// 單元測試
// ============================================================================
