//! 呈現層快照
//!
//! 把遊戲狀態整理成可序列化的唯讀檢視，呈現層每次重繪時讀取。
//! 顯示遮蔽（蓋牌 / 隱藏花色）在這裡落實：被遮蔽的欄位一律輸出
//! 佔位符號，真實花色與點數不外流。

use serde::Serialize;

use crate::game::{Card, ANTE_COUNT};

use super::state::{GameSession, Phase};

/// 蓋牌與隱藏花色的顯示佔位
const HIDDEN_MARKER: &str = "???";

/// 單張卡片的顯示資料
#[derive(Clone, Debug, Serialize)]
pub struct CardView {
    /// 點數標籤；蓋牌時為 "???"
    pub rank_label: &'static str,
    /// 花色符號；蓋牌或隱藏花色時為 "???"
    pub suit_symbol: &'static str,
    /// 紅色花色（顯示著色用）；遮蔽時一律 false
    pub is_red: bool,
    pub revealed: bool,
}

impl CardView {
    fn from_card(card: &Card) -> Self {
        if !card.revealed {
            return Self {
                rank_label: HIDDEN_MARKER,
                suit_symbol: HIDDEN_MARKER,
                is_red: false,
                revealed: false,
            };
        }
        let suit_symbol = if card.suit_hidden {
            HIDDEN_MARKER
        } else {
            card.suit.symbol()
        };
        Self {
            rank_label: card.rank.label(),
            suit_symbol,
            is_red: !card.suit_hidden && card.is_red(),
            revealed: true,
        }
    }
}

/// Joker 顯示資料
#[derive(Clone, Debug, Serialize)]
pub struct JokerView {
    pub name: &'static str,
    pub description: &'static str,
}

/// Boss 顯示資料
#[derive(Clone, Debug, Serialize)]
pub struct BossView {
    pub name: &'static str,
    pub description: &'static str,
}

/// 目前手牌的即時計分顯示
#[derive(Clone, Debug, Serialize)]
pub struct HandPreview {
    pub hand_type: &'static str,
    pub points: i64,
    pub multiplier: i64,
    pub total: i64,
}

/// 整局遊戲的唯讀快照
#[derive(Clone, Debug, Serialize)]
pub struct GameView {
    pub phase: &'static str,
    pub ante: i32,
    /// Ante 顯示標籤；第 4 個 Ante 顯示為 "BONUS"
    pub ante_label: String,
    pub round: i32,
    pub round_label: &'static str,
    pub points_requirement: i64,
    pub player_points: i64,
    pub hands_left: i32,
    pub discards_left: i32,
    pub cards_in_draw_pile: usize,
    pub table: Vec<CardView>,
    pub hand: Vec<CardView>,
    pub hand_preview: HandPreview,
    pub jokers_in_play: Vec<JokerView>,
    pub jokers_available: Vec<JokerView>,
    pub boss: Option<BossView>,
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "idle",
        Phase::JokerSelection => "joker_selection",
        Phase::RoundActive => "round_active",
        Phase::GameComplete => "game_complete",
    }
}

fn round_label(round: i32) -> &'static str {
    match round {
        1 => "Small Blind",
        2 => "Big Blind",
        _ => "Boss Blind",
    }
}

/// 從遊戲狀態構建呈現層快照
pub fn view_from_session(session: &GameSession) -> GameView {
    let round_state = session.round_state();
    let preview = session.hand_preview();

    GameView {
        phase: phase_label(session.phase()),
        ante: round_state.ante,
        ante_label: if round_state.ante < ANTE_COUNT {
            round_state.ante.to_string()
        } else {
            "BONUS".to_string()
        },
        round: round_state.round,
        round_label: round_label(round_state.round),
        points_requirement: round_state.points_requirement,
        player_points: round_state.player_points,
        hands_left: round_state.hands_left,
        discards_left: round_state.discards_left,
        cards_in_draw_pile: session.draw_pile_len(),
        table: session.table().iter().map(CardView::from_card).collect(),
        hand: session.hand().iter().map(CardView::from_card).collect(),
        hand_preview: HandPreview {
            hand_type: preview.label(),
            points: preview.base_points,
            multiplier: preview.multiplier,
            total: preview.raw_total(),
        },
        jokers_in_play: session
            .joker_slots()
            .iter()
            .flatten()
            .map(|j| JokerView {
                name: j.display_name(),
                description: j.description(),
            })
            .collect(),
        jokers_available: session
            .available_jokers()
            .iter()
            .map(|j| JokerView {
                name: j.display_name(),
                description: j.description(),
            })
            .collect(),
        boss: session.active_boss().map(|b| BossView {
            name: b.display_name(),
            description: b.description(),
        }),
    }
}

// ============================================================================
// 單元測試
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Rank, Suit, BOSS_ROUND};

    #[test]
    fn test_card_view_plain() {
        let card = Card::new(Rank::Ace, Suit::Hearts);
        let view = CardView::from_card(&card);
        assert_eq!(view.rank_label, "A");
        assert_eq!(view.suit_symbol, "♥");
        assert!(view.is_red);
        assert!(view.revealed);
    }

    #[test]
    fn test_card_view_face_down() {
        let mut card = Card::new(Rank::King, Suit::Spades);
        card.revealed = false;
        let view = CardView::from_card(&card);
        assert_eq!(view.rank_label, "???");
        assert_eq!(view.suit_symbol, "???");
        assert!(!view.revealed);
    }

    #[test]
    fn test_card_view_suit_hidden() {
        let mut card = Card::new(Rank::Nine, Suit::Diamonds);
        card.suit_hidden = true;
        let view = CardView::from_card(&card);
        assert_eq!(view.rank_label, "9");
        assert_eq!(view.suit_symbol, "???");
        assert!(!view.is_red);
        assert!(view.revealed);
    }

    #[test]
    fn test_view_labels() {
        let mut session = GameSession::new(31);
        session.start_game().unwrap();
        session.start_round().unwrap();

        let view = view_from_session(&session);
        assert_eq!(view.phase, "round_active");
        assert_eq!(view.ante_label, "1");
        assert_eq!(view.round_label, "Small Blind");
        assert_eq!(view.table.len(), 10);
        assert_eq!(view.cards_in_draw_pile, 42);
        assert!(view.boss.is_none());
        // 空手牌的即時計分
        assert_eq!(view.hand_preview.hand_type, "");
        assert_eq!(view.hand_preview.total, 0);
    }

    #[test]
    fn test_bonus_ante_and_boss_round_labels() {
        assert_eq!(round_label(BOSS_ROUND), "Boss Blind");
        assert_eq!(round_label(2), "Big Blind");

        let mut session = GameSession::new(32);
        session.start_game().unwrap();
        session.round.ante = ANTE_COUNT;
        session.round.round = BOSS_ROUND;

        let view = view_from_session(&session);
        assert_eq!(view.ante_label, "BONUS");
        assert_eq!(view.round_label, "Boss Blind");
    }

    #[test]
    fn test_view_serializes_to_json() {
        let mut session = GameSession::new(33);
        session.start_game().unwrap();
        let view = view_from_session(&session);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["phase"], "joker_selection");
        assert_eq!(json["jokers_available"].as_array().unwrap().len(), 3);
        assert!(json["boss"].is_null());
    }
}
