//! 可用意圖判定
//!
//! 呈現層據此決定哪些操作目前可送出（按鈕開關），
//! 對應 session 端各意圖的前置檢查。

use serde::Serialize;

use crate::game::HAND_CAPACITY;

use super::state::{GameSession, Phase};

/// 各意圖目前是否會被接受
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ActionAvailability {
    pub can_start_game: bool,
    pub can_select_joker: bool,
    pub can_deselect_joker: bool,
    pub can_lock_jokers: bool,
    pub can_start_round: bool,
    pub can_move_to_hand: bool,
    pub can_move_to_table: bool,
    pub can_play_hand: bool,
    pub can_discard_hand: bool,
    pub can_arrange_table: bool,
    pub can_shuffle_table: bool,
}

/// 從遊戲狀態構建可用意圖表
pub fn availability_from_session(session: &GameSession) -> ActionAvailability {
    let phase = session.phase();
    let in_selection = phase == Phase::JokerSelection;
    let in_round = phase == Phase::RoundActive;
    let round = session.round_state();

    let selection_open = in_selection && !session.selection_locked();
    let slots_full = session.joker_slots().iter().all(|s| s.is_some());
    let any_slot_occupied = session.joker_slots().iter().any(|s| s.is_some());

    ActionAvailability {
        can_start_game: phase != Phase::GameComplete,
        can_select_joker: selection_open
            && !slots_full
            && !session.available_jokers().is_empty(),
        can_deselect_joker: selection_open && any_slot_occupied,
        can_lock_jokers: in_selection,
        can_start_round: in_selection,
        can_move_to_hand: in_round
            && session.hand().len() < HAND_CAPACITY
            && !session.table().is_empty(),
        can_move_to_table: in_round && !session.hand().is_empty(),
        can_play_hand: in_round && round.hands_left > 0,
        can_discard_hand: in_round && round.discards_left > 0,
        can_arrange_table: in_round,
        can_shuffle_table: in_round,
    }
}

// ============================================================================
// 單元測試
// ============================================================================
