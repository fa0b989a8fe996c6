//! 意圖拒絕的錯誤分類
//!
//! 所有錯誤都是可恢復的：被拒絕的意圖不改變任何狀態，
//! 原因以訊息形式回報給呈現層。

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum IntentError {
    /// 無效的選取（手牌已滿、索引越界、來源為空）
    #[error("invalid selection: {0}")]
    InvalidSelection(&'static str),

    /// 資源耗盡（出牌 / 棄牌次數為零）
    #[error("no resource left: {0}")]
    NoResourceLeft(&'static str),

    /// 當前階段不允許此意圖
    #[error("invalid phase: {0}")]
    InvalidPhase(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_reason() {
        let err = IntentError::NoResourceLeft("no hands left");
        assert_eq!(err.to_string(), "no resource left: no hands left");

        let err = IntentError::InvalidPhase("joker selection is locked");
        assert!(err.to_string().contains("joker selection is locked"));
    }
}
