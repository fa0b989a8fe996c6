//! 遊戲核心模組
//!
//! 包含 JOKERPOKER 的核心規則定義：
//! - `constants`: 遊戲常量
//! - `cards`: 花色、點數、卡牌定義
//! - `deck`: 抽牌堆 / 桌面牌池 / 手牌管理
//! - `hand_types`: 牌型旗標與倍率階梯
//! - `scoring`: 牌型判定與基礎計分
//! - `joker`: Joker 系統
//! - `bosses`: Boss 系統與抽取池
//!
//! 注意：畫面呈現由外部協作層處理，這裡只提供規則與狀態

pub mod constants;
pub mod cards;
pub mod deck;
pub mod hand_types;
pub mod scoring;
pub mod joker;
pub mod bosses;

// Re-export 常用類型
pub use constants::*;
pub use cards::{standard_deck, Card, Rank, Suit};
pub use deck::{ArrangeMode, Deck};
pub use hand_types::{HandFlags, HandId, ScoreResult};
pub use scoring::{base_points, classify_hand, score_hand, winning_cards};
pub use joker::{compute_joker_effect, JokerBonus, JokerId, ScoringContext, JOKER_COUNT};
pub use bosses::{BossId, BossPool, BOSS_COUNT};
