//! JOKERPOKER 核心引擎
//!
//! 單人撲克 roguelike 的計分與進度引擎：牌型判定、Joker / Boss
//! 效果合成、回合與 Ante 狀態機。呈現層（DOM、終端或其他）是
//! 外部協作者：透過意圖呼叫驅動狀態、讀取快照來渲染，這個 crate
//! 本身不含任何畫面邏輯。
//!
//! 典型用法：
//!
//! ```
//! use jokerpoker_engine::service::{view_from_session, GameSession};
//!
//! let mut session = GameSession::new(42);
//! session.start_game().unwrap();
//! let offered = session.available_jokers().to_vec();
//! session.select_joker(offered[0]).unwrap();
//! session.start_round().unwrap();
//! session.move_card_to_hand(0).unwrap();
//! let resolution = session.play_hand().unwrap();
//! println!("{} -> {} points", resolution.score.label(), resolution.points);
//! let view = view_from_session(&session);
//! assert_eq!(view.table.len(), 10);
//! ```

pub mod game;
pub mod service;

pub use game::{ArrangeMode, BossId, Card, HandId, JokerId, Rank, ScoreResult, Suit};
pub use service::{GameSession, IntentError, Phase, PlayResolution, RoundOutcome};
