//! 服務層模組
//!
//! 提供呈現層所需的狀態聚合、意圖處理、狀態快照與可用意圖判定

pub mod actions;
pub mod error;
pub mod state;
pub mod view;

pub use actions::{availability_from_session, ActionAvailability};
pub use error::IntentError;
pub use state::{GameSession, Phase, PlayResolution, RoundOutcome, RoundState};
pub use view::{view_from_session, BossView, CardView, GameView, HandPreview, JokerView};
