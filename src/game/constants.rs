//! 遊戲常量定義

// ============================================================================
// 遊戲規則常量
// ============================================================================

pub const DECK_SIZE: usize = 52;         // 標準牌組張數
pub const TABLE_CAPACITY: usize = 10;    // 桌面牌池上限
pub const HAND_CAPACITY: usize = 5;      // 手牌上限
pub const JOKER_PLAY_SLOTS: usize = 2;   // 同時生效的 Joker 欄位數
pub const JOKER_OFFER_COUNT: usize = 3;  // 每次 Joker 選擇階段提供的候選數
pub const HANDS_PER_ROUND: i32 = 5;      // 每回合出牌次數
pub const DISCARDS_PER_ROUND: i32 = 5;   // 每回合棄牌次數

// ============================================================================
// 進度常量
// ============================================================================

pub const ANTE_COUNT: i32 = 4;           // Ante 總數（第 4 個為 Bonus Ante）
pub const ROUNDS_PER_ANTE: i32 = 3;      // 每 Ante 回合數（第 3 回合為 Boss 回合）
pub const BOSS_ROUND: i32 = 3;           // Boss 回合編號

// 分數需求公式：BASE + ANTE_STEP*(ante-1) + ROUND_STEP*(round-1)
pub const BASE_REQUIREMENT: i64 = 500;
pub const ANTE_REQUIREMENT_STEP: i64 = 200;
pub const ROUND_REQUIREMENT_STEP: i64 = 100;
