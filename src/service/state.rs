//! 遊戲狀態管理
//!
//! `GameSession` 是整局遊戲唯一的狀態聚合：回合 / Ante 狀態機、
//! 牌組、Joker 欄位與抽取池、Boss 池。所有變更都由呈現層送入的
//! 離散意圖觸發，單執行緒同步完成；呈現層對狀態只讀。

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::game::{
    classify_hand, compute_joker_effect, score_hand, ArrangeMode, BossId, BossPool, Card, Deck,
    JokerBonus, JokerId, ScoreResult, ScoringContext, ANTE_COUNT, ANTE_REQUIREMENT_STEP,
    BASE_REQUIREMENT, BOSS_ROUND, DISCARDS_PER_ROUND, HANDS_PER_ROUND, HAND_CAPACITY,
    JOKER_OFFER_COUNT, JOKER_PLAY_SLOTS, ROUNDS_PER_ANTE, ROUND_REQUIREMENT_STEP,
};

use super::error::IntentError;

/// 遊戲階段
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// 尚未開始（建立 session 之後、`start_game` 之前）
    Idle,
    /// Joker 選擇階段（不可出牌 / 棄牌）
    JokerSelection,
    /// 回合進行中
    RoundActive,
    /// 終局：不再接受任何意圖
    GameComplete,
}

/// 單手結算後的回合走向
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    /// 回合繼續
    Continue,
    /// 達標：進入下一回合（或下一 Ante）的 Joker 選擇
    RoundWon,
    /// 出牌次數耗盡：同一回合重來，回到 Joker 選擇
    RoundLost,
    /// 贏下最後一個 Ante 的最後一回合
    GameComplete,
}

/// 回合進度與資源
#[derive(Clone, Copy, Debug)]
pub struct RoundState {
    /// 1..=4，第 4 個為 Bonus Ante
    pub ante: i32,
    /// 1..=3，第 3 回合為 Boss 回合
    pub round: i32,
    pub points_requirement: i64,
    pub player_points: i64,
    pub hands_left: i32,
    pub discards_left: i32,
}

/// 單手結算明細（回報給呈現層）
#[derive(Clone, Debug)]
pub struct PlayResolution {
    /// 基礎判定：牌型 / 基礎分 / 倍率
    pub score: ScoreResult,
    /// 每個 Joker 欄位的獨立貢獻，依欄位順序
    pub joker_contributions: Vec<(JokerId, JokerBonus)>,
    /// Boss 扣分（Heart Break）
    pub boss_deduction: i64,
    /// 該手是否被 Boss 否決（I Love Twos）
    pub vetoed: bool,
    /// 修正後點數與倍率
    pub points: i64,
    pub multiplier: f64,
    pub outcome: RoundOutcome,
}

pub struct GameSession {
    pub(crate) rng: StdRng,
    pub(crate) deck: Deck,
    pub(crate) phase: Phase,
    pub(crate) round: RoundState,

    // Joker 狀態
    pub(crate) joker_slots: [Option<JokerId>; JOKER_PLAY_SLOTS],
    pub(crate) joker_offer: Vec<JokerId>,
    pub(crate) joker_pool: Vec<JokerId>,
    pub(crate) selection_locked: bool,

    // Boss 狀態
    pub(crate) boss_pool: BossPool,
    pub(crate) active_boss: Option<BossId>,
}

impl GameSession {
    /// 以固定種子建立 session（洗牌與抽取皆可重現）
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let deck = Deck::new(&mut rng);

        Self {
            rng,
            deck,
            phase: Phase::Idle,
            round: RoundState {
                ante: 1,
                round: 1,
                points_requirement: 0,
                player_points: 0,
                hands_left: 0,
                discards_left: 0,
            },
            joker_slots: [None; JOKER_PLAY_SLOTS],
            joker_offer: Vec::new(),
            joker_pool: JokerId::all().to_vec(),
            selection_locked: false,
            boss_pool: BossPool::new(),
            active_boss: None,
        }
    }

    // ========================================================================
    // 意圖：遊戲與回合流程
    // ========================================================================

    /// 開始（或重新開始）一局遊戲，進入第一次 Joker 選擇
    pub fn start_game(&mut self) -> Result<(), IntentError> {
        if self.phase == Phase::GameComplete {
            return Err(IntentError::InvalidPhase("game is complete"));
        }

        self.round.ante = 1;
        self.round.round = 1;
        self.joker_slots = [None; JOKER_PLAY_SLOTS];
        self.joker_offer.clear();
        self.joker_pool = JokerId::all().to_vec();
        self.boss_pool = BossPool::new();
        self.active_boss = None;

        info!("game started");
        self.enter_joker_selection();
        Ok(())
    }

    /// 從候選中選入一個 Joker
    pub fn select_joker(&mut self, id: JokerId) -> Result<(), IntentError> {
        self.require_selection_phase()?;
        if self.joker_slots.iter().all(|s| s.is_some()) {
            return Err(IntentError::InvalidPhase("both joker slots are full"));
        }
        let pos = self
            .joker_offer
            .iter()
            .position(|&j| j == id)
            .ok_or(IntentError::InvalidSelection("joker is not on offer"))?;

        self.joker_offer.remove(pos);
        let slot = self
            .joker_slots
            .iter_mut()
            .find(|s| s.is_none())
            .expect("checked above");
        *slot = Some(id);
        Ok(())
    }

    /// 把欄位中的 Joker 退回候選列表
    pub fn deselect_joker(&mut self, slot_index: usize) -> Result<(), IntentError> {
        self.require_selection_phase()?;
        if slot_index >= JOKER_PLAY_SLOTS {
            return Err(IntentError::InvalidSelection("no such joker slot"));
        }
        let id = self.joker_slots[slot_index]
            .ok_or(IntentError::InvalidSelection("joker slot is empty"))?;

        self.joker_offer.push(id);
        // 欄位往前遞補，保持佔用欄位連續
        self.joker_slots[slot_index] = None;
        for i in slot_index..JOKER_PLAY_SLOTS - 1 {
            self.joker_slots[i] = self.joker_slots[i + 1];
            self.joker_slots[i + 1] = None;
        }
        Ok(())
    }

    /// 鎖定目前的 Joker 選擇（之後不可再增減，直到回合結束）
    pub fn lock_jokers(&mut self) -> Result<(), IntentError> {
        if self.phase != Phase::JokerSelection {
            return Err(IntentError::InvalidPhase("joker selection is not active"));
        }
        self.selection_locked = true;
        Ok(())
    }

    /// 進入回合：重置牌組、發桌面牌、結算回合資源與分數需求
    pub fn start_round(&mut self) -> Result<(), IntentError> {
        if self.phase != Phase::JokerSelection {
            return Err(IntentError::InvalidPhase("round can only start from joker selection"));
        }

        // 未選走的候選退回抽取池
        self.joker_pool.append(&mut self.joker_offer);

        self.deck.reset(&mut self.rng);
        self.deck.deal_table();

        // 只有 Boss 回合抽 Boss，其餘回合清空
        if self.round.round == BOSS_ROUND {
            self.active_boss = Some(self.boss_pool.draw(&mut self.rng));
        } else {
            self.active_boss = None;
        }

        let base = BASE_REQUIREMENT
            + ANTE_REQUIREMENT_STEP * (self.round.ante - 1) as i64
            + ROUND_REQUIREMENT_STEP * (self.round.round - 1) as i64;
        let requirement_mult = self
            .active_boss
            .map(|b| b.requirement_multiplier())
            .unwrap_or(1.0);
        self.round.points_requirement = (base as f64 * requirement_mult).round() as i64;

        let slot_hands: i32 = self.occupied_slots().map(|j| j.hands_bonus()).sum();
        let slot_discards: i32 = self.occupied_slots().map(|j| j.discards_bonus()).sum();
        let boss_hands = self.active_boss.map(|b| b.hands_delta()).unwrap_or(0);
        let boss_discards = self.active_boss.map(|b| b.discards_delta()).unwrap_or(0);
        self.round.hands_left = HANDS_PER_ROUND + slot_hands + boss_hands;
        self.round.discards_left = DISCARDS_PER_ROUND + slot_discards + boss_discards;
        self.round.player_points = 0;

        self.apply_boss_visibility();
        self.phase = Phase::RoundActive;

        info!(
            ante = self.round.ante,
            round = self.round.round,
            requirement = self.round.points_requirement,
            boss = self.active_boss.map(|b| b.display_name()),
            "round started"
        );
        Ok(())
    }

    // ========================================================================
    // 意圖：回合內操作
    // ========================================================================

    /// 桌面牌移入手牌
    pub fn move_card_to_hand(&mut self, table_index: usize) -> Result<(), IntentError> {
        self.require_round_active()?;
        if self.deck.hand().len() >= HAND_CAPACITY {
            return Err(IntentError::InvalidSelection("hand already has 5 cards"));
        }
        if !self.deck.move_to_hand(table_index) {
            return Err(IntentError::InvalidSelection("no card at that table position"));
        }
        self.apply_boss_visibility();
        Ok(())
    }

    /// 手牌退回桌面
    pub fn move_card_to_table(&mut self, hand_index: usize) -> Result<(), IntentError> {
        self.require_round_active()?;
        if !self.deck.move_to_table(hand_index) {
            return Err(IntentError::InvalidSelection("no card at that hand position"));
        }
        self.apply_boss_visibility();
        Ok(())
    }

    /// 棄掉整個手牌（消耗一次棄牌，不計分，桌面補滿）
    pub fn discard_hand(&mut self) -> Result<(), IntentError> {
        self.require_round_active()?;
        if self.round.discards_left <= 0 {
            return Err(IntentError::NoResourceLeft("no discards left"));
        }
        self.deck.spend_hand();
        self.round.discards_left -= 1;
        self.deck.deal_table();
        self.apply_boss_visibility();
        Ok(())
    }

    /// 排列桌面牌池
    pub fn arrange_table(&mut self, mode: ArrangeMode) -> Result<(), IntentError> {
        self.require_round_active()?;
        self.deck.arrange_table(mode);
        Ok(())
    }

    /// 洗亂桌面牌池
    pub fn shuffle_table(&mut self) -> Result<(), IntentError> {
        self.require_round_active()?;
        self.deck.shuffle_table(&mut self.rng);
        Ok(())
    }

    /// 打出手牌：結算一手的分數並推進回合狀態
    pub fn play_hand(&mut self) -> Result<PlayResolution, IntentError> {
        self.require_round_active()?;
        if self.round.hands_left <= 0 {
            return Err(IntentError::NoResourceLeft("no hands left"));
        }

        let hand_cards: Vec<Card> = self.deck.hand().to_vec();
        let score = score_hand(&hand_cards);
        let flags = classify_hand(&hand_cards);

        // Joker 貢獻：兩個欄位各自獨立計算後相加
        let mut joker_contributions = Vec::new();
        let mut joker_total = JokerBonus::new();
        {
            let ctx = ScoringContext {
                table: self.deck.table(),
                hands_left: self.round.hands_left,
                discards_left: self.round.discards_left,
                round: self.round.round,
                ante: self.round.ante,
                boss_active: self.active_boss.is_some(),
            };
            for id in self.joker_slots.iter().flatten() {
                let bonus = compute_joker_effect(*id, &hand_cards, &ctx);
                joker_total.merge(&bonus);
                joker_contributions.push((*id, bonus));
            }
        }

        let boss_deduction = self
            .active_boss
            .map(|b| b.point_deduction(&hand_cards))
            .unwrap_or(0);
        let mut points = score.base_points + joker_total.points - boss_deduction;
        let multiplier = score.multiplier as f64 + joker_total.mult;

        let vetoed = self
            .active_boss
            .map(|b| !b.allows_hand(&flags))
            .unwrap_or(false);
        if vetoed {
            points = 0;
        }

        let gained = points as f64 * multiplier;
        let decay = self.active_boss.map(|b| b.score_decay()).unwrap_or(1.0);
        self.round.player_points =
            ((self.round.player_points as f64 + gained) * decay).round() as i64;
        self.round.hands_left -= 1;

        self.deck.spend_hand();
        self.deck.deal_table();
        self.apply_boss_visibility();

        debug!(
            hand = score.label(),
            points,
            multiplier,
            player_points = self.round.player_points,
            "hand resolved"
        );

        let outcome = if self.round.player_points >= self.round.points_requirement {
            self.on_round_won()
        } else if self.round.hands_left <= 0 {
            self.on_round_lost()
        } else {
            RoundOutcome::Continue
        };

        Ok(PlayResolution {
            score,
            joker_contributions,
            boss_deduction,
            vetoed,
            points,
            multiplier,
            outcome,
        })
    }

    // ========================================================================
    // 查詢
    // ========================================================================

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn round_state(&self) -> &RoundState {
        &self.round
    }

    pub fn table(&self) -> &[Card] {
        self.deck.table()
    }

    pub fn hand(&self) -> &[Card] {
        self.deck.hand()
    }

    pub fn draw_pile_len(&self) -> usize {
        self.deck.draw_pile_len()
    }

    /// 目前手牌的即時計分（手牌變動後重新計算即可）
    pub fn hand_preview(&self) -> ScoreResult {
        score_hand(self.deck.hand())
    }

    pub fn joker_slots(&self) -> &[Option<JokerId>; JOKER_PLAY_SLOTS] {
        &self.joker_slots
    }

    pub fn available_jokers(&self) -> &[JokerId] {
        &self.joker_offer
    }

    pub fn active_boss(&self) -> Option<BossId> {
        self.active_boss
    }

    pub fn selection_locked(&self) -> bool {
        self.selection_locked
    }

    // ========================================================================
    // 內部流程
    // ========================================================================

    fn occupied_slots(&self) -> impl Iterator<Item = &JokerId> {
        self.joker_slots.iter().flatten()
    }

    fn require_round_active(&self) -> Result<(), IntentError> {
        match self.phase {
            Phase::RoundActive => Ok(()),
            Phase::JokerSelection => Err(IntentError::InvalidPhase(
                "not allowed during joker selection",
            )),
            Phase::Idle => Err(IntentError::InvalidPhase("game has not started")),
            Phase::GameComplete => Err(IntentError::InvalidPhase("game is complete")),
        }
    }

    fn require_selection_phase(&self) -> Result<(), IntentError> {
        if self.phase != Phase::JokerSelection {
            return Err(IntentError::InvalidPhase("joker selection is not active"));
        }
        if self.selection_locked {
            return Err(IntentError::InvalidPhase("joker selection is locked"));
        }
        Ok(())
    }

    /// 進入 Joker 選擇：牌組清空重置、抽出新候選、資源歸零
    fn enter_joker_selection(&mut self) {
        self.deck.reset(&mut self.rng);

        // 前一次未選走的候選先回池，再抽新的一批
        self.joker_pool.append(&mut self.joker_offer);
        for _ in 0..JOKER_OFFER_COUNT {
            if self.joker_pool.is_empty() {
                self.replenish_joker_pool();
            }
            if self.joker_pool.is_empty() {
                break;
            }
            let idx = self.rng.gen_range(0..self.joker_pool.len());
            self.joker_offer.push(self.joker_pool.remove(idx));
        }

        self.selection_locked = false;
        self.round.hands_left = 0;
        self.round.discards_left = 0;
        self.round.player_points = 0;
        self.phase = Phase::JokerSelection;
    }

    /// 抽取池耗盡時補回：所有不在欄位、也不在候選中的 Joker
    fn replenish_joker_pool(&mut self) {
        for &id in JokerId::all() {
            let in_slots = self.joker_slots.iter().flatten().any(|&j| j == id);
            let on_offer = self.joker_offer.contains(&id);
            if !in_slots && !on_offer {
                self.joker_pool.push(id);
            }
        }
    }

    fn on_round_won(&mut self) -> RoundOutcome {
        info!(
            ante = self.round.ante,
            round = self.round.round,
            points = self.round.player_points,
            "round won"
        );

        if self.round.round < ROUNDS_PER_ANTE {
            self.round.round += 1;
            self.enter_joker_selection();
            RoundOutcome::RoundWon
        } else if self.round.ante < ANTE_COUNT {
            self.active_boss = None;
            self.round.ante += 1;
            self.round.round = 1;
            self.enter_joker_selection();
            RoundOutcome::RoundWon
        } else {
            info!("game complete");
            self.phase = Phase::GameComplete;
            RoundOutcome::GameComplete
        }
    }

    /// 失敗：同一回合重來（需求與 Boss 回合身份不變），重新選 Joker
    fn on_round_lost(&mut self) -> RoundOutcome {
        info!(
            ante = self.round.ante,
            round = self.round.round,
            points = self.round.player_points,
            requirement = self.round.points_requirement,
            "round lost"
        );
        self.enter_joker_selection();
        RoundOutcome::RoundLost
    }

    /// 套用 Boss 的顯示遮蔽效果（蓋牌 / 隱藏花色）
    ///
    /// 只改顯示旗標，計分一律讀真實欄位；牌組整副重置時自動還原。
    fn apply_boss_visibility(&mut self) {
        let Some(boss) = self.active_boss else {
            return;
        };

        if boss.hides_high_cards() {
            for card in self
                .deck
                .table
                .iter_mut()
                .chain(self.deck.hand.iter_mut())
            {
                if card.value() >= 11 {
                    card.revealed = false;
                }
            }
        }

        if boss.masks_suits() {
            for card in self
                .deck
                .table
                .iter_mut()
                .chain(self.deck.hand.iter_mut())
            {
                card.suit_hidden = true;
            }
        }
    }
}

// ============================================================================
// 單元測試
// ============================================================================
