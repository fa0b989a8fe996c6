//! 牌組與牌區管理
//!
//! 一副牌的三個玩家可見牌區：抽牌堆（draw pile）、桌面牌池（table，
//! 上限 10）、手牌（hand，上限 5），外加已用牌堆（spent）收納打出與
//! 棄掉的牌。任一時刻每張牌恰好屬於一個牌區；除了整副重置之外，
//! 牌只會在牌區之間移動，不會憑空產生或消失。

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::cards::{standard_deck, Card};
use super::constants::{HAND_CAPACITY, TABLE_CAPACITY};

/// 桌面排列模式
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrangeMode {
    /// 依排序值由大到小
    ByValue,
    /// 依花色名稱（字母序）
    BySuit,
}

#[derive(Clone, Debug, Default)]
pub struct Deck {
    pub(crate) draw_pile: Vec<Card>,
    pub(crate) table: Vec<Card>,
    pub(crate) hand: Vec<Card>,
    pub(crate) spent: Vec<Card>,
}

impl Deck {
    /// 建立一副洗好的新牌組（牌區全空）
    pub fn new(rng: &mut StdRng) -> Self {
        let mut deck = Self::default();
        deck.reset(rng);
        deck
    }

    /// 整副重置：回復 52 張、重新洗牌、清空所有牌區
    ///
    /// 也一併清除 Boss 效果留下的顯示狀態（蓋牌、隱藏花色）。
    pub fn reset(&mut self, rng: &mut StdRng) {
        self.draw_pile = standard_deck();
        self.draw_pile.shuffle(rng);
        self.table.clear();
        self.hand.clear();
        self.spent.clear();
    }

    /// 補滿桌面牌池至上限（抽牌堆不足時補到用完為止）
    pub fn deal_table(&mut self) {
        while self.table.len() < TABLE_CAPACITY {
            match self.draw_pile.pop() {
                Some(card) => self.table.push(card),
                None => break,
            }
        }
    }

    /// 桌面 → 手牌。手牌已滿或索引無效時回傳 false，狀態不變。
    pub fn move_to_hand(&mut self, table_index: usize) -> bool {
        if self.hand.len() >= HAND_CAPACITY || table_index >= self.table.len() {
            return false;
        }
        let card = self.table.remove(table_index);
        self.hand.push(card);
        true
    }

    /// 手牌 → 桌面。索引無效時回傳 false，狀態不變。
    pub fn move_to_table(&mut self, hand_index: usize) -> bool {
        if hand_index >= self.hand.len() {
            return false;
        }
        let card = self.hand.remove(hand_index);
        self.table.push(card);
        true
    }

    /// 將整個手牌移入已用牌堆（打出或棄掉後呼叫）
    pub fn spend_hand(&mut self) {
        self.spent.append(&mut self.hand);
    }

    /// 排列桌面牌池（穩定排序，固定輸入下結果可重現）
    pub fn arrange_table(&mut self, mode: ArrangeMode) {
        match mode {
            ArrangeMode::ByValue => self
                .table
                .sort_by(|a, b| b.order_index().cmp(&a.order_index())),
            ArrangeMode::BySuit => self.table.sort_by_key(|c| c.suit.name()),
        }
    }

    /// 洗亂桌面牌池
    pub fn shuffle_table(&mut self, rng: &mut StdRng) {
        self.table.shuffle(rng);
    }

    pub fn table(&self) -> &[Card] {
        &self.table
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    /// 四個牌區的總張數（守恆不變量：重置之間恆為 52）
    pub fn total_len(&self) -> usize {
        self.draw_pile.len() + self.table.len() + self.hand.len() + self.spent.len()
    }
}

// ============================================================================
// 單元測試
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::constants::DECK_SIZE;
    use rand::SeedableRng;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn test_reset_restores_full_deck() {
        let mut rng = rng(1);
        let mut deck = Deck::new(&mut rng);
        assert_eq!(deck.draw_pile_len(), DECK_SIZE);
        assert_eq!(deck.total_len(), DECK_SIZE);

        deck.deal_table();
        deck.move_to_hand(0);
        deck.spend_hand();
        deck.reset(&mut rng);
        assert_eq!(deck.draw_pile_len(), DECK_SIZE);
        assert!(deck.table().is_empty());
        assert!(deck.hand().is_empty());
    }

    #[test]
    fn test_deal_table_fills_to_capacity() {
        let mut rng = rng(2);
        let mut deck = Deck::new(&mut rng);
        deck.deal_table();
        assert_eq!(deck.table().len(), TABLE_CAPACITY);
        assert_eq!(deck.draw_pile_len(), DECK_SIZE - TABLE_CAPACITY);

        // 已滿時不再抽牌
        deck.deal_table();
        assert_eq!(deck.table().len(), TABLE_CAPACITY);
        assert_eq!(deck.draw_pile_len(), DECK_SIZE - TABLE_CAPACITY);
    }

    #[test]
    fn test_move_between_table_and_hand() {
        let mut rng = rng(3);
        let mut deck = Deck::new(&mut rng);
        deck.deal_table();

        let card = deck.table()[2];
        assert!(deck.move_to_hand(2));
        assert_eq!(deck.hand().len(), 1);
        assert_eq!(deck.hand()[0], card);
        assert_eq!(deck.table().len(), TABLE_CAPACITY - 1);

        assert!(deck.move_to_table(0));
        assert!(deck.hand().is_empty());
        assert_eq!(*deck.table().last().unwrap(), card);
    }

    #[test]
    fn test_hand_capacity_enforced() {
        let mut rng = rng(4);
        let mut deck = Deck::new(&mut rng);
        deck.deal_table();
        for _ in 0..HAND_CAPACITY {
            assert!(deck.move_to_hand(0));
        }
        assert!(!deck.move_to_hand(0));
        assert_eq!(deck.hand().len(), HAND_CAPACITY);
    }

    #[test]
    fn test_invalid_indices_rejected() {
        let mut rng = rng(5);
        let mut deck = Deck::new(&mut rng);
        deck.deal_table();
        assert!(!deck.move_to_hand(TABLE_CAPACITY));
        assert!(!deck.move_to_table(0));
    }

    #[test]
    fn test_spend_hand_conserves_cards() {
        let mut rng = rng(6);
        let mut deck = Deck::new(&mut rng);
        deck.deal_table();
        deck.move_to_hand(0);
        deck.move_to_hand(0);
        deck.spend_hand();
        assert!(deck.hand().is_empty());
        assert_eq!(deck.total_len(), DECK_SIZE);

        deck.deal_table();
        assert_eq!(deck.total_len(), DECK_SIZE);
    }

    #[test]
    fn test_arrange_by_value_descending() {
        let mut rng = rng(7);
        let mut deck = Deck::new(&mut rng);
        deck.deal_table();
        deck.arrange_table(ArrangeMode::ByValue);
        let indices: Vec<u8> = deck.table().iter().map(|c| c.order_index()).collect();
        let mut sorted = indices.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(indices, sorted);
    }

    #[test]
    fn test_arrange_round_trip_is_reproducible() {
        // 固定種子下 value-sort ⇄ suit-sort 的來回結果是確定的
        let mut rng_a = rng(8);
        let mut rng_b = rng(8);
        let mut deck_a = Deck::new(&mut rng_a);
        let mut deck_b = Deck::new(&mut rng_b);
        deck_a.deal_table();
        deck_b.deal_table();

        deck_a.arrange_table(ArrangeMode::ByValue);
        deck_a.arrange_table(ArrangeMode::BySuit);
        deck_b.arrange_table(ArrangeMode::ByValue);
        deck_b.arrange_table(ArrangeMode::BySuit);
        assert_eq!(deck_a.table(), deck_b.table());
    }
}
