use bevy::prelude::*;

use super::error::InventoryError;
use crate::network::HostAuthority;

/// 一格堆叠
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackEntry {
    pub item_id: String,
    pub display_name: String,
    pub quantity: u32, // 0 < quantity <= max_stack
    pub max_stack: u32,
}

/// 玩家背包（挂在玩家实体上）
///
/// 同一个 item_id 可以占多格：前面的格子总是满的，只有最后一格可能未满。
#[derive(Component, Debug, Clone, Default)]
pub struct Inventory {
    capacity: usize,
    entries: Vec<StackEntry>,
}

impl Inventory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn used_slots(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[StackEntry] {
        &self.entries
    }

    /// 放入物品。
    ///
    /// 先补满已有堆叠（使用堆叠自己记录的 max_stack），剩余部分开新格。
    /// 背包满时已放入的部分保留，返回 `CapacityExceeded`。
    pub fn add_item(
        &mut self,
        _host: &HostAuthority,
        item_id: &str,
        display_name: &str,
        quantity: u32,
        max_stack: u32,
    ) -> Result<(), InventoryError> {
        if quantity == 0 {
            return Err(InventoryError::InvalidQuantity {
                item_id: item_id.into(),
            });
        }
        if max_stack == 0 {
            return Err(InventoryError::InvalidMaxStack {
                item_id: item_id.into(),
            });
        }

        let mut remaining = quantity;
        let mut family_max = None;
        for entry in self.entries.iter_mut().filter(|e| e.item_id == item_id) {
            family_max.get_or_insert(entry.max_stack);
            let space_left = entry.max_stack.saturating_sub(entry.quantity);
            let to_add = remaining.min(space_left);
            entry.quantity += to_add;
            remaining -= to_add;
            if remaining == 0 {
                return Ok(());
            }
        }

        // 每轮要么新增一格要么返回，所以最多循环 capacity 次
        let stack_cap = family_max.unwrap_or(max_stack);
        while remaining > 0 {
            if self.entries.len() >= self.capacity {
                return Err(InventoryError::CapacityExceeded {
                    item_id: item_id.into(),
                    placed: quantity - remaining,
                    dropped: remaining,
                });
            }
            let amount = remaining.min(stack_cap);
            self.entries.push(StackEntry {
                item_id: item_id.into(),
                display_name: display_name.into(),
                quantity: amount,
                max_stack: stack_cap,
            });
            remaining -= amount;
        }
        Ok(())
    }

    /// 取出物品，从最后一格开始扣；数量归零的格子立即移除
    pub fn remove_item(
        &mut self,
        _host: &HostAuthority,
        item_id: &str,
        quantity: u32,
    ) -> Result<(), InventoryError> {
        let available = self.item_count(item_id);
        if available == 0 {
            return Err(InventoryError::ItemNotFound(item_id.into()));
        }
        if available < quantity {
            return Err(InventoryError::InsufficientQuantity {
                item_id: item_id.into(),
                requested: quantity,
                available,
            });
        }

        let mut remaining = quantity;
        for entry in self.entries.iter_mut().rev().filter(|e| e.item_id == item_id) {
            if remaining == 0 {
                break;
            }
            let taken = remaining.min(entry.quantity);
            entry.quantity -= taken;
            remaining -= taken;
        }
        self.entries.retain(|e| e.quantity > 0);
        Ok(())
    }

    pub fn has_item(&self, item_id: &str, quantity: u32) -> bool {
        let count = self.item_count(item_id);
        count > 0 && count >= quantity
    }

    /// 同 ID 所有格子的总数，不存在时为 0
    pub fn item_count(&self, item_id: &str) -> u32 {
        self.entries
            .iter()
            .filter(|e| e.item_id == item_id)
            .fold(0u32, |acc, e| acc.saturating_add(e.quantity))
    }

    /// 返回副本，修改它不会影响背包
    pub fn list_items(&self) -> Vec<StackEntry> {
        self.entries.clone()
    }

    pub fn clear(&mut self, _host: &HostAuthority) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::NetworkRole;
    use proptest::prelude::*;

    fn host() -> HostAuthority {
        NetworkRole::Host.authorize().unwrap()
    }

    #[test]
    fn stacks_onto_existing_entry() {
        let host = host();
        let mut inv = Inventory::new(4);
        inv.add_item(&host, "wood", "Wood", 10, 64).unwrap();
        inv.add_item(&host, "wood", "Wood", 5, 64).unwrap();

        assert_eq!(inv.used_slots(), 1);
        assert_eq!(inv.item_count("wood"), 15);
    }

    #[test]
    fn existing_max_stack_wins_over_caller_value() {
        let host = host();
        let mut inv = Inventory::new(4);
        inv.add_item(&host, "stone", "Stone", 10, 16).unwrap();
        inv.add_item(&host, "stone", "Stone", 10, 64).unwrap();

        let items = inv.list_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].quantity, 16);
        assert_eq!(items[1].quantity, 4);
        assert_eq!(items[1].max_stack, 16);
    }

    #[test]
    fn overflow_spills_into_several_new_stacks() {
        let host = host();
        let mut inv = Inventory::new(5);
        inv.add_item(&host, "wood", "Wood", 150, 64).unwrap();

        let quantities: Vec<u32> = inv.list_items().iter().map(|e| e.quantity).collect();
        assert_eq!(quantities, vec![64, 64, 22]);
    }

    #[test]
    fn full_inventory_keeps_partial_stack_and_reports() {
        let host = host();
        let mut inv = Inventory::new(1);
        inv.add_item(&host, "wood", "Wood", 60, 64).unwrap();

        let err = inv.add_item(&host, "wood", "Wood", 10, 64).unwrap_err();
        assert_eq!(
            err,
            InventoryError::CapacityExceeded {
                item_id: "wood".into(),
                placed: 4,
                dropped: 6,
            }
        );
        assert_eq!(inv.item_count("wood"), 64);
        assert_eq!(inv.used_slots(), 1);
    }

    #[test]
    fn capacity_one_full_stack_rejects_one_more() {
        let host = host();
        let mut inv = Inventory::new(1);
        assert!(inv.add_item(&host, "wood", "Wood", 64, 64).is_ok());
        assert!(inv.add_item(&host, "wood", "Wood", 1, 64).is_err());

        assert_eq!(
            inv.list_items(),
            vec![StackEntry {
                item_id: "wood".into(),
                display_name: "Wood".into(),
                quantity: 64,
                max_stack: 64,
            }]
        );
    }

    #[test]
    fn new_item_rejected_when_full() {
        let host = host();
        let mut inv = Inventory::new(1);
        inv.add_item(&host, "wood", "Wood", 1, 64).unwrap();

        let err = inv.add_item(&host, "stone", "Stone", 1, 64).unwrap_err();
        assert!(matches!(err, InventoryError::CapacityExceeded { placed: 0, dropped: 1, .. }));
        assert!(!inv.has_item("stone", 1));
    }

    #[test]
    fn zero_quantity_and_zero_max_stack_are_rejected() {
        let host = host();
        let mut inv = Inventory::new(2);
        assert!(matches!(
            inv.add_item(&host, "wood", "Wood", 0, 64),
            Err(InventoryError::InvalidQuantity { .. })
        ));
        assert!(matches!(
            inv.add_item(&host, "wood", "Wood", 3, 0),
            Err(InventoryError::InvalidMaxStack { .. })
        ));
        assert!(inv.is_empty());
    }

    #[test]
    fn remove_from_empty_inventory() {
        let host = host();
        let mut inv = Inventory::new(2);
        assert_eq!(
            inv.remove_item(&host, "wood", 1),
            Err(InventoryError::ItemNotFound("wood".into()))
        );
        assert_eq!(inv.item_count("wood"), 0);
    }

    #[test]
    fn remove_more_than_held_changes_nothing() {
        let host = host();
        let mut inv = Inventory::new(2);
        inv.add_item(&host, "wood", "Wood", 3, 64).unwrap();

        assert!(matches!(
            inv.remove_item(&host, "wood", 4),
            Err(InventoryError::InsufficientQuantity { requested: 4, available: 3, .. })
        ));
        assert_eq!(inv.item_count("wood"), 3);
    }

    #[test]
    fn remove_drains_last_stack_first() {
        let host = host();
        let mut inv = Inventory::new(3);
        inv.add_item(&host, "wood", "Wood", 100, 64).unwrap();
        inv.remove_item(&host, "wood", 40).unwrap();

        let quantities: Vec<u32> = inv.list_items().iter().map(|e| e.quantity).collect();
        assert_eq!(quantities, vec![60]);
    }

    #[test]
    fn add_then_remove_restores_empty_ledger() {
        let host = host();
        let mut inv = Inventory::new(3);
        inv.add_item(&host, "wood", "Wood", 32, 64).unwrap();
        inv.remove_item(&host, "wood", 32).unwrap();

        assert!(inv.is_empty());
        assert!(!inv.has_item("wood", 1));
    }

    #[test]
    fn list_items_is_a_copy() {
        let host = host();
        let mut inv = Inventory::new(3);
        inv.add_item(&host, "wood", "Wood", 2, 64).unwrap();

        let mut copy = inv.list_items();
        copy[0].quantity = 50;
        copy.clear();

        assert_eq!(inv.item_count("wood"), 2);
    }

    #[test]
    fn clear_empties_everything() {
        let host = host();
        let mut inv = Inventory::new(3);
        inv.add_item(&host, "wood", "Wood", 2, 64).unwrap();
        inv.add_item(&host, "stone", "Stone", 2, 64).unwrap();
        inv.clear(&host);

        assert!(inv.is_empty());
        assert_eq!(inv.capacity(), 3);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add { id: usize, quantity: u32, max_stack: u32 },
        Remove { id: usize, quantity: u32 },
    }

    const IDS: [&str; 3] = ["wood", "stone", "plank"];

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..IDS.len(), 0u32..200, 0u32..80).prop_map(|(id, quantity, max_stack)| Op::Add {
                id,
                quantity,
                max_stack,
            }),
            (0..IDS.len(), 0u32..200).prop_map(|(id, quantity)| Op::Remove { id, quantity }),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// 任意操作序列后：格数不超过容量，每格数量在 (0, max_stack] 内
        #[test]
        fn ledger_invariants_hold(
            capacity in 0usize..6,
            ops in prop::collection::vec(op_strategy(), 1..40)
        ) {
            let host = host();
            let mut inv = Inventory::new(capacity);

            for op in ops {
                match op {
                    Op::Add { id, quantity, max_stack } => {
                        let _ = inv.add_item(&host, IDS[id], IDS[id], quantity, max_stack);
                    }
                    Op::Remove { id, quantity } => {
                        let _ = inv.remove_item(&host, IDS[id], quantity);
                    }
                }

                prop_assert!(inv.used_slots() <= capacity);
                for entry in inv.entries() {
                    prop_assert!(entry.quantity > 0);
                    prop_assert!(entry.quantity <= entry.max_stack);
                }
            }
        }

        /// 扣到正好为 0 后物品从列表消失
        #[test]
        fn draining_to_zero_removes_entries(
            quantity in 1u32..300,
            max_stack in 1u32..100,
            chunks in prop::collection::vec(1u32..50, 1..20)
        ) {
            let host = host();
            let mut inv = Inventory::new(16);
            let _ = inv.add_item(&host, "wood", "Wood", quantity, max_stack);
            let mut held = inv.item_count("wood");

            for chunk in chunks {
                let take = chunk.min(held);
                if take == 0 {
                    break;
                }
                prop_assert!(inv.remove_item(&host, "wood", take).is_ok());
                held -= take;
            }
            if held > 0 {
                prop_assert!(inv.remove_item(&host, "wood", held).is_ok());
            }

            prop_assert_eq!(inv.item_count("wood"), 0);
            prop_assert!(inv.list_items().iter().all(|e| e.item_id != "wood"));
        }
    }
}
