use bevy::prelude::*;

use super::error::{CurrencyError, ShopError};
use crate::inventory::components::Inventory;
use crate::network::HostAuthority;

/// 玩家钱包。余额只在主机上修改，客户端读到的是同步过来的值。
#[derive(Component, Debug, Clone)]
pub struct Wallet {
    balance: u64,
    starting_money: u64,
    // 读过存档之前不允许改余额，否则会覆盖存档里的值
    loaded: bool,
}

impl Wallet {
    pub fn new(starting_money: u64) -> Self {
        Self {
            balance: 0,
            starting_money,
            loaded: false,
        }
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn starting_money(&self) -> u64 {
        self.starting_money
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn display(&self) -> String {
        format!("{}€", self.balance)
    }

    /// 用存档里的值覆盖余额
    pub fn load(&mut self, _host: &HostAuthority, balance: u64) {
        self.balance = balance;
        self.loaded = true;
    }

    pub fn add_server(
        &mut self,
        _host: &HostAuthority,
        amount: u64,
        reason: &str,
    ) -> Result<u64, CurrencyError> {
        if !self.loaded {
            return Err(CurrencyError::NotLoaded);
        }
        if amount == 0 {
            return Err(CurrencyError::InvalidAmount);
        }
        self.balance = self.balance.saturating_add(amount);
        info!("钱包 +{amount}（原因: {reason}），余额 {}", self.balance);
        Ok(self.balance)
    }

    pub fn remove_server(
        &mut self,
        _host: &HostAuthority,
        amount: u64,
        reason: &str,
    ) -> Result<u64, CurrencyError> {
        if !self.loaded {
            return Err(CurrencyError::NotLoaded);
        }
        if amount == 0 {
            return Err(CurrencyError::InvalidAmount);
        }
        if self.balance < amount {
            return Err(CurrencyError::InsufficientFunds {
                needed: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        info!("钱包 -{amount}（原因: {reason}），余额 {}", self.balance);
        Ok(self.balance)
    }

    /// 恢复初始金额（测试用）
    pub fn reset(&mut self, _host: &HostAuthority) -> u64 {
        self.balance = self.starting_money;
        self.loaded = true;
        self.balance
    }
}

/// 挂在触发体积上的金币，进入即拾取，只生效一次
#[derive(Component, Debug, Clone)]
pub struct MoneyPickup {
    pub amount: u64,
    pub active: bool,
}

impl MoneyPickup {
    pub fn new(amount: u64) -> Self {
        Self {
            amount,
            active: true,
        }
    }
}

/// 商店货架
#[derive(Component, Debug, Clone)]
pub struct ShopItem {
    pub price: u64,
    pub item_id: String,
    pub item_name: String,
    pub quantity: u32,
    pub max_stack: u32,
}

impl ShopItem {
    pub fn matches(&self, token: &str) -> bool {
        self.item_id.eq_ignore_ascii_case(token) || self.item_name.eq_ignore_ascii_case(token)
    }

    /// 先确认背包放得下、钱够，再同时扣钱和发货；失败时两边都不变
    pub fn sell_to(
        &self,
        host: &HostAuthority,
        wallet: &mut Wallet,
        inventory: &mut Inventory,
    ) -> Result<u64, ShopError> {
        if wallet.balance() < self.price {
            return Err(CurrencyError::InsufficientFunds {
                needed: self.price,
                available: wallet.balance(),
            }
            .into());
        }

        let mut scratch = inventory.clone();
        scratch.add_item(
            host,
            &self.item_id,
            &self.item_name,
            self.quantity,
            self.max_stack,
        )?;
        let balance = wallet.remove_server(host, self.price, &format!("购买 {}", self.item_name))?;
        *inventory = scratch;
        Ok(balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::error::InventoryError;
    use crate::network::NetworkRole;

    fn host() -> HostAuthority {
        NetworkRole::Host.authorize().unwrap()
    }

    fn funded(balance: u64) -> Wallet {
        let mut wallet = Wallet::new(100);
        wallet.load(&host(), balance);
        wallet
    }

    #[test]
    fn overdraw_is_rejected_then_partial_spend_succeeds() {
        let host = host();
        let mut wallet = funded(100);

        assert_eq!(
            wallet.remove_server(&host, 150, "test"),
            Err(CurrencyError::InsufficientFunds {
                needed: 150,
                available: 100
            })
        );
        assert_eq!(wallet.balance(), 100);

        assert_eq!(wallet.remove_server(&host, 50, "test"), Ok(50));
        assert_eq!(wallet.balance(), 50);
    }

    #[test]
    fn zero_amounts_are_invalid() {
        let host = host();
        let mut wallet = funded(10);

        assert_eq!(wallet.add_server(&host, 0, "noop"), Err(CurrencyError::InvalidAmount));
        assert_eq!(wallet.remove_server(&host, 0, "noop"), Err(CurrencyError::InvalidAmount));
        assert_eq!(wallet.balance(), 10);
    }

    #[test]
    fn unloaded_wallet_refuses_changes() {
        let host = host();
        let mut wallet = Wallet::new(100);

        assert_eq!(wallet.add_server(&host, 10, "early"), Err(CurrencyError::NotLoaded));
        assert_eq!(wallet.remove_server(&host, 10, "early"), Err(CurrencyError::NotLoaded));
        assert_eq!(wallet.balance(), 0);

        wallet.load(&host, 5);
        assert_eq!(wallet.add_server(&host, 10, "late"), Ok(15));
    }

    #[test]
    fn reset_restores_starting_money() {
        let host = host();
        let mut wallet = funded(3);
        wallet.add_server(&host, 40, "quest").unwrap();

        assert_eq!(wallet.reset(&host), 100);
        assert_eq!(wallet.display(), "100€");
    }

    fn sword() -> ShopItem {
        ShopItem {
            price: 100,
            item_id: "sword".into(),
            item_name: "Sword".into(),
            quantity: 1,
            max_stack: 1,
        }
    }

    #[test]
    fn purchase_charges_and_delivers() {
        let host = host();
        let mut wallet = funded(120);
        let mut inventory = Inventory::new(2);

        assert_eq!(sword().sell_to(&host, &mut wallet, &mut inventory), Ok(20));
        assert!(inventory.has_item("sword", 1));
    }

    #[test]
    fn purchase_with_full_inventory_keeps_money() {
        let host = host();
        let mut wallet = funded(500);
        let mut inventory = Inventory::new(1);
        inventory.add_item(&host, "wood", "Wood", 1, 64).unwrap();

        let err = sword().sell_to(&host, &mut wallet, &mut inventory).unwrap_err();
        assert!(matches!(
            err,
            ShopError::Inventory(InventoryError::CapacityExceeded { .. })
        ));
        assert_eq!(wallet.balance(), 500);
        assert!(!inventory.has_item("sword", 1));
    }

    #[test]
    fn purchase_without_money_keeps_inventory() {
        let host = host();
        let mut wallet = funded(10);
        let mut inventory = Inventory::new(2);

        assert!(sword().sell_to(&host, &mut wallet, &mut inventory).is_err());
        assert!(inventory.is_empty());
        assert_eq!(wallet.balance(), 10);
    }
}
