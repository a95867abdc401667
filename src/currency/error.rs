use thiserror::Error;

use crate::inventory::error::InventoryError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    #[error("amount must be positive")]
    InvalidAmount,
    #[error("not enough money: need {needed}, have {available}")]
    InsufficientFunds { needed: u64, available: u64 },
    #[error("wallet has not been loaded from storage yet")]
    NotLoaded,
}

/// 购买失败：钱不够或背包放不下
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShopError {
    #[error(transparent)]
    Currency(#[from] CurrencyError),
    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not access cookie file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not encode cookie file: {0}")]
    Json(#[from] serde_json::Error),
}
