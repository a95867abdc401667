use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error("quantity for {item_id} must be positive")]
    InvalidQuantity { item_id: String },
    #[error("max stack for {item_id} must be positive")]
    InvalidMaxStack { item_id: String },
    #[error("inventory full: placed {placed} of {item_id}, dropped {dropped}")]
    CapacityExceeded {
        item_id: String,
        placed: u32,
        dropped: u32,
    },
    #[error("item {0} not found")]
    ItemNotFound(String),
    #[error("not enough {item_id}: need {requested}, have {available}")]
    InsufficientQuantity {
        item_id: String,
        requested: u32,
        available: u32,
    },
}
