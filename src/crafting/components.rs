use bevy::prelude::*;
use thiserror::Error;

use crate::inventory::{components::Inventory, error::InventoryError};
use crate::network::HostAuthority;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: String,
    pub input_id: String,
    pub input_quantity: u32,
    pub output_id: String,
    pub output_name: String,
    pub output_quantity: u32,
    pub output_max_stack: u32,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CraftError {
    #[error("missing ingredients: need {needed}x {item_id}, have {available}")]
    MissingIngredients {
        item_id: String,
        needed: u32,
        available: u32,
    },
    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

impl Recipe {
    /// 在副本上先扣材料再放产物，两步都成功才写回背包
    pub fn try_craft(
        &self,
        host: &HostAuthority,
        inventory: &mut Inventory,
    ) -> Result<(), CraftError> {
        // 不消耗材料的配方会凭空造物
        if self.input_quantity == 0 {
            return Err(InventoryError::InvalidQuantity {
                item_id: self.input_id.clone(),
            }
            .into());
        }
        if !inventory.has_item(&self.input_id, self.input_quantity) {
            return Err(CraftError::MissingIngredients {
                item_id: self.input_id.clone(),
                needed: self.input_quantity,
                available: inventory.item_count(&self.input_id),
            });
        }

        let mut scratch = inventory.clone();
        scratch.remove_item(host, &self.input_id, self.input_quantity)?;
        scratch.add_item(
            host,
            &self.output_id,
            &self.output_name,
            self.output_quantity,
            self.output_max_stack,
        )?;
        *inventory = scratch;
        Ok(())
    }
}

/// 工作台，每个配方一台
#[derive(Component, Debug, Clone)]
pub struct CraftingStation {
    pub recipe: Recipe,
}
