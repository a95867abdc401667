use bevy::asset::Asset;
use bevy::reflect::TypePath;
use serde::Deserialize;

fn default_max_stack() -> u32 {
    64
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ItemEntry {
    pub id: String,
    pub name: String,
    #[serde(default = "default_max_stack")]
    pub max_stack: u32,
}

/// 配方：消耗 input ×input_quantity，产出 output ×output_quantity
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecipeEntry {
    pub id: String,
    pub input: String,
    pub input_quantity: u32,
    pub output: String,
    #[serde(default = "default_output_quantity")]
    pub output_quantity: u32,
}

fn default_output_quantity() -> u32 {
    1
}

#[derive(Asset, TypePath, Deserialize, Debug)]
pub struct ItemCatalog {
    pub items: Vec<ItemEntry>,
    #[serde(default)]
    pub recipes: Vec<RecipeEntry>,
}
