pub mod loader;
pub mod schema;

use crate::core::states::AppState;
use crate::crafting::components::Recipe;
use bevy::prelude::*;
use schema::{ItemCatalog, ItemEntry};

pub const CATALOG_PATH: &str = "data/items.catalog.ron";

// --------------------------- 资源 ---------------------------
#[derive(Resource, Default)]
pub struct CatalogHandle {
    handle: Option<Handle<ItemCatalog>>,
}

/// 加载完成后的物品表和配方
#[derive(Resource, Debug, Clone, Default)]
pub struct ItemDefs {
    pub items: Vec<ItemEntry>,
    pub recipes: Vec<Recipe>,
}

impl ItemDefs {
    /// 配方里引用了不存在的物品或数量为 0 时跳过该配方
    pub fn from_catalog(catalog: &ItemCatalog) -> Self {
        let items = catalog.items.clone();
        let recipes = catalog
            .recipes
            .iter()
            .filter_map(|r| {
                if r.input_quantity == 0 || r.output_quantity == 0 {
                    warn!("配方 {} 的数量必须大于 0", r.id);
                    return None;
                }
                let Some(output) = items.iter().find(|i| i.id == r.output) else {
                    warn!("配方 {} 的产物 {} 不在物品表中", r.id, r.output);
                    return None;
                };
                if !items.iter().any(|i| i.id == r.input) {
                    warn!("配方 {} 的材料 {} 不在物品表中", r.id, r.input);
                    return None;
                }
                Some(Recipe {
                    id: r.id.clone(),
                    input_id: r.input.clone(),
                    input_quantity: r.input_quantity,
                    output_id: output.id.clone(),
                    output_name: output.name.clone(),
                    output_quantity: r.output_quantity,
                    output_max_stack: output.max_stack,
                })
            })
            .collect();
        Self { items, recipes }
    }

    /// 按 id 或名称查询（忽略大小写）
    pub fn find(&self, token: &str) -> Option<&ItemEntry> {
        self.items
            .iter()
            .find(|e| e.id.eq_ignore_ascii_case(token) || e.name.eq_ignore_ascii_case(token))
    }
}

// --------------------------- 插件 ---------------------------
pub struct DataPlugin;
impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app.init_asset::<ItemCatalog>()
            .register_asset_loader(loader::RonCatalogLoader)
            .init_resource::<CatalogHandle>()
            .add_systems(OnEnter(AppState::Loading), start_loading)
            .add_systems(Update, check_loaded.run_if(in_state(AppState::Loading)));
    }
}

// --------------------------- 系统 ---------------------------
fn start_loading(mut catalog: ResMut<CatalogHandle>, asset_server: Res<AssetServer>) {
    catalog.handle = Some(asset_server.load(CATALOG_PATH));
}

fn check_loaded(
    mut commands: Commands,
    mut next: ResMut<NextState<AppState>>,
    catalog: Res<CatalogHandle>,
    catalogs: Res<Assets<ItemCatalog>>,
) {
    if let Some(list) = catalog.handle.as_ref().and_then(|h| catalogs.get(h)) {
        let defs = ItemDefs::from_catalog(list);
        info!(
            "✔ Items loaded: {}, recipes: {}",
            defs.items.len(),
            defs.recipes.len()
        );
        commands.insert_resource(defs);
        next.set(AppState::InGame);
    }
}
