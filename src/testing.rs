//! 测试用的无窗口 App

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use crate::GameplayPlugins;
use crate::core::resources::GameConfig;
use crate::core::states::AppState;
use crate::data::ItemDefs;
use crate::data::schema::{ItemCatalog, ItemEntry, RecipeEntry};
use crate::player::components::{LocalPlayer, PlayerId, PlayerRegistry};

fn item(id: &str, name: &str, max_stack: u32) -> ItemEntry {
    ItemEntry {
        id: id.into(),
        name: name.into(),
        max_stack,
    }
}

pub fn sample_defs() -> ItemDefs {
    ItemDefs::from_catalog(&ItemCatalog {
        items: vec![
            item("wood", "Wood", 64),
            item("stone", "Stone", 32),
            item("plank", "Plank", 64),
            item("sword", "Sword", 1),
        ],
        recipes: vec![RecipeEntry {
            id: "plank".into(),
            input: "wood".into(),
            input_quantity: 4,
            output: "plank".into(),
            output_quantity: 1,
        }],
    })
}

/// `setup` 在插件注册之后、第一帧之前执行，可以覆盖资源
pub fn app_with(setup: impl FnOnce(&mut App)) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .insert_resource(GameConfig::default())
        .insert_resource(sample_defs())
        .add_plugins(GameplayPlugins);
    setup(&mut app);
    app.finish();
    app.cleanup();

    app.world_mut()
        .resource_mut::<NextState<AppState>>()
        .set(AppState::InGame);
    app.update();
    app.update();
    app
}

pub fn in_game_app() -> App {
    app_with(|_| {})
}

pub fn local_player(app: &mut App) -> (PlayerId, Entity) {
    let id = app.world().resource::<LocalPlayer>().0;
    let entity = app
        .world()
        .resource::<PlayerRegistry>()
        .get(id)
        .expect("local player is spawned on entering InGame");
    (id, entity)
}
