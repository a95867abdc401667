use super::{components::*, events::*};
use crate::core::events::LogEvent;
use crate::data::ItemDefs;
use crate::inventory::components::Inventory;
use crate::network::NetworkRole;
use crate::player::components::PlayerRegistry;
use bevy::prelude::*;

/// 每个配方放一台工作台
pub fn spawn_stations(mut commands: Commands, defs: Option<Res<ItemDefs>>) {
    let Some(defs) = defs else {
        return;
    };
    for recipe in &defs.recipes {
        commands.spawn((
            Name::new(format!("Crafting station: {}", recipe.id)),
            CraftingStation {
                recipe: recipe.clone(),
            },
        ));
    }
}

pub fn handle_craft(
    mut ev_craft: EventReader<CraftRequest>,
    role: Res<NetworkRole>,
    registry: Res<PlayerRegistry>,
    stations: Query<&CraftingStation>,
    mut inventories: Query<&mut Inventory>,
    mut log: EventWriter<LogEvent>,
) {
    for ev in ev_craft.read() {
        let Some(station) = stations
            .iter()
            .find(|s| s.recipe.id.eq_ignore_ascii_case(&ev.recipe))
        else {
            log.write(LogEvent(format!("没有配方 {}", ev.recipe)));
            continue;
        };
        let host = match role.authorize() {
            Ok(host) => host,
            Err(e) => {
                log.write(LogEvent(format!("合成被拒绝: {e}")));
                continue;
            }
        };
        let Some(mut inventory) = registry
            .get(ev.player)
            .and_then(|e| inventories.get_mut(e).ok())
        else {
            continue;
        };

        let recipe = &station.recipe;
        match recipe.try_craft(&host, &mut inventory) {
            Ok(()) => {
                info!("合成成功: {} ×{}", recipe.output_name, recipe.output_quantity);
                log.write(LogEvent(format!(
                    "合成成功: {} ×{}",
                    recipe.output_name, recipe.output_quantity
                )));
            }
            Err(e) => {
                warn!("合成失败: {e}");
                log.write(LogEvent(format!("合成失败: {e}")));
            }
        }
    }
}
