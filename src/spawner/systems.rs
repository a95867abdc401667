use super::{components::*, events::*};
use crate::core::events::LogEvent;
use crate::player::components::{LocalPlayer, PlayerRegistry};
use bevy::prelude::*;

pub fn read_spawn_key(
    keys: Res<ButtonInput<KeyCode>>,
    local: Option<Res<LocalPlayer>>,
    registry: Res<PlayerRegistry>,
    spawners: Query<&BlockSpawner>,
    mut writer: EventWriter<SpawnBlockRequest>,
) {
    let Some(entity) = local.and_then(|l| registry.get(l.0)) else {
        return;
    };
    if let Ok(spawner) = spawners.get(entity) {
        if keys.just_pressed(spawner.key) {
            writer.write(SpawnBlockRequest { spawner: entity });
        }
    }
}

pub fn handle_spawn_request(
    mut commands: Commands,
    mut ev_spawn: EventReader<SpawnBlockRequest>,
    spawners: Query<(&BlockSpawner, &Transform)>,
    bodies: Query<(&Name, &ChildOf, &Transform)>,
    mut log: EventWriter<LogEvent>,
) {
    for ev in ev_spawn.read() {
        let Ok((spawner, owner_transform)) = spawners.get(ev.spawner) else {
            continue;
        };
        let Some(prefab) = &spawner.prefab else {
            warn!("BlockPrefab 没有设置！");
            continue;
        };
        let Some(body) = bodies
            .iter()
            .find(|(name, child_of, _)| child_of.parent() == ev.spawner && name.as_str() == "Body")
            .map(|(_, _, t)| owner_transform.mul_transform(*t))
        else {
            warn!("子实体中找不到 'Body'！");
            continue;
        };

        let at = spawner.spawn_transform(&body);
        commands.spawn((
            Name::new(prefab.label.clone()),
            Block {
                prefab: prefab.clone(),
                spawned_by: ev.spawner,
            },
            at,
        ));
        info!("方块生成于 {}", at.translation);
        log.write(LogEvent(format!("方块生成于 {}", at.translation)));
    }
}
