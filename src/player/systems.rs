use super::{components::*, events::*};
use crate::core::events::LogEvent;
use crate::core::resources::GameConfig;
use crate::currency::components::Wallet;
use crate::inventory::components::Inventory;
use crate::spawner::components::BlockSpawner;
use bevy::prelude::*;

/// 生成一个玩家实体（带名为 Body 的子实体），并登记到 PlayerRegistry
pub fn spawn_player_entity(
    commands: &mut Commands,
    registry: &mut PlayerRegistry,
    config: &GameConfig,
    account: &str,
) -> (PlayerId, Entity) {
    let id = PlayerId::from_account(account);
    let player = commands
        .spawn((
            Player,
            Name::new(format!("Player {account}")),
            id,
            AccountId(account.to_string()),
            Inventory::new(config.inventory.capacity),
            Wallet::new(config.currency.starting_money),
            FallRespawn {
                death_height: config.respawn.death_height,
                respawn_position: config.respawn_position(),
            },
            BlockSpawner::from_config(&config.spawner),
            Transform::default(),
        ))
        .id();
    commands.spawn((
        Name::new("Body"),
        Transform::from_xyz(0.0, 1.0, 0.0),
        ChildOf(player),
    ));

    registry.insert(id, player);
    (id, player)
}

/// 进入游戏时生成本地玩家
pub fn spawn_local_player(
    mut commands: Commands,
    mut registry: ResMut<PlayerRegistry>,
    config: Res<GameConfig>,
) {
    let (id, entity) =
        spawn_player_entity(&mut commands, &mut registry, &config, &config.player.account);
    commands.entity(entity).insert(Viewer);
    commands.insert_resource(LocalPlayer(id));
    info!("本地玩家 {} 已生成 (id={id})", config.player.account);
}

/// 玩家实体被销毁后从登记表移除
pub fn forget_despawned_players(
    mut removed: RemovedComponents<Player>,
    mut registry: ResMut<PlayerRegistry>,
) {
    for entity in removed.read() {
        registry.forget_entity(entity);
    }
}

/// 掉到死亡高度以下就传送回重生点
pub fn respawn_fallen(
    mut query: Query<(Entity, &FallRespawn, &mut Transform)>,
    mut ev_death: EventWriter<Death>,
    mut ev_log: EventWriter<LogEvent>,
) {
    for (entity, zone, mut transform) in &mut query {
        if transform.translation.y < zone.death_height {
            transform.translation = zone.respawn_position;
            ev_death.write(Death { entity });
            ev_log.write(LogEvent("死亡！已在重生点复活".to_string()));
        }
    }
}
