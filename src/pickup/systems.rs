use super::{components::*, events::*, proximity::check_view};
use crate::core::events::LogEvent;
use crate::inventory::{components::Inventory, error::InventoryError};
use crate::network::NetworkRole;
use crate::player::components::{LocalPlayer, PlayerRegistry, Viewer};
use bevy::prelude::*;

pub const PICKUP_KEY: KeyCode = KeyCode::KeyF;

/// 每帧轮询一次拾取键
pub fn read_pickup_key(
    keys: Res<ButtonInput<KeyCode>>,
    local: Option<Res<LocalPlayer>>,
    mut writer: EventWriter<PickupRequest>,
) {
    if !keys.just_pressed(PICKUP_KEY) {
        return;
    }
    if let Some(local) = local {
        writer.write(PickupRequest { player: local.0 });
    }
}

/// 刷新每个可拾取物的注视状态，刚被看到时给出提示
pub fn update_pickup_focus(
    viewer: Query<&Transform, With<Viewer>>,
    mut pickups: Query<(&ItemPickup, &Transform, &mut PickupFocus)>,
    mut log: EventWriter<LogEvent>,
) {
    let viewer = viewer.single().ok();
    for (pickup, transform, mut focus) in &mut pickups {
        let Some(eye) = viewer else {
            *focus = PickupFocus::default();
            continue;
        };
        let check = check_view(
            eye.translation,
            *eye.forward(),
            transform.translation,
            pickup.max_distance,
            pickup.max_view_angle,
        );
        if check.in_view && !focus.looked_at {
            log.write(LogEvent(pickup.prompt()));
        }
        focus.looked_at = check.in_view;
        focus.distance = check.distance;
    }
}

/// 只拾取正在注视的物品中最近的那一个
pub fn handle_pickup_request(
    mut commands: Commands,
    mut ev_pickup: EventReader<PickupRequest>,
    role: Res<NetworkRole>,
    registry: Res<PlayerRegistry>,
    mut pickups: Query<(Entity, &mut ItemPickup, &PickupFocus)>,
    mut inventories: Query<&mut Inventory>,
    mut log: EventWriter<LogEvent>,
) {
    for ev in ev_pickup.read() {
        let Some(target) = pickups
            .iter()
            .filter(|(_, p, focus)| focus.looked_at && p.quantity > 0)
            .min_by(|(_, _, a), (_, _, b)| a.distance.total_cmp(&b.distance))
            .map(|(e, _, _)| e)
        else {
            continue;
        };

        // 服务器才能改背包
        let Ok(host) = role.authorize() else {
            continue;
        };
        let Some(mut inventory) = registry
            .get(ev.player)
            .and_then(|e| inventories.get_mut(e).ok())
        else {
            warn!("玩家 {} 没有背包", ev.player);
            continue;
        };
        let Ok((entity, mut pickup, _)) = pickups.get_mut(target) else {
            continue;
        };

        match inventory.add_item(
            &host,
            &pickup.item_id,
            &pickup.item_name,
            pickup.quantity,
            pickup.max_stack,
        ) {
            Ok(()) => {
                log.write(LogEvent(format!(
                    "✅ 拾取 {} ×{}",
                    pickup.item_name, pickup.quantity
                )));
                pickup.quantity = 0;
                commands.entity(entity).despawn();
            }
            // 放不下的部分留在地上
            Err(InventoryError::CapacityExceeded {
                placed, dropped, ..
            }) => {
                pickup.quantity = dropped;
                log.write(LogEvent(format!(
                    "背包已满：拾取 {} ×{placed}，剩余 {dropped} 留在地上",
                    pickup.item_name
                )));
            }
            Err(e) => {
                warn!("无法拾取 {}: {e}", pickup.item_name);
                log.write(LogEvent(format!("无法拾取 {}: {e}", pickup.item_name)));
            }
        }
    }
}
