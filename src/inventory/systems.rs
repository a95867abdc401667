use super::{components::*, error::InventoryError, events::*};
use crate::core::events::LogEvent;
use crate::data::ItemDefs;
use crate::network::NetworkRole;
use crate::player::components::PlayerRegistry;
use bevy::prelude::*;

/// 处理"give"——按物品表往玩家背包里塞物品
pub fn give_item(
    mut ev_give: EventReader<GiveItemEvent>,
    role: Res<NetworkRole>,
    registry: Res<PlayerRegistry>,
    defs: Res<ItemDefs>,
    mut inventories: Query<&mut Inventory>,
    mut log: EventWriter<LogEvent>,
) {
    for ev in ev_give.read() {
        let Some(proto) = defs.find(&ev.id) else {
            warn!("不存在物品 ID {}", ev.id);
            log.write(LogEvent(format!("不存在物品 ID {}", ev.id)));
            continue;
        };
        let host = match role.authorize() {
            Ok(host) => host,
            Err(e) => {
                log.write(LogEvent(format!("给予物品被拒绝: {e}")));
                continue;
            }
        };
        let Some(mut inventory) = registry
            .get(ev.player)
            .and_then(|e| inventories.get_mut(e).ok())
        else {
            warn!("玩家 {} 没有背包", ev.player);
            continue;
        };

        match inventory.add_item(&host, &proto.id, &proto.name, ev.count, proto.max_stack) {
            Ok(()) => {
                info!("获得 {} ×{}", proto.name, ev.count);
                log.write(LogEvent(format!(
                    "获得 {} ×{}（共 {}）",
                    proto.name,
                    ev.count,
                    inventory.item_count(&proto.id)
                )));
            }
            Err(InventoryError::CapacityExceeded { placed, dropped, .. }) => {
                warn!("背包已满，{} 只放入 {placed} 个", proto.name);
                log.write(LogEvent(format!(
                    "背包已满：{} 放入 {placed} 个，丢弃 {dropped} 个",
                    proto.name
                )));
            }
            Err(e) => {
                warn!("{e}");
                log.write(LogEvent(format!("无法获得 {}: {e}", proto.name)));
            }
        }
    }
}

/// 从背包移除物品
pub fn take_item(
    mut ev_take: EventReader<TakeItemEvent>,
    role: Res<NetworkRole>,
    registry: Res<PlayerRegistry>,
    defs: Res<ItemDefs>,
    mut inventories: Query<&mut Inventory>,
    mut log: EventWriter<LogEvent>,
) {
    for ev in ev_take.read() {
        let host = match role.authorize() {
            Ok(host) => host,
            Err(e) => {
                log.write(LogEvent(format!("移除物品被拒绝: {e}")));
                continue;
            }
        };
        let Some(mut inventory) = registry
            .get(ev.player)
            .and_then(|e| inventories.get_mut(e).ok())
        else {
            continue;
        };

        // 允许用名称指代物品
        let id = defs.find(&ev.id).map_or(ev.id.as_str(), |p| p.id.as_str());
        match inventory.remove_item(&host, id, ev.count) {
            Ok(()) => log.write(LogEvent(format!(
                "移除 {id} ×{}，剩余 {}",
                ev.count,
                inventory.item_count(id)
            ))),
            Err(e) => {
                warn!("{e}");
                log.write(LogEvent(format!("无法移除: {e}")))
            }
        };
    }
}

pub fn clear_inventory(
    mut ev_clear: EventReader<ClearInventoryEvent>,
    role: Res<NetworkRole>,
    registry: Res<PlayerRegistry>,
    mut inventories: Query<&mut Inventory>,
    mut log: EventWriter<LogEvent>,
) {
    for ev in ev_clear.read() {
        let Ok(host) = role.authorize() else {
            log.write(LogEvent("清空背包被拒绝：不是主机".into()));
            continue;
        };
        if let Some(mut inventory) = registry
            .get(ev.player)
            .and_then(|e| inventories.get_mut(e).ok())
        {
            inventory.clear(&host);
            log.write(LogEvent("背包已清空".into()));
        }
    }
}

/// 打印背包内容（读取，任何角色都可以）
pub fn print_inventory(
    mut ev_list: EventReader<ListInventoryEvent>,
    registry: Res<PlayerRegistry>,
    inventories: Query<&Inventory>,
    mut log: EventWriter<LogEvent>,
) {
    for ev in ev_list.read() {
        let Some(inventory) = registry.get(ev.player).and_then(|e| inventories.get(e).ok()) else {
            log.write(LogEvent("未找到背包".into()));
            continue;
        };

        if inventory.is_empty() {
            log.write(LogEvent("  (empty)".into()));
        }
        for (idx, stack) in inventory.entries().iter().enumerate() {
            log.write(LogEvent(format!(
                "[{idx}] {} ×{}/{} (id={})",
                stack.display_name, stack.quantity, stack.max_stack, stack.item_id
            )));
        }
        log.write(LogEvent(format!(
            "已用格子: {}/{}",
            inventory.used_slots(),
            inventory.capacity()
        )));
    }
}
