pub mod components;
pub mod error;
pub mod events;
mod systems;

use crate::core::states::AppState;
use bevy::prelude::*;
use events::*;
use systems::*;

pub struct InventoryPlugin;
impl Plugin for InventoryPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<GiveItemEvent>()
            .add_event::<TakeItemEvent>()
            .add_event::<ClearInventoryEvent>()
            .add_event::<ListInventoryEvent>()
            .add_systems(
                Update,
                (give_item, take_item, clear_inventory, print_inventory)
                    .chain()
                    .run_if(in_state(AppState::InGame)),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::components::Inventory;
    use super::events::*;
    use crate::network::NetworkRole;
    use crate::testing::{in_game_app, local_player};
    use bevy::prelude::*;

    fn count(app: &App, entity: Entity, id: &str) -> u32 {
        app.world().get::<Inventory>(entity).unwrap().item_count(id)
    }

    #[test]
    fn give_uses_catalog_name_and_stack_size() {
        let mut app = in_game_app();
        let (id, entity) = local_player(&mut app);

        app.world_mut().send_event(GiveItemEvent {
            player: id,
            id: "Stone".into(),
            count: 40,
        });
        app.update();

        let inventory = app.world().get::<Inventory>(entity).unwrap();
        let items = inventory.list_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].item_id, "stone");
        assert_eq!(items[0].quantity, 32);
        assert_eq!(items[1].quantity, 8);
    }

    #[test]
    fn unknown_item_is_ignored() {
        let mut app = in_game_app();
        let (id, entity) = local_player(&mut app);

        app.world_mut().send_event(GiveItemEvent {
            player: id,
            id: "unobtainium".into(),
            count: 1,
        });
        app.update();

        assert!(app.world().get::<Inventory>(entity).unwrap().is_empty());
    }

    #[test]
    fn take_and_clear() {
        let mut app = in_game_app();
        let (id, entity) = local_player(&mut app);

        app.world_mut().send_event(GiveItemEvent {
            player: id,
            id: "wood".into(),
            count: 10,
        });
        app.update();
        app.world_mut().send_event(TakeItemEvent {
            player: id,
            id: "wood".into(),
            count: 4,
        });
        app.update();
        assert_eq!(count(&app, entity, "wood"), 6);

        app.world_mut().send_event(ClearInventoryEvent { player: id });
        app.update();
        assert_eq!(count(&app, entity, "wood"), 0);
    }

    #[test]
    fn proxy_requests_do_not_touch_inventory() {
        let mut app = in_game_app();
        let (id, entity) = local_player(&mut app);
        app.insert_resource(NetworkRole::Proxy);

        app.world_mut().send_event(GiveItemEvent {
            player: id,
            id: "wood".into(),
            count: 10,
        });
        app.update();

        assert_eq!(count(&app, entity, "wood"), 0);
    }
}
