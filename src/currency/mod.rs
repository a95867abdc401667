pub mod components;
pub mod error;
pub mod events;
pub mod store;
mod systems;

use crate::core::states::AppState;
use bevy::prelude::*;
use events::*;
use systems::*;

pub struct CurrencyPlugin;

impl Plugin for CurrencyPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<AddMoney>()
            .add_event::<RemoveMoney>()
            .add_event::<ResetMoney>()
            .add_event::<ShowMoney>()
            .add_event::<TriggerEnter>()
            .add_event::<PurchaseRequest>()
            .add_systems(Startup, open_cookie_jar)
            .add_systems(
                Update,
                (
                    load_wallets,
                    (
                        handle_add_money,
                        handle_remove_money,
                        handle_reset_money,
                        collect_money_pickups,
                        handle_purchase,
                        show_money,
                    ),
                )
                    .chain()
                    .run_if(in_state(AppState::InGame)),
            );
    }
}
