use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::input::InputPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use gameplay_kit::GameplayPlugins;
use gameplay_kit::core::{events::LogEvent, resources::GameConfig, states::AppState};
use gameplay_kit::currency::components::{MoneyPickup, ShopItem};
use gameplay_kit::data::DataPlugin;
use gameplay_kit::interface::debug_cli::DebugCliPlugin;
use gameplay_kit::pickup::components::ItemPickup;

fn main() -> anyhow::Result<()> {
    let config = GameConfig::load_or_default()?;

    let exit = App::new()
        // 无窗口，固定 60 帧
        .add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(
            Duration::from_secs_f64(1.0 / 60.0),
        )))
        .add_plugins((
            LogPlugin::default(),
            AssetPlugin::default(),
            StatesPlugin,
            InputPlugin,
        ))
        .insert_resource(config)
        .add_plugins(GameplayPlugins)
        .add_plugins(DataPlugin)
        .add_plugins(DebugCliPlugin)
        .add_systems(Update, forward_log_event) // 简单打印
        .add_systems(Startup, |mut next: ResMut<NextState<AppState>>| {
            next.set(AppState::Loading);
        })
        .add_systems(OnEnter(AppState::InGame), spawn_demo_scene)
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => Err(anyhow::anyhow!("exited with code {code}")),
    }
}

fn forward_log_event(mut reader: EventReader<LogEvent>) {
    for e in reader.read() {
        println!("> {}", e.0);
    }
}

/// 在玩家面前摆几样东西，方便用 CLI 试玩
fn spawn_demo_scene(mut commands: Commands, config: Res<GameConfig>) {
    let section = &config.pickup;
    commands.spawn((
        Name::new("Wood pile"),
        ItemPickup::new("wood", "Wood", 8, config.inventory.default_max_stack, section),
        Transform::from_xyz(0.0, 0.0, -4.0),
    ));
    commands.spawn((
        Name::new("Stone"),
        ItemPickup::new("stone", "Stone", 5, 32, section),
        Transform::from_xyz(1.5, 0.0, -9.0),
    ));
    commands.spawn((
        Name::new("Coin"),
        MoneyPickup::new(50),
        Transform::from_xyz(3.0, 0.0, 0.0),
    ));
    commands.spawn((
        Name::new("Shop: sword"),
        ShopItem {
            price: 80,
            item_id: "sword".into(),
            item_name: "Sword".into(),
            quantity: 1,
            max_stack: 1,
        },
    ));
}
