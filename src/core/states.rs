use bevy::prelude::*;

/// 游戏运行的大状态：Startup → Loading（读物品表）→ InGame → Shutdown
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    #[default]
    Startup,
    Loading,
    InGame,
    Shutdown, // 进入后发出 AppExit
}
