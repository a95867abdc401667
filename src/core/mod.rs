use bevy::prelude::*;

pub mod events;
pub mod resources;
pub mod states;

/// 核心插件：注册全局资源 / 事件 / 状态
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        use states::AppState;

        app.init_state::<AppState>()
            .add_event::<events::LogEvent>()
            // 入口已插入配置时不会覆盖
            .init_resource::<resources::GameConfig>()
            .add_systems(Startup, insert_network_role)
            .add_systems(PostStartup, events::announce_role)
            .add_systems(OnEnter(AppState::Shutdown), request_exit);
    }
}

fn request_exit(mut app_exit: EventWriter<AppExit>) {
    info!("正在退出");
    app_exit.write(AppExit::Success);
}

/// 网络角色由配置决定；测试或 CLI 可以事先插入覆盖
fn insert_network_role(
    mut commands: Commands,
    config: Res<resources::GameConfig>,
    role: Option<Res<crate::network::NetworkRole>>,
) {
    if role.is_none() {
        commands.insert_resource(config.network.role);
    }
}

#[cfg(test)]
mod tests {
    use super::states::AppState;
    use crate::testing::in_game_app;
    use bevy::prelude::*;

    #[test]
    fn entering_shutdown_requests_exit() {
        let mut app = in_game_app();
        assert!(app.should_exit().is_none());

        app.world_mut()
            .resource_mut::<NextState<AppState>>()
            .set(AppState::Shutdown);
        app.update();

        assert_eq!(app.should_exit(), Some(AppExit::Success));
    }
}
