use bevy::prelude::*;

use crate::network::NetworkRole;

/// 面向玩家的提示文本，由二进制入口打印
#[derive(Event, Debug, Clone)]
pub struct LogEvent(pub String);

/// 启动时报告本进程的网络角色
pub fn announce_role(role: Res<NetworkRole>, mut writer: EventWriter<LogEvent>) {
    let text = match *role {
        NetworkRole::Host => "当前为主机（权威端），可以修改游戏状态",
        NetworkRole::Proxy => "当前为客户端副本，只能读取同步状态",
    };
    writer.write(LogEvent(text.into()));
}
