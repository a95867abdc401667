//! 文字 CLI：读取 stdin → 解析命令 → 转成游戏事件

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use once_cell::sync::Lazy;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::core::{events::LogEvent, states::AppState};
use crate::crafting::events::CraftRequest;
use crate::currency::components::MoneyPickup;
use crate::currency::events::*;
use crate::data::ItemDefs;
use crate::inventory::events::*;
use crate::network::NetworkRole;
use crate::pickup::events::PickupRequest;
use crate::player::components::{LocalPlayer, PlayerRegistry};
use crate::spawner::events::SpawnBlockRequest;

static CLI_BUFFER: Lazy<Arc<Mutex<VecDeque<String>>>> =
    Lazy::new(|| Arc::new(Mutex::new(VecDeque::new())));

/// 插件入口
pub struct DebugCliPlugin;
impl Plugin for DebugCliPlugin {
    fn build(&self, app: &mut App) {
        {
            let buffer = CLI_BUFFER.clone();
            std::thread::spawn(move || {
                use std::io::{self, BufRead};
                let stdin = io::stdin();
                for line in stdin.lock().lines().map_while(Result::ok) {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    if let Ok(mut buf) = buffer.lock() {
                        buf.push_back(line.to_string());
                    }
                }
            });
        }
        app
            // 事件：原始输入行
            .add_event::<CliLine>()
            // 每帧从 buffer 取出所有命令行写入事件
            .add_systems(Update, read_stdin)
            // 仅在 InGame 处理命令
            .add_systems(
                Update,
                execute_cli_commands
                    .after(read_stdin)
                    .run_if(in_state(AppState::InGame)),
            );
    }
}

/* ---------------------------- 事件与枚举 ---------------------------- */

/// 终端敲的一整行
#[derive(Event)]
struct CliLine(String);

/// 我们支持的命令
#[derive(Debug, PartialEq)]
enum Command {
    Help,
    Status,
    Exit,
    Items(Option<String>), // None=全部；Some(token)=按 id/uuid/name 查询
    Give { id: String, count: u32 },
    Take { id: String, count: u32 },
    Inventory,
    Clear,
    Money,
    Earn { amount: u64, reason: String },
    Spend { amount: u64, reason: String },
    ResetMoney,
    Craft(String),
    Buy(String),
    Pickup,
    Spawn,
    TouchMoney,
    Role(Option<NetworkRole>),
    Unsupported(String),
}

/// 命令会用到的全部事件写入器
#[derive(SystemParam)]
struct CliWriters<'w> {
    give: EventWriter<'w, GiveItemEvent>,
    take: EventWriter<'w, TakeItemEvent>,
    list: EventWriter<'w, ListInventoryEvent>,
    clear: EventWriter<'w, ClearInventoryEvent>,
    show_money: EventWriter<'w, ShowMoney>,
    add_money: EventWriter<'w, AddMoney>,
    remove_money: EventWriter<'w, RemoveMoney>,
    reset_money: EventWriter<'w, ResetMoney>,
    craft: EventWriter<'w, CraftRequest>,
    buy: EventWriter<'w, PurchaseRequest>,
    pickup: EventWriter<'w, PickupRequest>,
    spawn: EventWriter<'w, SpawnBlockRequest>,
    trigger: EventWriter<'w, TriggerEnter>,
}

/* ---------------------------- 读取 stdin ---------------------------- */

fn read_stdin(mut writer: EventWriter<CliLine>) {
    let Ok(mut buffer) = CLI_BUFFER.lock() else {
        return;
    };
    while let Some(line) = buffer.pop_front() {
        writer.write(CliLine(line));
    }
}

/* ---------------------------- 命令执行 ---------------------------- */

const HELP: &str = "命令列表:
  help                     查看帮助
  status                   查看当前状态
  exit / quit              退出程序
  items [token]            列出物品 / 用 id、uuid、名称查询
  give <id> [count]        给予物品
  take <id> [count]        移除物品
  inventory                查看物品栏
  clear                    清空物品栏
  money                    查看余额
  earn <amount> [reason]   加钱
  spend <amount> [reason]  扣钱
  reset-money              余额恢复初始值
  craft <recipe>           在工作台合成
  buy <item>               从商店购买
  pickup                   拾取正在看着的物品（同 F 键）
  spawn                    生成方块（同 E 键）
  touch-money              走进场景里的金币
  role [host|proxy]        查看 / 切换网络角色";

#[allow(clippy::too_many_arguments)]
fn execute_cli_commands(
    mut line_reader: EventReader<CliLine>,
    mut next_state: ResMut<NextState<AppState>>,
    mut log: EventWriter<LogEvent>,
    state: Res<State<AppState>>,
    mut role: ResMut<NetworkRole>,
    defs: Option<Res<ItemDefs>>,
    local: Option<Res<LocalPlayer>>,
    registry: Res<PlayerRegistry>,
    coins: Query<Entity, With<MoneyPickup>>,
    mut out: CliWriters,
) {
    for CliLine(input) in line_reader.read() {
        let command = parse_command(input);

        // 与玩家无关的命令
        match &command {
            Command::Help => {
                log.write(LogEvent(HELP.into()));
                continue;
            }
            Command::Status => {
                log.write(LogEvent(format!(
                    "State: {:?}, Role: {:?}, Items Loaded: {}, Players: {}",
                    state.get(),
                    *role,
                    defs.as_ref().map_or(0, |d| d.items.len()),
                    registry.len()
                )));
                continue;
            }
            Command::Exit => {
                log.write(LogEvent("Bye~".into()));
                next_state.set(AppState::Shutdown);
                continue;
            }
            Command::Items(token) => {
                if let Some(defs) = &defs {
                    list_items(defs, token.as_deref(), &mut log);
                }
                continue;
            }
            Command::Role(new_role) => {
                if let Some(new_role) = new_role {
                    *role = *new_role;
                }
                log.write(LogEvent(format!("网络角色: {:?}", *role)));
                continue;
            }
            Command::Unsupported(cmd) => {
                log.write(LogEvent(format!("不支持的命令: {cmd}")));
                continue;
            }
            _ => {}
        }

        let Some(LocalPlayer(player)) = local.as_deref().copied() else {
            log.write(LogEvent("本地玩家尚未生成".into()));
            continue;
        };

        match command {
            Command::Give { id, count } => {
                out.give.write(GiveItemEvent { player, id, count });
            }
            Command::Take { id, count } => {
                out.take.write(TakeItemEvent { player, id, count });
            }
            Command::Inventory => {
                out.list.write(ListInventoryEvent { player });
            }
            Command::Clear => {
                out.clear.write(ClearInventoryEvent { player });
            }
            Command::Money => {
                out.show_money.write(ShowMoney { player });
            }
            Command::Earn { amount, reason } => {
                out.add_money.write(AddMoney {
                    player,
                    amount,
                    reason,
                });
            }
            Command::Spend { amount, reason } => {
                out.remove_money.write(RemoveMoney {
                    player,
                    amount,
                    reason,
                });
            }
            Command::ResetMoney => {
                out.reset_money.write(ResetMoney { player });
            }
            Command::Craft(recipe) => {
                out.craft.write(CraftRequest { player, recipe });
            }
            Command::Buy(item) => {
                out.buy.write(PurchaseRequest {
                    buyer: player,
                    item,
                });
            }
            Command::Pickup => {
                out.pickup.write(PickupRequest { player });
            }
            Command::Spawn => {
                if let Some(spawner) = registry.get(player) {
                    out.spawn.write(SpawnBlockRequest { spawner });
                }
            }
            Command::TouchMoney => match (coins.iter().next(), registry.get(player)) {
                (Some(volume), Some(other)) => {
                    out.trigger.write(TriggerEnter { volume, other });
                }
                _ => {
                    log.write(LogEvent("附近没有金币".into()));
                }
            },
            _ => {}
        }
    }
}

/* ---------------------------- 工具函数 ---------------------------- */

fn list_items(defs: &ItemDefs, token: Option<&str>, log: &mut EventWriter<LogEvent>) {
    match token {
        None => {
            for entry in &defs.items {
                log.write(LogEvent(format!(
                    "{} | {} | {} | ×{}",
                    uuid_from_id(&entry.id),
                    entry.id,
                    entry.name,
                    entry.max_stack
                )));
            }
        }
        Some(t) => {
            let found = defs
                .find(t)
                .or_else(|| defs.items.iter().find(|e| uuid_from_id(&e.id).to_string() == t));
            match found {
                Some(e) => {
                    log.write(LogEvent(format!(
                        "==================================================
UUID      : {}
ID        : {}
Name      : {}
Max stack : {}
==================================================",
                        uuid_from_id(&e.id),
                        e.id,
                        e.name,
                        e.max_stack
                    )));
                }
                None => {
                    log.write(LogEvent("未找到匹配物品".into()));
                }
            }
        }
    }
}

fn parse_command(input: &str) -> Command {
    let mut parts = input.split_whitespace();
    let cmd = parts.next().unwrap_or("").to_lowercase();
    let rest = |parts: std::str::SplitWhitespace<'_>, default: &str| {
        let text = parts.collect::<Vec<_>>().join(" ");
        if text.is_empty() {
            default.to_string()
        } else {
            text
        }
    };
    match cmd.as_str() {
        "help" | "h" | "?" => Command::Help,
        "status" | "s" => Command::Status,
        "exit" | "quit" | "q" => Command::Exit,
        "items" | "item" | "i" => Command::Items(parts.next().map(|s| s.to_string())),
        "give" => {
            let id = parts.next().unwrap_or("").to_string();
            let count = parts.next().unwrap_or("1").parse().unwrap_or(1);
            Command::Give { id, count }
        }
        "take" | "drop" => {
            let id = parts.next().unwrap_or("").to_string();
            let count = parts.next().unwrap_or("1").parse().unwrap_or(1);
            Command::Take { id, count }
        }
        "inventory" | "inv" => Command::Inventory,
        "clear" => Command::Clear,
        "money" | "m" => Command::Money,
        // 解析失败得到 0，由钱包拒绝
        "earn" => {
            let amount = parts.next().unwrap_or("").parse().unwrap_or(0);
            Command::Earn {
                amount,
                reason: rest(parts, "cli"),
            }
        }
        "spend" => {
            let amount = parts.next().unwrap_or("").parse().unwrap_or(0);
            Command::Spend {
                amount,
                reason: rest(parts, "cli"),
            }
        }
        "reset-money" => Command::ResetMoney,
        "craft" => Command::Craft(parts.next().unwrap_or("").to_string()),
        "buy" => Command::Buy(rest(parts, "")),
        "pickup" | "f" => Command::Pickup,
        "spawn" | "e" => Command::Spawn,
        "touch-money" => Command::TouchMoney,
        "role" => Command::Role(parts.next().and_then(NetworkRole::parse)),
        other => Command::Unsupported(other.into()),
    }
}

fn uuid_from_id(id: &str) -> Uuid {
    // 用固定 namespace + id 字节生成版本 5 UUID，保证可重复得到同一值
    Uuid::new_v5(&Uuid::NAMESPACE_OID, id.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_item_commands() {
        assert_eq!(
            parse_command("give wood 12"),
            Command::Give {
                id: "wood".into(),
                count: 12
            }
        );
        assert_eq!(
            parse_command("take stone"),
            Command::Take {
                id: "stone".into(),
                count: 1
            }
        );
        assert_eq!(parse_command("INV"), Command::Inventory);
    }

    #[test]
    fn parses_money_commands() {
        assert_eq!(
            parse_command("earn 50 daily quest"),
            Command::Earn {
                amount: 50,
                reason: "daily quest".into()
            }
        );
        assert_eq!(
            parse_command("spend lots"),
            Command::Spend {
                amount: 0,
                reason: "cli".into()
            }
        );
    }

    #[test]
    fn parses_role_and_unknown() {
        assert_eq!(
            parse_command("role proxy"),
            Command::Role(Some(NetworkRole::Proxy))
        );
        assert_eq!(parse_command("role"), Command::Role(None));
        assert_eq!(
            parse_command("dance"),
            Command::Unsupported("dance".into())
        );
    }
}
