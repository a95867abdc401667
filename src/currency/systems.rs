use super::{components::*, events::*, store::*};
use crate::core::events::LogEvent;
use crate::core::resources::GameConfig;
use crate::inventory::components::Inventory;
use crate::network::NetworkRole;
use crate::player::components::{AccountId, PlayerRegistry};
use bevy::prelude::*;

/// 打开存档；没有配置路径或打开失败时只保存在内存里
pub fn open_cookie_jar(
    mut commands: Commands,
    config: Res<GameConfig>,
    existing: Option<Res<CookieJar>>,
) {
    if existing.is_some() {
        return;
    }
    let jar = match &config.currency.cookie_path {
        Some(path) => match JsonFileStore::open(path) {
            Ok(store) => {
                info!("存档文件: {}", store.path().display());
                CookieJar::new(store)
            }
            Err(e) => {
                warn!("无法打开存档 {}: {e}，改用内存存档", path.display());
                CookieJar::in_memory()
            }
        },
        None => CookieJar::in_memory(),
    };
    commands.insert_resource(jar);
}

fn save_balance(jar: &mut CookieJar, account: &AccountId, balance: u64) {
    if account.0.is_empty() {
        return;
    }
    match jar.set(&money_key(&account.0), &balance) {
        Ok(()) => debug!("余额已保存: {balance}"),
        Err(e) => warn!("余额保存失败: {e}"),
    }
}

/// 还没读过存档的钱包从存档读取余额（仅主机）；
/// 以客户端身份生成、之后切换为主机的钱包在切换后的第一帧读取
pub fn load_wallets(
    role: Res<NetworkRole>,
    jar: Res<CookieJar>,
    mut wallets: Query<(&AccountId, &mut Wallet)>,
) {
    let Ok(host) = role.authorize() else {
        return;
    };
    for (account, mut wallet) in &mut wallets {
        if wallet.is_loaded() {
            continue;
        }
        let starting = wallet.starting_money();
        if account.0.is_empty() {
            warn!("账号 ID 为空（编辑器测试模式），余额 = 初始金额 {starting}");
            wallet.load(&host, starting);
            continue;
        }
        let balance = jar.get(&money_key(&account.0), starting);
        wallet.load(&host, balance);
        info!("余额已读取: {}", wallet.display());
    }
}

pub fn handle_add_money(
    mut ev_add: EventReader<AddMoney>,
    role: Res<NetworkRole>,
    registry: Res<PlayerRegistry>,
    mut jar: ResMut<CookieJar>,
    mut wallets: Query<(&AccountId, &mut Wallet)>,
    mut log: EventWriter<LogEvent>,
) {
    for ev in ev_add.read() {
        let host = match role.authorize() {
            Ok(host) => host,
            Err(e) => {
                warn!("{e}");
                log.write(LogEvent(format!("加钱被拒绝: {e}")));
                continue;
            }
        };
        let Some((account, mut wallet)) = registry
            .get(ev.player)
            .and_then(|e| wallets.get_mut(e).ok())
        else {
            warn!("玩家 {} 没有钱包", ev.player);
            continue;
        };

        match wallet.add_server(&host, ev.amount, &ev.reason) {
            Ok(balance) => {
                save_balance(&mut jar, account, balance);
                log.write(LogEvent(format!("+{} → {}", ev.amount, wallet.display())));
            }
            Err(e) => {
                warn!("{e}");
                log.write(LogEvent(format!("加钱失败: {e}")));
            }
        }
    }
}

pub fn handle_remove_money(
    mut ev_remove: EventReader<RemoveMoney>,
    role: Res<NetworkRole>,
    registry: Res<PlayerRegistry>,
    mut jar: ResMut<CookieJar>,
    mut wallets: Query<(&AccountId, &mut Wallet)>,
    mut log: EventWriter<LogEvent>,
) {
    for ev in ev_remove.read() {
        let host = match role.authorize() {
            Ok(host) => host,
            Err(e) => {
                warn!("{e}");
                log.write(LogEvent(format!("扣钱被拒绝: {e}")));
                continue;
            }
        };
        let Some((account, mut wallet)) = registry
            .get(ev.player)
            .and_then(|e| wallets.get_mut(e).ok())
        else {
            warn!("玩家 {} 没有钱包", ev.player);
            continue;
        };

        match wallet.remove_server(&host, ev.amount, &ev.reason) {
            Ok(balance) => {
                save_balance(&mut jar, account, balance);
                log.write(LogEvent(format!("-{} → {}", ev.amount, wallet.display())));
            }
            Err(e) => {
                warn!("{e}");
                log.write(LogEvent(format!("扣钱失败: {e}")));
            }
        }
    }
}

pub fn handle_reset_money(
    mut ev_reset: EventReader<ResetMoney>,
    role: Res<NetworkRole>,
    registry: Res<PlayerRegistry>,
    mut jar: ResMut<CookieJar>,
    mut wallets: Query<(&AccountId, &mut Wallet)>,
    mut log: EventWriter<LogEvent>,
) {
    for ev in ev_reset.read() {
        let Ok(host) = role.authorize() else {
            log.write(LogEvent("重置余额被拒绝：不是主机".into()));
            continue;
        };
        if let Some((account, mut wallet)) = registry
            .get(ev.player)
            .and_then(|e| wallets.get_mut(e).ok())
        {
            let balance = wallet.reset(&host);
            save_balance(&mut jar, account, balance);
            log.write(LogEvent(format!("余额已重置为 {}", wallet.display())));
        }
    }
}

/// 打印余额；任何角色都可以读
pub fn show_money(
    mut ev_show: EventReader<ShowMoney>,
    registry: Res<PlayerRegistry>,
    wallets: Query<&Wallet>,
    mut log: EventWriter<LogEvent>,
) {
    for ev in ev_show.read() {
        match registry.get(ev.player).and_then(|e| wallets.get(e).ok()) {
            Some(wallet) => log.write(LogEvent(format!("余额: {}", wallet.display()))),
            None => log.write(LogEvent("未找到钱包".into())),
        };
    }
}

/// 依次检查自身、父实体、祖父实体
fn find_wallet_owner(
    other: Entity,
    parents: &Query<&ChildOf>,
    wallets: &Query<(&AccountId, &mut Wallet)>,
) -> Option<Entity> {
    let mut current = other;
    for depth in 0..3 {
        if wallets.contains(current) {
            return Some(current);
        }
        if depth == 2 {
            break;
        }
        current = parents.get(current).ok()?.parent();
    }
    None
}

pub fn collect_money_pickups(
    mut commands: Commands,
    mut ev_enter: EventReader<TriggerEnter>,
    role: Res<NetworkRole>,
    mut jar: ResMut<CookieJar>,
    mut pickups: Query<&mut MoneyPickup>,
    parents: Query<&ChildOf>,
    mut wallets: Query<(&AccountId, &mut Wallet)>,
    mut log: EventWriter<LogEvent>,
) {
    for ev in ev_enter.read() {
        // 只有主机处理，防止客户端作弊
        let Ok(host) = role.authorize() else {
            continue;
        };
        let Ok(mut pickup) = pickups.get_mut(ev.volume) else {
            continue;
        };
        if !pickup.active {
            continue;
        }
        let Some(owner) = find_wallet_owner(ev.other, &parents, &wallets) else {
            continue;
        };
        let Ok((account, mut wallet)) = wallets.get_mut(owner) else {
            continue;
        };

        match wallet.add_server(&host, pickup.amount, "money pickup") {
            Ok(balance) => {
                save_balance(&mut jar, account, balance);
                log.write(LogEvent(format!("捡到 {}€", pickup.amount)));
                pickup.active = false;
                commands.entity(ev.volume).despawn();
            }
            Err(e) => warn!("金币拾取失败: {e}"),
        }
    }
}

pub fn handle_purchase(
    mut ev_buy: EventReader<PurchaseRequest>,
    role: Res<NetworkRole>,
    registry: Res<PlayerRegistry>,
    mut jar: ResMut<CookieJar>,
    shops: Query<&ShopItem>,
    mut buyers: Query<(&AccountId, &mut Wallet, &mut Inventory)>,
    mut log: EventWriter<LogEvent>,
) {
    for ev in ev_buy.read() {
        let Ok(host) = role.authorize() else {
            log.write(LogEvent("购买被拒绝：不是主机".into()));
            continue;
        };
        let Some(shop) = shops.iter().find(|s| s.matches(&ev.item)) else {
            log.write(LogEvent(format!("商店没有 {}", ev.item)));
            continue;
        };
        let Some((account, mut wallet, mut inventory)) = registry
            .get(ev.buyer)
            .and_then(|e| buyers.get_mut(e).ok())
        else {
            warn!("买家 {} 不存在", ev.buyer);
            continue;
        };

        match shop.sell_to(&host, &mut wallet, &mut inventory) {
            Ok(balance) => {
                save_balance(&mut jar, account, balance);
                log.write(LogEvent(format!(
                    "购买成功: {} ×{}，余额 {}",
                    shop.item_name,
                    shop.quantity,
                    wallet.display()
                )));
            }
            Err(e) => {
                warn!("无法购买 {}: {e}", shop.item_name);
                log.write(LogEvent(format!("无法购买 {}: {e}", shop.item_name)));
            }
        }
    }
}
