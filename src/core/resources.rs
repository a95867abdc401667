use std::path::{Path, PathBuf};

use anyhow::Context;
use bevy::prelude::*;
use serde::Deserialize;

use crate::network::NetworkRole;

/// 配置文件默认路径，可用环境变量覆盖
pub const DEFAULT_CONFIG_PATH: &str = "config/game.toml";
pub const CONFIG_PATH_ENV: &str = "GAMEPLAY_CONFIG";

/// 全局配置（来自 TOML，缺省字段取默认值）
#[derive(Resource, Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub network: NetworkSection,
    pub player: PlayerSection,
    pub inventory: InventorySection,
    pub currency: CurrencySection,
    pub pickup: PickupSection,
    pub respawn: RespawnSection,
    pub spawner: SpawnerSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NetworkSection {
    pub role: NetworkRole,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerSection {
    /// 平台账号 ID（类似 SteamId），为空表示编辑器测试模式
    pub account: String,
}

impl Default for PlayerSection {
    fn default() -> Self {
        Self {
            account: "local".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InventorySection {
    pub capacity: usize,
    pub default_max_stack: u32,
}

impl Default for InventorySection {
    fn default() -> Self {
        Self {
            capacity: 20,
            default_max_stack: 64,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CurrencySection {
    pub starting_money: u64,
    /// None = 只保存在内存里
    pub cookie_path: Option<PathBuf>,
}

impl Default for CurrencySection {
    fn default() -> Self {
        Self {
            starting_money: 100,
            cookie_path: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PickupSection {
    pub max_distance: f32,
    /// 角度制
    pub max_view_angle: f32,
}

impl Default for PickupSection {
    fn default() -> Self {
        Self {
            max_distance: 300.0,
            max_view_angle: 45.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RespawnSection {
    pub death_height: f32,
    pub position: [f32; 3],
}

impl Default for RespawnSection {
    fn default() -> Self {
        Self {
            death_height: -100.0,
            position: [0.0, 100.0, 0.0],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SpawnerSection {
    pub distance: f32,
    pub lift: f32,
}

impl Default for SpawnerSection {
    fn default() -> Self {
        Self {
            distance: 2.0,
            lift: 35.0,
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("invalid game config")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }

    /// 文件不存在时退回默认配置；文件存在但格式错误仍然报错
    pub fn load_or_default() -> anyhow::Result<Self> {
        let path = std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    pub fn respawn_position(&self) -> Vec3 {
        Vec3::from_array(self.respawn.position)
    }
}
