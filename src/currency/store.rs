//! 键值存档（“cookie”），只用于保存钱包余额。

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::StoreError;

/// 外部持久化服务
pub trait KeyValueStore: Send + Sync + 'static {
    fn get(&self, key: &str) -> Option<Value>;
    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, Value>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// 整个文件是一个 JSON 对象，每次写入都整体落盘
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: HashMap<String, Value>,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let values = if path.exists() {
            let text = std::fs::read_to_string(&path)?;
            serde_json::from_str(&text)?
        } else {
            HashMap::new()
        };
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        // 先写临时文件再改名，写到一半崩溃时旧存档仍然完整
        let text = serde_json::to_string_pretty(&self.values)?;
        let tmp = self.temp_path();
        std::fs::write(&tmp, text)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        self.flush()
    }
}

#[derive(Resource)]
pub struct CookieJar {
    store: Box<dyn KeyValueStore>,
}

impl CookieJar {
    pub fn new(store: impl KeyValueStore) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStore::default())
    }

    /// 取值；缺失或类型不符时返回 default
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.store.get(key) {
            Some(value) => serde_json::from_value(value).unwrap_or_else(|e| {
                warn!("cookie {key} 无法解析，使用默认值: {e}");
                default
            }),
            None => default,
        }
    }

    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let value = serde_json::to_value(value)?;
        self.store.set(key, value)
    }
}

pub fn money_key(account: &str) -> String {
    format!("player_money_{account}")
}
