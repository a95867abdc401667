//! 权威端判定。
//!
//! 所有修改背包 / 钱包的入口都要求一个 [`HostAuthority`]，
//! 而它只能通过 [`NetworkRole::authorize`] 拿到，客户端副本无法构造。

use bevy::prelude::*;
use serde::Deserialize;
use thiserror::Error;

/// 本进程在主机 / 客户端拓扑中的角色
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkRole {
    #[default]
    Host,
    Proxy,
}

/// 持有即证明当前上下文是权威端
#[derive(Debug)]
pub struct HostAuthority {
    _private: (),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("rejected: mutation attempted from a non-authoritative context")]
pub struct Unauthorized;

impl NetworkRole {
    pub fn authorize(self) -> Result<HostAuthority, Unauthorized> {
        match self {
            NetworkRole::Host => Ok(HostAuthority { _private: () }),
            NetworkRole::Proxy => Err(Unauthorized),
        }
    }

    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "host" | "server" => Some(NetworkRole::Host),
            "proxy" | "client" => Some(NetworkRole::Proxy),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_host_is_authorized() {
        assert!(NetworkRole::Host.authorize().is_ok());
        assert_eq!(NetworkRole::Proxy.authorize().unwrap_err(), Unauthorized);
    }

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!(NetworkRole::parse("Server"), Some(NetworkRole::Host));
        assert_eq!(NetworkRole::parse("client"), Some(NetworkRole::Proxy));
        assert_eq!(NetworkRole::parse("observer"), None);
    }
}
