//! 数据库配置：方言 + 连接串，以及 `key=value;...` 连接串解析。

use crate::error::{Result, SqlError};
use crate::flavor::Flavor;
use std::collections::HashMap;
use std::str::FromStr;

/// 提供方言与连接串的配置来源。
pub trait DatabaseConfig {
    fn flavor(&self) -> Flavor;

    fn connection_string(&self) -> String;

    fn parsed_connection_string(&self) -> ConnectionString {
        ConnectionString::parse(&self.connection_string())
    }
}

/// 固定值配置。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticConfig {
    pub flavor: Flavor,
    pub connection_string: String,
}

impl StaticConfig {
    pub fn new(flavor: Flavor, connection_string: impl Into<String>) -> Self {
        Self {
            flavor,
            connection_string: connection_string.into(),
        }
    }
}

impl DatabaseConfig for StaticConfig {
    fn flavor(&self) -> Flavor {
        self.flavor
    }

    fn connection_string(&self) -> String {
        self.connection_string.clone()
    }
}

/// 解析后的连接串。键大小写不敏感，值保留原样（去除首尾空白）。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionString {
    entries: HashMap<String, String>,
}

impl ConnectionString {
    /// 宽松解析：空段与没有 `=` 的段被忽略，重复键以后者为准。
    pub fn parse(s: &str) -> Self {
        let entries = s
            .split(';')
            .filter_map(|seg| {
                let (k, v) = seg.split_once('=')?;
                let k = k.trim();
                if k.is_empty() {
                    return None;
                }
                Some((k.to_ascii_lowercase(), v.trim().to_string()))
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(&key.trim().to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// SQLite 等文件型数据库的 `Data Source` 路径。
    pub fn data_source(&self) -> Result<&str> {
        self.get("Data Source")
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                SqlError::argument("invalid connection string: Data Source keyword not found")
            })
    }
}

impl FromStr for ConnectionString {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_is_case_insensitive_and_lenient() {
        let cs = ConnectionString::parse("Data Source=/tmp/app.db; Version=3;;junk; =x");
        assert_eq!(cs.len(), 2);
        assert_eq!(cs.get("data source"), Some("/tmp/app.db"));
        assert_eq!(cs.get("VERSION"), Some("3"));
        assert_eq!(cs.data_source().unwrap(), "/tmp/app.db");
    }

    #[test]
    fn data_source_missing_is_argument_error() {
        let cs: ConnectionString = "Server=localhost;Database=app".parse().unwrap();
        assert!(matches!(cs.data_source(), Err(SqlError::Argument(_))));
    }

    #[test]
    fn static_config_exposes_flavor_and_parsed_string() {
        let cfg = StaticConfig::new(Flavor::SQLite, "Data Source=test.db");
        assert_eq!(cfg.flavor(), Flavor::SQLite);
        assert_eq!(
            cfg.parsed_connection_string().data_source().unwrap(),
            "test.db"
        );
    }
}
