//! SQL Flavor（方言）：决定原生类型表、时间值渲染策略与表存在性查询。

use crate::converter::{BasicValueConverter, SqliteValueConverter, ValueConverter};
use crate::error::SqlError;
use std::fmt;
use std::str::FromStr;

/// 支持的数据库方言。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flavor {
    #[default]
    MySQL,
    PostgreSQL,
    SQLite,
    SQLServer,
    Oracle,
}

impl Flavor {
    pub const ALL: [Flavor; 5] = [
        Self::MySQL,
        Self::PostgreSQL,
        Self::SQLite,
        Self::SQLServer,
        Self::Oracle,
    ];

    /// 该方言默认的值转换策略：SQLite 把时间存成 unix 时间戳，其余方言使用字符串字面量。
    pub fn value_converter(self) -> Box<dyn ValueConverter> {
        match self {
            Self::SQLite => Box::new(SqliteValueConverter),
            Self::MySQL | Self::PostgreSQL | Self::SQLServer | Self::Oracle => {
                Box::new(BasicValueConverter)
            }
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::MySQL => "MySQL",
            Self::PostgreSQL => "PostgreSQL",
            Self::SQLite => "SQLite",
            Self::SQLServer => "SQLServer",
            Self::Oracle => "Oracle",
        };
        f.write_str(s)
    }
}

impl FromStr for Flavor {
    type Err = SqlError;

    /// 大小写不敏感，接受常见别名（`postgres`、`mssql` 等）。
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(Self::MySQL),
            "postgresql" | "postgres" | "pg" => Ok(Self::PostgreSQL),
            "sqlite" | "sqlite3" => Ok(Self::SQLite),
            "sqlserver" | "mssql" | "sql server" => Ok(Self::SQLServer),
            "oracle" => Ok(Self::Oracle),
            _ => Err(SqlError::argument(format!("unknown database flavor: {s}"))),
        }
    }
}
