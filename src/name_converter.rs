//! NameConverter：SELECT 上下文中列名的渲染策略（函数包装 + 别名）。

use crate::error::{Result, SqlError};

/// 列名渲染策略；只在 SELECT 列表中生效。
pub trait NameConverter: dyn_clone::DynClone + std::fmt::Debug {
    fn convert_name(&self, name: &str, alias: Option<&str>) -> Result<String>;
}

dyn_clone::clone_trait_object!(NameConverter);

/// 无别名时原样返回列名，有别名时渲染为 `name AS alias`。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BasicNameConverter;

impl NameConverter for BasicNameConverter {
    fn convert_name(&self, name: &str, alias: Option<&str>) -> Result<String> {
        require_name(name)?;
        Ok(match non_empty(alias) {
            Some(alias) => format!("{name} AS {alias}"),
            None => name.to_string(),
        })
    }
}

/// `date(name, 'unixepoch') AS alias`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SqliteDateNameConverter;

impl NameConverter for SqliteDateNameConverter {
    fn convert_name(&self, name: &str, alias: Option<&str>) -> Result<String> {
        unixepoch_call("date", name, alias)
    }
}

/// `datetime(name, 'unixepoch') AS alias`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SqliteDateTimeNameConverter;

impl NameConverter for SqliteDateTimeNameConverter {
    fn convert_name(&self, name: &str, alias: Option<&str>) -> Result<String> {
        unixepoch_call("datetime", name, alias)
    }
}

/// `time(name, 'unixepoch') AS alias`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SqliteTimeNameConverter;

impl NameConverter for SqliteTimeNameConverter {
    fn convert_name(&self, name: &str, alias: Option<&str>) -> Result<String> {
        unixepoch_call("time", name, alias)
    }
}

// 函数包装后的列总是带别名，缺省时用列名本身。
fn unixepoch_call(func: &str, name: &str, alias: Option<&str>) -> Result<String> {
    require_name(name)?;
    let alias = non_empty(alias).unwrap_or(name);
    Ok(format!("{func}({name}, 'unixepoch') AS {alias}"))
}

fn require_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(SqlError::argument("column name cannot be empty"));
    }
    Ok(())
}

fn non_empty(alias: Option<&str>) -> Option<&str> {
    alias.filter(|a| !a.is_empty())
}
