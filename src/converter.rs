//! ValueConverter：把列值与类别渲染为方言正确的 SQL 字面量。
//!
//! 各实现只在时间值的渲染上不同，其余分支共用 `ValueConverter::convert` 的默认实现。

use crate::category::DataTypeCategory;
use crate::error::{Result, SqlError};
use crate::value::{DATE_FORMAT, DATETIME_FORMAT, SqlValue, hex_upper};
use time::PrimitiveDateTime;
use time::format_description::FormatItem;

/// 值到 SQL 字面量的渲染策略。
///
/// 字符串类值只加外层单引号：转义在 `ColumnValue::set_value` 时已经完成。
pub trait ValueConverter: dyn_clone::DynClone + std::fmt::Debug {
    /// 渲染 `Date` 类别的值（`date` 已是格式化后的 `YYYY-MM-DD`）。
    fn render_date(&self, date: &str) -> String;

    /// 渲染 `DateTime` 类别的值（`datetime` 为 `YYYY-MM-DD HH:MM:SS`）。
    fn render_datetime(&self, datetime: &str) -> String;

    fn convert(&self, value: &SqlValue, category: DataTypeCategory) -> Result<String> {
        if value.is_null() {
            return Ok("NULL".to_string());
        }

        match category {
            DataTypeCategory::Boolean => {
                let b = coerce_bool(value).ok_or_else(|| {
                    SqlError::type_mismatch(format!(
                        "value is not convertible to boolean: {}",
                        value.plain_string()
                    ))
                })?;
                Ok(if b { "1" } else { "0" }.to_string())
            }
            DataTypeCategory::String | DataTypeCategory::Other => {
                Ok(format!("'{}'", value.plain_string()))
            }
            DataTypeCategory::DateTime => {
                let dt = temporal(value, category)?;
                Ok(self.render_datetime(&format_temporal(dt, DATETIME_FORMAT)?))
            }
            DataTypeCategory::Date => {
                let dt = temporal(value, category)?;
                Ok(self.render_date(&format_temporal(dt, DATE_FORMAT)?))
            }
            DataTypeCategory::Int | DataTypeCategory::Double => match value {
                SqlValue::Bool(_)
                | SqlValue::I64(_)
                | SqlValue::U64(_)
                | SqlValue::F32(_)
                | SqlValue::F64(_)
                | SqlValue::Decimal(_)
                | SqlValue::String(_) => Ok(value.plain_string()),
                _ => Err(SqlError::type_mismatch(format!(
                    "{category} column cannot render value {value:?}"
                ))),
            },
            DataTypeCategory::Binary => match value {
                SqlValue::Bytes(b) => Ok(format!("X'{}'", hex_upper(b))),
                _ => Err(SqlError::type_mismatch(format!(
                    "binary column cannot render value {value:?}"
                ))),
            },
        }
    }
}

dyn_clone::clone_trait_object!(ValueConverter);

/// 通用转换器：时间值渲染为带引号的字符串字面量。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BasicValueConverter;

impl ValueConverter for BasicValueConverter {
    fn render_date(&self, date: &str) -> String {
        format!("'{date}'")
    }

    fn render_datetime(&self, datetime: &str) -> String {
        format!("'{datetime}'")
    }
}

/// SQLite 转换器：时间值通过 `unixepoch(...)` 存为整数时间戳。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SqliteValueConverter;

impl ValueConverter for SqliteValueConverter {
    fn render_date(&self, date: &str) -> String {
        format!("unixepoch('{date}')")
    }

    fn render_datetime(&self, datetime: &str) -> String {
        format!("unixepoch('{datetime}')")
    }
}

fn temporal(value: &SqlValue, category: DataTypeCategory) -> Result<PrimitiveDateTime> {
    value.as_datetime().ok_or_else(|| {
        SqlError::type_mismatch(format!(
            "{category} column requires a date/time value, got {value:?}"
        ))
    })
}

fn format_temporal(dt: PrimitiveDateTime, fmt: &[FormatItem<'_>]) -> Result<String> {
    dt.format(fmt)
        .map_err(|e| SqlError::type_mismatch(format!("cannot format {dt}: {e}")))
}

/// 布尔强制转换：`bool` 原样，整数按非零判断，字符串只接受 `true`/`false`（忽略大小写）。
pub(crate) fn coerce_bool(value: &SqlValue) -> Option<bool> {
    match value {
        SqlValue::Bool(b) => Some(*b),
        SqlValue::I64(n) => Some(*n != 0),
        SqlValue::U64(n) => Some(*n != 0),
        SqlValue::String(s) => parse_bool(s),
        _ => None,
    }
}

pub(crate) fn parse_bool(s: &str) -> Option<bool> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
