//! SQL 列值类型。

use rust_decimal::Decimal;
use std::borrow::Cow;
use std::fmt::Write;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};

pub(crate) const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");
pub(crate) const DATETIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// 列上保存的原始值。
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    I64(i64),
    U64(u64),
    /// 单精度值保留原样，按自身精度输出（`0.1_f32` 渲染为 `0.1`）。
    F32(f32),
    F64(f64),
    Decimal(Decimal),
    String(Cow<'static, str>),
    Bytes(Vec<u8>),
    Date(Date),
    DateTime(PrimitiveDateTime),
    /// 带时区偏移的时间；渲染时只取其本地日期与时间部分。
    DateTimeOffset(OffsetDateTime),
}

impl SqlValue {
    /// 将 `Option<T>` 映射为 `SqlValue`：`None => Null`，`Some(v) => v.into()`。
    pub fn from_option<T: Into<SqlValue>>(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// 时间类值统一为本地日期时间；`Date` 视为当天零点。其它值返回 `None`。
    pub fn as_datetime(&self) -> Option<PrimitiveDateTime> {
        match self {
            Self::Date(d) => Some(PrimitiveDateTime::new(*d, Time::MIDNIGHT)),
            Self::DateTime(dt) => Some(*dt),
            Self::DateTimeOffset(dt) => Some(PrimitiveDateTime::new(dt.date(), dt.time())),
            _ => None,
        }
    }

    pub(crate) fn is_temporal(&self) -> bool {
        matches!(
            self,
            Self::Date(_) | Self::DateTime(_) | Self::DateTimeOffset(_)
        )
    }

    /// 值的自然字符串形式（不加引号、不转义）。
    pub(crate) fn plain_string(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::I64(n) => n.to_string(),
            Self::U64(n) => n.to_string(),
            Self::F32(n) => n.to_string(),
            Self::F64(n) => n.to_string(),
            Self::Decimal(d) => d.to_string(),
            Self::String(s) => s.to_string(),
            Self::Bytes(b) => hex_upper(b),
            Self::Date(_) => self.formatted(DATE_FORMAT),
            Self::DateTime(_) | Self::DateTimeOffset(_) => self.formatted(DATETIME_FORMAT),
        }
    }

    fn formatted(&self, fmt: &[FormatItem<'_>]) -> String {
        self.as_datetime()
            .and_then(|dt| dt.format(fmt).ok())
            .unwrap_or_default()
    }
}

pub(crate) fn hex_upper(data: &[u8]) -> String {
    data.iter().fold(String::with_capacity(data.len() * 2), |mut out, b| {
        let _ = write!(out, "{b:02X}");
        out
    })
}

impl From<()> for SqlValue {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i8> for SqlValue {
    fn from(v: i8) -> Self {
        Self::I64(v as i64)
    }
}

impl From<i16> for SqlValue {
    fn from(v: i16) -> Self {
        Self::I64(v as i64)
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        Self::I64(v as i64)
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        Self::I64(v)
    }
}

impl From<u8> for SqlValue {
    fn from(v: u8) -> Self {
        Self::U64(v as u64)
    }
}

impl From<u16> for SqlValue {
    fn from(v: u16) -> Self {
        Self::U64(v as u64)
    }
}

impl From<u32> for SqlValue {
    fn from(v: u32) -> Self {
        Self::U64(v as u64)
    }
}

impl From<u64> for SqlValue {
    fn from(v: u64) -> Self {
        Self::U64(v)
    }
}

impl From<f32> for SqlValue {
    fn from(v: f32) -> Self {
        Self::F32(v)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        Self::F64(v)
    }
}

impl From<Decimal> for SqlValue {
    fn from(v: Decimal) -> Self {
        Self::Decimal(v)
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        Self::String(Cow::Owned(v))
    }
}

impl From<&'static str> for SqlValue {
    fn from(v: &'static str) -> Self {
        Self::String(Cow::Borrowed(v))
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}

impl From<Date> for SqlValue {
    fn from(v: Date) -> Self {
        Self::Date(v)
    }
}

impl From<PrimitiveDateTime> for SqlValue {
    fn from(v: PrimitiveDateTime) -> Self {
        Self::DateTime(v)
    }
}

impl From<OffsetDateTime> for SqlValue {
    fn from(v: OffsetDateTime) -> Self {
        Self::DateTimeOffset(v)
    }
}
