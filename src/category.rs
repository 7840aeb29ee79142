//! 数据类型类别：决定值如何被渲染为 SQL 字面量。

use std::fmt;

/// 与方言无关的语义类别。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataTypeCategory {
    Int,
    Double,
    String,
    Date,
    DateTime,
    Boolean,
    Binary,
    Other,
}

impl DataTypeCategory {
    /// 是否为时间类别（Date/DateTime）。
    pub fn is_temporal(self) -> bool {
        matches!(self, Self::Date | Self::DateTime)
    }
}

impl fmt::Display for DataTypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Int => "Int",
            Self::Double => "Double",
            Self::String => "String",
            Self::Date => "Date",
            Self::DateTime => "DateTime",
            Self::Boolean => "Boolean",
            Self::Binary => "Binary",
            Self::Other => "Other",
        };
        f.write_str(s)
    }
}
