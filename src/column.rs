//! Column：列名（含别名与名称转换器）+ 列值（含数据类型与值转换器）。

use crate::category::DataTypeCategory;
use crate::converter::{BasicValueConverter, ValueConverter, parse_bool};
use crate::data_type::DbDataType;
use crate::error::{Result, SqlError};
use crate::name_converter::{BasicNameConverter, NameConverter};
use crate::query::QueryType;
use crate::value::SqlValue;
use rust_decimal::Decimal;
use std::borrow::Cow;
use std::str::FromStr;

/// 列名：物理名、可选别名与 SELECT 时使用的名称转换器。
#[derive(Debug, Clone)]
pub struct ColumnName {
    name: String,
    alias: Option<String>,
    converter: Box<dyn NameConverter>,
}

impl ColumnName {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            converter: Box::new(BasicNameConverter),
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_converter(mut self, converter: impl NameConverter + 'static) -> Self {
        self.converter = Box::new(converter);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// SELECT 使用转换器渲染，其它语句一律返回物理名。
    pub fn render(&self, query_type: QueryType) -> Result<String> {
        match query_type {
            QueryType::Select => self.converter.convert_name(&self.name, self.alias()),
            _ => Ok(self.name.clone()),
        }
    }
}

/// 列值：赋值时按类别清洗，取值时交给值转换器渲染。
#[derive(Debug, Clone)]
pub struct ColumnValue {
    value: SqlValue,
    data_type: Option<Box<dyn DbDataType>>,
    converter: Box<dyn ValueConverter>,
}

impl Default for ColumnValue {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnValue {
    /// 未绑定数据类型的列值；赋值/取值前必须先 `set_data_type`。
    pub fn new() -> Self {
        Self {
            value: SqlValue::Null,
            data_type: None,
            converter: Box::new(BasicValueConverter),
        }
    }

    pub fn with_data_type(data_type: impl DbDataType + 'static) -> Self {
        let mut v = Self::new();
        v.set_data_type(data_type);
        v
    }

    pub fn set_data_type(&mut self, data_type: impl DbDataType + 'static) -> &mut Self {
        self.data_type = Some(Box::new(data_type));
        self
    }

    pub fn set_converter(&mut self, converter: Box<dyn ValueConverter>) -> &mut Self {
        self.converter = converter;
        self
    }

    pub fn data_type(&self) -> Option<&dyn DbDataType> {
        self.data_type.as_deref()
    }

    /// 清洗后保存的原始值。
    pub fn raw(&self) -> &SqlValue {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<SqlValue>) -> Result<()> {
        let category = self.category()?;
        self.value = sanitize(value.into(), category)?;
        Ok(())
    }

    pub fn value(&self) -> Result<String> {
        let category = self.category()?;
        self.converter.convert(&self.value, category)
    }

    fn category(&self) -> Result<DataTypeCategory> {
        self.data_type
            .as_ref()
            .map(|t| t.category())
            .ok_or_else(|| SqlError::InvalidState("column data type is not set".to_string()))
    }
}

/// 单引号与反斜杠各加倍。只在赋值时执行一次。
pub fn escape_literal(s: &str) -> String {
    s.replace('\'', "''").replace('\\', "\\\\")
}

fn sanitize(value: SqlValue, category: DataTypeCategory) -> Result<SqlValue> {
    if value.is_null() {
        return Ok(value);
    }

    let sanitized = match (&value, category) {
        (SqlValue::I64(_) | SqlValue::U64(_), DataTypeCategory::Int) => Some(value.clone()),
        (other, DataTypeCategory::Int) => parse_int(&other.plain_string()),
        (SqlValue::F32(_) | SqlValue::F64(_) | SqlValue::Decimal(_), DataTypeCategory::Double) => Some(value.clone()),
        (other, DataTypeCategory::Double) => {
            let normalized = other.plain_string().trim().replace(',', ".");
            Decimal::from_str(&normalized).ok().map(SqlValue::Decimal)
        }
        (other, DataTypeCategory::Date | DataTypeCategory::DateTime) => {
            other.is_temporal().then(|| value.clone())
        }
        (SqlValue::Bool(_), DataTypeCategory::Boolean) => Some(value.clone()),
        (other, DataTypeCategory::Boolean) => parse_bool(&other.plain_string()).map(SqlValue::Bool),
        (SqlValue::Bytes(_), DataTypeCategory::Binary) => Some(value.clone()),
        (_, DataTypeCategory::Binary) => None,
        (other, DataTypeCategory::String | DataTypeCategory::Other) => Some(SqlValue::String(
            Cow::Owned(escape_literal(&other.plain_string())),
        )),
    };

    sanitized.ok_or_else(|| {
        SqlError::Format(format!(
            "value does not match the {category} data type: {}",
            value.plain_string()
        ))
    })
}

fn parse_int(s: &str) -> Option<SqlValue> {
    let s = s.trim();
    if let Ok(n) = s.parse::<i64>() {
        return Some(SqlValue::I64(n));
    }
    s.parse::<u64>().ok().map(SqlValue::U64)
}

/// 表中的一列。名称在所属 `ColumnSet` 内唯一。
#[derive(Debug, Clone)]
pub struct Column {
    name: ColumnName,
    value: ColumnValue,
    excluded: bool,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: impl DbDataType + 'static) -> Self {
        Self {
            name: ColumnName::new(name),
            value: ColumnValue::with_data_type(data_type),
            excluded: false,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.name = self.name.with_alias(alias);
        self
    }

    pub fn with_name_converter(mut self, converter: impl NameConverter + 'static) -> Self {
        self.name = self.name.with_converter(converter);
        self
    }

    pub fn with_value_converter(mut self, converter: impl ValueConverter + 'static) -> Self {
        self.value.set_converter(Box::new(converter));
        self
    }

    pub(crate) fn with_boxed_value_converter(mut self, converter: Box<dyn ValueConverter>) -> Self {
        self.value.set_converter(converter);
        self
    }

    /// 被排除的列不参与 SELECT/INSERT 列表与 UPDATE SET，但仍出现在建表语句中。
    pub fn is_excluded(&self) -> bool {
        self.excluded
    }

    pub fn set_excluded(&mut self, excluded: bool) -> &mut Self {
        self.excluded = excluded;
        self
    }

    /// 物理列名（集合中的键）。
    pub fn name(&self) -> &str {
        self.name.name()
    }

    pub fn render_name(&self, query_type: QueryType) -> Result<String> {
        self.name.render(query_type)
    }

    pub fn data_type(&self) -> Option<&dyn DbDataType> {
        self.value.data_type()
    }

    pub fn raw_value(&self) -> &SqlValue {
        self.value.raw()
    }

    pub fn value(&self) -> Result<String> {
        self.value.value()
    }

    pub fn set_value(&mut self, value: impl Into<SqlValue>) -> Result<()> {
        self.value.set_value(value)
    }

    /// 建表语句中的列定义：`name TYPE(size)`。
    pub fn definition(&self) -> Result<String> {
        let data_type = self.data_type().ok_or_else(|| {
            SqlError::InvalidState(format!("column {} has no data type", self.name()))
        })?;
        Ok(format!("{} {}", self.name(), data_type.render()))
    }
}
