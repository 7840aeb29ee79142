//! ColumnSet：按插入顺序保存、按列名索引的列集合，以及表级约束。

use crate::column::Column;
use crate::constraint::Constraint;
use crate::converter::ValueConverter;
use crate::data_type::DbDataType;
use crate::error::{Result, SqlError};
use crate::query::QueryType;
use crate::value::SqlValue;
use indexmap::IndexMap;

#[derive(Debug, Clone, Default)]
pub struct ColumnSet {
    columns: IndexMap<String, Column>,
    constraints: Vec<Constraint>,
}

impl ColumnSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.columns.values()
    }

    /// 未被排除的列。
    pub fn active(&self) -> impl Iterator<Item = &Column> {
        self.columns.values().filter(|c| !c.is_excluded())
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn add(&mut self, column: Column) -> Result<&mut Column> {
        if self.columns.contains_key(column.name()) {
            return Err(SqlError::DuplicateKey(format!(
                "a column with the name {} already exists",
                column.name()
            )));
        }
        let entry = self.columns.entry(column.name().to_string());
        Ok(entry.or_insert(column))
    }

    /// 便捷方法：按名称与类型建列；不传转换器时使用类型所属方言的默认转换器。
    pub fn add_column(
        &mut self,
        name: impl Into<String>,
        data_type: impl DbDataType + 'static,
        converter: Option<Box<dyn ValueConverter>>,
    ) -> Result<&mut Column> {
        let converter = converter.unwrap_or_else(|| data_type.flavor().value_converter());
        self.add(Column::new(name, data_type).with_boxed_value_converter(converter))
    }

    pub fn get(&self, name: &str) -> Result<&Column> {
        self.columns.get(name).ok_or_else(|| not_found(name))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut Column> {
        self.columns.get_mut(name).ok_or_else(|| not_found(name))
    }

    pub fn set_value(&mut self, name: &str, value: impl Into<SqlValue>) -> Result<()> {
        self.get_mut(name)?.set_value(value)
    }

    /// UPDATE SET 列表：`name = value, ...`（仅有效列）。
    pub fn columns_value(&self) -> Result<String> {
        let parts = self
            .active()
            .map(|c| -> Result<String> {
                Ok(format!("{} = {}", c.render_name(QueryType::Update)?, c.value()?))
            })
            .collect::<Result<Vec<_>>>()?;
        non_empty(parts, "no active columns to assign")
    }

    /// 指定语句类型下渲染的列名列表（仅有效列）。
    pub fn columns_name(&self, query_type: QueryType) -> Result<String> {
        let parts = self
            .active()
            .map(|c| c.render_name(query_type))
            .collect::<Result<Vec<_>>>()?;
        non_empty(parts, "no active columns to list")
    }

    /// 建表列定义（包含被排除的列），约束追加在最后。
    pub fn columns_data_type(&self) -> Result<String> {
        let mut parts = self
            .iter()
            .map(Column::definition)
            .collect::<Result<Vec<_>>>()?;
        if parts.is_empty() {
            return Err(SqlError::empty_result("no columns to define"));
        }
        parts.extend(self.constraints.iter().map(Constraint::render));
        Ok(parts.join(", "))
    }

    /// INSERT 的值列表。
    ///
    /// 与 `columns_name(QueryType::Insert)` 配对使用，因此同样只取有效列。
    pub fn values(&self) -> Result<String> {
        let parts = self
            .active()
            .map(Column::value)
            .collect::<Result<Vec<_>>>()?;
        non_empty(parts, "no active columns to render values")
    }

    /// 移除所有列；约束保留。
    pub fn clear(&mut self) {
        self.columns.clear();
    }

    pub fn add_constraints(&mut self, constraints: impl IntoIterator<Item = Constraint>) {
        self.constraints.extend(constraints);
    }

    pub fn clear_constraints(&mut self) {
        self.constraints.clear();
    }
}

fn not_found(name: &str) -> SqlError {
    SqlError::NotFound(format!("no column with the name {name} exists"))
}

fn non_empty(parts: Vec<String>, msg: &str) -> Result<String> {
    if parts.is_empty() {
        return Err(SqlError::empty_result(msg));
    }
    Ok(parts.join(", "))
}
