//! Table：表标识、列集合与 JOIN/WHERE/ORDER BY 片段。

use crate::column::Column;
use crate::column_set::ColumnSet;
use crate::error::{Result, SqlError};
use crate::macros::{IntoStrings, collect_into_strings};
use crate::query::QueryType;
use std::hash::{Hash, Hasher};

/// 待渲染的表。先通过 `set_name` / `add_*` 构造，再交给 `QueryGenerator` 只读消费。
///
/// `clone()` 是深拷贝：列与片段列表都不与原表共享。
#[derive(Debug, Clone, Default)]
pub struct Table {
    name: String,
    prefix: Option<String>,
    columns: ColumnSet,
    joins: Vec<String>,
    conditions: Vec<String>,
    order_by: Vec<String>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// 等价于 `Table::new()` 后调用 `set_name(name, None)`。
    pub fn named(name: impl Into<String>) -> Result<Self> {
        let mut t = Self::new();
        t.set_name(name, None)?;
        Ok(t)
    }

    /// 设置表名与可选前缀（SELECT 的 FROM 中用作表别名）。
    pub fn set_name(&mut self, name: impl Into<String>, prefix: Option<&str>) -> Result<&mut Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(SqlError::argument("the table name cannot be empty"));
        }
        self.name = name;
        self.prefix = prefix.map(str::to_string);
        Ok(self)
    }

    /// `with_prefix` 且存在前缀时返回 `name prefix`。
    pub fn name(&self, with_prefix: bool) -> String {
        match self.prefix.as_deref().filter(|p| with_prefix && !p.is_empty()) {
            Some(prefix) => format!("{} {prefix}", self.name),
            None => self.name.clone(),
        }
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    pub fn columns_mut(&mut self) -> &mut ColumnSet {
        &mut self.columns
    }

    pub fn add_column(&mut self, column: Column) -> Result<&mut Column> {
        self.columns.add(column)
    }

    pub fn add_joins<T>(&mut self, joins: T) -> &mut Self
    where
        T: IntoStrings,
    {
        self.joins.extend(collect_into_strings(joins));
        self
    }

    pub fn add_conditions<T>(&mut self, conditions: T) -> &mut Self
    where
        T: IntoStrings,
    {
        self.conditions.extend(collect_into_strings(conditions));
        self
    }

    pub fn add_order_by<T>(&mut self, order_by: T) -> &mut Self
    where
        T: IntoStrings,
    {
        self.order_by.extend(collect_into_strings(order_by));
        self
    }

    pub fn clear_joins(&mut self) -> &mut Self {
        self.joins.clear();
        self
    }

    pub fn clear_conditions(&mut self) -> &mut Self {
        self.conditions.clear();
        self
    }

    pub fn clear_order_by(&mut self) -> &mut Self {
        self.order_by.clear();
        self
    }

    pub fn joins(&self) -> &[String] {
        &self.joins
    }

    pub fn conditions(&self) -> &[String] {
        &self.conditions
    }

    pub fn order_by(&self) -> &[String] {
        &self.order_by
    }

    /// ` join1 join2`；没有 JOIN 时为空串。
    pub fn joins_clause(&self) -> String {
        if self.joins.is_empty() {
            return String::new();
        }
        format!(" {}", self.joins.join(" "))
    }

    /// ` WHERE c1 AND c2`；没有条件时为空串。
    pub fn conditions_clause(&self) -> String {
        if self.conditions.is_empty() {
            return String::new();
        }
        format!(" WHERE {}", self.conditions.join(" AND "))
    }

    /// ` ORDER BY a, b`；没有排序时为空串。
    pub fn order_by_clause(&self) -> String {
        if self.order_by.is_empty() {
            return String::new();
        }
        format!(" ORDER BY {}", self.order_by.join(", "))
    }

    pub fn validate(&self, query_type: QueryType) -> Result<()> {
        if self.name.is_empty() {
            return Err(SqlError::argument("the table name is not set"));
        }
        if matches!(query_type, QueryType::Insert | QueryType::Update) && self.columns.is_empty() {
            return Err(SqlError::argument(format!(
                "{query_type} requires at least one column"
            )));
        }
        Ok(())
    }

    // 结构相等按渲染结果比较：列集合为空时 DDL 渲染失败，记为 None。
    fn fingerprint(&self) -> (&str, Option<&str>, Option<String>, String, String, String) {
        (
            &self.name,
            self.prefix.as_deref(),
            self.columns.columns_data_type().ok(),
            self.joins_clause(),
            self.conditions_clause(),
            self.order_by_clause(),
        )
    }
}

impl PartialEq for Table {
    fn eq(&self, other: &Self) -> bool {
        self.fingerprint() == other.fingerprint()
    }
}

impl Eq for Table {}

impl Hash for Table {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fingerprint().hash(state);
    }
}
