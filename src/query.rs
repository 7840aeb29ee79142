//! QueryGenerator：把校验过的 `Table` 渲染为 CREATE/SELECT/INSERT/UPDATE/DELETE 语句。
//!
//! 生成的是字面量 SQL（值直接内联），不产生绑定参数。

use crate::error::{Result, SqlError};
use crate::string_builder::StringBuilder;
use crate::table::Table;
use std::fmt;

/// 语句类型；决定列名的渲染方式与表的校验规则。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryType {
    Create,
    Select,
    Insert,
    Update,
    Delete,
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Create => "CREATE",
            Self::Select => "SELECT",
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        };
        f.write_str(s)
    }
}

/// 语句生成器。每个方法都会先按语句类型校验表。
pub trait QueryGenerator {
    fn create(&self, table: &Table) -> Result<String> {
        table.validate(QueryType::Create)?;
        let mut buf = StringBuilder::new();
        buf.write_leading("CREATE TABLE");
        buf.write_leading(&table.name(false));
        buf.write_leading("(");
        buf.write_str(&table.columns().columns_data_type()?);
        buf.write_str(");");
        Ok(finish(QueryType::Create, buf))
    }

    fn select(&self, table: &Table) -> Result<String> {
        table.validate(QueryType::Select)?;
        let mut buf = StringBuilder::new();
        buf.write_leading("SELECT");
        buf.write_leading(&table.columns().columns_name(QueryType::Select)?);
        buf.write_leading("FROM");
        buf.write_leading(&table.name(true));
        buf.write_str(&table.joins_clause());
        buf.write_str(&table.conditions_clause());
        buf.write_str(&table.order_by_clause());
        buf.write_char(';');
        Ok(finish(QueryType::Select, buf))
    }

    fn insert(&self, table: &Table) -> Result<String> {
        table.validate(QueryType::Insert)?;
        let mut buf = StringBuilder::new();
        buf.write_leading("INSERT INTO");
        buf.write_leading(&table.name(false));
        buf.write_leading("(");
        buf.write_str(&table.columns().columns_name(QueryType::Insert)?);
        buf.write_str(") VALUES (");
        buf.write_str(&table.columns().values()?);
        buf.write_str(");");
        Ok(finish(QueryType::Insert, buf))
    }

    /// 没有 WHERE 条件时拒绝生成，避免整表更新。
    fn update(&self, table: &Table) -> Result<String> {
        table.validate(QueryType::Update)?;
        require_conditions(table, QueryType::Update)?;
        let mut buf = StringBuilder::new();
        buf.write_leading("UPDATE");
        buf.write_leading(&table.name(false));
        buf.write_leading("SET");
        buf.write_leading(&table.columns().columns_value()?);
        buf.write_str(&table.conditions_clause());
        buf.write_char(';');
        Ok(finish(QueryType::Update, buf))
    }

    /// 没有 WHERE 条件时拒绝生成，避免整表删除。
    fn delete(&self, table: &Table) -> Result<String> {
        table.validate(QueryType::Delete)?;
        require_conditions(table, QueryType::Delete)?;
        let mut buf = StringBuilder::new();
        buf.write_leading("DELETE FROM");
        buf.write_leading(&table.name(false));
        buf.write_str(&table.conditions_clause());
        buf.write_char(';');
        Ok(finish(QueryType::Delete, buf))
    }

    fn generate(&self, query_type: QueryType, table: &Table) -> Result<String> {
        match query_type {
            QueryType::Create => self.create(table),
            QueryType::Select => self.select(table),
            QueryType::Insert => self.insert(table),
            QueryType::Update => self.update(table),
            QueryType::Delete => self.delete(table),
        }
    }
}

/// 各方言共用的默认生成器。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BasicQueryGenerator;

impl QueryGenerator for BasicQueryGenerator {}

pub fn create(table: &Table) -> Result<String> {
    BasicQueryGenerator.create(table)
}

pub fn select(table: &Table) -> Result<String> {
    BasicQueryGenerator.select(table)
}

pub fn insert(table: &Table) -> Result<String> {
    BasicQueryGenerator.insert(table)
}

pub fn update(table: &Table) -> Result<String> {
    BasicQueryGenerator.update(table)
}

pub fn delete(table: &Table) -> Result<String> {
    BasicQueryGenerator.delete(table)
}

fn require_conditions(table: &Table, query_type: QueryType) -> Result<()> {
    if table.conditions().is_empty() {
        return Err(SqlError::argument(format!(
            "{query_type} requires a condition"
        )));
    }
    Ok(())
}

fn finish(query_type: QueryType, buf: StringBuilder) -> String {
    let sql = buf.into_string();
    tracing::trace!(%query_type, sql = %sql, "rendered statement");
    sql
}
