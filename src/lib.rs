//! halo-sql-provider：方言感知的表实体模型与 SQL 语句生成。
//!
//! 用 `Table` + `ColumnSet` 描述一张表（列、类型、约束、JOIN/WHERE/ORDER BY 片段），
//! 再由 `QueryGenerator` 渲染为 CREATE/SELECT/INSERT/UPDATE/DELETE 语句；
//! `SqlExecutor` 与 `DbChecker` 负责把语句交给具体驱动执行。

pub mod category;
pub mod checker;
#[cfg(test)]
mod checker_tests;
pub mod column;
pub mod column_set;
pub mod config;
pub mod constraint;
pub mod converter;
pub mod data_type;
pub mod error;
pub mod executor;
pub mod flavor;
pub mod macros;
pub use crate::macros::*;
#[cfg(test)]
mod mock_connection;
pub mod name_converter;
pub mod query;
pub mod string_builder;
pub mod table;
#[cfg(test)]
mod table_tests;
pub mod value;

pub use crate::category::DataTypeCategory;
pub use crate::checker::{CheckOutcome, DbChecker};
pub use crate::column::{Column, ColumnName, ColumnValue, escape_literal};
pub use crate::column_set::ColumnSet;
pub use crate::config::{ConnectionString, DatabaseConfig, StaticConfig};
pub use crate::constraint::Constraint;
pub use crate::converter::{BasicValueConverter, SqliteValueConverter, ValueConverter};
pub use crate::data_type::{
    DbDataType, MySqlDataType, MySqlType, OracleDataType, OracleType, PostgreSqlDataType,
    PostgreSqlType, SqlServerDataType, SqlServerType, SqliteDataType, SqliteType,
};
pub use crate::error::{Result, SqlError};
pub use crate::executor::{
    Connection, DriverError, ExecutorError, ParamDirection, Rows, SqlExecutor, SqlParam,
};
pub use crate::flavor::Flavor;
pub use crate::name_converter::{
    BasicNameConverter, NameConverter, SqliteDateNameConverter, SqliteDateTimeNameConverter,
    SqliteTimeNameConverter,
};
pub use crate::query::{BasicQueryGenerator, QueryGenerator, QueryType};
pub use crate::table::Table;
pub use crate::value::SqlValue;
