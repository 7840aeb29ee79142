//! DbChecker：确认数据库可用、目标表存在，缺失时按 `Table` 定义建表。

use crate::config::ConnectionString;
use crate::executor::{Connection, ExecutorError, SqlExecutor, SqlParam};
use crate::flavor::Flavor;
use crate::query::{BasicQueryGenerator, QueryGenerator};
use crate::table::Table;
use crate::value::SqlValue;
use rust_decimal::prelude::ToPrimitive;
use std::fs::OpenOptions;
use std::path::Path;
use tracing::info;

const TABLE_NAME_PARAM: &str = "tableName";

impl Flavor {
    /// 统计同名表数量的查询；参数名为 `tableName`。
    pub fn table_exists_sql(self) -> &'static str {
        match self {
            Self::MySQL => {
                "SELECT COUNT(*) FROM INFORMATION_SCHEMA.TABLES WHERE TABLE_NAME = @tableName"
            }
            Self::PostgreSQL => {
                "SELECT COUNT(*) FROM information_schema.tables WHERE table_name = @tableName"
            }
            Self::SQLite => "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=@tableName",
            Self::SQLServer => "SELECT COUNT(*) FROM sys.tables WHERE name = @tableName",
            Self::Oracle => "SELECT COUNT(*) FROM all_tables WHERE table_name = :tableName",
        }
    }

    /// Oracle 数据字典中的表名默认大写。
    fn catalog_table_name(self, name: &str) -> String {
        match self {
            Self::Oracle => name.to_uppercase(),
            _ => name.to_string(),
        }
    }
}

/// 一次检查的结果。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckOutcome {
    pub database_created: bool,
    pub table_created: bool,
}

pub struct DbChecker<C: Connection> {
    flavor: Flavor,
    executor: SqlExecutor<C>,
    source: Table,
}

impl<C: Connection> DbChecker<C> {
    pub fn new(flavor: Flavor, connection: C, source: Table) -> Self {
        Self {
            flavor,
            executor: SqlExecutor::new(connection),
            source,
        }
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn source(&self) -> &Table {
        &self.source
    }

    pub fn executor_mut(&mut self) -> &mut SqlExecutor<C> {
        &mut self.executor
    }

    pub fn into_executor(self) -> SqlExecutor<C> {
        self.executor
    }

    /// 数据库缺失时尝试创建（仅 SQLite 支持），表缺失时执行 CREATE TABLE。
    pub fn check_database(&mut self) -> Result<CheckOutcome, ExecutorError> {
        let mut outcome = CheckOutcome::default();
        if !self.database_exists()? {
            self.create_database()?;
            outcome.database_created = true;
        }

        if !self.table_exists()? {
            let sql = BasicQueryGenerator.create(&self.source)?;
            self.executor.query(&sql, &[])?;
            info!(
                flavor = %self.flavor,
                table = %self.source.name(false),
                "created missing table"
            );
            outcome.table_created = true;
        }
        Ok(outcome)
    }

    /// SQLite 只看数据文件是否存在（打开失败不等于文件缺失）；其它方言以能否打开连接为准。
    pub fn database_exists(&mut self) -> Result<bool, ExecutorError> {
        if self.flavor == Flavor::SQLite {
            return Ok(Path::new(&self.data_source()?).exists());
        }
        match self.executor.ping() {
            Ok(()) => Ok(true),
            Err(ExecutorError::Open(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    pub fn table_exists(&mut self) -> Result<bool, ExecutorError> {
        let name = self.flavor.catalog_table_name(&self.source.name(false));
        let param = SqlParam::new(TABLE_NAME_PARAM, name);
        let count = self
            .executor
            .scalar(self.flavor.table_exists_sql(), std::slice::from_ref(&param))?;
        Ok(as_count(self.flavor.table_exists_sql(), &count)? > 0)
    }

    fn create_database(&mut self) -> Result<(), ExecutorError> {
        match self.flavor {
            Flavor::SQLite => {
                let path = self.data_source()?;
                // 已存在的文件不能被截断。
                OpenOptions::new().write(true).create_new(true).open(&path)?;
                info!(path = %path, "created sqlite database file");
                Ok(())
            }
            _ => Err(ExecutorError::DatabaseMissing(
                self.executor.connection().connection_string().to_string(),
            )),
        }
    }

    fn data_source(&self) -> Result<String, ExecutorError> {
        let cs = ConnectionString::parse(self.executor.connection().connection_string());
        Ok(cs.data_source()?.to_string())
    }
}

/// 无行视为 0；其余无法解释为非负整数的结果报错。
fn as_count(sql: &str, v: &SqlValue) -> Result<i64, ExecutorError> {
    let count = match v {
        SqlValue::Null => Some(0),
        SqlValue::I64(n) => Some(*n),
        SqlValue::U64(n) => i64::try_from(*n).ok(),
        SqlValue::F32(n) => f64::from(*n).to_i64().filter(|i| *i as f64 == f64::from(*n)),
        SqlValue::F64(n) => n.to_i64().filter(|i| *i as f64 == *n),
        SqlValue::Decimal(d) => d.fract().is_zero().then(|| d.to_i64()).flatten(),
        SqlValue::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    count.filter(|n| *n >= 0).ok_or_else(|| ExecutorError::InvalidResult {
        sql: sql.to_string(),
        message: format!("expected a row count, got {v:?}"),
    })
}
