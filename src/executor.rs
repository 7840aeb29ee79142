//! SqlExecutor：同步执行渲染好的语句（打开连接、事务内执行、提交/回滚、关闭连接）。
//!
//! 具体驱动通过 `Connection` trait 接入；本模块只负责事务编排与错误包装，不做重试。

use crate::error::SqlError;
use crate::query::{QueryGenerator, QueryType};
use crate::table::Table;
use crate::value::SqlValue;
use tracing::{debug, warn};

/// 驱动层错误。
pub type DriverError = Box<dyn std::error::Error + Send + Sync>;

/// 参数方向。存储过程的输出参数与函数返回值由驱动回填。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParamDirection {
    #[default]
    Input,
    Output,
    InputOutput,
    ReturnValue,
}

/// 命名参数，只用于执行器/检查器自身的查询；生成器路径始终是字面量 SQL。
#[derive(Debug, Clone, PartialEq)]
pub struct SqlParam {
    pub name: String,
    pub value: SqlValue,
    pub direction: ParamDirection,
}

impl SqlParam {
    pub fn new(name: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            direction: ParamDirection::Input,
        }
    }

    /// 值为空、等待驱动回填的输出参数。
    pub fn output(name: impl Into<String>) -> Self {
        Self::new(name, SqlValue::Null).with_direction(ParamDirection::Output)
    }

    pub fn return_value(name: impl Into<String>) -> Self {
        Self::new(name, SqlValue::Null).with_direction(ParamDirection::ReturnValue)
    }

    pub fn with_direction(mut self, direction: ParamDirection) -> Self {
        self.direction = direction;
        self
    }
}

/// 查询结果集。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rows {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<SqlValue>>,
}

impl Rows {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 第一行第一列。
    pub fn scalar(&self) -> Option<&SqlValue> {
        self.rows.first().and_then(|r| r.first())
    }
}

/// 同步数据库连接。一个连接同一时间只服务一个语句序列。
pub trait Connection {
    fn connection_string(&self) -> &str;

    fn is_open(&self) -> bool;

    fn open(&mut self) -> Result<(), DriverError>;

    fn close(&mut self) -> Result<(), DriverError>;

    fn begin(&mut self) -> Result<(), DriverError>;

    fn commit(&mut self) -> Result<(), DriverError>;

    fn rollback(&mut self) -> Result<(), DriverError>;

    /// 执行不返回结果集的语句，返回受影响行数。
    fn execute(&mut self, sql: &str, params: &[SqlParam]) -> Result<u64, DriverError>;

    fn query(&mut self, sql: &str, params: &[SqlParam]) -> Result<Rows, DriverError>;

    /// 调用存储过程/函数；驱动把 `Output`/`InputOutput`/`ReturnValue` 参数的结果写回 `params`。
    fn call_procedure(&mut self, name: &str, params: &mut [SqlParam]) -> Result<(), DriverError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExecutorError {
    #[error("exception while opening connection: {0}")]
    Open(#[source] DriverError),
    #[error("exception while closing connection: {0}")]
    Close(#[source] DriverError),
    #[error("transaction failure: {0}")]
    Transaction(#[source] DriverError),
    #[error("exception while executing query `{sql}`: {source}")]
    Execute {
        sql: String,
        #[source]
        source: DriverError,
    },
    /// 数据库返回了无法解释的结果。
    #[error("unexpected result for `{sql}`: {message}")]
    InvalidResult { sql: String, message: String },
    #[error("database does not exist: {0}")]
    DatabaseMissing(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// 语句在到达数据库之前就渲染失败。
    #[error(transparent)]
    Render(#[from] SqlError),
}

pub struct SqlExecutor<C: Connection> {
    connection: C,
}

impl<C: Connection> SqlExecutor<C> {
    pub fn new(connection: C) -> Self {
        Self { connection }
    }

    pub fn connection(&self) -> &C {
        &self.connection
    }

    pub fn connection_mut(&mut self) -> &mut C {
        &mut self.connection
    }

    pub fn into_inner(self) -> C {
        self.connection
    }

    /// 在事务中执行单条语句。空语句直接返回。
    pub fn query(&mut self, sql: &str, params: &[SqlParam]) -> Result<(), ExecutorError> {
        if sql.is_empty() {
            return Ok(());
        }
        self.run_in_transaction(&[sql.to_string()], params)
    }

    /// 在同一事务中依次执行多条语句；任一失败则整体回滚。
    pub fn query_batch<I, S>(&mut self, statements: I, params: &[SqlParam]) -> Result<(), ExecutorError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let statements: Vec<String> = statements
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if statements.is_empty() {
            return Ok(());
        }
        self.run_in_transaction(&statements, params)
    }

    pub fn select(&mut self, sql: &str, params: &[SqlParam]) -> Result<Rows, ExecutorError> {
        self.with_connection(|conn| {
            debug!(sql = %sql, "executing select");
            conn.query(sql, params).map_err(|source| ExecutorError::Execute {
                sql: sql.to_string(),
                source,
            })
        })
    }

    /// 第一行第一列；结果为空时返回 `SqlValue::Null`。
    pub fn scalar(&mut self, sql: &str, params: &[SqlParam]) -> Result<SqlValue, ExecutorError> {
        let rows = self.select(sql, params)?;
        Ok(rows.scalar().cloned().unwrap_or(SqlValue::Null))
    }

    /// 渲染并执行表语句：SELECT 返回结果集，其余语句在事务中执行并返回空结果集。
    pub fn run(
        &mut self,
        generator: &dyn QueryGenerator,
        query_type: QueryType,
        table: &Table,
    ) -> Result<Rows, ExecutorError> {
        let sql = generator.generate(query_type, table)?;
        match query_type {
            QueryType::Select => self.select(&sql, &[]),
            _ => self.query(&sql, &[]).map(|()| Rows::default()),
        }
    }

    /// 调用存储过程，返回驱动回填后的 `Output` 参数。
    pub fn store_procedure(
        &mut self,
        name: &str,
        params: &[SqlParam],
    ) -> Result<Vec<SqlParam>, ExecutorError> {
        let params = self.call(name, params)?;
        Ok(params
            .into_iter()
            .filter(|p| p.direction == ParamDirection::Output)
            .collect())
    }

    /// 调用存储函数，返回 `ReturnValue` 参数的值；没有该参数时为 `SqlValue::Null`。
    pub fn store_function(&mut self, name: &str, params: &[SqlParam]) -> Result<SqlValue, ExecutorError> {
        let params = self.call(name, params)?;
        Ok(params
            .into_iter()
            .find(|p| p.direction == ParamDirection::ReturnValue)
            .map(|p| p.value)
            .unwrap_or(SqlValue::Null))
    }

    /// 测试连接是否可以打开。
    pub fn ping(&mut self) -> Result<(), ExecutorError> {
        self.with_connection(|_| Ok(()))
    }

    fn call(&mut self, name: &str, params: &[SqlParam]) -> Result<Vec<SqlParam>, ExecutorError> {
        if name.is_empty() {
            return Err(SqlError::argument("procedure name cannot be empty").into());
        }
        let mut params = params.to_vec();
        self.with_connection(|conn| {
            debug!(procedure = %name, "calling stored procedure");
            conn.call_procedure(name, &mut params)
                .map_err(|source| ExecutorError::Execute {
                    sql: name.to_string(),
                    source,
                })
        })?;
        Ok(params)
    }

    fn run_in_transaction(&mut self, statements: &[String], params: &[SqlParam]) -> Result<(), ExecutorError> {
        self.with_connection(|conn| {
            conn.begin().map_err(ExecutorError::Transaction)?;
            for sql in statements {
                debug!(sql = %sql, "executing statement");
                if let Err(source) = conn.execute(sql, params) {
                    match conn.rollback() {
                        Ok(()) => warn!(sql = %sql, error = %source, "transaction rolled back"),
                        Err(e) => warn!(sql = %sql, error = %e, "rollback failed"),
                    }
                    return Err(ExecutorError::Execute {
                        sql: sql.clone(),
                        source,
                    });
                }
            }
            conn.commit().map_err(ExecutorError::Transaction)
        })
    }

    fn with_connection<T>(
        &mut self,
        f: impl FnOnce(&mut C) -> Result<T, ExecutorError>,
    ) -> Result<T, ExecutorError> {
        self.connection.open().map_err(ExecutorError::Open)?;
        let result = f(&mut self.connection);
        let closed = self.connection.close().map_err(ExecutorError::Close);
        match (result, closed) {
            (Ok(v), Ok(())) => Ok(v),
            (Ok(_), Err(e)) => Err(e),
            (Err(e), Ok(())) => Err(e),
            (Err(e), Err(close_err)) => {
                warn!(error = %close_err, "failed to close connection after error");
                Err(e)
            }
        }
    }
}
