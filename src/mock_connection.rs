//! 测试用内存连接：记录调用序列，可按 SQL 注入失败，可预置查询结果。

use crate::executor::{Connection, DriverError, ParamDirection, Rows, SqlParam};
use crate::value::SqlValue;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Open,
    Close,
    Begin,
    Commit,
    Rollback,
    Execute(String),
    Query(String),
    Procedure(String),
}

#[derive(Debug, Default)]
pub(crate) struct MockConnection {
    pub connection_string: String,
    pub open: bool,
    pub calls: Vec<Call>,
    pub params: Vec<Vec<SqlParam>>,
    pub fail_open: bool,
    pub fail_close: bool,
    pub fail_on: Option<String>,
    pub results: HashMap<String, Rows>,
    /// 调用过程时按参数名回填的值。
    pub outputs: HashMap<String, SqlValue>,
}

impl MockConnection {
    pub fn new(connection_string: &str) -> Self {
        Self {
            connection_string: connection_string.to_string(),
            ..Self::default()
        }
    }

    pub fn with_result(mut self, sql: &str, rows: Rows) -> Self {
        self.results.insert(sql.to_string(), rows);
        self
    }

    pub fn with_output(mut self, param: &str, value: impl Into<SqlValue>) -> Self {
        self.outputs.insert(param.to_string(), value.into());
        self
    }

    pub fn failing_on(mut self, sql: &str) -> Self {
        self.fail_on = Some(sql.to_string());
        self
    }

    pub fn executed(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Execute(sql) => Some(sql.as_str()),
                _ => None,
            })
            .collect()
    }

    fn check(&self, sql: &str) -> Result<(), DriverError> {
        if self.fail_on.as_deref() == Some(sql) {
            return Err(format!("driver rejected `{sql}`").into());
        }
        Ok(())
    }
}

impl Connection for MockConnection {
    fn connection_string(&self) -> &str {
        &self.connection_string
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn open(&mut self) -> Result<(), DriverError> {
        self.calls.push(Call::Open);
        if self.fail_open {
            return Err("cannot connect".into());
        }
        self.open = true;
        Ok(())
    }

    fn close(&mut self) -> Result<(), DriverError> {
        self.calls.push(Call::Close);
        self.open = false;
        if self.fail_close {
            return Err("cannot close".into());
        }
        Ok(())
    }

    fn begin(&mut self) -> Result<(), DriverError> {
        self.calls.push(Call::Begin);
        Ok(())
    }

    fn commit(&mut self) -> Result<(), DriverError> {
        self.calls.push(Call::Commit);
        Ok(())
    }

    fn rollback(&mut self) -> Result<(), DriverError> {
        self.calls.push(Call::Rollback);
        Ok(())
    }

    fn execute(&mut self, sql: &str, params: &[SqlParam]) -> Result<u64, DriverError> {
        self.calls.push(Call::Execute(sql.to_string()));
        self.params.push(params.to_vec());
        self.check(sql)?;
        Ok(1)
    }

    fn query(&mut self, sql: &str, params: &[SqlParam]) -> Result<Rows, DriverError> {
        self.calls.push(Call::Query(sql.to_string()));
        self.params.push(params.to_vec());
        self.check(sql)?;
        Ok(self.results.get(sql).cloned().unwrap_or_default())
    }

    fn call_procedure(&mut self, name: &str, params: &mut [SqlParam]) -> Result<(), DriverError> {
        self.calls.push(Call::Procedure(name.to_string()));
        self.params.push(params.to_vec());
        self.check(name)?;
        for p in params.iter_mut() {
            if p.direction == ParamDirection::Input {
                continue;
            }
            if let Some(v) = self.outputs.get(&p.name) {
                p.value = v.clone();
            }
        }
        Ok(())
    }
}
