//! 错误类型：实体建模与语句渲染阶段的所有失败都归入 `SqlError`。

/// 渲染/建模错误。所有错误都是同步、本地的输入或编程错误，不做重试。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SqlError {
    /// 缺少前置绑定（例如列未绑定数据类型）。
    #[error("invalid state: {0}")]
    InvalidState(String),
    /// 必填参数为空（表名、WHERE 条件等）。
    #[error("invalid argument: {0}")]
    Argument(String),
    #[error("duplicate column: {0}")]
    DuplicateKey(String),
    #[error("column not found: {0}")]
    NotFound(String),
    /// 没有任何（有效）列可供渲染。
    #[error("empty result: {0}")]
    EmptyResult(String),
    /// 值无法转换为列声明的类别。
    #[error("format error: {0}")]
    Format(String),
    /// 值以类别无法渲染的形态到达转换器。
    #[error("type mismatch: {0}")]
    TypeMismatch(String),
}

impl SqlError {
    pub(crate) fn argument(msg: impl Into<String>) -> Self {
        Self::Argument(msg.into())
    }

    pub(crate) fn empty_result(msg: impl Into<String>) -> Self {
        Self::EmptyResult(msg.into())
    }

    pub(crate) fn type_mismatch(msg: impl Into<String>) -> Self {
        Self::TypeMismatch(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, SqlError>;
