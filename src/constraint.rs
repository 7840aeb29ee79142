//! 表级约束：PRIMARY KEY / FOREIGN KEY / UNIQUE。

use crate::string_builder::StringBuilder;
use std::fmt;

/// 建表语句中追加在列定义之后的约束子句。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Constraint {
    PrimaryKey {
        name: Option<String>,
        columns: Vec<String>,
    },
    ForeignKey {
        name: Option<String>,
        column: String,
        reference_table: String,
        reference_column: String,
    },
    Unique {
        name: Option<String>,
        columns: Vec<String>,
    },
}

impl Constraint {
    pub fn primary_key(columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::PrimaryKey {
            name: None,
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn foreign_key(
        column: impl Into<String>,
        reference_table: impl Into<String>,
        reference_column: impl Into<String>,
    ) -> Self {
        Self::ForeignKey {
            name: None,
            column: column.into(),
            reference_table: reference_table.into(),
            reference_column: reference_column.into(),
        }
    }

    pub fn unique(columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::Unique {
            name: None,
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// 指定约束名，渲染为 `CONSTRAINT <name> ...`。
    pub fn with_name(mut self, constraint_name: impl Into<String>) -> Self {
        let slot = match &mut self {
            Self::PrimaryKey { name, .. }
            | Self::ForeignKey { name, .. }
            | Self::Unique { name, .. } => name,
        };
        *slot = Some(constraint_name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::PrimaryKey { name, .. }
            | Self::ForeignKey { name, .. }
            | Self::Unique { name, .. } => name.as_deref(),
        }
    }

    pub fn render(&self) -> String {
        let mut buf = StringBuilder::new();
        if let Some(name) = self.name().filter(|n| !n.is_empty()) {
            buf.write_leading("CONSTRAINT");
            buf.write_leading(name);
        }

        match self {
            Self::PrimaryKey { columns, .. } => {
                buf.write_leading("PRIMARY KEY (");
                buf.write_strings(columns, ", ");
                buf.write_char(')');
            }
            Self::ForeignKey {
                column,
                reference_table,
                reference_column,
                ..
            } => {
                buf.write_leading("FOREIGN KEY (");
                buf.write_str(column);
                buf.write_str(") REFERENCES ");
                buf.write_str(reference_table);
                buf.write_char('(');
                buf.write_str(reference_column);
                buf.write_char(')');
            }
            Self::Unique { columns, .. } => {
                buf.write_leading("UNIQUE (");
                buf.write_strings(columns, ", ");
                buf.write_char(')');
            }
        }

        buf.into_string()
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
