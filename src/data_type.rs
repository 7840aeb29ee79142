//! DbDataType：各方言的原生列类型，携带语义类别与可选的长度/精度后缀。
//!
//! 每个方言一张固定的类型表：原生类型 -> (SQL 拼写, 类别)。未单独归类的类型落入 `Other`。

use crate::category::DataTypeCategory;
use crate::flavor::Flavor;
use std::fmt;

/// 方言原生数据类型。构造后不可变。
pub trait DbDataType: dyn_clone::DynClone + fmt::Debug {
    fn flavor(&self) -> Flavor;

    /// 建表语句中使用的类型名（不含长度）。
    fn type_name(&self) -> &str;

    fn category(&self) -> DataTypeCategory;

    fn size(&self) -> Option<&str>;

    /// `TYPE` 或 `TYPE(size)`。
    fn render(&self) -> String {
        match self.size().filter(|s| !s.is_empty()) {
            Some(size) => format!("{}({size})", self.type_name()),
            None => self.type_name().to_string(),
        }
    }
}

dyn_clone::clone_trait_object!(DbDataType);

macro_rules! dialect_data_type {
    (
        $(#[$meta:meta])*
        $name:ident($kind:ident) for $flavor:ident {
            $($variant:ident => $sql:literal, $category:ident;)+
        }
    ) => {
        /// 方言原生类型枚举。
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $kind {
            $($variant,)+
        }

        impl $kind {
            /// SQL 中的类型拼写。
            pub fn type_name(self) -> &'static str {
                match self {
                    $(Self::$variant => $sql,)+
                }
            }

            pub fn category(self) -> DataTypeCategory {
                match self {
                    $(Self::$variant => DataTypeCategory::$category,)+
                }
            }
        }

        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            kind: $kind,
            size: Option<String>,
        }

        impl $name {
            pub fn new(kind: $kind) -> Self {
                Self { kind, size: None }
            }

            /// 带长度/精度后缀，例如 `"50"` 或 `"10,2"`。
            pub fn with_size(kind: $kind, size: impl Into<String>) -> Self {
                Self {
                    kind,
                    size: Some(size.into()),
                }
            }

            pub fn kind(&self) -> $kind {
                self.kind
            }
        }

        impl From<$kind> for $name {
            fn from(kind: $kind) -> Self {
                Self::new(kind)
            }
        }

        impl DbDataType for $name {
            fn flavor(&self) -> Flavor {
                Flavor::$flavor
            }

            fn type_name(&self) -> &str {
                self.kind.type_name()
            }

            fn category(&self) -> DataTypeCategory {
                self.kind.category()
            }

            fn size(&self) -> Option<&str> {
                self.size.as_deref()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.render())
            }
        }
    };
}

dialect_data_type! {
    /// MySQL 列类型。
    MySqlDataType(MySqlType) for MySQL {
        BigInt => "BIGINT", Int;
        Binary => "BINARY", Binary;
        Bit => "BIT", Other;
        Char => "CHAR", String;
        Date => "DATE", Date;
        DateTime => "DATETIME", DateTime;
        Decimal => "DECIMAL", Double;
        Double => "DOUBLE", Double;
        Enum => "ENUM", Other;
        Float => "FLOAT", Double;
        Geometry => "GEOMETRY", Other;
        Int => "INT", Int;
        MediumInt => "MEDIUMINT", Int;
        MediumText => "MEDIUMTEXT", String;
        LongText => "LONGTEXT", String;
        TinyInt => "TINYINT", Int;
        Numeric => "NUMERIC", Double;
        Real => "REAL", Double;
        Set => "SET", Other;
        SmallInt => "SMALLINT", Int;
        Text => "TEXT", String;
        Time => "TIME", DateTime;
        Timestamp => "TIMESTAMP", DateTime;
        TinyText => "TINYTEXT", String;
        VarChar => "VARCHAR", String;
        VarBinary => "VARBINARY", Binary;
        Year => "YEAR", Other;
    }
}

dialect_data_type! {
    /// PostgreSQL 列类型。
    PostgreSqlDataType(PostgreSqlType) for PostgreSQL {
        Int2 => "INT2", Int;
        Int4 => "INT4", Int;
        Int8 => "INT8", Int;
        Numeric => "NUMERIC", Double;
        Float4 => "FLOAT4", Double;
        Float8 => "FLOAT8", Double;
        Money => "MONEY", Double;
        Char => "CHAR", String;
        Varchar => "VARCHAR", String;
        Text => "TEXT", String;
        Bytea => "BYTEA", Binary;
        Timestamp => "TIMESTAMP", DateTime;
        Date => "DATE", Date;
        Time => "TIME", DateTime;
        Interval => "INTERVAL", Other;
        Boolean => "BOOLEAN", Boolean;
        Point => "POINT", Other;
        Line => "LINE", Other;
        Lseg => "LSEG", Other;
        Box => "BOX", Other;
        Path => "PATH", Other;
        Polygon => "POLYGON", Other;
        Circle => "CIRCLE", Other;
        Cidr => "CIDR", Other;
        Inet => "INET", Other;
        MacAddr => "MACADDR", Other;
        Bit => "BIT", Other;
        VarBit => "VARBIT", Other;
        TsVector => "TSVECTOR", Other;
        TsQuery => "TSQUERY", Other;
        Uuid => "UUID", Other;
        Xml => "XML", Other;
        Json => "JSON", Other;
        Jsonb => "JSONB", Other;
        PgLsn => "PG_LSN", Other;
    }
}

dialect_data_type! {
    /// SQLite 列类型。
    ///
    /// `Date`/`DateTime` 以 unix 时间戳存储：建表时渲染为 `INTEGER`，类别仍为 `Date`/`DateTime`。
    SqliteDataType(SqliteType) for SQLite {
        Integer => "INTEGER", Int;
        Real => "REAL", Double;
        Text => "TEXT", String;
        Blob => "BLOB", Binary;
        Date => "INTEGER", Date;
        DateTime => "INTEGER", DateTime;
        Null => "NULL", Other;
    }
}

dialect_data_type! {
    /// SQL Server 列类型。
    SqlServerDataType(SqlServerType) for SQLServer {
        BigInt => "BIGINT", Int;
        Binary => "BINARY", Binary;
        Bit => "BIT", Int;
        Char => "CHAR", String;
        Date => "DATE", Date;
        DateTime => "DATETIME", DateTime;
        DateTime2 => "DATETIME2", DateTime;
        DateTimeOffset => "DATETIMEOFFSET", DateTime;
        Decimal => "DECIMAL", Double;
        Float => "FLOAT", Double;
        Geography => "GEOGRAPHY", Other;
        Geometry => "GEOMETRY", Other;
        HierarchyId => "HIERARCHYID", Other;
        Image => "IMAGE", Binary;
        Int => "INT", Int;
        Money => "MONEY", Double;
        NChar => "NCHAR", String;
        NText => "NTEXT", String;
        Numeric => "NUMERIC", Double;
        NVarChar => "NVARCHAR", String;
        Real => "REAL", Double;
        SmallDateTime => "SMALLDATETIME", DateTime;
        SmallInt => "SMALLINT", Int;
        SmallMoney => "SMALLMONEY", Double;
        SqlVariant => "SQL_VARIANT", Other;
        SysName => "SYSNAME", Other;
        Text => "TEXT", String;
        Time => "TIME", DateTime;
        Timestamp => "TIMESTAMP", DateTime;
        TinyInt => "TINYINT", Int;
        UniqueIdentifier => "UNIQUEIDENTIFIER", Int;
        VarBinary => "VARBINARY", Binary;
        VarChar => "VARCHAR", String;
    }
}

dialect_data_type! {
    /// Oracle 列类型。
    OracleDataType(OracleType) for Oracle {
        Char => "CHAR", String;
        NChar => "NCHAR", String;
        Varchar2 => "VARCHAR2", String;
        NVarchar2 => "NVARCHAR2", String;
        Clob => "CLOB", String;
        NClob => "NCLOB", String;
        Blob => "BLOB", Binary;
        BFile => "BFILE", Binary;
        Number => "NUMBER", Double;
        BinaryFloat => "BINARY_FLOAT", Double;
        BinaryDouble => "BINARY_DOUBLE", Double;
        Date => "DATE", DateTime;
        Timestamp => "TIMESTAMP", DateTime;
        TimestampWithTimeZone => "TIMESTAMP WITH TIME ZONE", DateTime;
        TimestampWithLocalTimeZone => "TIMESTAMP WITH LOCAL TIME ZONE", DateTime;
        IntervalYearToMonth => "INTERVAL YEAR TO MONTH", Other;
        IntervalDayToSecond => "INTERVAL DAY TO SECOND", Other;
        Long => "LONG", String;
        Raw => "RAW", Binary;
        LongRaw => "LONG RAW", Binary;
        RowId => "ROWID", Other;
        URowId => "UROWID", Other;
    }
}
