#[cfg(test)]
mod tests {
    use crate::checker::{CheckOutcome, DbChecker};
    use crate::column::Column;
    use crate::data_type::{
        MySqlDataType, MySqlType, OracleDataType, OracleType, SqliteDataType, SqliteType,
    };
    use crate::error::SqlError;
    use crate::executor::{ExecutorError, Rows, SqlParam};
    use crate::flavor::Flavor;
    use crate::mock_connection::MockConnection;
    use crate::table::Table;
    use crate::value::SqlValue;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn table_with(column: Column) -> Table {
        let mut t = Table::named("Users").unwrap();
        t.add_column(column).unwrap();
        t
    }

    fn count_rows(n: i64) -> Rows {
        Rows {
            columns: vec!["COUNT(*)".to_string()],
            rows: vec![vec![SqlValue::I64(n)]],
        }
    }

    fn temp_db(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "halo-provider-{}-{name}.db",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        path
    }

    #[test]
    fn table_exists_sql_per_flavor() {
        assert_eq!(
            Flavor::SQLite.table_exists_sql(),
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=@tableName"
        );
        assert_eq!(
            Flavor::SQLServer.table_exists_sql(),
            "SELECT COUNT(*) FROM sys.tables WHERE name = @tableName"
        );
        assert!(Flavor::Oracle.table_exists_sql().ends_with(":tableName"));
    }

    #[test]
    fn existing_table_is_left_alone() {
        let conn = MockConnection::new("Server=localhost;Database=app")
            .with_result(Flavor::MySQL.table_exists_sql(), count_rows(1));
        let table = table_with(Column::new("Id", MySqlDataType::new(MySqlType::Int)));
        let mut checker = DbChecker::new(Flavor::MySQL, conn, table);

        assert_eq!(checker.check_database().unwrap(), CheckOutcome::default());
        let conn = checker.into_executor().into_inner();
        assert!(conn.executed().is_empty());
        assert!(
            conn.params
                .iter()
                .any(|p| p == &vec![SqlParam::new("tableName", "Users")])
        );
    }

    #[test]
    fn missing_table_is_created() {
        let conn = MockConnection::new("Server=localhost;Database=app")
            .with_result(Flavor::MySQL.table_exists_sql(), count_rows(0));
        let table = table_with(Column::new("Id", MySqlDataType::new(MySqlType::Int)));
        let mut checker = DbChecker::new(Flavor::MySQL, conn, table);

        let outcome = checker.check_database().unwrap();
        assert!(outcome.table_created);
        assert!(!outcome.database_created);
        assert_eq!(
            checker.executor_mut().connection().executed(),
            ["CREATE TABLE Users (Id INT);"]
        );
    }

    #[test]
    fn oracle_looks_up_upper_case_name() {
        let conn = MockConnection::new("Data Source=orcl")
            .with_result(Flavor::Oracle.table_exists_sql(), count_rows(1));
        let table = table_with(Column::new("Id", OracleDataType::new(OracleType::Number)));
        let mut checker = DbChecker::new(Flavor::Oracle, conn, table);

        assert!(checker.table_exists().unwrap());
        assert_eq!(
            checker.executor_mut().connection().params[0],
            vec![SqlParam::new("tableName", "USERS")]
        );
    }

    #[test]
    fn unreachable_server_database_is_missing() {
        let mut conn = MockConnection::new("Server=down");
        conn.fail_open = true;
        let table = table_with(Column::new("Id", MySqlDataType::new(MySqlType::Int)));
        let mut checker = DbChecker::new(Flavor::MySQL, conn, table);

        match checker.check_database() {
            Err(ExecutorError::DatabaseMissing(cs)) => assert_eq!(cs, "Server=down"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn sqlite_creates_database_file_and_table() {
        let path = temp_db("create");
        let conn = MockConnection::new(&format!("Data Source={};Version=3", path.display()));
        let table = table_with(Column::new("Born", SqliteDataType::new(SqliteType::Date)));
        let mut checker = DbChecker::new(Flavor::SQLite, conn, table);

        let outcome = checker.check_database().unwrap();
        assert_eq!(
            outcome,
            CheckOutcome {
                database_created: true,
                table_created: true,
            }
        );
        assert!(path.exists());
        assert_eq!(
            checker.executor_mut().connection().executed(),
            ["CREATE TABLE Users (Born INTEGER);"]
        );

        assert!(checker.database_exists().unwrap());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn sqlite_without_data_source_is_rejected() {
        let conn = MockConnection::new("Version=3");
        let table = table_with(Column::new("Id", SqliteDataType::new(SqliteType::Integer)));
        let mut checker = DbChecker::new(Flavor::SQLite, conn, table);

        assert!(matches!(
            checker.check_database(),
            Err(ExecutorError::Render(SqlError::Argument(_)))
        ));
    }

    #[test]
    fn lookup_failure_propagates() {
        let conn = MockConnection::new("Server=db").failing_on(Flavor::SQLServer.table_exists_sql());
        let table = table_with(Column::new("Id", MySqlDataType::new(MySqlType::Int)));
        let mut checker = DbChecker::new(Flavor::SQLServer, conn, table);

        assert!(matches!(
            checker.check_database(),
            Err(ExecutorError::Execute { .. })
        ));
        assert_eq!(checker.flavor(), Flavor::SQLServer);
        assert_eq!(checker.source().name(false), "Users");
    }

    #[test]
    fn sqlite_open_failure_keeps_existing_file() {
        let path = temp_db("locked");
        let contents = b"SQLite format 3\0existing rows";
        std::fs::write(&path, contents).unwrap();

        let mut conn = MockConnection::new(&format!("Data Source={}", path.display()));
        conn.fail_open = true;
        let table = table_with(Column::new("Id", SqliteDataType::new(SqliteType::Integer)));
        let mut checker = DbChecker::new(Flavor::SQLite, conn, table);

        assert!(checker.database_exists().unwrap());
        assert!(matches!(checker.check_database(), Err(ExecutorError::Open(_))));
        assert_eq!(std::fs::read(&path).unwrap(), contents.to_vec());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn unreadable_count_does_not_create_table() {
        for bad in [
            SqlValue::from("abc"),
            SqlValue::Bool(true),
            SqlValue::F64(1.5),
            SqlValue::I64(-1),
        ] {
            let rows = Rows {
                columns: vec!["COUNT(*)".to_string()],
                rows: vec![vec![bad.clone()]],
            };
            let conn = MockConnection::new("Server=db")
                .with_result(Flavor::PostgreSQL.table_exists_sql(), rows);
            let table = table_with(Column::new("Id", MySqlDataType::new(MySqlType::Int)));
            let mut checker = DbChecker::new(Flavor::PostgreSQL, conn, table);

            assert!(
                matches!(
                    checker.check_database(),
                    Err(ExecutorError::InvalidResult { .. })
                ),
                "{bad:?}"
            );
            assert!(checker.executor_mut().connection().executed().is_empty());
        }
    }

    #[test]
    fn numeric_counts_in_other_shapes_are_accepted() {
        for ok in [SqlValue::from("2"), SqlValue::U64(1), SqlValue::F64(3.0)] {
            let rows = Rows {
                columns: vec!["COUNT(*)".to_string()],
                rows: vec![vec![ok]],
            };
            let conn = MockConnection::new("Server=db")
                .with_result(Flavor::SQLServer.table_exists_sql(), rows);
            let table = table_with(Column::new("Id", MySqlDataType::new(MySqlType::Int)));
            let mut checker = DbChecker::new(Flavor::SQLServer, conn, table);
            assert!(checker.table_exists().unwrap());
        }
    }
}
