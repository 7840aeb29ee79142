#[cfg(test)]
mod tests {
    use crate::column::Column;
    use crate::data_type::{SqlServerDataType, SqlServerType};
    use crate::error::SqlError;
    use crate::query::QueryType;
    use crate::table::Table;
    use crate::{add_conditions, add_joins, add_order_by};
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn test_table() -> Table {
        let mut t = Table::named("TestTable").unwrap();
        t.add_column(Column::new("Id", SqlServerDataType::new(SqlServerType::Int)))
            .unwrap();
        t.add_column(Column::new(
            "Name",
            SqlServerDataType::with_size(SqlServerType::VarChar, "50"),
        ))
        .unwrap();
        t
    }

    #[test]
    fn name_and_prefix() {
        let mut t = Table::new();
        t.set_name("Users", Some("u")).unwrap();
        assert_eq!(t.name(false), "Users");
        assert_eq!(t.name(true), "Users u");
        assert_eq!(t.prefix(), Some("u"));

        t.set_name("Users", None).unwrap();
        assert_eq!(t.name(true), "Users");

        assert!(matches!(t.set_name("", None), Err(SqlError::Argument(_))));
        assert!(matches!(Table::named(""), Err(SqlError::Argument(_))));
    }

    #[test]
    fn clauses_render_empty_when_unset() {
        let t = test_table();
        assert_eq!(t.joins_clause(), "");
        assert_eq!(t.conditions_clause(), "");
        assert_eq!(t.order_by_clause(), "");
    }

    #[test]
    fn clauses_accumulate_in_order() {
        let mut t = test_table();
        t.add_joins("INNER JOIN Orders o ON o.UserId = Id")
            .add_joins(["LEFT JOIN Tags g ON g.Id = o.TagId"]);
        t.add_conditions(vec!["Id > 1", "Name <> ''"]);
        t.add_order_by("Name").add_order_by("Id DESC");

        assert_eq!(
            t.joins_clause(),
            " INNER JOIN Orders o ON o.UserId = Id LEFT JOIN Tags g ON g.Id = o.TagId"
        );
        assert_eq!(t.conditions_clause(), " WHERE Id > 1 AND Name <> ''");
        assert_eq!(t.order_by_clause(), " ORDER BY Name, Id DESC");

        t.clear_joins().clear_conditions().clear_order_by();
        assert!(t.joins().is_empty());
        assert!(t.conditions().is_empty());
        assert!(t.order_by().is_empty());
    }

    #[test]
    fn variadic_macros_append_fragments() {
        let mut t = test_table();
        let extra = String::from("Name LIKE 'A%'");
        add_conditions!(t, "Id = 1", &extra, ["Id < 10"]);
        add_joins!(t, "JOIN Roles r ON r.Id = RoleId");
        add_order_by!(t, "Id", String::from("Name"));

        assert_eq!(
            t.conditions(),
            ["Id = 1", "Name LIKE 'A%'", "Id < 10"]
        );
        assert_eq!(t.joins().len(), 1);
        assert_eq!(t.order_by_clause(), " ORDER BY Id, Name");
    }

    #[test]
    fn validate_rules() {
        let empty = Table::new();
        for q in [
            QueryType::Create,
            QueryType::Select,
            QueryType::Insert,
            QueryType::Update,
            QueryType::Delete,
        ] {
            assert!(matches!(empty.validate(q), Err(SqlError::Argument(_))));
        }

        let no_columns = Table::named("T").unwrap();
        assert!(no_columns.validate(QueryType::Delete).is_ok());
        assert!(no_columns.validate(QueryType::Select).is_ok());
        assert!(matches!(
            no_columns.validate(QueryType::Insert),
            Err(SqlError::Argument(_))
        ));
        assert!(matches!(
            no_columns.validate(QueryType::Update),
            Err(SqlError::Argument(_))
        ));
    }

    #[test]
    fn clone_is_equal_but_independent() {
        let mut source = test_table();
        source.add_conditions("Id = 1");
        source.columns_mut().set_value("Name", "A").unwrap();

        let mut copy = source.clone();
        assert_eq!(copy, source);

        copy.columns_mut().set_value("Name", "B").unwrap();
        copy.columns_mut().get_mut("Id").unwrap().set_excluded(true);
        copy.add_conditions("Name = 'B'");

        assert_eq!(
            source.columns().get("Name").unwrap().value().unwrap(),
            "'A'"
        );
        assert!(!source.columns().get("Id").unwrap().is_excluded());
        assert_eq!(source.conditions(), ["Id = 1"]);
        assert_ne!(copy, source);
    }

    #[test]
    fn equality_is_structural() {
        let a = test_table();
        let b = test_table();
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a.clone());
        assert!(set.contains(&b));

        let mut renamed = test_table();
        renamed.set_name("Other", None).unwrap();
        assert_ne!(a, renamed);

        let mut prefixed = test_table();
        prefixed.set_name("TestTable", Some("t")).unwrap();
        assert_ne!(a, prefixed);
    }
}
