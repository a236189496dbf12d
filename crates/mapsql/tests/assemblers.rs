use mapsql::{
    BuilderConfig, Flavor, InGroup, Literal, NullPredicate, QueryBuilder, Row, SqlError,
    StatementKind, build_insert_many, build_select, build_select_compound, build_update_many,
    build_update_one, build_upsert_many, raw, row,
};

#[test]
fn resident_lookup() {
    let stmt = build_select(
        &["resident_id", "unit"],
        "resident_details",
        &row! { "building_id" => 12, "is_deleted" => false, "moved_out_at" => "" },
    )
    .unwrap();

    assert_eq!(
        stmt.to_string(),
        "SELECT `resident_id`, `unit` FROM `resident_details` \
         WHERE `building_id` = ? AND `is_deleted` = ? AND `moved_out_at` IS NULL"
    );
    let (_, params) = stmt.into_parts();
    assert_eq!(params, [Literal::Int(12), Literal::Bool(false)]);
}

#[test]
fn qualified_table_names() {
    let stmt = build_select(&["id"], "app.users", &row! { "users.id" => 1 }).unwrap();
    assert_eq!(
        stmt.sql(),
        "SELECT `id` FROM `app`.`users` WHERE `users`.`id` = ?"
    );
}

#[test]
fn users_matching_any_email_group() {
    let emails = ["a@x.io", "b@x.io"];
    let stmt = build_select_compound(
        &["id", "email"],
        "users",
        &[
            InGroup::new().with("email", emails),
            InGroup::new().with("secondary_email", emails),
        ],
        &row! { "role_id" => 3 },
    )
    .unwrap();

    assert_eq!(
        stmt.sql(),
        "SELECT `id`, `email` FROM `users` WHERE \
         ((`email` IN (?, ?)) OR (`secondary_email` IN (?, ?))) AND (`role_id` = ?)"
    );
    assert_eq!(stmt.params().len(), 5);
    assert_eq!(stmt.params()[4], Literal::Int(3));
}

#[test]
fn counter_upsert_batch() {
    let rows = vec![
        row! { "day" => "2024-01-01", "page" => "/", "hits" => 1 },
        row! { "day" => "2024-01-01", "page" => "/about", "hits" => 1 },
    ];
    let stmt = build_upsert_many("page_hits", &rows, &row! { "hits" => raw("hits + 1") }).unwrap();

    assert_eq!(
        stmt.sql(),
        "INSERT INTO `page_hits` (`day`, `page`, `hits`) VALUES (?, ?, ?), (?, ?, ?) \
         ON DUPLICATE KEY UPDATE `hits` = hits + 1"
    );
    assert_eq!(stmt.kind(), StatementKind::Insert);
    assert!(!stmt.kind().returns_rows());
}

#[test]
fn batch_rows_built_in_a_loop() {
    let rows: Vec<Row> = (1..=3)
        .map(|i| row! { "id" => i, "label" => format!("item-{i}") })
        .collect();
    let stmt = build_insert_many("items", &rows).unwrap();
    assert_eq!(
        stmt.sql(),
        "INSERT INTO `items` (`id`, `label`) VALUES (?, ?), (?, ?), (?, ?)"
    );
    assert_eq!(stmt.params()[5], Literal::from("item-3"));
}

#[test]
fn deactivate_memberships() {
    let keys = [
        row! { "user_id" => 1, "org_id" => 9 },
        row! { "user_id" => 2, "org_id" => 9 },
    ];
    let stmt = build_update_many("memberships", &row! { "active" => false }, &keys).unwrap();
    assert_eq!(
        stmt.sql(),
        "UPDATE `memberships` SET `active` = ? WHERE (`user_id`, `org_id`) IN ((?, ?), (?, ?))"
    );
}

#[test]
fn postgres_flavor_end_to_end() {
    let flavor: Flavor = "postgresql".parse().unwrap();
    let qb = QueryBuilder::new(BuilderConfig::for_flavor(flavor));

    let stmt = qb
        .update_one(
            "users",
            &row! { "name" => "Ann", "nickname" => Literal::Null },
            &row! { "id" => 7 },
        )
        .unwrap();
    assert_eq!(
        stmt.sql(),
        r#"UPDATE "users" SET "name" = $1, "nickname" = NULL WHERE "id" = $2"#
    );
    assert_eq!(stmt.flavor(), Flavor::Postgres);

    let err = qb
        .upsert_many("t", &[row! { "id" => 1 }], &row! { "id" => raw("id") })
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "build_upsert_many: ON DUPLICATE KEY UPDATE is not supported by the postgres flavor"
    );
}

#[test]
fn unknown_flavor_is_rejected() {
    let err = "oracle".parse::<Flavor>().unwrap_err();
    assert!(matches!(err, SqlError::Validation(_)));
}

#[test]
fn legacy_null_equality_and_kept_empty_strings() {
    let qb = QueryBuilder::new(
        BuilderConfig::new()
            .null_predicate(NullPredicate::Equals)
            .keep_empty_strings(),
    );
    let stmt = qb
        .select(&["id"], "t", &row! { "a" => "", "b" => Literal::Null })
        .unwrap();
    assert_eq!(stmt.sql(), "SELECT `id` FROM `t` WHERE `a` = ? AND `b` = NULL");
    assert_eq!(stmt.params(), [Literal::from("")]);
}

#[test]
fn contract_errors_name_assembler_and_argument() {
    let err = build_update_one("users", &row! { "name" => "x" }, &Row::new()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "build_update_one: invalid `conditions`: must not be empty"
    );

    let err = build_insert_many("logs", &[row! { "a" => 1 }, row! { "b" => 2 }]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "build_insert_many: invalid `rows`: row 1 has columns [b], expected [a] as in row 0"
    );
}

#[test]
fn statements_are_shareable_across_threads() {
    let qb = QueryBuilder::default();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let qb = qb.clone();
            std::thread::spawn(move || qb.select(&["id"], "t", &row! { "id" => i }).unwrap())
        })
        .collect();
    for handle in handles {
        let stmt = handle.join().unwrap();
        assert_eq!(stmt.sql(), "SELECT `id` FROM `t` WHERE `id` = ?");
    }
}
