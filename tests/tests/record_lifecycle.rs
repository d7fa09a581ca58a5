use activegraph::{values, Status, Value};
use pretty_assertions::assert_eq;
use tests::{assert_err, DbTest, OpKind};

#[tokio::test]
async fn insert_then_find_round_trip() {
    let test = DbTest::bookstore().await;
    let book = test.model("book");

    let mut moby = book.new(values! { title: "Moby Dick", year: 1851 });
    assert!(moby.is_new_record());

    moby.insert(&test.cx).await.expect("insert");
    assert!(moby.is_persisted());
    assert_eq!(moby.key(), Some(&Value::I64(1)));

    let found = book
        .all()
        .filter("year", [1851])
        .to_a(&test.cx)
        .await
        .unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].get("uid"), Some(&Value::I64(1)));
    assert_eq!(found[0].get("title"), Some(&Value::from("Moby Dick")));
    assert_eq!(found[0].get("year"), Some(&Value::I64(1851)));
    assert_eq!(found[0].status(), Status::Persisted);

    let by_key = book.find(&test.cx, 1).await.unwrap().unwrap();
    assert_eq!(by_key.values(), found[0].values());

    assert!(book.find(&test.cx, 2).await.unwrap().is_none());
}

#[tokio::test]
async fn insert_writes_back_defaults() {
    let test = DbTest::bookstore().await;

    let moby = test
        .create("book", values! { title: "Moby Dick", year: 1851 })
        .await;

    assert_eq!(moby.get("in_print"), Some(&Value::Bool(true)));

    let stored = test.model("book").find(&test.cx, 1).await.unwrap().unwrap();
    assert_eq!(stored.get("in_print"), Some(&Value::Bool(true)));
    assert_eq!(stored.get("author_id"), Some(&Value::Null));
}

#[tokio::test]
async fn insert_with_explicit_key() {
    let test = DbTest::bookstore().await;

    let typee = test
        .create("book", values! { uid: 42, title: "Typee" })
        .await;
    assert_eq!(typee.key(), Some(&Value::I64(42)));

    let found = test.model("book").find(&test.cx, 42).await.unwrap().unwrap();
    assert_eq!(found.get("title"), Some(&Value::from("Typee")));
}

#[tokio::test]
async fn update_writes_assigned_values() {
    let test = DbTest::bookstore().await;
    let book = test.model("book");

    let mut moby = test
        .create("book", values! { title: "Moby Dik", year: 1851 })
        .await;

    moby.set("title", "Moby Dick");
    moby.update(&test.cx).await.expect("update");
    assert!(moby.is_persisted());

    let found = book.find(&test.cx, 1).await.unwrap().unwrap();
    assert_eq!(found.get("title"), Some(&Value::from("Moby Dick")));
    assert_eq!(found.get("year"), Some(&Value::I64(1851)));
}

#[tokio::test]
async fn destroy_removes_the_row() {
    let test = DbTest::bookstore().await;
    let book = test.model("book");

    let mut moby = test
        .create("book", values! { title: "Moby Dick", year: 1851 })
        .await;

    moby.destroy(&test.cx).await.expect("destroy");
    assert!(moby.is_destroyed());
    assert!(book.find(&test.cx, 1).await.unwrap().is_none());

    // A destroyed record cannot be written again
    moby.update(&test.cx).await;
    assert!(moby.error().unwrap().is_missing_primary_key());
}

#[tokio::test]
async fn update_and_destroy_require_a_persisted_record() {
    let test = DbTest::bookstore().await;
    let mut log = test.log();

    let mut draft = test.model("book").new(values! { uid: 7, title: "Omoo" });

    draft.update(&test.cx).await;
    assert!(draft.is_failed());
    assert!(draft.error().unwrap().is_missing_primary_key());

    draft.destroy(&test.cx).await;
    assert!(draft.error().unwrap().is_missing_primary_key());
    assert!(draft.is_new_record());

    assert!(log.is_empty());
    assert!(log.pop().is_none());
}

#[tokio::test]
async fn insert_twice_is_rejected() {
    let test = DbTest::bookstore().await;

    let mut moby = test
        .create("book", values! { title: "Moby Dick" })
        .await;
    let mut log = test.log();
    log.clear();

    moby.insert(&test.cx).await;
    assert!(moby.error().unwrap().is_compilation());
    assert!(moby.is_persisted());
    assert!(log.is_empty());
}

#[tokio::test]
async fn successful_operation_clears_previous_failure() {
    let test = DbTest::bookstore().await;

    let mut moby = test.model("book").new(values! { year: 1851 });
    moby.insert(&test.cx).await;
    assert!(moby.is_failed());

    moby.set("title", "Moby Dick").insert(&test.cx).await;
    assert!(moby.is_ok());
    assert!(moby.outcome().is_ok());
    assert!(moby.is_persisted());
}

#[tokio::test]
#[should_panic(expected = "saving book: compilation failed")]
async fn expect_panics_with_the_reason() {
    let test = DbTest::bookstore().await;

    let mut book = test.model("book").new(values! { shelf: 3 });
    book.insert(&test.cx).await.expect("saving book");
}

#[tokio::test]
async fn display_lists_catalog_attributes_first() {
    let test = DbTest::bookstore().await;

    let mut moby = test.model("book").new(values! { note: "classic", uid: 1 });
    moby.set("title", "Moby Dick");

    assert_eq!(
        moby.to_string(),
        r#"#<book uid: 1, title: "Moby Dick", note: "classic">"#
    );
}

#[tokio::test]
async fn create_goes_through_one_exec() {
    let test = DbTest::bookstore().await;
    let mut log = test.log();

    test.create("publisher", values! { name: "Harper", revenue: 12.5 })
        .await;

    assert_eq!(log.count(OpKind::Exec), 1);
    let op = log.pop().unwrap();
    assert_eq!(
        op.sql,
        r#"INSERT INTO "publishers" ("name", "revenue") VALUES (?1, ?2);"#
    );
    assert_eq!(op.params, [Value::from("Harper"), Value::F64(12.5)]);
}

#[tokio::test]
async fn unknown_model_lookup() {
    let test = DbTest::bookstore().await;
    assert_err!(test.db.model("shelf"), is_unknown_model);
}

#[tokio::test]
async fn string_keys_are_never_assigned_by_the_database() {
    let test = DbTest::new().await;

    let genre = test
        .db
        .define("genre", |m| {
            m.primary_key("code");
            m.attr_string("code");
            m.attr_string("label");
        })
        .unwrap();
    test.db.push_schema(&test.cx).await.unwrap();

    let unkeyed = genre.create(&test.cx, values! { label: "Whaling" }).await;
    assert!(unkeyed.is_new_record());
    assert!(unkeyed.error().unwrap().is_adapter_execution_failed());
    assert!(unkeyed.key().is_none());
    assert!(genre.all().to_a(&test.cx).await.unwrap().is_empty());

    let mut sea = genre
        .create(&test.cx, values! { code: "sea", label: "Sea stories" })
        .await;
    sea.expect("insert");
    assert_eq!(sea.key(), Some(&Value::from("sea")));

    sea.set("label", "Sea tales").update(&test.cx).await.expect("update");

    let stored = genre.find(&test.cx, "sea").await.unwrap().unwrap();
    assert_eq!(stored.get("label"), Some(&Value::from("Sea tales")));
}
