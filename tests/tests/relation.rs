use activegraph::{values, Value};
use pretty_assertions::assert_eq;
use tests::{pluck, titles, DbTest};

async fn seed(test: &DbTest) {
    for (title, year) in [
        ("Typee", 1846),
        ("Omoo", 1847),
        ("Moby Dick", 1851),
        ("Pierre", 1852),
    ] {
        test.create("book", values! { title: title, year: year })
            .await;
    }
}

#[tokio::test]
async fn chaining_does_not_change_the_receiver() {
    let test = DbTest::bookstore().await;
    seed(&test).await;

    let base = test.model("book").filter("year > ?", [1846]);
    let before = titles(&base.to_a(&test.cx).await.unwrap());
    let sql_before = base.to_sql().unwrap();

    let narrowed = base.filter("year < ?", [1852]);
    let _ordered = base.order("year desc").limit(1);
    let _projected = base.select(["title"]);

    assert_eq!(base.to_sql().unwrap(), sql_before);
    assert_eq!(titles(&base.to_a(&test.cx).await.unwrap()), before);
    assert_eq!(before.len(), 3);

    let narrowed = titles(&narrowed.order("year").to_a(&test.cx).await.unwrap());
    assert_eq!(narrowed, ["Omoo", "Moby Dick"]);
}

#[tokio::test]
async fn filters_commute() {
    let test = DbTest::bookstore().await;
    seed(&test).await;

    let book = test.model("book");
    let ab = book
        .filter("year > ?", [1846])
        .filter("title <> ?", ["Pierre"])
        .order("uid");
    let ba = book
        .filter("title <> ?", ["Pierre"])
        .filter("year > ?", [1846])
        .order("uid");

    let ab = titles(&ab.to_a(&test.cx).await.unwrap());
    let ba = titles(&ba.to_a(&test.cx).await.unwrap());

    assert_eq!(ab, ["Omoo", "Moby Dick"]);
    assert_eq!(ab, ba);
}

#[tokio::test]
async fn equality_shorthand_and_structured_filters() {
    let test = DbTest::bookstore().await;
    seed(&test).await;

    let book = test.model("book");
    let shorthand = book.filter("year", [1851]).to_a(&test.cx).await.unwrap();
    let structured = book.filter_by("year", 1851).to_a(&test.cx).await.unwrap();

    assert_eq!(titles(&shorthand), ["Moby Dick"]);
    assert_eq!(titles(&shorthand), titles(&structured));

    let unowned = book
        .filter_by("author_id", Value::Null)
        .to_a(&test.cx)
        .await
        .unwrap();
    assert_eq!(unowned.len(), 4);
}

#[tokio::test]
async fn order_and_limit() {
    let test = DbTest::bookstore().await;
    seed(&test).await;

    let latest = test
        .model("book")
        .order("year desc")
        .limit(2)
        .to_a(&test.cx)
        .await
        .unwrap();
    assert_eq!(titles(&latest), ["Pierre", "Moby Dick"]);

    let first = test
        .model("book")
        .order("year")
        .first(&test.cx)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(first.get("title"), Some(&Value::from("Typee")));
}

#[tokio::test]
async fn select_loads_only_the_projection() {
    let test = DbTest::bookstore().await;
    seed(&test).await;

    let records = test
        .model("book")
        .select(["title"])
        .filter_by("year", 1847)
        .to_a(&test.cx)
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].get("title"), Some(&Value::from("Omoo")));
    assert!(records[0].get("year").is_none());
    assert!(records[0].key().is_none());
}

#[tokio::test]
async fn group_with_selected_attributes() {
    let test = DbTest::bookstore().await;
    seed(&test).await;
    test.create("book", values! { title: "Moby Dick", year: 1851 })
        .await;

    let grouped = test
        .model("book")
        .select(["title"])
        .group(["title"])
        .order("title")
        .to_a(&test.cx)
        .await
        .unwrap();

    assert_eq!(titles(&grouped), ["Moby Dick", "Omoo", "Pierre", "Typee"]);
}

#[tokio::test]
async fn grouping_without_selection_never_reaches_the_adapter() {
    let test = DbTest::bookstore().await;
    seed(&test).await;

    let mut log = test.log();
    log.clear();

    let err = test
        .model("book")
        .all()
        .group(["year"])
        .to_a(&test.cx)
        .await
        .unwrap_err();
    assert!(err.is_compilation());
    assert!(err.is_compilation_time());

    let err = test
        .model("book")
        .select(["title"])
        .group(["year"])
        .first(&test.cx)
        .await
        .unwrap_err();
    assert!(err.is_compilation());

    assert!(log.is_empty());
}

#[tokio::test]
async fn compile_errors_never_reach_the_adapter() {
    let test = DbTest::bookstore().await;
    let log = test.log();
    let book = test.model("book");

    let cases = [
        book.filter_by("shelf", 1),
        book.select(["shelf"]),
        book.order("shelf desc"),
        book.filter("year > ? AND year < ?", [1846]),
        book.joins("publisher"),
    ];

    for relation in &cases {
        let err = relation.to_a(&test.cx).await.unwrap_err();
        assert!(err.is_compilation_time(), "{relation:?}: {err}");
    }

    let err = book.filter_by("year", "eighteen").to_a(&test.cx).await;
    assert!(err.unwrap_err().is_type_conversion());

    assert!(log.is_empty());
}

#[tokio::test]
async fn to_sql_and_display() {
    let test = DbTest::bookstore().await;

    let relation = test
        .model("book")
        .select(["title"])
        .filter("year > ?", [1846])
        .order("title desc")
        .limit(3);

    let (sql, params) = relation.to_sql().unwrap();
    assert_eq!(
        sql,
        r#"SELECT "title" FROM "books" WHERE (year > ?1) ORDER BY "title" DESC LIMIT 3;"#
    );
    assert_eq!(params, [Value::I64(1846)]);
    assert_eq!(relation.to_string(), sql);

    let invalid = test.model("book").group(["year"]);
    assert!(invalid.to_string().starts_with("#<invalid relation: compilation failed"));
    assert!(test.log().is_empty());
}

#[tokio::test]
async fn projection_is_checked_against_the_catalog() {
    let test = DbTest::bookstore().await;
    seed(&test).await;

    let years = test
        .model("book")
        .select(["year"])
        .order("year")
        .to_a(&test.cx)
        .await
        .unwrap();

    assert_eq!(
        pluck!(years, "year"),
        [
            Value::I64(1846),
            Value::I64(1847),
            Value::I64(1851),
            Value::I64(1852)
        ]
    );
}
