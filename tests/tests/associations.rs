use activegraph::{values, DatabaseConfig, Db, Value};
use pretty_assertions::assert_eq;
use tests::{assert_eq_unordered, assert_err, pluck, titles, DbTest};

#[tokio::test]
async fn has_many_scoped_query() {
    let test = DbTest::bookstore().await;

    let melville = test.create("author", values! { name: "Melville" }).await;
    assert_eq!(melville.key(), Some(&Value::I64(1)));

    for (title, year) in [("Typee", 1846), ("Moby Dick", 1851), ("Pierre", 1852)] {
        test.create("book", values! { title: title, year: year, author_id: 1 })
            .await;
    }

    // Another author's book in the same year range
    let hawthorne = test.create("author", values! { name: "Hawthorne" }).await;
    test.create(
        "book",
        values! { title: "The Scarlet Letter", year: 1850, author_id: hawthorne.key().cloned() },
    )
    .await;

    let books = melville
        .collection("book")
        .unwrap()
        .filter("year > ?", [1846])
        .to_a(&test.cx)
        .await
        .unwrap();

    assert_eq_unordered!(titles(&books), ["Moby Dick", "Pierre"]);

    let all = melville
        .collection("books")
        .unwrap()
        .to_a(&test.cx)
        .await
        .unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn belongs_to_loads_the_owner() {
    let test = DbTest::bookstore().await;

    test.create("author", values! { name: "Melville" }).await;
    let moby = test
        .create("book", values! { title: "Moby Dick", author_id: 1 })
        .await;

    let author = moby
        .association("author", &test.cx)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(author.get("name"), Some(&Value::from("Melville")));
    assert!(author.is_persisted());
}

#[tokio::test]
async fn belongs_to_without_foreign_key_does_no_io() {
    let test = DbTest::bookstore().await;

    let orphan = test.create("book", values! { title: "Anonymous" }).await;
    let log = test.log();
    let before = log.len();

    let author = orphan.association("author", &test.cx).await.unwrap();
    assert!(author.is_none());

    let mut draft = test.model("book").new(values! { author_id: Value::Null });
    draft.set("title", "Draft");
    assert!(draft.association("author", &test.cx).await.unwrap().is_none());

    assert_eq!(log.len(), before);
}

#[tokio::test]
async fn belongs_to_dangling_key_is_none() {
    let test = DbTest::bookstore().await;

    let moby = test
        .create("book", values! { title: "Moby Dick", author_id: 99 })
        .await;

    assert!(moby
        .association("author", &test.cx)
        .await
        .unwrap()
        .is_none());
}

/// Defines `book` and `author` in the given order, stores one of each and
/// returns the name of the book's author.
async fn author_name(book_first: bool) -> Value {
    let db = Db::new();
    let cx = activegraph::Context::background();
    db.establish_connection("primary", DatabaseConfig::sqlite_in_memory())
        .await
        .unwrap();

    let define_book = |db: &Db| {
        db.define("book", |m| {
            m.attr_string("title");
            m.belongs_to("author");
            m.attr_int("author_id");
        })
        .unwrap()
    };
    let define_author = |db: &Db| {
        db.define("author", |m| {
            m.attr_string("name");
        })
        .unwrap()
    };

    let (book, author) = if book_first {
        let book = define_book(&db);
        (book, define_author(&db))
    } else {
        let author = define_author(&db);
        (define_book(&db), author)
    };

    db.push_schema(&cx).await.unwrap();

    author
        .create(&cx, values! { name: "Melville" })
        .await
        .expect("author");
    let moby = book
        .create(&cx, values! { title: "Moby Dick", author_id: 1 })
        .await;

    moby.association("author", &cx)
        .await
        .unwrap()
        .and_then(|author| author.get("name").cloned())
        .unwrap_or_default()
}

#[tokio::test]
async fn association_resolution_is_order_independent() {
    let forward = author_name(true).await;
    let backward = author_name(false).await;

    assert_eq!(forward, Value::from("Melville"));
    assert_eq!(forward, backward);
}

#[tokio::test]
async fn unresolved_target_fails_at_traversal() {
    let test = DbTest::new().await;

    let review = test
        .db
        .define("review", |m| {
            m.attr_string("body");
            m.attr_int("critic_id");
            m.belongs_to("critic");
        })
        .unwrap();

    let record = review.new(values! { body: "Loved it", critic_id: 1 });
    let err = record.association("critic", &test.cx).await.unwrap_err();
    assert!(err.is_unknown_model());
    assert!(test.log().is_empty());
}

#[tokio::test]
async fn association_kind_mismatch() {
    let test = DbTest::bookstore().await;

    let melville = test.create("author", values! { name: "Melville" }).await;
    let moby = test
        .create("book", values! { title: "Moby Dick", author_id: 1 })
        .await;

    assert_err!(melville.association("books", &test.cx).await, is_compilation);
    assert_err!(moby.collection("author"), is_compilation);
    assert_err!(moby.collection("reviews"), is_unknown_association);
}

#[tokio::test]
async fn collection_of_unsaved_owner() {
    let test = DbTest::bookstore().await;

    let draft = test.model("author").new(values! { name: "Anonymous" });
    assert_err!(draft.collection("books"), is_missing_primary_key);
}

#[tokio::test]
async fn joins_filter_on_the_target_table() {
    let test = DbTest::bookstore().await;

    test.create("author", values! { name: "Melville" }).await;
    test.create("author", values! { name: "Hawthorne" }).await;
    test.create("book", values! { title: "Moby Dick", author_id: 1 })
        .await;
    test.create("book", values! { title: "The Scarlet Letter", author_id: 2 })
        .await;

    let books = test
        .model("book")
        .joins("author")
        .filter("\"authors\".\"name\" = ?", ["Melville"])
        .to_a(&test.cx)
        .await
        .unwrap();

    assert_eq!(pluck!(books, "title"), [Value::from("Moby Dick")]);
}
