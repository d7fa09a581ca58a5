use activegraph::{values, Context, Value};
use std::time::{Duration, Instant};
use tests::{assert_err, DbTest};

#[tokio::test]
async fn canceled_context_stops_queries() {
    let test = DbTest::bookstore().await;
    test.create("book", values! { title: "Moby Dick" }).await;

    let cx = Context::background();
    cx.cancel();

    let err = test.model("book").all().to_a(&cx).await.unwrap_err();
    assert!(err.is_canceled());
    assert!(!err.is_deadline_exceeded());
    assert!(!err.is_adapter_execution_failed());
    assert!(!err.is_compilation_time());

    // The shared context is unaffected
    assert_eq!(test.model("book").all().to_a(&test.cx).await.unwrap().len(), 1);
}

#[tokio::test]
async fn canceling_a_parent_cancels_children() {
    let test = DbTest::bookstore().await;

    let parent = Context::background();
    let child = parent.child();
    parent.cancel();

    let book = test
        .model("book")
        .create(&child, values! { title: "Moby Dick" })
        .await;

    assert!(book.is_new_record());
    assert!(book.error().unwrap().is_canceled());
    assert!(test.model("book").all().to_a(&test.cx).await.unwrap().is_empty());
}

#[tokio::test]
async fn canceled_child_leaves_parent_usable() {
    let test = DbTest::bookstore().await;

    let child = test.cx.child();
    child.cancel();

    assert_err!(test.model("book").find(&child, 1).await, is_canceled);
    assert!(test.model("book").find(&test.cx, 1).await.unwrap().is_none());
}

#[tokio::test]
async fn expired_deadline() {
    let test = DbTest::bookstore().await;
    let mut moby = test.create("book", values! { title: "Moby Dick" }).await;

    let cx = test.cx.with_deadline(Instant::now() - Duration::from_secs(1));

    moby.set("title", "Moby-Dick; or, The Whale");
    moby.update(&cx).await;
    assert!(moby.error().unwrap().is_deadline_exceeded());
    assert!(moby.error().unwrap().is_canceled());

    let stored = test.model("book").find(&test.cx, 1).await.unwrap().unwrap();
    assert_eq!(stored.get("title"), Some(&Value::from("Moby Dick")));
}

#[tokio::test]
async fn generous_timeout_does_not_interfere() {
    let test = DbTest::bookstore().await;
    let cx = test.cx.with_timeout(Duration::from_secs(60));

    let book = test
        .model("book")
        .create(&cx, values! { title: "Moby Dick" })
        .await;
    assert!(book.is_ok());
    assert!(cx.deadline().is_some());
}
