mod common;

use common::{context_for, run};
use httpmock::prelude::*;
use serde_json::json;

#[tokio::test]
async fn test_quote_flat_activity() {
    let server = MockServer::start_async().await;
    let raw = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/datagrepper/raw")
                .query_param("category", "bodhi")
                .query_param("rows_per_page", "1")
                .query_param_exists("start")
                .query_param_exists("end");
            then.status(200).json_body(json!({"total": 10, "raw_messages": []}));
        })
        .await;

    let ctx = context_for(&server);
    let replies = run(&ctx, ".quote BOD").await;

    // 50 sparkline buckets plus the previous and the current day
    raw.assert_hits_async(52).await;
    assert_eq!(replies.len(), 3);
    assert_eq!(replies[0], "nirik: BOD, bodhi +0.00% over yesterday");
    assert_eq!(replies[1], format!("nirik:      {}  ⤆ over 24 hours", "▁".repeat(50)));
    assert!(replies[2].starts_with("nirik:      ↑ "));
    assert!(replies[2].contains(" UTC "));
}

#[tokio::test]
async fn test_quote_weekly_frame() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/datagrepper/raw")
                .query_param("category", "buildsys");
            then.status(200).json_body(json!({"total": 0}));
        })
        .await;

    let ctx = context_for(&server);
    let replies = run(&ctx, ".quote KOJ weekly").await;
    assert_eq!(replies[0], "nirik: KOJ, buildsys +0.00% over the week preceding this one");
    assert!(replies[1].ends_with("⤆ over week"));
}

#[tokio::test]
async fn test_quote_unknown_symbol() {
    let server = MockServer::start_async().await;
    let ctx = context_for(&server);
    let replies = run(&ctx, ".quote XYZ").await;
    assert_eq!(replies.len(), 1);
    assert!(replies[0].starts_with("nirik: No such symbol 'XYZ'.  Try one of ANI, ANS, ASK, BDG, BOD"));
    assert!(!replies[0].contains("LOG"));
}

#[tokio::test]
async fn test_quote_unknown_frame() {
    let server = MockServer::start_async().await;
    let ctx = context_for(&server);
    assert_eq!(
        run(&ctx, ".quote BOD yearly").await,
        vec!["nirik: No such timeframe 'yearly'.  Try one of daily, monthly, quarterly, weekly"]
    );
}

#[tokio::test]
async fn test_quote_datagrepper_down() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/datagrepper/raw");
            then.status(500).json_body(json!({"error": "boom"}));
        })
        .await;

    let ctx = context_for(&server);
    assert_eq!(run(&ctx, ".quote WIK").await, vec!["nirik: Error querying datagrepper."]);
}
