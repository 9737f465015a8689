use std::time::Duration;

use axum::http::StatusCode;

use crate::cli::api_client::ApiClient;
use crate::cli::commands::list::*;
use crate::cli::error::CliError;
use crate::cli::test_server::*;
use crate::users::{FetchError, SortField, SortOrder};

fn client(url: String) -> ApiClient {
    init_crypto();
    ApiClient::new(Some(url), Duration::from_secs(5)).unwrap()
}

fn ids(output: &str) -> Vec<u64> {
    let parsed: serde_json::Value = serde_json::from_str(output).expect("Failed to parse JSON");
    parsed["users"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_u64().unwrap())
        .collect()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_default_table() {
    let (url, _handle) = spawn_test_server().await;

    let output = list_users(client(url), ListArgs::default(), "table")
        .await
        .unwrap();

    assert!(output.contains("Full Name"));
    assert!(output.contains("Emily Johnson"));
    assert!(output.contains("Page 1 of 3 (25 users)"));
    assert!(output.contains("[1] 2 3"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_json_page_two() {
    let (url, _handle) = spawn_test_server().await;
    let args = ListArgs {
        page: 2,
        ..Default::default()
    };

    let output = list_users(client(url), args, "json").await.unwrap();

    assert_eq!(ids(&output), (11..=20).collect::<Vec<u64>>());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_filters_within_current_page_only() {
    let (url, _handle) = spawn_test_server().await;
    let args = ListArgs {
        gender: Some("female"),
        country: Some("Canada"),
        ..Default::default()
    };

    let output = list_users(client(url), args, "json").await.unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    // Page one holds ids 1..=10; only id 6 is a woman in Canada.
    assert_eq!(ids(&output), vec![6]);
    // The page count still follows the server total.
    assert_eq!(parsed["total_pages"], 3);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_sorted_by_name_desc() {
    let (url, _handle) = spawn_test_server().await;
    let args = ListArgs {
        sort: Some(SortField::Name),
        order: SortOrder::Desc,
        ..Default::default()
    };

    let output = list_users(client(url), args, "json").await.unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let names: Vec<&str> = parsed["users"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["full_name"].as_str().unwrap())
        .collect();

    assert_eq!(names.first(), Some(&"Sophia Brown"));
    assert_eq!(names.last(), Some(&"Alexander Williams"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_page_out_of_range() {
    let (url, _handle) = spawn_test_server().await;
    let args = ListArgs {
        page: 7,
        ..Default::default()
    };

    let err = list_users(client(url), args, "table").await.unwrap_err();
    assert!(matches!(err, CliError::InvalidArgument { .. }), "got {:?}", err);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_surfaces_fetch_failure() {
    let (url, _handle) = spawn_failing_server(StatusCode::INTERNAL_SERVER_ERROR).await;

    let err = list_users(client(url), ListArgs::default(), "table")
        .await
        .unwrap_err();
    assert!(
        matches!(err, CliError::Fetch(FetchError::Status { status: 500, .. })),
        "got {:?}",
        err
    );
}
