mod common;

use axum::http::StatusCode;
use serde_json::json;

async fn shorten(server: &axum_test::TestServer, url: &str) -> String {
    server
        .post("/api/shorten")
        .json(&json!({ "url": url }))
        .await
        .json::<serde_json::Value>()["short_code"]
        .as_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_list_links_empty() {
    let server = common::create_test_server();

    let response = server.get("/api/urls").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["items"].as_array().unwrap().len(), 0);
    assert_eq!(json["pagination"]["page"], 1);
    assert_eq!(json["pagination"]["page_size"], 25);
    assert_eq!(json["pagination"]["total_items"], 0);
    assert_eq!(json["pagination"]["total_pages"], 0);
}

#[tokio::test]
async fn test_list_links_newest_first() {
    let server = common::create_test_server();

    let first = shorten(&server, "https://example.com/1").await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let second = shorten(&server, "https://example.com/2").await;

    let json = server
        .get("/api/urls")
        .await
        .json::<serde_json::Value>();
    let items = json["items"].as_array().unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["short_code"], second);
    assert_eq!(items[1]["short_code"], first);
    assert_eq!(items[0]["original_url"], "https://example.com/2");
    assert!(items[0]["short_url"].as_str().unwrap().ends_with(&second));
}

#[tokio::test]
async fn test_list_links_pagination() {
    let server = common::create_test_server();

    for i in 0..5 {
        shorten(&server, &format!("https://example.com/{i}")).await;
    }

    let response = server
        .get("/api/urls")
        .add_query_param("page", 2)
        .add_query_param("page_size", 2)
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["items"].as_array().unwrap().len(), 2);
    assert_eq!(json["pagination"]["page"], 2);
    assert_eq!(json["pagination"]["total_items"], 5);
    assert_eq!(json["pagination"]["total_pages"], 3);

    let last = server
        .get("/api/urls")
        .add_query_param("page", 3)
        .add_query_param("page_size", 2)
        .await
        .json::<serde_json::Value>();
    assert_eq!(last["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_links_invalid_pagination() {
    let server = common::create_test_server();

    server
        .get("/api/urls")
        .add_query_param("page", 0)
        .await
        .assert_status_bad_request();

    server
        .get("/api/urls")
        .add_query_param("page_size", 1001)
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn test_delete_link_success() {
    let server = common::create_test_server();
    let code = shorten(&server, "https://example.com/delete").await;

    let response = server.delete(&format!("/api/urls/{code}")).await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["short_code"], code);
    assert_eq!(json["message"], "Short link deleted successfully");

    server
        .get(&format!("/api/stats/{code}"))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_delete_link_frees_url_for_new_code() {
    let server = common::create_scripted_server(&["Old001", "New001"], 10);

    assert_eq!(shorten(&server, "https://example.com/re").await, "Old001");
    server.delete("/api/urls/Old001").await.assert_status_ok();

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/re" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<serde_json::Value>()["short_code"], "New001");
}

#[tokio::test]
async fn test_delete_link_not_found() {
    let server = common::create_test_server();

    server
        .delete("/api/urls/ZZZZZZ")
        .await
        .assert_status_not_found();
    server
        .delete("/api/urls/bad")
        .await
        .assert_status_not_found();
}
