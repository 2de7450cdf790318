//! Order intake and management flow

mod common;

use axum::body::Body;
use common::*;
use http::{Request, StatusCode, header};
use serde_json::json;

fn order_body(name: &str, color: &str, copies: &str) -> Vec<u8> {
    MultipartBuilder::new()
        .text("name", name)
        .text("major", "Computer Science")
        .text("time", "11:15")
        .text("color", color)
        .text("copies", copies)
        .file("file", "report.pdf", "application/pdf", b"%PDF-1.4 test doc")
        .file("slip", "slip.jpg", "image/jpeg", b"\xFF\xD8\xFF fake jpeg")
        .build()
}

async fn create_order(t: &TestApp, name: &str, color: &str, copies: &str) -> serde_json::Value {
    let (status, body) = t
        .send(post_multipart("/api/orders", order_body(name, color, copies)))
        .await;
    assert_eq!(status, StatusCode::CREATED, "order create failed: {body}");
    body["order"].clone()
}

#[tokio::test]
async fn color_order_priced_at_ten_per_copy() {
    let t = spawn_app().await;

    let order = create_order(&t, "A", "color", "3").await;
    assert_eq!(order["price"], json!(10));
    assert_eq!(order["total_price"], json!(30));
    assert_eq!(order["status"], json!("pending"));
    assert_eq!(order["time"], json!("11:15"));
    assert_eq!(order["copies"], json!(3));
    assert!(order["id"].as_str().unwrap().starts_with("print_order:"));
}

#[tokio::test]
async fn bw_order_priced_at_one_per_copy() {
    let t = spawn_app().await;

    let order = create_order(&t, "B", "bw", "7").await;
    assert_eq!(order["price"], json!(1));
    assert_eq!(order["total_price"], json!(7));
}

#[tokio::test]
async fn payloads_land_in_the_blob_store() {
    let t = spawn_app().await;

    let order = create_order(&t, "C", "bw", "1").await;
    let file_url = order["file_url"].as_str().unwrap();
    assert!(file_url.starts_with("/api/blobs/"));
    assert_eq!(order["file_name"], json!("report.pdf"));
    assert_eq!(order["file_type"], json!("application/pdf"));
    assert_eq!(order["slip_name"], json!("slip.jpg"));

    let (status, bytes) = t.send_raw(get(file_url)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, b"%PDF-1.4 test doc");
}

#[tokio::test]
async fn missing_slip_rejected() {
    let t = spawn_app().await;

    let body = MultipartBuilder::new()
        .text("name", "A")
        .text("major", "B")
        .text("time", "11:15")
        .text("color", "color")
        .text("copies", "1")
        .file("file", "doc.pdf", "application/pdf", b"pdf")
        .build();

    let (status, resp) = t.send(post_multipart("/api/orders", body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["error"], json!("No payment slip uploaded"));

    // Nothing was inserted
    let (_, orders) = t.send(get_admin("/api/orders")).await;
    assert_eq!(orders.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn invalid_copies_rejected() {
    let t = spawn_app().await;

    for copies in ["abc", "0", "-2", "", "4294967295", "10001"] {
        let (status, _) = t
            .send(post_multipart("/api/orders", order_body("A", "color", copies)))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "copies={copies:?}");
    }
}

#[tokio::test]
async fn invalid_enums_and_blank_scalars_rejected() {
    let t = spawn_app().await;

    let bad_time = MultipartBuilder::new()
        .text("name", "A")
        .text("major", "B")
        .text("time", "13:00")
        .text("color", "color")
        .text("copies", "1")
        .file("file", "f.pdf", "application/pdf", b"x")
        .file("slip", "s.jpg", "image/jpeg", b"y")
        .build();
    let (status, _) = t.send(post_multipart("/api/orders", bad_time)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let blank_name = order_body("   ", "color", "1");
    let (status, _) = t.send(post_multipart("/api/orders", blank_name)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn status_update_changes_only_status() {
    let t = spawn_app().await;

    let order = create_order(&t, "Dee", "color", "2").await;
    let id = order["id"].as_str().unwrap();

    let req = Request::builder()
        .method("PATCH")
        .uri(format!("/api/orders/{id}"))
        .header(header::AUTHORIZATION, admin_auth())
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({"status": "completed"}).to_string()))
        .unwrap();
    let (status, updated) = t.send(req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], json!("completed"));

    // Everything else unchanged
    let (_, orders) = t.send(get_admin("/api/orders")).await;
    let fetched = &orders.as_array().unwrap()[0];
    assert_eq!(fetched["status"], json!("completed"));
    assert_eq!(fetched["name"], json!("Dee"));
    assert_eq!(fetched["total_price"], json!(20));
    assert_eq!(fetched["created_at"], order["created_at"]);
}

#[tokio::test]
async fn status_update_with_unknown_status_is_400() {
    let t = spawn_app().await;

    let order = create_order(&t, "E", "bw", "1").await;
    let id = order["id"].as_str().unwrap();

    let req = Request::builder()
        .method("PATCH")
        .uri(format!("/api/orders/{id}"))
        .header(header::AUTHORIZATION, admin_auth())
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({"status": "done"}).to_string()))
        .unwrap();
    let (status, body) = t.send(req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn status_update_unknown_id_is_404() {
    let t = spawn_app().await;

    let req = Request::builder()
        .method("PATCH")
        .uri("/api/orders/nonexistent")
        .header(header::AUTHORIZATION, admin_auth())
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({"status": "completed"}).to_string()))
        .unwrap();
    let (status, _) = t.send(req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_and_list_accounting() {
    let t = spawn_app().await;

    let first = create_order(&t, "First", "bw", "1").await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    create_order(&t, "Second", "bw", "1").await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    create_order(&t, "Third", "bw", "1").await;

    // Newest first
    let (_, orders) = t.send(get_admin("/api/orders")).await;
    let names: Vec<&str> = orders
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Third", "Second", "First"]);

    // Delete one, list shrinks accordingly
    let id = first["id"].as_str().unwrap();
    let (status, _) = t.send(delete_admin(&format!("/api/orders/{id}"))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, orders) = t.send(get_admin("/api/orders")).await;
    assert_eq!(orders.as_array().unwrap().len(), 2);

    // Deleting again is a 404 and changes nothing
    let (status, _) = t.send(delete_admin(&format!("/api/orders/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, orders) = t.send(get_admin("/api/orders")).await;
    assert_eq!(orders.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn clear_all_empties_the_collection() {
    let t = spawn_app().await;

    create_order(&t, "A", "bw", "1").await;
    create_order(&t, "B", "color", "2").await;

    let (status, body) = t.send(delete_admin("/api/orders")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());

    let (_, orders) = t.send(get_admin("/api/orders")).await;
    assert_eq!(orders.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn order_creation_is_public_but_management_is_not() {
    let t = spawn_app().await;

    let order = create_order(&t, "Public", "bw", "1").await;
    let id = order["id"].as_str().unwrap();

    // Unauthenticated management requests bounce
    let req = Request::builder()
        .method("DELETE")
        .uri(format!("/api/orders/{id}"))
        .body(Body::empty())
        .unwrap();
    let (status, _) = t.send(req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let req = Request::builder()
        .method("PATCH")
        .uri(format!("/api/orders/{id}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({"status": "cancelled"}).to_string()))
        .unwrap();
    let (status, _) = t.send(req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
