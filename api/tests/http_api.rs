use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use clap::Parser;
use serde_json::{Value, json};

use mealguard_api::application::http::server::http_server;
use mealguard_api::args::Args;

async fn test_server() -> TestServer {
    let args = Arc::new(Args::parse_from(["mealguard-api"]));
    let state = http_server::state(args).await.unwrap();
    let router = http_server::router(state).unwrap();
    TestServer::new(router).unwrap()
}

async fn dish_id_by_query(server: &TestServer, query: &str) -> String {
    let body: Value = server
        .get("/dishes")
        .add_query_param("q", query)
        .await
        .json();
    let items = body["items"].as_array().unwrap();
    assert!(!items.is_empty(), "no dish found for query {query}");
    items[0]["id"].as_str().unwrap().to_string()
}

async fn create_user(server: &TestServer, email: &str) -> String {
    let response = server.post("/users").json(&json!({ "email": email })).await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_returns_ok() {
    let server = test_server().await;

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn lists_demo_restaurants() {
    let server = test_server().await;

    let response = server.get("/restaurants").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["items"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn searches_dishes_by_name_and_description() {
    let server = test_server().await;

    let body: Value = server.get("/dishes").add_query_param("q", "dosa").await.json();
    assert_eq!(body["items"].as_array().unwrap().len(), 2);

    let body: Value = server
        .get("/dishes")
        .add_query_param("q", "no-such-dish")
        .await
        .json();
    assert!(body["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn lists_restaurant_dishes() {
    let server = test_server().await;

    let restaurants: Value = server.get("/restaurants").await.json();
    let restaurant_id = restaurants["items"][0]["id"].as_str().unwrap();

    let response = server
        .get(&format!("/restaurants/{restaurant_id}/dishes"))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let items = body["items"].as_array().unwrap();
    assert!(!items.is_empty());
    for item in items {
        assert_eq!(item["restaurant_id"].as_str().unwrap(), restaurant_id);
    }
}

#[tokio::test]
async fn unknown_dish_returns_not_found() {
    let server = test_server().await;

    let response = server
        .get("/dishes/00000000-0000-0000-0000-000000000000")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["code"], "E_NOT_FOUND");
}

#[tokio::test]
async fn safety_check_flags_high_risk_allergens() {
    let server = test_server().await;
    let dish_id = dish_id_by_query(&server, "Butter Chicken").await;

    let response = server
        .post(&format!("/dishes/{dish_id}/safety-check"))
        .json(&json!({ "allergies": ["Milk", "Peanut"] }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["is_safe"], false);
    assert_eq!(body["highest_risk"]["name"], "Milk");
    assert_eq!(body["highest_risk"]["probability"], 0.95);
    assert_eq!(body["warning"], "95% chance of Milk");
}

#[tokio::test]
async fn safety_check_ignores_unrecognized_names() {
    let server = test_server().await;
    let dish_id = dish_id_by_query(&server, "Butter Chicken").await;

    let response = server
        .post(&format!("/dishes/{dish_id}/safety-check"))
        .json(&json!({ "allergies": ["dairy"] }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["is_safe"], true);
    assert!(body["unsafe_allergens"].as_array().unwrap().is_empty());
    assert_eq!(body["warning"], Value::Null);
}

#[tokio::test]
async fn safety_check_with_empty_list_is_safe() {
    let server = test_server().await;
    let dish_id = dish_id_by_query(&server, "Fish Curry").await;

    let response = server
        .post(&format!("/dishes/{dish_id}/safety-check"))
        .json(&json!({ "allergies": [] }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["is_safe"], true);
}

#[tokio::test]
async fn lists_tracked_allergens() {
    let server = test_server().await;

    let response = server.get("/allergens").await;

    response.assert_status_ok();
    let body: Value = response.json();
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 9);
    assert!(items.iter().any(|item| {
        item["key"] == "tree_nut" && item["label"] == "Tree Nut"
    }));
}

#[tokio::test]
async fn rejects_duplicate_registration() {
    let server = test_server().await;
    create_user(&server, "dup@example.com").await;

    let response = server
        .post("/users")
        .json(&json!({ "email": "dup@example.com" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["code"], "E_CONFLICT");
}

#[tokio::test]
async fn rejects_invalid_email() {
    let server = test_server().await;

    let response = server
        .post("/users")
        .json(&json!({ "email": "not-an-email" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn replaces_user_allergies_wholesale() {
    let server = test_server().await;
    let user_id = create_user(&server, "allergies@example.com").await;

    let response = server
        .put(&format!("/users/{user_id}/allergies"))
        .json(&json!({ "allergies": ["Milk", "Peanut"] }))
        .await;
    response.assert_status_ok();

    let response = server
        .put(&format!("/users/{user_id}/allergies"))
        .json(&json!({ "allergies": ["Fish"] }))
        .await;
    response.assert_status_ok();

    let body: Value = server.get(&format!("/users/{user_id}/allergies")).await.json();
    assert_eq!(body["allergies"], json!(["Fish"]));
}

#[tokio::test]
async fn allergy_mode_off_suppresses_warnings() {
    let server = test_server().await;
    let user_id = create_user(&server, "mode@example.com").await;
    let dish_id = dish_id_by_query(&server, "Fish Curry").await;

    server
        .put(&format!("/users/{user_id}/allergies"))
        .json(&json!({ "allergies": ["Fish"] }))
        .await
        .assert_status_ok();

    let body: Value = server
        .get(&format!("/users/{user_id}/dishes/{dish_id}/safety"))
        .await
        .json();
    assert_eq!(body["is_safe"], false);

    server
        .put(&format!("/users/{user_id}/allergy-mode"))
        .json(&json!({ "enabled": false }))
        .await
        .assert_status_ok();

    let body: Value = server
        .get(&format!("/users/{user_id}/dishes/{dish_id}/safety"))
        .await
        .json();
    assert_eq!(body["is_safe"], true);
    assert!(body["unsafe_allergens"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn cart_accumulates_and_updates_lines() {
    let server = test_server().await;
    let user_id = create_user(&server, "cart@example.com").await;
    let dish_id = dish_id_by_query(&server, "Naan").await;

    for _ in 0..2 {
        server
            .post(&format!("/users/{user_id}/cart/items"))
            .json(&json!({ "dish_id": dish_id }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let body: Value = server.get(&format!("/users/{user_id}/cart")).await.json();
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["items"][0]["quantity"], 2);
    assert_eq!(body["total_items"], 2);

    server
        .put(&format!("/users/{user_id}/cart/items/{dish_id}"))
        .json(&json!({ "quantity": 5 }))
        .await
        .assert_status_ok();

    let body: Value = server.get(&format!("/users/{user_id}/cart")).await.json();
    assert_eq!(body["items"][0]["quantity"], 5);

    server
        .put(&format!("/users/{user_id}/cart/items/{dish_id}"))
        .json(&json!({ "quantity": 0 }))
        .await
        .assert_status_ok();

    let body: Value = server.get(&format!("/users/{user_id}/cart")).await.json();
    assert!(body["items"].as_array().unwrap().is_empty());
    assert_eq!(body["total_items"], 0);
}

#[tokio::test]
async fn cart_rejects_unknown_dish() {
    let server = test_server().await;
    let user_id = create_user(&server, "cart-missing@example.com").await;

    let response = server
        .post(&format!("/users/{user_id}/cart/items"))
        .json(&json!({ "dish_id": "00000000-0000-0000-0000-000000000000" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn clear_cart_empties_all_lines() {
    let server = test_server().await;
    let user_id = create_user(&server, "clear@example.com").await;

    for query in ["Naan", "Plain Dosa"] {
        let dish_id = dish_id_by_query(&server, query).await;
        server
            .post(&format!("/users/{user_id}/cart/items"))
            .json(&json!({ "dish_id": dish_id }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    server
        .delete(&format!("/users/{user_id}/cart"))
        .await
        .assert_status_ok();

    let body: Value = server.get(&format!("/users/{user_id}/cart")).await.json();
    assert!(body["items"].as_array().unwrap().is_empty());
}
