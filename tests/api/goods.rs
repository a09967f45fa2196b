use shop_api::models::{Good, GoodData};

use crate::helpers::TestApp;

fn kettle() -> GoodData {
    GoodData{
        name: "Kettle".into(),
        description: "Electric kettle, 1.7 l".into(),
        price: 24.99
    }
}

#[actix_web::test]
async fn good_crud_round_trip(){
    let app = TestApp::spawn_app().await;

    let created: Good = app.post("/goods/", &kettle()).await.json().await.unwrap();
    assert_eq!(created, kettle().into_good(created.id));

    let fetched: Good = app.get_json(&format!("/goods/{}", created.id)).await;
    assert_eq!(fetched, created);

    let replacement = GoodData{
        name: "Teapot".into(),
        description: "Porcelain".into(),
        price: 12.0
    };
    let response = app.put(&format!("/goods/{}", created.id), &replacement).await;
    assert_eq!(response.status().as_u16(), 200);

    let fetched: Good = app.get_json(&format!("/goods/{}", created.id)).await;
    assert_eq!(fetched, replacement.into_good(created.id));

    let response = app.delete(&format!("/goods/{}", created.id)).await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.json::<serde_json::Value>().await.unwrap(),
        serde_json::json!({"message": "Good deleted successfully"})
    );

    let goods: Vec<Good> = app.get_json("/goods/").await;
    assert!(goods.is_empty());
}

#[actix_web::test]
async fn negative_price_is_stored_as_given(){
    let app = TestApp::spawn_app().await;

    let mut good = kettle();
    good.price = -10.5;

    let created: Good = app.post("/goods/", &good).await.json().await.unwrap();
    let fetched: Good = app.get_json(&format!("/goods/{}", created.id)).await;

    assert_eq!(fetched.price, -10.5);
}

#[actix_web::test]
async fn description_over_500_chars_is_rejected(){
    let app = TestApp::spawn_app().await;

    let mut good = kettle();
    good.description = "x".repeat(501);

    let response = app.post("/goods/", &good).await;
    assert_eq!(response.status().as_u16(), 422);

    let goods: Vec<Good> = app.get_json("/goods/").await;
    assert!(goods.is_empty());
}

#[actix_web::test]
async fn missing_good_is_not_found(){
    let app = TestApp::spawn_app().await;

    assert_eq!(app.get("/goods/1").await.status().as_u16(), 404);
    assert_eq!(app.put("/goods/1", &kettle()).await.status().as_u16(), 404);
    assert_eq!(app.delete("/goods/1").await.status().as_u16(), 404);
}
