use diesel::{QueryDsl, RunQueryDsl};
use shop_api::{models::{User, UserData}, routes::{ErrorBody, MessageResponse}, schema::users};

use crate::helpers::TestApp;

fn ann() -> serde_json::Value {
    serde_json::json!({
        "first_name": "Ann",
        "second_name": "Lee",
        "email": "a@x.com",
        "password": "pw"
    })
}

fn users_in_db(app: &TestApp) -> i64 {
    let mut conn = app.pool.get().unwrap();
    users::table.count().get_result::<i64>(&mut conn).unwrap()
}

#[actix_web::test]
async fn post_user_returns_record_with_generated_id(){
    let app = TestApp::spawn_app().await;

    let response = app.post("/users/", &ann()).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({
        "id": 1,
        "first_name": "Ann",
        "second_name": "Lee",
        "email": "a@x.com",
        "password": "pw"
    }));

    let fetched: serde_json::Value = app.get_json("/users/1").await;
    assert_eq!(fetched, body);
}

#[actix_web::test]
async fn created_ids_are_never_reused(){
    let app = TestApp::spawn_app().await;

    let first: User = app.post("/users/", &ann()).await.json().await.unwrap();
    let second: User = app.post("/users/", &ann()).await.json().await.unwrap();
    assert_ne!(first.id, second.id);

    app.delete(&format!("/users/{}", second.id)).await;
    let third: User = app.post("/users/", &ann()).await.json().await.unwrap();

    assert!(third.id > second.id);
}

#[actix_web::test]
async fn duplicate_users_are_accepted(){
    let app = TestApp::spawn_app().await;

    app.post("/users/", &ann()).await;
    app.post("/users/", &ann()).await;

    let users: Vec<User> = app.get_json("/users/").await;
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].email, users[1].email);
}

#[actix_web::test]
async fn get_users_lists_every_row(){
    let app = TestApp::spawn_app().await;

    let users: Vec<User> = app.get_json("/users/").await;
    assert!(users.is_empty());

    for i in 0..3 {
        let user = UserData{
            first_name: format!("Name{}", i),
            second_name: "Second".into(),
            email: format!("{}@mail.com", i),
            password: "secret".into()
        };
        app.post("/users/", &user).await;
    }

    let users: Vec<User> = app.get_json("/users/").await;
    let names: Vec<&str> = users.iter().map(|u| u.first_name.as_str()).collect();
    assert_eq!(names, vec!["Name0", "Name1", "Name2"]);
}

#[actix_web::test]
async fn put_user_replaces_all_fields(){
    let app = TestApp::spawn_app().await;
    let created: User = app.post("/users/", &ann()).await.json().await.unwrap();

    let replacement = UserData{
        first_name: "Bob".into(),
        second_name: "Stone".into(),
        email: "bob@stone.io".into(),
        password: "hunter2".into()
    };

    let response = app.put(&format!("/users/{}", created.id), &replacement).await;
    assert_eq!(response.status().as_u16(), 200);

    let updated: User = response.json().await.unwrap();
    assert_eq!(updated, replacement.clone().into_user(created.id));

    let fetched: User = app.get_json(&format!("/users/{}", created.id)).await;
    assert_eq!(fetched, updated);
}

#[actix_web::test]
async fn put_user_without_every_field_is_rejected(){
    let app = TestApp::spawn_app().await;
    let created: User = app.post("/users/", &ann()).await.json().await.unwrap();

    let partial = serde_json::json!({ "first_name": "Only" });
    let response = app.put(&format!("/users/{}", created.id), &partial).await;
    assert_eq!(response.status().as_u16(), 422);

    let fetched: User = app.get_json(&format!("/users/{}", created.id)).await;
    assert_eq!(fetched, created);
}

#[actix_web::test]
async fn delete_user_removes_the_row(){
    let app = TestApp::spawn_app().await;
    let created: User = app.post("/users/", &ann()).await.json().await.unwrap();

    let response = app.delete(&format!("/users/{}", created.id)).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: MessageResponse = response.json().await.unwrap();
    assert_eq!(body.message, "User deleted successfully");

    let response = app.get(&format!("/users/{}", created.id)).await;
    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(users_in_db(&app), 0);
}

#[actix_web::test]
async fn missing_user_is_not_found(){
    let app = TestApp::spawn_app().await;

    let response = app.get("/users/42").await;
    assert_eq!(response.status().as_u16(), 404);
    let body: ErrorBody = response.json().await.unwrap();
    assert!(body.detail.contains("42"));

    let response = app.put("/users/42", &ann()).await;
    assert_eq!(response.status().as_u16(), 404);

    let response = app.delete("/users/42").await;
    assert_eq!(response.status().as_u16(), 404);

    assert_eq!(users_in_db(&app), 0);
}

#[actix_web::test]
async fn oversized_fields_are_rejected_with_422(){
    let app = TestApp::spawn_app().await;

    let test_cases = vec![
        ("first_name", "a".repeat(41)),
        ("second_name", "b".repeat(51)),
        ("email", format!("{}@x.com", "c".repeat(123))),
        ("password", "p".repeat(256))
    ];

    for (field, value) in test_cases {
        let mut body = ann();
        body[field] = serde_json::Value::String(value);

        let response = app.post("/users/", &body).await;
        assert_eq!(
            response.status().as_u16(),
            422,
            "The API did not reject an oversized {}",
            field
        );
    }

    assert_eq!(users_in_db(&app), 0);
}

#[actix_web::test]
async fn malformed_body_is_rejected_with_422(){
    let app = TestApp::spawn_app().await;

    let test_cases = vec![
        (serde_json::json!({}), "empty body"),
        (serde_json::json!({"first_name": "Ann", "second_name": "Lee", "email": "a@x.com"}), "missing password"),
        (serde_json::json!({"first_name": 1, "second_name": "Lee", "email": "a@x.com", "password": "pw"}), "number for a string")
    ];

    for (body, description) in test_cases {
        let response = app.post("/users/", &body).await;
        assert_eq!(
            response.status().as_u16(),
            422,
            "The API did not reject a payload with {}",
            description
        );
    }
}

#[actix_web::test]
async fn non_numeric_id_is_not_routed(){
    let app = TestApp::spawn_app().await;

    let response = app.get("/users/abc").await;
    assert_eq!(response.status().as_u16(), 404);
}
