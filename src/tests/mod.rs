pub mod support;

use std::sync::Arc;

use actix_web::{test, web, App};
use serde_json::{json, Value};

use crate::auth::application::services::AuthService;
use crate::rewards::application::services::{ListTasksService, UserService};
use crate::shared::api::custom_json_config;
use crate::tests::support::auth_helper::{token_provider, token_provider_data};
use crate::tests::support::in_memory::InMemoryUnitOfWork;
use crate::AppState;

fn real_state(uow: InMemoryUnitOfWork) -> web::Data<AppState> {
    web::Data::new(AppState {
        auth_use_cases: Arc::new(AuthService::new(uow.clone(), token_provider())),
        user_use_cases: Arc::new(UserService::new(uow.clone())),
        list_tasks_use_case: Arc::new(ListTasksService::new(uow)),
    })
}

macro_rules! send {
    ($app:expr, $req:expr) => {{
        let resp = test::call_service(&$app, $req.to_request()).await;
        let status = resp.status().as_u16();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

#[actix_web::test]
async fn register_complete_task_and_climb_leaderboard() {
    let uow = InMemoryUnitOfWork::seeded();
    let app = test::init_service(
        App::new()
            .app_data(real_state(uow.clone()))
            .app_data(token_provider_data())
            .app_data(custom_json_config())
            .configure(crate::init_routes),
    )
    .await;

    let (status, body) = send!(
        app,
        test::TestRequest::post().uri("/api/auth/register").set_json(json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "secret1"
        }))
    );
    assert_eq!(status, 201);
    let alice_id = body["data"]["user"]["id"].as_str().unwrap_or_default().to_string();

    let (status, body) = send!(
        app,
        test::TestRequest::post().uri("/api/auth/login").set_json(json!({
            "username": "alice",
            "password": "secret1"
        }))
    );
    assert_eq!(status, 200);
    let token = body["data"]["token"].as_str().unwrap_or_default().to_string();
    let auth = ("Authorization", format!("Bearer {token}"));

    let (status, _) = send!(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/users/{alice_id}/task/complete"))
            .insert_header(auth.clone())
            .set_json(json!({ "task_id": "1" }))
    );
    assert_eq!(status, 200);

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/users/{alice_id}/task/complete"))
            .insert_header(auth.clone())
            .set_json(json!({ "task_id": "1" }))
    );
    assert_eq!(status, 409);
    assert_eq!(body["error"], "Task already completed");

    let (status, body) = send!(
        app,
        test::TestRequest::get()
            .uri(&format!("/api/users/{alice_id}/status"))
            .insert_header(auth.clone())
    );
    assert_eq!(status, 200);
    assert_eq!(body["data"]["user"]["balance"], 100);
    assert_eq!(body["data"]["total_points"], 100);
    assert_eq!(body["data"]["completed_tasks"].as_array().map(Vec::len), Some(1));

    uow.insert_user("bob", 40);
    let (status, body) = send!(
        app,
        test::TestRequest::get()
            .uri("/api/users/leaderboard?limit=5")
            .insert_header(auth)
    );
    assert_eq!(status, 200);
    assert_eq!(body["data"]["leaderboard"][0]["username"], "alice");
    assert_eq!(body["data"]["leaderboard"][0]["rank"], 1);
    assert_eq!(body["data"]["leaderboard"][1]["rank"], 2);
}

#[actix_web::test]
async fn referrer_can_only_be_set_once() {
    let uow = InMemoryUnitOfWork::seeded();
    let alice = uow.insert_user("alice", 0);
    let bob = uow.insert_user("bob", 0);
    let carol = uow.insert_user("carol", 0);
    let app = test::init_service(
        App::new()
            .app_data(real_state(uow.clone()))
            .app_data(token_provider_data())
            .configure(crate::init_routes),
    )
    .await;
    let auth = support::auth_helper::bearer(alice, "alice");

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/users/{alice}/referrer"))
            .insert_header(auth.clone())
            .set_json(json!({ "referrer_id": alice.to_string() }))
    );
    assert_eq!(status, 400);
    assert_eq!(body["error"], "User cannot refer themselves");

    let (status, _) = send!(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/users/{alice}/referrer"))
            .insert_header(auth.clone())
            .set_json(json!({ "referrer_id": bob.to_string() }))
    );
    assert_eq!(status, 200);
    assert_eq!(uow.referrer_of(alice), Some(bob));

    let (status, _) = send!(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/users/{alice}/referrer"))
            .insert_header(auth)
            .set_json(json!({ "referrer_id": carol.to_string() }))
    );
    assert_eq!(status, 409);
    assert_eq!(uow.referrer_of(alice), Some(bob));
}

#[actix_web::test]
async fn public_and_unknown_routes() {
    let app = test::init_service(
        App::new()
            .app_data(real_state(InMemoryUnitOfWork::seeded()))
            .app_data(token_provider_data())
            .configure(crate::init_routes)
            .default_service(web::to(crate::not_found)),
    )
    .await;

    let (status, body) = send!(app, test::TestRequest::get().uri("/api/tasks"));
    assert_eq!(status, 200);
    assert_eq!(body["data"]["tasks"].as_array().map(Vec::len), Some(5));

    let (status, _) = send!(app, test::TestRequest::get().uri("/api/users/leaderboard"));
    assert_eq!(status, 401);

    let (status, body) = send!(app, test::TestRequest::get().uri("/api/nope"));
    assert_eq!(status, 404);
    assert_eq!(body["error"], "endpoint not found");
}
