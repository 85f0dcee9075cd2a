use std::sync::Arc;
use std::time::Duration;

use actix_web::cookie::Key;
use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use actix_web_flash_messages::{FlashMessagesFramework, Level, storage::CookieMessageStore};
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use tera::Tera;

use oracle_console::backend::http::BackendOptions;
use oracle_console::backend::{Backend, HttpBackend};
use oracle_console::models::config::ServerConfig;
use oracle_console::routes::{self, alert_level_to_str, console_path};

fn tera() -> Tera {
    Tera::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*")).unwrap()
}

fn backend(server: &ServerGuard) -> web::Data<dyn Backend> {
    let backend = HttpBackend::new(&BackendOptions {
        base_url: format!("{}/api", server.url()),
        cookie: None,
        timeout: Duration::from_secs(5),
    })
    .unwrap();
    let backend: Arc<dyn Backend> = Arc::new(backend);
    web::Data::from(backend)
}

fn server_config(server: &ServerGuard) -> ServerConfig {
    ServerConfig {
        domain: "localhost".to_string(),
        address: "127.0.0.1".to_string(),
        port: 8081,
        templates_dir: "templates/**/*".to_string(),
        secret: "0".repeat(64),
        api_base_url: format!("{}/api", server.url()),
        api_cookie: None,
        request_timeout_secs: 5,
        metrics_poll_interval_secs: 5,
    }
}

macro_rules! console_app {
    ($server:expr) => {
        test::init_service(
            App::new()
                .wrap(
                    FlashMessagesFramework::builder(
                        CookieMessageStore::builder(Key::from(&[0; 64])).build(),
                    )
                    .build(),
                )
                .configure(routes::configure)
                .app_data(web::Data::new(tera()))
                .app_data(backend(&$server))
                .app_data(web::Data::new(server_config(&$server))),
        )
        .await
    };
}

fn users_body(count: usize) -> String {
    let users: Vec<_> = (0..count)
        .map(|i| json!({"username": format!("USER{i:02}"), "accountLocked": i % 2 == 0}))
        .collect();
    json!(users).to_string()
}

#[::core::prelude::v1::test]
fn test_alert_level_to_str_mappings() {
    assert_eq!(alert_level_to_str(&Level::Error), "danger");
    assert_eq!(alert_level_to_str(&Level::Warning), "warning");
    assert_eq!(alert_level_to_str(&Level::Success), "success");
    assert_eq!(alert_level_to_str(&Level::Info), "info");
    assert_eq!(alert_level_to_str(&Level::Debug), "info");
}

#[::core::prelude::v1::test]
fn console_path_encodes_each_segment() {
    assert_eq!(console_path(&["users", "SCOTT"]), "/users/SCOTT");
    assert_eq!(console_path(&["users", "C##ADMIN"]), "/users/C%23%23ADMIN");
    assert_eq!(console_path(&["roles", "A/B?"]), "/roles/A%2FB%3F");
    assert_eq!(console_path(&["users", "ÜSER"]), "/users/%C3%9CSER");
}

#[actix_web::test]
async fn users_page_is_searched_and_paginated() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/users")
        .with_body(users_body(25))
        .create_async()
        .await;
    let app = console_app!(server);

    let req = test::TestRequest::get()
        .uri("/users?page=3")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("USER20"));
    assert!(body.contains("USER24"));
    assert!(!body.contains("USER19"));

    let req = test::TestRequest::get()
        .uri("/users?search=user1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("USER10"));
    assert!(!body.contains("USER20"));
    assert!(body.contains("10 item(s)"));
}

#[actix_web::test]
async fn backend_failure_renders_error_page() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/roles")
        .with_status(500)
        .with_body("ORA-12541: TNS:no listener")
        .create_async()
        .await;
    server
        .mock("GET", "/api/privileges")
        .with_body("[]")
        .create_async()
        .await;
    let app = console_app!(server);

    let req = test::TestRequest::get().uri("/roles").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("ORA-12541"));
}

#[actix_web::test]
async fn lock_user_redirects_back_to_list() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/users/SCOTT/lock")
        .with_status(200)
        .create_async()
        .await;
    let app = console_app!(server);

    let req = test::TestRequest::post()
        .uri("/users/SCOTT/lock")
        .to_request();
    let resp = test::call_service(&app, req).await;

    mock.assert_async().await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/users");
}

#[actix_web::test]
async fn invalid_username_never_reaches_backend() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let app = console_app!(server);

    let req = test::TestRequest::post()
        .uri("/users/add")
        .set_form([
            ("username", "1SCOTT"),
            ("password", "Tiger123!"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;

    mock.assert_async().await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
}

#[actix_web::test]
async fn grant_roles_posts_selected_checkboxes() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/users/SCOTT/roles/bulk")
        .match_body(Matcher::Json(json!([{"name": "CONNECT"}, {"name": "RESOURCE"}])))
        .with_status(200)
        .create_async()
        .await;
    let app = console_app!(server);

    let req = test::TestRequest::post()
        .uri("/users/SCOTT/roles/grant")
        .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
        .set_payload("roles=CONNECT&roles=RESOURCE")
        .to_request();
    let resp = test::call_service(&app, req).await;

    mock.assert_async().await;
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/users/SCOTT");
}

#[actix_web::test]
async fn metrics_endpoint_returns_json() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/performance/metrics")
        .with_body(
            json!({
                "cpuUsagePercent": 42.5,
                "memoryUsageMB": 1024.0,
                "pgaUsageMB": 256.0,
                "bufferCacheHitRatio": 99.1,
                "ioOperationsPerSecond": 120.0,
                "timestamp": "2025-01-31T12:00:00"
            })
            .to_string(),
        )
        .create_async()
        .await;
    let app = console_app!(server);

    let req = test::TestRequest::get()
        .uri("/performance/metrics")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["cpu_usage_percent"], json!(42.5));
    assert_eq!(body["timestamp"], json!("2025-01-31 12:00:00"));
}

#[actix_web::test]
async fn metrics_failure_is_bad_gateway() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/performance/metrics")
        .with_status(503)
        .create_async()
        .await;
    let app = console_app!(server);

    let req = test::TestRequest::get()
        .uri("/performance/metrics")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}

#[actix_web::test]
async fn unknown_simulation_is_rejected() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let app = console_app!(server);

    let req = test::TestRequest::post()
        .uri("/ha/simulate/meltdown")
        .to_request();
    let resp = test::call_service(&app, req).await;

    mock.assert_async().await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/ha");
}

#[actix_web::test]
async fn security_root_redirects_to_tde() {
    let server = Server::new_async().await;
    let app = console_app!(server);

    let req = test::TestRequest::get().uri("/security").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/security/tde"
    );
}

#[actix_web::test]
async fn dashboard_survives_partial_outage() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/users")
        .with_body(users_body(3))
        .create_async()
        .await;
    server
        .mock("GET", Matcher::Regex("^/api/(roles|privileges)$".into()))
        .with_status(500)
        .create_async()
        .await;
    let app = console_app!(server);

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn common_user_redirects_keep_hashes_encoded() {
    let mut server = Server::new_async().await;
    let save = server
        .mock("PUT", "/api/users/C%23%23ADMIN")
        .with_status(200)
        .create_async()
        .await;
    let grant = server
        .mock("POST", "/api/users/C%23%23ADMIN/roles/bulk")
        .match_body(Matcher::Json(json!([{"name": "C##DBA"}])))
        .with_status(200)
        .create_async()
        .await;
    let revoke = server
        .mock("DELETE", "/api/users/C%23%23ADMIN/roles/C%23%23DBA")
        .with_status(200)
        .create_async()
        .await;
    let app = console_app!(server);

    let requests = [
        test::TestRequest::post()
            .uri("/users/C%23%23ADMIN/save")
            .set_form([("default_tablespace", "USERS")])
            .to_request(),
        test::TestRequest::post()
            .uri("/users/C%23%23ADMIN/roles/grant")
            .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
            .set_payload("roles=C%23%23DBA")
            .to_request(),
        test::TestRequest::post()
            .uri("/users/C%23%23ADMIN/roles/C%23%23DBA/revoke")
            .to_request(),
    ];
    for req in requests {
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/users/C%23%23ADMIN"
        );
    }

    save.assert_async().await;
    grant.assert_async().await;
    revoke.assert_async().await;
}

#[actix_web::test]
async fn common_role_redirects_keep_hashes_encoded() {
    let mut server = Server::new_async().await;
    let revoke = server
        .mock("DELETE", "/api/roles/C%23%23DBA/privileges/CREATE%20SESSION")
        .with_status(200)
        .create_async()
        .await;
    let app = console_app!(server);

    let req = test::TestRequest::post()
        .uri("/roles/C%23%23DBA/privileges/CREATE%20SESSION/revoke")
        .to_request();
    let resp = test::call_service(&app, req).await;

    revoke.assert_async().await;
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/roles/C%23%23DBA"
    );
}

#[actix_web::test]
async fn ash_page_links_keep_awr_window() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/performance/awr")
        .match_query(Matcher::Any)
        .with_body("[]")
        .create_async()
        .await;
    let samples: Vec<_> = (0..25)
        .map(|i| json!({"SESSION_ID": i, "SESSION_STATE": "ON CPU", "TIME_WAITED": 0.0}))
        .collect();
    server
        .mock("GET", "/api/performance/ash")
        .with_body(json!(samples).to_string())
        .create_async()
        .await;
    let app = console_app!(server);

    let req = test::TestRequest::get()
        .uri("/performance?start=2024-01-01&end=2024-01-31")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();

    let links: Vec<&str> = body
        .split("href=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .filter(|href| href.starts_with("/performance?page="))
        .collect();
    assert!(!links.is_empty());
    assert!(
        links
            .iter()
            .all(|link| link.contains("start=2024-01-01") && link.contains("end=2024-01-31"))
    );
    assert!(!body.contains("Choose a window to load AWR snapshots."));
}
