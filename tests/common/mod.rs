#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use trips_api::{routes, AppState, Config};

pub const BOUNDARY: &str = "trips-test-boundary";

pub struct TestApp {
    pub router: Router,
    pub db: DatabaseConnection,
    pub upload_dir: TempDir,
}

pub struct TestUser {
    pub id: i64,
    pub token: String,
}

/// Fresh in-memory database, migrated, behind the real router.
pub async fn spawn_app() -> TestApp {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options).await.expect("connect sqlite");
    Migrator::up(&db, None).await.expect("run migrations");

    let upload_dir = tempfile::tempdir().expect("create upload dir");

    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: "test-secret".to_string(),
        jwt_expiration_hours: 1,
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        upload_dir: upload_dir.path().to_path_buf(),
        max_upload_bytes: 1024 * 1024,
        rate_limit_per_ms: 60,
        rate_limit_burst: 1000,
        admin_username: None,
        admin_password: None,
    };

    let state = AppState {
        db: db.clone(),
        config,
    };

    TestApp {
        router: routes::create_router(state),
        db,
        upload_dir,
    }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn json(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Value,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::delete(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    /// Sign up and log in, returning the new account's id and token.
    pub async fn register(&self, username: &str) -> TestUser {
        let credentials = json!({ "username": username, "password": "password123" });

        let (status, _) = self
            .json(Method::POST, "/api/users/signup", None, credentials.clone())
            .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = self
            .json(Method::POST, "/api/users/login", None, credentials)
            .await;
        assert_eq!(status, StatusCode::OK);

        TestUser {
            id: body["data"]["user"]["id"].as_i64().expect("user id"),
            token: body["data"]["token"].as_str().expect("token").to_string(),
        }
    }

    pub async fn create_trip(&self, user: &TestUser, body: Value) -> (StatusCode, Value) {
        self.json(Method::POST, "/api/trips", Some(&user.token), body)
            .await
    }
}

/// Multipart body with text fields and an optional `(filename, content type, bytes)` image.
pub fn multipart_body(fields: &[(&str, &str)], image: Option<(&str, &str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }

    if let Some((filename, content_type, bytes)) = image {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn multipart_request(token: &str, body: Vec<u8>) -> Request<Body> {
    Request::post("/api/trips/withImg")
        .header(header::HOST, "localhost:5000")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::from(body))
        .unwrap()
}
