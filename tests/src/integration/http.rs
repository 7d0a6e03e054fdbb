//! # HTTP Scenarios
//!
//! Multi-user scenarios driven through the gateway router, plus one smoke test
//! over a real socket.

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use cd_03_api_gateway::{GatewayConfig, GatewayService};
    use serde_json::{json, Value};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::sync::oneshot;
    use tower::ServiceExt;

    // =============================================================================
    // TEST CLIENT
    // =============================================================================

    struct Client {
        app: Router,
    }

    impl Client {
        fn new(config: GatewayConfig) -> Self {
            let service = GatewayService::in_memory(config).unwrap();
            Self {
                app: service.router(),
            }
        }

        async fn call(
            &self,
            method: Method,
            uri: &str,
            token: Option<&str>,
            body: Option<Value>,
        ) -> (StatusCode, Value) {
            let mut builder = Request::builder().method(method).uri(uri);
            if let Some(token) = token {
                builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
            }
            let body = match body {
                Some(v) => {
                    builder = builder.header(header::CONTENT_TYPE, "application/json");
                    Body::from(v.to_string())
                }
                None => Body::empty(),
            };
            let response = self
                .app
                .clone()
                .oneshot(builder.body(body).unwrap())
                .await
                .unwrap();
            let status = response.status();
            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
            (status, value)
        }

        async fn register(&self, username: &str) -> (StatusCode, Value) {
            self.call(
                Method::POST,
                "/users/register",
                None,
                Some(json!({
                    "first_name": "Http",
                    "last_name": "Tester",
                    "email": format!("{username}@example.com"),
                    "username": username,
                    "password": "Password1",
                })),
            )
            .await
        }

        /// Registers `username` and returns `(user_id, token)`.
        async fn sign_up(&self, username: &str) -> (u64, String) {
            let (status, user) = self.register(username).await;
            assert_eq!(status, StatusCode::OK);
            assert!(user.get("password_hash").is_none());

            let (status, body) = self
                .call(
                    Method::POST,
                    "/users/login",
                    None,
                    Some(json!({"username": username, "password": "Password1"})),
                )
                .await;
            assert_eq!(status, StatusCode::OK);
            (
                user["id"].as_u64().unwrap(),
                body["access_token"].as_str().unwrap().to_string(),
            )
        }
    }

    // =============================================================================
    // SCENARIOS
    // =============================================================================

    #[tokio::test]
    async fn test_duplicate_registration_conflicts() {
        let client = Client::new(GatewayConfig::default());
        client.sign_up("alice").await;

        let (status, body) = client.register("alice").await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["field"], "username");
    }

    #[tokio::test]
    async fn test_registration_rules_reported_per_field() {
        let client = Client::new(GatewayConfig::default());
        let (status, body) = client
            .call(
                Method::POST,
                "/users/register",
                None,
                Some(json!({
                    "first_name": "A",
                    "last_name": "B",
                    "email": "not-an-email",
                    "username": "someone",
                    "password": "Password1",
                })),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["field"], "email");
    }

    #[tokio::test]
    async fn test_wrong_password_is_unauthorized() {
        let client = Client::new(GatewayConfig::default());
        client.sign_up("alice").await;
        let (status, _) = client
            .call(
                Method::POST,
                "/users/login",
                None,
                Some(json!({"username": "alice", "password": "Password2"})),
            )
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_records_are_private_to_owner() {
        let client = Client::new(GatewayConfig::default());
        let (_, alice) = client.sign_up("alice").await;
        let (_, bob) = client.sign_up("bob").await;

        let (_, created) = client
            .call(
                Method::POST,
                "/calculations",
                Some(&alice),
                Some(json!({"type": "addition", "inputs": [1, 2, 3]})),
            )
            .await;
        let uri = format!("/calculations/{}", created["id"]);

        let (status, _) = client.call(Method::GET, &uri, Some(&bob), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = client.call(Method::DELETE, &uri, Some(&bob), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = client
            .call(Method::PUT, &uri, Some(&bob), Some(json!({"inputs": [0, 0]})))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, listed) = client.call(Method::GET, "/calculations", Some(&bob), None).await;
        assert_eq!(listed, json!([]));

        let (status, body) = client.call(Method::GET, &uri, Some(&alice), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], 6.0);
    }

    #[tokio::test]
    async fn test_reassign_record_over_http() {
        let client = Client::new(GatewayConfig::default());
        let (_, alice) = client.sign_up("alice").await;
        let (bob_id, bob) = client.sign_up("bob").await;

        let (_, created) = client
            .call(
                Method::POST,
                "/calculations",
                Some(&alice),
                Some(json!({"type": "modulus", "inputs": [17, 5]})),
            )
            .await;
        assert_eq!(created["result"], 2.0);
        let uri = format!("/calculations/{}", created["id"]);

        let (status, body) = client
            .call(Method::PUT, &uri, Some(&alice), Some(json!({"user_id": 999})))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["field"], "user_id");

        let (status, body) = client
            .call(Method::PUT, &uri, Some(&alice), Some(json!({"user_id": bob_id})))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user_id"], bob_id);

        let (status, _) = client.call(Method::GET, &uri, Some(&bob), None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_kind_only_update_to_division_rejected() {
        let client = Client::new(GatewayConfig::default());
        let (_, alice) = client.sign_up("alice").await;
        let (_, created) = client
            .call(
                Method::POST,
                "/calculations",
                Some(&alice),
                Some(json!({"type": "addition", "inputs": [4, 0]})),
            )
            .await;
        let uri = format!("/calculations/{}", created["id"]);

        let (status, body) = client
            .call(Method::PUT, &uri, Some(&alice), Some(json!({"type": "division"})))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["field"], "inputs");

        let (_, stored) = client.call(Method::GET, &uri, Some(&alice), None).await;
        assert_eq!(stored["type"], "addition");
        assert_eq!(stored["result"], 4.0);
    }

    #[tokio::test]
    async fn test_configured_operand_limit() {
        let mut config = GatewayConfig::default();
        config.limits.max_operands = 3;
        let client = Client::new(config);
        let (_, alice) = client.sign_up("alice").await;

        let (status, body) = client
            .call(
                Method::POST,
                "/calculations",
                Some(&alice),
                Some(json!({"type": "addition", "inputs": [1, 2, 3, 4]})),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["field"], "inputs");
    }

    #[tokio::test]
    async fn test_oversized_body_rejected() {
        let mut config = GatewayConfig::default();
        config.limits.max_body_bytes = 64;
        let client = Client::new(config);

        let inputs: Vec<u32> = (0..100).collect();
        let (status, _) = client
            .call(Method::POST, "/add", None, Some(json!({"a": 1, "b": 2, "pad": inputs})))
            .await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_health_over_socket() {
        let service = GatewayService::in_memory(GatewayConfig::default()).unwrap();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (stop_tx, stop_rx) = oneshot::channel::<()>();

        let server = tokio::spawn(async move {
            service
                .serve(listener, async move {
                    let _ = stop_rx.await;
                })
                .await
        });

        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        assert!(response.starts_with("HTTP/1.1 200 OK"), "{response}");
        assert!(response.contains("\"status\":\"ok\""));
        assert!(response.to_ascii_lowercase().contains("x-request-id:"));

        stop_tx.send(()).unwrap();
        assert!(server.await.unwrap().is_ok());
    }
}
