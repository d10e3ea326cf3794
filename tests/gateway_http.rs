//! Gateway tests against a fake PostgREST backend on an ephemeral port.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use elite_estates::config::BackendConfig;
use elite_estates::models::NewInquiry;
use elite_estates::{GatewayError, ListOptions, PropertyStore, SupabaseGateway};
use serde_json::{json, Value};

const KEY: &str = "anon-test-key";

#[derive(Debug, Clone)]
struct Recorded {
    path: &'static str,
    query: HashMap<String, String>,
    headers: HeaderMap,
    body: Option<Value>,
}

#[derive(Clone, Default)]
struct Backend {
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl Backend {
    fn record(
        &self,
        path: &'static str,
        query: HashMap<String, String>,
        headers: HeaderMap,
        body: Option<Value>,
    ) {
        self.requests.lock().unwrap().push(Recorded {
            path,
            query,
            headers,
            body,
        });
    }

    fn last(&self) -> Recorded {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

fn row(id: &str, price: f64) -> Value {
    json!({
        "id": id,
        "agent_id": "a-1",
        "title": format!("Listing {}", id),
        "description": "Nice",
        "property_type": "house",
        "listing_type": "sale",
        "price": price,
        "bedrooms": 3,
        "bathrooms": 2,
        "area": 140,
        "address": "1 Test St",
        "city": "Lux",
        "country": "LU",
        "latitude": 49.6,
        "longitude": 6.1,
        "image_url": "https://img/1.jpg",
        "features": ["Garden"],
        "status": "available",
        "featured": true,
        "created_at": "2024-02-01T08:00:00+00:00",
        "updated_at": "2024-02-01T08:00:00+00:00"
    })
}

async fn properties(
    State(backend): State<Backend>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Json<Value> {
    let id = query.get("id").cloned();
    backend.record("properties", query, headers, None);

    let rows = match id.as_deref() {
        None => {
            let mut bare = row("p-2", 90_000.0);
            bare["features"] = Value::Null;
            json!([row("p-1", 250_000.0), row("bad", -10.0), bare])
        }
        Some("eq.p-1") => {
            let mut joined = row("p-1", 250_000.0);
            joined["agents"] = json!({
                "id": "a-1",
                "name": "Ines Lopes",
                "email": "ines@example.com",
                "phone": "+352 555",
                "avatar_url": "",
                "bio": "",
                "created_at": "2023-01-01T00:00:00Z"
            });
            json!([joined])
        }
        Some("eq.dup") => json!([row("dup", 1.0), row("dup", 2.0)]),
        Some(_) => json!([]),
    };
    Json(rows)
}

async fn images(
    State(backend): State<Backend>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    let broken = query.get("property_id").map(String::as_str) == Some("eq.broken");
    backend.record("property_images", query, headers, None);

    if broken {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "invalid input syntax" })),
        );
    }
    (
        StatusCode::OK,
        Json(json!([{
            "id": "i-1",
            "property_id": "p-1",
            "image_url": "https://img/1b.jpg",
            "order_index": 1,
            "created_at": "2024-02-01T08:00:00Z"
        }])),
    )
}

async fn inquiries(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let fail = body["name"] == "fail";
    backend.record("inquiries", HashMap::new(), headers, Some(body));

    if fail {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "insert failed" })),
        )
    } else {
        (StatusCode::CREATED, Json(Value::Null))
    }
}

async fn spawn_backend() -> (SupabaseGateway, Backend) {
    let backend = Backend::default();
    let app = Router::new()
        .route("/rest/v1/properties", get(properties))
        .route("/rest/v1/property_images", get(images))
        .route("/rest/v1/inquiries", axum::routing::post(inquiries))
        .with_state(backend.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let gateway = SupabaseGateway::new(
        &BackendConfig {
            url: format!("http://{}", addr),
            anon_key: KEY.to_string(),
        },
        Duration::from_secs(5),
    )
    .unwrap();

    (gateway, backend)
}

fn assert_authorized(recorded: &Recorded) {
    assert_eq!(recorded.headers["apikey"], KEY);
    assert_eq!(recorded.headers["authorization"], format!("Bearer {}", KEY));
}

#[tokio::test]
async fn featured_listing_query_shape() {
    let (gateway, backend) = spawn_backend().await;

    let properties = gateway
        .list_available_properties(&ListOptions::featured(6))
        .await
        .unwrap();

    let request = backend.last();
    assert_eq!(request.path, "properties");
    assert_authorized(&request);
    assert_eq!(request.query["select"], "*");
    assert_eq!(request.query["status"], "eq.available");
    assert_eq!(request.query["featured"], "eq.true");
    assert_eq!(request.query["limit"], "6");
    assert!(!request.query.contains_key("order"));

    // the negative-price row is dropped, order kept
    let ids: Vec<_> = properties.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p-1", "p-2"]);

    // a null features column decodes as no features
    assert_eq!(properties[0].features, vec!["Garden"]);
    assert!(properties[1].features.is_empty());
}

#[tokio::test]
async fn newest_first_query_shape() {
    let (gateway, backend) = spawn_backend().await;

    gateway
        .list_available_properties(&ListOptions::newest_first())
        .await
        .unwrap();

    let request = backend.last();
    assert_eq!(request.query["order"], "created_at.desc");
    assert!(!request.query.contains_key("featured"));
    assert!(!request.query.contains_key("limit"));
}

#[tokio::test]
async fn lookup_embeds_agent() {
    let (gateway, backend) = spawn_backend().await;

    let found = gateway.get_property_with_agent("p-1").await.unwrap().unwrap();
    assert_eq!(found.property.id, "p-1");
    assert_eq!(found.agent.unwrap().name, "Ines Lopes");
    assert_eq!(backend.last().query["select"], "*,agents(*)");
}

#[tokio::test]
async fn lookup_of_unknown_id_is_none() {
    let (gateway, _backend) = spawn_backend().await;
    assert!(gateway.get_property_with_agent("nope").await.unwrap().is_none());
}

#[tokio::test]
async fn lookup_with_duplicate_rows_is_an_error() {
    let (gateway, _backend) = spawn_backend().await;
    let err = gateway.get_property_with_agent("dup").await.unwrap_err();
    assert!(matches!(err, GatewayError::MultipleRows { count: 2, .. }));
}

#[tokio::test]
async fn images_are_requested_in_display_order() {
    let (gateway, backend) = spawn_backend().await;

    let images = gateway.list_property_images("p-1").await.unwrap();
    assert_eq!(images.len(), 1);
    assert_eq!(backend.last().query["order"], "order_index.asc");
}

#[tokio::test]
async fn backend_error_message_is_surfaced() {
    let (gateway, _backend) = spawn_backend().await;

    match gateway.list_property_images("broken").await {
        Err(GatewayError::Backend { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "invalid input syntax");
        }
        other => panic!("expected backend error, got {:?}", other),
    }
}

#[tokio::test]
async fn inquiry_payload_and_failure() {
    let (gateway, backend) = spawn_backend().await;

    let inquiry = NewInquiry::new("p-1", "Ana", "ana@example.com", "555", "Viewing Friday?");
    gateway.create_inquiry(&inquiry).await.unwrap();

    let request = backend.last();
    assert_eq!(request.path, "inquiries");
    assert_authorized(&request);
    assert_eq!(request.headers["prefer"], "return=minimal");
    assert_eq!(
        request.body,
        Some(json!({
            "property_id": "p-1",
            "name": "Ana",
            "email": "ana@example.com",
            "phone": "555",
            "message": "Viewing Friday?",
            "status": "new"
        }))
    );

    let failing = NewInquiry::new("p-1", "fail", "x@example.com", "1", "hi");
    let err = gateway.create_inquiry(&failing).await.unwrap_err();
    assert!(matches!(err, GatewayError::Backend { status: 500, .. }));
}

#[tokio::test]
async fn unreachable_backend_is_an_http_error() {
    let gateway = SupabaseGateway::new(
        &BackendConfig {
            url: "http://127.0.0.1:9".to_string(),
            anon_key: KEY.to_string(),
        },
        Duration::from_secs(2),
    )
    .unwrap();

    let err = gateway
        .list_available_properties(&ListOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::Http(_)));
}
