#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use serde_json::{Value, json};

pub type Pairs = Vec<(String, String)>;
pub type Responder = fn(&Pairs) -> (StatusCode, String);

/// Stand-in for the content API, recording every list request it sees
pub struct MockApi {
    hits: AtomicUsize,
    queries: Mutex<Vec<Pairs>>,
    responder: Responder,
}

impl MockApi {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<Pairs> {
        self.queries.lock().unwrap().clone()
    }

    pub fn last_query(&self) -> Pairs {
        self.queries().pop().expect("no request recorded")
    }
}

async fn list_handler(
    State(api): State<Arc<MockApi>>,
    Query(pairs): Query<Pairs>,
) -> impl IntoResponse {
    api.hits.fetch_add(1, Ordering::SeqCst);
    let (status, body) = (api.responder)(&pairs);
    api.queries.lock().unwrap().push(pairs);
    (status, [(header::CONTENT_TYPE, "application/json")], body)
}

/// Start a mock API on an ephemeral port; returns its base URL
pub async fn start_server(responder: Responder) -> (String, Arc<MockApi>) {
    let api = Arc::new(MockApi {
        hits: AtomicUsize::new(0),
        queries: Mutex::new(Vec::new()),
        responder,
    });

    let app = Router::new()
        .route("/api/list", get(list_handler))
        .with_state(api.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/api", addr), api)
}

/// Base URL nothing is listening on
pub async fn closed_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api", addr)
}

pub fn pairs(expected: &[(&str, &str)]) -> Pairs {
    expected
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn param<'a>(pairs: &'a Pairs, key: &str) -> Option<&'a str> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}

pub fn media_item(title: &str) -> Value {
    json!({
        "id": 1,
        "type": "image",
        "title": title,
        "desc": "",
        "author": { "name": "Mira", "avatar": { "url": "/uploads/mira.png" } },
        "like": 7,
        "cover": { "url": "/uploads/cover.jpg", "width": 640, "height": 480 },
        "categories": [{ "name": "Travel" }]
    })
}

/// Two items, single page
pub fn ok_response(_pairs: &Pairs) -> (StatusCode, String) {
    let body = json!({
        "data": [media_item("Harbour"), media_item("Fern")],
        "meta": { "pagination": { "page": 1, "pageSize": 3, "pageCount": 1, "total": 2 } }
    });
    (StatusCode::OK, body.to_string())
}

/// One item per page, three pages in total
pub fn paged_response(pairs: &Pairs) -> (StatusCode, String) {
    let page: u32 = param(pairs, "pagination[page]")
        .and_then(|p| p.parse().ok())
        .unwrap_or(1);
    let body = json!({
        "data": [media_item(&format!("Item {}", page))],
        "meta": { "pagination": { "page": page, "pageSize": 1, "pageCount": 3, "total": 3 } }
    });
    (StatusCode::OK, body.to_string())
}

pub fn server_error(_pairs: &Pairs) -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": { "status": 500, "message": "Internal Server Error" } }).to_string(),
    )
}

pub fn bad_filter(_pairs: &Pairs) -> (StatusCode, String) {
    (
        StatusCode::BAD_REQUEST,
        json!({ "error": { "status": 400, "message": "Invalid key categories" } }).to_string(),
    )
}

pub fn malformed_body(_pairs: &Pairs) -> (StatusCode, String) {
    (StatusCode::OK, "<html>not json</html>".to_string())
}
