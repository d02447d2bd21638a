use std::{collections::HashMap, sync::Arc};

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

/// A JSON document stored through `POST /resources`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Resource {
    pub id: Uuid,
    pub data: Value,
}

/// What `/echo` reports back about the request it received.
///
/// A header sent more than once is reported as an array of its values.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Echo {
    pub method: String,
    pub headers: Map<String, Value>,
    pub body: Value,
}

pub type Db = Arc<RwLock<HashMap<Uuid, Resource>>>;

pub const PLAIN_TEXT: &str = "this is not json";

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/resource", get(resource))
        .route("/echo", any(echo))
        .route("/status/{code}", get(status))
        .route("/text", get(text))
        .route("/empty", get(empty))
        .route("/resources", post(create_resource))
        .route("/resources/{id}", get(get_resource).delete(delete_resource))
        .fallback(not_found)
        .with_state(db)
        .layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "mock server listening");
    }
    axum::serve(listener, app()).await
}

fn not_found_body() -> Json<Value> {
    Json(json!({ "error": "Not found" }))
}

async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, not_found_body())
}

async fn resource() -> Json<Value> {
    Json(json!({ "result": "success" }))
}

async fn echo(method: Method, headers: HeaderMap, body: Bytes) -> Response {
    let headers = headers
        .keys()
        .map(|name| {
            let mut values: Vec<Value> = headers
                .get_all(name)
                .iter()
                .filter_map(|value| value.to_str().ok())
                .map(|value| Value::String(value.to_string()))
                .collect();
            let value = if values.len() == 1 {
                values.remove(0)
            } else {
                Value::Array(values)
            };
            (name.as_str().to_string(), value)
        })
        .collect();

    let body = if body.is_empty() {
        Value::Null
    } else {
        match serde_json::from_slice(&body) {
            Ok(value) => value,
            Err(err) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": format!("invalid JSON body: {err}") })),
                )
                    .into_response()
            }
        }
    };

    Json(Echo {
        method: method.to_string(),
        headers,
        body,
    })
    .into_response()
}

async fn status(Path(code): Path<u16>) -> Result<(StatusCode, Json<Value>), StatusCode> {
    let status = StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok((status, Json(json!({ "status": code }))))
}

async fn text() -> &'static str {
    PLAIN_TEXT
}

async fn empty() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn create_resource(State(db): State<Db>, Json(data): Json<Value>) -> (StatusCode, Json<Resource>) {
    let resource = Resource {
        id: Uuid::new_v4(),
        data,
    };
    db.write().await.insert(resource.id, resource.clone());
    (StatusCode::CREATED, Json(resource))
}

async fn get_resource(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Resource>, (StatusCode, Json<Value>)> {
    let resources = db.read().await;
    resources
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, not_found_body()))
}

async fn delete_resource(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Resource>, (StatusCode, Json<Value>)> {
    let mut resources = db.write().await;
    resources
        .remove(&id)
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, not_found_body()))
}
