use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

pub const DEFAULT_PREFIX: &str = "/admin-api";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

#[derive(Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_size")]
    pub size: u64,
    #[serde(flatten)]
    pub filters: Map<String, Value>,
}

#[derive(Serialize, Deserialize)]
pub struct PageBody {
    pub list: Vec<Product>,
    pub total: u64,
}

#[derive(Deserialize)]
pub struct ProductForm {
    pub id: Option<i64>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

#[derive(Deserialize)]
pub struct RemoveBody {
    pub ids: Vec<i64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UploadBody {
    pub url: String,
    pub name: String,
    pub size: usize,
}

fn default_page() -> u64 {
    1
}

fn default_size() -> u64 {
    10
}

#[derive(Default)]
pub struct Store {
    products: BTreeMap<i64, Product>,
    next_id: i64,
}

pub type Db = Arc<RwLock<Store>>;

/// Router mounted under [`DEFAULT_PREFIX`].
pub fn app() -> Router {
    app_with_prefix(DEFAULT_PREFIX)
}

/// Router mounted under `prefix`; an empty prefix serves from the root.
pub fn app_with_prefix(prefix: &str) -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    let routes = Router::new()
        .route("/product/page", post(page_products))
        .route("/product/saveOrEdit", post(save_or_edit_product))
        .route("/product/remove", post(remove_products))
        .route("/common/upload/file", post(upload_file))
        .route("/common/upload/video", post(upload_video))
        .with_state(db);

    let prefix = prefix.trim_end_matches('/');
    let router = if prefix.is_empty() {
        routes
    } else {
        Router::new().nest(prefix, routes)
    };
    router.layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, app()).await
}

pub async fn serve(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "mock admin server listening");
    }
    axum::serve(listener, app).await
}

fn matches_filters(product: &Product, filters: &Map<String, Value>) -> bool {
    filters
        .iter()
        .filter(|(_, wanted)| !wanted.is_null())
        .all(|(key, wanted)| product.fields.get(key) == Some(wanted))
}

async fn page_products(State(db): State<Db>, Json(query): Json<PageQuery>) -> Json<PageBody> {
    let store = db.read().await;
    let matching: Vec<&Product> = store
        .products
        .values()
        .filter(|p| matches_filters(p, &query.filters))
        .collect();
    let total = matching.len() as u64;
    let skip = query.page.max(1).saturating_sub(1).saturating_mul(query.size);
    let list = matching
        .into_iter()
        .skip(usize::try_from(skip).unwrap_or(usize::MAX))
        .take(usize::try_from(query.size).unwrap_or(usize::MAX))
        .cloned()
        .collect();
    Json(PageBody { list, total })
}

async fn save_or_edit_product(
    State(db): State<Db>,
    Json(form): Json<ProductForm>,
) -> Result<Json<Value>, StatusCode> {
    let mut store = db.write().await;
    match form.id {
        Some(id) => {
            let product = store.products.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
            product.fields.extend(form.fields);
            tracing::debug!(id, "product updated");
            Ok(Json(json!({ "id": id })))
        }
        None => {
            store.next_id += 1;
            let id = store.next_id;
            store.products.insert(id, Product { id, fields: form.fields });
            tracing::debug!(id, "product created");
            Ok(Json(json!({ "id": id })))
        }
    }
}

async fn remove_products(State(db): State<Db>, Json(body): Json<RemoveBody>) -> Json<Value> {
    let mut store = db.write().await;
    let removed = body
        .ids
        .iter()
        .filter(|id| store.products.remove(*id).is_some())
        .count();
    Json(json!({ "removed": removed }))
}

async fn upload_file(multipart: Multipart) -> Result<Json<UploadBody>, StatusCode> {
    accept_upload("file", multipart).await
}

async fn upload_video(multipart: Multipart) -> Result<Json<UploadBody>, StatusCode> {
    accept_upload("video", multipart).await
}

/// Reads the `file` field and describes where it would have been stored.
async fn accept_upload(kind: &str, mut multipart: Multipart) -> Result<Json<UploadBody>, StatusCode> {
    while let Some(field) = multipart.next_field().await.map_err(|_| StatusCode::BAD_REQUEST)? {
        if field.name() != Some("file") {
            continue;
        }
        let name = field.file_name().unwrap_or("upload").to_string();
        let data = field.bytes().await.map_err(|_| StatusCode::BAD_REQUEST)?;
        let upload = UploadBody {
            url: format!("/uploads/{kind}/{}/{name}", Uuid::new_v4()),
            name,
            size: data.len(),
        };
        tracing::debug!(kind, name = %upload.name, size = upload.size, "upload accepted");
        return Ok(Json(upload));
    }
    Err(StatusCode::BAD_REQUEST)
}
