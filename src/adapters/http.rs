use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::domain::model::RosterSnapshot;
use crate::domain::ports::RosterStore;
use crate::utils::error::{Result, RosterError};

pub type SharedStore = Arc<dyn RosterStore>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

pub type QueryPairs = std::result::Result<Query<Vec<(String, String)>>, QueryRejection>;

/// Pulls `email` out of the query string. A repeated key resolves to its
/// last value; a malformed query string becomes an `InvalidInput` error.
fn email_param(query: QueryPairs) -> Result<String> {
    let Query(pairs) = query.map_err(|rejection| RosterError::InvalidInput {
        field: "query".to_string(),
        reason: rejection.body_text(),
    })?;

    match pairs.into_iter().rev().find(|(key, _)| key == "email") {
        Some((_, email)) if !email.is_empty() => Ok(email),
        _ => Err(RosterError::InvalidInput {
            field: "email".to_string(),
            reason: "query parameter is required".to_string(),
        }),
    }
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        let status = match &self {
            RosterError::NotFound { .. } => StatusCode::NOT_FOUND,
            RosterError::AlreadyEnrolled { .. }
            | RosterError::NotEnrolled { .. }
            | RosterError::CapacityExceeded { .. } => StatusCode::BAD_REQUEST,
            RosterError::InvalidInput { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorBody {
            detail: self.user_friendly_message(),
        };
        (status, Json(body)).into_response()
    }
}

/// Routes for the roster API. The store is injected so each caller (and
/// each test) can own an isolated instance.
pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/activities") }))
        .route("/health", get(health_handler))
        .route("/activities", get(list_activities_handler))
        .route("/activities/{activity_name}/signup", post(signup_handler))
        .route(
            "/activities/{activity_name}/unregister",
            delete(unregister_handler),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        .with_state(store)
}

/// Serves the router on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, store: SharedStore, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(store))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

pub async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn list_activities_handler(State(store): State<SharedStore>) -> Json<RosterSnapshot> {
    Json(store.list())
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    State(store): State<SharedStore>,
    query: QueryPairs,
) -> Result<Json<MessageResponse>> {
    let email = email_param(query)?;
    match store.enroll(&activity_name, &email) {
        Ok(enrollment) => {
            info!("✅ {} signed up for {}", enrollment.email, enrollment.activity);
            Ok(Json(MessageResponse {
                message: enrollment.signup_message(),
            }))
        }
        Err(e) => {
            warn!("Signup rejected: {}", e);
            Err(e)
        }
    }
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    State(store): State<SharedStore>,
    query: QueryPairs,
) -> Result<Json<MessageResponse>> {
    let email = email_param(query)?;
    match store.withdraw(&activity_name, &email) {
        Ok(enrollment) => {
            info!("✅ {} unregistered from {}", enrollment.email, enrollment.activity);
            Ok(Json(MessageResponse {
                message: enrollment.unregister_message(),
            }))
        }
        Err(e) => {
            warn!("Unregister rejected: {}", e);
            Err(e)
        }
    }
}
