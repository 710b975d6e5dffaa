//! Exercise HTTP Routes
//!
//! CRUD endpoints over the exercise store.
//!
//! Bodies are taken as raw bytes and decoded here, so clients need not send
//! a `Content-Type` header and malformed JSON maps onto our own error body.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::de::DeserializeOwned;

use crate::exercise::{
    id, Exercise, ExerciseError, ExerciseResult, ExerciseStore, ExerciseUpdate,
    InMemoryExerciseStore, IndentedJson, MessageResponse, NewExercise,
};

// ==================
// Shared State
// ==================

/// Exercise state shared across handlers
pub struct ExerciseState {
    pub store: Arc<dyn ExerciseStore>,
}

impl ExerciseState {
    /// Empty in-memory store
    pub fn new() -> Self {
        Self::with_store(Arc::new(InMemoryExerciseStore::new()))
    }

    /// In-memory store seeded with `count` demo exercises
    pub fn seeded(count: usize) -> Self {
        Self::with_store(Arc::new(InMemoryExerciseStore::with_seed(count)))
    }

    pub fn with_store(store: Arc<dyn ExerciseStore>) -> Self {
        Self { store }
    }
}

impl Default for ExerciseState {
    fn default() -> Self {
        Self::new()
    }
}

// ==================
// Router
// ==================

/// Create exercise routes
pub fn exercise_routes(state: Arc<ExerciseState>) -> Router {
    Router::new()
        .route("/exercises", get(list_exercises))
        .route("/exercise", post(create_exercise))
        .route(
            "/exercise/:id",
            get(get_exercise)
                .put(update_exercise)
                .delete(delete_exercise),
        )
        .with_state(state)
}

fn parse_body<T: DeserializeOwned>(body: &[u8]) -> ExerciseResult<T> {
    serde_json::from_slice(body).map_err(|e| ExerciseError::InvalidBody(e.to_string()))
}

// ==================
// Handlers
// ==================

async fn list_exercises(
    State(state): State<Arc<ExerciseState>>,
) -> ExerciseResult<IndentedJson<Vec<Exercise>>> {
    Ok(IndentedJson(state.store.list()?))
}

async fn get_exercise(
    State(state): State<Arc<ExerciseState>>,
    Path(raw): Path<String>,
) -> ExerciseResult<IndentedJson<Exercise>> {
    Ok(IndentedJson(state.store.get(&raw)?))
}

async fn create_exercise(
    State(state): State<Arc<ExerciseState>>,
    body: Bytes,
) -> ExerciseResult<(StatusCode, IndentedJson<Exercise>)> {
    // A bare `null` body behaves like `{}`.
    let new = parse_body::<Option<NewExercise>>(&body)?.unwrap_or_default();
    let created = state.store.create(new.title)?;
    Ok((StatusCode::CREATED, IndentedJson(created)))
}

/// Replies with the record as it was before the update.
async fn update_exercise(
    State(state): State<Arc<ExerciseState>>,
    Path(raw): Path<String>,
    body: Bytes,
) -> ExerciseResult<IndentedJson<Exercise>> {
    // Identifier format is checked before the body is looked at; the store
    // repeats the check together with the parse.
    id::validate(&raw)?;
    let changes = parse_body::<Option<ExerciseUpdate>>(&body)?.unwrap_or_default();
    let previous = state.store.update(&raw, changes)?;
    Ok(IndentedJson(previous))
}

async fn delete_exercise(
    State(state): State<Arc<ExerciseState>>,
    Path(raw): Path<String>,
) -> Response {
    // Delete replies are compact JSON, unlike the other endpoints.
    match state.store.delete(&raw) {
        Ok(()) => (StatusCode::OK, Json(MessageResponse::ok())).into_response(),
        Err(err) => {
            tracing::debug!(error = %err, id = %raw, "delete rejected");
            (err.status_code(), Json(MessageResponse::from(&err))).into_response()
        }
    }
}
