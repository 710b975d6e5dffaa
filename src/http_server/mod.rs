//! # HTTP Server Module
//!
//! Axum server exposing the exercise CRUD API.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `GET /exercises` - List all exercises
//! - `GET|PUT|DELETE /exercise/:id` - Single exercise
//! - `POST /exercise` - Create an exercise

pub mod config;
pub mod exercise_routes;
pub mod observability_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use exercise_routes::{exercise_routes, ExerciseState};
pub use server::HttpServer;
