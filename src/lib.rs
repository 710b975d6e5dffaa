//! exercise-api - A minimal in-memory CRUD HTTP service for exercises

pub mod cli;
pub mod exercise;
pub mod http_server;
