//! # Exercise Module
//!
//! The exercise record, identifier validation, the in-memory collection
//! store, and the errors and response bodies shared with the HTTP layer.

pub mod errors;
pub mod id;
pub mod model;
pub mod response;
pub mod store;

pub use errors::{ExerciseError, ExerciseResult};
pub use model::{Exercise, ExerciseUpdate, MessageResponse, NewExercise};
pub use response::IndentedJson;
pub use store::{ExerciseStore, InMemoryExerciseStore};
