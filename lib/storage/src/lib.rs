//! Model-file loading and boot sequencing for the bookx recommendation
//! engine.
//!
//! The engine's four tables (catalog, similarity matrix, metadata rows,
//! trending list) are produced offline and shipped as static files. This
//! crate owns their on-disk layout, the one-time load into a
//! [`bookx_core::RecommendService`], and the load-once guard that keeps
//! concurrent first requests from racing the initialization.

pub mod handle;
pub mod loader;
pub mod model;

pub use handle::ServiceHandle;
pub use loader::ModelLoader;
pub use model::{MatrixData, ModelBundle};
