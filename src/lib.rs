//! # bookx
//!
//! An in-memory book recommendation engine.
//!
//! bookx resolves a free-text title to a canonical catalog entry with fuzzy
//! matching, ranks that entry's nearest neighbors from a precomputed
//! item-similarity matrix, and hydrates each neighbor into a display record.
//! A curated trending list is served alongside. All model tables are loaded
//! once at boot and read-only afterwards, so the query path is lock-free and
//! safe for unlimited concurrent callers.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bookx::prelude::*;
//!
//! let handle = ServiceHandle::new(ModelLoader::new("./data"));
//!
//! match handle.recommend("harry poter") {
//!     RecommendOutcome::Success { matched_title, recommendations } => {
//!         println!("because you liked {}:", matched_title);
//!         for book in recommendations {
//!             println!("  {} - {}", book.title, book.author);
//!         }
//!     }
//!     RecommendOutcome::Rejected(reason) => {
//!         println!("no recommendations: {:?}", reason);
//!     }
//! }
//! ```
//!
//! ## Crate Structure
//!
//! bookx is composed of two crates:
//!
//! - `bookx-core` - In-memory tables and the lookup pipeline (catalog index,
//!   similarity matrix, metadata table, trending list, resolver)
//! - `bookx-storage` - Model-file layout, one-time loading, and the
//!   load-once service handle
//!
//! ## Outcomes
//!
//! Every failure on the query path is a typed value, never a panic:
//! [`RecommendOutcome::Rejected`] carries a [`RejectReason`] the embedding
//! layer can render (missing input, no match with suggestions, service
//! unavailable), and an empty recommendation list is an ordinary
//! [`RecommendOutcome::Success`].

// Re-export core types
pub use bookx_core::{
    BookRecord, CatalogIndex, Error, MatchResult, MetadataTable, Neighbor, RecommendConfig,
    RecommendOutcome, RecommendService, RejectReason, Result, SimilarityMatrix, TrendingList,
};

// Re-export storage
pub use bookx_storage::{MatrixData, ModelBundle, ModelLoader, ServiceHandle};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BookRecord, CatalogIndex, Error, MatchResult, MetadataTable, ModelBundle, ModelLoader,
        RecommendConfig, RecommendOutcome, RecommendService, RejectReason, Result, ServiceHandle,
        SimilarityMatrix, TrendingList,
    };
}
