//! # bookx Core
//!
//! Core library for the bookx recommendation engine.
//!
//! This crate provides the in-memory data structures and the lookup
//! pipeline:
//!
//! - [`CatalogIndex`] - Canonical titles with dense positions and fuzzy resolution
//! - [`SimilarityMatrix`] - Precomputed item-to-item similarity scores
//! - [`MetadataTable`] - Title-keyed display records, deduplicated first-wins
//! - [`TrendingList`] - Precomputed popular titles
//! - [`RecommendService`] - Orchestration: match, rank, hydrate, assemble
//!
//! ## Example
//!
//! ```rust
//! use bookx_core::{
//!     BookRecord, CatalogIndex, MetadataTable, RecommendConfig, RecommendOutcome,
//!     RecommendService, SimilarityMatrix, TrendingList,
//! };
//!
//! let catalog = CatalogIndex::new(vec!["Dune".to_string(), "Hobbit".to_string()]);
//! let matrix = SimilarityMatrix::from_rows(vec![vec![1.0, 0.4], vec![0.4, 1.0]]).unwrap();
//! let metadata = MetadataTable::new(vec![
//!     BookRecord::new("Dune", "Frank Herbert", ""),
//!     BookRecord::new("Hobbit", "J. R. R. Tolkien", ""),
//! ]);
//! let service = RecommendService::new(
//!     RecommendConfig::default(),
//!     catalog,
//!     matrix,
//!     metadata,
//!     TrendingList::new(Vec::new()),
//! )
//! .unwrap();
//!
//! match service.recommend("dune") {
//!     RecommendOutcome::Success { matched_title, recommendations } => {
//!         assert_eq!(matched_title, "Dune");
//!         assert_eq!(recommendations[0].title, "Hobbit");
//!     }
//!     outcome => panic!("unexpected outcome: {:?}", outcome),
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod metadata;
pub mod record;
pub mod service;
pub mod similarity;
pub mod trending;

pub use catalog::{CatalogIndex, MatchResult};
pub use error::{Error, Result};
pub use metadata::MetadataTable;
pub use record::BookRecord;
pub use service::{RecommendConfig, RecommendOutcome, RecommendService, RejectReason};
pub use similarity::{Neighbor, SimilarityMatrix};
pub use trending::TrendingList;
