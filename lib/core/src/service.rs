use crate::catalog::{CatalogIndex, MatchResult};
use crate::metadata::MetadataTable;
use crate::record::BookRecord;
use crate::similarity::SimilarityMatrix;
use crate::trending::TrendingList;
use crate::{Error, Result};
use tracing::{debug, error};

/// Tunables for query resolution and ranking
#[derive(Debug, Clone)]
pub struct RecommendConfig {
    /// Minimum similarity ratio for accepting a fuzzy title match
    pub match_threshold: f64,
    /// Number of neighbors returned per matched title
    pub neighbor_count: usize,
    /// Number of fallback suggestions when no title matches
    pub suggestion_limit: usize,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            match_threshold: 0.7,
            neighbor_count: 4,
            suggestion_limit: 10,
        }
    }
}

/// Why a recommendation request was rejected
#[derive(Debug, Clone, PartialEq)]
pub enum RejectReason {
    /// Empty or whitespace-only query
    MissingInput,
    /// No catalog title close enough to the query
    NotFound { suggestions: Vec<String> },
    /// Backing tables missing or internally inconsistent
    ServiceUnavailable,
}

/// Terminal outcome of a recommendation request
#[derive(Debug, Clone, PartialEq)]
pub enum RecommendOutcome {
    /// An empty recommendation list is a valid result, not an error
    Success {
        matched_title: String,
        recommendations: Vec<BookRecord>,
    },
    Rejected(RejectReason),
}

/// The recommendation engine: fuzzy match, neighbor ranking, hydration
///
/// All tables are immutable after construction; `recommend` is a pure
/// function of its input and safe for unlimited concurrent callers.
#[derive(Debug)]
pub struct RecommendService {
    config: RecommendConfig,
    catalog: CatalogIndex,
    matrix: SimilarityMatrix,
    metadata: MetadataTable,
    trending: TrendingList,
}

impl RecommendService {
    /// Assemble a service over already-loaded tables.
    ///
    /// The catalog and the matrix must share one position space; a size
    /// mismatch here is rejected so that neighbor lookups cannot go out of
    /// range at request time.
    pub fn new(
        config: RecommendConfig,
        catalog: CatalogIndex,
        matrix: SimilarityMatrix,
        metadata: MetadataTable,
        trending: TrendingList,
    ) -> Result<Self> {
        if !(0.0..=1.0).contains(&config.match_threshold) {
            return Err(Error::InvalidConfig(format!(
                "match threshold must be within [0, 1], got {}",
                config.match_threshold
            )));
        }
        if config.neighbor_count == 0 {
            return Err(Error::InvalidConfig(
                "neighbor count must be at least 1".to_string(),
            ));
        }
        if matrix.size() != catalog.len() {
            return Err(Error::CatalogMismatch {
                titles: catalog.len(),
                matrix: matrix.size(),
            });
        }

        Ok(Self {
            config,
            catalog,
            matrix,
            metadata,
            trending,
        })
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &RecommendConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &CatalogIndex {
        &self.catalog
    }

    /// Recommend books similar to a user-supplied title.
    pub fn recommend(&self, raw_query: &str) -> RecommendOutcome {
        let query = raw_query.trim();
        if query.is_empty() {
            debug!("Rejecting empty query");
            return RecommendOutcome::Rejected(RejectReason::MissingInput);
        }

        let matched = match self.catalog.resolve(
            query,
            self.config.match_threshold,
            self.config.suggestion_limit,
        ) {
            MatchResult::Found(title) => title,
            MatchResult::NotFound { suggestions } => {
                debug!("No catalog title above threshold for '{}'", query);
                return RecommendOutcome::Rejected(RejectReason::NotFound { suggestions });
            }
        };

        match self.assemble(&matched) {
            Ok(recommendations) => {
                debug!(
                    "Assembled {} recommendations for '{}' (matched '{}')",
                    recommendations.len(),
                    query,
                    matched
                );
                RecommendOutcome::Success {
                    matched_title: matched,
                    recommendations,
                }
            }
            Err(e) => {
                error!("Recommendation assembly failed for '{}': {}", matched, e);
                RecommendOutcome::Rejected(RejectReason::ServiceUnavailable)
            }
        }
    }

    /// Neighbor ranking and hydration for an already-matched title.
    fn assemble(&self, matched: &str) -> Result<Vec<BookRecord>> {
        let position = self
            .catalog
            .position_of(matched)
            .ok_or_else(|| Error::TitleNotIndexed(matched.to_string()))?;

        let neighbors = self
            .matrix
            .neighbors(position, self.config.neighbor_count)?;

        let mut recommendations = Vec::with_capacity(neighbors.len());
        for neighbor in neighbors {
            let Some(title) = self.catalog.title_at(neighbor.position) else {
                debug!("Neighbor position {} has no title, skipping", neighbor.position);
                continue;
            };
            match self.metadata.hydrate(title) {
                Some(record) => recommendations.push(record.clone()),
                None => debug!("No metadata row for '{}', skipping", title),
            }
        }

        Ok(recommendations)
    }

    /// The precomputed trending list, most popular first.
    #[inline]
    #[must_use]
    pub fn top_trending(&self) -> &[BookRecord] {
        self.trending.top()
    }
}
