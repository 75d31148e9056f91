use crate::loader::ModelLoader;
use bookx_core::{BookRecord, Error, RecommendOutcome, RecommendService, RejectReason, Result};
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::{error, info};

/// Load-once access to the recommendation service
///
/// The first call through the handle performs the model load; concurrent
/// first callers block on the same initialization rather than loading
/// twice. A failed load is sticky: the handle stays unavailable until the
/// process restarts with a fresh handle, and is never retried mid-request.
pub struct ServiceHandle {
    loader: ModelLoader,
    service: OnceCell<Option<Arc<RecommendService>>>,
}

impl ServiceHandle {
    #[must_use]
    pub fn new(loader: ModelLoader) -> Self {
        Self {
            loader,
            service: OnceCell::new(),
        }
    }

    /// The loaded service, or `None` if the load failed.
    pub fn service(&self) -> Option<Arc<RecommendService>> {
        self.service
            .get_or_init(|| match self.loader.load() {
                Ok(service) => {
                    info!(
                        "Recommendation model ready ({} titles)",
                        service.catalog().len()
                    );
                    Some(Arc::new(service))
                }
                Err(e) => {
                    error!(
                        "Failed to load recommendation model from {}: {}",
                        self.loader.data_dir().display(),
                        e
                    );
                    None
                }
            })
            .clone()
    }

    /// Whether the model loaded successfully; triggers the load on first call.
    pub fn is_available(&self) -> bool {
        self.service().is_some()
    }

    /// Recommend books similar to a user-supplied title.
    pub fn recommend(&self, raw_query: &str) -> RecommendOutcome {
        match self.service() {
            Some(service) => service.recommend(raw_query),
            None => RecommendOutcome::Rejected(RejectReason::ServiceUnavailable),
        }
    }

    /// The precomputed trending list, most popular first.
    pub fn top_trending(&self) -> Result<Vec<BookRecord>> {
        match self.service() {
            Some(service) => Ok(service.top_trending().to_vec()),
            None => Err(Error::ModelNotLoaded),
        }
    }
}
