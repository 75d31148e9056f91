use crate::model::ModelBundle;
use bookx_core::{
    CatalogIndex, Error, MetadataTable, RecommendConfig, RecommendService, Result,
    SimilarityMatrix, TrendingList,
};
use std::path::{Path, PathBuf};
use tracing::info;

/// Reads a model directory and assembles a ready [`RecommendService`]
pub struct ModelLoader {
    data_dir: PathBuf,
    config: RecommendConfig,
}

impl ModelLoader {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            config: RecommendConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: RecommendConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// One-shot load of the four tables into a service.
    ///
    /// File and decode failures come back as [`Error::Storage`]; shape and
    /// configuration problems keep their own typed variants.
    pub fn load(&self) -> Result<RecommendService> {
        let bundle = ModelBundle::read_dir(&self.data_dir)
            .map_err(|e| Error::Storage(format!("{:#}", e)))?;

        info!(
            "Loaded model bundle from {}: {} titles, {} metadata rows, {} trending entries",
            self.data_dir.display(),
            bundle.titles.len(),
            bundle.books.len(),
            bundle.trending.len()
        );

        let catalog = CatalogIndex::new(bundle.titles);
        let matrix = SimilarityMatrix::new(bundle.matrix.size, bundle.matrix.scores)?;
        let metadata = MetadataTable::new(bundle.books);
        let trending = TrendingList::new(bundle.trending);

        RecommendService::new(self.config.clone(), catalog, matrix, metadata, trending)
    }
}
