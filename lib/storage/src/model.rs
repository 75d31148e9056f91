use anyhow::{Context, Result};
use bookx_core::BookRecord;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File names expected inside a model directory
pub const CATALOG_FILE: &str = "catalog.json";
pub const BOOKS_FILE: &str = "books.json";
pub const TRENDING_FILE: &str = "trending.json";
pub const SIMILARITY_FILE: &str = "similarity.bin";

/// On-disk layout of the similarity matrix
#[derive(Debug, Serialize, Deserialize)]
pub struct MatrixData {
    pub size: usize,
    pub scores: Vec<f32>,
}

/// The four deserialized model tables
///
/// Produced offline by the model-build side; the engine only ever reads it.
#[derive(Debug)]
pub struct ModelBundle {
    /// Canonical titles in position order
    pub titles: Vec<String>,
    pub matrix: MatrixData,
    /// Raw metadata rows, duplicates allowed
    pub books: Vec<BookRecord>,
    pub trending: Vec<BookRecord>,
}

impl ModelBundle {
    /// Read all four model files from `dir`.
    pub fn read_dir(dir: &Path) -> Result<Self> {
        let titles: Vec<String> = read_json(&dir.join(CATALOG_FILE))?;
        let books: Vec<BookRecord> = read_json(&dir.join(BOOKS_FILE))?;
        let trending: Vec<BookRecord> = read_json(&dir.join(TRENDING_FILE))?;
        let matrix: MatrixData = read_bin(&dir.join(SIMILARITY_FILE))?;

        Ok(Self {
            titles,
            matrix,
            books,
            trending,
        })
    }

    /// Write the bundle out in the same layout `read_dir` expects.
    pub fn write_dir(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating model directory {}", dir.display()))?;

        write_json(&dir.join(CATALOG_FILE), &self.titles)?;
        write_json(&dir.join(BOOKS_FILE), &self.books)?;
        write_json(&dir.join(TRENDING_FILE), &self.trending)?;

        let path = dir.join(SIMILARITY_FILE);
        let bytes = bincode::serialize(&self.matrix)
            .with_context(|| format!("encoding {}", path.display()))?;
        fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;

        Ok(())
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("decoding {}", path.display()))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let bytes =
        serde_json::to_vec_pretty(value).with_context(|| format!("encoding {}", path.display()))?;
    fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))
}

fn read_bin<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    bincode::deserialize(&bytes).with_context(|| format!("decoding {}", path.display()))
}
