use crate::{Error, Result};

/// A ranked neighbor in the shared position space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub position: usize,
    pub score: f32,
}

/// Square, row-major matrix of item-to-item similarity scores
///
/// Row and column indices are catalog positions. The matrix is read-only
/// after construction.
#[derive(Debug)]
pub struct SimilarityMatrix {
    size: usize,
    scores: Vec<f32>,
}

impl SimilarityMatrix {
    pub fn new(size: usize, scores: Vec<f32>) -> Result<Self> {
        let expected = size * size;
        if scores.len() != expected {
            return Err(Error::MatrixShape {
                expected,
                actual: scores.len(),
            });
        }
        Ok(Self { size, scores })
    }

    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self> {
        let size = rows.len();
        let mut scores = Vec::with_capacity(size * size);
        for row in rows {
            if row.len() != size {
                return Err(Error::MatrixShape {
                    expected: size,
                    actual: row.len(),
                });
            }
            scores.extend(row);
        }
        Ok(Self { size, scores })
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Full score row for a position
    pub fn row(&self, position: usize) -> Result<&[f32]> {
        if position >= self.size {
            return Err(Error::PositionOutOfRange {
                position,
                size: self.size,
            });
        }
        let start = position * self.size;
        Ok(&self.scores[start..start + self.size])
    }

    /// Rank the `k` most similar positions to `position`.
    ///
    /// The position itself is always excluded. Output is sorted by
    /// descending score, ties by ascending position; fewer than `k` entries
    /// are returned when the row is short.
    pub fn neighbors(&self, position: usize, k: usize) -> Result<Vec<Neighbor>> {
        let row = self.row(position)?;

        let mut ranked: Vec<Neighbor> = row
            .iter()
            .enumerate()
            .filter(|(other, _)| *other != position)
            .map(|(other, &score)| Neighbor {
                position: other,
                score,
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.position.cmp(&b.position))
        });
        ranked.truncate(k);

        Ok(ranked)
    }
}
