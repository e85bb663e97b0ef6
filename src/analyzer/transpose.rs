use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::error::{Result, ValidationError};
use crate::model::Dataset;

/// Counts for every entity at one bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketColumn {
    pub bucket: String,
    /// Aligned with `TransposedView::entities`
    pub counts: Vec<u64>,
}

/// Bucket-major view of a dataset: bucket -> entity -> count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransposedView {
    entities: Vec<String>,
    columns: Vec<BucketColumn>,
    #[serde(skip)]
    entity_index: HashMap<String, usize>,
}

impl TransposedView {
    pub fn buckets(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.bucket.as_str())
    }

    pub fn bucket_count(&self) -> usize {
        self.columns.len()
    }

    /// Entity names in dataset order
    pub fn entities(&self) -> &[String] {
        &self.entities
    }

    pub fn columns(&self) -> &[BucketColumn] {
        &self.columns
    }

    pub fn contains(&self, entity: &str) -> bool {
        self.entity_index.contains_key(entity)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, bucket: &str, entity: &str) -> Option<u64> {
        let idx = *self.entity_index.get(entity)?;
        self.columns
            .iter()
            .find(|c| c.bucket == bucket)
            .map(|c| c.counts[idx])
    }

    /// `(entity, count)` pairs at one bucket, in entity order
    pub fn column(&self, bucket: &str) -> Option<impl Iterator<Item = (&str, u64)>> {
        let column = self.columns.iter().find(|c| c.bucket == bucket)?;
        Some(
            self.entities
                .iter()
                .map(String::as_str)
                .zip(column.counts.iter().copied()),
        )
    }

    /// `(bucket, count)` pairs for one entity, in bucket order
    pub fn series(&self, entity: &str) -> Option<impl Iterator<Item = (&str, u64)>> {
        let idx = *self.entity_index.get(entity)?;
        Some(self.columns.iter().map(move |c| (c.bucket.as_str(), c.counts[idx])))
    }

    /// Sum over all buckets for one entity
    pub fn total(&self, entity: &str) -> Option<u64> {
        Some(
            self.series(entity)?
                .fold(0u64, |acc, (_, count)| acc.saturating_add(count)),
        )
    }
}

/// Pivot a dataset into its bucket-major view.
///
/// Every entity must carry exactly one count per bucket, bucket labels and
/// entity names must be unique, and neither side may be empty.
pub fn transpose(dataset: &Dataset) -> Result<TransposedView> {
    if dataset.is_empty() {
        return Err(ValidationError::EmptyDataset.into());
    }
    let buckets = dataset.buckets();
    if buckets.is_empty() {
        return Err(ValidationError::NoBuckets.into());
    }

    let mut seen_buckets = HashSet::new();
    for bucket in buckets {
        if !seen_buckets.insert(bucket.as_str()) {
            return Err(ValidationError::DuplicateBucket(bucket.clone()).into());
        }
    }

    let mut entity_index = HashMap::with_capacity(dataset.len());
    for (i, entity) in dataset.entities().iter().enumerate() {
        if entity.counts.len() != buckets.len() {
            return Err(ValidationError::BucketMismatch {
                entity: entity.name.clone(),
                expected: buckets.len(),
                found: entity.counts.len(),
            }
            .into());
        }
        if entity_index.insert(entity.name.clone(), i).is_some() {
            return Err(ValidationError::DuplicateEntity(entity.name.clone()).into());
        }
    }

    let columns = buckets
        .iter()
        .enumerate()
        .map(|(b, bucket)| BucketColumn {
            bucket: bucket.clone(),
            counts: dataset.entities().iter().map(|e| e.counts[b]).collect(),
        })
        .collect();

    tracing::debug!(
        buckets = buckets.len(),
        entities = dataset.len(),
        "transposed dataset"
    );

    Ok(TransposedView {
        entities: dataset.names(),
        columns,
        entity_index,
    })
}
