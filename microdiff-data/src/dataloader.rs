// dataloader.rs
//! # DataLoader
//!
//! Groups the items of a [`Dataset`] into batches, in the order chosen by a
//! [`Sampler`].
//!
//! ```rust
//! use microdiff_data::dataloader::DataLoader;
//! use microdiff_data::datasets::VecDataset;
//! use microdiff_data::samplers::SequentialSampler;
//!
//! let dataset = VecDataset::new(vec![1, 2, 3, 4, 5, 6]);
//! let loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false).unwrap();
//! for batch in loader {
//!     println!("Batch: {:?}", batch.unwrap());
//! }
//! ```

use crate::datasets::Dataset;
use crate::samplers::Sampler;
use microdiff_core::MicrodiffError;

/// Custom collation: turns the samples of one batch into the batch handed out.
pub type CollateFn<D> = Box<
    dyn Fn(Vec<<D as Dataset>::Item>) -> Result<Vec<<D as Dataset>::Item>, MicrodiffError> + Send + Sync,
>;

/// Batching iterator over a dataset.
///
/// One pass over the sampler's indices is one epoch; call [`DataLoader::reset`] to
/// start the next one. An unseeded [`RandomSampler`](crate::samplers::RandomSampler)
/// draws a new order on every reset.
pub struct DataLoader<D: Dataset, S: Sampler> {
    dataset: D,
    batch_size: usize,
    sampler: S,
    /// If true, a trailing batch smaller than `batch_size` is skipped.
    drop_last: bool,
    collate_fn: Option<CollateFn<D>>,
    indices_iter: Box<dyn Iterator<Item = usize> + Send + Sync>,
}

impl<D: Dataset, S: Sampler> DataLoader<D, S> {
    /// Creates a new DataLoader.
    ///
    /// # Errors
    /// `MicrodiffError::InvalidConfig` if `batch_size` is 0.
    pub fn new(dataset: D, batch_size: usize, sampler: S, drop_last: bool) -> Result<Self, MicrodiffError> {
        if batch_size == 0 {
            return Err(MicrodiffError::InvalidConfig(
                "batch_size must be greater than 0".to_string(),
            ));
        }
        let indices_iter = sampler.iter(dataset.len());
        Ok(Self {
            dataset,
            batch_size,
            sampler,
            drop_last,
            collate_fn: None,
            indices_iter,
        })
    }

    /// Applies `collate_fn` to every batch before it is returned.
    pub fn with_collate_fn(mut self, collate_fn: CollateFn<D>) -> Self {
        self.collate_fn = Some(collate_fn);
        self
    }

    pub fn dataset(&self) -> &D {
        &self.dataset
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of batches in one epoch.
    pub fn num_batches(&self) -> usize {
        let samples = self.sampler.len(self.dataset.len());
        if self.drop_last {
            samples / self.batch_size
        } else {
            (samples + self.batch_size - 1) / self.batch_size
        }
    }

    /// Restarts the iteration with a fresh set of indices from the sampler.
    pub fn reset(&mut self) {
        self.indices_iter = self.sampler.iter(self.dataset.len());
    }
}

impl<D: Dataset, S: Sampler> Iterator for DataLoader<D, S> {
    type Item = Result<Vec<<D as Dataset>::Item>, MicrodiffError>;

    /// Returns the next batch, `Some(Err(_))` if an item could not be fetched, or
    /// `None` once the sampler is exhausted.
    fn next(&mut self) -> Option<Self::Item> {
        let mut batch = Vec::with_capacity(self.batch_size);
        for idx in self.indices_iter.by_ref().take(self.batch_size) {
            match self.dataset.get(idx) {
                Ok(item) => batch.push(item),
                Err(e) => return Some(Err(e)),
            }
        }
        if batch.is_empty() || (self.drop_last && batch.len() < self.batch_size) {
            return None;
        }
        match self.collate_fn {
            Some(ref collate_fn) => Some(collate_fn(batch)),
            None => Some(Ok(batch)),
        }
    }
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;
