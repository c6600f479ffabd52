// microdiff-data/src/samplers/traits.rs

use std::fmt::Debug;

/// Defines the order in which a `DataLoader` visits dataset indices.
pub trait Sampler: Debug + Send + Sync {
    /// Returns an iterator over indices of a dataset of length `dataset_len`.
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync>;

    /// Returns the total number of indices the iterator will yield.
    ///
    /// This might be different from `dataset_len` for samplers that draw a fixed
    /// number of samples.
    fn len(&self, dataset_len: usize) -> usize;
}
