use super::traits::Sampler;

/// Visits indices `0, 1, 2, ...` in dataset order.
///
/// With [`SequentialSampler::take`] only a prefix of the dataset is visited, which is
/// handy for a quick evaluation on the first few samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequentialSampler {
    limit: Option<usize>,
}

impl SequentialSampler {
    /// A sampler over the whole dataset.
    pub fn new() -> Self {
        SequentialSampler { limit: None }
    }

    /// Stops after the first `limit` indices (or at the end of a shorter dataset).
    pub fn take(limit: usize) -> Self {
        SequentialSampler { limit: Some(limit) }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}

impl Sampler for SequentialSampler {
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync> {
        Box::new(0..self.len(dataset_len))
    }

    fn len(&self, dataset_len: usize) -> usize {
        self.limit.map_or(dataset_len, |limit| limit.min(dataset_len))
    }
}

#[cfg(test)]
#[path = "sequential_sampler_test.rs"]
mod tests;
