//! # microdiff-data
//!
//! Dataset access, sampling order, batching and toy datasets for training
//! `microdiff-core` models.

pub mod dataloader;
pub mod datasets;
pub mod samplers;
pub mod toy;

// Re-export main components
pub use dataloader::DataLoader;
pub use datasets::{Dataset, VecDataset};
pub use samplers::{RandomSampler, Sampler, SequentialSampler};
pub use toy::{make_moons, split_features_labels, tiny_binary, Sample};
