// microdiff-data/src/samplers/random_sampler_test.rs

use super::*;
use std::collections::HashSet;

#[test]
fn test_random_sampler_len_default() {
    let sampler = RandomSampler::new(false, None);
    assert_eq!(sampler.len(10), 10);
}

#[test]
fn test_random_sampler_len_with_num_samples() {
    let sampler = RandomSampler::new(false, Some(5));
    assert_eq!(sampler.len(10), 5);
    assert_eq!(RandomSampler::new(false, Some(20)).len(10), 0);
    assert_eq!(RandomSampler::new(true, Some(20)).len(10), 20);
}

#[test]
fn test_random_sampler_iter_no_replacement_is_a_permutation() {
    let dataset_len = 10;
    let sampler = RandomSampler::new(false, None);
    let indices: Vec<usize> = sampler.iter(dataset_len).collect();
    assert_eq!(indices.len(), dataset_len);
    let unique_indices: HashSet<usize> = indices.into_iter().collect();
    assert_eq!(unique_indices, (0..dataset_len).collect::<HashSet<usize>>());
}

#[test]
fn test_random_sampler_iter_no_replacement_subset() {
    let sampler = RandomSampler::new(false, Some(5));
    let indices: Vec<usize> = sampler.iter(10).collect();
    assert_eq!(indices.len(), 5);
    let unique_indices: HashSet<usize> = indices.iter().copied().collect();
    assert_eq!(unique_indices.len(), 5);
    assert!(indices.iter().all(|&i| i < 10));
}

#[test]
fn test_random_sampler_iter_no_replacement_more_than_dataset_returns_empty() {
    let sampler = RandomSampler::new(false, Some(10));
    let indices: Vec<usize> = sampler.iter(5).collect();
    assert!(indices.is_empty());
}

#[test]
fn test_random_sampler_with_replacement() {
    let sampler = RandomSampler::new(true, Some(50)).with_seed(3);
    let indices: Vec<usize> = sampler.iter(4).collect();
    assert_eq!(indices.len(), 50);
    assert!(indices.iter().all(|&i| i < 4));
}

#[test]
fn test_random_sampler_seed_is_reproducible() {
    let sampler = RandomSampler::new(false, None).with_seed(99);
    let a: Vec<usize> = sampler.iter(20).collect();
    let b: Vec<usize> = sampler.iter(20).collect();
    assert_eq!(a, b);

    let other: Vec<usize> = RandomSampler::new(false, None).with_seed(100).iter(20).collect();
    assert_ne!(a, other);
}

#[test]
fn test_random_sampler_empty_dataset() {
    let sampler = RandomSampler::new(true, Some(3));
    assert_eq!(sampler.iter(0).count(), 0);
    assert_eq!(sampler.len(0), 0);
}
