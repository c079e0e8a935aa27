//! # rampgen Parallel
//!
//! Execution strategies for ramp batches.
//!
//! This crate provides:
//! - Sequential or Rayon-backed mapping over batch entries
//! - Dedicated thread pools with a fixed number of workers
//!
//! Without the `parallel` feature every mode runs sequentially.

pub mod strategy;

pub use strategy::{num_threads, ParallelStrategy, ProcessingMode};
