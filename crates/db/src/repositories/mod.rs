//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept the pool as the first argument.

pub mod activity_repo;

pub use activity_repo::ActivityRepo;
