#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod plan;
pub mod profile;
pub mod recipe;
pub mod sample;
pub mod traits;
pub mod workout;

pub use error::{Error, Result};

/// Width of every embedding vector produced or consumed by the engine.
pub const EMBEDDING_DIM: usize = 384;
