// src/core/models/mod.rs

pub mod common;
pub mod expense;
pub mod task;

pub use common::*;
pub use expense::*;
pub use task::*;
