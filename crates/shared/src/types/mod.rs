//! Common types used across the workspace.

pub mod drcr;
pub mod id;

pub use drcr::DrCr;
pub use id::*;
