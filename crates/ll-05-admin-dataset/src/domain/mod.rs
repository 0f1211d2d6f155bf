//! # Domain Layer - Admin Dataset

pub mod dataset;
pub mod notice;
pub mod rows;

pub use dataset::*;
pub use notice::*;
pub use rows::*;
