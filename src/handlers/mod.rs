//! HTTP handlers for the sport resource.

pub mod sport;
pub use sport::*;
