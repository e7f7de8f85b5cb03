//! SportService: the resource rules, independent of the storage technology.

mod sport;
pub use sport::SportService;
