//! Client-side data table engine
//!
//! Turns a dataset and a column schema into the rows a table shows, with
//! free-text search, single-column sorting, fixed-size pagination, row
//! selection and an externally driven loading state.

pub mod engine;
pub mod error;
pub mod model;
pub mod render;
pub mod source;

pub use engine::TableConfig;
pub use engine::TableEngine;
pub use error::Error;
pub use render::TableView;
