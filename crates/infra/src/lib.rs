//! Infrastructure layer: catalog storage.

pub mod read_model;
