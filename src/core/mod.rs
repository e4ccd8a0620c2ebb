//! Core utilities shared by the pipelines
//!
//! - `artifacts`: typed paths and atomic reads/writes for generated site data

pub mod artifacts;

pub use artifacts::{write_atomic, Artifact, ArtifactStore};
