//! Core type definitions used across the Folder Explorer workspace.

pub mod id;

pub use id::*;
