// src/core.rs
pub mod classify;
pub mod config;
pub mod header;
pub mod references;
pub mod selector;
pub mod verifier;
