//! crudgen bootstrap library
//!
//! This module exports the configuration bootstrap for the binary, for the
//! generation pipeline, and for integration tests.

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
