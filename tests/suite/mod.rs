//! Integration test suite modules

mod config;
mod journey;
mod reveal;
