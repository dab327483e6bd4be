//! tl-storage - Storage library for threadline
//!
//! This crate provides reply sources backed by JSON fixtures on disk.

mod fixture_store;

pub use fixture_store::FixtureStore;
