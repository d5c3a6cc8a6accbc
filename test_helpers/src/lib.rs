//! Test helpers shared across crates.
//!
//! This crate currently provides [`probe::Probe`], which records the handlers
//! a dispatch actually ran.

pub mod probe;
