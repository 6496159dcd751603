//! Shared helpers for the derive implementation.

pub mod validation;
