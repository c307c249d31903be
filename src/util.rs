//! Shared utility modules used across the word ladder components.

pub mod hamming;
