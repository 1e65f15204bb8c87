// src/core.rs
pub mod analyzer;
pub mod populator;
pub mod random;
pub mod scanner;
