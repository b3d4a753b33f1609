pub mod candidate;
pub mod config;
pub mod consts;
pub mod error;
pub mod generator;
pub mod grid;
pub mod puzzle;
pub mod scorer;
pub mod search;
pub mod selector;
pub mod targets;
// cmd and reports belong to the binary (src/main.rs).
