pub mod analyzer;
pub mod config;
pub mod decoder;
pub mod error;
pub mod pipeline;
pub mod ranking;
pub mod reference;
pub mod table;
pub mod util;
// cmd and reports belong to the binary crate (main.rs).
