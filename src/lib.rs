//! Library crate root re-exporting audit, scanner, and CLI modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod audit;
pub mod cli;
pub mod config;
pub mod scanner;
