//! Client for a Feishu/Lark document relay backend: find a document link in
//! free text, validate it, and submit it for processing.

pub mod backend;
pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod link;
pub mod repl;
pub mod submit;
pub mod telemetry;

pub use error::{Error, Result};
