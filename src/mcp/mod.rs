//! MCP server module
//!
//! Exposes the converter as tools over stdio.

pub mod server;

pub use server::ConverterService;
