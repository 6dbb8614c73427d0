//! Configuration management for stamp templates
//!
//! - `loader`: template configuration file loading, defaults and validation

pub mod loader;


pub use loader::TemplateConfig;
