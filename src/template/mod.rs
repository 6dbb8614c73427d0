//! Template processing engine for stamp
//!
//! This module contains the core template processing components:
//! - `operation`: Defines operations to be performed for each template file
//! - `processor`: Computes target paths and substituted content

pub mod operation;
pub mod processor;
