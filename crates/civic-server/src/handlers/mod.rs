//! HTTP request handlers organized by area
//!
//! Each submodule contains handlers for one part of the surface.

pub mod dashboard;
pub mod insights;
pub mod pages;

// Re-export all handlers for use in router
pub use dashboard::*;
pub use insights::*;
pub use pages::*;
