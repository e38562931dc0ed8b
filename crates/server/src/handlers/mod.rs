//! HTTP request handlers.

pub mod pages;
pub mod upload;

pub use pages::*;
pub use upload::*;
