//! Type definitions module.
//!
//! Contains shared types used across the application.

pub mod input;
pub mod text;
pub mod token;

pub use input::*;
pub use text::*;
pub use token::*;
