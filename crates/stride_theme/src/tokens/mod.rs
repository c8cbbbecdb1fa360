//! Branding tokens
//!
//! The closed vocabulary the engine works in:
//! - Semantic colour roles and per-role tables
//! - The five-step gray scale

mod gray;
mod role;

pub use gray::*;
pub use role::*;
