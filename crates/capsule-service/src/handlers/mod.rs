//! HTTP request handlers.

pub mod characters;
pub mod health;
pub mod items;
