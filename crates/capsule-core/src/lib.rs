//! Core types for the capsule content store.
//!
//! This crate provides the record shapes shared by the storage engine, the
//! HTTP service, and the client SDK:
//!
//! - **Identifiers**: `UserId`, `CharacterId`, `ItemId`
//! - **Characters**: `Character`, `NewCharacter`
//! - **Items**: `Item`, `NewItem`
//! - **Users**: `User`, `NewUser`
//!
//! # Stored vs. insertable forms
//!
//! Every record comes in two shapes: the insertable form (`New*`) carries all
//! attributes except the identifier, and the stored form adds the id the
//! store assigned at creation. The store also normalizes the two optional
//! attributes (`NewCharacter::border_color`, `NewItem::resource`) to their
//! default values, so stored records never carry an absent field.
//!
//! Records serialize with camelCase keys (`characterId`, `borderColor`),
//! matching the JSON shape the frontend consumes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod character;
pub mod ids;
pub mod item;
pub mod user;

pub use character::{Character, NewCharacter, DEFAULT_BORDER_COLOR};
pub use ids::{CharacterId, IdError, ItemId, UserId};
pub use item::{Item, NewItem, DEFAULT_RESOURCE};
pub use user::{NewUser, User};
