//! Shared types

mod message;

pub use message::{Message, RenderedSection};
