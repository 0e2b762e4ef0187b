#[cfg(feature = "client")]
mod client;
mod error;
mod form;
mod payload;
mod render;
mod types;
mod validate;

#[cfg(feature = "client")]
pub use client::*;
pub use error::*;
pub use form::*;
pub use payload::*;
pub use render::*;
pub use types::*;
pub use validate::*;
