//! HTTP cookie handling
//!
//! - [`Cookie`] records attached to a single request
//! - the [`CookieStore`] trait and its default [`Jar`] implementation used to
//!   persist `Set-Cookie` responses across requests

pub mod core;
pub mod utils;

pub use self::core::*;

pub use utils::*;
