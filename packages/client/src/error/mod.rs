pub mod classification;
pub mod constructors;
pub mod helpers;
pub mod types;

pub use constructors::*;
pub use helpers::{BadScheme, ConnectionClosed, TimedOut, UseLastResponse};
pub use types::{Error, Inner, Kind, Result};

// Alias used throughout the builder layer
pub type HttpError = Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
