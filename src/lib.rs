//! Control a single BLE smart light.
//!
//! A [`Session`] owns the connection to one light and exposes its power, brightness
//! and color temperature characteristics as typed values. The link is established on
//! first use.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hue_ble::{Error, Session};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Error> {
//!     pretty_env_logger::init();
//!
//!     let mut light = Session::new("CB:E0:41:A5:E6:42");
//!
//!     // Connects on the first access
//!     light.turn_on().await?;
//!     light.set_brightness(128).await?;
//!
//!     println!("Brightness: {}", light.get_brightness().await?);
//!     println!("On: {}", light.is_on().await?);
//!
//!     Ok(())
//! }
//!```

#![warn(clippy::all, future_incompatible, nonstandard_style, rust_2018_idioms)]

pub use btleplug::{api::BDAddr, Error as TransportError};

pub use btle::BtleTransport;
pub use endpoint::Endpoint;
pub use error::{Error, Result};
pub use session::{Session, SessionConfig, DEFAULT_CONNECT_TIMEOUT, DEFAULT_SETTLE_DELAY};
pub use transport::Transport;

mod btle;
mod endpoint;
mod error;
mod session;
mod transport;

pub mod common;
