//! curlgen library interface
//!
//! This crate turns a captured HTTP request into a single shell command line
//! that invokes `curl` to reproduce the request, ready to paste into a POSIX
//! shell or `cmd.exe`. It is a pure in-memory text transform: nothing is
//! validated, executed, or sent anywhere.
//!
//! ```
//! use curlgen::{CurlCommand, Platform};
//!
//! let mut curl = CurlCommand::new();
//! curl.set_url("http://example.com/search?q=rust")
//!     .add_header("Accept", "application/json")
//!     .set_compressed(true);
//!
//! let rendered = curl.as_string(Platform::Posix, true, false, true);
//! assert_eq!(
//!     rendered,
//!     "curl 'http://example.com/search?q=rust' -H 'Accept: application/json' --compressed"
//! );
//! ```
//!
//! # Module Organization
//!
//! - [`command`] - The request model ([`CurlCommand`]), built through fluent mutators
//! - [`platform`] - Target shell selection ([`Platform`])
//! - [`serializer`] - Escaping engine and flag assembly ([`Serializer`], [`RenderOptions`])

pub mod command;
pub mod platform;
pub mod serializer;

pub use command::{CurlCommand, FormPart, Header, ServerAuthentication};
pub use platform::Platform;
pub use serializer::{RenderOptions, Serializer};
