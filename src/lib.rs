//! Minimal client for the GitHub organization directory.
//!
//! Fetches an organization's metadata and repository list and filters the
//! list by license. Remote payloads are memoized per client instance, so each
//! endpoint is fetched at most once for a given [`OrgClient`].
//!
//! ```no_run
//! use octodir::OrgClient;
//!
//! # async fn run() -> octodir::Result<()> {
//! let client = OrgClient::new("google")?;
//! let apache = client.public_repos(Some("apache-2.0")).await?;
//! println!("{apache:?}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod json;
pub mod memo;
pub mod transport;

pub use client::OrgClient;
pub use error::{OctodirError, Result};
pub use json::access_nested;
pub use memo::MemoCell;
pub use transport::{HttpTransport, Transport};
