//!# OOPSpam Client for Rust
//!
//! This crate provides an HTTP client for the [OOPSpam](https://www.oopspam.com) anti-spam API.
//! It supports both synchronous and asynchronous operations using the `attohttpc` and
//! `reqwest` libraries, respectively.
//!
//! ## Features
//!
//! - **Sync** (default): Synchronous client using `attohttpc`.
//! - **Async**: Asynchronous client using `reqwest`. Enable with
//!   `default-features = false, features = ["async"]`.
//! - Spam detection for content, sender IP and email address.
//! - Domain reputation lookups.
//! - Reporting false positives and false negatives back to the service.
//!
//! The client never interprets the returned score: deciding what counts as spam
//! (for example `score >= 3`) is left to the caller.

// Ensure async and sync features are mutually exclusive
#[cfg(all(feature = "async", feature = "sync"))]
compile_error!("Features 'async' and 'sync' are mutually exclusive. Please enable only one.");

#[cfg(not(any(feature = "async", feature = "sync")))]
compile_error!("Either 'async' or 'sync' feature must be enabled.");

pub mod config;
pub mod error;
pub mod protocol;

pub mod backend;
pub mod client;

pub use client::OopSpamClient;
pub use config::Config;
pub use error::{OopSpamError, Result};
pub use protocol::{
	DomainReputationRequest, DomainReputationResponse, ReportRequest, SpamDetails,
	SpamDetectionRequest, SpamDetectionResponse,
};

#[cfg(feature = "sync")]
pub use backend::sync_client::check_spam_sync;
/// ### Synchronous Client
///
/// This example demonstrates how to check a message using the synchronous client.
///
/// ```rust,no_run
/// use oopspam_client::{config, check_spam_sync, SpamDetectionRequest};
///
/// let config = config::Config::builder()
///     .api_key("my-api-key")
///     .build();
/// let request = SpamDetectionRequest::builder()
///     .sender_ip("91.203.67.110")
///     .email("testing@example.com")
///     .content("Buy cheap watches now!")
///     .build();
///
/// match check_spam_sync(&config, &request) {
///     Ok(response) => println!("Score: {}", response.score),
///     Err(e) => eprintln!("Error checking content: {}", e),
/// }
/// ```
///
#[cfg(feature = "sync")]
pub use backend::sync_client::SyncTransport;

#[cfg(feature = "async")]
pub use backend::async_client::check_spam_async;
/// ### Asynchronous Client
///
/// This example demonstrates how to check a message using the asynchronous client.
///
/// ```rust,no_run
/// use oopspam_client::{config, check_spam_async, SpamDetectionRequest};
/// # use tokio;
///
/// # #[tokio::main]
/// # async fn main() {
/// let config = config::Config::builder()
///     .api_key("my-api-key")
///     .build();
/// let request = SpamDetectionRequest::builder()
///     .sender_ip("91.203.67.110")
///     .email("testing@example.com")
///     .content("Buy cheap watches now!")
///     .build();
///
/// match check_spam_async(&config, &request).await {
///     Ok(response) => println!("Score: {}", response.score),
///     Err(e) => eprintln!("Error checking content: {}", e),
/// }
/// # }
/// ```
#[cfg(feature = "async")]
pub use backend::async_client::AsyncTransport;
