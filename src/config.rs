//!
//! ## Configuration for oopspam-client
//!
//! The `Config` struct allows you to customize the API key, base URL, timeout and proxy settings.
//!

use std::fmt;
use typed_builder::TypedBuilder;

use crate::error::{OopSpamError, Result};

/// Base URL of the public OOPSpam API
pub const DEFAULT_BASE_URL: &str = "https://api.oopspam.com/v1";

/// Environment variable read by [`Config::from_env`]
pub const API_KEY_ENV: &str = "OOPSPAM_API_KEY";

/// Proxy configuration for the OOPSpam client
#[derive(Clone, PartialEq)]
pub struct ProxyConfig {
	/// Proxy server URL
	pub proxy_url: String,

	/// Optional username for proxy authentication
	pub username: Option<String>,

	/// Optional password for proxy authentication
	pub password: Option<String>,
}

impl fmt::Debug for ProxyConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ProxyConfig")
			.field("proxy_url", &self.proxy_url)
			.field("username", &self.username)
			.field("password", &self.password.as_ref().map(|_| "<redacted>"))
			.finish()
	}
}

/// Configuration for OOPSpam client
#[derive(TypedBuilder, Clone, PartialEq)]
pub struct Config {
	/// API key sent in the `X-Api-Key` header
	#[builder(setter(into))]
	pub api_key: String,

	/// Base URL of the API, endpoints are appended to it
	#[builder(default = DEFAULT_BASE_URL.to_string(), setter(into))]
	pub base_url: String,

	/// Timeout in seconds applied by the default transport
	#[builder(default = 30.0)]
	pub timeout: f64,

	/// Proxy configuration for the default transport
	#[builder(default, setter(strip_option))]
	pub proxy_config: Option<ProxyConfig>,
}

impl Config {
	/// Build a default configuration with the API key taken from `OOPSPAM_API_KEY`.
	pub fn from_env() -> Result<Config> {
		let api_key = std::env::var(API_KEY_ENV)
			.map_err(|_| OopSpamError::ConfigError(format!("{API_KEY_ENV} environment variable is required")))?;
		Ok(Config::builder().api_key(api_key).build())
	}
}

impl fmt::Debug for Config {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Config")
			.field("api_key", &"<redacted>")
			.field("base_url", &self.base_url)
			.field("timeout", &self.timeout)
			.field("proxy_config", &self.proxy_config)
			.finish()
	}
}
