//! High level OOPSpam API client.
//!
//! Every operation goes through [`OopSpamClient::execute`]: the body is
//! serialized before anything touches the network, a single POST is sent, and
//! any status other than 200 becomes [`OopSpamError::ApiError`]. Nothing is
//! retried.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::backend::{DefaultTransport, ResponseData, Transport};
use crate::config::Config;
use crate::error::{OopSpamError, Result};
use crate::protocol::commands::{OopSpamCommand, OopSpamEndpoint};
use crate::protocol::{
	DomainReputationRequest, DomainReputationResponse, ReportRequest, SpamDetectionRequest,
	SpamDetectionResponse,
};

/// Client for the OOPSpam API.
///
/// Holds no per-call state, so one instance can be shared between threads
/// (or tasks) for the lifetime of the process.
pub struct OopSpamClient<T = DefaultTransport> {
	config: Config,
	transport: T,
}

impl OopSpamClient<DefaultTransport> {
	/// Create a client with the default transport built from `config`.
	pub fn new(config: Config) -> Result<Self> {
		#[cfg(feature = "sync")]
		let transport = crate::backend::sync_client::sync_transport(&config)?;
		#[cfg(feature = "async")]
		let transport = crate::backend::async_client::async_transport(&config)?;
		Ok(Self { config, transport })
	}

	/// Create a client with default settings and the given API key.
	pub fn from_api_key(api_key: impl Into<String>) -> Result<Self> {
		Self::new(Config::builder().api_key(api_key).build())
	}
}

impl<T> OopSpamClient<T> {
	/// Create a client around a pre-configured transport.
	///
	/// `config.timeout` and `config.proxy_config` are ignored here; configure
	/// them on the transport itself.
	pub fn with_transport(config: Config, transport: T) -> Self {
		Self { config, transport }
	}

	/// Configuration the client was built with.
	pub fn config(&self) -> &Config {
		&self.config
	}
}

impl<T> fmt::Debug for OopSpamClient<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("OopSpamClient")
			.field("config", &self.config)
			.finish_non_exhaustive()
	}
}

#[maybe_async::maybe_async]
impl<T: Transport> OopSpamClient<T> {
	/// Check content, sender IP and email address for spam.
	pub async fn check_spam(&self, request: &SpamDetectionRequest) -> Result<SpamDetectionResponse> {
		let response = self.execute(OopSpamCommand::SpamDetection, request).await?;
		decode(&response)
	}

	/// Look up whether `domain` appears on any block list.
	pub async fn check_domain_reputation(&self, domain: &str) -> Result<DomainReputationResponse> {
		let body = DomainReputationRequest { domain };
		let response = self.execute(OopSpamCommand::DomainReputation, &body).await?;
		decode(&response)
	}

	/// Report a misclassified request: `should_be_spam` is the verdict the
	/// service should have returned.
	pub async fn report_spam(&self, request: &SpamDetectionRequest, should_be_spam: bool) -> Result<()> {
		let body = ReportRequest {
			request,
			should_be_spam,
		};
		self.execute(OopSpamCommand::Report, &body).await?;
		Ok(())
	}

	async fn execute<B: Serialize + Sync + ?Sized>(&self, command: OopSpamCommand, body: &B) -> Result<ResponseData> {
		let endpoint = OopSpamEndpoint::from_command(command);
		let url = Url::parse(&endpoint.url(&self.config.base_url))?;
		let body = serde_json::to_vec(body).map_err(OopSpamError::EncodeError)?;

		tracing::debug!(command = ?endpoint.command, url = %url, bytes = body.len(), "sending OOPSpam request");
		let response = self.transport
			.post_json(&url, &self.config.api_key, body, endpoint.need_response)
			.await?;
		tracing::debug!(url = %url, status = response.status_code(), "received OOPSpam response");

		if !response.is_ok() {
			tracing::warn!(command = ?endpoint.command, url = %url, status = response.status_code(), "OOPSpam API returned an error");
			return Err(OopSpamError::ApiError {
				status: response.status_code(),
				body: response.text(),
			});
		}

		Ok(response)
	}
}

fn decode<R: DeserializeOwned>(response: &ResponseData) -> Result<R> {
	serde_json::from_slice(response.as_slice()).map_err(OopSpamError::DecodeError)
}
