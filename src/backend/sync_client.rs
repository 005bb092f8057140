use attohttpc::{ProxySettingsBuilder, Session};
use attohttpc::header::{HeaderValue, CONTENT_TYPE};
use bytes::Bytes;
use std::str::FromStr;
use std::time::Duration;
use url::Url;
use crate::backend::traits::*;
use crate::client::OopSpamClient;
use crate::config::Config;
use crate::error::OopSpamError;
use crate::protocol::{SpamDetectionRequest, SpamDetectionResponse};

/// Blocking transport backed by an `attohttpc` session
pub struct SyncTransport {
	inner: Session,
}

/// Build the default blocking transport from the client configuration
pub fn sync_transport(options: &Config) -> Result<SyncTransport, OopSpamError> {
	let mut session = Session::new();
	let timeout = Duration::try_from_secs_f64(options.timeout)
		.map_err(|e| OopSpamError::ConfigError(format!("invalid timeout: {e}")))?;
	session.timeout(timeout);

	if let Some(ref proxy) = options.proxy_config {
		let mut proxy_url = Url::from_str(&proxy.proxy_url)?;
		if let Some(ref username) = proxy.username {
			proxy_url.set_username(username)
				.map_err(|_| OopSpamError::ConfigError("proxy URL cannot carry credentials".to_string()))?;
			proxy_url.set_password(proxy.password.as_deref())
				.map_err(|_| OopSpamError::ConfigError("proxy URL cannot carry credentials".to_string()))?;
		}
		let settings = ProxySettingsBuilder::new()
			.http_proxy(proxy_url.clone())
			.https_proxy(proxy_url)
			.build();
		session.proxy_settings(settings);
	}

	Ok(SyncTransport { inner: session })
}

impl From<Session> for SyncTransport {
	fn from(session: Session) -> Self {
		SyncTransport { inner: session }
	}
}

impl Transport for SyncTransport {
	fn post_json(
		&self,
		url: &Url,
		api_key: &str,
		body: Vec<u8>,
		read_body: bool,
	) -> Result<ResponseData, OopSpamError> {
		// Reject keys that cannot travel in a header before any I/O
		HeaderValue::from_str(api_key)?;
		let response = self.inner.post(url.as_str())
			.header(CONTENT_TYPE, "application/json")
			.header("X-Api-Key", api_key)
			.bytes(body)
			.send()?;

		let status_code = response.status().as_u16();
		if status_code != 200 {
			// The body is diagnostic only, a failed read must not hide the status
			let body = response.bytes().unwrap_or_default();
			return Ok(ResponseData::new(Bytes::from(body), status_code));
		}

		let body = if read_body {
			response.bytes()?
		} else {
			Vec::new()
		};
		Ok(ResponseData::new(Bytes::from(body), status_code))
	}
}

/// Synchronously check a message for spam
/// Example:
/// ```rust,no_run
/// use oopspam_client::config::Config;
/// use oopspam_client::check_spam_sync;
/// use oopspam_client::error::OopSpamError;
/// use oopspam_client::SpamDetectionRequest;
///
/// fn main() -> Result<(), OopSpamError>{
///   let config = Config::builder()
///             .api_key("my-api-key")
///             .build();
///    let request = SpamDetectionRequest::builder()
///             .sender_ip("91.203.67.110")
///             .email("testing@example.com")
///             .content("Dear Agent, we supply aluminum rods worldwide.")
///             .build();
///    let response = check_spam_sync(&config, &request)?;
///    println!("{}", response.score);
///    Ok(())
/// }
/// ```
pub fn check_spam_sync(options: &Config, request: &SpamDetectionRequest) -> Result<SpamDetectionResponse, OopSpamError> {
	let client = OopSpamClient::new(options.clone())?;
	client.check_spam(request)
}
