use std::time::Duration;
use bytes::Bytes;
use reqwest::Client;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use url::Url;
use crate::backend::traits::*;
use crate::client::OopSpamClient;
use crate::config::Config;
use crate::error::OopSpamError;
use crate::protocol::{SpamDetectionRequest, SpamDetectionResponse};

/// Asynchronous transport backed by a `reqwest` client
pub struct AsyncTransport {
	inner: Client,
}

/// Build the default asynchronous transport from the client configuration
pub fn async_transport(options: &Config) -> Result<AsyncTransport, OopSpamError> {
	let timeout = Duration::try_from_secs_f64(options.timeout)
		.map_err(|e| OopSpamError::ConfigError(format!("invalid timeout: {e}")))?;
	let client = Client::builder().timeout(timeout);

	let client = if let Some(ref proxy) = options.proxy_config {
		let mut reqwest_proxy = reqwest::Proxy::all(proxy.proxy_url.as_str())
			.map_err(|e| OopSpamError::ConfigError(e.to_string()))?;
		if let Some(ref username) = proxy.username {
			reqwest_proxy = reqwest_proxy.basic_auth(username, proxy.password.as_deref().unwrap_or_default());
		}
		client.proxy(reqwest_proxy)
	} else {
		client
	};

	Ok(AsyncTransport {
		inner: client.build()?,
	})
}

impl From<Client> for AsyncTransport {
	fn from(client: Client) -> Self {
		AsyncTransport { inner: client }
	}
}

#[maybe_async::maybe_async]
impl Transport for AsyncTransport {
	async fn post_json(
		&self,
		url: &Url,
		api_key: &str,
		body: Vec<u8>,
		read_body: bool,
	) -> Result<ResponseData, OopSpamError> {
		let response = self.inner
			.post(url.clone())
			.header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
			.header("X-Api-Key", HeaderValue::from_str(api_key)?)
			.body(body)
			.send()
			.await?;

		let status_code = response.status().as_u16();
		if status_code != 200 {
			// The body is diagnostic only, a failed read must not hide the status
			let body = response.bytes().await.unwrap_or_default();
			return Ok(ResponseData::new(body, status_code));
		}

		let body = if read_body {
			response.bytes().await?
		} else {
			Bytes::new()
		};
		Ok(ResponseData::new(body, status_code))
	}
}

/// Check a message for spam asynchronously, returning the parsed reply or error.
/// Example:
/// ```rust,no_run
/// use oopspam_client::config::Config;
/// use oopspam_client::check_spam_async;
/// use oopspam_client::error::OopSpamError;
/// use oopspam_client::SpamDetectionRequest;
///
///	#[tokio::main]
/// async fn main() -> Result<(), OopSpamError> {
/// 	let config = Config::builder()
/// 		.api_key("my-api-key")
/// 		.build();
/// 	let request = SpamDetectionRequest::builder()
/// 		.sender_ip("91.203.67.110")
/// 		.email("testing@example.com")
/// 		.content("...")
/// 		.build();
/// 	let response = check_spam_async(&config, &request).await?;
/// 	println!("{}", response.score);
/// 	Ok(())
/// }
/// ```
#[maybe_async::maybe_async]
pub async fn check_spam_async(options: &Config, request: &SpamDetectionRequest) -> Result<SpamDetectionResponse, OopSpamError> {
	let client = OopSpamClient::new(options.clone())?;
	client.check_spam(request).await
}
