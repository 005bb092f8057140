use bytes::Bytes;
use url::Url;
use crate::error::OopSpamError;

/// Raw response data
#[derive(Debug, Clone)]
pub struct ResponseData {
	bytes: Bytes,
	status_code: u16,
}

impl ResponseData {
	pub fn new(bytes: Bytes, status_code: u16) -> ResponseData {
		ResponseData { bytes, status_code }
	}

	pub fn as_slice(&self) -> &[u8] {
		&self.bytes
	}

	pub fn status_code(&self) -> u16 {
		self.status_code
	}

	/// Only an exact 200 counts as success for the OOPSpam API
	pub fn is_ok(&self) -> bool {
		self.status_code == 200
	}

	/// Body as text, with invalid UTF-8 replaced
	pub fn text(&self) -> String {
		String::from_utf8_lossy(self.as_slice()).into_owned()
	}
}

/// A single authenticated JSON POST to the OOPSpam API.
///
/// Implementations must send `Content-Type: application/json` and
/// `X-Api-Key: <api_key>`, must not retry, and must consume or drop the
/// response body before returning. The body is read when the status is not
/// 200 or when `read_body` is set; otherwise the returned data is empty.
#[maybe_async::maybe_async]
pub trait Transport: Send + Sync {
	async fn post_json(
		&self,
		url: &Url,
		api_key: &str,
		body: Vec<u8>,
		read_body: bool,
	) -> Result<ResponseData, OopSpamError>;
}
