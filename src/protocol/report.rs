use serde::Serialize;

use super::spam::SpamDetectionRequest;

/// Body of a `spamdetection/report` request: the original request plus the
/// expected classification.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRequest<'a> {
	#[serde(flatten)]
	pub request: &'a SpamDetectionRequest,
	#[serde(rename = "shouldBeSpam")]
	pub should_be_spam: bool,
}
