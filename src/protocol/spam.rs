use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use super::{is_false, null_as_default};

/// Body of a `spamdetection` request.
///
/// Flags left `false` and lists left empty are not serialized at all, so the
/// service applies its own defaults for them.
#[derive(TypedBuilder, Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpamDetectionRequest {
	/// IP address of the sender
	#[serde(rename = "senderIP")]
	#[builder(setter(into))]
	pub sender_ip: String,

	/// Email address of the sender
	#[builder(setter(into))]
	pub email: String,

	/// Message body to classify
	#[builder(setter(into))]
	pub content: String,

	/// Reject disposable email providers
	#[serde(skip_serializing_if = "is_false")]
	#[builder(default)]
	pub block_temp_email: bool,

	/// Reject senders coming through a VPN
	#[serde(rename = "blockVPN", skip_serializing_if = "is_false")]
	#[builder(default)]
	pub block_vpn: bool,

	/// Reject senders hosted in a datacenter
	#[serde(rename = "blockDC", skip_serializing_if = "is_false")]
	#[builder(default)]
	pub block_dc: bool,

	/// Keep the request in the OOPSpam dashboard log
	#[serde(skip_serializing_if = "is_false")]
	#[builder(default)]
	pub log_it: bool,

	/// Flag content that is too short to be meaningful
	#[serde(skip_serializing_if = "is_false")]
	#[builder(default)]
	pub check_for_length: bool,

	/// Do not penalize links in the content
	#[serde(skip_serializing_if = "is_false")]
	#[builder(default)]
	pub url_friendly: bool,

	/// ISO 639-1 language codes accepted by the caller
	#[serde(skip_serializing_if = "Vec::is_empty")]
	#[builder(default)]
	pub allowed_languages: Vec<String>,

	/// ISO 3166-1 alpha-2 country codes accepted by the caller
	#[serde(skip_serializing_if = "Vec::is_empty")]
	#[builder(default)]
	pub allowed_countries: Vec<String>,

	/// ISO 3166-1 alpha-2 country codes rejected by the caller
	#[serde(skip_serializing_if = "Vec::is_empty")]
	#[builder(default)]
	pub blocked_countries: Vec<String>,
}

/// Reply of the `spamdetection` endpoint.
///
/// The score is passed through as returned; the threshold for treating a
/// message as spam is up to the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpamDetectionResponse {
	#[serde(rename = "Score", default)]
	pub score: i64,
	#[serde(rename = "Details", default)]
	pub details: SpamDetails,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpamDetails {
	#[serde(rename = "isIPBlocked")]
	pub is_ip_blocked: bool,
	pub is_email_blocked: bool,
	pub is_content_spam: String,
	pub lang_match: bool,
	pub country_match: bool,
	pub number_of_spam_words: i64,
	#[serde(deserialize_with = "null_as_default")]
	pub spam_words: Vec<String>,
	pub is_content_too_short: bool,
}
