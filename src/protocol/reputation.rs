use serde::{Deserialize, Serialize};

use super::null_as_default;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainReputationRequest<'a> {
	pub domain: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainReputationResponse {
	#[serde(rename = "Blocked", default)]
	pub blocked: bool,
	/// Lists that flagged the domain, only meaningful when `blocked` is set
	#[serde(rename = "Blocker", default, deserialize_with = "null_as_default")]
	pub blocker: Vec<String>,
}
