//! Wire types exchanged with the OOPSpam API

pub mod commands;
pub mod report;
pub mod reputation;
pub mod spam;

pub use report::ReportRequest;
pub use reputation::{DomainReputationRequest, DomainReputationResponse};
pub use spam::{SpamDetails, SpamDetectionRequest, SpamDetectionResponse};

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` the same as a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

pub(crate) fn is_false(value: &bool) -> bool {
	!*value
}
