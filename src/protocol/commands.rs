//! Commands that can be sent to the server

/// Commands that can be sent to the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OopSpamCommand {
	SpamDetection,
	DomainReputation,
	Report,
}

/// Ephemeral endpoint representation
#[derive(Debug, Clone, Copy)]
pub struct OopSpamEndpoint {
	pub path: &'static str,
	pub command: OopSpamCommand,
	/// Whether a 200 response carries a body worth decoding
	pub need_response: bool,
}

impl OopSpamEndpoint {
	/// Create a new endpoint from a command
	pub fn from_command(command: OopSpamCommand) -> OopSpamEndpoint {
		match command {
			OopSpamCommand::SpamDetection => Self {
				path: "spamdetection",
				command,
				need_response: true,
			},
			OopSpamCommand::DomainReputation => Self {
				path: "reputation/domain",
				command,
				need_response: true,
			},
			OopSpamCommand::Report => Self {
				path: "spamdetection/report",
				command,
				need_response: false,
			},
		}
	}

	/// Join the endpoint path onto a base URL
	pub fn url(&self, base_url: &str) -> String {
		format!("{}/{}", base_url.trim_end_matches('/'), self.path)
	}
}
