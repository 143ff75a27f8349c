//! Deployment targets and their gateway hosts.

// self
use crate::{_prelude::*, error::ConfigError};

/// Gateway deployment target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
	/// Test host with simulated money movement.
	#[default]
	Sandbox,
	/// Live host.
	Production,
}
impl Environment {
	/// Returns the gateway base URL for this environment.
	pub const fn base_url(self) -> &'static str {
		match self {
			Environment::Sandbox => "https://sandbox.safaricom.co.ke",
			Environment::Production => "https://api.safaricom.co.ke",
		}
	}

	/// Returns a stable label suitable for config files and span fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Environment::Sandbox => "sandbox",
			Environment::Production => "production",
		}
	}
}
impl Display for Environment {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for Environment {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"sandbox" => Ok(Environment::Sandbox),
			"production" => Ok(Environment::Production),
			_ => Err(ConfigError::UnknownEnvironment(s.to_owned())),
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn hosts_differ_only_by_subdomain() {
		assert_eq!(Environment::Sandbox.base_url(), "https://sandbox.safaricom.co.ke");
		assert_eq!(Environment::Production.base_url(), "https://api.safaricom.co.ke");
	}

	#[test]
	fn parses_case_insensitive_names() {
		assert_eq!("sandbox".parse::<Environment>().ok(), Some(Environment::Sandbox));
		assert_eq!(" Production ".parse::<Environment>().ok(), Some(Environment::Production));
		assert!(matches!(
			"staging".parse::<Environment>(),
			Err(ConfigError::UnknownEnvironment(name)) if name == "staging"
		));
	}

	#[test]
	fn serde_uses_snake_case_labels() {
		let env: Environment =
			serde_json::from_str("\"production\"").expect("Environment should deserialize.");

		assert_eq!(env, Environment::Production);
		assert_eq!(
			serde_json::to_string(&Environment::Sandbox).expect("Environment should serialize."),
			"\"sandbox\""
		);
	}
}
