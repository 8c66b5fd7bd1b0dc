//! Construction-time configuration for the rollout client.

// self
use crate::_prelude::*;

/// Default value of the fixed `userName` header attached to every submission.
pub const DEFAULT_USER_NAME: &str = "user_name";

/// Fixed, per-instance configuration for a [`RolloutClient`](crate::client::RolloutClient).
///
/// `window` and `ceiling` bound the admission gate; the remaining fields describe the remote
/// endpoint. All values are frozen for the client's lifetime.
#[derive(Clone, Debug)]
pub struct RolloutConfig {
	/// Rollout endpoint URL the client POSTs documents to.
	pub endpoint: Url,
	/// Unique OMS identifier sent as the `omsId` query parameter.
	pub oms_id: String,
	/// Value of the fixed `userName` header.
	pub user_name: String,
	/// Duration after which an admitted submission's capacity is released.
	pub window: Duration,
	/// Maximum number of admitted-but-pending submissions allowed to coexist within `window`.
	pub ceiling: u32,
}
impl RolloutConfig {
	/// Creates a configuration for the provided endpoint and OMS identifier.
	///
	/// Negative windows are clamped to zero, mirroring the gate's own clamp.
	pub fn new(endpoint: Url, oms_id: impl Into<String>, window: Duration, ceiling: u32) -> Self {
		Self {
			endpoint,
			oms_id: oms_id.into(),
			user_name: DEFAULT_USER_NAME.into(),
			window: if window.is_negative() { Duration::ZERO } else { window },
			ceiling,
		}
	}

	/// Overrides the fixed `userName` header value.
	pub fn with_user_name(mut self, user_name: impl Into<String>) -> Self {
		self.user_name = user_name.into();

		self
	}

	/// Overrides the release window (negative values clamp to zero).
	pub fn with_window(mut self, window: Duration) -> Self {
		self.window = if window.is_negative() { Duration::ZERO } else { window };

		self
	}

	/// Overrides the admission ceiling.
	pub fn with_ceiling(mut self, ceiling: u32) -> Self {
		self.ceiling = ceiling;

		self
	}
}
