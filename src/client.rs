//! Rate-limited submission client tying the validator, gate, and transport together.

// self
#[cfg(feature = "reqwest")] use crate::transport::ReqwestTransport;
use crate::{
	_prelude::*,
	config::RolloutConfig,
	document::{Document, SubmissionResult},
	error::ValidationError,
	gate::AdmissionGate,
	obs::{self, SubmitOutcome, SubmitSpan},
	transport::RolloutTransport,
	validate::Validator,
};

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestRolloutClient = RolloutClient<ReqwestTransport>;

/// Thread-safe, rate-limited submitter for rollout documents.
///
/// The client owns the admission gate and shares one transport across callers; `submit` may be
/// invoked from any number of concurrent tasks. One instance manages exactly one
/// producer-to-one-endpoint relationship.
#[derive(Clone)]
pub struct RolloutClient<T>
where
	T: ?Sized + RolloutTransport,
{
	/// Transport used for every outbound submission.
	pub transport: Arc<T>,
	gate: AdmissionGate,
}
impl<T> RolloutClient<T>
where
	T: ?Sized + RolloutTransport,
{
	/// Creates a client that reuses the caller-provided transport.
	///
	/// Only the gate parameters of `config` apply here; the transport already carries its own
	/// endpoint knowledge.
	pub fn with_transport(config: &RolloutConfig, transport: impl Into<Arc<T>>) -> Self {
		Self {
			transport: transport.into(),
			gate: AdmissionGate::new(config.window, config.ceiling),
		}
	}

	/// Validates and submits one document, waiting for admission when the gate is full.
	///
	/// Fails with [`ValidationError`] before any capacity is reserved when the credential is
	/// blank or the document is invalid, with
	/// [`InterruptedError`](crate::error::InterruptedError) when the admission wait is aborted,
	/// and with [`TransportError`](crate::error::TransportError) when the exchange itself fails.
	/// Once admitted, the deferred capacity release fires exactly one window later regardless of
	/// the exchange's outcome.
	pub async fn submit(
		&self,
		document: &Document,
		client_token: &str,
	) -> Result<SubmissionResult> {
		let span = SubmitSpan::new("submit");

		obs::record_submit_outcome(SubmitOutcome::Attempt);

		let result = span
			.instrument(async move {
				if client_token.trim().is_empty() {
					return Err(ValidationError::MissingClientToken.into());
				}
				if !Validator::for_today().is_valid(document) {
					return Err(ValidationError::InvalidDocument.into());
				}

				self.gate.acquire().await?;

				self.transport.dispatch(document, client_token).await.map_err(Error::from)
			})
			.await;

		match &result {
			Ok(_) => obs::record_submit_outcome(SubmitOutcome::Success),
			Err(_) => obs::record_submit_outcome(SubmitOutcome::Failure),
		}

		result
	}

	/// Closes the admission gate; waiting and future submissions fail with
	/// [`InterruptedError`](crate::error::InterruptedError).
	pub fn close(&self) {
		self.gate.close();
	}

	/// Returns the number of admitted-but-not-yet-released submissions.
	pub fn in_flight(&self) -> u32 {
		self.gate.in_flight()
	}
}
#[cfg(feature = "reqwest")]
impl RolloutClient<ReqwestTransport> {
	/// Creates a client with the crate's default reqwest transport.
	///
	/// The transport is provisioned from the endpoint fields of `config`; use
	/// [`RolloutClient::with_transport`] to supply a custom HTTP stack instead.
	pub fn new(config: &RolloutConfig) -> Self {
		Self::with_transport(config, ReqwestTransport::new(config))
	}
}
impl<T> Debug for RolloutClient<T>
where
	T: ?Sized + RolloutTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("RolloutClient").field("gate", &self.gate).finish()
	}
}
