//! Transport seam for rollout submissions.
//!
//! [`RolloutTransport`] is the crate's only dependency on an HTTP stack: the client validates
//! and admits, then hands the document to whatever transport it was built with. The default
//! [`ReqwestTransport`] implements the endpoint's wire contract; tests substitute stubs to
//! observe admission behavior without a network.

#[cfg(feature = "reqwest")]
use reqwest::header::{ACCEPT, CONTENT_TYPE};
// self
#[cfg(feature = "reqwest")] use crate::config::RolloutConfig;
use crate::{
	_prelude::*,
	document::{Document, SubmissionResult},
	error::TransportError,
};

/// Name of the credential header attached to every submission.
pub const CLIENT_TOKEN_HEADER: &str = "clientToken";
/// Name of the fixed user-name header attached to every submission.
pub const USER_NAME_HEADER: &str = "userName";
/// Name of the operator-identifier query parameter.
pub const OMS_ID_PARAM: &str = "omsId";

/// Boxed future returned by [`RolloutTransport::dispatch`].
pub type DispatchFuture<'a> =
	Pin<Box<dyn Future<Output = Result<SubmissionResult, TransportError>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of delivering one rollout document.
///
/// Implementations hold no shared mutable state and require no synchronization; the admission
/// gate upstream is the only coordination point.
pub trait RolloutTransport
where
	Self: Send + Sync,
{
	/// Delivers the document to the endpoint and decodes the submission result.
	fn dispatch<'a>(&'a self, document: &'a Document, client_token: &'a str)
	-> DispatchFuture<'a>;
}

/// Default transport implementing the endpoint's wire contract on top of reqwest.
///
/// POSTs the JSON-encoded document to the configured endpoint with the `omsId` query parameter
/// and the `clientToken`/`userName` headers; any non-2xx status or undecodable body is a
/// [`TransportError`].
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
	client: ReqwestClient,
	endpoint: Url,
	oms_id: String,
	user_name: String,
}
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Builds a transport with a default reqwest client.
	pub fn new(config: &RolloutConfig) -> Self {
		Self::with_client(ReqwestClient::default(), config)
	}

	/// Builds a transport around an existing reqwest client.
	pub fn with_client(client: ReqwestClient, config: &RolloutConfig) -> Self {
		Self {
			client,
			endpoint: config.endpoint.clone(),
			oms_id: config.oms_id.clone(),
			user_name: config.user_name.clone(),
		}
	}
}
#[cfg(feature = "reqwest")]
impl RolloutTransport for ReqwestTransport {
	fn dispatch<'a>(
		&'a self,
		document: &'a Document,
		client_token: &'a str,
	) -> DispatchFuture<'a> {
		Box::pin(async move {
			let response = self
				.client
				.post(self.endpoint.clone())
				.query(&[(OMS_ID_PARAM, self.oms_id.as_str())])
				.header(CONTENT_TYPE, "application/json")
				.header(CLIENT_TOKEN_HEADER, client_token)
				.header(USER_NAME_HEADER, self.user_name.as_str())
				.header(ACCEPT, "*/*")
				.json(document)
				.send()
				.await?;
			let status = response.status();

			if !status.is_success() {
				return Err(TransportError::Status { status: status.as_u16() });
			}

			let body = response.bytes().await?;
			let mut deserializer = serde_json::Deserializer::from_slice(&body);

			serde_path_to_error::deserialize(&mut deserializer).map_err(|source| {
				TransportError::ResponseParse { source, status: Some(status.as_u16()) }
			})
		})
	}
}
