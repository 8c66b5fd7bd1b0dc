mod support;

// std
use std::time::Duration as StdDuration;
// crates.io
use httpmock::prelude::*;
use time::Duration;
use tokio::time::sleep;
// self
use crpt_rollout::{
	client::RolloutClient,
	document::SubmissionResult,
	error::{Error, TransportError, ValidationError},
	transport::{CLIENT_TOKEN_HEADER, USER_NAME_HEADER},
};
use support::{CLIENT_TOKEN, config, valid_import_document, valid_introduce_document};

#[tokio::test]
async fn submit_posts_the_document_and_parses_the_response() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/rollout")
				.query_param("omsId", "oms-7")
				.header("content-type", "application/json")
				.header(CLIENT_TOKEN_HEADER, CLIENT_TOKEN)
				.header(USER_NAME_HEADER, "user_name")
				.header("accept", "*/*");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"omsId\":\"oms-7\",\"reportId\":\"report-9\"}");
		})
		.await;
	let client =
		RolloutClient::new(&config(&server.url("/rollout"), Duration::milliseconds(100), 2));
	let result = client
		.submit(&valid_introduce_document(), CLIENT_TOKEN)
		.await
		.expect("Submission against a healthy endpoint should succeed.");

	assert_eq!(
		result,
		SubmissionResult { oms_id: "oms-7".into(), report_id: "report-9".into() },
	);

	mock.assert_calls_async(1).await;
}

#[tokio::test]
async fn blank_client_token_never_reaches_the_endpoint() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/rollout");
			then.status(200);
		})
		.await;
	let client =
		RolloutClient::new(&config(&server.url("/rollout"), Duration::milliseconds(100), 2));
	let error = client
		.submit(&valid_introduce_document(), "   ")
		.await
		.expect_err("Blank client token should be rejected before admission.");

	assert!(matches!(error, Error::Validation(ValidationError::MissingClientToken)));
	assert_eq!(client.in_flight(), 0);

	mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn invalid_document_never_reaches_the_endpoint() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/rollout");
			then.status(200);
		})
		.await;
	let client =
		RolloutClient::new(&config(&server.url("/rollout"), Duration::milliseconds(100), 2));
	let mut document = valid_import_document();

	if let Some(import) = document.import.as_mut() {
		// decisionCode must be strictly positive.
		import.decision_code = 0;
	}

	let error = client
		.submit(&document, CLIENT_TOKEN)
		.await
		.expect_err("Invalid document should be rejected before admission.");

	assert!(matches!(error, Error::Validation(ValidationError::InvalidDocument)));
	assert_eq!(client.in_flight(), 0);

	mock.assert_calls_async(0).await;
}

#[tokio::test]
async fn non_success_status_maps_to_a_transport_error_and_still_releases() {
	let server = MockServer::start_async().await;
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/rollout");
			then.status(500);
		})
		.await;
	let client =
		RolloutClient::new(&config(&server.url("/rollout"), Duration::milliseconds(100), 0));
	let error = client
		.submit(&valid_introduce_document(), CLIENT_TOKEN)
		.await
		.expect_err("A 500 response should surface as a transport error.");

	assert!(matches!(error, Error::Transport(TransportError::Status { status: 500 })));
	assert_eq!(client.in_flight(), 1);

	sleep(StdDuration::from_millis(250)).await;

	assert_eq!(client.in_flight(), 0);
}

#[tokio::test]
async fn malformed_response_maps_to_a_parse_error() {
	let server = MockServer::start_async().await;
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/rollout");
			then.status(200).header("content-type", "application/json").body("not json");
		})
		.await;
	let client =
		RolloutClient::new(&config(&server.url("/rollout"), Duration::milliseconds(100), 2));
	let error = client
		.submit(&valid_introduce_document(), CLIENT_TOKEN)
		.await
		.expect_err("An undecodable body should surface as a transport error.");

	assert!(matches!(error, Error::Transport(TransportError::ResponseParse { .. })));
}

#[tokio::test]
async fn closed_client_interrupts_submissions() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/rollout");
			then.status(200);
		})
		.await;
	let client =
		RolloutClient::new(&config(&server.url("/rollout"), Duration::milliseconds(100), 2));

	client.close();

	let error = client
		.submit(&valid_introduce_document(), CLIENT_TOKEN)
		.await
		.expect_err("A closed client should interrupt submissions.");

	assert!(matches!(error, Error::Interrupted(_)));

	mock.assert_calls_async(0).await;
}
