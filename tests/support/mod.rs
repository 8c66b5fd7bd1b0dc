//! Shared builders for integration tests.

#![allow(dead_code)]

// crates.io
use crpt_rollout::{
	config::RolloutConfig,
	document::{
		DocType, Document, DocumentFormat, Import, Produced, Product, ProductionType, UsageType,
	},
	url::Url,
};
use time::{Duration, OffsetDateTime};

/// Client token accepted by every mock in these tests.
pub const CLIENT_TOKEN: &str = "token-0001";

/// Builds a config pointing at the provided endpoint with the given gate parameters.
pub fn config(endpoint: &str, window: Duration, ceiling: u32) -> RolloutConfig {
	RolloutConfig::new(
		Url::parse(endpoint).expect("Test endpoint URL should parse successfully."),
		"oms-7",
		window,
		ceiling,
	)
}

/// Builds a complete, valid own-production document anchored to the current UTC date.
pub fn valid_introduce_document() -> Document {
	let today = OffsetDateTime::now_utc().date();

	Document {
		usage_type: Some(UsageType::SentToPrinter),
		document_format: Some(DocumentFormat::Manual),
		doc_type: Some(DocType::LpIntroduceGoodsAuto),
		participant_inn: Some("1234567890".into()),
		production_date: Some(today - Duration::days(30)),
		products: vec![Product {
			code: "0104600000000".into(),
			certificate: None,
			tnved_code: "0123456789".into(),
		}],
		produced: Some(Produced {
			producer_inn: "123456789012".into(),
			owner_inn: "1234567890".into(),
			production_type: ProductionType::OwnProduction,
		}),
		import: None,
	}
}

/// Builds a complete, valid import document anchored to the current UTC date.
pub fn valid_import_document() -> Document {
	let today = OffsetDateTime::now_utc().date();

	Document {
		doc_type: Some(DocType::LpGoodsImportAuto),
		produced: None,
		import: Some(Import {
			declaration_date: today - Duration::days(30),
			declaration_number: "10702030/261225/0088888".into(),
			customs_code: "10702030".into(),
			decision_code: 1,
		}),
		..valid_introduce_document()
	}
}
