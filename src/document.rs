//! Rollout document model and its JSON wire shape.
//!
//! Field names are camelCase on the wire, dates are formatted `yyyy-MM-dd`, and absent optional
//! payloads are omitted entirely. Required fields are modeled as `Option` so that incomplete
//! documents remain representable and are rejected by the
//! [`Validator`](crate::validate::Validator) instead of panicking at construction time.

// self
use crate::_prelude::*;

time::serde::format_description!(ymd, Date, "[year]-[month]-[day]");

/// Usage types accepted by the rollout endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UsageType {
	/// Codes are sent to a printer.
	SentToPrinter,
}

/// Document formats accepted by the rollout endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentFormat {
	/// Manually composed document.
	Manual,
}

/// Document types; the type selects which of the two mutually-exclusive sub-payloads applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocType {
	/// Introduction of own-produced goods; requires the [`Produced`] payload.
	LpIntroduceGoodsAuto,
	/// Introduction of imported goods; requires the [`Import`] payload.
	LpGoodsImportAuto,
}

/// Certificate document kinds, serialized as their wire codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CertificateDocument {
	/// Conformity certificate, wire code `1`.
	#[serde(rename = "1")]
	Certificate,
	/// Conformity declaration, wire code `2`.
	#[serde(rename = "2")]
	Declaration,
}

/// Production types accepted for the [`Produced`] payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductionType {
	/// Goods produced by the participant itself.
	OwnProduction,
}

/// A rollout document as submitted to the endpoint.
///
/// Caller-constructed and borrowed for the duration of one submission; the client never retains
/// it after the call returns.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
	/// Usage type tag.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub usage_type: Option<UsageType>,
	/// Document format tag.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub document_format: Option<DocumentFormat>,
	/// Document type tag selecting the active sub-payload.
	#[serde(rename = "type", skip_serializing_if = "Option::is_none")]
	pub doc_type: Option<DocType>,
	/// Participant tax identifier (10 or 12 digits).
	#[serde(skip_serializing_if = "Option::is_none")]
	pub participant_inn: Option<String>,
	/// Production date, strictly in the recent past.
	#[serde(with = "ymd::option", skip_serializing_if = "Option::is_none")]
	pub production_date: Option<Date>,
	/// Ordered product entries.
	pub products: Vec<Product>,
	/// Own-production payload, required for [`DocType::LpIntroduceGoodsAuto`].
	#[serde(skip_serializing_if = "Option::is_none")]
	pub produced: Option<Produced>,
	/// Import payload, required for [`DocType::LpGoodsImportAuto`].
	#[serde(skip_serializing_if = "Option::is_none")]
	pub import: Option<Import>,
}

/// A single product entry within a [`Document`].
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
	/// Marking code.
	pub code: String,
	/// Optional certificate reference; the triple is all-or-nothing.
	#[serde(flatten)]
	pub certificate: Option<Certificate>,
	/// 10-character commodity (TN VED) code.
	pub tnved_code: String,
}

/// Certificate reference triple carried by a [`Product`], flattened onto the product on the wire.
#[derive(Clone, Debug, Serialize)]
pub struct Certificate {
	/// Certificate document kind.
	#[serde(rename = "certificateDocument")]
	pub document: CertificateDocument,
	/// Certificate issue date, strictly in the recent past.
	#[serde(rename = "certificateDocumentDate", with = "ymd")]
	pub date: Date,
	/// Certificate number.
	#[serde(rename = "certificateDocumentNumber")]
	pub number: String,
}

/// Own-production payload of a [`Document`].
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Produced {
	/// Producer tax identifier (10 or 12 digits).
	pub producer_inn: String,
	/// Owner tax identifier (10 or 12 digits).
	pub owner_inn: String,
	/// Production type tag.
	pub production_type: ProductionType,
}

/// Import payload of a [`Document`].
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Import {
	/// Customs declaration date, strictly in the recent past.
	#[serde(with = "ymd")]
	pub declaration_date: Date,
	/// Customs declaration number.
	pub declaration_number: String,
	/// Customs office code.
	pub customs_code: String,
	/// Customs decision code, must be positive.
	pub decision_code: i64,
}

/// Opaque identifiers returned by the rollout endpoint—passthrough data.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
	/// Operator (OMS) identifier echoed by the endpoint.
	pub oms_id: String,
	/// Report identifier assigned to the submission.
	pub report_id: String,
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	use time::macros::date;
	// self
	use super::*;

	#[test]
	fn document_serializes_to_the_wire_shape() {
		let document = Document {
			usage_type: Some(UsageType::SentToPrinter),
			document_format: Some(DocumentFormat::Manual),
			doc_type: Some(DocType::LpIntroduceGoodsAuto),
			participant_inn: Some("1234567890".into()),
			production_date: Some(date!(2026 - 08 - 01)),
			products: vec![Product {
				code: "code-1".into(),
				certificate: Some(Certificate {
					document: CertificateDocument::Certificate,
					date: date!(2026 - 07 - 15),
					number: "cert-42".into(),
				}),
				tnved_code: "0123456789".into(),
			}],
			produced: Some(Produced {
				producer_inn: "123456789012".into(),
				owner_inn: "1234567890".into(),
				production_type: ProductionType::OwnProduction,
			}),
			import: None,
		};
		let value = serde_json::to_value(&document)
			.expect("Document serialization should succeed for a fully populated value.");

		assert_eq!(
			value,
			json!({
				"usageType": "SENT_TO_PRINTER",
				"documentFormat": "MANUAL",
				"type": "LP_INTRODUCE_GOODS_AUTO",
				"participantInn": "1234567890",
				"productionDate": "2026-08-01",
				"products": [{
					"code": "code-1",
					"certificateDocument": "1",
					"certificateDocumentDate": "2026-07-15",
					"certificateDocumentNumber": "cert-42",
					"tnvedCode": "0123456789",
				}],
				"produced": {
					"producerInn": "123456789012",
					"ownerInn": "1234567890",
					"productionType": "OWN_PRODUCTION",
				},
			}),
		);
	}

	#[test]
	fn absent_optionals_are_omitted() {
		let value = serde_json::to_value(Document::default())
			.expect("Document serialization should succeed for an empty value.");

		assert_eq!(value, json!({ "products": [] }));
	}
}
