//! Pure document validation applied before any capacity is reserved.

// self
use crate::{
	_prelude::*,
	document::{DocType, Document, Import, Produced, Product, ProductionType},
};

const RECENT_PAST_YEARS: i32 = 5;
const TNVED_CODE_LEN: usize = 10;
const INN_LENGTHS: [usize; 2] = [10, 12];

/// Stateless document validator.
///
/// The reference date is injected at construction so the predicate stays deterministic under
/// test; [`Validator::for_today`] reads the UTC clock once instead of inside the checks.
#[derive(Clone, Copy, Debug)]
pub struct Validator {
	today: Date,
}
impl Validator {
	/// Creates a validator that evaluates "recent past" against the provided date.
	pub fn new(today: Date) -> Self {
		Self { today }
	}

	/// Creates a validator anchored to the current UTC date.
	pub fn for_today() -> Self {
		Self::new(OffsetDateTime::now_utc().date())
	}

	/// Checks a document's structural and business-rule validity.
	///
	/// Pure and total: malformed input yields `false`, never a panic. Calling it twice on the
	/// same document yields the same result.
	pub fn is_valid(&self, document: &Document) -> bool {
		let (Some(_), Some(_), Some(doc_type)) =
			(document.usage_type, document.document_format, document.doc_type)
		else {
			return false;
		};

		document.participant_inn.as_deref().is_some_and(inn_is_valid)
			&& document.production_date.is_some_and(|date| self.recent_past(date))
			&& document.products.iter().all(|product| self.product_is_valid(product))
			&& self.payload_is_valid(document, doc_type)
	}

	// Only the active sub-payload is checked; absence of the non-applicable side is valid by
	// design, absence of the applicable side is a failure.
	fn payload_is_valid(&self, document: &Document, doc_type: DocType) -> bool {
		match doc_type {
			DocType::LpIntroduceGoodsAuto =>
				document.import.is_none()
					&& document.produced.as_ref().is_some_and(produced_is_valid),
			DocType::LpGoodsImportAuto =>
				document.produced.is_none()
					&& document.import.as_ref().is_some_and(|import| self.import_is_valid(import)),
		}
	}

	fn product_is_valid(&self, product: &Product) -> bool {
		product.tnved_code.len() == TNVED_CODE_LEN
			&& !product.tnved_code.trim().is_empty()
			&& !product.code.trim().is_empty()
			&& product
				.certificate
				.as_ref()
				.is_none_or(|certificate| self.recent_past(certificate.date))
	}

	fn import_is_valid(&self, import: &Import) -> bool {
		import.decision_code > 0
			&& !import.customs_code.trim().is_empty()
			&& !import.declaration_number.trim().is_empty()
			&& self.recent_past(import.declaration_date)
	}

	fn recent_past(&self, date: Date) -> bool {
		let Some(floor) = years_before(self.today, RECENT_PAST_YEARS) else {
			return false;
		};

		date > floor && date < self.today
	}
}

fn produced_is_valid(produced: &Produced) -> bool {
	produced.production_type == ProductionType::OwnProduction
		&& inn_is_valid(&produced.producer_inn)
		&& inn_is_valid(&produced.owner_inn)
}

fn inn_is_valid(inn: &str) -> bool {
	INN_LENGTHS.contains(&inn.len()) && inn.bytes().all(|byte| byte.is_ascii_digit())
}

// Feb 29 anchors fall back to Feb 28 of the target year.
fn years_before(date: Date, years: i32) -> Option<Date> {
	let year = date.year() - years;

	date.replace_year(year)
		.ok()
		.or_else(|| Date::from_calendar_date(year, time::Month::February, 28).ok())
}
