//! Response envelope and pagination metadata

use serde::{Deserialize, Serialize};

/// Wrapper around every successful content response.
///
/// `data` is always present; `meta` only accompanies paginated collections.
///
/// # Examples
///
/// ```
/// use nrj_content::ContentEnvelope;
///
/// let json = r#"{
///     "data": [1, 2, 3],
///     "meta": {"pagination": {"total": 3, "count": 3, "per_page": 10, "current_page": 1, "total_pages": 1}}
/// }"#;
/// let envelope: ContentEnvelope<Vec<u32>> = serde_json::from_str(json).unwrap();
/// assert_eq!(envelope.data, vec![1, 2, 3]);
/// assert!(envelope.pagination().unwrap().is_consistent());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentEnvelope<T> {
	pub data: T,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub meta: Option<EnvelopeMeta>,
}

impl<T> ContentEnvelope<T> {
	/// Wrap `data` without any metadata.
	pub fn new(data: T) -> Self {
		Self { data, meta: None }
	}

	/// Attach pagination metadata.
	pub fn with_pagination(mut self, pagination: Pagination) -> Self {
		self.meta = Some(EnvelopeMeta {
			pagination: Some(pagination),
		});
		self
	}

	/// Pagination metadata, if the response carried any.
	pub fn pagination(&self) -> Option<&Pagination> {
		self.meta.as_ref().and_then(|meta| meta.pagination.as_ref())
	}

	/// Unwrap the payload, dropping metadata.
	pub fn into_data(self) -> T {
		self.data
	}

	/// Transform the payload while keeping metadata.
	pub fn map<U, F>(self, f: F) -> ContentEnvelope<U>
	where
		F: FnOnce(T) -> U,
	{
		ContentEnvelope {
			data: f(self.data),
			meta: self.meta,
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeMeta {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub pagination: Option<Pagination>,
}

/// Page-number pagination metadata as reported by the content API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
	/// Total number of items across all pages
	pub total: u64,
	/// Number of items on this page
	pub count: u64,
	/// Page size
	pub per_page: u64,
	/// Current page number (1-indexed)
	pub current_page: u64,
	/// Total number of pages
	pub total_pages: u64,
}

impl Pagination {
	/// Number of pages needed for `total` items at `per_page` per page.
	///
	/// A zero page size yields zero pages.
	///
	/// # Examples
	///
	/// ```
	/// use nrj_content::Pagination;
	///
	/// assert_eq!(Pagination::pages_for(0, 10), 0);
	/// assert_eq!(Pagination::pages_for(10, 10), 1);
	/// assert_eq!(Pagination::pages_for(11, 10), 2);
	/// assert_eq!(Pagination::pages_for(5, 0), 0);
	/// ```
	pub fn pages_for(total: u64, per_page: u64) -> u64 {
		if per_page == 0 {
			return 0;
		}
		total.div_ceil(per_page)
	}

	/// Whether `count <= per_page` and `total_pages == ceil(total / per_page)`.
	///
	/// A zero page size is only consistent for an empty result set.
	///
	/// # Examples
	///
	/// ```
	/// use nrj_content::Pagination;
	///
	/// let ok = Pagination { total: 25, count: 10, per_page: 10, current_page: 1, total_pages: 3 };
	/// assert!(ok.is_consistent());
	///
	/// let bad = Pagination { total: 25, count: 10, per_page: 10, current_page: 1, total_pages: 2 };
	/// assert!(!bad.is_consistent());
	/// ```
	pub fn is_consistent(&self) -> bool {
		if self.per_page == 0 {
			return self.total == 0 && self.count == 0 && self.total_pages == 0;
		}
		self.count <= self.per_page && self.total_pages == Self::pages_for(self.total, self.per_page)
	}

	pub fn has_next(&self) -> bool {
		self.current_page < self.total_pages
	}

	pub fn has_previous(&self) -> bool {
		self.current_page > 1
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn pagination(total: u64, count: u64, per_page: u64, total_pages: u64) -> Pagination {
		Pagination {
			total,
			count,
			per_page,
			current_page: 1,
			total_pages,
		}
	}

	#[rstest]
	#[case(pagination(0, 0, 10, 0), true)]
	#[case(pagination(30, 10, 10, 3), true)]
	#[case(pagination(31, 1, 10, 4), true)]
	#[case(pagination(31, 11, 10, 4), false)]
	#[case(pagination(31, 10, 10, 3), false)]
	#[case(pagination(0, 0, 0, 0), true)]
	#[case(pagination(5, 0, 0, 0), false)]
	fn test_pagination_consistency(#[case] meta: Pagination, #[case] expected: bool) {
		assert_eq!(meta.is_consistent(), expected);
	}

	#[rstest]
	fn test_pagination_navigation() {
		let first = Pagination {
			total: 25,
			count: 10,
			per_page: 10,
			current_page: 1,
			total_pages: 3,
		};
		assert!(first.has_next());
		assert!(!first.has_previous());

		let last = Pagination {
			current_page: 3,
			count: 5,
			..first
		};
		assert!(!last.has_next());
		assert!(last.has_previous());
	}

	#[rstest]
	fn test_envelope_without_meta_deserializes() {
		let envelope: ContentEnvelope<String> =
			serde_json::from_str(r#"{"data": "hello"}"#).unwrap();

		assert_eq!(envelope.data, "hello");
		assert!(envelope.meta.is_none());
		assert!(envelope.pagination().is_none());
	}

	#[rstest]
	fn test_envelope_with_empty_meta_deserializes() {
		let envelope: ContentEnvelope<Vec<u8>> =
			serde_json::from_str(r#"{"data": [], "meta": {}}"#).unwrap();

		assert!(envelope.meta.is_some());
		assert!(envelope.pagination().is_none());
	}

	#[rstest]
	fn test_envelope_missing_data_is_rejected() {
		let result = serde_json::from_str::<ContentEnvelope<Vec<u8>>>(r#"{"meta": {}}"#);
		assert!(result.is_err());
	}

	#[rstest]
	fn test_envelope_map_keeps_meta() {
		let envelope = ContentEnvelope::new(vec![1, 2, 3]).with_pagination(pagination(3, 3, 10, 1));

		let mapped = envelope.map(|items| items.len());

		assert_eq!(mapped.data, 3);
		assert_eq!(mapped.pagination().map(|p| p.total), Some(3));
	}
}
