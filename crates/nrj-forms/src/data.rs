//! Contact form values

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A field of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
	Name,
	Email,
	Phone,
	Subject,
	Message,
}

impl ContactField {
	/// All fields in form order.
	pub const ALL: [ContactField; 5] = [
		ContactField::Name,
		ContactField::Email,
		ContactField::Phone,
		ContactField::Subject,
		ContactField::Message,
	];

	/// The HTML `name` attribute and JSON key of this field.
	pub fn as_str(&self) -> &'static str {
		match self {
			ContactField::Name => "name",
			ContactField::Email => "email",
			ContactField::Phone => "phone",
			ContactField::Subject => "subject",
			ContactField::Message => "message",
		}
	}

	pub fn is_required(&self) -> bool {
		matches!(
			self,
			ContactField::Name | ContactField::Email | ContactField::Message
		)
	}
}

impl fmt::Display for ContactField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown contact form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for ContactField {
	type Err = UnknownField;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		ContactField::ALL
			.into_iter()
			.find(|field| field.as_str() == s)
			.ok_or_else(|| UnknownField(s.to_string()))
	}
}

/// Values entered into the contact form
///
/// Serializes to the JSON body posted to the contact endpoint.
///
/// # Examples
///
/// ```
/// use nrj_forms::{ContactField, ContactFormData};
///
/// let mut data = ContactFormData::default();
/// data.set(ContactField::Name, "Ada");
/// assert_eq!(data.get(ContactField::Name), "Ada");
/// assert!(!data.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormData {
	pub name: String,
	pub email: String,
	pub phone: String,
	pub subject: String,
	pub message: String,
}

impl ContactFormData {
	pub fn get(&self, field: ContactField) -> &str {
		match field {
			ContactField::Name => &self.name,
			ContactField::Email => &self.email,
			ContactField::Phone => &self.phone,
			ContactField::Subject => &self.subject,
			ContactField::Message => &self.message,
		}
	}

	fn slot(&mut self, field: ContactField) -> &mut String {
		match field {
			ContactField::Name => &mut self.name,
			ContactField::Email => &mut self.email,
			ContactField::Phone => &mut self.phone,
			ContactField::Subject => &mut self.subject,
			ContactField::Message => &mut self.message,
		}
	}

	/// Replace the value of exactly one field.
	pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
		*self.slot(field) = value.into();
	}

	/// Whether every field is the empty string.
	pub fn is_empty(&self) -> bool {
		ContactField::ALL.iter().all(|field| self.get(*field).is_empty())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("name", ContactField::Name)]
	#[case("email", ContactField::Email)]
	#[case("phone", ContactField::Phone)]
	#[case("subject", ContactField::Subject)]
	#[case("message", ContactField::Message)]
	fn test_field_from_name(#[case] name: &str, #[case] expected: ContactField) {
		assert_eq!(name.parse::<ContactField>(), Ok(expected));
		assert_eq!(expected.to_string(), name);
	}

	#[rstest]
	#[case("Name")]
	#[case("csrfmiddlewaretoken")]
	#[case("")]
	fn test_unknown_field_name(#[case] name: &str) {
		assert_eq!(
			name.parse::<ContactField>(),
			Err(UnknownField(name.to_string()))
		);
	}

	#[rstest]
	fn test_set_only_touches_one_field() {
		for field in ContactField::ALL {
			let before = ContactFormData {
				name: "n".to_string(),
				email: "e".to_string(),
				phone: "p".to_string(),
				subject: "s".to_string(),
				message: "m".to_string(),
			};
			let mut after = before.clone();

			after.set(field, "changed");

			for other in ContactField::ALL {
				if other == field {
					assert_eq!(after.get(other), "changed");
				} else {
					assert_eq!(after.get(other), before.get(other));
				}
			}
		}
	}

	#[rstest]
	fn test_required_fields() {
		let required: Vec<_> = ContactField::ALL
			.into_iter()
			.filter(ContactField::is_required)
			.collect();

		assert_eq!(
			required,
			vec![ContactField::Name, ContactField::Email, ContactField::Message]
		);
	}

	#[rstest]
	fn test_serializes_as_flat_object() {
		let data = ContactFormData {
			name: "Ada".to_string(),
			email: "ada@example.com".to_string(),
			..Default::default()
		};

		assert_eq!(
			serde_json::to_value(&data).unwrap(),
			serde_json::json!({
				"name": "Ada",
				"email": "ada@example.com",
				"phone": "",
				"subject": "",
				"message": ""
			})
		);
	}
}
