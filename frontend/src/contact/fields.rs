use wasm_bindgen::JsValue;
use web_sys::FormData;

use crate::config;

/// Visible inputs of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Company,
    Service,
    Message,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Company,
        Field::Service,
        Field::Message,
    ];

    /// Form-data key the relay receives.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Company => "company",
            Field::Service => "service",
            Field::Message => "message",
        }
    }

    /// Text inputs and the textarea highlight their wrapper while focused.
    pub fn shows_focus(self) -> bool {
        !matches!(self, Field::Service)
    }
}

/// Controlled state of the contact form inputs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub service: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Company => &self.company,
            Field::Service => &self.service,
            Field::Message => &self.message,
        }
    }

    pub fn with(&self, field: Field, value: String) -> Self {
        let mut next = self.clone();
        match field {
            Field::Name => next.name = value,
            Field::Email => next.email = value,
            Field::Phone => next.phone = value,
            Field::Company => next.company = value,
            Field::Service => next.service = value,
            Field::Message => next.message = value,
        }
        next
    }

    /// Snapshot for submission: hidden fields first, then the visible ones.
    pub fn to_field_set(&self) -> FormFieldSet {
        let mut set = FormFieldSet::default();
        set.push("access_key", config::get_access_key());
        set.push("subject", config::FORM_SUBJECT);
        set.push("from_name", config::FORM_FROM_NAME);
        for field in Field::ALL {
            set.push(field.key(), self.get(field));
        }
        set
    }
}

/// Ordered name/value pairs captured at submit time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormFieldSet {
    entries: Vec<(String, String)>,
}

impl FormFieldSet {
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Multipart body for the browser's fetch.
    pub fn to_form_data(&self) -> Result<FormData, JsValue> {
        let data = FormData::new()?;
        for (name, value) in self.iter() {
            data.append_with_str(name, value)?;
        }
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_set_carries_hidden_fields_before_visible_ones() {
        let fields = ContactFields {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            ..Default::default()
        };
        let set = fields.to_field_set();
        let keys: Vec<&str> = set.iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec!["access_key", "subject", "from_name", "name", "email", "phone", "company", "service", "message"]
        );
        assert_eq!(set.get("subject"), Some(config::FORM_SUBJECT));
        assert_eq!(set.get("name"), Some("Ada"));
        assert_eq!(set.get("phone"), Some(""));
    }

    #[test]
    fn service_select_has_no_focus_highlight() {
        assert!(!Field::Service.shows_focus());
        let highlighted: Vec<Field> = Field::ALL.into_iter().filter(|f| f.shows_focus()).collect();
        assert_eq!(
            highlighted,
            vec![Field::Name, Field::Email, Field::Phone, Field::Company, Field::Message]
        );
    }

    #[test]
    fn with_replaces_one_field_only() {
        let fields = ContactFields::default()
            .with(Field::Company, "Acme".into())
            .with(Field::Message, "hello".into());
        assert_eq!(fields.company, "Acme");
        assert_eq!(fields.message, "hello");
        assert!(fields.name.is_empty());
        assert_eq!(fields.get(Field::Company), "Acme");
    }
}
