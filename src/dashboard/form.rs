//! Forms
//!
//! Named string fields with defaults, collected into a flat JSON object on
//! submit.

use serde_json::Value;

use crate::api::FormPayload;

#[derive(Debug, Clone, PartialEq)]
struct Field {
    name: String,
    default: String,
    value: String,
}

/// An ordered set of named text fields
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Form {
    fields: Vec<Field>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field holding `default` until changed
    pub fn field(mut self, name: &str, default: &str) -> Self {
        self.fields.push(Field {
            name: name.to_string(),
            default: default.to_string(),
            value: default.to_string(),
        });
        self
    }

    /// Set a field's value, adding the field if the form lacks it
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => field.value = value,
            None => self.fields.push(Field {
                name: name.to_string(),
                default: String::new(),
                value,
            }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    /// Restore every field to its default
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value = field.default.clone();
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|f| (f.name.as_str(), f.value.as_str()))
    }

    /// Every field as a JSON string
    pub fn to_payload(&self) -> FormPayload {
        self.entries()
            .map(|(name, value)| (name.to_string(), Value::String(value.to_string())))
            .collect()
    }
}

/// The add-transaction form: `amount`, `type`, `category_id`, `description`
pub fn transaction_form() -> Form {
    Form::new()
        .field("amount", "")
        .field("type", "income")
        .field("category_id", "")
        .field("description", "")
}

/// The edit-transaction form: same fields as the add form, all blank
///
/// Blank fields are left out of the request, so the backend keeps their
/// stored values.
pub fn edit_form() -> Form {
    Form::new()
        .field("amount", "")
        .field("type", "")
        .field("category_id", "")
        .field("description", "")
}

/// The add-category form: `name`
pub fn category_form() -> Form {
    Form::new().field("name", "")
}

/// Payload for `add_transaction`: all fields as strings, `amount` as a number
///
/// Unparseable amounts become NaN, which JSON can only carry as `null`.
pub fn transaction_payload(form: &Form) -> FormPayload {
    let mut payload = form.to_payload();
    let amount = parse_float_prefix(form.get("amount").unwrap_or_default());
    payload.insert("amount".to_string(), number_value(amount));
    payload
}

/// Payload for `edit_transaction`: only the filled-in fields, `amount` as a number
pub fn edit_payload(form: &Form) -> FormPayload {
    form.entries()
        .filter(|(_, value)| !value.is_empty())
        .map(|(name, value)| {
            let value = if name == "amount" {
                number_value(parse_float_prefix(value))
            } else {
                Value::String(value.to_string())
            };
            (name.to_string(), value)
        })
        .collect()
}

fn number_value(n: f64) -> Value {
    serde_json::Number::from_f64(n)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// Parse the longest leading decimal number of `input`
///
/// Leading whitespace is skipped and trailing garbage ignored, so `"12abc"`
/// is `12` and `"abc"` is NaN. `"Infinity"` with an optional sign is
/// accepted.
pub fn parse_float_prefix(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < len && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }

    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < len && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}
