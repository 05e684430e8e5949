//! Form validation shared by every request that carries user input.
//!
//! Rules are checked in a fixed order and the first failing rule wins, so a
//! field only ever reports one message at a time.

use std::{collections::BTreeMap, fmt, sync::LazyLock};

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

pub type CustomValidator<'a> = &'a dyn Fn(&str) -> Option<String>;

#[derive(Debug, Clone, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub email: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Regex>,
}

impl ValidationRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn required_if(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn email(mut self) -> Self {
        self.email = true;
        self
    }

    pub fn min_length(mut self, n: usize) -> Self {
        self.min_length = Some(n);
        self
    }

    pub fn max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }

    pub fn length(self, min: usize, max: usize) -> Self {
        self.min_length(min).max_length(max)
    }

    pub fn pattern(mut self, re: Regex) -> Self {
        self.pattern = Some(re);
        self
    }
}

/// Returns the first error message for `value`, or `None` when it passes.
pub fn validate_input(
    value: &str,
    rules: Option<&ValidationRules>,
    custom: Option<CustomValidator<'_>>,
) -> Option<String> {
    if let Some(custom) = custom {
        if let Some(message) = custom(value) {
            return Some(message);
        }
    }

    let rules = rules?;
    let blank = value.trim().is_empty();

    if rules.required && blank {
        return Some("This field is required".to_string());
    }
    if blank {
        return None;
    }

    if rules.email && !EMAIL_RE.is_match(value) {
        return Some("Please enter a valid email address".to_string());
    }

    let len = value.chars().count();
    if let Some(min) = rules.min_length.filter(|min| len < *min) {
        return Some(format!("Must be at least {min} characters"));
    }
    if let Some(max) = rules.max_length.filter(|max| len > *max) {
        return Some(format!("Must be no more than {max} characters"));
    }

    if let Some(re) = &rules.pattern {
        if !re.is_match(value) {
            return Some("Invalid format".to_string());
        }
    }

    None
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields.entry(field.to_string()).or_insert_with(|| message.into());
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.fields {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Collects per-field results and turns them into one `Result` at the end.
#[derive(Debug, Default)]
pub struct FormValidator {
    errors: ValidationErrors,
}

impl FormValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &str, value: &str, rules: &ValidationRules) -> Self {
        if let Some(message) = validate_input(value, Some(rules), None) {
            self.errors.add(name, message);
        }
        self
    }

    pub fn optional_field(self, name: &str, value: Option<&str>, rules: &ValidationRules) -> Self {
        self.field(name, value.unwrap_or_default(), rules)
    }

    pub fn check(mut self, name: &str, value: &str, validator: CustomValidator<'_>) -> Self {
        if let Some(message) = validate_input(value, None, Some(validator)) {
            self.errors.add(name, message);
        }
        self
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

pub mod rules {
    use super::ValidationRules;

    pub fn register_name() -> ValidationRules {
        ValidationRules::new().required().min_length(2)
    }

    pub fn email() -> ValidationRules {
        ValidationRules::new().required().email()
    }

    pub fn password() -> ValidationRules {
        ValidationRules::new().required().min_length(6)
    }

    pub fn login_field() -> ValidationRules {
        ValidationRules::new().required()
    }

    pub fn phone() -> ValidationRules {
        ValidationRules::new().required().min_length(10)
    }

    pub fn address() -> ValidationRules {
        ValidationRules::new().required().min_length(10)
    }

    pub fn restaurant_name() -> ValidationRules {
        ValidationRules::new().required().length(2, 100)
    }

    pub fn restaurant_description() -> ValidationRules {
        ValidationRules::new().required().length(10, 500)
    }

    pub fn restaurant_address() -> ValidationRules {
        ValidationRules::new().required().length(5, 200)
    }

    pub fn restaurant_phone() -> ValidationRules {
        ValidationRules::new().required().length(10, 20)
    }

    pub fn dish_name() -> ValidationRules {
        ValidationRules::new().required().length(2, 100)
    }

    pub fn dish_description() -> ValidationRules {
        ValidationRules::new().length(10, 500)
    }

    /// Image URL is only mandatory when no file is being uploaded.
    pub fn image_url(has_upload: bool) -> ValidationRules {
        ValidationRules::new().required_if(!has_upload).min_length(5)
    }
}
