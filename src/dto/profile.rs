use serde::{Deserialize, Serialize};

use crate::validation::{FormValidator, ValidationErrors, rules};

/// Partial profile patch. Missing or blank fields are left untouched by the
/// backend, so only non-blank values are validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ProfileUpdate {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut form = FormValidator::new();
        if let Some(email) = filled(self.email.as_deref()) {
            form = form.field("email", email, &rules::email());
        }
        if let Some(phone) = filled(self.phone.as_deref()) {
            form = form.field("phone", phone, &rules::phone());
        }
        if let Some(address) = filled(self.address.as_deref()) {
            form = form.field("address", address, &rules::address());
        }
        form.finish()
    }
}

fn filled(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryInfoUpdate {
    pub address: String,
    pub phone: String,
}

impl DeliveryInfoUpdate {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        FormValidator::new()
            .field("address", &self.address, &rules::address())
            .field("phone", &self.phone, &rules::phone())
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
}

impl PasswordChange {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        FormValidator::new()
            .field("oldPassword", &self.old_password, &rules::login_field())
            .field("newPassword", &self.new_password, &rules::password())
            .finish()
    }

    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("oldPassword", self.old_password.clone()),
            ("newPassword", self.new_password.clone()),
        ]
    }
}
