use serde::{Deserialize, Serialize};

use crate::validation::{FormValidator, ValidationErrors, rules};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub name: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        FormValidator::new()
            .field("name", &self.name, &rules::login_field())
            .field("password", &self.password, &rules::login_field())
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        FormValidator::new()
            .field("name", &self.name, &rules::register_name())
            .field("email", &self.email, &rules::email())
            .field("password", &self.password, &rules::password())
            .finish()
    }
}

/// Login/register reply. Deliberately thin: the full identity comes from `/auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
}
