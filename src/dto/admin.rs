use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::validation::{FormValidator, ValidationErrors, rules};

/// File part sent alongside a restaurant or dish form.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantForm {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl RestaurantForm {
    pub fn validate(&self, has_upload: bool) -> Result<(), ValidationErrors> {
        FormValidator::new()
            .field("name", &self.name, &rules::restaurant_name())
            .field("description", &self.description, &rules::restaurant_description())
            .field("address", &self.address, &rules::restaurant_address())
            .field("phone", &self.phone, &rules::restaurant_phone())
            .optional_field("url", self.url.as_deref(), &rules::image_url(has_upload))
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishForm {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub price: Decimal,
    pub weight: u32,
}

impl DishForm {
    pub fn validate(&self, has_upload: bool) -> Result<(), ValidationErrors> {
        let price_positive = |_: &str| {
            (self.price <= Decimal::ZERO).then(|| "Price must be greater than 0".to_string())
        };
        let weight_positive =
            |_: &str| (self.weight == 0).then(|| "Weight must be greater than 0".to_string());
        FormValidator::new()
            .field("name", &self.name, &rules::dish_name())
            .optional_field(
                "description",
                self.description.as_deref(),
                &rules::dish_description(),
            )
            .optional_field("url", self.url.as_deref(), &rules::image_url(has_upload))
            .check("price", &self.price.to_string(), &price_positive)
            .check("weight", &self.weight.to_string(), &weight_positive)
            .finish()
    }
}
