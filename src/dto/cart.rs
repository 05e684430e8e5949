use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuantityQuery {
    pub quantity: u32,
}

impl QuantityQuery {
    pub fn to_query(self) -> Vec<(&'static str, String)> {
        vec![("quantity", self.quantity.to_string())]
    }
}
