use crate::models::OrderStatus;

#[derive(Debug, Clone, Default)]
pub struct AdminOrderQuery {
    pub status: Option<OrderStatus>,
    pub user_id: Option<i64>,
}

impl AdminOrderQuery {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(status) = self.status {
            params.push(("status", status.as_str().to_string()));
        }
        if let Some(user_id) = self.user_id {
            params.push(("userId", user_id.to_string()));
        }
        params
    }
}
