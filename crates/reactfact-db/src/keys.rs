//! Storage keys. Friend lists are kept per user id.

pub const USER: &str = "user";
pub const THEME: &str = "theme";

pub fn friends(user_id: &str) -> String {
    format!("friends_{}", user_id)
}

pub fn pending_requests(user_id: &str) -> String {
    format!("pending_requests_{}", user_id)
}

pub fn sent_requests(user_id: &str) -> String {
    format!("sent_requests_{}", user_id)
}
