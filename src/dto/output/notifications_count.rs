use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct NotificationsCount {
    pub count: u64,
}
