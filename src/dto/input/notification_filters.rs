use serde::Deserialize;

#[derive(Debug, Default, Clone, Deserialize)]
pub struct NotificationFilters {
    pub read: Option<bool>,
}
