pub struct NotificationsServiceConfig {
    pub max_text_len: usize,
    pub max_page_size: u32,
}
