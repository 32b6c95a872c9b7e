use anyhow::anyhow;
use std::time::Duration;

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub db_connection_string: String,
    pub db_name: String,

    pub max_notification_text_len: usize,
    pub max_page_size: u32,

    /// Base URL without trailing `/v1`
    pub stripe_api_url: String,
    pub stripe_secret_key: String,
    pub stripe_payment_success_url: String,
    pub stripe_request_timeout: Duration,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("SUBSCRIPTION_BACKEND_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("SUBSCRIPTION_BACKEND_LOG_FILENAME")?;
        let db_connection_string = Self::env_var("SUBSCRIPTION_BACKEND_DB_CONNECTION_STRING")?;
        let db_name = Self::env_var("SUBSCRIPTION_BACKEND_DB_NAME")?;
        let max_notification_text_len =
            Self::env_var("SUBSCRIPTION_BACKEND_MAX_NOTIFICATION_TEXT_LEN")?.parse()?;
        let max_page_size = Self::env_var("SUBSCRIPTION_BACKEND_MAX_PAGE_SIZE")?.parse()?;
        let stripe_api_url = Self::env_var("SUBSCRIPTION_BACKEND_STRIPE_API_URL")?;
        let stripe_secret_key = Self::env_var("SUBSCRIPTION_BACKEND_STRIPE_SECRET_KEY")?;
        let stripe_payment_success_url =
            Self::env_var("SUBSCRIPTION_BACKEND_STRIPE_PAYMENT_SUCCESS_URL")?;
        let stripe_request_timeout =
            Self::env_var("SUBSCRIPTION_BACKEND_STRIPE_REQUEST_TIMEOUT")?.parse()?;
        let stripe_request_timeout = Duration::from_secs(stripe_request_timeout);

        Ok(Self {
            log_directory,
            log_filename,
            db_connection_string,
            db_name,
            max_notification_text_len,
            max_page_size,
            stripe_api_url,
            stripe_secret_key,
            stripe_payment_success_url,
            stripe_request_timeout,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}
