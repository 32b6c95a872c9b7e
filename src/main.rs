use subscription_backend::application::{self, ApplicationEnv};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    #[cfg(debug_assertions)]
    {
        // Ignore error because .env file is not required
        // as long as env variables are set
        let _ = dotenvy::dotenv();
    }

    let env = ApplicationEnv::parse()?;

    application::setup_tracing(&env)?;

    let (application_state, application_state_to_close) = application::create_state(&env).await?;
    tracing::info!("services ready");

    application::shutdown_signal().await;

    drop(application_state);
    application::close(application_state_to_close).await;

    Ok(())
}
