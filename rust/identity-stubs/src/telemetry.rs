use tracing_subscriber::{fmt::Layer, layer::SubscriberExt, EnvFilter, FmtSubscriber};

use crate::StubError;

/// Human-readable output for the local server.
pub fn init_pretty() -> Result<(), StubError> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber.with(Layer::default().pretty()))?;

    Ok(())
}

/// One JSON object per line for CloudWatch, which adds its own timestamps.
pub fn init_lambda() -> Result<(), StubError> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
