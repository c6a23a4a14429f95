use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use sns_notifier::{Config, NotificationHandler, Response, SnsPublisher};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        // disable printing the name of the module in every log line.
        .with_target(false)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        topic_arn = %config.topic_arn,
        environment = %config.environment,
        "starting notifier"
    );

    let publisher = SnsPublisher::from_config(&config).await;
    let handler = NotificationHandler::new(config, publisher);
    let handler = &handler;

    let func = service_fn(move |event: LambdaEvent<Value>| async move {
        Ok::<Response, Error>(handler.handle(event).await)
    });
    lambda_runtime::run(func).await?;
    Ok(())
}
