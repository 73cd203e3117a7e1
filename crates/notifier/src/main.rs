//! Pushnote publisher binary entrypoint.

use tracing_subscriber::EnvFilter;

use pushnote_common::config::PublisherConfig;
use pushnote_common::types::Notification;
use pushnote_notifier::Publisher;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing on stderr; stdout only carries the response line
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pushnote_notifier=info")),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    // Load configuration
    let config = PublisherConfig::from_env()?;
    let notification = Notification::from_env();

    let publisher = Publisher::new(config)?;

    tracing::info!(
        url = %publisher.config().endpoint_url(),
        subscription = %publisher.config().subscription,
        kind = %notification.kind,
        "Sending notification"
    );

    let response = publisher.publish(&notification).await?;

    println!("{}", response);

    Ok(())
}
