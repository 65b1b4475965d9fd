use std::sync::Arc;

use telegram_relay::configuration::Settings;
use telegram_relay::relay::{AppState, app};
use telegram_relay::telegram::TelegramClient;
use telegram_relay::telemetry::{get_subscriber, init_subscriber};
use tracing::{info, instrument};

#[instrument]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    info!("Starting telegram-relay");

    let subscriber = get_subscriber("telegram-relay".into(), "info".into());
    init_subscriber(subscriber);

    let settings = Settings::from_env()?;

    let state = AppState {
        parse_mode: settings.parse_mode,
        sender: Arc::new(TelegramClient::new(&settings)),
    };

    let app = app(state).layer(tower_http::trace::TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&settings.listen_addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
