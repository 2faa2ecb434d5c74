use hwwatch::api::PracticumClient;
use hwwatch::app::App;
use hwwatch::config::{self, Config};
use hwwatch::notify::TelegramNotifier;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    config::init_logging();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "Required configuration missing, refusing to start");
            std::process::exit(1);
        }
    };

    info!("hwwatch starting");

    let client = PracticumClient::new(&config);
    let notifier = TelegramNotifier::new(&config.telegram_token, config.chat_id);
    let app = App::new(&config, &client, &notifier);

    tokio::select! {
        () = app.run() => {}
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("hwwatch stopped");
}
