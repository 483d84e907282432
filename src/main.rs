use greeter::utils::logger;
use greeter::{greet, AppConfig};

fn main() {
    logger::init_cli_logger();

    let config = AppConfig::default();
    tracing::debug!("Starting greeter for {}", config.user);

    if let Err(e) = greet(&config.user) {
        tracing::error!("❌ Greeting failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }
}
