use std::env;
use std::sync::Arc;

use config_rs::{get_bind_address, get_default_port, MailSettings, NOTIFICATION_DISPATCHER};
use notification_dispatcher::{Dispatcher, LogTransport, MailTransport, SmtpMailTransport};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    dotenv::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = MailSettings::from_env().map_err(|e| {
        log::error!("Invalid mail configuration: {}", e);
        e
    })?;
    log::info!("Mail settings: {:?}", settings);

    let transport: Arc<dyn MailTransport> = match env::var("MAIL_TRANSPORT").as_deref() {
        Ok("log") => {
            log::warn!("MAIL_TRANSPORT=log: notices are logged, not sent");
            Arc::new(LogTransport)
        }
        _ => Arc::new(SmtpMailTransport::new(&settings)?),
    };

    let dispatcher = Arc::new(Dispatcher::new(&settings, transport));
    let app = dispatcher.create_router();

    let addr = get_bind_address(
        NOTIFICATION_DISPATCHER,
        get_default_port(NOTIFICATION_DISPATCHER),
    );
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    log::info!("Notification Dispatcher starting on {}", addr);
    println!("Notification Dispatcher listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
