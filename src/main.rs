use std::{env, fs, io};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use story_client::{
    ClientConfig, ClientController, ConsolePresenter, FormFields, HttpStoryApi, MemoryClipboard,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = ClientConfig::from_env()?;
    tracing::info!(base_url = %config.api_base_url, "story client starting");

    let api = HttpStoryApi::new(&config)?;
    let controller = ClientController::new(
        api,
        ConsolePresenter::new(io::stdout()),
        MemoryClipboard::default(),
        config.form_defaults.clone(),
    );

    controller.initialize().await;
    controller.load_genres().await;

    // With a form file: submit it. Without: show the backend statistics.
    match env::args().nth(1) {
        Some(path) => {
            let raw = fs::read_to_string(&path)?;
            let form: FormFields = serde_json::from_str(&raw)?;
            let outcome = controller.submit(&form).await;
            if let Some(message) = outcome.failure() {
                anyhow::bail!("{message}");
            }
        }
        None => {
            controller.show_statistics().await;
        }
    }

    Ok(())
}

fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,hyper=warn,reqwest=warn".into());
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
