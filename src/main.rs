use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use gemini_chat::backend::{self, ChatBackend, HttpBackend};
use gemini_chat::core::action::{Action, Effect, update};
use gemini_chat::core::config;
use gemini_chat::core::state::App;
use gemini_chat::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "gemini-chat", about = "Terminal chat client for a local /chat backend")]
struct Args {
    /// Backend base URL (overrides CHAT_BACKEND_URL and the config file)
    #[arg(short, long)]
    backend_url: Option<String>,

    /// Ask one question, print the answer, and exit
    #[arg(short, long)]
    ask: Option<String>,

    /// Log file path
    #[arg(long, default_value = "gemini-chat.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // File logger: the terminal belongs to the TUI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}, using defaults", e);
        config::ChatConfig::default()
    });
    let resolved = config::resolve(&file_config, args.backend_url.as_deref());

    log::info!("gemini-chat starting up, backend at {}", resolved.backend_url);

    let backend: Arc<dyn ChatBackend> = Arc::new(HttpBackend::new(resolved.backend_url.clone()));
    let mut app = App::from_config(&resolved);

    match args.ask {
        Some(query) => {
            update(&mut app, Action::InputChanged(query));
            if let Effect::SpawnRequest(query) = update(&mut app, Action::Submit) {
                let action = backend::settle(backend.as_ref(), &query).await;
                update(&mut app, action);
            }
            println!("{}", app.response);
            Ok(())
        }
        None => tui::run(app, backend),
    }
}
