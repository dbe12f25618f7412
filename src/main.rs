use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use jabberwock::config::AppConfig;
use jabberwock::core::credentials;
use jabberwock::core::generator::NonsenseGenerator;
use jabberwock::core::language::{GoogleModerationClient, GoogleSyntaxClient};
use jabberwock::core::wordgen::{TemplateCatalog, WordBank};
use jabberwock::tui::App;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    let _log_guard = jabberwock::core::logging::init();
    log::info!("{} v{} starting", jabberwock::NAME, jabberwock::VERSION);

    let config = AppConfig::load();
    let generator = build_generator(&config)?;
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let tick_rate = Duration::from_millis(config.tui.tick_rate_ms);
    let result = jabberwock::tui::run(&mut terminal, App::new(generator, runtime), tick_rate);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}

/// Wire catalog, bank, and service clients per configuration.
fn build_generator(config: &AppConfig) -> anyhow::Result<NonsenseGenerator> {
    let catalog = match &config.data.template_file {
        Some(path) => TemplateCatalog::load(path).context("Loading template catalog")?,
        None => TemplateCatalog::builtin(),
    };
    let bank = match &config.data.word_dir {
        Some(dir) => WordBank::from_dir(dir).context("Loading word bank")?,
        None => WordBank::builtin(),
    };

    let api_key = credentials::api_key().context("Resolving Google API key")?;
    let base_url = &config.services.language_api_url;
    let syntax = GoogleSyntaxClient::with_base_url(&api_key, base_url);
    let moderation = GoogleModerationClient::with_base_url(&api_key, base_url);

    let mut generator =
        NonsenseGenerator::new(catalog, bank, Arc::new(syntax), Arc::new(moderation));
    if let Some(path) = &config.data.sentence_log {
        generator = generator.with_sentence_log(path);
    }
    Ok(generator)
}
