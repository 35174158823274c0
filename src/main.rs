use anyhow::Result;
use clap::Parser;
use console::Term;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gemini_transcriber::cli::{Cli, Commands};
use gemini_transcriber::config::Config;
use gemini_transcriber::flow::{ScreenState, SessionController, TranscriptionSource};
use gemini_transcriber::screens::input::{self, InputAction, InputState};
use gemini_transcriber::screens::result::{self, ResultAction};
use gemini_transcriber::screens::loading;
use gemini_transcriber::settings::{LANGUAGES, MODELS};
use gemini_transcriber::transcribe::GeminiTranscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "gemini_transcriber=debug"
    } else {
        "gemini_transcriber=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;

    match cli.command {
        Some(Commands::Config) => {
            config.display();
            println!("\nConfig file: {}", Config::config_path()?.display());
        }
        Some(Commands::Models) => {
            println!("Available models:");
            for model in MODELS {
                println!("  • {} - {}", model.value, model.label);
            }
            println!("\nAvailable languages:");
            for language in LANGUAGES {
                println!("  • {} - {}", language.value, language.label);
            }
        }
        None => run_session(cli, config).await?,
    }

    Ok(())
}

/// Drive the Main → Loading → Result session until the user quits
async fn run_session(cli: Cli, config: Config) -> Result<()> {
    if !config.has_api_key() {
        eprintln!("⚠️  No API key configured. Set GEMINI_API_KEY or add api_key to the config file.");
        eprintln!("   File transcription will fail until a key is provided.");
        tracing::warn!("Starting without an API key");
    }

    let mut settings = config.settings.clone();
    cli.apply_overrides(&mut settings);

    let service = GeminiTranscriber::new(config.api_key.clone());
    let mut controller = SessionController::new(Box::new(service), settings);
    let term = Term::stdout();

    let mut preseeded = preseeded_source(&cli)?;

    loop {
        match controller.screen() {
            ScreenState::Main => {
                let action = if let Some(source) = preseeded.take() {
                    InputAction::Submit(source)
                } else {
                    let mut state = InputState::default();
                    let mut settings = controller.settings().clone();
                    let action = input::run(&term, &mut state, &mut settings)?;
                    controller.set_settings(settings);
                    action
                };

                match action {
                    InputAction::Submit(source) => controller.submit(source)?,
                    InputAction::Quit => break,
                }
            }
            ScreenState::Loading => {
                let source_name = controller
                    .source()
                    .map(|source| source.display_name())
                    .unwrap_or_default();
                loading::run(&source_name, controller.run_transcription()).await?;
            }
            ScreenState::Result => {
                let Some(outcome) = controller.result().cloned() else {
                    controller.reset();
                    continue;
                };
                match result::run(&term, &outcome).await? {
                    ResultAction::GoBack | ResultAction::TranscribeAgain => controller.reset(),
                    ResultAction::Quit => break,
                }
            }
        }
    }

    Ok(())
}

/// Resolve a source passed on the command line, applying the same checks
/// as the input screen
fn preseeded_source(cli: &Cli) -> Result<Option<TranscriptionSource>> {
    if !cli.has_source() {
        return Ok(None);
    }

    let mut state = InputState::default();
    if let Some(path) = &cli.file {
        let metadata = fs_err::metadata(path)?;
        anyhow::ensure!(metadata.is_file(), "Not a file: {}", path.display());
        state.select_file(path.clone(), metadata.len());
        if let Some(error) = state.error() {
            anyhow::bail!("{error}");
        }
    } else if let Some(url) = &cli.url {
        state.set_url(url);
    }

    Ok(state.source())
}
