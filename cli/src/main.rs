//! CLI entrypoint for quiz-scout
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::{CommandFactory, Parser};
use scout_application::{
    AnswerQuestionInput, AnswerQuestionUseCase, ConversationLogger, ModelConfig, SearchProgress,
};
use scout_domain::{OutputFormat, Question, SearchMode};
use scout_infrastructure::{ConfigLoader, FileConfig, JsonlConversationLogger, OpenAiGateway};
use scout_presentation::{
    AppState, Cli, Command, ConsoleFormatter, ModeArg, OutputArg, ProgressReporter,
    SimpleProgress, router,
};
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::time::Instant;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let log_dir = match &cli.command {
        Some(Command::Serve { log_dir, .. }) => {
            log_dir.clone().or_else(|| config.logging.log_dir.clone())
        }
        _ => None,
    };
    let _log_guard = init_tracing(cli.verbose, log_dir.as_deref())?;

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    check_config(&config)?;
    let use_case = build_use_case(&config)?;

    match command {
        Command::Serve { bind, .. } => {
            let bind = bind.unwrap_or_else(|| config.server.bind.clone());
            serve(use_case, &bind).await
        }
        Command::Ask {
            question,
            mode,
            output,
            quiet,
        } => ask(&use_case, &config, question, mode, output, quiet).await,
    }
}

/// Initialize logging based on verbosity level; `RUST_LOG` wins when set.
///
/// With a log directory, events are also written to a daily-rolling file.
/// The returned guard must be held until exit so buffered lines are flushed.
fn init_tracing(verbose: u8, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(filter());

    let Some(dir) = log_dir else {
        tracing_subscriber::registry().with(console).init();
        return Ok(None);
    };

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let appender = tracing_appender::rolling::daily(dir, "quiz-scout.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let file = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(writer)
        .with_filter(filter());

    tracing_subscriber::registry().with(console).with(file).init();
    Ok(Some(guard))
}

/// Log every config issue; refuse to start when any is an error.
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    let mut errors = Vec::new();

    for issue in &issues {
        if issue.is_error() {
            errors.push(issue.message.clone());
        } else {
            warn!("{}", issue.message);
        }
    }

    if !errors.is_empty() {
        bail!("Invalid configuration:\n  {}", errors.join("\n  "));
    }
    Ok(())
}

fn build_use_case(config: &FileConfig) -> Result<AnswerQuestionUseCase> {
    let search = config.search_provider();
    let verification = config.verification_provider();

    // === Dependency Injection ===
    let search_gateway = OpenAiGateway::new(
        search
            .to_openai_config()
            .context("[search] has no base URL")?,
    )?;
    let verification_gateway = OpenAiGateway::new(
        verification
            .to_openai_config()
            .context("[verification] has no base URL")?,
    )?;

    let models = ModelConfig::default()
        .with_search(search.model.clone())
        .with_verification(verification.model.clone());

    let mut use_case =
        AnswerQuestionUseCase::new(Arc::new(search_gateway), Arc::new(verification_gateway))
            .with_models(models)
            .with_retry_policy(config.retry.to_retry_policy());

    if let Some(path) = &config.logging.conversation_log {
        match JsonlConversationLogger::new(path) {
            Some(logger) => {
                info!("Conversation log: {}", logger.path().display());
                let logger: Arc<dyn ConversationLogger> = Arc::new(logger);
                use_case = use_case.with_conversation_logger(logger);
            }
            None => warn!(
                "Conversation logging disabled: cannot open {}",
                path.display()
            ),
        }
    }

    Ok(use_case)
}

async fn serve(use_case: AnswerQuestionUseCase, bind: &str) -> Result<()> {
    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind {}", bind))?;
    info!(bind = %listener.local_addr()?, "quiz-scout listening");
    eprintln!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(AppState::new(use_case)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Could not listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}

async fn ask(
    use_case: &AnswerQuestionUseCase,
    config: &FileConfig,
    question: String,
    mode: ModeArg,
    output: Option<OutputArg>,
    quiet: bool,
) -> Result<()> {
    let mode = SearchMode::from(mode);
    let format = output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();
    let formatter = ConsoleFormatter::new(config.output.color);
    let input = AnswerQuestionInput::new(Question::try_new(question)?, mode);

    let started = Instant::now();
    let result = if quiet {
        use_case.execute(input).await
    } else {
        let progress: Box<dyn SearchProgress> = if std::io::stderr().is_terminal() {
            Box::new(ProgressReporter::start())
        } else {
            Box::new(SimpleProgress)
        };
        use_case.execute_with_progress(input, progress.as_ref()).await
    };
    let elapsed = started.elapsed();

    match result {
        Ok(answer) => {
            println!("{}", formatter.format(format, &answer, mode, elapsed));
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", formatter.format_error(&e.to_string()));
            std::process::exit(1);
        }
    }
}
