use clap::Parser;
use dotenv::dotenv;
use lark_relay_rs::{
    backend::{HttpBackend, WorkflowBackend},
    cli::Cli,
    config::Config,
    console,
    repl::Repl,
    submit::{submit_link, validate_input},
    telemetry::setup_logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    dotenv().ok();
    color_eyre::install()?;
    setup_logger()?;

    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(raw) = cli.base_url.as_deref() {
        config = config.with_base_url(raw)?;
    }
    info!(base_url = %config.base_url, "client starting");

    let backend = HttpBackend::from_config(&config)?;
    config.init()?;

    if cli.health {
        return run_health(&backend, cli.quiet).await;
    }

    match cli.input {
        Some(ref text) => run_once(&backend, text, cli.quiet).await,
        None => {
            Repl::new(backend).with_quiet(cli.quiet).run().await?;
            Ok(())
        }
    }
}

/// One-shot submission. Failures print to stderr and end the process with
/// exit code 1 so shell scripts can branch on the outcome. The spinner
/// only covers the backend call; invalid input never starts it.
async fn run_once<B: WorkflowBackend>(
    backend: &B,
    input: &str,
    quiet: bool,
) -> color_eyre::Result<()> {
    let outcome = match validate_input(input) {
        Ok(link) => {
            let spinner = console::loading_spinner(quiet);
            let outcome = submit_link(backend, &link).await;
            spinner.finish_and_clear();
            outcome
        }
        Err(err) => Err(err),
    };

    match outcome {
        Ok(reply) => {
            if quiet {
                println!("{}", console::MSG_SUCCESS);
            } else {
                console::print_success(console::MSG_SUCCESS);
            }
            if let Some(text) = reply.result.as_deref() {
                console::print_result_text(text);
            }
            Ok(())
        }
        Err(err) => {
            let message = console::failure_message(&err);
            if quiet {
                eprintln!("{message}");
            } else {
                console::print_error(&message);
            }
            std::process::exit(1);
        }
    }
}

async fn run_health(backend: &HttpBackend, quiet: bool) -> color_eyre::Result<()> {
    match backend.health().await {
        Ok(reply) => {
            info!(status = %reply.status, "backend healthy");
            if quiet {
                println!("{}", console::health_line(backend.base_url(), &reply));
            } else {
                console::print_health(backend.base_url(), &reply);
            }
            Ok(())
        }
        Err(err) => {
            let message = console::failure_message(&err);
            if quiet {
                eprintln!("{message}");
            } else {
                console::print_error(&message);
            }
            std::process::exit(1);
        }
    }
}
