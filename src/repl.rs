use crate::{
    backend::WorkflowBackend,
    config::global_config,
    console,
    error::{Error, Result},
    submit::{submit_link, validate_input},
};
use rustyline::{DefaultEditor, error::ReadlineError};
use tracing::info;

/// Interactive prompt: paste a message or a link, get the submission result,
/// repeat.
pub struct Repl<B> {
    backend: B,
    quiet: bool,
}

impl<B: WorkflowBackend> Repl<B> {
    pub const fn new(backend: B) -> Self {
        Self {
            backend,
            quiet: false,
        }
    }

    /// Drop the spinner and the transient notice in favor of plain lines.
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Run the prompt loop until `/quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns `Error::Readline` when the line editor cannot be set up or
    /// fails mid-session.
    pub async fn run(&self) -> Result<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = dirs::data_dir().map(|p| p.join("lark-relay").join("history.txt"));
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline(">>> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(line).await {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);
                    self.process_input(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => return Err(err.into()),
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│       Lark Relay - Document Submitter       │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Backend: {}", global_config().base_url);
        println!("Paste a Feishu/Lark document link (or a message containing one).");
        println!();
        println!("Commands:");
        println!("  /health   - Check backend availability");
        println!("  /help     - Show this help");
        println!("  /quit     - Exit");
        println!();
    }

    /// Handle slash commands. Returns true if the loop should exit.
    async fn handle_command(&self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /health          - Check backend availability");
                println!("  /help, /h, /?    - Show this help");
                println!("  /quit, /exit, /q - Exit");
                println!();
                false
            }
            "/health" => {
                match self.backend.health().await {
                    Ok(reply) => {
                        let base = global_config().base_url;
                        if self.quiet {
                            println!("{}", console::health_line(&base, &reply));
                        } else {
                            console::print_health(&base, &reply);
                        }
                    }
                    Err(err) => self.report_failure(&err),
                }
                false
            }
            _ => {
                println!("Unknown command: {cmd}");
                println!("Type /help for available commands");
                false
            }
        }
    }

    /// One prompt line. The spinner only covers the backend call; invalid
    /// input is settled before anything starts loading.
    async fn process_input(&self, input: &str) {
        info!("processing prompt line");
        let outcome = match validate_input(input) {
            Ok(link) => {
                let spinner = console::loading_spinner(self.quiet);
                let outcome = submit_link(&self.backend, &link).await;
                spinner.finish_and_clear();
                outcome
            }
            Err(err) => Err(err),
        };

        match outcome {
            Ok(reply) => {
                if self.quiet {
                    println!("{}", console::MSG_SUCCESS);
                    if let Some(text) = reply.result.as_deref() {
                        console::print_result_text(text);
                    }
                } else {
                    console::transient_success(console::MSG_SUCCESS, reply.result.as_deref()).await;
                }
            }
            Err(err) => self.report_failure(&err),
        }
    }

    fn report_failure(&self, err: &Error) {
        let message = console::failure_message(err);
        if self.quiet {
            eprintln!("{message}");
        } else {
            console::print_error(&message);
        }
    }
}
