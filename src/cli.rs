use clap::Parser;

/// CLI arguments for lark-relay.
#[derive(Parser, Debug)]
#[command(name = "lark-relay")]
#[command(author, version, about = "Submit Feishu/Lark document links to the relay backend")]
#[command(long_about = r#"
Extracts the first Feishu/Lark document link from the given text and submits
it to the relay backend, which runs its processing workflow on the document.
Run without arguments to get an interactive prompt.

The backend base URL is read from (in priority order):
1. --base-url <URL>        Explicit flag
2. LARK_RELAY_BASE_URL     Environment (a .env file is honored)
3. http://localhost:5000   Default

Example:
  lark-relay "https://acme.feishu.cn/docx/AbCd123"
  lark-relay "please summarize https://acme.larkoffice.com/wiki/Xy_9 thanks"
  lark-relay --health
  lark-relay --base-url http://10.0.0.5:5000
"#)]
pub struct Cli {
    /// Message text or document link to submit (omit to start interactive mode)
    pub input: Option<String>,

    /// Backend base URL (overrides LARK_RELAY_BASE_URL)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Check backend availability and exit
    #[arg(long)]
    pub health: bool,

    /// Suppress the spinner and decorations
    #[arg(short, long)]
    pub quiet: bool,
}
