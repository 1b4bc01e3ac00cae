use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use gradnote::api::{knowledge, questions};
use gradnote::forms::{self, RegisterInput, SubmitError};
use gradnote::session::{self, SessionStore};
use gradnote::types::{KnowledgeQuery, QuestionDraft, UploadFile};
use gradnote::{ApiError, AuthState, ClientConfig, HttpClient, Navigator, TokenStore};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

mod tokens;
mod transport;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use tokens::{FileTokens, default_token_file};
use transport::ReqwestTransport;

type Client = HttpClient<ReqwestTransport, FileTokens, TerminalNavigator>;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("{0}")]
    Invalid(&'static str),
    #[error("could not read {path}: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl From<SubmitError> for CliError {
    fn from(error: SubmitError) -> Self {
        match error {
            SubmitError::Invalid(message) => Self::Invalid(message),
            SubmitError::Api(api) => Self::Api(api),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "gradnote", about = "GradNote mistake notebook CLI")]
struct Cli {
    #[arg(long, env = gradnote::config::BASE_URL_VAR, default_value = "http://127.0.0.1:8000")]
    base_url: String,

    /// Per-request timeout in milliseconds.
    #[arg(
        long,
        env = gradnote::config::TIMEOUT_VAR,
        default_value_t = gradnote::config::DEFAULT_TIMEOUT_MS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout_ms: u64,

    /// Where the bearer token is kept [default: ~/.gradnote/token]
    #[arg(long, env = "GRADNOTE_TOKEN_FILE")]
    token_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and store the token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "GRADNOTE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// End the session. The stored token is removed even if the server is unreachable.
    Logout,
    /// Show the logged-in user.
    Me,
    Register(RegisterArgs),
    Question(QuestionCommand),
    Image(ImageCommand),
    Knowledge(KnowledgeCommand),
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long)]
    username: String,
    #[arg(long)]
    email: String,
    #[arg(long, env = "GRADNOTE_PASSWORD", hide_env_values = true)]
    password: String,
    /// Defaults to `--password`.
    #[arg(long)]
    confirm_password: Option<String>,
}

#[derive(Args, Debug)]
struct QuestionCommand {
    #[command(subcommand)]
    command: QuestionSubcommand,
}

#[derive(Subcommand, Debug)]
enum QuestionSubcommand {
    List {
        #[arg(long, default_value_t = 0)]
        skip: u32,
        #[arg(long, default_value_t = questions::DEFAULT_PAGE_SIZE)]
        limit: u32,
    },
    Get {
        id: i64,
    },
    Create {
        #[arg(long)]
        content: String,
        #[command(flatten)]
        fields: QuestionFields,
    },
    Update {
        id: i64,
        #[arg(long)]
        content: Option<String>,
        #[command(flatten)]
        fields: QuestionFields,
    },
    Delete {
        id: i64,
    },
    /// Create a question from a photo; the server runs OCR.
    FromImage {
        path: PathBuf,
    },
}

#[derive(Args, Debug, Default)]
struct QuestionFields {
    #[arg(long)]
    subject: Option<String>,
    #[arg(long)]
    solution: Option<String>,
    #[arg(long)]
    remarks: Option<String>,
    #[arg(long)]
    image_url: Option<String>,
}

impl QuestionFields {
    fn into_draft(self, content: Option<String>) -> QuestionDraft {
        QuestionDraft {
            content,
            subject: self.subject,
            solution: self.solution,
            remarks: self.remarks,
            image_url: self.image_url,
        }
    }
}

#[derive(Args, Debug)]
struct ImageCommand {
    #[command(subcommand)]
    command: ImageSubcommand,
}

#[derive(Subcommand, Debug)]
enum ImageSubcommand {
    /// Upload an image and print the recognized text.
    Process { path: PathBuf },
}

#[derive(Args, Debug)]
struct KnowledgeCommand {
    #[command(subcommand)]
    command: KnowledgeSubcommand,
}

#[derive(Subcommand, Debug)]
enum KnowledgeSubcommand {
    Subjects,
    Chapters {
        #[arg(long)]
        subject: String,
    },
    Sections {
        #[arg(long)]
        subject: String,
        #[arg(long)]
        chapter: String,
    },
    Search(SearchArgs),
    Popular {
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    Get {
        id: i64,
    },
    /// Record one more mark against a knowledge point.
    Mark {
        id: i64,
    },
}

#[derive(Args, Debug)]
struct SearchArgs {
    #[arg(long)]
    subject: Option<String>,
    #[arg(long)]
    chapter: Option<String>,
    #[arg(long)]
    section: Option<String>,
    /// Fuzzy match on the knowledge point name.
    #[arg(long)]
    item: Option<String>,
    #[arg(long)]
    sort_by: Option<String>,
    #[arg(long, default_value_t = 0)]
    skip: u32,
    #[arg(long, default_value_t = 100)]
    limit: u32,
}

impl From<SearchArgs> for KnowledgeQuery {
    fn from(args: SearchArgs) -> Self {
        Self {
            subject: args.subject,
            chapter: args.chapter,
            section: args.section,
            item: args.item,
            sort_by: args.sort_by,
            skip: args.skip,
            limit: args.limit,
        }
    }
}

/// The CLI has no page to send the user to; a 401 becomes a hint instead.
#[derive(Clone, Copy, Debug, Default)]
struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn redirect(&self, path: &str) {
        if path == gradnote::LOGIN_ROUTE {
            eprintln!("session expired or invalid; run `gradnote login` again");
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let client = build_client(&cli)?;
    match cli.command {
        Command::Login { email, password } => run_login(&client, &email, &password).await,
        Command::Logout => run_logout(&client).await,
        Command::Me => {
            let store = SessionStore::new(AuthState::restore(client.tokens().load()));
            print_json(&session::fetch_current_user(&client, &store).await?)
        }
        Command::Register(args) => run_register(&client, args).await,
        Command::Question(question) => run_question(&client, question).await,
        Command::Image(image) => match image.command {
            ImageSubcommand::Process { path } => {
                let processed = forms::upload_image(&client, read_upload(&path)?).await?;
                print_json(&processed)
            }
        },
        Command::Knowledge(command) => run_knowledge(&client, command).await,
    }
}

fn build_client(cli: &Cli) -> Result<Client, CliError> {
    let base_url = validate_base_url(&cli.base_url)?;
    let config = ClientConfig::new(base_url, Duration::from_millis(cli.timeout_ms));
    let token_file = cli.token_file.clone().unwrap_or_else(default_token_file);
    tracing::debug!(base_url = %config.base_url, token_file = %token_file.display(), "client configured");

    let transport = ReqwestTransport::new(reqwest::Client::builder().build()?);
    Ok(HttpClient::new(config, transport, FileTokens::new(token_file), TerminalNavigator))
}

fn validate_base_url(raw: &str) -> Result<&str, CliError> {
    let trimmed = raw.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed)
    } else {
        Err(CliError::InvalidBaseUrl(raw.to_owned()))
    }
}

async fn run_login(client: &Client, email: &str, password: &str) -> Result<(), CliError> {
    let (email, password) = forms::validate_login_input(email, password).map_err(CliError::Invalid)?;
    let store = SessionStore::new(AuthState::default());
    let response = session::login(client, &store, &email, &password).await?;
    print_json(&serde_json::json!({
        "user": response.user,
        "token_file": client.tokens().path().display().to_string(),
    }))
}

async fn run_logout(client: &Client) -> Result<(), CliError> {
    let store = SessionStore::new(AuthState::restore(client.tokens().load()));
    session::logout(client, &store).await?;
    print_json(&serde_json::json!({ "logged_out": true }))
}

async fn run_register(client: &Client, args: RegisterArgs) -> Result<(), CliError> {
    let input = RegisterInput {
        confirm_password: args.confirm_password.unwrap_or_else(|| args.password.clone()),
        username: args.username,
        email: args.email,
        password: args.password,
    };
    print_json(&forms::register_account(client, &input).await?)
}

async fn run_question(client: &Client, question: QuestionCommand) -> Result<(), CliError> {
    match question.command {
        QuestionSubcommand::List { skip, limit } => print_json(&questions::list_questions(client, skip, limit).await?),
        QuestionSubcommand::Get { id } => print_json(&questions::get_question(client, id).await?),
        QuestionSubcommand::Create { content, fields } => {
            let checked = forms::build_question_draft(&content, "", None).map_err(CliError::Invalid)?;
            let draft = fields.into_draft(checked.content);
            print_json(&questions::create_question(client, &draft).await?)
        }
        QuestionSubcommand::Update { id, content, fields } => {
            let draft = fields.into_draft(content);
            if draft == QuestionDraft::default() {
                return Err(CliError::Invalid("nothing to update; pass at least one field"));
            }
            print_json(&questions::update_question(client, id, &draft).await?)
        }
        QuestionSubcommand::Delete { id } => {
            questions::delete_question(client, id).await?;
            print_json(&serde_json::json!({ "deleted": id }))
        }
        QuestionSubcommand::FromImage { path } => {
            let file = read_upload(&path)?;
            forms::validate_image(&file.content_type, file.size()).map_err(|r| CliError::Invalid(r.message()))?;
            print_json(&questions::create_from_image(client, file).await?)
        }
    }
}

async fn run_knowledge(client: &Client, command: KnowledgeCommand) -> Result<(), CliError> {
    match command.command {
        KnowledgeSubcommand::Subjects => print_json(&knowledge::subjects(client).await?),
        KnowledgeSubcommand::Chapters { subject } => print_json(&knowledge::chapters(client, &subject).await?),
        KnowledgeSubcommand::Sections { subject, chapter } => {
            print_json(&knowledge::sections(client, &subject, &chapter).await?)
        }
        KnowledgeSubcommand::Search(args) => print_json(&knowledge::search(client, &args.into()).await?),
        KnowledgeSubcommand::Popular { limit } => print_json(&knowledge::popular(client, limit).await?),
        KnowledgeSubcommand::Get { id } => print_json(&knowledge::get_point(client, id).await?),
        KnowledgeSubcommand::Mark { id } => print_json(&knowledge::mark_point(client, id).await?),
    }
}

/// Load a local file for upload, guessing its MIME type from the extension.
fn read_upload(path: &Path) -> Result<UploadFile, CliError> {
    let bytes = std::fs::read(path).map_err(|source| CliError::ReadFile { path: path.to_owned(), source })?;
    let file_name = path
        .file_name()
        .map_or_else(|| "upload".to_owned(), |name| name.to_string_lossy().into_owned());
    Ok(UploadFile { file_name, content_type: content_type_for(path).to_owned(), bytes })
}

fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
