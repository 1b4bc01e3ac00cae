use super::*;
use clap::CommandFactory;

#[test]
fn command_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn parses_global_flags_and_login() {
    let cli = Cli::try_parse_from([
        "gradnote",
        "--base-url",
        "http://localhost:8000",
        "--timeout-ms",
        "2500",
        "--token-file",
        "/tmp/t",
        "login",
        "--email",
        "li@example.com",
        "--password",
        "pw",
    ])
    .unwrap();
    assert_eq!(cli.base_url, "http://localhost:8000");
    assert_eq!(cli.timeout_ms, 2500);
    assert_eq!(cli.token_file, Some(PathBuf::from("/tmp/t")));
    assert!(matches!(cli.command, Command::Login { ref email, .. } if email == "li@example.com"));
}

#[test]
fn environment_keys_match_the_browser_build() {
    let command = Cli::command();
    let env_of = |id: &str| {
        command
            .get_arguments()
            .find(|arg| arg.get_id() == id)
            .and_then(|arg| arg.get_env())
            .map(|key| key.to_string_lossy().into_owned())
    };
    assert_eq!(env_of("base_url").as_deref(), Some(gradnote::config::BASE_URL_VAR));
    assert_eq!(env_of("timeout_ms").as_deref(), Some(gradnote::config::TIMEOUT_VAR));
}

#[test]
fn zero_timeout_is_rejected() {
    assert!(Cli::try_parse_from(["gradnote", "--timeout-ms", "0", "me"]).is_err());
}

#[test]
fn question_list_defaults_to_first_page() {
    let cli = Cli::try_parse_from(["gradnote", "question", "list"]).unwrap();
    let Command::Question(QuestionCommand { command: QuestionSubcommand::List { skip, limit } }) = cli.command else {
        panic!("expected question list");
    };
    assert_eq!((skip, limit), (0, questions::DEFAULT_PAGE_SIZE));
}

#[test]
fn question_fields_fill_only_given_values() {
    let fields = QuestionFields { remarks: Some("redo".to_owned()), ..QuestionFields::default() };
    let draft = fields.into_draft(None);
    assert_eq!(draft, QuestionDraft { remarks: Some("redo".to_owned()), ..QuestionDraft::default() });
}

#[test]
fn search_args_map_to_query() {
    let cli = Cli::try_parse_from(["gradnote", "knowledge", "search", "--subject", "高数", "--limit", "5"]).unwrap();
    let Command::Knowledge(KnowledgeCommand { command: KnowledgeSubcommand::Search(args) }) = cli.command else {
        panic!("expected knowledge search");
    };
    let query = KnowledgeQuery::from(args);
    assert_eq!(query.subject.as_deref(), Some("高数"));
    assert_eq!((query.skip, query.limit), (0, 5));
}

#[test]
fn base_url_needs_http_scheme() {
    assert_eq!(validate_base_url(" https://api.example.com ").unwrap(), "https://api.example.com");
    assert!(matches!(validate_base_url("api.example.com"), Err(CliError::InvalidBaseUrl(_))));
}

#[test]
fn content_type_follows_extension() {
    assert_eq!(content_type_for(Path::new("page.PNG")), "image/png");
    assert_eq!(content_type_for(Path::new("scan.jpeg")), "image/jpeg");
    assert_eq!(content_type_for(Path::new("notes.pdf")), "application/octet-stream");
    assert_eq!(content_type_for(Path::new("noext")), "application/octet-stream");
}

#[test]
fn missing_upload_reports_path() {
    let err = read_upload(Path::new("/nonexistent/gradnote/page.png")).unwrap_err();
    assert!(err.to_string().contains("page.png"));
}

#[test]
fn submit_errors_convert() {
    let invalid = CliError::from(SubmitError::Invalid(forms::CONTENT_REQUIRED));
    assert_eq!(invalid.to_string(), forms::CONTENT_REQUIRED);
    let api = CliError::from(SubmitError::Api(ApiError::Network("down".to_owned())));
    assert_eq!(api.to_string(), "network error: down");
}
