mod replay;

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::QuizRules;
use services::{QuestionSourceConfig, QuizLoopService, SourceConfigError};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const TITLE: &str = "The Quiz";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeconds { raw: String },
    InvalidSource(SourceConfigError),
    MissingEvents,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeconds { raw } => {
                write!(f, "invalid --seconds-per-question value: {raw}")
            }
            ArgsError::InvalidSource(err) => write!(f, "{err}"),
            ArgsError::MissingEvents => write!(f, "replay requires --events <file>"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for DesktopApp {
    fn title(&self) -> String {
        TITLE.to_string()
    }

    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

#[derive(Debug)]
struct Args {
    source: QuestionSourceConfig,
    rules: QuizRules,
    shuffle: bool,
    events: Option<PathBuf>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui     [source] [--seconds-per-question <n>] [--shuffle]");
    eprintln!("  cargo run -p app -- replay [source] [--seconds-per-question <n>] --events <file>");
    eprintln!();
    eprintln!("Source (defaults to {}):", QuestionSourceConfig::DEFAULT_URL);
    eprintln!("  --questions-url <url> | --questions-file <path>");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_QUESTIONS_URL, QUIZ_QUESTIONS_FILE, QUIZ_SECONDS_PER_QUESTION, QUIZ_SHUFFLE");
    eprintln!("  RUST_LOG (log filter)");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Replay,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "replay" => Some(Self::Replay),
            _ => None,
        }
    }
}

fn parse_seconds(raw: String) -> Result<u32, ArgsError> {
    match raw.trim().parse::<u32>() {
        Ok(seconds) if seconds > 0 => Ok(seconds),
        _ => Err(ArgsError::InvalidSeconds { raw }),
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name).is_ok_and(|value| matches!(value.trim(), "1" | "true" | "yes"))
}

impl Args {
    fn parse(cmd: Command, args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut source = None;
        let mut seconds = std::env::var("QUIZ_SECONDS_PER_QUESTION")
            .ok()
            .and_then(|value| parse_seconds(value).ok());
        let mut shuffle = env_flag("QUIZ_SHUFFLE");
        let mut events = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions-url" => {
                    let value = require_value(args, "--questions-url")?;
                    source = Some(
                        QuestionSourceConfig::http(&value).map_err(ArgsError::InvalidSource)?,
                    );
                }
                "--questions-file" => {
                    let value = require_value(args, "--questions-file")?;
                    source = Some(
                        QuestionSourceConfig::file(&value).map_err(ArgsError::InvalidSource)?,
                    );
                }
                "--seconds-per-question" => {
                    let value = require_value(args, "--seconds-per-question")?;
                    seconds = Some(parse_seconds(value)?);
                }
                "--shuffle" => shuffle = true,
                "--events" if cmd == Command::Replay => {
                    events = Some(PathBuf::from(require_value(args, "--events")?));
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        if cmd == Command::Replay && events.is_none() {
            return Err(ArgsError::MissingEvents);
        }

        // Flags win over the environment, so only consult it when none was given.
        let source = match source {
            Some(source) => source,
            None => QuestionSourceConfig::from_env().map_err(ArgsError::InvalidSource)?,
        };
        let rules = seconds.map_or_else(QuizRules::default, |seconds| {
            QuizRules::default().with_seconds_per_question(seconds)
        });

        Ok(Self {
            source,
            rules,
            shuffle,
            events,
        })
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(cmd, &mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let quiz_loop = Arc::new(
        QuizLoopService::new(parsed.source.build())
            .with_rules(parsed.rules)
            .with_shuffle(parsed.shuffle),
    );
    tracing::info!(
        source = %quiz_loop.source_description(),
        seconds_per_question = parsed.rules.seconds_per_question,
        shuffle = parsed.shuffle,
        "quiz configured"
    );

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { quiz_loop });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(TITLE)
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Replay => {
            let path = parsed.events.ok_or(ArgsError::MissingEvents)?;
            let events = replay::read_events(&path).await?;
            let snapshot = replay::replay(&quiz_loop, events).await?;
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
