use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use quiz_core::Question;
use quiz_core::model::parse_question_list;

use crate::error::{LoadError, SourceConfigError};

/// Somewhere questions can be loaded from.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Load the full question list.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` when the source is unreachable or its payload is
    /// empty or malformed.
    async fn load(&self) -> Result<Vec<Question>, LoadError>;

    /// Human readable location, used in logs.
    fn describe(&self) -> String;
}

//
// ─── HTTP ──────────────────────────────────────────────────────────────────────
//

/// Fetches a JSON array of question records with a GET request.
#[derive(Clone)]
pub struct HttpQuestionSource {
    client: Client,
    url: Url,
}

impl HttpQuestionSource {
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl QuestionSource for HttpQuestionSource {
    async fn load(&self) -> Result<Vec<Question>, LoadError> {
        let response = self.client.get(self.url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(LoadError::HttpStatus(response.status()));
        }

        let body = response.text().await?;
        Ok(parse_question_list(&body)?)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

//
// ─── FILE ──────────────────────────────────────────────────────────────────────
//

/// Reads the same JSON shape from a local file.
#[derive(Debug, Clone)]
pub struct FileQuestionSource {
    path: PathBuf,
}

impl FileQuestionSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl QuestionSource for FileQuestionSource {
    async fn load(&self) -> Result<Vec<Question>, LoadError> {
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })?;
        Ok(parse_question_list(&body)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

//
// ─── STATIC ────────────────────────────────────────────────────────────────────
//

/// In-memory questions. An empty list loads as an empty payload error.
#[derive(Debug, Clone, Default)]
pub struct StaticQuestionSource {
    questions: Vec<Question>,
}

impl StaticQuestionSource {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }
}

#[async_trait]
impl QuestionSource for StaticQuestionSource {
    async fn load(&self) -> Result<Vec<Question>, LoadError> {
        if self.questions.is_empty() {
            return Err(LoadError::Parse(quiz_core::QuestionListError::Empty));
        }
        Ok(self.questions.clone())
    }

    fn describe(&self) -> String {
        format!("static ({} questions)", self.questions.len())
    }
}

//
// ─── CONFIG ────────────────────────────────────────────────────────────────────
//

/// Where the app should load its questions from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionSourceConfig {
    Http { url: Url },
    File { path: PathBuf },
}

impl Default for QuestionSourceConfig {
    fn default() -> Self {
        Self::Http {
            url: Url::parse(Self::DEFAULT_URL).expect("default question url should parse"),
        }
    }
}

impl QuestionSourceConfig {
    pub const DEFAULT_URL: &'static str = "http://localhost:8000/questions";

    /// # Errors
    ///
    /// Returns `SourceConfigError` if `raw` is not an http(s) URL.
    pub fn http(raw: &str) -> Result<Self, SourceConfigError> {
        let url = Url::parse(raw.trim()).map_err(|source| SourceConfigError::InvalidUrl {
            raw: raw.to_string(),
            source,
        })?;
        match url.scheme() {
            "http" | "https" => Ok(Self::Http { url }),
            other => Err(SourceConfigError::UnsupportedScheme {
                scheme: other.to_string(),
            }),
        }
    }

    /// # Errors
    ///
    /// Returns `SourceConfigError::EmptyPath` for a blank path.
    pub fn file(raw: &str) -> Result<Self, SourceConfigError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SourceConfigError::EmptyPath);
        }
        Ok(Self::File {
            path: PathBuf::from(trimmed),
        })
    }

    /// Resolve from `QUIZ_QUESTIONS_FILE`, then `QUIZ_QUESTIONS_URL`, then the default URL.
    ///
    /// # Errors
    ///
    /// Returns `SourceConfigError` if a set variable holds an unusable value.
    pub fn from_env() -> Result<Self, SourceConfigError> {
        if let Ok(path) = env::var("QUIZ_QUESTIONS_FILE") {
            return Self::file(&path);
        }
        match env::var("QUIZ_QUESTIONS_URL") {
            Ok(raw) => Self::http(&raw),
            Err(_) => Ok(Self::default()),
        }
    }

    #[must_use]
    pub fn build(&self) -> Arc<dyn QuestionSource> {
        match self {
            Self::Http { url } => Arc::new(HttpQuestionSource::new(url.clone())),
            Self::File { path } => Arc::new(FileQuestionSource::new(path.clone())),
        }
    }
}
