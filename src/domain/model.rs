use reqwest::StatusCode;
use std::fmt;

/// The HTTP verbs the prompt understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    /// Matches a command token case-insensitively.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "get" => Some(Verb::Get),
            "post" => Some(Verb::Post),
            "put" => Some(Verb::Put),
            "delete" => Some(Verb::Delete),
            _ => None,
        }
    }

    pub fn usage(self) -> &'static str {
        match self {
            Verb::Get => "Get usage: get [--sorted (True/False)] [--id (dataId)]",
            Verb::Post => r#"Post usage: post {"dataId": "someId", "weight": 42}"#,
            Verb::Put => r#"Put usage: put {id} {"dataId": "someId", "weight": 42}"#,
            Verb::Delete => "Delete usage: delete {id}",
        }
    }

    pub fn all() -> [Verb; 4] {
        [Verb::Get, Verb::Post, Verb::Put, Verb::Delete]
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Api(ApiCommand),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCommand {
    GetAll { sorted: bool },
    GetById { id: String },
    Post { body: String },
    Put { id: String, body: String },
    Delete { id: String },
}

impl ApiCommand {
    pub fn verb(&self) -> Verb {
        match self {
            ApiCommand::GetAll { .. } | ApiCommand::GetById { .. } => Verb::Get,
            ApiCommand::Post { .. } => Verb::Post,
            ApiCommand::Put { .. } => Verb::Put,
            ApiCommand::Delete { .. } => Verb::Delete,
        }
    }

    pub fn to_request(&self) -> ApiRequest {
        match self {
            ApiCommand::GetAll { sorted } => ApiRequest {
                verb: Verb::Get,
                path: if *sorted { "?sorted=True".to_string() } else { String::new() },
                body: None,
                output_mode: OutputMode::FullBody,
            },
            ApiCommand::GetById { id } => ApiRequest {
                verb: Verb::Get,
                path: id.clone(),
                body: None,
                output_mode: OutputMode::FullBody,
            },
            ApiCommand::Post { body } => ApiRequest {
                verb: Verb::Post,
                path: String::new(),
                body: Some(body.clone()),
                output_mode: OutputMode::StatusOnly,
            },
            ApiCommand::Put { id, body } => ApiRequest {
                verb: Verb::Put,
                path: id.clone(),
                body: Some(body.clone()),
                output_mode: OutputMode::StatusOnly,
            },
            ApiCommand::Delete { id } => ApiRequest {
                verb: Verb::Delete,
                path: id.clone(),
                body: None,
                output_mode: OutputMode::StatusOnly,
            },
        }
    }
}

/// What a successful response prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    FullBody,
    StatusOnly,
}

/// One request relative to the base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub verb: Verb,
    pub path: String,
    pub body: Option<String>,
    pub output_mode: OutputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Body(String),
    Status(StatusCode),
    Failure { status: StatusCode, body: String },
}

impl Outcome {
    pub fn from_response(response: ApiResponse, mode: OutputMode) -> Self {
        if !response.status.is_success() {
            return Outcome::Failure {
                status: response.status,
                body: response.body,
            };
        }
        match mode {
            OutputMode::FullBody => Outcome::Body(response.body),
            OutputMode::StatusOnly => Outcome::Status(response.status),
        }
    }
}
