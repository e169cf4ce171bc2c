use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ContextMissingKey,
    ContextInvalidJson,
    ContextInvalidValue,

    NameInvalid,

    ArtifactMissing,
    ArtifactHeaderMismatch,

    GitCommandFailed,

    PipelineAlreadyRan,

    InternalIoError,
    InternalJsonError,
    InternalUnexpected,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ContextMissingKey => "context.missing_key",
            ErrorCode::ContextInvalidJson => "context.invalid_json",
            ErrorCode::ContextInvalidValue => "context.invalid_value",

            ErrorCode::NameInvalid => "name.invalid",

            ErrorCode::ArtifactMissing => "artifact.missing",
            ErrorCode::ArtifactHeaderMismatch => "artifact.header_mismatch",

            ErrorCode::GitCommandFailed => "git.command_failed",

            ErrorCode::PipelineAlreadyRan => "pipeline.already_ran",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
            ErrorCode::InternalUnexpected => "internal.unexpected",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextMissingKeyDetails {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextInvalidJsonDetails {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextInvalidValueDetails {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub problem: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameInvalidDetails {
    pub field: String,
    pub problem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactMissingDetails {
    pub path: String,
    pub purpose: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactHeaderMismatchDetails {
    pub path: String,
    pub expected: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalIoErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalJsonErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
        }
    }

    pub fn context_missing_key(key: impl Into<String>, path: Option<String>) -> Self {
        let details = serde_json::to_value(ContextMissingKeyDetails {
            key: key.into(),
            path,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(
            ErrorCode::ContextMissingKey,
            "Missing required context key",
            details,
        )
    }

    pub fn context_invalid_json(path: impl Into<String>, err: serde_json::Error) -> Self {
        let details = serde_json::to_value(ContextInvalidJsonDetails {
            path: path.into(),
            error: err.to_string(),
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(
            ErrorCode::ContextInvalidJson,
            "Invalid JSON in context file",
            details,
        )
    }

    pub fn context_invalid_value(
        key: impl Into<String>,
        value: Option<String>,
        problem: impl Into<String>,
    ) -> Self {
        let details = serde_json::to_value(ContextInvalidValueDetails {
            key: key.into(),
            value,
            problem: problem.into(),
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(
            ErrorCode::ContextInvalidValue,
            "Invalid context value",
            details,
        )
    }

    pub fn name_invalid(
        field: impl Into<String>,
        problem: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        let field = field.into();
        let problem = problem.into();
        let details = serde_json::to_value(NameInvalidDetails {
            field: field.clone(),
            problem: problem.clone(),
            value,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(
            ErrorCode::NameInvalid,
            format!("Invalid name for '{}': {}", field, problem),
            details,
        )
    }

    pub fn artifact_missing(path: impl Into<String>, purpose: impl Into<String>) -> Self {
        let path = path.into();
        let details = serde_json::to_value(ArtifactMissingDetails {
            path: path.clone(),
            purpose: purpose.into(),
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(
            ErrorCode::ArtifactMissing,
            format!("Expected generated file is missing: {}", path),
            details,
        )
        .with_hint("The template and the finishing rules are out of sync; re-generate the project from a current template")
    }

    pub fn artifact_header_mismatch(
        path: impl Into<String>,
        expected: impl Into<String>,
        found: Option<String>,
    ) -> Self {
        let path = path.into();
        let expected = expected.into();
        let details = serde_json::to_value(ArtifactHeaderMismatchDetails {
            path: path.clone(),
            expected: expected.clone(),
            found,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(
            ErrorCode::ArtifactHeaderMismatch,
            format!("File {} does not begin with '{}'", path, expected),
            details,
        )
        .with_hint("The template and the finishing rules are out of sync; re-generate the project from a current template")
    }

    pub fn git_command_failed(message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::GitCommandFailed,
            message,
            Value::Object(serde_json::Map::new()),
        )
    }

    pub fn pipeline_already_ran() -> Self {
        Self::new(
            ErrorCode::PipelineAlreadyRan,
            "Generation pipeline has already run",
            Value::Object(serde_json::Map::new()),
        )
        .with_hint("Create a new pipeline for each generated project; a pipeline is not reentrant")
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        let details = serde_json::to_value(InternalIoErrorDetails {
            error: error.into(),
            context,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(ErrorCode::InternalIoError, "IO error", details)
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        let details = serde_json::to_value(InternalJsonErrorDetails {
            error: error.into(),
            context,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(ErrorCode::InternalJsonError, "JSON error", details)
    }

    pub fn internal_unexpected(error: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InternalUnexpected,
            "Unexpected error",
            serde_json::json!({ "error": error.into() }),
        )
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }
}
