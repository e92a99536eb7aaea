use std::path::PathBuf;

use config::ConfigError as ConfigLoaderError;
use rmcp::model::ErrorData;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors that can occur while loading or validating configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }
}

/// How an MCP protocol error is surfaced to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidParams,
    ResourceNotFound,
}

/// Structured error metadata returned for protocol-level failures.
///
/// Domain failures (bad index, missing media plan fields) are ordinary tool
/// results and never go through this type.
#[derive(Debug, Clone, Serialize)]
pub struct ToolErrorDescriptor {
    pub code: &'static str,
    pub message: &'static str,
    pub remediation: &'static str,
    #[serde(skip)]
    pub kind: ErrorKind,
}

impl ToolErrorDescriptor {
    pub const fn new(
        code: &'static str,
        message: &'static str,
        remediation: &'static str,
        kind: ErrorKind,
    ) -> Self {
        Self {
            code,
            message,
            remediation,
            kind,
        }
    }

    pub fn builder(&self) -> ToolErrorDescriptorBuilder<'_> {
        ToolErrorDescriptorBuilder::new(self)
    }
}

/// Builder for error data that fails if required fields are missing.
pub struct ToolErrorDescriptorBuilder<'a> {
    descriptor: &'a ToolErrorDescriptor,
    retryable: Option<bool>,
    details: Option<Value>,
    extra_fields: Map<String, Value>,
}

impl<'a> ToolErrorDescriptorBuilder<'a> {
    pub fn new(descriptor: &'a ToolErrorDescriptor) -> Self {
        Self {
            descriptor,
            retryable: None,
            details: None,
            extra_fields: Map::new(),
        }
    }

    pub fn retryable(mut self, retryable: bool) -> Self {
        self.retryable = Some(retryable);
        self
    }

    pub fn details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn with_context_field(mut self, key: &str, value: Value) -> Self {
        self.extra_fields.insert(key.to_string(), value);
        self
    }

    pub fn build(self) -> Result<ErrorData, ToolErrorBuilderError> {
        if self.descriptor.remediation.trim().is_empty() {
            return Err(ToolErrorBuilderError::MissingRemediation {
                code: self.descriptor.code,
            });
        }
        let retryable = self
            .retryable
            .ok_or(ToolErrorBuilderError::MissingRetryable {
                code: self.descriptor.code,
            })?;

        let mut data = Map::new();
        data.insert("code".into(), Value::String(self.descriptor.code.into()));
        data.insert(
            "remediation".into(),
            Value::String(self.descriptor.remediation.into()),
        );
        data.insert("retryable".into(), Value::Bool(retryable));
        if let Some(details) = self.details {
            data.insert("details".into(), details);
        }
        for (key, value) in self.extra_fields {
            data.insert(key, value);
        }

        let data = Some(Value::Object(data));
        Ok(match self.descriptor.kind {
            ErrorKind::InvalidParams => ErrorData::invalid_params(self.descriptor.message, data),
            ErrorKind::ResourceNotFound => {
                ErrorData::resource_not_found(self.descriptor.message, data)
            }
        })
    }
}

/// Errors when required builder fields are missing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToolErrorBuilderError {
    #[error("retryable is missing (code={code})")]
    MissingRetryable { code: &'static str },
    #[error("remediation is empty (code={code})")]
    MissingRemediation { code: &'static str },
}

/// Returned when a client reads a resource URI this server does not expose.
pub const RESOURCE_NOT_FOUND_ERROR: ToolErrorDescriptor = ToolErrorDescriptor::new(
    "RESOURCE_NOT_FOUND",
    "Unknown resource URI",
    "Call resources/list and read one of the advertised URIs (todos://latest).",
    ErrorKind::ResourceNotFound,
);

/// Returned when a client requests a prompt this server does not expose.
pub const PROMPT_NOT_FOUND_ERROR: ToolErrorDescriptor = ToolErrorDescriptor::new(
    "PROMPT_NOT_FOUND",
    "Unknown prompt name",
    "Call prompts/list and request one of the advertised prompts (todo_summary_prompt).",
    ErrorKind::InvalidParams,
);

/// Build protocol error data, falling back to a bare error if the descriptor is incomplete.
pub fn error_data(descriptor: &ToolErrorDescriptor, retryable: bool, details: Value) -> ErrorData {
    descriptor
        .builder()
        .retryable(retryable)
        .details(details)
        .build()
        .unwrap_or_else(|err| ErrorData::internal_error(err.to_string(), None))
}
