// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!           FypError (16 bytes)
//!                  |
//!     +--------+---+-----+------+
//!     |        |         |      |
//!     v        v         v      v
//!  Config  Toolchain  Process   Fs
//!   Box       Box       Box    Box
//!
//! Sub-errors (unboxed internally):
//!   Config    ReadError, ParseError, MissingKey, InvalidValue, UnknownPlatform
//!   Toolchain InvocationFailed, NonZeroExit, MissingArtifact  (carry a Stage)
//!   Process   ExecutableNotFound, SpawnFailed, NonZeroExit, Signalled, ...
//!   Fs        NotFound, PermissionDenied, IoError
//!
//! anyhow context: StageFailed(Stage) names the pipeline stage for the CLI.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`FypError`].
pub type FypResult<T> = std::result::Result<T, FypError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at two words on the stack.
/// They are rendered inline rather than exposed as sources, so an
/// `anyhow` chain printed with `{:#}` shows each message once.
#[derive(Debug, Error)]
pub enum FypError {
    /// Configuration error (unknown platform, invalid values, unreadable files).
    #[error("config error: {0}")]
    Config(Box<ConfigError>),

    /// External toolchain invocation failed.
    #[error("toolchain error: {0}")]
    Toolchain(Box<ToolchainError>),

    /// Target process failed to spawn or exited abnormally.
    #[error("process error: {0}")]
    Process(Box<ProcessError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(Box<FsError>),
}

impl FypError {
    /// Returns the pipeline stage recorded on toolchain errors.
    #[must_use]
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::Toolchain(err) => Some(err.stage()),
            _ => None,
        }
    }
}

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for FypError {
                fn from(err: $error) -> Self {
                    FypError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    ToolchainError => Toolchain,
    ProcessError => Process,
    FsError => Fs,
}

// --- Pipeline stages ---

/// Pipeline stage, used to tell the user which step of a command failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Configuration,
    DependencyStaging,
    Compile,
    Launch,
    Shutdown,
    Package,
    Clean,
    Format,
    Lint,
}

impl Stage {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::DependencyStaging => "dependency-staging",
            Self::Compile => "compile",
            Self::Launch => "launch",
            Self::Shutdown => "shutdown",
            Self::Package => "package",
            Self::Clean => "clean",
            Self::Format => "format",
            Self::Lint => "lint",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Context attached to an error chain at the command layer.
///
/// Rendered first by `{:#}` so the CLI diagnostic starts with the stage name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("stage '{0}' failed")]
pub struct StageFailed(pub Stage);

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Platform name not one of windows/macos/linux.
    #[error("unknown platform '{0}' (expected windows, macos or linux)")]
    UnknownPlatform(String),
}

// --- Toolchain Errors ---

/// Errors from external toolchain invocations (go, gofumpt, zip, ...).
#[derive(Debug, Error)]
pub enum ToolchainError {
    /// The tool could not be started or waited on.
    #[error("[{stage}] failed to invoke {tool}: {message}")]
    InvocationFailed {
        stage: Stage,
        tool: String,
        message: String,
    },

    /// The tool exited with a non-zero status.
    #[error("[{stage}] {tool} exited with code {code}")]
    NonZeroExit {
        stage: Stage,
        tool: String,
        code: i32,
    },

    /// The compiler reported success but the binary is not where it should be.
    #[error("[{stage}] {target} build produced no binary at '{path}'")]
    MissingArtifact {
        stage: Stage,
        target: String,
        path: String,
    },
}

impl ToolchainError {
    #[must_use]
    pub const fn stage(&self) -> Stage {
        match self {
            Self::InvocationFailed { stage, .. }
            | Self::NonZeroExit { stage, .. }
            | Self::MissingArtifact { stage, .. } => *stage,
        }
    }
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },

    /// Process was terminated by a signal it did not receive from us.
    #[error("process '{command}' was terminated by signal {signal}")]
    Signalled { command: String, signal: i32 },

    /// Process ended before the orchestrator asked it to.
    #[error("process '{command}' exited early ({status})")]
    ExitedEarly { command: String, status: String },

    /// Waiting on the process failed.
    #[error("failed to wait on process '{command}': {source}")]
    WaitFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Delivering a signal to the process failed.
    #[error("failed to signal process '{command}': {message}")]
    SignalFailed { command: String, message: String },

    /// The operation needs a running process but the handle has none.
    #[error("process '{command}' is not running (state: {state})")]
    NotRunning { command: String, state: String },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// Permission denied.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Classifies an I/O error on `path`.
    #[must_use]
    pub fn from_io(path: &std::path::Path, source: std::io::Error) -> Self {
        let display = path.display().to_string();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(display),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(display),
            _ => Self::IoError {
                path: display,
                source,
            },
        }
    }
}
