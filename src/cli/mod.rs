// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for fyp-build using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! fyp [global options] [command]
//! build                         (default)
//! build_client | build_game     build_server
//! run | run_with_logs           run_client | run_game     run_server
//! clean [--all]
//! format | fmt                  lint
//! package [-p windows|macos|linux]
//! options [--json]              version
//! ```

pub mod global;
pub mod args;


use crate::cli::global::GlobalOptions;
use crate::cli::args::{CleanArgs, OptionsArgs, PackageArgs};
use clap::{Parser, Subcommand};

/// Game/Server Build Orchestrator
///
/// Builds, runs and packages the game client and its server.
#[derive(Debug, Parser)]
#[command(
    name = "fyp",
    author,
    version,
    about = "Game/Server Build Orchestrator",
    long_about = "fyp-build Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Builds, runs and packages the game client and its server.\n\n\
                  Invoking `fyp` without a command builds both targets. See\n\
                  `fyp <command> --help` for more information about a command.",
    after_help = "CONFIGURATION:\n\n\
                  fyp reads `fyp.toml` from the project root if it exists, then\n\
                  every file given with --config, in order. FYP_<SECTION>__<KEY>\n\
                  environment variables override files, --set overrides the\n\
                  environment, and --root/--dry override everything else."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The command to run, `build` when none was given.
    #[must_use]
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Build)
    }
}

/// Available commands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Builds the client and the server.
    Build,

    /// Builds the client.
    #[command(name = "build_client", visible_alias = "build_game")]
    BuildClient,

    /// Builds the server.
    #[command(name = "build_server")]
    BuildServer,

    /// Builds both, runs the server and then the client, logging to a new session.
    Run,

    /// Builds and runs the client, logging to a new session.
    #[command(name = "run_client", visible_alias = "run_game")]
    RunClient,

    /// Builds and runs the server, logging to a new session.
    #[command(name = "run_server")]
    RunServer,

    /// Like `run`, with both programs writing to this console.
    #[command(name = "run_with_logs")]
    RunWithLogs,

    /// Removes build outputs.
    Clean(CleanArgs),

    /// Formats every Go source file under the source directory.
    #[command(visible_alias = "fmt")]
    Format,

    /// Runs the linter over the project.
    Lint,

    /// Builds a distributable archive for a platform.
    Package(PackageArgs),

    /// Prints the resolved configuration.
    Options(OptionsArgs),

    /// Shows the version.
    Version,
}

impl Command {
    /// Name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Build => "build",
            Self::BuildClient => "build_client",
            Self::BuildServer => "build_server",
            Self::Run => "run",
            Self::RunClient => "run_client",
            Self::RunServer => "run_server",
            Self::RunWithLogs => "run_with_logs",
            Self::Clean(_) => "clean",
            Self::Format => "format",
            Self::Lint => "lint",
            Self::Package(_) => "package",
            Self::Options(_) => "options",
            Self::Version => "version",
        }
    }
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
