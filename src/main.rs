// fyp-build: Game/Server Build Orchestrator
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Pipeline --> Command Dispatch
//!   Build* | Run* | Clean | Format | Lint | Package | Options | Version
//! ```

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;

use fyp_build::cli::global::GlobalOptions;
use fyp_build::cli::{self, Command};
use fyp_build::cmd::build::run_build_command;
use fyp_build::cmd::clean::run_clean_command;
use fyp_build::cmd::config::run_options_command;
use fyp_build::cmd::package::run_package_command;
use fyp_build::cmd::quality::{run_format_command, run_lint_command};
use fyp_build::cmd::run::{run_coupled_command, run_single_command};
use fyp_build::config::loader::ConfigLoader;
use fyp_build::config::{CONFIG_FILE_NAME, Config, ENV_PREFIX};
use fyp_build::core::host::HostInfo;
use fyp_build::error::{Result, Stage, StageFailed};
use fyp_build::logging::{LogConfig, init_logging};
use fyp_build::pipeline::Pipeline;
use fyp_build::pipeline::target::Target;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = cli::parse();
    let command = cli.command_or_default();

    if command == Command::Version {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&build_log_config(&config)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let dry_run = config.global.dry;
    let pipeline = Pipeline::new(Arc::new(config), HostInfo::detect(), dry_run);
    tracing::debug!(command = command.name(), dry_run, "dispatching");

    match dispatch_command(&command, &pipeline).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{} failed", command.name());
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .build()
}

async fn dispatch_command(command: &Command, pipeline: &Pipeline) -> Result<()> {
    match command {
        Command::Build => run_build_command(pipeline, &Target::ALL).await,
        Command::BuildClient => run_build_command(pipeline, &[Target::Client]).await,
        Command::BuildServer => run_build_command(pipeline, &[Target::Server]).await,
        Command::Run => run_coupled_command(pipeline, true).await,
        Command::RunWithLogs => run_coupled_command(pipeline, false).await,
        Command::RunClient => run_single_command(pipeline, Target::Client).await,
        Command::RunServer => run_single_command(pipeline, Target::Server).await,
        Command::Clean(args) => run_clean_command(args, pipeline).await,
        Command::Format => run_format_command(pipeline).await,
        Command::Lint => run_lint_command(pipeline).await,
        Command::Package(args) => run_package_command(pipeline, args.platform).await,
        Command::Options(args) => run_options_command(pipeline.config(), args.json),
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn build_config_loader(global: &GlobalOptions) -> Result<ConfigLoader> {
    let mut loader =
        ConfigLoader::new().add_toml_file_optional(global.project_root().join(CONFIG_FILE_NAME));
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader
        .with_env_prefix(ENV_PREFIX)
        .with_overrides(&global.to_config_overrides())
}

fn load_config(global: &GlobalOptions) -> Result<Config> {
    build_config_loader(global)
        .and_then(ConfigLoader::build)
        .context(StageFailed(Stage::Configuration))
}
