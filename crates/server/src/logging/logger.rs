// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use config::LogConfig;
use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use std::path::PathBuf;
use thiserror::Error;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

const LOG_FILE_NAME: &str = "logs.log";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log level '{level}': {source}")]
    InvalidLogLevel {
        level: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to create log directory or file appender: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A global tracing subscriber is already installed")]
    AlreadyInitialized(#[from] tracing_subscriber::util::TryInitError),
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Translate a configured level into an `EnvFilter` directive.
///
/// `http` is not a tracing level: it means `info` plus the per-request events
/// emitted under the `http` target.
pub fn filter_directive(level: &str) -> &str {
    if level == "http" {
        "info,http=debug"
    } else {
        level
    }
}

fn console_layer(json: bool, strip_ansi: bool) -> BoxedLayer {
    if json {
        fmt::layer().json().boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(!strip_ansi)
            .boxed()
    }
}

fn file_layer(json: bool, writer: NonBlocking) -> BoxedLayer {
    if json {
        fmt::layer().json().with_writer(writer).boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .with_writer(writer)
            .boxed()
    }
}

/// Size-rotated appender: `logs.log`, then `logs.log.1`, `logs.log.2`, ...
/// `write_max_files` counts the current file.
fn file_writer(config: &LogConfig) -> Result<(NonBlocking, WorkerGuard), LoggingError> {
    std::fs::create_dir_all(&config.write_path)?;

    let appender = BasicRollingFileAppender::new(
        PathBuf::from(&config.write_path).join(LOG_FILE_NAME),
        RollingConditionBasic::new().max_size(config.write_max_file_size),
        config.write_max_files.saturating_sub(1),
    )?;

    Ok(tracing_appender::non_blocking(appender))
}

/// Install the global subscriber described by `config`.
///
/// When file output is enabled the returned guard flushes the background
/// writer on drop, so the caller must hold it for the life of the process.
pub fn init(config: &LogConfig) -> Result<Option<WorkerGuard>, LoggingError> {
    let filter = EnvFilter::try_new(filter_directive(&config.level)).map_err(|source| {
        LoggingError::InvalidLogLevel {
            level: config.level.clone(),
            source,
        }
    })?;

    let mut layers = vec![console_layer(config.json, config.strip_ansi)];
    let mut guard = None;

    if config.write {
        let (writer, worker_guard) = file_writer(config)?;
        layers.push(file_layer(config.json, writer));
        guard = Some(worker_guard);
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()?;

    Ok(guard)
}
