use chrono::Local;
use colored::*;
use std::env;
use std::sync::OnceLock;

use crate::constants::LOG_LEVEL_VAR;

/// Severity threshold shared by every `Logger` in the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

static LEVEL: OnceLock<LogLevel> = OnceLock::new();

fn threshold() -> LogLevel {
    *LEVEL.get_or_init(|| {
        env::var(LOG_LEVEL_VAR)
            .ok()
            .and_then(|raw| LogLevel::parse(&raw))
            .unwrap_or(LogLevel::Info)
    })
}

#[derive(Debug, Clone)]
pub struct Logger {
    pub name: String,
    pub info_color: Color,
}

impl Logger {
    pub fn new(name: impl Into<String>, info_color: Color) -> Self {
        Self {
            name: name.into().to_uppercase(),
            info_color,
        }
    }

    fn timestamp() -> String {
        Local::now().format("%H:%M:%S").to_string()
    }

    fn enabled(level: LogLevel) -> bool {
        level >= threshold()
    }

    pub fn debug(&self, msg: impl AsRef<str>) {
        if !Self::enabled(LogLevel::Debug) {
            return;
        }
        println!(
            "{} {} {}",
            format!("[{}][DEBUG][{}]", Self::timestamp(), self.name).dimmed(),
            "→".dimmed(),
            msg.as_ref()
        );
    }

    pub fn info(&self, msg: impl AsRef<str>) {
        if !Self::enabled(LogLevel::Info) {
            return;
        }
        println!(
            "{} {} {}",
            format!("[{}][INFO][{}]", Self::timestamp(), self.name)
                .bold()
                .color(self.info_color),
            "→".dimmed(),
            msg.as_ref()
        );
    }

    pub fn warn(&self, msg: impl AsRef<str>) {
        if !Self::enabled(LogLevel::Warn) {
            return;
        }
        println!(
            "{} {} {}",
            format!("[{}][WARN][{}]", Self::timestamp(), self.name)
                .bold()
                .yellow(),
            "→".dimmed(),
            msg.as_ref()
        );
    }

    pub fn error(&self, msg: impl AsRef<str>) {
        eprintln!(
            "{} {} {}",
            format!("[{}][ERROR][{}]", Self::timestamp(), self.name)
                .bold()
                .bright_red(),
            "→".dimmed(),
            msg.as_ref()
        );
    }
}
