use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;

use crate::error::{CfqError, Result};

/// User-facing reporter for a command run.
///
/// Human output streams as the command progresses; robot output is held back
/// and written as one JSON document by [`Ui::done`] or [`Ui::failed`].
pub trait Ui {
    /// Progress line, e.g. "Creating quota ...".
    fn say(&mut self, message: &str);
    /// Success marker for the step just announced.
    fn ok(&mut self);
    fn warn(&mut self, message: &str);
    /// Terminal failure; the command exits non-zero after this.
    fn failed(&mut self, err: &CfqError);
    /// Terminal success with a machine-readable summary.
    fn done(&mut self, data: serde_json::Value) -> Result<()>;
}

/// Report a finished command. Returns whether it succeeded.
pub fn conclude(ui: &mut dyn Ui, result: Result<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            ui.failed(&err);
            false
        }
    }
}

#[derive(Debug, Default)]
pub struct TerminalUi;

impl TerminalUi {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Ui for TerminalUi {
    fn say(&mut self, message: &str) {
        println!("{message}");
    }

    fn ok(&mut self) {
        println!("{}\n", "OK".green().bold());
    }

    fn warn(&mut self, message: &str) {
        eprintln!("{}", message.yellow().bold());
    }

    fn failed(&mut self, err: &CfqError) {
        println!("{}", "FAILED".red().bold());
        println!("{err}");
    }

    fn done(&mut self, _data: serde_json::Value) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct RobotUi {
    warnings: Vec<String>,
}

impl RobotUi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Ui for RobotUi {
    fn say(&mut self, _message: &str) {}

    fn ok(&mut self) {}

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }

    fn failed(&mut self, err: &CfqError) {
        let mut response = robot_error(err.code(), err.to_string());
        response.warnings = std::mem::take(&mut self.warnings);
        if let Err(emit_err) = emit_robot(&response) {
            eprintln!("Error: {emit_err}");
        }
    }

    fn done(&mut self, data: serde_json::Value) -> Result<()> {
        let mut response = robot_ok(data);
        response.warnings = std::mem::take(&mut self.warnings);
        emit_robot(&response)
    }
}

#[derive(Serialize)]
pub struct RobotResponse<T> {
    pub status: RobotStatus,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub data: T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RobotStatus {
    Ok,
    Error { code: String, message: String },
}

pub fn robot_ok<T: Serialize>(data: T) -> RobotResponse<T> {
    RobotResponse {
        status: RobotStatus::Ok,
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data,
        warnings: Vec::new(),
    }
}

pub fn robot_error(
    code: impl Into<String>,
    message: impl Into<String>,
) -> RobotResponse<serde_json::Value> {
    RobotResponse {
        status: RobotStatus::Error {
            code: code.into(),
            message: message.into(),
        },
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data: serde_json::Value::Null,
        warnings: Vec::new(),
    }
}

pub fn emit_robot<T: Serialize>(response: &RobotResponse<T>) -> Result<()> {
    emit_json(response)
}

pub fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value)?;
    println!("{payload}");
    Ok(())
}
