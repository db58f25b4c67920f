// SPDX-License-Identifier: MIT
// Copyright (c) 2026 OpenSky contributors

pub mod flight_log;
pub mod landing;
pub mod report;
pub mod touchdown;

pub use flight_log::{FlightLog, FlightLogLoader};
pub use landing::{classify, Grade, LandingGradeResult, LandingStats};
pub use touchdown::{AircraftCategory, EngineType, TouchDown};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpenSkyError {
    #[error("Path not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Invalid flight log {}: {reason}", .path.display())]
    InvalidLog { path: PathBuf, reason: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Per-user data directory; flight logs default to `flight_logs/` below it.
pub fn get_data_root() -> PathBuf {
    directories::ProjectDirs::from("org", "opensky", "OpenSky")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn default_flight_log_dir() -> PathBuf {
    get_data_root().join("flight_logs")
}
