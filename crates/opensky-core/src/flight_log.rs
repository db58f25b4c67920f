use crate::landing::{self, LandingGradeResult, LandingStats};
use crate::touchdown::{AircraftCategory, EngineType, TouchDown};
use crate::OpenSkyError;
use chrono::{DateTime, Utc};
use flate2::read::GzDecoder;
use log::{debug, info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlightLog {
    pub id: String,
    pub aircraft_registry: String,
    pub aircraft_type: String,
    pub category: Option<AircraftCategory>,
    pub engine_type: Option<EngineType>,
    pub departure: String,
    pub arrival: String,
    pub landed_at: Option<DateTime<Utc>>,
    pub touchdowns: Vec<TouchDown>,
    /// Index of the touchdown where the final landing starts. Earlier
    /// entries are go-arounds or pre-flare contacts and are not graded.
    pub final_touchdown_index: usize,
}

impl FlightLog {
    /// The touchdowns that make up the graded landing, bounces included.
    pub fn landing_touchdowns(&self) -> &[TouchDown] {
        self.touchdowns
            .get(self.final_touchdown_index..)
            .unwrap_or(&[])
    }

    pub fn landing_stats(&self) -> LandingStats {
        LandingStats::from_touchdowns(self.landing_touchdowns())
    }

    pub fn landing_grade(&self) -> LandingGradeResult {
        landing::classify(self.landing_touchdowns(), self.category, self.engine_type)
    }

    pub fn route(&self) -> String {
        format!("{} -> {}", self.departure, self.arrival)
    }
}

pub struct FlightLogLoader;

impl FlightLogLoader {
    /// Loads a flight log, gzip-compressed or plain JSON. A `.gz` suffix
    /// forces gzip decoding; otherwise the gzip magic bytes decide.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<FlightLog, OpenSkyError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(OpenSkyError::NotFound(path.to_path_buf()));
        }

        let bytes = fs::read(path)?;
        let gzip = has_gz_suffix(path) || bytes.starts_with(&GZIP_MAGIC);
        let log = Self::decode(&bytes, gzip).map_err(|e| OpenSkyError::InvalidLog {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        debug!(
            "Loaded flight log — path={} id={} touchdowns={} gzip={}",
            path.display(),
            log.id,
            log.touchdowns.len(),
            gzip
        );
        Ok(log)
    }

    /// Parses a flight log from any reader, detecting gzip by magic bytes.
    pub fn parse<R: Read>(mut reader: R) -> Result<FlightLog, OpenSkyError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::decode(&bytes, bytes.starts_with(&GZIP_MAGIC))
    }

    fn decode(bytes: &[u8], gzip: bool) -> Result<FlightLog, OpenSkyError> {
        let mut log: FlightLog = if gzip {
            let mut json = Vec::new();
            GzDecoder::new(bytes).read_to_end(&mut json)?;
            serde_json::from_slice(&json)?
        } else {
            serde_json::from_slice(bytes)?
        };

        // Stable sort, so logs without full timestamps keep recorded order
        if !log.touchdowns.is_empty() && log.touchdowns.iter().all(|t| t.timestamp.is_some()) {
            log.touchdowns.sort_by_key(|t| t.timestamp);
        }

        Ok(log)
    }

    /// Loads every `*.json` / `*.json.gz` log under `dir`, sorted by path.
    /// Files that fail to load are skipped with a warning.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Vec<FlightLog>, OpenSkyError> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(OpenSkyError::NotFound(dir.to_path_buf()));
        }

        let mut paths: Vec<PathBuf> = WalkDir::new(dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file() && is_flight_log_file(e.path()))
            .map(|e| e.into_path())
            .collect();
        paths.sort();

        info!(
            "Loading flight logs — dir={} files={}",
            dir.display(),
            paths.len()
        );

        let logs: Vec<FlightLog> = paths
            .par_iter()
            .filter_map(|path| match Self::load_file(path) {
                Ok(log) => Some(log),
                Err(e) => {
                    warn!("Skipping flight log {}: {}", path.display(), e);
                    None
                }
            })
            .collect();

        Ok(logs)
    }
}

fn has_gz_suffix(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

fn is_flight_log_file(path: &Path) -> bool {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    name.ends_with(".json") || name.ends_with(".json.gz")
}
