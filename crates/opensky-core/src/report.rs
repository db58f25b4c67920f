use crate::flight_log::FlightLog;
use crate::landing::Grade;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandingReportRow {
    pub flight_id: String,
    pub registry: String,
    pub aircraft_type: String,
    pub route: String,
    pub landed_at: Option<DateTime<Utc>>,
    pub grade: Grade,
    pub description: String,
    pub landing_rate: f64,
    pub max_g_force: f64,
    pub bounces: usize,
    pub cross_wind: f64,
    pub head_wind: f64,
}

impl LandingReportRow {
    pub fn from_log(log: &FlightLog) -> Self {
        let stats = log.landing_stats();
        let result = log.landing_grade();
        Self {
            flight_id: log.id.clone(),
            registry: log.aircraft_registry.clone(),
            aircraft_type: log.aircraft_type.clone(),
            route: log.route(),
            landed_at: log.landed_at,
            grade: result.grade,
            description: result.description,
            landing_rate: stats.max_landing_rate,
            max_g_force: stats.max_g_force,
            bounces: stats.bounces,
            cross_wind: stats.cross_wind,
            head_wind: stats.head_wind,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LandingReport {
    pub rows: Vec<LandingReportRow>,
}

impl LandingReport {
    pub fn from_logs(logs: &[FlightLog]) -> Self {
        Self {
            rows: logs.iter().map(LandingReportRow::from_log).collect(),
        }
    }

    /// Number of landings per grade, best grade first. Grades with no
    /// landings are left out.
    pub fn grade_counts(&self) -> BTreeMap<Grade, usize> {
        let mut counts = BTreeMap::new();
        for row in &self.rows {
            *counts.entry(row.grade).or_insert(0) += 1;
        }
        counts
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        for row in &self.rows {
            wtr.serialize(row).context("Failed to write report row")?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn save_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref()).with_context(|| {
            format!("Failed to create report file {}", path.as_ref().display())
        })?;
        self.write_csv(file)
    }
}
