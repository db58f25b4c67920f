use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One recorded ground contact during a landing.
///
/// Rates are in feet per minute (negative while descending), angles in
/// degrees and winds in knots. A negative `cross_wind` comes from the left;
/// a positive `head_wind` is a tailwind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TouchDown {
    pub timestamp: Option<DateTime<Utc>>,
    pub landing_rate: f64,
    pub g_force: f64,
    pub bank_angle: f64,
    pub side_slip_angle: f64,
    pub cross_wind: f64,
    pub head_wind: f64,
    pub wind_angle: f64,
    pub wind_knots: f64,
    pub airspeed: f64,
    pub ground_speed: f64,
}

impl TouchDown {
    /// Shorthand for the two values most checks care about.
    pub fn new(landing_rate: f64, g_force: f64) -> Self {
        Self {
            landing_rate,
            g_force,
            ..Default::default()
        }
    }
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AircraftCategory {
    /// Single engine piston
    SEP,
    /// Multi engine piston
    MEP,
    /// Single engine turbine
    SET,
    /// Multi engine turbine
    MET,
    /// Helicopter
    HEL,
    /// Narrow body airliner
    NBA,
    /// Wide body airliner
    WBA,
    #[serde(other)]
    Other,
}

impl AircraftCategory {
    /// Light categories get a tighter crosswind limit.
    pub fn is_light(self) -> bool {
        matches!(
            self,
            AircraftCategory::SEP
                | AircraftCategory::MEP
                | AircraftCategory::SET
                | AircraftCategory::MET
                | AircraftCategory::HEL
        )
    }
}

impl fmt::Display for AircraftCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            AircraftCategory::SEP => "SEP",
            AircraftCategory::MEP => "MEP",
            AircraftCategory::SET => "SET",
            AircraftCategory::MET => "MET",
            AircraftCategory::HEL => "HEL",
            AircraftCategory::NBA => "NBA",
            AircraftCategory::WBA => "WBA",
            AircraftCategory::Other => "Other",
        };
        write!(f, "{}", tag)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineType {
    Jet,
    Turboprop,
    Piston,
    Helo,
    #[serde(other)]
    Other,
}

impl EngineType {
    pub fn is_jet(self) -> bool {
        self == EngineType::Jet
    }
}
