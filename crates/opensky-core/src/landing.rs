// SPDX-License-Identifier: MIT
// Copyright (c) 2026 OpenSky contributors

use crate::touchdown::{AircraftCategory, EngineType, TouchDown};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Discrete landing grade, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "E")]
    E,
    #[serde(rename = "F")]
    F,
    #[serde(rename = "?")]
    Unknown,
}

impl Grade {
    pub const ALL: [Grade; 10] = [
        Grade::APlus,
        Grade::A,
        Grade::AMinus,
        Grade::B,
        Grade::BMinus,
        Grade::C,
        Grade::D,
        Grade::E,
        Grade::F,
        Grade::Unknown,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::B => "B",
            Grade::BMinus => "B-",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
            Grade::F => "F",
            Grade::Unknown => "?",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grade::ALL
            .iter()
            .copied()
            .find(|g| g.symbol() == s.trim())
            .ok_or_else(|| format!("Unknown landing grade '{}'", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandingGradeResult {
    pub grade: Grade,
    pub description: String,
}

impl LandingGradeResult {
    pub fn new(grade: Grade, description: &str) -> Self {
        Self {
            grade,
            description: description.to_string(),
        }
    }

    /// The "nothing matched" result.
    pub fn unknown() -> Self {
        Self::new(Grade::Unknown, "Unknown")
    }
}

impl Default for LandingGradeResult {
    fn default() -> Self {
        Self::unknown()
    }
}

/// Aggregates over the touchdowns of a single landing.
///
/// Wind and speed values are taken from the first touchdown only; everything
/// else looks at the whole sequence. An empty sequence yields all zeros.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LandingStats {
    /// Most negative landing rate (fpm).
    pub max_landing_rate: f64,
    pub max_g_force: f64,
    pub min_g_force: f64,
    /// Whichever bank extreme has the larger magnitude, ties to the positive side.
    pub max_bank_angle: f64,
    pub max_side_slip_angle: f64,
    pub bounces: usize,
    /// Touchdowns the aggregates were taken from; zero means nothing to grade.
    pub touchdowns: usize,
    pub cross_wind: f64,
    pub head_wind: f64,
    pub wind_angle: f64,
    pub wind_knots: f64,
    pub airspeed: f64,
    pub ground_speed: f64,
}

impl LandingStats {
    pub fn from_touchdowns(touchdowns: &[TouchDown]) -> Self {
        let Some(first) = touchdowns.first() else {
            return Self::default();
        };

        Self {
            max_landing_rate: min_of(touchdowns, |t| t.landing_rate),
            max_g_force: max_of(touchdowns, |t| t.g_force),
            min_g_force: min_of(touchdowns, |t| t.g_force),
            max_bank_angle: larger_extreme(touchdowns, |t| t.bank_angle),
            max_side_slip_angle: larger_extreme(touchdowns, |t| t.side_slip_angle),
            bounces: touchdowns.len().saturating_sub(1),
            touchdowns: touchdowns.len(),
            cross_wind: first.cross_wind,
            head_wind: first.head_wind,
            wind_angle: first.wind_angle,
            wind_knots: first.wind_knots,
            airspeed: first.airspeed,
            ground_speed: first.ground_speed,
        }
    }
}

fn max_of(touchdowns: &[TouchDown], field: impl Fn(&TouchDown) -> f64) -> f64 {
    touchdowns
        .iter()
        .map(&field)
        .fold(f64::NEG_INFINITY, f64::max)
}

fn min_of(touchdowns: &[TouchDown], field: impl Fn(&TouchDown) -> f64) -> f64 {
    touchdowns.iter().map(&field).fold(f64::INFINITY, f64::min)
}

fn larger_extreme(touchdowns: &[TouchDown], field: impl Fn(&TouchDown) -> f64) -> f64 {
    let max = max_of(touchdowns, &field);
    let min = min_of(touchdowns, &field);
    if max.abs() >= min.abs() {
        max
    } else {
        min
    }
}

/// Grades a landing from its touchdowns (final touchdown index onward).
pub fn classify(
    touchdowns: &[TouchDown],
    category: Option<AircraftCategory>,
    engine: Option<EngineType>,
) -> LandingGradeResult {
    classify_stats(&LandingStats::from_touchdowns(touchdowns), category, engine)
}

pub fn classify_stats(
    stats: &LandingStats,
    category: Option<AircraftCategory>,
    engine: Option<EngineType>,
) -> LandingGradeResult {
    // All-zero aggregates would otherwise read as a low-G landing
    if stats.touchdowns == 0 {
        return LandingGradeResult::unknown();
    }
    classify_from(LandingGradeResult::unknown(), stats, category, engine)
}

/// Runs the grading cascade starting from `seed` instead of `?`.
///
/// Each rule only fires while the grade is still `?`, except the crash check
/// (always) and the `A+` hard landing downgrade, which only a seeded `A+` can
/// reach.
pub fn classify_from(
    seed: LandingGradeResult,
    stats: &LandingStats,
    category: Option<AircraftCategory>,
    engine: Option<EngineType>,
) -> LandingGradeResult {
    let mut result = seed;
    let rate = stats.max_landing_rate.abs();
    let max_g = stats.max_g_force;
    let min_g = stats.min_g_force;

    let set = |result: &mut LandingGradeResult, grade: Grade, description: &str| {
        *result = LandingGradeResult::new(grade, description);
    };

    if rate > 1000.0 || max_g > 3.0 {
        set(&mut result, Grade::F, "Crash landing");
    }

    if result.grade == Grade::Unknown
        && (stats.max_bank_angle < -5.0 || stats.max_bank_angle > 5.0)
    {
        set(&mut result, Grade::E, "Dangerous bank angle");
    }

    // Asymmetric -65/+16 limits, keep as is.
    if result.grade == Grade::Unknown
        && (stats.max_side_slip_angle < -65.0 || stats.max_side_slip_angle > 16.0)
    {
        set(&mut result, Grade::E, "Dangerous sideslip angle");
    }

    if result.grade == Grade::Unknown && ((rate > 840.0 && rate <= 1000.0) || max_g > 2.86) {
        set(&mut result, Grade::E, "Severe hard landing");
    }

    if result.grade == Grade::Unknown && stats.cross_wind.abs() > 40.0 {
        set(&mut result, Grade::E, "Dangerous crosswind");
    }

    if result.grade == Grade::Unknown
        && stats.cross_wind.abs() > 20.0
        && category.is_some_and(AircraftCategory::is_light)
    {
        set(&mut result, Grade::E, "Dangerous crosswind");
    }

    if result.grade == Grade::Unknown && stats.head_wind > 15.0 {
        set(&mut result, Grade::E, "Dangerous tailwind");
    }

    // Only reachable with a seeded A+, nothing above assigns it.
    if result.grade == Grade::APlus
        && ((rate > 600.0 && rate <= 840.0) || (max_g > 2.6 && max_g <= 2.86))
    {
        set(&mut result, Grade::D, "Hard landing");
    }

    if result.grade == Grade::Unknown && stats.bounces > 2 {
        set(&mut result, Grade::D, "Porpoising landing");
    }

    if result.grade == Grade::Unknown && max_g > 2.1 && max_g <= 2.6 {
        set(&mut result, Grade::C, "Rough landing");
    }

    if result.grade == Grade::Unknown && stats.bounces > 1 {
        set(&mut result, Grade::C, "Bouncy landing");
    }

    if result.grade == Grade::Unknown && max_g > 1.5 && max_g <= 2.1 {
        set(&mut result, Grade::BMinus, "Uncomfortable landing");
    }

    if result.grade == Grade::Unknown && max_g > 1.25 && max_g <= 1.5 {
        set(&mut result, Grade::B, "OK landing");
    }

    if result.grade == Grade::Unknown && min_g >= 0.75 && max_g <= 1.25 {
        set(&mut result, Grade::A, "Good landing");
        if let Some((grade, description)) = refine_good_landing(rate, category, engine) {
            set(&mut result, grade, description);
        }
    }

    if result.grade == Grade::Unknown && min_g < 0.75 {
        set(&mut result, Grade::BMinus, "Low-G landing");
    }

    result
}

/// Rate windows for a smooth (0.75-1.25 g) landing. `None` keeps the plain A.
/// Below the perfect window counts as too soft, except for the generic branch.
fn refine_good_landing(
    rate: f64,
    category: Option<AircraftCategory>,
    engine: Option<EngineType>,
) -> Option<(Grade, &'static str)> {
    match category {
        Some(AircraftCategory::WBA) => rate_window(rate, 350.0, 80.0, 250.0),
        Some(AircraftCategory::NBA) => rate_window(rate, 250.0, 80.0, 160.0),
        _ if engine.is_some_and(EngineType::is_jet) => {
            rate_window(rate, 220.0, 50.0, 160.0)
        }
        _ => {
            if rate > 200.0 {
                Some((Grade::B, "OK landing"))
            } else if rate < 80.0 {
                Some((Grade::APlus, "Butter landing"))
            } else {
                None
            }
        }
    }
}

fn rate_window(
    rate: f64,
    too_firm: f64,
    perfect_min: f64,
    perfect_max: f64,
) -> Option<(Grade, &'static str)> {
    if rate > too_firm {
        Some((Grade::B, "OK landing"))
    } else if rate >= perfect_min && rate <= perfect_max {
        Some((Grade::APlus, "Perfect landing"))
    } else if rate < perfect_min {
        Some((Grade::AMinus, "Landing too soft"))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn td(rate: f64, g: f64) -> TouchDown {
        TouchDown::new(rate, g)
    }

    #[test]
    fn test_empty_sequence() {
        let stats = LandingStats::from_touchdowns(&[]);
        assert_eq!(stats, LandingStats::default());
        assert_eq!(stats.bounces, 0);
        assert_eq!(stats.touchdowns, 0);

        let result = classify(&[], Some(AircraftCategory::NBA), Some(EngineType::Jet));
        assert_eq!(result.grade, Grade::Unknown);
        assert_eq!(result.description, "Unknown");
        assert_eq!(classify_stats(&stats, None, None), LandingGradeResult::unknown());

        // A single zero-g contact is still graded
        let result = classify(&[td(-100.0, 0.0)], None, None);
        assert_eq!(result, LandingGradeResult::new(Grade::BMinus, "Low-G landing"));
    }

    #[test]
    fn test_bounce_count() {
        assert_eq!(LandingStats::from_touchdowns(&[td(-100.0, 1.0)]).bounces, 0);
        assert_eq!(
            LandingStats::from_touchdowns(&[td(-100.0, 1.0), td(-50.0, 1.0)]).bounces,
            1
        );
        let four = vec![td(-100.0, 1.0); 4];
        assert_eq!(LandingStats::from_touchdowns(&four).bounces, 3);
    }

    #[test]
    fn test_larger_extreme_ties_favor_positive() {
        let mut a = td(-100.0, 1.0);
        a.bank_angle = -3.0;
        let mut b = td(-100.0, 1.0);
        b.bank_angle = 3.0;
        let stats = LandingStats::from_touchdowns(&[a.clone(), b]);
        assert_eq!(stats.max_bank_angle, 3.0);

        let mut c = td(-100.0, 1.0);
        c.bank_angle = 2.0;
        let stats = LandingStats::from_touchdowns(&[a, c]);
        assert_eq!(stats.max_bank_angle, -3.0);
    }

    #[test]
    fn test_winds_from_first_touchdown_only() {
        let mut first = td(-100.0, 1.0);
        first.cross_wind = -12.0;
        first.head_wind = -8.0;
        first.airspeed = 140.0;
        let mut second = td(-60.0, 1.0);
        second.cross_wind = 45.0;
        second.head_wind = 30.0;

        let stats = LandingStats::from_touchdowns(&[first, second]);
        assert_eq!(stats.cross_wind, -12.0);
        assert_eq!(stats.head_wind, -8.0);
        assert_eq!(stats.airspeed, 140.0);
        assert_eq!(stats.max_landing_rate, -100.0);
    }

    #[test]
    fn test_grade_symbols_parse_back() {
        for grade in Grade::ALL {
            assert_eq!(grade.symbol().parse::<Grade>().unwrap(), grade);
        }
        assert!("Z".parse::<Grade>().is_err());
        assert_eq!(
            serde_json::to_string(&Grade::BMinus).unwrap(),
            r#""B-""#
        );
    }

    #[test]
    fn test_seeded_a_plus_downgrade() {
        let stats = LandingStats::from_touchdowns(&[td(-700.0, 1.0)]);
        let seeded = LandingGradeResult::new(Grade::APlus, "Perfect landing");
        let result = classify_from(seeded, &stats, None, None);
        assert_eq!(result, LandingGradeResult::new(Grade::D, "Hard landing"));
    }
}
