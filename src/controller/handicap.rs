use chrono::NaiveDate;
use itertools::Itertools;
use log::{debug, warn};
use rayon::prelude::*;
use rocket_okapi::okapi::schemars;
use schemars::JsonSchema;
use serde::Serialize;

use crate::config::ScoringConfig;
use crate::controller::round::{handicap_history, scores_and_hole_counts, RoundRecord};

const STANDARD_SLOPE: f64 = 113.0;

/// Turns a golfer's round history into a handicap index.
///
/// `scores` and `hole_counts` are parallel, oldest round first. Implementations
/// must be pure: the same history always gives the same index, so a full
/// recalculation can be re-run at any time.
pub trait HandicapIndexCalculator: Send + Sync {
    fn calculate_handicap_index(&self, scores: &[u32], hole_counts: &[u8]) -> Option<f64>;
}

/// World Handicap System style calculator working on gross scores.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldHandicap {
    course_rating: f64,
    slope_rating: f64,
    max_rounds: usize,
    max_index: f64,
    minimum_rounds: usize,
}

impl From<&ScoringConfig> for WorldHandicap {
    fn from(config: &ScoringConfig) -> Self {
        if config.default_slope_rating == 0 {
            warn!("A slope rating of 0 is not usable, using 1 instead");
        }
        Self {
            course_rating: config.default_course_rating,
            slope_rating: f64::from(config.default_slope_rating.max(1)),
            max_rounds: config.max_rounds_considered,
            max_index: config.max_handicap_index,
            minimum_rounds: config.minimum_rounds,
        }
    }
}

impl Default for WorldHandicap {
    fn default() -> Self {
        Self::from(&ScoringConfig::default())
    }
}

impl WorldHandicap {
    /// Score differential of an 18-hole (or 18-hole equivalent) score.
    pub fn differential(&self, adjusted_gross: u32) -> f64 {
        (STANDARD_SLOPE / self.slope_rating) * (f64::from(adjusted_gross) - self.course_rating)
    }

    fn differentials(&self, scores: &[u32], hole_counts: &[u8]) -> Vec<f64> {
        if scores.len() != hole_counts.len() {
            warn!(
                "Got {} scores but {} hole counts, ignoring the unmatched tail",
                scores.len(),
                hole_counts.len()
            );
        }
        scores
            .iter()
            .zip(hole_counts)
            .filter_map(|(score, holes)| match *holes {
                18 => Some(*score),
                9 => Some(score * 2),
                other => {
                    debug!("Skipping a {other}-hole round in the handicap calculation");
                    None
                }
            })
            .map(|adjusted| self.differential(adjusted))
            .collect_vec()
    }
}

/// How many of the lowest differentials count, and the adjustment applied,
/// for a given number of available differentials.
pub const fn differentials_used(available: usize) -> Option<(usize, f64)> {
    match available {
        0..=2 => None,
        3 => Some((1, -2.0)),
        4 => Some((1, -1.0)),
        5 => Some((1, 0.0)),
        6 => Some((2, -1.0)),
        7..=8 => Some((2, 0.0)),
        9..=11 => Some((3, 0.0)),
        12..=14 => Some((4, 0.0)),
        15..=16 => Some((5, 0.0)),
        17..=18 => Some((6, 0.0)),
        19 => Some((7, 0.0)),
        _ => Some((8, 0.0)),
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl HandicapIndexCalculator for WorldHandicap {
    fn calculate_handicap_index(&self, scores: &[u32], hole_counts: &[u8]) -> Option<f64> {
        let differentials = self.differentials(scores, hole_counts);
        let recent = &differentials[differentials.len().saturating_sub(self.max_rounds)..];
        if recent.len() < self.minimum_rounds {
            return None;
        }
        let (used, adjustment) = differentials_used(recent.len())?;

        let lowest = recent
            .iter()
            .copied()
            .sorted_by(f64::total_cmp)
            .take(used)
            .collect_vec();
        let average = lowest.iter().sum::<f64>() / lowest.len() as f64;
        Some(round_to_tenth(average + adjustment).min(self.max_index))
    }
}

/// Playing strokes for a course: index × slope / 113 + (course rating − par),
/// rounded half away from zero.
pub fn course_handicap(handicap_index: f64, slope_rating: u16, course_rating: f64, par: u8) -> i32 {
    (handicap_index * f64::from(slope_rating) / STANDARD_SLOPE + (course_rating - f64::from(par)))
        .round() as i32
}

/// Whole strokes of a stored, possibly fractional, course handicap.
///
/// Truncates, so 10.8 allocates like 10.
pub fn course_handicap_strokes(stored: f64) -> i32 {
    stored.trunc() as i32
}

#[derive(Serialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub round_id: String,
    pub played_on: NaiveDate,
    pub handicap_index: Option<f64>,
}

/// The index as it stood after each complete round, oldest first.
pub fn handicap_trend<C>(calculator: &C, rounds: &[RoundRecord]) -> Vec<TrendPoint>
where
    C: HandicapIndexCalculator + ?Sized,
{
    let history = handicap_history(rounds);
    let (scores, hole_counts) = scores_and_hole_counts(&history);

    (1..=history.len())
        .into_par_iter()
        .map(|taken| {
            let round = history[taken - 1];
            TrendPoint {
                round_id: round.id.clone(),
                played_on: round.played_on,
                handicap_index: calculator
                    .calculate_handicap_index(&scores[..taken], &hole_counts[..taken]),
            }
        })
        .collect()
}
