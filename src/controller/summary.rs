use itertools::Itertools;
use rocket_okapi::okapi::schemars;
use schemars::JsonSchema;
use serde::Serialize;

use crate::controller::allocation::allocate_handicap_strokes;
use crate::controller::hole::HoleRecord;
use crate::controller::stableford::{gross_stableford, net_stableford};

/// Totals for a round, derived on demand and never stored.
///
/// Par and handicap strokes only count on holes that have been scored, so a
/// round in progress reports its standing so far.
#[derive(Serialize, JsonSchema, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoundScoreSummary {
    pub holes_played: usize,
    pub gross_strokes: u32,
    pub to_par_gross: i32,
    pub stableford_gross: u32,
    pub stableford_net: u32,
    pub net_strokes: i32,
    pub to_par_net: i32,
}

impl RoundScoreSummary {
    pub fn new(holes: &[HoleRecord], course_handicap: Option<i32>) -> Self {
        let allocation = allocate_handicap_strokes(holes, course_handicap);
        let scored = holes
            .iter()
            .zip(allocation)
            .filter_map(|(hole, handicap_strokes)| {
                hole.strokes
                    .map(|strokes| (hole, strokes, handicap_strokes))
            })
            .collect_vec();

        let gross_strokes: u32 = scored
            .iter()
            .map(|(_, strokes, _)| u32::from(*strokes))
            .sum();
        let par: i32 = scored.iter().map(|(hole, _, _)| i32::from(hole.par)).sum();
        let handicap_strokes: i32 = scored
            .iter()
            .map(|(_, _, handicap_strokes)| i32::from(*handicap_strokes))
            .sum();
        let net_strokes = gross_strokes as i32 - handicap_strokes;

        Self {
            holes_played: scored.len(),
            gross_strokes,
            to_par_gross: gross_strokes as i32 - par,
            stableford_gross: gross_stableford(holes),
            stableford_net: net_stableford(holes, course_handicap),
            net_strokes,
            to_par_net: net_strokes - par,
        }
    }
}
