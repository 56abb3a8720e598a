use itertools::izip;
use rocket_okapi::okapi::schemars;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::controller::{
    allocate_handicap_strokes, course_handicap_strokes, format_to_par, stableford_per_hole,
    HoleRecord, RoundScoreSummary, ScoreType,
};

#[derive(Deserialize, JsonSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub holes: Vec<HoleRecord>,
    /// Course handicap as stored; fractions are truncated.
    #[serde(default)]
    pub course_handicap: Option<f64>,
}

#[derive(Serialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoleBreakdown {
    pub hole_number: u8,
    pub gross_points: u8,
    pub net_points: u8,
    pub handicap_strokes: u8,
    pub score_type: Option<ScoreType>,
}

#[derive(Serialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub summary: RoundScoreSummary,
    pub to_par: String,
    pub holes: Vec<HoleBreakdown>,
}

impl ScoreResponse {
    pub fn new(holes: &[HoleRecord], course_handicap: Option<f64>) -> Self {
        let course_handicap = course_handicap.map(course_handicap_strokes);
        let summary = RoundScoreSummary::new(holes, course_handicap);
        let breakdown = izip!(
            holes,
            stableford_per_hole(holes, course_handicap),
            allocate_handicap_strokes(holes, course_handicap)
        )
        .map(|(hole, points, handicap_strokes)| HoleBreakdown {
            hole_number: hole.hole_number,
            gross_points: points.gross,
            net_points: points.net,
            handicap_strokes,
            score_type: hole
                .strokes
                .map(|strokes| ScoreType::new(i32::from(strokes), i32::from(hole.par))),
        })
        .collect();

        Self {
            to_par: format_to_par(summary.to_par_gross),
            summary,
            holes: breakdown,
        }
    }
}

impl From<ScoreRequest> for ScoreResponse {
    fn from(request: ScoreRequest) -> Self {
        Self::new(&request.holes, request.course_handicap)
    }
}
