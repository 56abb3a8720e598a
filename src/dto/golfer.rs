use chrono::NaiveDate;
use itertools::Itertools;
use rocket_okapi::okapi::schemars;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::api::store::Golfer;
use crate::controller::{HoleRecord, PerformanceStats, RecalculationReport, RoundRecord};

#[derive(Deserialize, JsonSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewRound {
    pub played_on: NaiveDate,
    pub holes: Vec<HoleRecord>,
    #[serde(default)]
    pub course_handicap: Option<f64>,
}

impl NewRound {
    pub fn into_record(self, id: String, golfer_id: String) -> RoundRecord {
        RoundRecord::new(
            id,
            golfer_id,
            self.played_on,
            self.holes,
            self.course_handicap,
        )
    }
}

#[derive(Serialize, JsonSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RoundAdded {
    pub round_id: String,
    pub handicap_index: Option<f64>,
}

#[derive(Serialize, JsonSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HandicapUpdate {
    pub handicap_index: Option<f64>,
}

#[derive(Serialize, JsonSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GolferProfile {
    pub golfer_id: String,
    pub handicap_index: Option<f64>,
    pub rounds: usize,
    pub stats: PerformanceStats,
}

impl GolferProfile {
    pub fn new(golfer_id: String, golfer: &Golfer) -> Self {
        Self {
            golfer_id,
            handicap_index: golfer.handicap_index,
            rounds: golfer.rounds.len(),
            stats: PerformanceStats::from_rounds(&golfer.rounds),
        }
    }
}

#[derive(Serialize, JsonSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FailedGolfer {
    pub golfer_id: String,
    pub reason: String,
}

#[derive(Serialize, JsonSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RecalculationSummary {
    pub updated: usize,
    pub failed: Vec<FailedGolfer>,
}

impl From<&RecalculationReport> for RecalculationSummary {
    fn from(report: &RecalculationReport) -> Self {
        Self {
            updated: report.updated(),
            failed: report
                .failed()
                .map(|(golfer_id, err)| FailedGolfer {
                    golfer_id: golfer_id.to_string(),
                    reason: err.to_string(),
                })
                .collect_vec(),
        }
    }
}
