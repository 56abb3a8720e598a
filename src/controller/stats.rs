use itertools::Itertools;
use rocket_okapi::okapi::schemars;
use schemars::JsonSchema;
use serde::Serialize;

use crate::controller::round::RoundRecord;
use crate::controller::score::{ScoreDistribution, ScoreType};
use crate::controller::stableford::{gross_stableford, net_stableford};

#[derive(Serialize, JsonSchema, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParAverages {
    pub par3: Option<f64>,
    pub par4: Option<f64>,
    pub par5: Option<f64>,
}

/// Statistics over a golfer's complete rounds.
///
/// Gross averages and the best round only look at 18-hole rounds; everything
/// else uses every complete round regardless of length.
#[derive(Serialize, JsonSchema, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceStats {
    pub rounds: usize,
    pub average_gross: Option<f64>,
    pub best_gross: Option<u32>,
    pub average_to_par: Option<f64>,
    pub average_stableford_gross: Option<f64>,
    pub average_stableford_net: Option<f64>,
    pub par_averages: ParAverages,
    pub distribution: ScoreDistribution,
}

fn average<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
    (count > 0).then(|| sum / count as f64)
}

impl PerformanceStats {
    pub fn from_rounds(rounds: &[RoundRecord]) -> Self {
        let complete = rounds
            .iter()
            .filter(|round| round.is_complete())
            .collect_vec();
        let full_rounds = complete
            .iter()
            .filter(|round| round.hole_count() == 18)
            .collect_vec();

        let scored_holes = complete
            .iter()
            .flat_map(|round| round.holes.iter())
            .filter_map(|hole| hole.strokes.map(|strokes| (hole.par, strokes)))
            .collect_vec();

        let mut by_par = scored_holes
            .iter()
            .into_group_map_by(|(par, _)| *par);
        let mut par_average = |par: u8| {
            by_par
                .remove(&par)
                .and_then(|holes| average(holes.into_iter().map(|(_, strokes)| f64::from(*strokes))))
        };

        Self {
            rounds: complete.len(),
            average_gross: average(full_rounds.iter().map(|round| f64::from(round.gross_strokes()))),
            best_gross: full_rounds.iter().map(|round| round.gross_strokes()).min(),
            average_to_par: average(complete.iter().map(|round| {
                let par: u32 = round.holes.iter().map(|hole| u32::from(hole.par)).sum();
                f64::from(round.gross_strokes()) - f64::from(par)
            })),
            average_stableford_gross: average(
                complete
                    .iter()
                    .map(|round| f64::from(gross_stableford(&round.holes))),
            ),
            average_stableford_net: average(complete.iter().map(|round| {
                f64::from(net_stableford(&round.holes, round.course_handicap_strokes()))
            })),
            par_averages: ParAverages {
                par3: par_average(3),
                par4: par_average(4),
                par5: par_average(5),
            },
            distribution: scored_holes
                .iter()
                .map(|(par, strokes)| ScoreType::new(i32::from(*strokes), i32::from(*par)))
                .collect(),
        }
    }
}
