use log::{info, warn};

use crate::api::Error;
use crate::controller::handicap::HandicapIndexCalculator;
use crate::controller::round::{handicap_history, scores_and_hole_counts, RoundRecord};

/// Storage of golfers' rounds and their handicap index.
#[rocket::async_trait]
pub trait RoundRepository: Send + Sync {
    /// Ids of every golfer with at least one recorded round.
    async fn golfers_with_rounds(&self) -> Result<Vec<String>, Error>;

    async fn rounds_for(&self, golfer_id: &str) -> Result<Vec<RoundRecord>, Error>;

    async fn update_handicap(
        &self,
        golfer_id: &str,
        handicap_index: Option<f64>,
    ) -> Result<(), Error>;
}

/// Recomputes one golfer's index from their full history and stores it.
pub async fn recalculate_golfer<R, C>(
    repository: &R,
    calculator: &C,
    golfer_id: &str,
) -> Result<Option<f64>, Error>
where
    R: RoundRepository + ?Sized,
    C: HandicapIndexCalculator + ?Sized,
{
    let rounds = repository.rounds_for(golfer_id).await?;
    let history = handicap_history(&rounds);
    let (scores, hole_counts) = scores_and_hole_counts(&history);

    let handicap_index = calculator.calculate_handicap_index(&scores, &hole_counts);
    repository
        .update_handicap(golfer_id, handicap_index)
        .await?;
    Ok(handicap_index)
}

#[derive(Debug, Clone)]
pub struct GolferOutcome {
    pub golfer_id: String,
    pub result: Result<Option<f64>, Error>,
}

#[derive(Debug, Clone, Default)]
pub struct RecalculationReport {
    pub outcomes: Vec<GolferOutcome>,
}

impl RecalculationReport {
    pub fn updated(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.result.is_ok())
            .count()
    }

    pub fn failed(&self) -> impl Iterator<Item = (&str, &Error)> {
        self.outcomes
            .iter()
            .filter_map(|outcome| match &outcome.result {
                Ok(_) => None,
                Err(err) => Some((outcome.golfer_id.as_str(), err)),
            })
    }

    pub fn is_complete(&self) -> bool {
        self.failed().next().is_none()
    }
}

/// Recomputes the index of every golfer with rounds.
///
/// Only failing to list the golfers aborts. A golfer whose rounds cannot be
/// fetched or whose index cannot be stored is recorded in the report and the
/// batch carries on with the next one.
pub async fn recalculate_all_handicaps<R, C>(
    repository: &R,
    calculator: &C,
) -> Result<RecalculationReport, Error>
where
    R: RoundRepository + ?Sized,
    C: HandicapIndexCalculator + ?Sized,
{
    let golfers = repository.golfers_with_rounds().await?;
    let mut report = RecalculationReport::default();

    for golfer_id in golfers {
        let result = recalculate_golfer(repository, calculator, &golfer_id).await;
        if let Err(err) = &result {
            warn!("Could not recalculate handicap for {}: {}", golfer_id, err);
        }
        report.outcomes.push(GolferOutcome { golfer_id, result });
    }

    info!(
        "Recalculated handicaps: {} updated, {} failed",
        report.updated(),
        report.outcomes.len() - report.updated()
    );
    Ok(report)
}
