use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::NaiveDate;
use itertools::Itertools;
use tokio::sync::Mutex;

use crate::api::Error;
use crate::controller::{parse_hole_scores, RoundRecord, RoundRepository};

/// A round as kept in the store, with its holes JSON-encoded.
#[derive(Debug, Clone)]
struct StoredRound {
    id: String,
    played_on: NaiveDate,
    hole_scores: String,
    course_handicap: Option<f64>,
}

impl StoredRound {
    fn encode(round: &RoundRecord) -> Result<Self, Error> {
        Ok(Self {
            id: round.id.clone(),
            played_on: round.played_on,
            hole_scores: serde_json::to_string(&round.holes)
                .map_err(|err| Error::Repository(err.to_string()))?,
            course_handicap: round.course_handicap,
        })
    }

    fn decode(&self, golfer_id: &str) -> Result<RoundRecord, Error> {
        Ok(RoundRecord::new(
            self.id.clone(),
            golfer_id.to_owned(),
            self.played_on,
            parse_hole_scores(&self.hole_scores)?,
            self.course_handicap,
        ))
    }
}

#[derive(Debug, Default)]
struct StoredGolfer {
    rounds: Vec<StoredRound>,
    handicap_index: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct Golfer {
    pub rounds: Vec<RoundRecord>,
    pub handicap_index: Option<f64>,
}

/// Round storage kept in process memory, shared through Rocket state.
#[derive(Debug, Default)]
pub struct MemoryRounds {
    golfers: Mutex<HashMap<String, StoredGolfer>>,
    next_round: AtomicU64,
}

impl MemoryRounds {
    pub fn next_round_id(&self) -> String {
        format!("round-{}", self.next_round.fetch_add(1, Ordering::Relaxed) + 1)
    }

    pub async fn add_round(&self, round: RoundRecord) -> Result<(), Error> {
        let stored = StoredRound::encode(&round)?;
        self.golfers
            .lock()
            .await
            .entry(round.golfer_id)
            .or_default()
            .rounds
            .push(stored);
        Ok(())
    }

    pub async fn remove_round(&self, golfer_id: &str, round_id: &str) -> Result<(), Error> {
        let mut golfers = self.golfers.lock().await;
        let golfer = golfers
            .get_mut(golfer_id)
            .ok_or_else(|| Error::GolferNotFound(golfer_id.to_string()))?;
        let position = golfer
            .rounds
            .iter()
            .position(|round| round.id == round_id)
            .ok_or_else(|| Error::RoundNotFound(round_id.to_string()))?;
        golfer.rounds.remove(position);
        Ok(())
    }

    pub async fn golfer(&self, golfer_id: &str) -> Result<Golfer, Error> {
        let golfers = self.golfers.lock().await;
        let golfer = golfers
            .get(golfer_id)
            .ok_or_else(|| Error::GolferNotFound(golfer_id.to_string()))?;
        Ok(Golfer {
            rounds: golfer
                .rounds
                .iter()
                .map(|round| round.decode(golfer_id))
                .collect::<Result<Vec<_>, _>>()?,
            handicap_index: golfer.handicap_index,
        })
    }

    #[cfg(test)]
    pub(crate) async fn overwrite_hole_scores(&self, golfer_id: &str, hole_scores: &str) {
        if let Some(golfer) = self.golfers.lock().await.get_mut(golfer_id) {
            golfer
                .rounds
                .iter_mut()
                .for_each(|round| round.hole_scores = hole_scores.to_owned());
        }
    }
}

#[rocket::async_trait]
impl RoundRepository for MemoryRounds {
    async fn golfers_with_rounds(&self) -> Result<Vec<String>, Error> {
        Ok(self
            .golfers
            .lock()
            .await
            .iter()
            .filter(|(_, golfer)| !golfer.rounds.is_empty())
            .map(|(golfer_id, _)| golfer_id.clone())
            .sorted()
            .collect_vec())
    }

    async fn rounds_for(&self, golfer_id: &str) -> Result<Vec<RoundRecord>, Error> {
        self.golfer(golfer_id).await.map(|golfer| golfer.rounds)
    }

    async fn update_handicap(
        &self,
        golfer_id: &str,
        handicap_index: Option<f64>,
    ) -> Result<(), Error> {
        let mut golfers = self.golfers.lock().await;
        let golfer = golfers
            .get_mut(golfer_id)
            .ok_or_else(|| Error::GolferNotFound(golfer_id.to_string()))?;
        golfer.handicap_index = handicap_index;
        Ok(())
    }
}
