use log::info;
use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;

use crate::api::store::MemoryRounds;
use crate::api::Error;
use crate::config::AppConfig;
use crate::controller::{
    recalculate_all_handicaps, recalculate_golfer, validate_holes, WorldHandicap,
};
use crate::dto;

/// # Score a round
/// Stableford points, handicap strokes and totals for a scorecard. Nothing is stored.
#[openapi(tag = "Scoring")]
#[post("/score", data = "<request>")]
pub async fn score_round(request: Json<dto::ScoreRequest>) -> Result<Json<dto::ScoreResponse>, Error> {
    let request = request.into_inner();
    if request.holes.is_empty() {
        return Err(Error::NoHoles);
    }
    validate_holes(&request.holes)?;
    Ok(Json(request.into()))
}

/// # Add a round
/// Stores the round and recalculates the golfer's handicap index.
#[openapi(tag = "Rounds")]
#[post("/golfers/<golfer_id>/rounds", data = "<round>")]
pub async fn add_round(
    golfer_id: &str,
    round: Json<dto::NewRound>,
    rounds: &State<MemoryRounds>,
    config: &State<AppConfig>,
) -> Result<Json<dto::RoundAdded>, Error> {
    let round = round.into_inner();
    if round.holes.is_empty() {
        return Err(Error::NoHoles);
    }
    validate_holes(&round.holes)?;
    let round = round.into_record(rounds.next_round_id(), golfer_id.to_owned());
    let round_id = round.id.clone();
    rounds.add_round(round).await?;
    info!("Stored {} for {}", round_id, golfer_id);

    let calculator = WorldHandicap::from(&config.scoring);
    let handicap_index = recalculate_golfer(rounds.inner(), &calculator, golfer_id).await?;
    Ok(Json(dto::RoundAdded {
        round_id,
        handicap_index,
    }))
}

/// # Delete a round
/// Removes the round and recalculates the golfer's handicap index.
#[openapi(tag = "Rounds")]
#[delete("/golfers/<golfer_id>/rounds/<round_id>")]
pub async fn delete_round(
    golfer_id: &str,
    round_id: &str,
    rounds: &State<MemoryRounds>,
    config: &State<AppConfig>,
) -> Result<Json<dto::HandicapUpdate>, Error> {
    rounds.remove_round(golfer_id, round_id).await?;
    let calculator = WorldHandicap::from(&config.scoring);
    let handicap_index = recalculate_golfer(rounds.inner(), &calculator, golfer_id).await?;
    Ok(Json(dto::HandicapUpdate { handicap_index }))
}

/// # Recalculate all handicaps
/// Recomputes every golfer's index. Golfers that fail are listed, the rest are updated.
#[openapi(tag = "Administration")]
#[post("/handicaps/recalculate")]
pub async fn recalculate_all(
    rounds: &State<MemoryRounds>,
    config: &State<AppConfig>,
) -> Result<Json<dto::RecalculationSummary>, Error> {
    let calculator = WorldHandicap::from(&config.scoring);
    let report = recalculate_all_handicaps(rounds.inner(), &calculator).await?;
    Ok(Json((&report).into()))
}
