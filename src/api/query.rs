use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;

use crate::api::store::MemoryRounds;
use crate::api::Error;
use crate::config::AppConfig;
use crate::controller::{course_handicap, handicap_trend, TrendPoint, WorldHandicap};
use crate::dto;

/// # GET golfer profile
/// Handicap index, number of rounds and performance statistics.
#[openapi(tag = "Golfers")]
#[get("/golfers/<golfer_id>")]
pub async fn golfer_profile(
    golfer_id: &str,
    rounds: &State<MemoryRounds>,
) -> Result<Json<dto::GolferProfile>, Error> {
    let golfer = rounds.golfer(golfer_id).await?;
    Ok(Json(dto::GolferProfile::new(golfer_id.to_owned(), &golfer)))
}

/// # GET handicap trend
/// The handicap index after each complete round, oldest first.
#[openapi(tag = "Golfers")]
#[get("/golfers/<golfer_id>/trend")]
pub async fn golfer_trend(
    golfer_id: &str,
    rounds: &State<MemoryRounds>,
    config: &State<AppConfig>,
) -> Result<Json<Vec<TrendPoint>>, Error> {
    let golfer = rounds.golfer(golfer_id).await?;
    let calculator = WorldHandicap::from(&config.scoring);
    Ok(Json(handicap_trend(&calculator, &golfer.rounds)))
}

/// # GET course handicap
/// Strokes the golfer receives on a course with the given slope, rating and par.
/// `null` while the golfer has no handicap index.
#[openapi(tag = "Golfers")]
#[get("/golfers/<golfer_id>/course-handicap?<slope>&<rating>&<par>")]
pub async fn golfer_course_handicap(
    golfer_id: &str,
    slope: u16,
    rating: f64,
    par: u8,
    rounds: &State<MemoryRounds>,
) -> Result<Json<Option<i32>>, Error> {
    let golfer = rounds.golfer(golfer_id).await?;
    Ok(Json(
        golfer
            .handicap_index
            .map(|index| course_handicap(index, slope, rating, par)),
    ))
}
