mod golfer;
mod score;

pub use golfer::{FailedGolfer, GolferProfile, HandicapUpdate, NewRound, RecalculationSummary, RoundAdded};
pub use score::{HoleBreakdown, ScoreRequest, ScoreResponse};
