pub use allocation::{allocate_handicap_strokes, handicap_strokes_for_hole};
pub use handicap::{
    course_handicap, course_handicap_strokes, handicap_trend, HandicapIndexCalculator,
    TrendPoint, WorldHandicap,
};
pub use hole::{parse_hole_scores, validate_holes, HandicapSource, HoleRecord};
pub use recalculate::{
    recalculate_all_handicaps, recalculate_golfer, GolferOutcome, RecalculationReport,
    RoundRepository,
};
pub use round::RoundRecord;
pub use score::{format_to_par, ScoreDistribution, ScoreType};
pub use stableford::{
    gross_stableford, hole_stableford, net_hole_stableford, net_stableford, stableford_per_hole,
    HolePoints,
};
pub use stats::PerformanceStats;
pub use summary::RoundScoreSummary;

pub mod allocation;
pub mod handicap;
mod hole;
mod recalculate;
pub mod round;
mod score;
pub mod stableford;
mod stats;
mod summary;
