use std::cmp::Ordering;

use rocket_okapi::okapi::schemars;
use schemars::JsonSchema;
use serde::Serialize;

#[derive(Serialize, JsonSchema, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ScoreType {
    Ace,
    Albatross,
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    TripleBogeyOrWorse,
}

impl ScoreType {
    pub const fn new(strokes: i32, par: i32) -> Self {
        if strokes == 1 {
            return Self::Ace;
        }
        match strokes.saturating_sub(par) {
            ..=-3 => Self::Albatross,
            -2 => Self::Eagle,
            -1 => Self::Birdie,
            0 => Self::Par,
            1 => Self::Bogey,
            2 => Self::DoubleBogey,
            3.. => Self::TripleBogeyOrWorse,
        }
    }
}

/// Counts of each score type over a set of holes.
#[derive(Serialize, JsonSchema, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDistribution {
    pub aces: u32,
    pub albatrosses: u32,
    pub eagles: u32,
    pub birdies: u32,
    pub pars: u32,
    pub bogeys: u32,
    pub double_bogeys: u32,
    pub triple_bogeys_or_worse: u32,
}

impl ScoreDistribution {
    pub fn record(&mut self, score: ScoreType) {
        use ScoreType::*;
        let counter = match score {
            Ace => &mut self.aces,
            Albatross => &mut self.albatrosses,
            Eagle => &mut self.eagles,
            Birdie => &mut self.birdies,
            Par => &mut self.pars,
            Bogey => &mut self.bogeys,
            DoubleBogey => &mut self.double_bogeys,
            TripleBogeyOrWorse => &mut self.triple_bogeys_or_worse,
        };
        *counter += 1;
    }

    pub fn total(&self) -> u32 {
        self.aces
            + self.albatrosses
            + self.eagles
            + self.birdies
            + self.pars
            + self.bogeys
            + self.double_bogeys
            + self.triple_bogeys_or_worse
    }
}

impl FromIterator<ScoreType> for ScoreDistribution {
    fn from_iter<I: IntoIterator<Item = ScoreType>>(iter: I) -> Self {
        let mut distribution = Self::default();
        iter.into_iter()
            .for_each(|score| distribution.record(score));
        distribution
    }
}

/// Renders a score relative to par the way scorecards show it: `E`, `+3`, `-2`.
pub fn format_to_par(score: i32) -> String {
    match score.cmp(&0) {
        Ordering::Less => format!("{}", score),
        Ordering::Equal => "E".to_string(),
        Ordering::Greater => format!("+{}", score),
    }
}
