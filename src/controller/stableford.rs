use rocket_okapi::okapi::schemars;
use schemars::JsonSchema;
use serde::Serialize;

use crate::controller::allocation::handicap_strokes_for_hole;
use crate::controller::hole::HoleRecord;

/// Stableford points for one hole.
///
/// | strokes - par | points |
/// |---|---|
/// | -3 or better | 5 |
/// | -2 | 4 |
/// | -1 | 3 |
/// | 0 | 2 |
/// | +1 | 1 |
/// | +2 or worse | 0 |
pub const fn hole_stableford(strokes: i32, par: i32) -> u8 {
    match strokes.saturating_sub(par) {
        ..=-3 => 5,
        -2 => 4,
        -1 => 3,
        0 => 2,
        1 => 1,
        2.. => 0,
    }
}

pub const fn net_hole_stableford(strokes: i32, par: i32, handicap_strokes: i32) -> u8 {
    hole_stableford(strokes.saturating_sub(handicap_strokes), par)
}

#[derive(Serialize, JsonSchema, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HolePoints {
    pub gross: u8,
    pub net: u8,
}

fn net_points(hole: &HoleRecord, strokes: u8, course_handicap: i32) -> u8 {
    let (ranking, _) = hole.handicap_ranking();
    let handicap_strokes = handicap_strokes_for_hole(ranking, course_handicap);
    net_hole_stableford(
        i32::from(strokes),
        i32::from(hole.par),
        i32::from(handicap_strokes),
    )
}

pub fn gross_stableford(scores: &[HoleRecord]) -> u32 {
    scores
        .iter()
        .filter_map(|hole| {
            hole.strokes
                .map(|strokes| hole_stableford(i32::from(strokes), i32::from(hole.par)))
        })
        .map(u32::from)
        .sum()
}

/// Net Stableford total. Without a positive course handicap this is the gross total.
pub fn net_stableford(scores: &[HoleRecord], course_handicap: Option<i32>) -> u32 {
    let Some(course_handicap) = course_handicap.filter(|handicap| *handicap > 0) else {
        return gross_stableford(scores);
    };
    scores
        .iter()
        .filter_map(|hole| {
            hole.strokes
                .map(|strokes| net_points(hole, strokes, course_handicap))
        })
        .map(u32::from)
        .sum()
}

/// Points per hole, in input order. Unscored holes are zero on both sides.
pub fn stableford_per_hole(scores: &[HoleRecord], course_handicap: Option<i32>) -> Vec<HolePoints> {
    let course_handicap = course_handicap.filter(|handicap| *handicap > 0);
    scores
        .iter()
        .map(|hole| match hole.strokes {
            None => HolePoints::default(),
            Some(strokes) => {
                let gross = hole_stableford(i32::from(strokes), i32::from(hole.par));
                let net = match course_handicap {
                    Some(course_handicap) => net_points(hole, strokes, course_handicap),
                    None => gross,
                };
                HolePoints { gross, net }
            }
        })
        .collect()
}
