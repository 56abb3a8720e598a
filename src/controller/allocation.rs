use crate::controller::hole::HoleRecord;

pub const HOLES_PER_ROUND: i32 = 18;

/// Handicap strokes a single hole receives for a given course handicap.
///
/// The hardest `course_handicap` holes (by ranking) get one stroke each. Above
/// 18, a second pass gives the hardest `course_handicap - 18` holes another
/// stroke. There is no third pass, so a hole never gets more than two strokes
/// for rankings within 1..=18, even when the course handicap exceeds 36.
pub fn handicap_strokes_for_hole(hole_handicap: i32, course_handicap: i32) -> u8 {
    if course_handicap <= 0 || hole_handicap <= 0 {
        return 0;
    }

    let mut strokes = u8::from(hole_handicap <= course_handicap);
    if course_handicap > HOLES_PER_ROUND {
        let extra_strokes = course_handicap - HOLES_PER_ROUND;
        if hole_handicap <= extra_strokes {
            strokes += 1;
        }
    }
    strokes
}

/// Handicap strokes for every hole of a round, in input order.
///
/// Unscored holes are allocated too, so the result can be shown on an empty
/// scorecard before play.
pub fn allocate_handicap_strokes(holes: &[HoleRecord], course_handicap: Option<i32>) -> Vec<u8> {
    match course_handicap.filter(|handicap| *handicap > 0) {
        Some(course_handicap) => holes
            .iter()
            .map(|hole| handicap_strokes_for_hole(hole.handicap_ranking().0, course_handicap))
            .collect(),
        None => vec![0; holes.len()],
    }
}
