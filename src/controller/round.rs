use chrono::NaiveDate;
use itertools::Itertools;

use crate::controller::handicap::course_handicap_strokes;
use crate::controller::hole::HoleRecord;

/// A stored round as handed over by a [`RoundRepository`](crate::controller::RoundRepository).
#[derive(Debug, Clone, PartialEq)]
pub struct RoundRecord {
    pub id: String,
    pub golfer_id: String,
    pub played_on: NaiveDate,
    pub holes: Vec<HoleRecord>,
    /// Course handicap as stored, possibly fractional.
    pub course_handicap: Option<f64>,
}

impl RoundRecord {
    pub fn new(
        id: String,
        golfer_id: String,
        played_on: NaiveDate,
        holes: Vec<HoleRecord>,
        course_handicap: Option<f64>,
    ) -> Self {
        Self {
            id,
            golfer_id,
            played_on,
            holes,
            course_handicap,
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.holes.is_empty() && self.holes.iter().all(HoleRecord::is_scored)
    }

    /// Number of holes, saturating at `u8::MAX`.
    pub fn hole_count(&self) -> u8 {
        u8::try_from(self.holes.len()).unwrap_or(u8::MAX)
    }

    pub fn gross_strokes(&self) -> u32 {
        self.holes
            .iter()
            .filter_map(|hole| hole.strokes)
            .map(u32::from)
            .sum()
    }

    pub fn course_handicap_strokes(&self) -> Option<i32> {
        self.course_handicap.map(course_handicap_strokes)
    }
}

/// Complete rounds, oldest first. Rounds played on the same day keep their stored order.
pub fn handicap_history(rounds: &[RoundRecord]) -> Vec<&RoundRecord> {
    rounds
        .iter()
        .filter(|round| round.is_complete())
        .sorted_by_key(|round| round.played_on)
        .collect_vec()
}

/// Gross scores and hole counts in the shape a handicap calculator takes them.
pub fn scores_and_hole_counts(history: &[&RoundRecord]) -> (Vec<u32>, Vec<u8>) {
    history
        .iter()
        .map(|round| (round.gross_strokes(), round.hole_count()))
        .unzip()
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;

    pub(crate) fn round_on(id: &str, day: u32, holes: usize, strokes: Option<u8>) -> RoundRecord {
        RoundRecord::new(
            id.to_string(),
            "golfer".to_string(),
            NaiveDate::from_ymd_opt(2026, 5, day).unwrap(),
            (1..=holes as u8)
                .map(|number| HoleRecord::new(number, 4, strokes, Some(number)))
                .collect(),
            None,
        )
    }

    #[test]
    fn completeness() {
        assert!(round_on("a", 1, 18, Some(5)).is_complete());
        assert!(!round_on("b", 1, 18, None).is_complete());
        assert!(!round_on("c", 1, 0, Some(5)).is_complete());

        let mut partial = round_on("d", 1, 9, Some(4));
        partial.holes[8].strokes = None;
        assert!(!partial.is_complete());
    }

    #[test]
    fn history_is_sorted_and_complete() {
        let rounds = vec![
            round_on("late", 20, 18, Some(5)),
            round_on("unfinished", 10, 18, None),
            round_on("early", 2, 9, Some(4)),
            round_on("same-day", 20, 18, Some(6)),
        ];
        let history = handicap_history(&rounds);
        let ids = history.iter().map(|round| round.id.as_str()).collect_vec();
        assert_eq!(ids, vec!["early", "late", "same-day"]);

        let (scores, hole_counts) = scores_and_hole_counts(&history);
        assert_eq!(scores, vec![36, 90, 108]);
        assert_eq!(hole_counts, vec![9, 18, 18]);
    }

    #[test]
    fn oversized_round_does_not_wrap_to_nine() {
        let mut round = round_on("long", 1, 0, Some(4));
        round.holes = (0..265)
            .map(|number| HoleRecord::new((number % 18 + 1) as u8, 4, Some(4), None))
            .collect();
        assert_eq!(round.hole_count(), u8::MAX);
        assert_eq!(round_on("short", 1, 9, Some(4)).hole_count(), 9);
    }

    #[test]
    fn stored_course_handicap_is_truncated() {
        let mut round = round_on("a", 1, 18, Some(5));
        round.course_handicap = Some(10.8);
        assert_eq!(round.course_handicap_strokes(), Some(10));
    }
}
