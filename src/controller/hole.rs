use log::debug;
use rocket_okapi::okapi::schemars;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::api::Error;

/// A single hole of a round as it is stored alongside the round.
///
/// `strokes` is `None` until the hole has been played. `stroke_index` is the
/// difficulty ranking of the hole (1 = hardest) and may be missing on older
/// scorecards, in which case the hole number stands in for it.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HoleRecord {
    pub hole_number: u8,
    pub par: u8,
    #[serde(default)]
    pub strokes: Option<u8>,
    #[serde(default)]
    pub stroke_index: Option<u8>,
}

/// Where the ranking used for handicap-stroke allocation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandicapSource {
    StrokeIndex,
    HoleNumber,
}

impl HoleRecord {
    pub fn new(hole_number: u8, par: u8, strokes: Option<u8>, stroke_index: Option<u8>) -> Self {
        Self {
            hole_number,
            par,
            strokes,
            stroke_index,
        }
    }

    pub fn is_scored(&self) -> bool {
        self.strokes.is_some()
    }

    pub fn strokes_to_par(&self) -> Option<i32> {
        self.strokes
            .map(|strokes| i32::from(strokes) - i32::from(self.par))
    }

    /// Ranking used to decide whether this hole receives handicap strokes.
    ///
    /// Falls back to the hole number when no stroke index was recorded. The
    /// fallback changes which holes get strokes, so it is reported instead of
    /// applied silently.
    pub fn handicap_ranking(&self) -> (i32, HandicapSource) {
        match self.stroke_index {
            Some(index) => (i32::from(index), HandicapSource::StrokeIndex),
            None => {
                debug!(
                    "Hole {} has no stroke index, falling back to the hole number",
                    self.hole_number
                );
                (i32::from(self.hole_number), HandicapSource::HoleNumber)
            }
        }
    }
}

/// Checks that every par and every recorded stroke count is at least 1.
pub fn validate_holes(holes: &[HoleRecord]) -> Result<(), Error> {
    for hole in holes {
        if hole.par == 0 {
            return Err(Error::InvalidHoleScores(format!(
                "hole {} has a par of 0",
                hole.hole_number
            )));
        }
        if hole.strokes == Some(0) {
            return Err(Error::InvalidHoleScores(format!(
                "hole {} has 0 strokes",
                hole.hole_number
            )));
        }
    }
    Ok(())
}

/// Parses the JSON-encoded hole array stored with a round.
///
/// Anything that does not parse or validate is rejected as a whole, the
/// scoring functions never see partial data.
pub fn parse_hole_scores(json: &str) -> Result<Vec<HoleRecord>, Error> {
    let holes: Vec<HoleRecord> =
        serde_json::from_str(json).map_err(|err| Error::InvalidHoleScores(err.to_string()))?;
    validate_holes(&holes)?;
    Ok(holes)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_stored_scorecard() {
        let json = r#"[
            {"holeNumber": 1, "par": 4, "strokes": 5, "strokeIndex": 7},
            {"holeNumber": 2, "par": 3, "strokes": null},
            {"holeNumber": 3, "par": 5}
        ]"#;
        let holes = parse_hole_scores(json).unwrap();

        assert_eq!(holes.len(), 3);
        assert_eq!(holes[0], HoleRecord::new(1, 4, Some(5), Some(7)));
        assert_eq!(holes[1], HoleRecord::new(2, 3, None, None));
        assert!(!holes[2].is_scored());
    }

    #[test]
    fn rejects_malformed_scorecard() {
        let err = parse_hole_scores(r#"[{"holeNumber": 1, "par": 4, "strokes": "five"}]"#)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidHoleScores(_)));

        let err = parse_hole_scores("not json").unwrap_err();
        assert!(matches!(err, Error::InvalidHoleScores(_)));
    }

    #[test]
    fn rejects_zero_strokes_and_zero_par() {
        let err = parse_hole_scores(r#"[{"holeNumber": 1, "par": 4, "strokes": 0}]"#)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidHoleScores(_)));

        let err = parse_hole_scores(r#"[{"holeNumber": 2, "par": 0, "strokes": 3}]"#)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidHoleScores(_)));

        assert!(validate_holes(&[
            HoleRecord::new(1, 4, Some(1), None),
            HoleRecord::new(2, 3, None, None),
        ])
        .is_ok());
    }

    #[test]
    fn ranking_prefers_stroke_index() {
        let hole = HoleRecord::new(4, 4, Some(4), Some(11));
        assert_eq!(hole.handicap_ranking(), (11, HandicapSource::StrokeIndex));
    }

    #[test]
    fn ranking_falls_back_to_hole_number() {
        let hole = HoleRecord::new(4, 4, Some(4), None);
        assert_eq!(hole.handicap_ranking(), (4, HandicapSource::HoleNumber));
    }

    #[test]
    fn strokes_to_par() {
        assert_eq!(HoleRecord::new(1, 5, Some(3), None).strokes_to_par(), Some(-2));
        assert_eq!(HoleRecord::new(1, 5, None, None).strokes_to_par(), None);
    }
}
