use serde::Deserialize;

/// Configuration extracted from Rocket's figment (`Rocket.toml`, `ROCKET_*`).
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub scoring: ScoringConfig,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    /// Course rating assumed when computing score differentials.
    pub default_course_rating: f64,
    /// Slope rating assumed when computing score differentials.
    pub default_slope_rating: u16,
    /// Only this many of the most recent rounds are considered.
    pub max_rounds_considered: usize,
    pub max_handicap_index: f64,
    /// Rounds needed before an index exists. Values below 3 have no effect.
    pub minimum_rounds: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            default_course_rating: 72.0,
            default_slope_rating: 113,
            max_rounds_considered: 20,
            max_handicap_index: 54.0,
            minimum_rounds: 3,
        }
    }
}

#[cfg(test)]
mod test {
    use rocket::figment::providers::{Format, Toml};
    use rocket::figment::Figment;

    use super::*;

    #[test]
    fn missing_table_uses_defaults() {
        let config: AppConfig = Figment::new().extract().unwrap();
        assert_eq!(config.scoring, ScoringConfig::default());
    }

    #[test]
    fn partial_table_keeps_other_defaults() {
        let config: AppConfig = Figment::new()
            .merge(Toml::string(
                r#"
                [scoring]
                max_rounds_considered = 8
                default_slope_rating = 130
                "#,
            ))
            .extract()
            .unwrap();
        assert_eq!(config.scoring.max_rounds_considered, 8);
        assert_eq!(config.scoring.default_slope_rating, 130);
        assert_eq!(config.scoring.default_course_rating, 72.0);
        assert_eq!(config.scoring.max_handicap_index, 54.0);
    }
}
