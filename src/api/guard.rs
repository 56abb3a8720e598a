use log::warn;
use rocket::http::Status;
use rocket::response::Responder;
use rocket::{response, Request};
use rocket_okapi::gen::OpenApiGenerator;
use rocket_okapi::okapi::openapi3::{MediaType, Responses};
use rocket_okapi::response::OpenApiResponderInner;

#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    #[error("Invalid hole scores: {0}")]
    InvalidHoleScores(String),
    #[error("A round needs at least one hole")]
    NoHoles,
    #[error("Golfer: `{0}` not found")]
    GolferNotFound(String),
    #[error("Round: `{0}` not found")]
    RoundNotFound(String),
    #[error("Repository failure: {0}")]
    Repository(String),
}

impl Error {
    pub fn status(&self) -> Status {
        use Error::*;
        match self {
            InvalidHoleScores(_) | NoHoles => Status::BadRequest,
            GolferNotFound(_) | RoundNotFound(_) => Status::NotFound,
            Repository(_) => Status::InternalServerError,
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, _req: &'r Request<'_>) -> response::Result<'o> {
        warn!("{}", self);
        Err(self.status())
    }
}

impl OpenApiResponderInner for self::Error {
    fn responses(_gen: &mut OpenApiGenerator) -> rocket_okapi::Result<Responses> {
        use rocket_okapi::{okapi, okapi::openapi3::RefOr};

        Ok(Responses {
            responses: okapi::map! {
                "400".to_owned() => RefOr::Object(error_response(
                    "# 400 Bad Request\nThe scorecard could not be used, e.g. it has no holes."
                )),
                "404".to_owned() => RefOr::Object(error_response(
                    "# 404 Not Found\nThe golfer or round does not exist."
                )),
                "500".to_owned() => RefOr::Object(error_response(
                    "# 500 Internal Server Error\nThe round store failed."
                )),
            },
            ..Default::default()
        })
    }
}

fn error_response(description: &str) -> rocket_okapi::okapi::openapi3::Response {
    use rocket_okapi::okapi;
    okapi::openapi3::Response {
        description: description.to_owned(),
        content: okapi::map! {
            "application/json".to_owned() => MediaType::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn statuses() {
        assert_eq!(Error::NoHoles.status(), Status::BadRequest);
        assert_eq!(
            Error::InvalidHoleScores("bad".into()).status(),
            Status::BadRequest
        );
        assert_eq!(Error::GolferNotFound("ann".into()).status(), Status::NotFound);
        assert_eq!(Error::RoundNotFound("r1".into()).status(), Status::NotFound);
        assert_eq!(
            Error::Repository("down".into()).status(),
            Status::InternalServerError
        );
    }

    #[test]
    fn messages() {
        assert_eq!(
            Error::GolferNotFound("ann".into()).to_string(),
            "Golfer: `ann` not found"
        );
    }
}
