mod guard;
mod mutation;
mod query;
pub mod store;

use rocket::fairing::AdHoc;
use rocket::{Build, Rocket};
use rocket_okapi::openapi_get_routes;
use rocket_okapi::rapidoc::{make_rapidoc, GeneralConfig, RapiDocConfig};
use rocket_okapi::settings::UrlObject;
use rocket_okapi::swagger_ui::{make_swagger_ui, SwaggerUIConfig};

use crate::config::AppConfig;
pub use guard::Error;
use mutation::*;
use query::*;
use store::MemoryRounds;

pub fn launch() -> Rocket<Build> {
    rocket::build()
        .attach(AdHoc::config::<AppConfig>())
        .manage(MemoryRounds::default())
        .mount(
            "/",
            openapi_get_routes![
                score_round,
                add_round,
                delete_round,
                recalculate_all,
                golfer_profile,
                golfer_trend,
                golfer_course_handicap,
            ],
        )
        .mount(
            "/swagger",
            make_swagger_ui(&SwaggerUIConfig {
                url: "../openapi.json".to_owned(),
                ..Default::default()
            }),
        )
        .mount(
            "/",
            make_rapidoc(&RapiDocConfig {
                general: GeneralConfig {
                    spec_urls: vec![UrlObject::new("General", "./openapi.json")],
                    ..Default::default()
                },
                ..Default::default()
            }),
        )
}

#[cfg(test)]
mod test {
    use rocket::http::Status;
    use rocket::local::asynchronous::Client;
    use serde_json::{json, Value};

    use super::*;

    async fn client() -> Client {
        Client::tracked(launch()).await.unwrap()
    }

    fn scorecard(strokes: u8) -> Value {
        let holes = (1..=18)
            .map(|number| json!({"holeNumber": number, "par": 4, "strokes": strokes, "strokeIndex": number}))
            .collect::<Vec<_>>();
        Value::Array(holes)
    }

    async fn post_round(client: &Client, golfer: &str, day: u32, strokes: u8) -> Value {
        let response = client
            .post(format!("/golfers/{golfer}/rounds"))
            .json(&json!({
                "playedOn": format!("2026-06-{day:02}"),
                "holes": scorecard(strokes),
                "courseHandicap": 10.0,
            }))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);
        response.into_json::<Value>().await.unwrap()
    }

    #[tokio::test]
    async fn scores_a_round() {
        let client = client().await;
        let response = client
            .post("/score")
            .json(&json!({
                "holes": [
                    {"holeNumber": 1, "par": 4, "strokes": 5, "strokeIndex": 1},
                    {"holeNumber": 2, "par": 3, "strokes": null, "strokeIndex": 2},
                    {"holeNumber": 3, "par": 5, "strokes": 4}
                ],
                "courseHandicap": 1.9
            }))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);

        let body = response.into_json::<Value>().await.unwrap();
        assert_eq!(body["toPar"], "E");
        assert_eq!(body["summary"]["stablefordGross"], 4);
        assert_eq!(body["summary"]["stablefordNet"], 5);
        assert_eq!(body["summary"]["netStrokes"], 8);
        assert_eq!(body["holes"].as_array().unwrap().len(), 3);
        assert_eq!(body["holes"][1]["netPoints"], 0);
        assert_eq!(body["holes"][2]["scoreType"], "birdie");
    }

    #[tokio::test]
    async fn empty_scorecard_is_rejected() {
        let client = client().await;
        let response = client
            .post("/score")
            .json(&json!({"holes": []}))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::BadRequest);
    }

    #[tokio::test]
    async fn zero_strokes_are_rejected() {
        let client = client().await;
        let response = client
            .post("/score")
            .json(&json!({
                "holes": [{"holeNumber": 1, "par": 4, "strokes": 0, "strokeIndex": 1}]
            }))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::BadRequest);

        let response = client
            .post("/golfers/ann/rounds")
            .json(&json!({"playedOn": "2026-06-01", "holes": scorecard(0)}))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::BadRequest);

        let response = client.get("/golfers/ann").dispatch().await;
        assert_eq!(response.status(), Status::NotFound);
    }

    #[tokio::test]
    async fn rounds_drive_the_handicap() {
        let client = client().await;
        let first = post_round(&client, "ann", 1, 5).await;
        assert_eq!(first["handicapIndex"], Value::Null);
        post_round(&client, "ann", 2, 5).await;
        let third = post_round(&client, "ann", 3, 5).await;
        assert_eq!(third["handicapIndex"], 16.0);

        let profile = client
            .get("/golfers/ann")
            .dispatch()
            .await
            .into_json::<Value>()
            .await
            .unwrap();
        assert_eq!(profile["rounds"], 3);
        assert_eq!(profile["stats"]["bestGross"], 90);

        let trend = client
            .get("/golfers/ann/trend")
            .dispatch()
            .await
            .into_json::<Value>()
            .await
            .unwrap();
        assert_eq!(trend.as_array().unwrap().len(), 3);
        assert_eq!(trend[2]["handicapIndex"], 16.0);

        let round_id = third["roundId"].as_str().unwrap().to_owned();
        let response = client
            .delete(format!("/golfers/ann/rounds/{round_id}"))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);
        let body = response.into_json::<Value>().await.unwrap();
        assert_eq!(body["handicapIndex"], Value::Null);
    }

    #[tokio::test]
    async fn unknown_golfer_is_not_found() {
        let client = client().await;
        let response = client.get("/golfers/nobody").dispatch().await;
        assert_eq!(response.status(), Status::NotFound);

        let response = client.delete("/golfers/nobody/rounds/round-1").dispatch().await;
        assert_eq!(response.status(), Status::NotFound);
    }

    #[tokio::test]
    async fn bulk_recalculation_reports_counts() {
        let client = client().await;
        for day in 1..=3 {
            post_round(&client, "ann", day, 5).await;
            post_round(&client, "bob", day, 4).await;
        }
        let response = client.post("/handicaps/recalculate").dispatch().await;
        assert_eq!(response.status(), Status::Ok);

        let body = response.into_json::<Value>().await.unwrap();
        assert_eq!(body["updated"], 2);
        assert_eq!(body["failed"].as_array().unwrap().len(), 0);

        let bob = client
            .get("/golfers/bob")
            .dispatch()
            .await
            .into_json::<Value>()
            .await
            .unwrap();
        assert_eq!(bob["handicapIndex"], -2.0);
    }

    #[tokio::test]
    async fn course_handicap_follows_the_index() {
        let client = client().await;
        for day in 1..=3 {
            post_round(&client, "ann", day, 5).await;
        }
        let strokes = client
            .get("/golfers/ann/course-handicap?slope=125&rating=71.3&par=72")
            .dispatch()
            .await
            .into_json::<Value>()
            .await
            .unwrap();
        // 16.0 * 125 / 113 - 0.7 = 17.0
        assert_eq!(strokes, 17);
    }

    #[tokio::test]
    async fn serves_openapi_document() {
        let client = client().await;
        let response = client.get("/openapi.json").dispatch().await;
        assert_eq!(response.status(), Status::Ok);
    }
}
