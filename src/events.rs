//! Event listings: a dataset shipped as a JSON file plus its handlers.
//!
//! Unlike the product catalog, the event data lives outside the source in
//! `data/events.json`. The file is embedded at compile time and parsed once
//! on first use; after that every request reads the same immutable slice.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::request::Request;
use crate::response::{IntoResponse, Json, Response};

#[derive(Debug, Deserialize, Serialize)]
pub struct Event {
    pub id: u32,
    pub name: String,
    pub date: String,
    pub venue: String,
}

static EVENTS: OnceLock<Vec<Event>> = OnceLock::new();

fn events() -> &'static [Event] {
    EVENTS.get_or_init(|| {
        serde_json::from_str(include_str!("../data/events.json"))
            .expect("data/events.json is malformed")
    })
}

#[derive(Serialize)]
struct Fail {
    status: &'static str,
    message: &'static str,
}

fn fail(message: &'static str) -> Response {
    Json(Fail { status: "fail", message }).into_response()
}

/// `GET /events` — every event as a JSON array.
pub async fn list(_req: Request) -> Response {
    Json(events()).into_response()
}

/// `GET /events/:eventId`
///
/// An unknown or non-numeric id answers with the fail payload and nothing
/// else.
pub async fn detail(req: Request) -> Response {
    let event = req
        .param("eventId")
        .and_then(|v| v.parse::<u32>().ok())
        .and_then(|id| events().iter().find(|e| e.id == id));

    match event {
        Some(e) => Json(e).into_response(),
        None => fail("no such event"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::Router;

    fn app() -> Router {
        Router::new()
            .on("/events", list)
            .on("/events/:eventId", detail)
    }

    #[tokio::test]
    async fn list_serves_the_dataset() {
        let res = app().route("GET", "/events").await;
        assert_eq!(res.header("content-type"), Some("application/json"));

        let items: serde_json::Value = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(items.as_array().map(Vec::len), Some(events().len()));
    }

    #[tokio::test]
    async fn detail_finds_an_event_by_id() {
        let res = app().route("GET", "/events/1").await;
        let event: serde_json::Value = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(event["id"], 1);
        assert_eq!(event["name"], events()[0].name.as_str());
    }

    #[tokio::test]
    async fn unknown_event_gets_only_the_fail_payload() {
        let res = app().route("GET", "/events/999").await;
        assert_eq!(res.status_code(), http::StatusCode::OK);
        assert_eq!(res.header("content-type"), Some("application/json"));
        assert_eq!(res.body(), br#"{"status":"fail","message":"no such event"}"#);
    }
}
