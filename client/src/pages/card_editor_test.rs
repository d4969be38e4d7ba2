use super::*;
use cards::{Card, CardId};

fn card(id: &str) -> Card {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": "Nami",
        "cost_life": 1
    }))
    .expect("card")
}

#[test]
fn heading_before_start_request() {
    assert_eq!(heading(&EditorSession::new()), "No card loaded");
}

#[test]
fn heading_while_start_is_pending() {
    let mut session = EditorSession::new();
    session.begin_start();
    assert_eq!(heading(&session), "Loading…");
}

#[test]
fn heading_shows_current_card() {
    let mut session = EditorSession::new();
    let req = session.begin_start();
    session.finish_load(req.ticket, Ok(card("OP01-016")));
    assert_eq!(heading(&session), "OP01-016");
    assert_eq!(session.current(), CardId::new("OP01-016").as_ref());
}

#[test]
fn heading_while_navigating() {
    let mut session = EditorSession::new();
    let req = session.begin_start();
    session.finish_load(req.ticket, Ok(card("c1")));
    session.begin_navigate(Direction::Next).expect("next");
    assert_eq!(heading(&session), "c1 (loading…)");
}
