mod support;

use serde_json::{Value, json};
use tokio_tungstenite::tungstenite::Message;

const MOVE_PLAYED_LOG: &str =
    "Move played\n3\n----- US Player: -----\nRemaining US Ops: 2\nAvailable options:\na \t Coup ";

fn pushes() -> Vec<Value> {
    vec![
        json!({"type": "ServerRequestGameState", "data": {"response": true}}),
        json!({"type": "ServerMove", "data": {
            "notification": "Move played",
            "side": 1,
            "current_selection": "3",
            "reps": ["US Ops", 2],
            "available_options": {"a": "Coup"},
            "commit": "abc"
        }}),
    ]
}

#[tokio::test]
async fn test_pushed_move_is_reflected_in_game_log() {
    let (game_server_url, mut received_rx) = support::spawn_game_server(pushes()).await;
    let base_url = support::spawn_client(game_server_url).await;
    let client = reqwest::Client::new();

    let log = support::wait_for_log(&client, &base_url, MOVE_PLAYED_LOG).await;
    assert_eq!(log, MOVE_PLAYED_LOG);

    let snapshot: Value = client
        .get(format!("{base_url}/game"))
        .send()
        .await
        .expect("request should succeed")
        .json()
        .await
        .expect("expected json body");
    assert_eq!(snapshot["game_in_progress"], true);
    assert_eq!(snapshot["side_prompt"], "----- US Player: -----");

    // The client asks for the game state as soon as it connects.
    let first = support::next_received(&mut received_rx).await;
    assert_eq!(first, json!({"type": "RequestGameState"}));
}

#[tokio::test]
async fn test_selection_is_sent_to_game_server_with_commit_token() {
    let (game_server_url, mut received_rx) = support::spawn_game_server(pushes()).await;
    let base_url = support::spawn_client(game_server_url).await;
    let client = reqwest::Client::new();

    support::wait_for_log(&client, &base_url, MOVE_PLAYED_LOG).await;
    let _request_game_state = support::next_received(&mut received_rx).await;

    let res = client
        .post(format!("{base_url}/game/select"))
        .json(&json!({"option": "a"}))
        .send()
        .await
        .expect("request should succeed");
    assert_eq!(res.status(), reqwest::StatusCode::ACCEPTED);

    let sent = support::next_received(&mut received_rx).await;
    assert_eq!(
        sent,
        json!({"type": "Select", "data": {"option": "a", "commit": "abc"}})
    );
}

#[tokio::test]
async fn test_garbage_frames_are_skipped_and_close_stops_selections() {
    let mut frames = vec![
        Message::Text("{not json".into()),
        Message::Binary(vec![1, 2, 3].into()),
    ];
    frames.extend(
        pushes()
            .into_iter()
            .map(|push| Message::Text(push.to_string().into())),
    );
    frames.push(Message::Close(None));

    let (game_server_url, _received_rx) = support::spawn_scripted_game_server(frames).await;
    let base_url = support::spawn_client(game_server_url).await;
    let client = reqwest::Client::new();

    let log = support::wait_for_log(&client, &base_url, MOVE_PLAYED_LOG).await;
    assert_eq!(log, MOVE_PLAYED_LOG);

    // Once the socket is closed the last view stays readable but selections are refused.
    let status = support::wait_for_select_status(
        &client,
        &base_url,
        "a",
        reqwest::StatusCode::SERVICE_UNAVAILABLE,
    )
    .await;
    assert_eq!(status, Some(reqwest::StatusCode::SERVICE_UNAVAILABLE));
    let log = support::wait_for_log(&client, &base_url, MOVE_PLAYED_LOG).await;
    assert_eq!(log, MOVE_PLAYED_LOG);
}
