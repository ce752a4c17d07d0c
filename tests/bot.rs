//! Command routing and membership checks, end to end against a stub Bot API.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::Path;
use axum::routing::post;
use axum::{Json, Router};
use bjbot::{
    Bot, Face, GameOptions, GameStateStore, LocalShoe, Locale, Phase, RoundError, Table,
    TelegramApi, UserId,
};
use serde_json::{Value, json};
use url::Url;

const GROUP: i64 = -100;
const LEFT: i64 = 10;
const MEMBER: i64 = 20;
const UNKNOWN: i64 = 30;

type Calls = Arc<Mutex<Vec<(String, Value)>>>;

fn message(update_id: i64, from: i64, text: &str) -> Value {
    json!({
        "update_id": update_id,
        "message": {
            "message_id": update_id,
            "date": 0,
            "from": {"id": from, "is_bot": false, "first_name": "P"},
            "chat": {"id": GROUP, "type": "group"},
            "text": text,
        }
    })
}

/// Hands out `batch` on the first poll and nothing afterwards.
async fn serve_bot_api(calls: Calls, batch: Vec<Value>) -> Url {
    let batch = Arc::new(Mutex::new(Some(batch)));
    let router = Router::new().route(
        "/botTESTTOKEN/:method",
        post(move |Path(method): Path<String>, Json(body): Json<Value>| async move {
            calls.lock().unwrap().push((method.clone(), body.clone()));
            let result = match method.as_str() {
                "getMe" => json!({"id": 1, "is_bot": true, "first_name": "Jack", "username": "jackbot"}),
                "getUpdates" => {
                    let next = batch.lock().unwrap().take();
                    match next {
                        Some(updates) => Value::Array(updates),
                        None => {
                            tokio::time::sleep(Duration::from_millis(50)).await;
                            json!([])
                        }
                    }
                }
                "getChatMember" => match body["user_id"].as_i64() {
                    Some(LEFT) => json!({"status": "left"}),
                    Some(MEMBER) => json!({"status": "member"}),
                    _ => {
                        return Json(json!({"ok": false, "error_code": 400,
                                           "description": "Bad Request: user not found"}));
                    }
                },
                _ => json!({"message_id": 9, "date": 0, "chat": {"id": GROUP, "type": "group"}}),
            };
            Json(json!({"ok": true, "result": result}))
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Url::parse(&format!("http://{addr}")).unwrap()
}

fn calls_to(calls: &Calls, method: &str) -> Vec<Value> {
    calls
        .lock()
        .unwrap()
        .iter()
        .filter(|(name, _)| name == method)
        .map(|(_, body)| body.clone())
        .collect()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn routes_commands_and_gates_hit_and_stand() {
    let calls = Calls::default();
    let url = serve_bot_api(
        Arc::clone(&calls),
        vec![
            message(1, LEFT, "/hit"),
            message(2, MEMBER, "/hit"),
            message(3, UNKNOWN, "/stand"),
            message(4, LEFT, "/newgame"),
            message(5, MEMBER, "/hit@OtherBot"),
            message(6, MEMBER, "/start@JackBot"),
        ],
    )
    .await;

    let api = TelegramApi::new(&url, "TESTTOKEN", Duration::from_secs(5)).unwrap();
    let table = Arc::new(Table::new(
        GameStateStore::new(),
        LocalShoe::new(1),
        api.clone(),
        GameOptions::default(),
        Locale::En,
    ));
    table
        .source()
        .stack_faces(&[Face::Ten, Face::Seven, Face::Nine, Face::Eight]);

    let replies_sent = {
        let calls = Arc::clone(&calls);
        async move {
            while calls_to(&calls, "sendMessage").len() < 5 {
                tokio::time::sleep(Duration::from_millis(20)).await;
            }
            // Anything else would arrive by now.
            tokio::time::sleep(Duration::from_millis(200)).await;
        }
    };
    let bot = Bot::new(api, Arc::clone(&table), 0);
    tokio::time::timeout(Duration::from_secs(10), bot.run(replies_sent))
        .await
        .unwrap()
        .unwrap();

    let locale = Locale::En;
    let mut texts: Vec<String> = calls_to(&calls, "sendMessage")
        .iter()
        .map(|body| {
            assert_eq!(body["chat_id"], GROUP);
            body["text"].as_str().unwrap().to_owned()
        })
        .collect();
    texts.sort();
    let mut expected = vec![
        locale.unauthorized().to_owned(),
        locale.error(&RoundError::NoActiveSession).to_owned(),
        locale.membership_unknown().to_owned(),
        locale.new_game(17, Some(Face::Nine)),
        locale.welcome().to_owned(),
    ];
    expected.sort();
    assert_eq!(texts, expected);
    assert_eq!(calls_to(&calls, "sendPhoto").len(), 2);

    let checked: Vec<i64> = {
        let mut users: Vec<i64> = calls_to(&calls, "getChatMember")
            .iter()
            .map(|body| body["user_id"].as_i64().unwrap())
            .collect();
        users.sort_unstable();
        users
    };
    assert_eq!(checked, [LEFT, MEMBER, UNKNOWN]);

    // The rejected hit never reached the table: the hand holds only the deal.
    let session = table.session(UserId(LEFT)).unwrap();
    assert_eq!(session.player.len(), 2);
    assert_eq!(session.phase, Phase::PlayerTurn);
    assert!(table.session(UserId(MEMBER)).is_none());
    assert!(table.session(UserId(UNKNOWN)).is_none());
    assert_eq!(table.store().len(), 1);
}
