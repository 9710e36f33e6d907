use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rbatis::RBatis;
use rbs::to_value;
use serde_json::{json, Value};
use tracing::{info, warn};
use tweetkit::{
    tweet::{
        CreateTweetData, CreateTweetRequest, CreateTweetResponse, DeleteTweetData,
        DeleteTweetResponse,
    },
    Error,
};

use crate::id::next_id;

pub const CREATE_TABLE: &str =
    "create table if not exists tweets (id text primary key, text text not null, body text not null);";

fn failure(status: StatusCode, error: Error) -> (StatusCode, Json<Value>) {
    (status, Json(json!(error)))
}

fn internal(err: impl std::fmt::Display) -> (StatusCode, Json<Value>) {
    warn!("storage failure: {err}");

    failure(
        StatusCode::INTERNAL_SERVER_ERROR,
        Error {
            status: "INTERNAL".to_string(),
            message: "Tweet storage is unavailable!".to_string(),
            details: None,
        },
    )
}

pub async fn create_tweet(
    State(db): State<RBatis>,
    Json(req): Json<CreateTweetRequest>,
) -> impl IntoResponse {
    if let Err(err) = req.validate() {
        return failure(StatusCode::BAD_REQUEST, err.into());
    }

    let body = match serde_json::to_string(&req) {
        Ok(body) => body,
        Err(err) => return internal(err),
    };

    let tweet = CreateTweetData {
        id: next_id(),
        text: req.text_or_empty().to_string(),
    };

    if let Err(err) = db
        .exec(
            "insert into tweets (id, text, body) values (?1, ?2, ?3);",
            vec![to_value!(&tweet.id), to_value!(&tweet.text), to_value!(body)],
        )
        .await
    {
        return internal(err);
    }

    info!(id = %tweet.id, "created tweet");

    (
        StatusCode::CREATED,
        Json(json!(CreateTweetResponse { tweet: Some(tweet) })),
    )
}

pub async fn delete_tweet(State(db): State<RBatis>, Path(id): Path<String>) -> impl IntoResponse {
    let result = match db
        .exec("delete from tweets where id = ?1;", vec![to_value!(&id)])
        .await
    {
        Ok(result) => result,
        Err(err) => return internal(err),
    };

    if result.rows_affected == 0 {
        return failure(
            StatusCode::NOT_FOUND,
            Error {
                status: "NOT_FOUND".to_string(),
                message: format!("No tweet with id {id}!"),
                details: None,
            },
        );
    }

    info!(%id, "deleted tweet");

    (
        StatusCode::OK,
        Json(json!(DeleteTweetResponse {
            tweet: Some(DeleteTweetData { deleted: true }),
        })),
    )
}
