use anyhow::{bail, Context, Result};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;
use tweetkit::{
    tweet::{CreateTweetRequest, CreateTweetResponse, DeleteTweetResponse},
    tweet_path, Error, TWEETS_PATH,
};

const DEFAULT_SERVER: &str = "http://127.0.0.1:3000";

/// Decodes a response body, turning non-2xx answers into the server's [`Error`].
fn parse<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T> {
    if !status.is_success() {
        let error: Error = serde_json::from_str(body)
            .with_context(|| format!("request failed with {status}: {body}"))?;
        return Err(error).context(format!("request failed with {status}"));
    }

    serde_json::from_str(body).context("failed to decode response")
}

async fn read(resp: reqwest::Response) -> Result<(StatusCode, String)> {
    let status = resp.status();
    let body = resp.text().await.context("failed to read response body")?;
    debug!(%status, %body, "response");

    Ok((status, body))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let server = std::env::var("TWEETKIT_SERVER").unwrap_or_else(|_| DEFAULT_SERVER.to_string());

    let mut input = String::new();
    std::io::stdin()
        .read_line(&mut input)
        .context("failed to read tweet text")?;

    let request = CreateTweetRequest::new(input.trim_end());
    request.validate().context("tweet rejected before sending")?;

    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{server}{TWEETS_PATH}"))
        .header("Content-Type", "application/json")
        .body(serde_json::to_string(&request)?)
        .send()
        .await
        .context("failed to send create request")?;

    let (status, body) = read(resp).await?;
    println!("POST: {status}");

    let created: CreateTweetResponse = parse(status, &body)?;
    let Some(tweet) = created.tweet else {
        bail!("create response carried no tweet");
    };

    println!("Created {}: {}", tweet.id, tweet.text);

    let resp = client
        .delete(format!("{server}{}", tweet_path(&tweet.id)))
        .send()
        .await
        .context("failed to send delete request")?;

    let (status, body) = read(resp).await?;
    println!("DELETE: {status}");

    let deleted: DeleteTweetResponse = parse(status, &body)?;
    println!(
        "Deleted {}: {}",
        tweet.id,
        deleted.tweet.map_or(false, |data| data.deleted)
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_decodes() {
        let created: CreateTweetResponse = parse(
            StatusCode::CREATED,
            r#"{"data":{"id":"1445880548472328192","text":"hi"}}"#,
        )
        .unwrap();

        assert_eq!(created.tweet.unwrap().id, "1445880548472328192");
    }

    #[test]
    fn error_body_surfaces_server_error() {
        let err = parse::<DeleteTweetResponse>(
            StatusCode::NOT_FOUND,
            r#"{"status":"NOT_FOUND","message":"No tweet with id 1!"}"#,
        )
        .unwrap_err();

        let error = err.downcast_ref::<Error>().unwrap();
        assert_eq!(error.status, "NOT_FOUND");
    }

    #[test]
    fn unreadable_error_body_keeps_status() {
        let err = parse::<DeleteTweetResponse>(StatusCode::BAD_GATEWAY, "upstream down").unwrap_err();

        assert!(err.to_string().contains("502"));
    }
}
