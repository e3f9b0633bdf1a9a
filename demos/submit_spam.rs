use std::io;

use akismet::{AkismetClient, ApiKey, Comment, CommentOptions, Site, UserAgent, UserIp};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("AKISMET_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "AKISMET_API_KEY environment variable is required",
        )
    })?;
    let site = std::env::var("AKISMET_SITE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "AKISMET_SITE environment variable is required",
        )
    })?;

    let client = AkismetClient::new(ApiKey::new(api_key)?, Site::new(site)?);

    let comment = Comment::new(
        UserIp::new("127.0.0.1")?,
        UserAgent::new("Mozilla/5.0 (compatible; akismet-demos)")?,
        CommentOptions {
            author: Some("viagra-test-123".to_owned()),
            content: Some("Buy cheap watches".to_owned()),
            is_test: true,
            ..Default::default()
        },
    );

    client.submit_spam(&comment).await?;
    println!("reported as spam");

    Ok(())
}
