//! Runs the three OOPSpam operations against the live API.
//!
//! Requires `OOPSPAM_API_KEY` in the environment.

use oopspam_client::{Config, OopSpamClient, OopSpamError, SpamDetectionRequest};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Scores at or above this are treated as spam by this program
const SPAM_THRESHOLD: i64 = 3;

fn main() -> Result<(), OopSpamError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "oopspam_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = OopSpamClient::new(Config::from_env()?)?;

    let request = SpamDetectionRequest::builder()
        .sender_ip("91.203.67.110")
        .email("testing@example.com")
        .content("Dear Agent, We are a manufacturing company which specializes in supplying Aluminum Rod with Zinc Alloy Rod to customers worldwide, based in Japan, Asia.")
        .check_for_length(true)
        .allowed_languages(vec!["en".to_string()])
        .allowed_countries(vec!["us".to_string(), "ca".to_string()])
        .build();

    let reply = client.check_spam(&request)?;
    let is_spam = reply.score >= SPAM_THRESHOLD;
    println!("Spam Check Results:");
    println!("Score: {}", reply.score);
    println!("Is Spam: {}", is_spam);
    println!("IP Blocked: {}", reply.details.is_ip_blocked);
    println!("Email Blocked: {}", reply.details.is_email_blocked);
    println!("Number of Spam Words: {}", reply.details.number_of_spam_words);
    if !reply.details.spam_words.is_empty() {
        println!("Spam Words: {:?}", reply.details.spam_words);
    }
    println!();

    let reputation = client.check_domain_reputation("example.com")?;
    println!("Domain Reputation Results:");
    println!("Domain Blocked: {}", reputation.blocked);
    if reputation.blocked {
        println!("Blocked by: {:?}", reputation.blocker);
    }
    println!();

    if is_spam {
        info!("reporting false positive");
        client.report_spam(&request, false)?;
        println!("False positive reported successfully");
    }

    Ok(())
}
