use rp_client::{Attachment, ItemType, LaunchMode, LogLevel, RpClient, TestOutcome};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Create client from environment variables (RP_BASE_URL, RP_API_TOKEN)
    let client = RpClient::from_env()?;

    println!("=== rp-client demo run ===");

    let launch = client
        .start_launch("Demo Run", "rp-client example", LaunchMode::Debug)
        .await?;
    println!("Launch started: {launch}");

    let suite = client
        .start_item_in(&launch, "Smoke Suite", "Demo suite", ItemType::Suite, None)
        .await?;
    let test = client
        .start_item_in(
            &launch,
            "Login Test",
            "Checks the login flow",
            ItemType::Test,
            Some(&suite),
        )
        .await?;

    client
        .add_log(&test, LogLevel::Info, "opening the login page", None)
        .await?;
    client
        .add_log(
            &test,
            LogLevel::Debug,
            "captured page source",
            Some(Attachment::new("login.txt", b"<html>...</html>".to_vec())),
        )
        .await?;

    client.finish_item(&test, TestOutcome::Passed).await?;
    client.finish_item(&suite, TestOutcome::Passed).await?;
    client
        .finish_launch(&launch, "rp-client example", Some(TestOutcome::Passed))
        .await?;

    println!("Launch finished: {launch}");

    Ok(())
}
