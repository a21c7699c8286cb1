//! Integration tests for interactive browsing

mod helpers;

use adto_client::handlers::run_browse;
use helpers::*;
use serial_test::serial;
use std::time::Duration;
use tokio::io::{AsyncWriteExt, BufReader};

async fn browse_server() -> EventsApiMockServer {
    let mock = EventsApiMockServer::new().await;
    mock.mock_filter_options().await;
    mock.mock_published_events(test_events_page(
        vec![test_event("event-1", "Tech Summit", &[0.0])],
        1,
        2,
        12,
    ))
    .await;
    mock
}

async fn published_queries(mock: &EventsApiMockServer) -> Vec<String> {
    mock.requests_to("GET", "/events/published")
        .await
        .iter()
        .map(|r| r.url.query().unwrap_or_default().to_string())
        .collect()
}

#[tokio::test]
#[serial]
async fn test_commands_reload_listing() {
    let mock = browse_server().await;
    let ctx = test_context(&mock.base_url);
    let input = BufReader::new(&b":free\n:next\n:org all\n:bogus\n:paid\n:quit\n"[..]);
    let mut output = Vec::new();

    run_browse(&ctx, input, &mut output).await.unwrap();

    assert_eq!(
        published_queries(&mock).await,
        vec![
            "page=1&limit=9",
            "page=1&limit=9&price=free",
            "page=2&limit=9&price=free",
            "page=1&limit=9",
        ]
    );

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("All Events"));
    assert!(output.contains("Filter unchanged."));
    assert!(output.contains("Unknown command. Type :help for help."));
}

#[tokio::test]
#[serial]
async fn test_search_is_debounced() {
    let mock = browse_server().await;
    let ctx = test_context(&mock.base_url);
    let (mut writer, reader) = tokio::io::duplex(1024);

    let typing = tokio::spawn(async move {
        writer.write_all(b"ja\njaz\njazz\n").await.unwrap();
        tokio::time::sleep(Duration::from_millis(400)).await;
        writer.write_all(b":quit\n").await.unwrap();
    });

    let mut output = Vec::new();
    run_browse(&ctx, BufReader::new(reader), &mut output).await.unwrap();
    typing.await.unwrap();

    // only the settled text reaches the API
    assert_eq!(
        published_queries(&mock).await,
        vec!["page=1&limit=9", "page=1&limit=9&searchFilter=jazz"]
    );
}

#[tokio::test]
#[serial]
async fn test_end_of_input_leaves_browse() {
    let mock = browse_server().await;
    let ctx = test_context(&mock.base_url);
    let mut output = Vec::new();

    run_browse(&ctx, BufReader::new(&b":help\n"[..]), &mut output)
        .await
        .unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Page 1 of 2 (12 total events)"));
    assert!(output.matches("Type to search.").count() >= 2);
}

#[tokio::test]
#[serial]
async fn test_jump_to_page() {
    let mock = browse_server().await;
    let ctx = test_context(&mock.base_url);
    let input = BufReader::new(&b":page 2\n:page 9\n:quit\n"[..]);
    let mut output = Vec::new();

    run_browse(&ctx, input, &mut output).await.unwrap();

    assert_eq!(
        published_queries(&mock).await,
        vec!["page=1&limit=9", "page=2&limit=9"]
    );
    assert!(String::from_utf8(output).unwrap().contains("No such page."));
}
