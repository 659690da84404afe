use anyhow::Result;
use hello_greeter::{say_hello, GREETING};

#[test]
fn test_say_hello_returns_expected_greeting() {
    assert_eq!(say_hello(), "Hello world!");
}

#[test]
fn test_greeting_length_and_content() {
    let greeting = say_hello();
    assert_eq!(greeting.len(), 12);
    assert!(!greeting.is_empty());
    assert_eq!(greeting, greeting.trim());
}

#[test]
fn test_say_hello_is_idempotent() {
    let first = say_hello();
    for _ in 0..100 {
        assert_eq!(say_hello(), first);
    }
    assert_eq!(first, GREETING);
}

#[tokio::test]
async fn test_concurrent_callers_receive_same_greeting() -> Result<()> {
    let mut handles = Vec::new();
    for _ in 0..8 {
        handles.push(tokio::spawn(async { say_hello() }));
    }

    for handle in handles {
        let greeting = handle.await?;
        assert_eq!(greeting, "Hello world!");
    }

    Ok(())
}
