//! Example 03 – Optional fields
//!
//! Optional setters are available from every state, keep the state they are called on
//! and can be called any number of times. The last value set wins.

use anyhow::Result;

use crate::FluentBuilder;

#[derive(FluentBuilder, Debug)]
pub struct Request {
    pub retries: u8,
    #[builder(required)]
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub timeout_ms: Option<u64>,
    #[builder(skip)]
    pub attempts: u32,
    #[builder(skip)]
    pub sent: bool,
}

/// Example 03 – interleaved, repeated and omitted optional values.
pub fn run() -> Result<()> {
    use request_builder::WithOptionals;

    let state: request_builder::Initial = Request::builder().retries(1).timeout_ms(Some(100));
    assert_eq!(state.get_retries(), &1);

    let state: request_builder::Final = state.url("https://example.com".to_string());
    // Values set before the transition travel with the builder.
    assert_eq!(state.get_timeout_ms(), &Some(100));

    let request = state
        .retries(3)
        .headers(vec![("accept".to_string(), "json".to_string())])
        .timeout_ms(None)
        .build();

    assert_eq!(request.url, "https://example.com");
    assert_eq!(request.retries, 3);
    assert_eq!(request.headers.len(), 1);
    assert_eq!(request.timeout_ms, None);
    assert_eq!(request.attempts, 0);
    assert!(!request.sent);

    let untouched = Request::builder().url("https://example.org".to_string()).build();
    assert_eq!(untouched.retries, 0);
    assert!(untouched.headers.is_empty());

    Ok(())
}
