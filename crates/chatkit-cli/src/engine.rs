//! Mock response engine for the example host

use async_trait::async_trait;
use chatkit_core::{ChatEngine, ChatEvent, ChatEventStream, Result};
use std::time::Duration;

/// Streams a canned reply word by word with configurable latency.
pub struct MockEngine {
    latency: Duration,
    fail_after: Option<usize>,
}

impl MockEngine {
    /// Create an engine with the given per-token latency
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            fail_after: None,
        }
    }

    /// Fail after emitting `tokens` tokens
    pub fn failing_after(mut self, tokens: usize) -> Self {
        self.fail_after = Some(tokens);
        self
    }

    fn reply(input: &str) -> String {
        format!(
            "You said: \"{input}\". This is a canned response, streamed word \
             by word so the placeholder lifecycle is visible."
        )
    }
}

#[async_trait]
impl ChatEngine for MockEngine {
    async fn send(&self, input: &str) -> Result<ChatEventStream> {
        let words: Vec<String> = Self::reply(input)
            .split_whitespace()
            .map(String::from)
            .collect();
        let latency = self.latency;
        let fail_after = self.fail_after;

        Ok(Box::pin(async_stream::stream! {
            yield ChatEvent::Started;
            for (i, word) in words.into_iter().enumerate() {
                if fail_after == Some(i) {
                    yield ChatEvent::Failed {
                        message: "mock engine failure".to_string(),
                    };
                    return;
                }
                tokio::time::sleep(latency).await;
                let text = if i == 0 { word } else { format!(" {word}") };
                yield ChatEvent::Token { text };
            }
            yield ChatEvent::Completed;
        }))
    }
}
