use async_trait::async_trait;
use lambda_runtime::{Context, LambdaEvent};
use serde_json::Value;
use sns_notifier::{Config, PublishError, PublishReceipt, PublishRequest, Publisher};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedPublish {
    pub topic_arn: String,
    pub message: String,
    pub subject: String,
}

/// Publisher that records every call and answers with a fixed outcome.
///
/// Clones share one call log, so a test keeps a clone after handing the
/// publisher to the handler.
#[derive(Clone)]
pub struct RecordingPublisher {
    failure: Option<String>,
    calls: Arc<Mutex<Vec<RecordedPublish>>>,
}

impl RecordingPublisher {
    pub fn succeeding() -> Self {
        Self {
            failure: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(text: &str) -> Self {
        Self {
            failure: Some(text.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> Vec<RecordedPublish> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Publisher for RecordingPublisher {
    async fn publish(&self, request: PublishRequest<'_>) -> Result<PublishReceipt, PublishError> {
        let mut calls = self.calls.lock().unwrap();
        calls.push(RecordedPublish {
            topic_arn: request.topic_arn.to_string(),
            message: request.message.to_string(),
            subject: request.subject.to_string(),
        });

        match &self.failure {
            Some(text) => Err(PublishError::Rejected(text.clone())),
            None => Ok(PublishReceipt {
                message_id: Some(format!("mock-message-{}", calls.len())),
            }),
        }
    }
}

pub fn test_config(sender_name: &str) -> Config {
    Config {
        sender_name: sender_name.to_string(),
        topic_arn: "arn:aws:sns:us-east-1:123456789012:notifications".to_string(),
        environment: "dev".to_string(),
        local_endpoint: "http://localhost:4566".to_string(),
    }
}

pub fn event(payload: Value) -> LambdaEvent<Value> {
    LambdaEvent::new(payload, Context::default())
}
