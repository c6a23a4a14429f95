use http::StatusCode;
use lambda_runtime::LambdaEvent;
use serde::Serialize;
use serde_json::{json, Value};

use crate::config::Config;
use crate::error::PublishError;
use crate::json;
use crate::message::{NotificationMessage, PUBLISH_SUBJECT};
use crate::publisher::{PublishReceipt, PublishRequest, Publisher};

pub const SUCCESS_MESSAGE: &str = "Notification sent successfully.";

/// API Gateway style result returned to the caller of the function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub body: String,
}

impl Response {
    pub fn sent() -> Self {
        Self::with_status(StatusCode::OK, &json!({ "message": SUCCESS_MESSAGE }))
    }

    pub fn failed(err: &PublishError) -> Self {
        Self::with_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            &json!({ "error": err.to_string() }),
        )
    }

    fn with_status(status: StatusCode, body: &Value) -> Self {
        Self {
            status_code: status.as_u16(),
            // A `Value` of strings always serializes.
            body: json::to_string(body).unwrap_or_default(),
        }
    }
}

pub struct NotificationHandler<P> {
    config: Config,
    publisher: P,
}

impl<P: Publisher> NotificationHandler<P> {
    pub fn new(config: Config, publisher: P) -> Self {
        Self { config, publisher }
    }

    /// Publishes the notification once. The trigger payload is never read.
    pub async fn handle(&self, event: LambdaEvent<Value>) -> Response {
        let (_event, context) = event.into_parts();

        match self.dispatch().await {
            Ok(receipt) => {
                tracing::info!(
                    request_id = %context.request_id,
                    topic_arn = %self.config.topic_arn,
                    message_id = ?receipt.message_id,
                    "notification published"
                );
                Response::sent()
            }
            Err(err) => {
                tracing::error!(
                    request_id = %context.request_id,
                    topic_arn = %self.config.topic_arn,
                    error = %err,
                    "failed to publish notification"
                );
                Response::failed(&err)
            }
        }
    }

    async fn dispatch(&self) -> Result<PublishReceipt, PublishError> {
        let message = NotificationMessage::on_behalf_of(&self.config.sender_name);
        let payload = json::to_string(&message)?;

        self.publisher
            .publish(PublishRequest {
                topic_arn: &self.config.topic_arn,
                message: &payload,
                subject: PUBLISH_SUBJECT,
            })
            .await
    }
}
