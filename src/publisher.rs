use async_trait::async_trait;
use aws_sdk_sns::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_sns::operation::publish::PublishError as SnsPublishError;
use aws_sdk_sns::Client;

use crate::config::{create_aws_config, Config};
use crate::error::PublishError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublishRequest<'a> {
    pub topic_arn: &'a str,
    pub message: &'a str,
    pub subject: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishReceipt {
    pub message_id: Option<String>,
}

/// Sends one message to a pub/sub topic.
///
/// Implementations make exactly one attempt per call.
#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish(&self, request: PublishRequest<'_>) -> Result<PublishReceipt, PublishError>;
}

pub struct SnsPublisher {
    client: Client,
}

impl SnsPublisher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn from_config(config: &Config) -> Self {
        let aws_config = create_aws_config(config).await;
        Self::new(Client::new(&aws_config))
    }
}

#[async_trait]
impl Publisher for SnsPublisher {
    async fn publish(&self, request: PublishRequest<'_>) -> Result<PublishReceipt, PublishError> {
        let output = self
            .client
            .publish()
            .topic_arn(request.topic_arn)
            .message(request.message)
            .subject(request.subject)
            .send()
            .await
            .map_err(PublishError::from)?;

        Ok(PublishReceipt {
            message_id: output.message_id().map(str::to_string),
        })
    }
}

impl<R> From<SdkError<SnsPublishError, R>> for PublishError
where
    R: std::fmt::Debug,
{
    fn from(err: SdkError<SnsPublishError, R>) -> Self {
        match err {
            SdkError::ServiceError(context) => {
                let err = context.into_err();
                match (err.code(), err.message()) {
                    (Some(code), Some(message)) => {
                        PublishError::Rejected(format!("{}: {}", code, message))
                    }
                    _ => PublishError::Rejected(DisplayErrorContext(&err).to_string()),
                }
            }
            other => PublishError::Dispatch(DisplayErrorContext(&other).to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_sns::error::ErrorMetadata;
    use aws_sdk_sns::types::error::NotFoundException;

    #[test]
    fn service_error_keeps_code_and_message() {
        let not_found = NotFoundException::builder()
            .message("not found")
            .meta(
                ErrorMetadata::builder()
                    .code("InvalidTopic")
                    .message("not found")
                    .build(),
            )
            .build();
        let err: SdkError<SnsPublishError, ()> =
            SdkError::service_error(SnsPublishError::NotFoundException(not_found), ());

        match PublishError::from(err) {
            PublishError::Rejected(text) => assert_eq!(text, "InvalidTopic: not found"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn timeout_is_a_dispatch_failure() {
        let err: SdkError<SnsPublishError, ()> = SdkError::timeout_error("deadline elapsed");

        assert!(matches!(PublishError::from(err), PublishError::Dispatch(_)));
    }
}
