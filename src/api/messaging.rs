use crate::api::{MarketplaceApi, Sourced};
use crate::client::ApiError;
use crate::models::{Message, Notification, SendMessageRequest, WriteAck};
use serde_json::json;
use tracing::warn;

impl MarketplaceApi {
    /// Messages where the user is sender or recipient
    pub async fn messages_for_user(&self, user_id: &str) -> Sourced<Vec<Message>> {
        let path = format!("/users/{}/messages", user_id);
        match self.retry.run(|| self.transport.get(&path)).await {
            Ok(messages) => Sourced::Live(messages),
            Err(error) => {
                warn!(user_id, %error, "message list unavailable, serving fallback snapshot");
                Sourced::Fallback(self.fallback.messages_for_user(user_id))
            }
        }
    }

    /// Notifications addressed to a user
    pub async fn notifications_for(&self, user_id: &str) -> Sourced<Vec<Notification>> {
        let path = format!("/users/{}/notifications", user_id);
        match self.retry.run(|| self.transport.get(&path)).await {
            Ok(notifications) => Sourced::Live(notifications),
            Err(error) => {
                warn!(user_id, %error, "notification list unavailable, serving fallback snapshot");
                Sourced::Fallback(self.fallback.notifications_for(user_id))
            }
        }
    }

    /// Send a direct message
    pub async fn send_message(&self, request: &SendMessageRequest) -> Result<Message, ApiError> {
        self.retry
            .run(|| self.transport.post("/messages", request))
            .await
    }

    /// Mark a notification as read
    pub async fn mark_notification_read(
        &self,
        notification_id: &str,
    ) -> Result<WriteAck, ApiError> {
        let path = format!("/notifications/{}/read", notification_id);
        let body = json!({});
        self.retry.run(|| self.transport.post(&path, &body)).await
    }
}
