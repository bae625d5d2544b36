use reqwest::Method;

use super::{
    client::ApiClient,
    encode_component,
    types::{ApiError, NotificationFeed, NotificationFeedWire},
};

impl ApiClient {
    pub async fn list_notifications(&self) -> Result<NotificationFeed, ApiError> {
        let wire: NotificationFeedWire = self.get_json("/api/notifications").await?;
        Ok(wire.into())
    }

    pub async fn mark_notification_read(&self, notification_id: &str) -> Result<(), ApiError> {
        self.send_empty::<()>(
            Method::POST,
            &format!("/api/notifications/{}/read", encode_component(notification_id)),
            None,
        )
        .await
    }

    pub async fn mark_all_notifications_read(&self) -> Result<(), ApiError> {
        self.send_empty::<()>(Method::POST, "/api/notifications/read-all", None)
            .await
    }
}
