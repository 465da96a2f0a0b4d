use crate::api::{MarketplaceApi, Sourced};
use crate::client::ApiError;
use crate::models::{MaintainedItem, UpdateProfileRequest, UserAccount};
use tracing::warn;

impl MarketplaceApi {
    /// List all marketplace users
    pub async fn list_users(&self) -> Sourced<Vec<UserAccount>> {
        match self.retry.run(|| self.transport.get("/users")).await {
            Ok(users) => Sourced::Live(users),
            Err(error) => {
                warn!(%error, "user list unavailable, serving fallback snapshot");
                Sourced::Fallback(self.fallback.users())
            }
        }
    }

    /// Fetch a single user by id
    pub async fn get_user(&self, user_id: &str) -> Sourced<Option<UserAccount>> {
        let path = format!("/users/{}", user_id);
        match self.retry.run(|| self.transport.get(&path)).await {
            Ok(user) => Sourced::Live(Some(user)),
            Err(error) => {
                warn!(user_id, %error, "user lookup unavailable, serving fallback snapshot");
                Sourced::Fallback(self.fallback.user_by_id(user_id))
            }
        }
    }

    /// Maintained items owned by a user
    pub async fn items_for_owner(&self, owner_id: &str) -> Sourced<Vec<MaintainedItem>> {
        let path = format!("/users/{}/items", owner_id);
        match self.retry.run(|| self.transport.get(&path)).await {
            Ok(items) => Sourced::Live(items),
            Err(error) => {
                warn!(owner_id, %error, "item list unavailable, serving fallback snapshot");
                Sourced::Fallback(self.fallback.items_for_owner(owner_id))
            }
        }
    }

    /// Update profile fields; propagates the classified error on failure
    pub async fn update_profile(
        &self,
        user_id: &str,
        request: &UpdateProfileRequest,
    ) -> Result<UserAccount, ApiError> {
        let path = format!("/users/{}", user_id);
        self.retry
            .run(|| self.transport.patch(&path, request))
            .await
    }
}
