//! # User Client
//!
//! Provides a high‑level API for interacting with the `User` actor.
use crate::model::{User, UserCreate, UserId};
use crate::user_actor::UserError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_entity::<UserError>()
            .unwrap_or_else(|e| UserError::ActorCommunicationError(e.to_string()))
    }
}

impl UserClient {
    /// Registers a user. Fails with `AlreadyExists` if the email is taken.
    #[instrument(skip(self))]
    pub async fn create_user(&self, params: UserCreate) -> Result<UserId, UserError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(|e| match e {
            FrameworkError::Conflict(email) => UserError::AlreadyExists(email),
            other => Self::map_error(other),
        })
    }

    #[instrument(skip(self))]
    pub async fn get_user(&self, id: UserId) -> Result<User, UserError> {
        self.get(id).await?.ok_or(UserError::NotFound(id))
    }

    pub async fn list_users(&self) -> Result<Vec<User>, UserError> {
        self.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::{create_mock_client, expect_create, MockClient};

    #[tokio::test]
    async fn conflict_maps_to_already_exists() {
        let (client, mut receiver) = create_mock_client::<User>(10);
        let user_client = UserClient::new(client);

        let task = tokio::spawn(async move {
            user_client
                .create_user(UserCreate::new("Juan", "juan@example.com"))
                .await
        });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.email, "juan@example.com");
        responder
            .send(Err(FrameworkError::Conflict("juan@example.com".into())))
            .unwrap();

        assert_eq!(
            task.await.unwrap(),
            Err(UserError::AlreadyExists("juan@example.com".into()))
        );
    }

    #[tokio::test]
    async fn entity_errors_are_recovered_by_type() {
        let mut mock = MockClient::<User>::new();
        mock.expect_create()
            .return_err(FrameworkError::EntityError(Box::new(
                UserError::ValidationError("name must not be empty".into()),
            )));
        let client = UserClient::new(mock.client());

        let err = client
            .create_user(UserCreate::new("", "x@example.com"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            UserError::ValidationError("name must not be empty".into())
        );
        mock.verify();
    }

    #[tokio::test]
    async fn missing_user_is_not_found() {
        let mut mock = MockClient::<User>::new();
        mock.expect_get(UserId(9)).return_ok(None);
        let client = UserClient::new(mock.client());

        assert_eq!(
            client.get_user(UserId(9)).await,
            Err(UserError::NotFound(UserId(9)))
        );
        mock.verify();
    }
}
