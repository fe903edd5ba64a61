//! [`ActorEntity`] implementation for [`User`].
//!
//! Users have no update payload and no actions; the only write is creation,
//! which validates the payload and claims the email as the unique key.

use super::UserError;
use crate::model::{User, UserCreate, UserId};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;
use std::convert::Infallible;

fn validate(params: &UserCreate) -> Result<(), UserError> {
    if params.name.trim().is_empty() {
        return Err(UserError::ValidationError("name must not be empty".into()));
    }
    let email = params.email.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(UserError::ValidationError(format!(
            "invalid email address: {email:?}"
        ))),
    }
}

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = Infallible;
    type Action = Infallible;
    type ActionResult = ();
    type Context = ();
    type Error = UserError;

    /// Validates the name and email and stamps `created_at`.
    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, Self::Error> {
        validate(&params)?;
        Ok(Self {
            id,
            name: params.name.trim().to_string(),
            email: params.email.trim().to_string(),
            created_at: Utc::now(),
        })
    }

    /// Emails are unique regardless of case.
    fn unique_key(&self) -> Option<String> {
        Some(self.email.to_lowercase())
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}
