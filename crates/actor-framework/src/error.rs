//! # Framework Errors
//!
//! Errors raised by the plumbing between a [`ResourceClient`](crate::ResourceClient)
//! and its [`ResourceActor`](crate::ResourceActor). Entity-level failures travel
//! boxed inside [`FrameworkError::EntityError`] and can be recovered by type with
//! [`FrameworkError::downcast_entity`].

use std::error::Error as StdError;

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    /// Another entity already owns the same unique key.
    #[error("Conflict on unique key: {0}")]
    Conflict(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn StdError + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the typed entity error carried by [`FrameworkError::EntityError`].
    ///
    /// Returns `Err(self)` unchanged when the error is a framework failure or
    /// when the boxed error is of another type.
    pub fn downcast_entity<E>(self) -> Result<E, FrameworkError>
    where
        E: StdError + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(typed) => Ok(*typed),
                Err(other) => Err(FrameworkError::EntityError(other)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("out of stock")]
    struct OutOfStock;

    #[derive(Debug, thiserror::Error)]
    #[error("other")]
    struct Other;

    #[test]
    fn downcast_recovers_matching_entity_error() {
        let err = FrameworkError::EntityError(Box::new(OutOfStock));
        assert_eq!(err.downcast_entity::<OutOfStock>().unwrap(), OutOfStock);
    }

    #[test]
    fn downcast_keeps_foreign_errors() {
        let err = FrameworkError::EntityError(Box::new(Other));
        let back = err.downcast_entity::<OutOfStock>().unwrap_err();
        assert!(matches!(back, FrameworkError::EntityError(_)));

        let closed = FrameworkError::ActorClosed.downcast_entity::<OutOfStock>();
        assert!(matches!(closed, Err(FrameworkError::ActorClosed)));
    }
}
