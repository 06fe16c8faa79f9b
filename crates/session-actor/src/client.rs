//! # Session Client
//!
//! The cloneable handle used to talk to a [`SessionActor`](crate::SessionActor).

use crate::entity::SessionEntity;
use crate::error::FrameworkError;
use crate::message::SessionRequest;
use tokio::sync::{mpsc, oneshot};

/// Async handle to a [`SessionActor`](crate::SessionActor).
///
/// Holds only the sender half of the request channel, so clones are cheap. Each call
/// sends one request and waits for its one-shot reply.
pub struct SessionClient<T: SessionEntity> {
    sender: mpsc::Sender<SessionRequest<T>>,
}

// Manual impl: a derive would demand `T: Clone`.
impl<T: SessionEntity> Clone for SessionClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: SessionEntity> SessionClient<T> {
    pub fn new(sender: mpsc::Sender<SessionRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, FrameworkError>>) -> SessionRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn open(&self, params: T::Open) -> Result<T::Id, FrameworkError> {
        self.request(|respond_to| SessionRequest::Open { params, respond_to })
            .await
    }

    pub async fn view(&self, id: T::Id) -> Result<Option<T::View>, FrameworkError> {
        self.request(|respond_to| SessionRequest::View { id, respond_to })
            .await
    }

    pub async fn command(
        &self,
        id: T::Id,
        command: T::Command,
    ) -> Result<T::Outcome, FrameworkError> {
        self.request(|respond_to| SessionRequest::Command {
            id,
            command,
            respond_to,
        })
        .await
    }

    pub async fn close(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| SessionRequest::Close { id, respond_to })
            .await
    }
}
