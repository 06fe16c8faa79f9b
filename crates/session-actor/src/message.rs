//! # Session Messages
//!
//! Requests travelling from a [`SessionClient`](crate::SessionClient) to its
//! [`SessionActor`](crate::SessionActor).

use crate::entity::SessionEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// One-shot reply channel carried by every request.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// A request to the session actor.
///
/// The set is deliberately small: a session is opened, looked at, driven by
/// commands and eventually closed.
///
/// - **Open**: start a new session from [`SessionEntity::Open`] parameters.
/// - **View**: read a [`SessionEntity::View`] projection of a session.
/// - **Command**: apply one [`SessionEntity::Command`].
/// - **Close**: end a session and drop its state.
#[derive(Debug)]
pub enum SessionRequest<T: SessionEntity> {
    Open {
        params: T::Open,
        respond_to: Response<T::Id>,
    },
    View {
        id: T::Id,
        respond_to: Response<Option<T::View>>,
    },
    Command {
        id: T::Id,
        command: T::Command,
        respond_to: Response<T::Outcome>,
    },
    Close {
        id: T::Id,
        respond_to: Response<()>,
    },
}
