//! # Session Actor
//!
//! The server half of the runtime. A `SessionActor` owns every live session of one
//! entity type and handles requests strictly one after another, so a session's state
//! is only ever touched by a single request at a time.

use crate::client::SessionClient;
use crate::entity::SessionEntity;
use crate::error::FrameworkError;
use crate::message::SessionRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Hosts the sessions of entity type `T`.
///
/// The actor is the only owner of its `sessions` map. Requests arrive over an mpsc
/// channel and are handled in arrival order inside [`SessionActor::run`]; nothing else
/// can reach the map, so no `Mutex` is involved.
///
/// # Usage Pattern
///
/// 1. **Create**: `SessionActor::new()` returns the actor and a [`SessionClient`].
/// 2. **Wire**: pass shared collaborators into `actor.run(context)`.
/// 3. **Run**: spawn the run loop.
///
/// ```rust
/// use session_actor::{SessionActor, SessionEntity};
/// use async_trait::async_trait;
///
/// #[derive(Debug)] struct Tally { count: u32 }
/// #[derive(Debug, thiserror::Error)] #[error("tally error")] struct TallyError;
///
/// #[async_trait]
/// impl SessionEntity for Tally {
///     type Id = u32; type Open = (); type Command = u32; type Outcome = u32;
///     type View = u32; type Context = (); type Error = TallyError;
///
///     fn open(_: u32, _: (), _: &()) -> Result<Self, TallyError> { Ok(Self { count: 0 }) }
///     async fn handle_command(&mut self, by: u32, _: &()) -> Result<u32, TallyError> {
///         self.count += by;
///         Ok(self.count)
///     }
///     fn view(&self, _: &()) -> u32 { self.count }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = SessionActor::<Tally>::new(8);
///     tokio::spawn(actor.run(()));
///
///     let id = client.open(()).await.unwrap();
///     assert_eq!(client.command(id, 2).await.unwrap(), 2);
///     assert_eq!(client.view(id).await.unwrap(), Some(2));
/// }
/// ```
pub struct SessionActor<T: SessionEntity> {
    receiver: mpsc::Receiver<SessionRequest<T>>,
    sessions: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: SessionEntity> SessionActor<T> {
    /// Creates the actor and its client.
    ///
    /// `buffer_size` bounds the request queue; senders wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, SessionClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            sessions: HashMap::new(),
            next_id: 1,
        };
        (actor, SessionClient::new(sender))
    }

    /// Runs the request loop until every client has been dropped.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Session actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SessionRequest::Open { params, respond_to } => {
                    debug!(entity_type, ?params, "Open");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    let mut session = match T::open(id.clone(), params, &context) {
                        Ok(session) => session,
                        Err(e) => {
                            warn!(entity_type, error = %e, "Open failed");
                            let _ = respond_to.send(Err(FrameworkError::Entity(Box::new(e))));
                            continue;
                        }
                    };
                    if let Err(e) = session.on_open(&context).await {
                        warn!(entity_type, %id, error = %e, "on_open failed");
                        let _ = respond_to.send(Err(FrameworkError::Entity(Box::new(e))));
                        continue;
                    }
                    self.sessions.insert(id.clone(), session);
                    info!(entity_type, %id, live = self.sessions.len(), "Opened");
                    let _ = respond_to.send(Ok(id));
                }
                SessionRequest::View { id, respond_to } => {
                    let view = self.sessions.get(&id).map(|s| s.view(&context));
                    debug!(entity_type, %id, found = view.is_some(), "View");
                    let _ = respond_to.send(Ok(view));
                }
                SessionRequest::Command {
                    id,
                    command,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?command, "Command");
                    let Some(session) = self.sessions.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let result = session
                        .handle_command(command, &context)
                        .await
                        .map_err(|e| FrameworkError::Entity(Box::new(e)));
                    match &result {
                        Ok(outcome) => debug!(entity_type, %id, ?outcome, "Command ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Command failed"),
                    }
                    let _ = respond_to.send(result);
                }
                SessionRequest::Close { id, respond_to } => {
                    debug!(entity_type, %id, "Close");
                    let Some(session) = self.sessions.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = session.on_close(&context).await {
                        warn!(entity_type, %id, error = %e, "on_close failed");
                        let _ = respond_to.send(Err(FrameworkError::Entity(Box::new(e))));
                        continue;
                    }
                    self.sessions.remove(&id);
                    info!(entity_type, %id, live = self.sessions.len(), "Closed");
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(entity_type, live = self.sessions.len(), "Shutdown");
    }
}
