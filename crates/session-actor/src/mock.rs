//! # Mock Sessions
//!
//! `MockClient<T>` hands out a real [`SessionClient<T>`] whose requests are answered from a
//! queue of canned expectations instead of a running entity. Use it to test client-side
//! logic (result mapping, error translation) without building real session state.
//!
//! | | MockClient | Real SessionActor |
//! |---|---|---|
//! | **State** | none, canned replies | real entity state |
//! | **Error injection** | `return_err` | needs a state that fails |
//! | **Use case** | logic around the client | the entity itself, full flows |
//!
//! ```rust
//! use session_actor::mock::MockClient;
//! use session_actor::{FrameworkError, SessionEntity};
//! use async_trait::async_trait;
//!
//! #[derive(Debug)] struct Tab;
//! #[derive(Debug, thiserror::Error)] #[error("tab")] struct TabError;
//!
//! #[async_trait]
//! impl SessionEntity for Tab {
//!     type Id = u32; type Open = (); type Command = (); type Outcome = u32;
//!     type View = u32; type Context = (); type Error = TabError;
//!     fn open(_: u32, _: (), _: &()) -> Result<Self, TabError> { Ok(Tab) }
//!     async fn handle_command(&mut self, _: (), _: &()) -> Result<u32, TabError> { Ok(0) }
//!     fn view(&self, _: &()) -> u32 { 0 }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Tab>::new();
//!     mock.expect_command(1).return_ok(7);
//!     mock.expect_view(1).return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.command(1, ()).await.unwrap(), 7);
//!     assert!(matches!(client.view(1).await, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! For finer control, [`create_mock_client`] returns the raw request receiver and the
//! `expect_*` functions pop typed requests off it so a test can inspect them and reply.

use crate::client::SessionClient;
use crate::entity::SessionEntity;
use crate::error::FrameworkError;
use crate::message::{Response, SessionRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

enum Expectation<T: SessionEntity> {
    Open {
        response: Result<T::Id, FrameworkError>,
    },
    View {
        id: T::Id,
        response: Result<Option<T::View>, FrameworkError>,
    },
    Command {
        id: T::Id,
        response: Result<T::Outcome, FrameworkError>,
    },
    Close {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A session client backed by queued expectations.
///
/// Requests must arrive in the order the expectations were queued, and the session
/// id of each request must match. Anything else panics the background task, which
/// surfaces in the test as `ActorDropped`.
pub struct MockClient<T: SessionEntity> {
    client: SessionClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: SessionEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SessionEntity> MockClient<T> {
    /// Starts the responder task. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<SessionRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        SessionRequest::Open { respond_to, .. },
                        Some(Expectation::Open { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        SessionRequest::View { id, respond_to },
                        Some(Expectation::View { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "view requested for unexpected session");
                        let _ = respond_to.send(response);
                    }
                    (
                        SessionRequest::Command { id, respond_to, .. },
                        Some(Expectation::Command { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "command sent to unexpected session");
                        let _ = respond_to.send(response);
                    }
                    (
                        SessionRequest::Close { id, respond_to },
                        Some(Expectation::Close { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "close requested for unexpected session");
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: SessionClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// The client to hand to the code under test.
    pub fn client(&self) -> SessionClient<T> {
        self.client.clone()
    }

    pub fn expect_open(&mut self) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder::new(self.expectations.clone(), |response| {
            Expectation::Open { response }
        })
    }

    pub fn expect_view(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T::View>> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| Expectation::View {
            id,
            response,
        })
    }

    pub fn expect_command(&mut self, id: T::Id) -> ExpectationBuilder<T, T::Outcome> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Command { id, response }
        })
    }

    pub fn expect_close(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| Expectation::Close {
            id,
            response,
        })
    }

    /// Panics unless every queued expectation was consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Finishes an expectation with the reply the mock should send.
pub struct ExpectationBuilder<T: SessionEntity, R> {
    expectations: Queue<T>,
    build: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: SessionEntity, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: Queue<T>,
        build: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations,
            build: Box::new(build),
        }
    }

    pub fn return_ok(self, value: R) {
        let expectation = (self.build)(Ok(value));
        self.expectations.lock().unwrap().push_back(expectation);
    }

    pub fn return_err(self, error: FrameworkError) {
        let expectation = (self.build)(Err(error));
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

/// Creates a client plus the receiver its requests land on.
pub fn create_mock_client<T: SessionEntity>(
    buffer_size: usize,
) -> (SessionClient<T>, mpsc::Receiver<SessionRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (SessionClient::new(sender), receiver)
}

/// Pops the next request if it is an `Open`.
pub async fn expect_open<T: SessionEntity>(
    receiver: &mut mpsc::Receiver<SessionRequest<T>>,
) -> Option<(T::Open, Response<T::Id>)> {
    match receiver.recv().await {
        Some(SessionRequest::Open { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Pops the next request if it is a `View`.
pub async fn expect_view<T: SessionEntity>(
    receiver: &mut mpsc::Receiver<SessionRequest<T>>,
) -> Option<(T::Id, Response<Option<T::View>>)> {
    match receiver.recv().await {
        Some(SessionRequest::View { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Pops the next request if it is a `Command`.
pub async fn expect_command<T: SessionEntity>(
    receiver: &mut mpsc::Receiver<SessionRequest<T>>,
) -> Option<(T::Id, T::Command, Response<T::Outcome>)> {
    match receiver.recv().await {
        Some(SessionRequest::Command {
            id,
            command,
            respond_to,
        }) => Some((id, command, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Debug)]
    struct Counter {
        hits: u32,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("counter error")]
    struct CounterError;

    #[async_trait]
    impl SessionEntity for Counter {
        type Id = u32;
        type Open = u32;
        type Command = u32;
        type Outcome = u32;
        type View = u32;
        type Context = ();
        type Error = CounterError;

        fn open(_id: u32, start: u32, _ctx: &()) -> Result<Self, CounterError> {
            Ok(Self { hits: start })
        }

        async fn handle_command(&mut self, by: u32, _ctx: &()) -> Result<u32, CounterError> {
            self.hits += by;
            Ok(self.hits)
        }

        fn view(&self, _ctx: &()) -> u32 {
            self.hits
        }
    }

    #[tokio::test]
    async fn test_raw_receiver_sees_command() {
        let (client, mut receiver) = create_mock_client::<Counter>(4);

        let task = tokio::spawn(async move { client.command(3, 5).await });

        let (id, command, responder) = expect_command(&mut receiver)
            .await
            .expect("Expected Command request");
        assert_eq!(id, 3);
        assert_eq!(command, 5);
        responder.send(Ok(42)).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), 42);
    }

    #[tokio::test]
    async fn test_expectations_answer_in_order() {
        let mut mock = MockClient::<Counter>::new();
        mock.expect_open().return_ok(1);
        mock.expect_view(1).return_ok(Some(9));
        mock.expect_close(1).return_ok(());

        let client = mock.client();
        let id = client.open(0).await.unwrap();
        assert_eq!(client.view(id).await.unwrap(), Some(9));
        client.close(id).await.unwrap();

        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "1 remaining")]
    async fn test_verify_reports_unmet_expectations() {
        let mut mock = MockClient::<Counter>::new();
        mock.expect_open().return_ok(1);
        mock.verify();
    }
}
