//! # EntityClient Trait
//!
//! Domain clients wrap a [`SessionClient`] and translate [`FrameworkError`] into their own
//! error type. Implementing this trait gives them `view` and `close` for free.
use crate::{FrameworkError, SessionClient, SessionEntity};
use async_trait::async_trait;

/// Shared behaviour for domain-specific session clients.
///
/// # Example
///
/// ```rust
/// use session_actor::{EntityClient, FrameworkError, SessionClient, SessionEntity};
/// use async_trait::async_trait;
///
/// #[derive(Debug)] struct Tab { total: u32 }
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct TabError(String);
///
/// impl From<String> for TabError {
///     fn from(s: String) -> Self { TabError(s) }
/// }
///
/// #[async_trait]
/// impl SessionEntity for Tab {
///     type Id = u32; type Open = (); type Command = (); type Outcome = ();
///     type View = u32; type Context = (); type Error = TabError;
///     fn open(_: u32, _: (), _: &()) -> Result<Self, TabError> { Ok(Self { total: 0 }) }
///     async fn handle_command(&mut self, _: (), _: &()) -> Result<(), TabError> { Ok(()) }
///     fn view(&self, _: &()) -> u32 { self.total }
/// }
///
/// struct TabClient { inner: SessionClient<Tab> }
///
/// #[async_trait]
/// impl EntityClient<Tab> for TabClient {
///     type Error = TabError;
///     fn inner(&self) -> &SessionClient<Tab> { &self.inner }
///     fn map_error(e: FrameworkError) -> TabError { TabError(e.to_string()) }
/// }
///
/// async fn usage(client: TabClient) {
///     let _ = client.view(1).await;
///     let _ = client.close(1).await;
/// }
/// ```
#[async_trait]
pub trait EntityClient<T: SessionEntity>: Send + Sync {
    /// The domain error type.
    type Error: From<String> + Send + Sync;

    /// The wrapped generic client.
    fn inner(&self) -> &SessionClient<T>;

    /// Translate a runtime failure into the domain error.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Read the current view of a session.
    #[tracing::instrument(skip(self))]
    async fn view(&self, id: T::Id) -> Result<Option<T::View>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().view(id).await.map_err(Self::map_error)
    }

    /// End a session.
    #[tracing::instrument(skip(self))]
    async fn close(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().close(id).await.map_err(Self::map_error)
    }
}
