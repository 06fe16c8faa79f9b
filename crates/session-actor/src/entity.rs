//! # SessionEntity Trait
//!
//! The `SessionEntity` trait is the contract a piece of per-customer state must meet to be
//! hosted by a [`SessionActor`](crate::SessionActor). It names the types that flow through
//! the actor (how a session is opened, which commands it accepts, what it answers, what a
//! read-only view of it looks like) and the hooks the actor calls around those messages.
//!
//! # Provided Methods (Hooks)
//! - [`SessionEntity::on_open`]
//! - [`SessionEntity::on_close`]
//!
//! Both default to doing nothing (`Ok(())`).

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// State that lives inside a [`SessionActor`](crate::SessionActor), one instance per session.
///
/// # Context
/// `Context` is handed to `run()` once and then lent to every hook. Shared read-only
/// collaborators (a menu, a price list) belong there rather than in each session.
#[async_trait]
pub trait SessionEntity: Send + Sync + 'static {
    /// Session identifier. Built from the actor's `u32` counter.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Parameters needed to open a session.
    type Open: Send + Sync + Debug;

    /// The commands a session accepts.
    type Command: Send + Sync + Debug;

    /// What a command answers.
    type Outcome: Send + Sync + Debug;

    /// Read-only projection returned by `View` requests.
    type View: Send + Sync + Debug;

    /// Dependencies injected at `run()` time. Use `()` if none are needed.
    type Context: Send + Sync;

    /// One error type per entity, covering every hook.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the session from its id and opening parameters.
    fn open(id: Self::Id, params: Self::Open, ctx: &Self::Context) -> Result<Self, Self::Error>
    where
        Self: Sized;

    /// Called after `open` succeeds and before the session is stored.
    async fn on_open(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply one command to the session.
    async fn handle_command(
        &mut self,
        command: Self::Command,
        ctx: &Self::Context,
    ) -> Result<Self::Outcome, Self::Error>;

    /// Project the current state.
    fn view(&self, ctx: &Self::Context) -> Self::View;

    /// Called right before the session is dropped from the actor.
    async fn on_close(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
