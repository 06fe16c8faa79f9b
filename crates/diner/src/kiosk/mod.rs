//! # Kiosk
//!
//! The terminal front end. A [`Kiosk`] owns one order session at a time and turns each
//! line the customer types into calls on the [`OrderClient`], answering with the text to
//! print. It never touches order state directly.
//!
//! While the payment prompt is open every line goes to the prompt; otherwise lines are
//! parsed as [`Gesture`]s.

pub mod gesture;
pub mod prompt;

pub use gesture::{Gesture, GestureError};
pub use prompt::{PaymentPrompt, PromptStep};

use crate::catalog::Catalog;
use crate::clients::OrderClient;
use crate::model::{OrderSnapshot, SessionId, SessionPolicy};
use crate::order_actor::{OrderError, Rejection};
use crate::render::{render_help, render_menu, render_summary, MenuView, SummaryView, THANK_YOU};
use session_actor::EntityClient;
use std::sync::Arc;
use tracing::{debug, info};

const CLOSED: &str = "Your order has been placed. Type `restart` to start a new one.\n";
const GOODBYE: &str = "Goodbye!\n";

/// What to print after a line, and whether the kiosk should stop.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Step {
    pub output: String,
    pub quit: bool,
}

impl Step {
    fn show(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            quit: false,
        }
    }

    fn quit() -> Self {
        Self {
            output: GOODBYE.to_string(),
            quit: true,
        }
    }
}

pub struct Kiosk {
    client: OrderClient,
    catalog: Arc<Catalog>,
    policy: SessionPolicy,
    session: SessionId,
    prompt: Option<PaymentPrompt>,
}

impl Kiosk {
    /// Opens a first session.
    pub async fn open(
        client: OrderClient,
        catalog: Arc<Catalog>,
        policy: SessionPolicy,
    ) -> Result<Self, OrderError> {
        let session = client.open_session(policy).await?;
        info!(%session, %policy, "Kiosk ready");
        Ok(Self {
            client,
            catalog,
            policy,
            session,
            prompt: None,
        })
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn is_paying(&self) -> bool {
        self.prompt.is_some()
    }

    /// Text to show before reading the next line.
    pub fn input_label(&self) -> &'static str {
        match &self.prompt {
            Some(prompt) => prompt.label(),
            None => "> ",
        }
    }

    /// The opening screen: menu, current order and a pointer to `help`.
    pub async fn welcome(&self) -> Result<String, OrderError> {
        let snapshot = self.client.snapshot(self.session).await?;
        let mut out = String::from("Welcome! Type `help` for the list of commands.\n\n");
        out.push_str(&self.menu_text(&snapshot));
        out.push('\n');
        out.push_str(&self.order_text(&snapshot));
        Ok(out)
    }

    /// Handles one line of input.
    pub async fn handle_line(&mut self, line: &str) -> Result<Step, OrderError> {
        if self.prompt.is_some() {
            return self.handle_payment_line(line).await;
        }
        if line.trim().is_empty() {
            return Ok(Step::default());
        }

        let gesture = match line.parse::<Gesture>() {
            Ok(gesture) => gesture,
            Err(e) => return Ok(Step::show(format!("{e}\n"))),
        };
        debug!(session = %self.session, ?gesture, "Gesture");

        let output = match gesture {
            Gesture::Help => render_help(),
            Gesture::Quit => return Ok(Step::quit()),
            Gesture::Menu => {
                let snapshot = self.client.snapshot(self.session).await?;
                self.menu_text(&snapshot)
            }
            Gesture::Order => self.current_order().await?,
            Gesture::Add(item) => {
                self.client.add_item(self.session, item).await?;
                self.current_order().await?
            }
            Gesture::Remove(index) => {
                self.client.remove_one(self.session, index).await?;
                self.current_order().await?
            }
            Gesture::Checkout => match self.client.checkout(self.session).await {
                Ok(()) => {
                    self.prompt = Some(PaymentPrompt::new());
                    "Payment details (type `cancel` to go back to your order)\n".to_string()
                }
                Err(OrderError::Rejected(rejection)) => rejection_text(rejection),
                Err(e) => return Err(e),
            },
            Gesture::Restart => self.restart().await?,
        };
        Ok(Step::show(output))
    }

    /// Ends the current session.
    pub async fn close(self) -> Result<(), OrderError> {
        self.client.close(self.session).await
    }

    async fn handle_payment_line(&mut self, line: &str) -> Result<Step, OrderError> {
        let Some(prompt) = self.prompt.as_mut() else {
            return Ok(Step::default());
        };

        let payment = match prompt.feed(line) {
            PromptStep::Cancelled => {
                self.prompt = None;
                let mut out = String::from("Payment cancelled.\n");
                out.push_str(&self.current_order().await?);
                return Ok(Step::show(out));
            }
            PromptStep::Quit => {
                self.prompt = None;
                return Ok(Step::quit());
            }
            PromptStep::Next { echo } => {
                let echo = echo.map(|e| format!("  {e}\n")).unwrap_or_default();
                return Ok(Step::show(echo));
            }
            PromptStep::Complete(payment) => payment,
        };

        match self.client.finalize(self.session, payment).await {
            Ok(()) => {
                self.prompt = None;
                info!(session = %self.session, policy = %self.policy, "Order placed");
                let mut out = format!("{THANK_YOU}\n");
                if self.policy == SessionPolicy::ResetAfterPayment {
                    out.push_str("\nReady for your next order.\n");
                    out.push_str(&self.current_order().await?);
                }
                Ok(Step::show(out))
            }
            Err(OrderError::Rejected(Rejection::MissingField(field))) => {
                prompt.resume_at(field);
                Ok(Step::show(rejection_text(Rejection::MissingField(field))))
            }
            Err(OrderError::Rejected(rejection)) => {
                self.prompt = None;
                Ok(Step::show(rejection_text(rejection)))
            }
            Err(e) => Err(e),
        }
    }

    async fn restart(&mut self) -> Result<String, OrderError> {
        self.prompt = None;
        let previous = self.session;
        self.session = self.client.open_session(self.policy).await?;
        self.client.close(previous).await?;
        info!(%previous, session = %self.session, "Restarted");
        self.welcome().await
    }

    async fn current_order(&self) -> Result<String, OrderError> {
        let snapshot = self.client.snapshot(self.session).await?;
        Ok(self.order_text(&snapshot))
    }

    fn menu_text(&self, snapshot: &OrderSnapshot) -> String {
        let menu = MenuView::build(&self.catalog, snapshot);
        if menu.is_hidden() {
            return CLOSED.to_string();
        }
        render_menu(&menu)
    }

    fn order_text(&self, snapshot: &OrderSnapshot) -> String {
        if !snapshot.accepts_orders() {
            return format!("{THANK_YOU}\n{CLOSED}");
        }
        render_summary(&SummaryView::build(snapshot))
    }
}

fn rejection_text(rejection: Rejection) -> String {
    format!("{rejection}.\n")
}
