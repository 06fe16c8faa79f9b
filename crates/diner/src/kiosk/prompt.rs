//! The payment prompt: collects the three payment fields one line at a time.
//!
//! The prompt is adapter state only. Opening, filling or cancelling it never touches the
//! order; only a completed form is sent on to be finalized.

use crate::model::{PaymentDetails, PaymentField};
use crate::render::{digits_only, mask_card_number};

/// Result of feeding one line to the prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum PromptStep {
    /// The customer typed `cancel`.
    Cancelled,
    /// The customer typed `quit`. Nothing entered so far is kept.
    Quit,
    /// The line was stored; ask for the next field. Carries the stored value when it
    /// differs from what was typed, so it can be echoed back.
    Next { echo: Option<String> },
    /// Every field has been entered.
    Complete(PaymentDetails),
}

#[derive(Debug, Clone)]
pub struct PaymentPrompt {
    details: PaymentDetails,
    current: Option<PaymentField>,
}

impl Default for PaymentPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentPrompt {
    pub fn new() -> Self {
        Self {
            details: PaymentDetails::default(),
            current: Some(PaymentField::CardholderName),
        }
    }

    /// The field being asked for.
    pub fn current(&self) -> Option<PaymentField> {
        self.current
    }

    pub fn label(&self) -> &'static str {
        match self.current {
            Some(PaymentField::CardholderName) => "Enter your name: ",
            Some(PaymentField::CardNumber) => "Enter card number: ",
            Some(PaymentField::Cvv) => "Enter CVV: ",
            None => "",
        }
    }

    /// Reopens the form at `field`, keeping what was already entered elsewhere.
    pub fn resume_at(&mut self, field: PaymentField) {
        self.current = Some(field);
    }

    pub fn feed(&mut self, line: &str) -> PromptStep {
        let word = line.trim();
        if word.eq_ignore_ascii_case("cancel") {
            return PromptStep::Cancelled;
        }
        if word.eq_ignore_ascii_case("quit") || word.eq_ignore_ascii_case("exit") {
            return PromptStep::Quit;
        }
        let Some(field) = self.current else {
            return PromptStep::Complete(self.details.clone());
        };

        let echo = match field {
            PaymentField::CardholderName => {
                self.details.cardholder_name = line.trim().to_string();
                None
            }
            PaymentField::CardNumber => {
                let masked = mask_card_number(line);
                let echo = (!masked.is_empty() && masked != line.trim()).then(|| masked.clone());
                self.details.card_number = masked;
                echo
            }
            PaymentField::Cvv => {
                self.details.cvv = digits_only(line);
                None
            }
        };

        self.current = self.next_missing(field);
        match self.current {
            Some(_) => PromptStep::Next { echo },
            None => PromptStep::Complete(self.details.clone()),
        }
    }

    // Walks forward from `after` to the next field still blank. A field left blank
    // on purpose is still submitted so the rejection can name it.
    fn next_missing(&self, after: PaymentField) -> Option<PaymentField> {
        let order = [PaymentField::CardholderName, PaymentField::CardNumber, PaymentField::Cvv];
        let start = order.iter().position(|f| *f == after)? + 1;
        order[start..].iter().copied().find(|f| self.value(*f).is_empty())
    }

    fn value(&self, field: PaymentField) -> &str {
        match field {
            PaymentField::CardholderName => &self.details.cardholder_name,
            PaymentField::CardNumber => &self.details.card_number,
            PaymentField::Cvv => &self.details.cvv,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_fields_in_order() {
        let mut prompt = PaymentPrompt::new();
        assert_eq!(prompt.label(), "Enter your name: ");
        assert_eq!(prompt.feed("Ada Lovelace"), PromptStep::Next { echo: None });
        assert_eq!(prompt.current(), Some(PaymentField::CardNumber));
        assert_eq!(
            prompt.feed("1234567890123456"),
            PromptStep::Next {
                echo: Some("1234 5678 9012 3456".into())
            }
        );
        assert_eq!(
            prompt.feed("12a3"),
            PromptStep::Complete(PaymentDetails::new("Ada Lovelace", "1234 5678 9012 3456", "123"))
        );
    }

    #[test]
    fn test_cancel_at_any_field() {
        let mut prompt = PaymentPrompt::new();
        prompt.feed("Ada");
        assert_eq!(prompt.feed(" Cancel "), PromptStep::Cancelled);
    }

    #[test]
    fn test_quit_is_never_taken_as_a_name() {
        let mut prompt = PaymentPrompt::new();
        assert_eq!(prompt.feed("quit"), PromptStep::Quit);
        assert_eq!(prompt.current(), Some(PaymentField::CardholderName));
        prompt.feed("Ada");
        assert_eq!(prompt.feed("EXIT"), PromptStep::Quit);
    }

    #[test]
    fn test_already_masked_number_is_not_echoed() {
        let mut prompt = PaymentPrompt::new();
        prompt.feed("Ada");
        assert_eq!(prompt.feed("4242 4242"), PromptStep::Next { echo: None });
    }

    #[test]
    fn test_resume_only_asks_for_the_missing_field() {
        let mut prompt = PaymentPrompt::new();
        prompt.feed("Ada");
        prompt.feed("no digits here");
        let step = prompt.feed("321");
        assert_eq!(step, PromptStep::Complete(PaymentDetails::new("Ada", "", "321")));

        prompt.resume_at(PaymentField::CardNumber);
        assert_eq!(prompt.label(), "Enter card number: ");
        assert_eq!(
            prompt.feed("4242"),
            PromptStep::Complete(PaymentDetails::new("Ada", "4242", "321"))
        );
    }
}
