use std::fmt::Display;

/// The three fields of the payment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentField {
    CardholderName,
    CardNumber,
    Cvv,
}

impl Display for PaymentField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentField::CardholderName => write!(f, "name"),
            PaymentField::CardNumber => write!(f, "card number"),
            PaymentField::Cvv => write!(f, "CVV"),
        }
    }
}

/// What the customer typed into the payment form.
///
/// Only presence is checked. There is no format check, no Luhn check and no charge.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PaymentDetails {
    pub cardholder_name: String,
    pub card_number: String,
    pub cvv: String,
}

impl PaymentDetails {
    pub fn new(
        cardholder_name: impl Into<String>,
        card_number: impl Into<String>,
        cvv: impl Into<String>,
    ) -> Self {
        Self {
            cardholder_name: cardholder_name.into(),
            card_number: card_number.into(),
            cvv: cvv.into(),
        }
    }

    /// First field that is empty or whitespace only, in form order.
    pub fn first_blank(&self) -> Option<PaymentField> {
        [
            (PaymentField::CardholderName, &self.cardholder_name),
            (PaymentField::CardNumber, &self.card_number),
            (PaymentField::Cvv, &self.cvv),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }
}

// Card data stays out of the logs.
impl std::fmt::Debug for PaymentDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentDetails")
            .field("cardholder_name", &self.cardholder_name)
            .field("card_number", &"<redacted>")
            .field("cvv", &"<redacted>")
            .finish()
    }
}
