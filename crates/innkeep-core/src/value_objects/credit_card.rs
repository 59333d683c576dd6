//! CreditCard - payment instrument value object
//!
//! The raw card number is kept internal; accessors and Debug output only
//! ever expose the masked form.

use std::fmt;

use crate::error::DomainError;

/// A validated credit card.
///
/// No serde derives on purpose: card data never leaves the process in
/// serialized form.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CreditCard {
    card_number: String,
    card_holder: String,
    expiry_date: String,
    cvv: String,
}

impl CreditCard {
    /// Create a card. Whitespace inside the card number is stripped before
    /// validation; the number must then be 13-19 digits, the expiry must
    /// match MM/YY, and the CVV must be 3-4 digits.
    pub fn new(
        card_number: impl Into<String>,
        card_holder: impl Into<String>,
        expiry_date: impl Into<String>,
        cvv: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let card_number: String = card_number
            .into()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if !is_valid_card_number(&card_number) {
            return Err(DomainError::InvalidCardNumber);
        }

        let card_holder = card_holder.into();
        let card_holder = card_holder.trim();
        if card_holder.is_empty() {
            return Err(DomainError::EmptyField("card holder"));
        }

        let expiry_date = expiry_date.into();
        let expiry_date = expiry_date.trim();
        if !is_valid_expiry_date(expiry_date) {
            return Err(DomainError::InvalidExpiryDate);
        }

        let cvv = cvv.into();
        let cvv = cvv.trim();
        if !is_valid_cvv(cvv) {
            return Err(DomainError::InvalidCvv);
        }

        Ok(Self {
            card_number,
            card_holder: card_holder.to_string(),
            expiry_date: expiry_date.to_string(),
            cvv: cvv.to_string(),
        })
    }

    /// The card number with all but the last four digits masked
    pub fn masked_number(&self) -> String {
        let len = self.card_number.len();
        format!("{}{}", "*".repeat(len - 4), &self.card_number[len - 4..])
    }

    #[inline]
    pub fn card_holder(&self) -> &str {
        &self.card_holder
    }

    #[inline]
    pub fn expiry_date(&self) -> &str {
        &self.expiry_date
    }
}

fn is_valid_card_number(number: &str) -> bool {
    (13..=19).contains(&number.len()) && number.bytes().all(|b| b.is_ascii_digit())
}

fn is_valid_expiry_date(expiry: &str) -> bool {
    let bytes = expiry.as_bytes();
    bytes.len() == 5
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[2] == b'/'
        && bytes[3].is_ascii_digit()
        && bytes[4].is_ascii_digit()
}

fn is_valid_cvv(cvv: &str) -> bool {
    (3..=4).contains(&cvv.len()) && cvv.bytes().all(|b| b.is_ascii_digit())
}

// Manual Debug: never print the raw number or the CVV
impl fmt::Debug for CreditCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreditCard")
            .field("card_holder", &self.card_holder)
            .field("masked", &self.masked_number())
            .field("expiry_date", &self.expiry_date)
            .finish_non_exhaustive()
    }
}
