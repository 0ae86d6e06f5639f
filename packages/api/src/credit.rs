//! Stored payment cards.

use serde::{Deserialize, Serialize};

use crate::form::FormFields;

/// A payment card on file with the portal.
///
/// The portal keeps (and echoes back) only the card number; issuer and
/// expiry are not part of the account record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreditCard {
    pub number: String,
}

impl CreditCard {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
        }
    }
}

impl FormFields for CreditCard {
    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![("number", self.number.clone())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_through_json() {
        let card = CreditCard::new("9440 1337 0042 7777");
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, r#"{"number":"9440 1337 0042 7777"}"#);
        let back: CreditCard = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
    }
}
