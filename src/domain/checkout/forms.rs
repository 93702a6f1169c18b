//! Checkout form records.

use serde::{Deserialize, Serialize};

/// Shipping address fields, all required non-blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingDetails {
    /// Recipient first name.
    pub first_name: String,

    /// Recipient last name.
    pub last_name: String,

    /// Contact email.
    pub email: String,

    /// Contact phone number.
    pub phone: String,

    /// Street address.
    pub address: String,

    /// City.
    pub city: String,

    /// State or region.
    pub state: String,

    /// Postal code.
    pub pincode: String,
}

impl ShippingDetails {
    /// The first blank required field, in form order, if any. Whitespace-only
    /// values count as blank.
    pub(crate) fn missing_field(&self) -> Option<&'static str> {
        let fields: [(&'static str, &str); 8] = [
            ("first name", &self.first_name),
            ("last name", &self.last_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("pincode", &self.pincode),
        ];

        fields
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
    }
}

/// Card fields, required non-blank when paying by card.
///
/// Used only for validation at submission time; never stored on the order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDetails {
    /// Card number.
    pub number: String,

    /// Expiry, `MM/YY`.
    pub expiry: String,

    /// Card verification value.
    pub cvv: String,
}

impl CardDetails {
    fn is_complete(&self) -> bool {
        [&self.number, &self.expiry, &self.cvv]
            .iter()
            .all(|value| !value.trim().is_empty())
    }
}

/// Payment selector submitted with the checkout form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentMethod {
    /// Pay on delivery; nothing further to validate.
    CashOnDelivery,

    /// Card payment with details to validate.
    Card(CardDetails),
}

impl PaymentMethod {
    /// The storable kind of this method, shorn of card details.
    #[must_use]
    pub fn kind(&self) -> PaymentKind {
        match self {
            Self::CashOnDelivery => PaymentKind::CashOnDelivery,
            Self::Card(_) => PaymentKind::Card,
        }
    }

    /// Whether a card-based method is missing any required detail.
    pub(crate) fn missing_detail(&self) -> bool {
        match self {
            Self::CashOnDelivery => false,
            Self::Card(details) => !details.is_complete(),
        }
    }
}

/// Payment method as recorded on the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentKind {
    /// Cash on delivery.
    #[serde(rename = "cod")]
    CashOnDelivery,

    /// Card payment.
    #[serde(rename = "card")]
    Card,
}
