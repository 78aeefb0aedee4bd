use std::fmt;

use serde::{Deserialize, Serialize};

/// How an entitlement was granted.
///
/// The wire encodes the kind as a small integer. Values the SDK does not
/// know yet round-trip through [`EntitlementKind::Unknown`] so a record
/// patched by a newer gateway build never loses information.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum EntitlementKind {
    /// Bought as a one-time purchase.
    Purchase,
    /// Granted by a platform premium subscription.
    PremiumSubscription,
    /// Gifted by the application developer.
    DeveloperGift,
    /// Purchased through test-mode billing.
    TestModePurchase,
    /// Claimed for free.
    FreePurchase,
    /// Gifted by another user.
    UserGift,
    /// Granted alongside a premium purchase.
    PremiumPurchase,
    /// Granted by an application subscription.
    ApplicationSubscription,
    /// A wire value this SDK build does not know.
    Unknown(u8),
}

impl EntitlementKind {
    /// The wire integer for this kind.
    pub const fn code(&self) -> u8 {
        match self {
            Self::Purchase => 1,
            Self::PremiumSubscription => 2,
            Self::DeveloperGift => 3,
            Self::TestModePurchase => 4,
            Self::FreePurchase => 5,
            Self::UserGift => 6,
            Self::PremiumPurchase => 7,
            Self::ApplicationSubscription => 8,
            Self::Unknown(code) => *code,
        }
    }
}

impl From<u8> for EntitlementKind {
    fn from(code: u8) -> Self {
        match code {
            1 => Self::Purchase,
            2 => Self::PremiumSubscription,
            3 => Self::DeveloperGift,
            4 => Self::TestModePurchase,
            5 => Self::FreePurchase,
            6 => Self::UserGift,
            7 => Self::PremiumPurchase,
            8 => Self::ApplicationSubscription,
            other => Self::Unknown(other),
        }
    }
}

impl From<EntitlementKind> for u8 {
    fn from(kind: EntitlementKind) -> Self {
        kind.code()
    }
}

impl fmt::Display for EntitlementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Purchase => write!(f, "Purchase"),
            Self::PremiumSubscription => write!(f, "PremiumSubscription"),
            Self::DeveloperGift => write!(f, "DeveloperGift"),
            Self::TestModePurchase => write!(f, "TestModePurchase"),
            Self::FreePurchase => write!(f, "FreePurchase"),
            Self::UserGift => write!(f, "UserGift"),
            Self::PremiumPurchase => write!(f, "PremiumPurchase"),
            Self::ApplicationSubscription => write!(f, "ApplicationSubscription"),
            Self::Unknown(code) => write!(f, "Unknown({code})"),
        }
    }
}
