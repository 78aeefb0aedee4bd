use serde::{Deserialize, Serialize};

use accord_types::{Snowflake, Timestamp};

use crate::error::PremiumResult;
use crate::kind::EntitlementKind;

/// A partial entitlement payload.
///
/// Every field is individually optional: `None` means the key was absent
/// from the payload ("unknown/unchanged"), never "set to null". Timestamps
/// are parsed while decoding, so a payload carrying malformed RFC 3339 text
/// fails here and never reaches a record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementPatch {
    /// The id of the SKU this entitlement grants access to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku_id: Option<Snowflake>,

    /// The id of the user that is granted access.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Snowflake>,

    /// The id of the guild that is granted access.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,

    /// The id of the parent application.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<Snowflake>,

    /// How the entitlement was granted.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<EntitlementKind>,

    /// Whether the entitlement was deleted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,

    /// The instant the entitlement becomes valid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<Timestamp>,

    /// The instant the entitlement stops being valid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<Timestamp>,
}

impl EntitlementPatch {
    /// Decode a payload from JSON text.
    pub fn from_json(text: &str) -> PremiumResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Returns `true` if every field is absent.
    pub fn is_empty(&self) -> bool {
        self.sku_id.is_none()
            && self.user_id.is_none()
            && self.guild_id.is_none()
            && self.application_id.is_none()
            && self.kind.is_none()
            && self.deleted.is_none()
            && self.starts_at.is_none()
            && self.ends_at.is_none()
    }
}
