use tracing::debug;

use accord_cache::Guild;
use accord_resolve::User;
use accord_types::{Snowflake, Timestamp};

use crate::context::Context;
use crate::error::{PremiumError, PremiumResult};
use crate::kind::EntitlementKind;
use crate::patch::EntitlementPatch;

/// An access grant tying a user or a guild to a SKU.
///
/// Records are created once from a wire payload and afterwards mutated only
/// by [`apply`](Self::apply). Deletion never removes a record; the gateway
/// marks it with `deleted` instead.
///
/// `guild_id`, `starts_at`, and `ends_at` are null until some payload sets
/// them, and once set they are never unset. An entitlement without a billing
/// period (both instants null) is a test entitlement.
#[derive(Clone, Debug)]
pub struct Entitlement {
    ctx: Context,
    id: Snowflake,
    sku_id: Option<Snowflake>,
    user_id: Option<Snowflake>,
    guild_id: Option<Snowflake>,
    application_id: Option<Snowflake>,
    kind: Option<EntitlementKind>,
    deleted: bool,
    starts_at: Option<Timestamp>,
    ends_at: Option<Timestamp>,
}

impl Entitlement {
    /// Build a record from its initial wire payload.
    ///
    /// The id is assigned here and never changes; everything else goes
    /// through the same merge path as later partial payloads.
    pub fn from_wire(ctx: Context, id: Snowflake, data: &EntitlementPatch) -> Self {
        let mut record = Self {
            ctx,
            id,
            sku_id: None,
            user_id: None,
            guild_id: None,
            application_id: None,
            kind: None,
            deleted: false,
            starts_at: None,
            ends_at: None,
        };
        record.apply(data);
        record
    }

    /// Merge a partial payload into the record.
    ///
    /// Present fields overwrite the current value; absent fields leave it
    /// untouched, so a field set by an earlier payload is never reset to
    /// null by a later one that omits it. Applying the same payload twice
    /// is a no-op the second time.
    pub fn apply(&mut self, patch: &EntitlementPatch) {
        if let Some(sku_id) = patch.sku_id {
            self.sku_id = Some(sku_id);
        }
        if let Some(user_id) = patch.user_id {
            self.user_id = Some(user_id);
        }
        if let Some(guild_id) = patch.guild_id {
            self.guild_id = Some(guild_id);
        }
        if let Some(application_id) = patch.application_id {
            self.application_id = Some(application_id);
        }
        if let Some(kind) = patch.kind {
            self.kind = Some(kind);
        }
        if let Some(deleted) = patch.deleted {
            self.deleted = deleted;
        }
        if let Some(starts_at) = patch.starts_at {
            self.starts_at = Some(starts_at);
        }
        if let Some(ends_at) = patch.ends_at {
            self.ends_at = Some(ends_at);
        }
        debug!(id = %self.id, empty = patch.is_empty(), "entitlement patch applied");
    }

    /// The entitlement's identifier.
    pub fn id(&self) -> Snowflake {
        self.id
    }

    /// The id of the SKU this entitlement grants access to.
    pub fn sku_id(&self) -> Option<Snowflake> {
        self.sku_id
    }

    /// The id of the user that is granted access.
    pub fn user_id(&self) -> Option<Snowflake> {
        self.user_id
    }

    /// The id of the guild that is granted access, if this is a guild-level
    /// grant.
    pub fn guild_id(&self) -> Option<Snowflake> {
        self.guild_id
    }

    /// The id of the parent application.
    pub fn application_id(&self) -> Option<Snowflake> {
        self.application_id
    }

    /// How the entitlement was granted.
    pub fn kind(&self) -> Option<EntitlementKind> {
        self.kind
    }

    /// Whether the entitlement was deleted.
    pub fn deleted(&self) -> bool {
        self.deleted
    }

    /// The instant the entitlement becomes valid. Null for test entitlements.
    pub fn starts_at(&self) -> Option<Timestamp> {
        self.starts_at
    }

    /// The instant the entitlement stops being valid. Null for test
    /// entitlements.
    pub fn ends_at(&self) -> Option<Timestamp> {
        self.ends_at
    }

    /// Whether the entitlement is active right now.
    ///
    /// Evaluated against the current wall clock on every call; callers must
    /// not cache the result across time.
    pub fn is_active(&self) -> bool {
        self.is_active_at(Timestamp::now())
    }

    /// Whether the entitlement is active at the given instant.
    pub fn is_active_at(&self, now: Timestamp) -> bool {
        !self.deleted && self.ends_at.map_or(true, |ends| ends.is_after(now))
    }

    /// Whether this grant is held by a user. Complementary to
    /// [`is_guild_subscription`](Self::is_guild_subscription).
    pub fn is_user_subscription(&self) -> bool {
        self.guild_id.is_none()
    }

    /// Whether this grant is held by a guild.
    pub fn is_guild_subscription(&self) -> bool {
        self.guild_id.is_some()
    }

    /// The guild that holds this grant, if it is cached locally.
    ///
    /// A pure cache read: `None` means either "user-level grant" or "guild
    /// not observed locally yet", and callers cannot tell the two apart
    /// from this return value alone.
    pub fn guild(&self) -> Option<Guild> {
        self.ctx.guilds().get(self.guild_id?)
    }

    /// Fetch the user that holds this grant.
    ///
    /// Goes to the resolver on every call; nothing is cached or deduplicated
    /// here, and resolver failures are surfaced as-is.
    pub async fn fetch_user(&self) -> PremiumResult<User> {
        let user_id = self.user_id.ok_or(PremiumError::MissingUserId)?;
        let user = self.ctx.users().fetch(user_id).await?;
        Ok(user)
    }
}
