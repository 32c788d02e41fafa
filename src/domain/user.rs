use uuid::Uuid;

/// Profile data returned by the user service.
///
/// Every field may legitimately be empty: the profile endpoint can yield no
/// data for a fresh account, and callers are expected to tolerate that.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserProfile {
    pub user_id: String,
    pub street: String,
    pub zip_code: String,
    pub state: String,
    pub country: String,
    /// Free-form address line. Feeds the shipping *city* when a draft order
    /// is built; the mismatch is a known quirk of the profile schema.
    pub address: String,
    pub card_number: String,
    pub card_holder: String,
    pub card_security_number: String,
}

/// Shipping address built once per checkout session.
#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub id: Uuid,
    pub street: String,
    pub zip_code: String,
    pub state: String,
    pub country: String,
    pub city: String,
}
