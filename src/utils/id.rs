use uuid::Uuid;

/// Mint an opaque record id. Assigned once at creation, never reassigned.
pub fn mint_id() -> String {
    Uuid::new_v4().to_string()
}
