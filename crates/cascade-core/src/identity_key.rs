/// Storage-safe key naming one user's durable state record.
///
/// Derived from the caller's stable identity string (typically an email
/// address) by rewriting the two characters that are unsafe in storage
/// keys: `.` and `@` both become `_`. Nothing else is rewritten, so the
/// mapping is not injective: `a.b@x` and `a@b@x` collide. Acceptable
/// for identities that are well-formed email addresses.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityKey(String);

impl IdentityKey {
    /// Normalize a raw identity string into a key.
    pub fn from_identity(raw: &str) -> Self {
        Self(raw.replace(['.', '@'], "_"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the durable record for this key.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.0)
    }
}

impl std::fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
