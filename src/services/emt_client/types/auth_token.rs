/// Token state for an EMT session. `Invalid` marks rejected credentials and
/// is checked by the update methods before any request goes out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthToken {
    #[default]
    Unset,
    Invalid,
    Valid(String),
}

impl AuthToken {
    pub fn is_valid(&self) -> bool {
        matches!(self, AuthToken::Valid(_))
    }
}
