use super::ClaimsBundle;

/// Role carried in the `role` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Contractor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Contractor => "contractor",
        }
    }

    pub fn parse(s: &str) -> Option<Role> {
        match s.to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "contractor" => Some(Role::Contractor),
            _ => None,
        }
    }
}

/// Account as seen through the identity provider.
///
/// The password is write-only and never read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub uid: String,
    pub email: Option<String>,
    pub claims: ClaimsBundle,
    pub disabled: bool,
}
