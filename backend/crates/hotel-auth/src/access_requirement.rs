/// What a protected endpoint demands beyond a valid token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessRequirement {
    /// Any active identity with a valid token
    Authenticated,
    /// The identity must own the resource with this id
    Owner(String),
}
