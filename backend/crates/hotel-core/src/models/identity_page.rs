use crate::Identity;

/// One page of active identities plus the total number of active identities
#[derive(Debug, Clone)]
pub struct IdentityPage {
    pub items: Vec<Identity>,
    pub total: u64,
}
