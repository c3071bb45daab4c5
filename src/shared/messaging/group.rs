//! Group Types
//!
//! Request/response bodies for group creation.

use serde::{Deserialize, Serialize};

use crate::shared::{GroupId, SharedError, UserId};

/// Request body for `POST /group/create`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateGroupRequest {
    #[serde(default)]
    pub name: String,
    /// Users to add besides the creator; not checked for existence
    #[serde(default)]
    pub members: Vec<UserId>,
}

impl CreateGroupRequest {
    /// The trimmed group name, rejected when empty
    pub fn group_name(&self) -> Result<&str, SharedError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(SharedError::validation("name", "Group name required"));
        }
        Ok(name)
    }
}

/// Response after creating a group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGroupResponse {
    pub success: bool,
    pub group_id: GroupId,
    pub name: String,
}
