use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The caller as resolved by the identity collaborator.
/// Only the fields this service needs are decoded; the rest of the
/// identity payload is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallerIdentity {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}
