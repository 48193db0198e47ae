use thiserror::Error;

/// Reasons a body can be refused by the registry.
///
/// All of these are setup-time failures: the offending body is not stored,
/// every previously registered body is left as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    #[error("body id '{id}' is already registered")]
    DuplicateId { id: String },

    #[error("body '{id}' has an invalid orbit: {reason}")]
    InvalidOrbit { id: String, reason: String },

    #[error("body '{id}' has an invalid visual radius {radius}")]
    InvalidRadius { id: String, radius: f32 },

    #[error("body '{id}' has a non-finite static position")]
    InvalidPosition { id: String },

    #[error("body '{id}' references parent '{parent}' which is not registered")]
    UnknownParent { id: String, parent: String },

    #[error("body '{id}' would sit {depth} levels below a root (max {max})")]
    ParentTooDeep { id: String, depth: usize, max: usize },
}

impl RegistryError {
    /// Id of the body that was rejected.
    pub fn body_id(&self) -> &str {
        match self {
            RegistryError::DuplicateId { id }
            | RegistryError::InvalidOrbit { id, .. }
            | RegistryError::InvalidRadius { id, .. }
            | RegistryError::InvalidPosition { id }
            | RegistryError::UnknownParent { id, .. }
            | RegistryError::ParentTooDeep { id, .. } => id,
        }
    }
}
