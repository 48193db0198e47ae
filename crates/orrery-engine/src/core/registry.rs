use std::collections::HashMap;
use crate::components::body::{Body, Transform};
use crate::error::RegistryError;

/// Deepest allowed parent chain (sun -> planet -> moon).
pub const MAX_PARENT_DEPTH: usize = 2;

/// Insertion-ordered body storage with exact-id lookup.
///
/// Membership is append-only: bodies are registered during setup (or as a
/// catalog streams in) and never removed. A parent must be registered before
/// its children, so insertion order is also a valid update order.
#[derive(Debug, Default)]
pub struct BodyRegistry {
    bodies: Vec<Body>,
    index: HashMap<String, usize>,
    /// Resolved parent slot for each body.
    parents: Vec<Option<usize>>,
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with a specific body capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bodies: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            parents: Vec::with_capacity(capacity),
        }
    }

    /// Validate and add a body. Returns its slot in insertion order.
    pub fn register(&mut self, body: Body) -> Result<usize, RegistryError> {
        if self.index.contains_key(&body.id) {
            return Err(RegistryError::DuplicateId { id: body.id });
        }

        if let Some(orbit) = &body.orbit {
            if let Err(reason) = orbit.validate() {
                return Err(RegistryError::InvalidOrbit { id: body.id, reason });
            }
        } else if !body.transform.position.is_finite() {
            return Err(RegistryError::InvalidPosition { id: body.id });
        }

        let radius = body.appearance.radius;
        if !radius.is_finite() || radius < 0.0 {
            return Err(RegistryError::InvalidRadius { id: body.id, radius });
        }

        let parent = match &body.parent {
            Some(parent_id) => {
                let Some(&slot) = self.index.get(parent_id) else {
                    return Err(RegistryError::UnknownParent {
                        id: body.id.clone(),
                        parent: parent_id.clone(),
                    });
                };
                let depth = self.depth_of(slot) + 1;
                if depth > MAX_PARENT_DEPTH {
                    return Err(RegistryError::ParentTooDeep {
                        id: body.id,
                        depth,
                        max: MAX_PARENT_DEPTH,
                    });
                }
                Some(slot)
            }
            None => None,
        };

        let slot = self.bodies.len();
        self.index.insert(body.id.clone(), slot);
        self.bodies.push(body);
        self.parents.push(parent);
        Ok(slot)
    }

    /// Exact, case-sensitive lookup by id.
    pub fn find(&self, id: &str) -> Option<&Body> {
        self.index.get(id).map(|&slot| &self.bodies[slot])
    }

    /// Slot of the body with the given id.
    pub fn slot_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Body at an insertion-order slot.
    pub fn get(&self, slot: usize) -> Option<&Body> {
        self.bodies.get(slot)
    }

    /// Iterate over all bodies in registration order.
    pub fn all(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    /// Slot of this body's parent, if it has one.
    pub fn parent_slot(&self, slot: usize) -> Option<usize> {
        self.parents.get(slot).copied().flatten()
    }

    /// Number of ancestors above a slot.
    fn depth_of(&self, slot: usize) -> usize {
        let mut depth = 0;
        let mut cursor = self.parent_slot(slot);
        while let Some(parent) = cursor {
            depth += 1;
            cursor = self.parent_slot(parent);
        }
        depth
    }

    /// Mutable transform access for the kinematics pass.
    pub(crate) fn transform_mut(&mut self, slot: usize) -> Option<&mut Transform> {
        self.bodies.get_mut(slot).map(|b| &mut b.transform)
    }

    /// Number of registered bodies.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
