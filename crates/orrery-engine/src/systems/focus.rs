use glam::{Vec2, Vec3};
use serde::Serialize;
use crate::components::body::{Body, BodyKind, Orbit};
use crate::core::pick::PickResolver;
use crate::core::registry::BodyRegistry;
use crate::extensions::transition::{OffsetPolicy, TransitionController};
use crate::renderer::camera::Camera3D;

/// Descriptive record handed to the UI panel for the focused body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FocusInfo {
    pub id: String,
    pub name: String,
    pub kind: BodyKind,
    pub orbit: Option<Orbit>,
    pub radius: f32,
    pub position: Vec3,
    pub metadata: serde_json::Value,
}

impl FocusInfo {
    pub fn from_body(body: &Body) -> Self {
        Self {
            id: body.id.clone(),
            name: body.name.clone(),
            kind: body.kind,
            orbit: body.orbit,
            radius: body.appearance.radius,
            position: body.transform.position,
            metadata: body.metadata.clone(),
        }
    }
}

/// Case-insensitive name search.
///
/// An exact name match wins anywhere in the registry; otherwise the first
/// body (in registration order) whose name contains the query. The query is
/// trimmed first and an empty query matches nothing.
pub fn find_by_name(registry: &BodyRegistry, query: &str) -> Option<usize> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    let mut first_partial = None;
    for (slot, body) in registry.all().enumerate() {
        let name = body.name.to_lowercase();
        if name == needle {
            return Some(slot);
        }
        if first_partial.is_none() && name.contains(&needle) {
            first_partial = Some(slot);
        }
    }
    first_partial
}

/// Turns pick and search requests into camera flights and remembers which
/// body is in focus.
#[derive(Debug, Clone, Default)]
pub struct SelectionCoordinator {
    focused: Option<usize>,
    policy: OffsetPolicy,
}

impl SelectionCoordinator {
    pub fn new(policy: OffsetPolicy) -> Self {
        Self {
            focused: None,
            policy,
        }
    }

    /// Handle a click at a normalized pointer position.
    ///
    /// A click inside a UI exclusion region is ignored entirely. A click on
    /// empty space clears the focus but leaves the camera where it is.
    pub fn select_at(
        &mut self,
        ndc: Vec2,
        registry: &BodyRegistry,
        picker: &PickResolver,
        camera: &Camera3D,
        transitions: &mut TransitionController,
    ) -> Option<usize> {
        if picker.is_excluded(ndc) {
            return None;
        }
        match picker.pick(registry, camera, ndc) {
            Some(hit) => self.focus_slot(hit.slot, registry, camera, transitions),
            None => {
                self.focused = None;
                None
            }
        }
    }

    /// Handle a search box query. A miss leaves the current focus in place.
    pub fn select_by_name(
        &mut self,
        query: &str,
        registry: &BodyRegistry,
        camera: &Camera3D,
        transitions: &mut TransitionController,
    ) -> Option<usize> {
        match find_by_name(registry, query) {
            Some(slot) => self.focus_slot(slot, registry, camera, transitions),
            None => {
                log::debug!("no body matches '{}'", query.trim());
                None
            }
        }
    }

    /// Focus a body by registry slot and start flying the camera to it.
    pub fn focus_slot(
        &mut self,
        slot: usize,
        registry: &BodyRegistry,
        camera: &Camera3D,
        transitions: &mut TransitionController,
    ) -> Option<usize> {
        let body = registry.get(slot)?;
        transitions.start_toward(
            camera,
            body.transform.position,
            body.appearance.radius,
            &self.policy,
        );
        log::debug!("focus -> {} ({})", body.name, body.id);
        self.focused = Some(slot);
        Some(slot)
    }

    /// Drop the focus without touching the camera.
    pub fn clear(&mut self) {
        self.focused = None;
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn focused_body<'a>(&self, registry: &'a BodyRegistry) -> Option<&'a Body> {
        self.focused.and_then(|slot| registry.get(slot))
    }

    /// UI record for the focused body, built from its current state.
    pub fn focused_info(&self, registry: &BodyRegistry) -> Option<FocusInfo> {
        self.focused_body(registry).map(FocusInfo::from_body)
    }

    pub fn policy(&self) -> &OffsetPolicy {
        &self.policy
    }
}
