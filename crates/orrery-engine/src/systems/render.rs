use crate::core::registry::BodyRegistry;
use crate::renderer::instance::{BodyBuffer, BodyInstance};

/// Build the body buffer from the registry, one instance per body in slot
/// order. Call after kinematics so positions are current.
pub fn build_body_buffer(
    registry: &BodyRegistry,
    focused: Option<usize>,
    sky_rotation: f32,
    buffer: &mut BodyBuffer,
) {
    buffer.clear();
    buffer.sky_rotation = sky_rotation;

    for (slot, body) in registry.all().enumerate() {
        let look = &body.appearance;
        buffer.push(BodyInstance::new(
            body.transform.position,
            look.radius,
            body.transform.spin,
            [look.color.r, look.color.g, look.color.b],
            look.emissive,
            body.kind.code(),
            focused == Some(slot),
        ));
    }
}
