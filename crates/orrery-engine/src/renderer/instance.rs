use bytemuck::{Pod, Zeroable};

/// Per-body render data read by the host renderer straight out of wasm memory.
/// 12 floats = 48 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct BodyInstance {
    /// World position.
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Visual radius in world units.
    pub radius: f32,
    /// Spin angle in radians, [0, 2π).
    pub spin: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// HDR glow multiplier.
    pub emissive: f32,
    /// `BodyKind::code()`.
    pub kind: f32,
    /// 1.0 for the focused body, else 0.0.
    pub focused: f32,
    _pad: f32,
}

impl BodyInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn new(
        position: glam::Vec3,
        radius: f32,
        spin: f32,
        color: [f32; 3],
        emissive: f32,
        kind: f32,
        focused: bool,
    ) -> Self {
        Self {
            x: position.x,
            y: position.y,
            z: position.z,
            radius,
            spin,
            r: color[0],
            g: color[1],
            b: color[2],
            emissive,
            kind,
            focused: if focused { 1.0 } else { 0.0 },
            _pad: 0.0,
        }
    }
}

/// Snapshot of every body for the current frame. Instance `i` is registry
/// slot `i`.
pub struct BodyBuffer {
    pub instances: Vec<BodyInstance>,
    /// Backdrop rotation in radians.
    pub sky_rotation: f32,
}

impl BodyBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            sky_rotation: 0.0,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: BodyInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for host-side reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for BodyBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_instance_is_12_floats() {
        assert_eq!(std::mem::size_of::<BodyInstance>(), BodyInstance::STRIDE_BYTES);
        assert_eq!(BodyInstance::FLOATS, 12);
    }

    #[test]
    fn float_view_matches_field_order() {
        let inst = BodyInstance::new(
            glam::Vec3::new(1.0, 2.0, 3.0),
            4.0,
            0.5,
            [0.1, 0.2, 0.3],
            2.0,
            1.0,
            true,
        );
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&inst));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 0.5, 0.1, 0.2, 0.3, 2.0, 1.0, 1.0, 0.0]);
    }
}
