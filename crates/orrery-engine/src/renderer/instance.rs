use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use crate::error::EngineError;

/// Per-instance static transform read by the instanced draw path.
/// 16 floats = 64 bytes, column-major (the order WebGPU vertex attributes
/// expect for a `mat4x4<f32>` split over four `vec4` locations).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct InstanceTransform {
    pub cols: [f32; 16],
}

impl InstanceTransform {
    pub const FLOATS: usize = 16;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn from_mat4(m: Mat4) -> Self {
        Self { cols: m.to_cols_array() }
    }

    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_cols_array(&self.cols)
    }
}

/// Fixed-capacity buffer of instance transforms.
///
/// Filled once, then frozen: the host uploads it as an immutable vertex
/// buffer, so it must never grow or be rewritten after the first fill.
pub struct InstanceBuffer {
    instances: Vec<InstanceTransform>,
    capacity: usize,
    frozen: bool,
}

impl InstanceBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::new(),
            capacity,
            frozen: false,
        }
    }

    /// Fill the buffer in one shot and freeze it.
    pub fn fill(&mut self, transforms: impl IntoIterator<Item = Mat4>) -> Result<usize, EngineError> {
        if self.frozen {
            return Err(EngineError::InstancesFrozen);
        }
        let staged: Vec<InstanceTransform> = transforms
            .into_iter()
            .map(InstanceTransform::from_mat4)
            .collect();
        if staged.len() > self.capacity {
            return Err(EngineError::Capacity {
                what: "instance",
                requested: staged.len(),
                capacity: self.capacity,
            });
        }
        self.instances = staged;
        self.frozen = true;
        Ok(self.instances.len())
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn as_slice(&self) -> &[InstanceTransform] {
        &self.instances
    }

    /// Flat float view, 16 floats per instance.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Raw pointer to instance data for SharedArrayBuffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn instance_transform_is_16_floats() {
        assert_eq!(std::mem::size_of::<InstanceTransform>(), 64);
        assert_eq!(InstanceTransform::FLOATS, 16);
    }

    #[test]
    fn mat4_layout_is_column_major() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let t = InstanceTransform::from_mat4(m);
        assert_eq!(&t.cols[12..15], &[1.0, 2.0, 3.0]);
        assert_eq!(t.to_mat4(), m);
    }

    #[test]
    fn fill_freezes_buffer() {
        let mut buf = InstanceBuffer::with_capacity(4);
        let n = buf.fill(vec![Mat4::IDENTITY; 3]).unwrap();
        assert_eq!(n, 3);
        assert!(buf.is_frozen());
        assert_eq!(buf.as_floats().len(), 48);
        assert!(matches!(buf.fill(vec![Mat4::IDENTITY]), Err(EngineError::InstancesFrozen)));
        assert_eq!(buf.instance_count(), 3);
    }

    #[test]
    fn overflow_is_rejected_without_partial_write() {
        let mut buf = InstanceBuffer::with_capacity(2);
        let err = buf.fill(vec![Mat4::IDENTITY; 3]).unwrap_err();
        assert!(matches!(err, EngineError::Capacity { requested: 3, capacity: 2, .. }));
        assert_eq!(buf.instance_count(), 0);
        assert!(!buf.is_frozen());
    }
}
