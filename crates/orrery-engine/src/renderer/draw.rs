/// Explicit per-draw parameters.
///
/// Every draw the host executes is fully described by one `DrawRecord`:
/// program, geometry, bound textures and all matrices. Nothing is carried
/// over from the previous draw, so records can be executed in any host
/// without shared uniform state.

use bytemuck::{Pod, Zeroable};
use glam::{Mat3, Mat4};

use crate::api::types::ResourceId;
use crate::assets::registry::AssetRegistry;

/// Texture units available to a single draw.
pub const MAX_TEXTURE_UNITS: usize = 4;

/// Geometry a draw rasterizes. Built-in shapes are generated by the host and
/// are always available; loaded meshes go through the asset registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    Cube,
    /// UV sphere.
    Sphere,
    /// Flat torus used for planetary rings.
    Torus,
    Loaded(ResourceId),
}

impl Geometry {
    fn kind_code(self) -> f32 {
        match self {
            Geometry::Cube => 0.0,
            Geometry::Sphere => 1.0,
            Geometry::Torus => 2.0,
            Geometry::Loaded(_) => 3.0,
        }
    }

    fn resource(self) -> Option<ResourceId> {
        match self {
            Geometry::Loaded(id) => Some(id),
            _ => None,
        }
    }
}

/// Wire format for one draw. 88 floats = 352 bytes.
///
/// Matrices are column-major. The normal matrix is stored as three padded
/// columns (`mat3x3<f32>` uniform layout).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct DrawRecord {
    pub program: f32,
    pub mesh_kind: f32,
    pub mesh_resource: f32,
    /// 0 for a plain draw, otherwise the instance count.
    pub instance_count: f32,
    /// Resource ids per texture unit, -1 for an empty unit.
    pub textures: [f32; MAX_TEXTURE_UNITS],
    /// Program-defined selector (e.g. which body is being shaded).
    pub variant: f32,
    /// Program-defined animation phase in [0, 1).
    pub phase: f32,
    pub _pad: [f32; 2],
    pub projection: [f32; 16],
    pub view: [f32; 16],
    pub model: [f32; 16],
    pub normal: [f32; 12],
    /// Extra per-draw matrix (applied after the instance transform for
    /// instanced draws, identity otherwise).
    pub aux: [f32; 16],
}

impl DrawRecord {
    pub const FLOATS: usize = 88;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

fn pack_mat3(m: Mat3) -> [f32; 12] {
    let c = m.to_cols_array();
    [
        c[0], c[1], c[2], 0.0,
        c[3], c[4], c[5], 0.0,
        c[6], c[7], c[8], 0.0,
    ]
}

/// Builder for a single draw.
#[derive(Debug, Clone)]
pub struct DrawCall {
    pub program: u32,
    pub geometry: Geometry,
    pub instances: u32,
    pub textures: [Option<ResourceId>; MAX_TEXTURE_UNITS],
    pub projection: Mat4,
    pub view: Mat4,
    pub model: Mat4,
    pub normal: Mat3,
    pub aux: Mat4,
    pub variant: f32,
    pub phase: f32,
}

impl DrawCall {
    pub fn new(program: u32, geometry: Geometry) -> Self {
        Self {
            program,
            geometry,
            instances: 0,
            textures: [None; MAX_TEXTURE_UNITS],
            projection: Mat4::IDENTITY,
            view: Mat4::IDENTITY,
            model: Mat4::IDENTITY,
            normal: Mat3::IDENTITY,
            aux: Mat4::IDENTITY,
            variant: -1.0,
            phase: 0.0,
        }
    }

    pub fn with_camera(mut self, projection: Mat4, view: Mat4) -> Self {
        self.projection = projection;
        self.view = view;
        self
    }

    pub fn with_model(mut self, model: Mat4) -> Self {
        self.model = model;
        self
    }

    pub fn with_normal(mut self, normal: Mat3) -> Self {
        self.normal = normal;
        self
    }

    pub fn with_aux(mut self, aux: Mat4) -> Self {
        self.aux = aux;
        self
    }

    /// Bind a texture to a unit. Units past `MAX_TEXTURE_UNITS` are ignored.
    pub fn with_texture(mut self, unit: usize, id: ResourceId) -> Self {
        if let Some(slot) = self.textures.get_mut(unit) {
            *slot = Some(id);
        }
        self
    }

    pub fn with_instances(mut self, count: u32) -> Self {
        self.instances = count;
        self
    }

    pub fn with_variant(mut self, variant: f32) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_phase(mut self, phase: f32) -> Self {
        self.phase = phase;
        self
    }

    /// Every externally loaded resource this draw depends on.
    pub fn resources(&self) -> impl Iterator<Item = ResourceId> + '_ {
        self.textures.iter().flatten().copied().chain(self.geometry.resource())
    }

    pub fn to_record(&self) -> DrawRecord {
        let mut textures = [-1.0; MAX_TEXTURE_UNITS];
        for (dst, src) in textures.iter_mut().zip(self.textures.iter()) {
            *dst = ResourceId::encode(*src);
        }
        DrawRecord {
            program: self.program as f32,
            mesh_kind: self.geometry.kind_code(),
            mesh_resource: ResourceId::encode(self.geometry.resource()),
            instance_count: self.instances as f32,
            textures,
            variant: self.variant,
            phase: self.phase,
            _pad: [0.0; 2],
            projection: self.projection.to_cols_array(),
            view: self.view.to_cols_array(),
            model: self.model.to_cols_array(),
            normal: pack_mat3(self.normal),
            aux: self.aux.to_cols_array(),
        }
    }
}

/// What happened to a submitted draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    Queued,
    /// A resource is still loading (or failed); the draw is skipped this frame.
    Deferred,
    /// The list is full; the draw is dropped.
    Overflow,
}

/// Ordered draws for one frame. Submission order is execution order.
pub struct DrawList {
    records: Vec<DrawRecord>,
    capacity: usize,
    deferred: u32,
}

impl DrawList {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            capacity,
            deferred: 0,
        }
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.deferred = 0;
    }

    /// Queue a draw if all of its resources are ready.
    pub fn submit(&mut self, call: &DrawCall, assets: &AssetRegistry) -> Submission {
        if !call.resources().all(|id| assets.is_ready(id)) {
            self.deferred += 1;
            return Submission::Deferred;
        }
        if self.records.len() >= self.capacity {
            log::warn!("draw list full ({}), dropping program {}", self.capacity, call.program);
            return Submission::Overflow;
        }
        self.records.push(call.to_record());
        Submission::Queued
    }

    pub fn records(&self) -> &[DrawRecord] {
        &self.records
    }

    pub fn draw_count(&self) -> u32 {
        self.records.len() as u32
    }

    /// Draws skipped this frame for missing resources.
    pub fn deferred_count(&self) -> u32 {
        self.deferred
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Raw pointer to record data for SharedArrayBuffer reads.
    pub fn records_ptr(&self) -> *const f32 {
        self.records.as_ptr() as *const f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::manifest::AssetManifest;
    use glam::Vec3;

    fn registry() -> AssetRegistry {
        let json = r#"{
            "textures": [ { "name": "rock", "kind": "image", "path": "rock.png" } ],
            "meshes": [ { "name": "rock_mesh", "path": "rock.obj" } ]
        }"#;
        AssetRegistry::from_manifest(&AssetManifest::from_json(json).unwrap())
    }

    #[test]
    fn draw_record_is_88_floats() {
        assert_eq!(std::mem::size_of::<DrawRecord>(), DrawRecord::FLOATS * 4);
    }

    #[test]
    fn record_packs_matrices_column_major() {
        let call = DrawCall::new(3, Geometry::Sphere)
            .with_model(Mat4::from_translation(Vec3::new(4.0, 5.0, 6.0)))
            .with_variant(2.0);
        let rec = call.to_record();
        assert_eq!(rec.program, 3.0);
        assert_eq!(rec.mesh_kind, 1.0);
        assert_eq!(rec.mesh_resource, -1.0);
        assert_eq!(&rec.model[12..15], &[4.0, 5.0, 6.0]);
        assert_eq!(rec.normal, [1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        assert_eq!(rec.variant, 2.0);
        assert_eq!(rec.textures, [-1.0; 4]);
    }

    #[test]
    fn draw_waits_for_its_resources() {
        let mut assets = registry();
        let rock = assets.lookup("rock").unwrap();
        let mesh = assets.lookup("rock_mesh").unwrap();
        let call = DrawCall::new(0, Geometry::Loaded(mesh)).with_texture(0, rock);

        let mut list = DrawList::with_capacity(4);
        assert_eq!(list.submit(&call, &assets), Submission::Deferred);
        assets.mark_ready(rock).unwrap();
        assert_eq!(list.submit(&call, &assets), Submission::Deferred);
        assets.mark_ready(mesh).unwrap();
        assert_eq!(list.submit(&call, &assets), Submission::Queued);
        assert_eq!(list.draw_count(), 1);
        assert_eq!(list.deferred_count(), 2);
    }

    #[test]
    fn builtin_geometry_needs_nothing() {
        let assets = registry();
        let mut list = DrawList::with_capacity(1);
        assert_eq!(list.submit(&DrawCall::new(0, Geometry::Cube), &assets), Submission::Queued);
        assert_eq!(list.submit(&DrawCall::new(0, Geometry::Cube), &assets), Submission::Overflow);
    }

    #[test]
    fn texture_unit_out_of_range_is_ignored() {
        let call = DrawCall::new(0, Geometry::Cube).with_texture(9, ResourceId(1));
        assert_eq!(call.resources().count(), 0);
    }
}
