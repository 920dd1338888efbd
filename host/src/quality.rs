//! Global quality properties of the host renderer.

use crate::vector::Vec3;
use serde::{Deserialize, Serialize};

/// Anisotropic texture filtering mode.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
pub enum AnisotropicFiltering {
    #[default]
    Disable,
    Enable,
    ForceEnable,
}

/// Which realtime shadows are rendered.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
pub enum ShadowQuality {
    #[default]
    Disable,
    HardOnly,
    All,
}

/// Default resolution of shadow maps.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
pub enum ShadowResolution {
    #[default]
    Low,
    Medium,
    High,
    VeryHigh,
}

/// Directional light shadow projection.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
pub enum ShadowProjection {
    CloseFit,
    #[default]
    StableFit,
}

/// Rendering mode of the shadowmask.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
pub enum ShadowmaskMode {
    #[default]
    Shadowmask,
    DistanceShadowmask,
}

/// Maximum number of bones per vertex taken into account during skinning.
///
/// `None` is a valid engine value but is never offered in the menu.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
pub enum SkinWeights {
    None,
    OneBone,
    #[default]
    TwoBones,
    FourBones,
    Unlimited,
}

/// A single write to the quality sub-surface.
#[derive(Debug, Copy, Clone, PartialEq)]
#[must_use]
pub enum QualityProperty {
    AnisotropicFiltering(AnisotropicFiltering),
    AntiAliasing(i32),
    AsyncUploadBufferSize(i32),
    AsyncUploadPersistentBuffer(bool),
    AsyncUploadTimeSlice(i32),
    BillboardsFaceCameraPosition(bool),
    LodBias(f32),
    MaximumLodLevel(i32),
    ParticleRaycastBudget(i32),
    PixelLightCount(i32),
    RealtimeReflectionProbes(bool),
    ResolutionScalingFixedDpiFactor(f32),
    ShadowCascade2Split(f32),
    ShadowCascade4Split(Vec3),
    ShadowCascades(i32),
    ShadowDistance(f32),
    ShadowmaskMode(ShadowmaskMode),
    ShadowNearPlaneOffset(f32),
    ShadowProjection(ShadowProjection),
    ShadowResolution(ShadowResolution),
    Shadows(ShadowQuality),
    SkinWeights(SkinWeights),
    SoftParticles(bool),
    SoftVegetation(bool),
    StreamingMipmapsActive(bool),
    StreamingMipmapsAddAllCameras(bool),
    StreamingMipmapsMaxFileIoRequests(i32),
    StreamingMipmapsMaxLevelReduction(i32),
    StreamingMipmapsMemoryBudget(f32),
    StreamingMipmapsRenderersPerFrame(i32),
    VSyncCount(i32),
}

/// The quality properties as last written to a surface.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
#[must_use]
pub struct QualityState {
    pub anisotropic_filtering: AnisotropicFiltering,
    pub anti_aliasing: i32,
    pub async_upload_buffer_size: i32,
    pub async_upload_persistent_buffer: bool,
    pub async_upload_time_slice: i32,
    pub billboards_face_camera_position: bool,
    pub lod_bias: f32,
    pub maximum_lod_level: i32,
    pub particle_raycast_budget: i32,
    pub pixel_light_count: i32,
    pub realtime_reflection_probes: bool,
    pub resolution_scaling_fixed_dpi_factor: f32,
    pub shadow_cascade_2_split: f32,
    pub shadow_cascade_4_split: Vec3,
    pub shadow_cascades: i32,
    pub shadow_distance: f32,
    pub shadowmask_mode: ShadowmaskMode,
    pub shadow_near_plane_offset: f32,
    pub shadow_projection: ShadowProjection,
    pub shadow_resolution: ShadowResolution,
    pub shadows: ShadowQuality,
    pub skin_weights: SkinWeights,
    pub soft_particles: bool,
    pub soft_vegetation: bool,
    pub streaming_mipmaps_active: bool,
    pub streaming_mipmaps_add_all_cameras: bool,
    pub streaming_mipmaps_max_file_io_requests: i32,
    pub streaming_mipmaps_max_level_reduction: i32,
    pub streaming_mipmaps_memory_budget: f32,
    pub streaming_mipmaps_renderers_per_frame: i32,
    pub vsync_count: i32,
}

impl QualityState {
    /// Write a single property.
    pub fn set(&mut self, property: QualityProperty) {
        use QualityProperty as P;
        match property {
            P::AnisotropicFiltering(value) => self.anisotropic_filtering = value,
            P::AntiAliasing(value) => self.anti_aliasing = value,
            P::AsyncUploadBufferSize(value) => self.async_upload_buffer_size = value,
            P::AsyncUploadPersistentBuffer(value) => self.async_upload_persistent_buffer = value,
            P::AsyncUploadTimeSlice(value) => self.async_upload_time_slice = value,
            P::BillboardsFaceCameraPosition(value) => self.billboards_face_camera_position = value,
            P::LodBias(value) => self.lod_bias = value,
            P::MaximumLodLevel(value) => self.maximum_lod_level = value,
            P::ParticleRaycastBudget(value) => self.particle_raycast_budget = value,
            P::PixelLightCount(value) => self.pixel_light_count = value,
            P::RealtimeReflectionProbes(value) => self.realtime_reflection_probes = value,
            P::ResolutionScalingFixedDpiFactor(value) => {
                self.resolution_scaling_fixed_dpi_factor = value;
            }
            P::ShadowCascade2Split(value) => self.shadow_cascade_2_split = value,
            P::ShadowCascade4Split(value) => self.shadow_cascade_4_split = value,
            P::ShadowCascades(value) => self.shadow_cascades = value,
            P::ShadowDistance(value) => self.shadow_distance = value,
            P::ShadowmaskMode(value) => self.shadowmask_mode = value,
            P::ShadowNearPlaneOffset(value) => self.shadow_near_plane_offset = value,
            P::ShadowProjection(value) => self.shadow_projection = value,
            P::ShadowResolution(value) => self.shadow_resolution = value,
            P::Shadows(value) => self.shadows = value,
            P::SkinWeights(value) => self.skin_weights = value,
            P::SoftParticles(value) => self.soft_particles = value,
            P::SoftVegetation(value) => self.soft_vegetation = value,
            P::StreamingMipmapsActive(value) => self.streaming_mipmaps_active = value,
            P::StreamingMipmapsAddAllCameras(value) => {
                self.streaming_mipmaps_add_all_cameras = value;
            }
            P::StreamingMipmapsMaxFileIoRequests(value) => {
                self.streaming_mipmaps_max_file_io_requests = value;
            }
            P::StreamingMipmapsMaxLevelReduction(value) => {
                self.streaming_mipmaps_max_level_reduction = value;
            }
            P::StreamingMipmapsMemoryBudget(value) => self.streaming_mipmaps_memory_budget = value,
            P::StreamingMipmapsRenderersPerFrame(value) => {
                self.streaming_mipmaps_renderers_per_frame = value;
            }
            P::VSyncCount(value) => self.vsync_count = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_writes_single_field() {
        let mut state = QualityState::default();
        state.set(QualityProperty::Shadows(ShadowQuality::All));
        state.set(QualityProperty::VSyncCount(2));
        assert_eq!(state.shadows, ShadowQuality::All);
        assert_eq!(state.vsync_count, 2);
        assert_eq!(
            QualityState {
                shadows: ShadowQuality::All,
                vsync_count: 2,
                ..Default::default()
            },
            state
        );
    }
}
