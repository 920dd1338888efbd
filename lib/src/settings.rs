//! The persisted settings record.

use crate::setting::{SettingKey, SettingValue};
use graphic_options_host::prelude::*;
use serde::{Deserialize, Serialize};

/// Settings pushed to the main camera, plus the background blur toggle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[must_use]
pub struct CameraSettings {
    pub bloom: bool,
    pub blur: bool,
    pub dynamic_resolution: bool,
    pub film_grain: bool,
    pub hdr: bool,
    pub msaa: bool,
    pub occlusion_culling: bool,
    pub physical_properties: bool,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            bloom: true,
            blur: true,
            dynamic_resolution: false,
            film_grain: false,
            hdr: false,
            msaa: true,
            occlusion_culling: true,
            physical_properties: false,
        }
    }
}

/// Settings pushed to the global quality surface.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[must_use]
pub struct QualitySettings {
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

impl Default for QualitySettings {
    fn default() -> Self {
        Self {
            anisotropic_filtering: AnisotropicFiltering::Disable,
            anti_aliasing: 0,
            async_upload_buffer_size: 4,
            async_upload_persistent_buffer: true,
            async_upload_time_slice: 2,
            billboards_face_camera_position: false,
            lod_bias: 0.7,
            maximum_lod_level: 0,
            particle_raycast_budget: 96,
            pixel_light_count: 1,
            realtime_reflection_probes: false,
            resolution_scaling_fixed_dpi_factor: 1.0,
            shadow_cascade_2_split: 0.333_333_34,
            shadow_cascade_4_split: vec3!(0.066_666_67, 0.2, 0.466_666_67),
            shadow_cascades: 1,
            shadow_distance: 20.0,
            shadowmask_mode: ShadowmaskMode::Shadowmask,
            shadow_near_plane_offset: 2.0,
            shadow_projection: ShadowProjection::StableFit,
            shadow_resolution: ShadowResolution::Low,
            shadows: ShadowQuality::Disable,
            skin_weights: SkinWeights::TwoBones,
            soft_particles: false,
            soft_vegetation: false,
            streaming_mipmaps_active: false,
            streaming_mipmaps_add_all_cameras: true,
            streaming_mipmaps_max_file_io_requests: 1024,
            streaming_mipmaps_max_level_reduction: 2,
            streaming_mipmaps_memory_budget: 512.0,
            streaming_mipmaps_renderers_per_frame: 512,
            vsync_count: 1,
        }
    }
}

/// Every graphic option, as persisted between sessions.
#[derive(Default, Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[must_use]
pub struct GraphicsSettings {
    pub camera: CameraSettings,
    pub quality: QualitySettings,
}

impl settings_loader::Settings for GraphicsSettings {}

impl GraphicsSettings {
    /// The compiled-in default of a setting.
    pub fn default_value(key: SettingKey) -> SettingValue {
        Self::default().value(key)
    }

    /// Read a single setting.
    pub fn value(&self, key: SettingKey) -> SettingValue {
        use SettingKey as K;
        let (camera, quality) = (&self.camera, &self.quality);
        match key {
            K::Bloom => camera.bloom.into(),
            K::Blur => camera.blur.into(),
            K::DynamicResolution => camera.dynamic_resolution.into(),
            K::FilmGrain => camera.film_grain.into(),
            K::Hdr => camera.hdr.into(),
            K::Msaa => camera.msaa.into(),
            K::OcclusionCulling => camera.occlusion_culling.into(),
            K::PhysicalProperties => camera.physical_properties.into(),
            K::AnisotropicFiltering => quality.anisotropic_filtering.into(),
            K::AntiAliasing => quality.anti_aliasing.into(),
            K::AsyncUploadBufferSize => quality.async_upload_buffer_size.into(),
            K::AsyncUploadPersistentBuffer => quality.async_upload_persistent_buffer.into(),
            K::AsyncUploadTimeSlice => quality.async_upload_time_slice.into(),
            K::BillboardsFaceCameraPosition => quality.billboards_face_camera_position.into(),
            K::LodBias => quality.lod_bias.into(),
            K::MaximumLodLevel => quality.maximum_lod_level.into(),
            K::ParticleRaycastBudget => quality.particle_raycast_budget.into(),
            K::PixelLightCount => quality.pixel_light_count.into(),
            K::RealtimeReflectionProbes => quality.realtime_reflection_probes.into(),
            K::ResolutionScalingFixedDpiFactor => {
                quality.resolution_scaling_fixed_dpi_factor.into()
            }
            K::ShadowCascade2Split => quality.shadow_cascade_2_split.into(),
            K::ShadowCascade4Split => quality.shadow_cascade_4_split.into(),
            K::ShadowCascades => quality.shadow_cascades.into(),
            K::ShadowDistance => quality.shadow_distance.into(),
            K::ShadowmaskMode => quality.shadowmask_mode.into(),
            K::ShadowNearPlaneOffset => quality.shadow_near_plane_offset.into(),
            K::ShadowProjection => quality.shadow_projection.into(),
            K::ShadowResolution => quality.shadow_resolution.into(),
            K::Shadows => quality.shadows.into(),
            K::SkinWeights => quality.skin_weights.into(),
            K::SoftParticles => quality.soft_particles.into(),
            K::SoftVegetation => quality.soft_vegetation.into(),
            K::StreamingMipmapsActive => quality.streaming_mipmaps_active.into(),
            K::StreamingMipmapsAddAllCameras => quality.streaming_mipmaps_add_all_cameras.into(),
            K::StreamingMipmapsMaxFileIoRequests => {
                quality.streaming_mipmaps_max_file_io_requests.into()
            }
            K::StreamingMipmapsMaxLevelReduction => {
                quality.streaming_mipmaps_max_level_reduction.into()
            }
            K::StreamingMipmapsMemoryBudget => quality.streaming_mipmaps_memory_budget.into(),
            K::StreamingMipmapsRenderersPerFrame => {
                quality.streaming_mipmaps_renderers_per_frame.into()
            }
            K::VSyncCount => quality.vsync_count.into(),
        }
    }

    /// Write a single setting without checking its domain.
    ///
    /// Returns `false`, leaving the record unchanged, when `value` has the wrong type for `key`.
    pub(crate) fn write(&mut self, key: SettingKey, value: SettingValue) -> bool {
        use SettingKey as K;
        use SettingValue as V;
        let (camera, quality) = (&mut self.camera, &mut self.quality);
        match (key, value) {
            (K::Bloom, V::Bool(value)) => camera.bloom = value,
            (K::Blur, V::Bool(value)) => camera.blur = value,
            (K::DynamicResolution, V::Bool(value)) => camera.dynamic_resolution = value,
            (K::FilmGrain, V::Bool(value)) => camera.film_grain = value,
            (K::Hdr, V::Bool(value)) => camera.hdr = value,
            (K::Msaa, V::Bool(value)) => camera.msaa = value,
            (K::OcclusionCulling, V::Bool(value)) => camera.occlusion_culling = value,
            (K::PhysicalProperties, V::Bool(value)) => camera.physical_properties = value,
            (K::AnisotropicFiltering, V::AnisotropicFiltering(value)) => {
                quality.anisotropic_filtering = value;
            }
            (K::AntiAliasing, V::Int(value)) => quality.anti_aliasing = value,
            (K::AsyncUploadBufferSize, V::Int(value)) => quality.async_upload_buffer_size = value,
            (K::AsyncUploadPersistentBuffer, V::Bool(value)) => {
                quality.async_upload_persistent_buffer = value;
            }
            (K::AsyncUploadTimeSlice, V::Int(value)) => quality.async_upload_time_slice = value,
            (K::BillboardsFaceCameraPosition, V::Bool(value)) => {
                quality.billboards_face_camera_position = value;
            }
            (K::LodBias, V::Float(value)) => quality.lod_bias = value,
            (K::MaximumLodLevel, V::Int(value)) => quality.maximum_lod_level = value,
            (K::ParticleRaycastBudget, V::Int(value)) => quality.particle_raycast_budget = value,
            (K::PixelLightCount, V::Int(value)) => quality.pixel_light_count = value,
            (K::RealtimeReflectionProbes, V::Bool(value)) => {
                quality.realtime_reflection_probes = value;
            }
            (K::ResolutionScalingFixedDpiFactor, V::Float(value)) => {
                quality.resolution_scaling_fixed_dpi_factor = value;
            }
            (K::ShadowCascade2Split, V::Float(value)) => quality.shadow_cascade_2_split = value,
            (K::ShadowCascade4Split, V::Vec3(value)) => quality.shadow_cascade_4_split = value,
            (K::ShadowCascades, V::Int(value)) => quality.shadow_cascades = value,
            (K::ShadowDistance, V::Float(value)) => quality.shadow_distance = value,
            (K::ShadowmaskMode, V::ShadowmaskMode(value)) => quality.shadowmask_mode = value,
            (K::ShadowNearPlaneOffset, V::Float(value)) => {
                quality.shadow_near_plane_offset = value;
            }
            (K::ShadowProjection, V::ShadowProjection(value)) => quality.shadow_projection = value,
            (K::ShadowResolution, V::ShadowResolution(value)) => quality.shadow_resolution = value,
            (K::Shadows, V::Shadows(value)) => quality.shadows = value,
            (K::SkinWeights, V::SkinWeights(value)) => quality.skin_weights = value,
            (K::SoftParticles, V::Bool(value)) => quality.soft_particles = value,
            (K::SoftVegetation, V::Bool(value)) => quality.soft_vegetation = value,
            (K::StreamingMipmapsActive, V::Bool(value)) => quality.streaming_mipmaps_active = value,
            (K::StreamingMipmapsAddAllCameras, V::Bool(value)) => {
                quality.streaming_mipmaps_add_all_cameras = value;
            }
            (K::StreamingMipmapsMaxFileIoRequests, V::Int(value)) => {
                quality.streaming_mipmaps_max_file_io_requests = value;
            }
            (K::StreamingMipmapsMaxLevelReduction, V::Int(value)) => {
                quality.streaming_mipmaps_max_level_reduction = value;
            }
            (K::StreamingMipmapsMemoryBudget, V::Float(value)) => {
                quality.streaming_mipmaps_memory_budget = value;
            }
            (K::StreamingMipmapsRenderersPerFrame, V::Int(value)) => {
                quality.streaming_mipmaps_renderers_per_frame = value;
            }
            (K::VSyncCount, V::Int(value)) => quality.vsync_count = value,
            _ => return false,
        }
        true
    }
}
