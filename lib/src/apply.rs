//! Pushing settings to the host rendering surface and scene.

use crate::settings::{CameraSettings, GraphicsSettings, QualitySettings};
use graphic_options_host::prelude::*;

/// The camera writes for `settings`. Blur is a scene object, not a camera property.
#[must_use]
pub fn camera_properties(settings: &CameraSettings) -> [CameraProperty; 7] {
    [
        CameraProperty::Bloom(settings.bloom),
        CameraProperty::FilmGrain(settings.film_grain),
        CameraProperty::AllowDynamicResolution(settings.dynamic_resolution),
        CameraProperty::AllowHdr(settings.hdr),
        CameraProperty::AllowMsaa(settings.msaa),
        CameraProperty::UseOcclusionCulling(settings.occlusion_culling),
        CameraProperty::UsePhysicalProperties(settings.physical_properties),
    ]
}

/// The quality writes for `settings`.
#[must_use]
pub fn quality_properties(settings: &QualitySettings) -> [QualityProperty; 31] {
    use QualityProperty as P;
    [
        P::AnisotropicFiltering(settings.anisotropic_filtering),
        P::AntiAliasing(settings.anti_aliasing),
        P::AsyncUploadBufferSize(settings.async_upload_buffer_size),
        P::AsyncUploadPersistentBuffer(settings.async_upload_persistent_buffer),
        P::AsyncUploadTimeSlice(settings.async_upload_time_slice),
        P::BillboardsFaceCameraPosition(settings.billboards_face_camera_position),
        P::LodBias(settings.lod_bias),
        P::MaximumLodLevel(settings.maximum_lod_level),
        P::ParticleRaycastBudget(settings.particle_raycast_budget),
        P::PixelLightCount(settings.pixel_light_count),
        P::RealtimeReflectionProbes(settings.realtime_reflection_probes),
        P::ResolutionScalingFixedDpiFactor(settings.resolution_scaling_fixed_dpi_factor),
        P::ShadowCascade2Split(settings.shadow_cascade_2_split),
        P::ShadowCascade4Split(settings.shadow_cascade_4_split),
        P::ShadowCascades(settings.shadow_cascades),
        P::ShadowDistance(settings.shadow_distance),
        P::ShadowmaskMode(settings.shadowmask_mode),
        P::ShadowNearPlaneOffset(settings.shadow_near_plane_offset),
        P::ShadowProjection(settings.shadow_projection),
        P::ShadowResolution(settings.shadow_resolution),
        P::Shadows(settings.shadows),
        P::SkinWeights(settings.skin_weights),
        P::SoftParticles(settings.soft_particles),
        P::SoftVegetation(settings.soft_vegetation),
        P::StreamingMipmapsActive(settings.streaming_mipmaps_active),
        P::StreamingMipmapsAddAllCameras(settings.streaming_mipmaps_add_all_cameras),
        P::StreamingMipmapsMaxFileIoRequests(settings.streaming_mipmaps_max_file_io_requests),
        P::StreamingMipmapsMaxLevelReduction(settings.streaming_mipmaps_max_level_reduction),
        P::StreamingMipmapsMemoryBudget(settings.streaming_mipmaps_memory_budget),
        P::StreamingMipmapsRenderersPerFrame(settings.streaming_mipmaps_renderers_per_frame),
        P::VSyncCount(settings.vsync_count),
    ]
}

#[inline]
pub fn apply_camera<S: CameraSurface + ?Sized>(surface: &mut S, settings: &CameraSettings) {
    for property in camera_properties(settings) {
        surface.set_camera(property);
    }
}

#[inline]
pub fn apply_quality<S: QualitySurface + ?Sized>(surface: &mut S, settings: &QualitySettings) {
    for property in quality_properties(settings) {
        surface.set_quality(property);
    }
}

/// Push the full settings bundle to `surface` as a camera batch followed by a quality batch.
pub fn apply_all<S: RenderSurface + ?Sized>(surface: &mut S, settings: &GraphicsSettings) {
    tracing::trace!("applying graphic options");
    apply_camera(surface, &settings.camera);
    apply_quality(surface, &settings.quality);
}

/// Set the active state of the blur object in `scene`, returning whether it was found.
pub fn apply_blur<G: SceneGraph + ?Sized>(scene: &mut G, object_name: &str, enabled: bool) -> bool {
    let scene_name = scene.scene_name().to_owned();
    match scene.find_object_mut(object_name) {
        Some(object) => {
            object.set_active(enabled);
            tracing::debug!("{scene_name}/{object_name} active = {enabled}");
            true
        }
        None => {
            tracing::debug!("no {object_name} in scene {scene_name}");
            false
        }
    }
}
