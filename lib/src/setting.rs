//! Setting keys, values and their legal domains.

use crate::{ordinal::Choices, tables};
use derive_more::{From, TryInto};
use graphic_options_host::prelude::*;
use std::fmt;

/// Every setting exposed by the menu, in declaration order.
///
/// Declaration order is the menu order and the order bindings are polled in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[must_use]
pub enum SettingKey {
    // Camera
    Bloom,
    Blur,
    DynamicResolution,
    FilmGrain,
    Hdr,
    Msaa,
    OcclusionCulling,
    PhysicalProperties,
    // Quality
    AnisotropicFiltering,
    AntiAliasing,
    AsyncUploadBufferSize,
    AsyncUploadPersistentBuffer,
    AsyncUploadTimeSlice,
    BillboardsFaceCameraPosition,
    LodBias,
    MaximumLodLevel,
    ParticleRaycastBudget,
    PixelLightCount,
    RealtimeReflectionProbes,
    ResolutionScalingFixedDpiFactor,
    ShadowCascade2Split,
    ShadowCascade4Split,
    ShadowCascades,
    ShadowDistance,
    ShadowmaskMode,
    ShadowNearPlaneOffset,
    ShadowProjection,
    ShadowResolution,
    Shadows,
    SkinWeights,
    SoftParticles,
    SoftVegetation,
    StreamingMipmapsActive,
    StreamingMipmapsAddAllCameras,
    StreamingMipmapsMaxFileIoRequests,
    StreamingMipmapsMaxLevelReduction,
    StreamingMipmapsMemoryBudget,
    StreamingMipmapsRenderersPerFrame,
    VSyncCount,
}

impl SettingKey {
    pub const ALL: [SettingKey; 39] = {
        use SettingKey::*;
        [
            Bloom,
            Blur,
            DynamicResolution,
            FilmGrain,
            Hdr,
            Msaa,
            OcclusionCulling,
            PhysicalProperties,
            AnisotropicFiltering,
            AntiAliasing,
            AsyncUploadBufferSize,
            AsyncUploadPersistentBuffer,
            AsyncUploadTimeSlice,
            BillboardsFaceCameraPosition,
            LodBias,
            MaximumLodLevel,
            ParticleRaycastBudget,
            PixelLightCount,
            RealtimeReflectionProbes,
            ResolutionScalingFixedDpiFactor,
            ShadowCascade2Split,
            ShadowCascade4Split,
            ShadowCascades,
            ShadowDistance,
            ShadowmaskMode,
            ShadowNearPlaneOffset,
            ShadowProjection,
            ShadowResolution,
            Shadows,
            SkinWeights,
            SoftParticles,
            SoftVegetation,
            StreamingMipmapsActive,
            StreamingMipmapsAddAllCameras,
            StreamingMipmapsMaxFileIoRequests,
            StreamingMipmapsMaxLevelReduction,
            StreamingMipmapsMemoryBudget,
            StreamingMipmapsRenderersPerFrame,
            VSyncCount,
        ]
    };

    /// The persisted field name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        use SettingKey::*;
        match self {
            Bloom => "bloom",
            Blur => "blur",
            DynamicResolution => "dynamic_resolution",
            FilmGrain => "film_grain",
            Hdr => "hdr",
            Msaa => "msaa",
            OcclusionCulling => "occlusion_culling",
            PhysicalProperties => "physical_properties",
            AnisotropicFiltering => "anisotropic_filtering",
            AntiAliasing => "anti_aliasing",
            AsyncUploadBufferSize => "async_upload_buffer_size",
            AsyncUploadPersistentBuffer => "async_upload_persistent_buffer",
            AsyncUploadTimeSlice => "async_upload_time_slice",
            BillboardsFaceCameraPosition => "billboards_face_camera_position",
            LodBias => "lod_bias",
            MaximumLodLevel => "maximum_lod_level",
            ParticleRaycastBudget => "particle_raycast_budget",
            PixelLightCount => "pixel_light_count",
            RealtimeReflectionProbes => "realtime_reflection_probes",
            ResolutionScalingFixedDpiFactor => "resolution_scaling_fixed_dpi_factor",
            ShadowCascade2Split => "shadow_cascade_2_split",
            ShadowCascade4Split => "shadow_cascade_4_split",
            ShadowCascades => "shadow_cascades",
            ShadowDistance => "shadow_distance",
            ShadowmaskMode => "shadowmask_mode",
            ShadowNearPlaneOffset => "shadow_near_plane_offset",
            ShadowProjection => "shadow_projection",
            ShadowResolution => "shadow_resolution",
            Shadows => "shadows",
            SkinWeights => "skin_weights",
            SoftParticles => "soft_particles",
            SoftVegetation => "soft_vegetation",
            StreamingMipmapsActive => "streaming_mipmaps_active",
            StreamingMipmapsAddAllCameras => "streaming_mipmaps_add_all_cameras",
            StreamingMipmapsMaxFileIoRequests => "streaming_mipmaps_max_file_io_requests",
            StreamingMipmapsMaxLevelReduction => "streaming_mipmaps_max_level_reduction",
            StreamingMipmapsMemoryBudget => "streaming_mipmaps_memory_budget",
            StreamingMipmapsRenderersPerFrame => "streaming_mipmaps_renderers_per_frame",
            VSyncCount => "vsync_count",
        }
    }

    /// Look up a setting by its persisted field name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }

    /// Whether the setting belongs to the main camera rather than global quality.
    #[must_use]
    pub const fn is_camera(self) -> bool {
        (self as usize) <= (SettingKey::PhysicalProperties as usize)
    }

    /// The legal values of the setting.
    pub fn domain(self) -> Domain {
        use SettingKey::*;
        match self {
            Bloom
            | Blur
            | DynamicResolution
            | FilmGrain
            | Hdr
            | Msaa
            | OcclusionCulling
            | PhysicalProperties
            | AsyncUploadPersistentBuffer
            | BillboardsFaceCameraPosition
            | RealtimeReflectionProbes
            | SoftParticles
            | SoftVegetation
            | StreamingMipmapsActive
            | StreamingMipmapsAddAllCameras => Domain::Choice(&tables::TOGGLE),
            AnisotropicFiltering => Domain::Choice(&tables::ANISOTROPIC_FILTERING),
            AntiAliasing => Domain::Choice(&tables::ANTI_ALIASING),
            ShadowmaskMode => Domain::Choice(&tables::SHADOWMASK_MODE),
            ShadowProjection => Domain::Choice(&tables::SHADOW_PROJECTION),
            ShadowResolution => Domain::Choice(&tables::SHADOW_RESOLUTION),
            Shadows => Domain::Choice(&tables::SHADOWS),
            SkinWeights => Domain::Choice(&tables::SKIN_WEIGHTS),
            VSyncCount => Domain::Choice(&tables::VSYNC_COUNT),
            AsyncUploadBufferSize => Domain::Int { min: 2, max: 512 },
            AsyncUploadTimeSlice => Domain::Int { min: 1, max: 33 },
            MaximumLodLevel | ShadowCascades | StreamingMipmapsMaxLevelReduction => {
                Domain::Int { min: 0, max: 10 }
            }
            ParticleRaycastBudget => Domain::Int { min: 0, max: 1000 },
            PixelLightCount => Domain::Int { min: 0, max: 100 },
            StreamingMipmapsMaxFileIoRequests => Domain::Int { min: 0, max: 5120 },
            StreamingMipmapsRenderersPerFrame => Domain::Int { min: 0, max: 4096 },
            LodBias | ResolutionScalingFixedDpiFactor | ShadowNearPlaneOffset => {
                Domain::Float { min: 0.0, max: 10.0 }
            }
            ShadowCascade2Split => Domain::Float { min: 0.0, max: 1.0 },
            ShadowDistance => Domain::Float { min: 0.0, max: 100.0 },
            StreamingMipmapsMemoryBudget => Domain::Float {
                min: 0.0,
                max: 4096.0,
            },
            ShadowCascade4Split => Domain::Vec3 { min: 0.0, max: 1.0 },
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The value of a single setting.
#[derive(Debug, Copy, Clone, PartialEq, From, TryInto)]
#[must_use]
pub enum SettingValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    Vec3(Vec3),
    AnisotropicFiltering(AnisotropicFiltering),
    ShadowmaskMode(ShadowmaskMode),
    ShadowProjection(ShadowProjection),
    ShadowResolution(ShadowResolution),
    Shadows(ShadowQuality),
    SkinWeights(SkinWeights),
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Vec3(value) => write!(f, "{value}"),
            Self::AnisotropicFiltering(value) => write!(f, "{value:?}"),
            Self::ShadowmaskMode(value) => write!(f, "{value:?}"),
            Self::ShadowProjection(value) => write!(f, "{value:?}"),
            Self::ShadowResolution(value) => write!(f, "{value:?}"),
            Self::Shadows(value) => write!(f, "{value:?}"),
            Self::SkinWeights(value) => write!(f, "{value:?}"),
        }
    }
}

/// The legal values of a setting.
#[derive(Debug, Copy, Clone)]
#[must_use]
pub enum Domain {
    /// A closed set of values, edited with a horizontal option.
    Choice(&'static dyn Choices),
    /// An inclusive integer range, edited with a whole-number slider.
    Int { min: i32, max: i32 },
    /// An inclusive float range, edited with a slider.
    Float { min: f32, max: f32 },
    /// A vector whose components each lie in an inclusive range, edited with one slider per
    /// component.
    Vec3 { min: f32, max: f32 },
}

impl Domain {
    #[inline]
    #[must_use]
    pub fn choices(&self) -> Option<&'static dyn Choices> {
        match *self {
            Self::Choice(choices) => Some(choices),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Choice(_))
    }

    /// Slider bounds for numeric domains.
    #[must_use]
    pub fn range(&self) -> Option<(f32, f32)> {
        match *self {
            Self::Choice(_) => None,
            Self::Int { min, max } => Some((min as f32, max as f32)),
            Self::Float { min, max } | Self::Vec3 { min, max } => Some((min, max)),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_whole_numbers(&self) -> bool {
        matches!(self, Self::Int { .. })
    }

    /// Whether `value` has the type this domain holds.
    #[must_use]
    pub fn accepts(&self, value: SettingValue) -> bool {
        match (self, value) {
            (Self::Choice(choices), value) => choices.accepts(value),
            (Self::Int { .. }, SettingValue::Int(_))
            | (Self::Float { .. }, SettingValue::Float(_))
            | (Self::Vec3 { .. }, SettingValue::Vec3(_)) => true,
            _ => false,
        }
    }

    /// Whether `value` is a legal value of this domain.
    #[must_use]
    pub fn contains(&self, value: SettingValue) -> bool {
        match (*self, value) {
            (Self::Choice(choices), value) => choices.contains(value),
            (Self::Int { min, max }, SettingValue::Int(value)) => (min..=max).contains(&value),
            (Self::Float { min, max }, SettingValue::Float(value)) => (min..=max).contains(&value),
            (Self::Vec3 { min, max }, SettingValue::Vec3(value)) => value
                .to_array()
                .iter()
                .all(|component| (min..=max).contains(component)),
            _ => false,
        }
    }

    /// Bring `value` back into the domain: numbers are clamped, NaN and unknown choices fall back
    /// to `default`.
    pub fn sanitize(&self, value: SettingValue, default: SettingValue) -> SettingValue {
        match (*self, value, default) {
            (Self::Int { min, max }, SettingValue::Int(value), _) => {
                SettingValue::Int(value.clamp(min, max))
            }
            (Self::Float { min, max }, SettingValue::Float(value), SettingValue::Float(default)) => {
                SettingValue::Float(clamp_or(value, min, max, default))
            }
            (Self::Vec3 { min, max }, SettingValue::Vec3(value), SettingValue::Vec3(default)) => {
                let mut sanitized = value;
                for axis in Axis::ALL {
                    sanitized[axis] = clamp_or(value[axis], min, max, default[axis]);
                }
                SettingValue::Vec3(sanitized)
            }
            _ if self.contains(value) => value,
            _ => default,
        }
    }

    /// Convert a slider position into a value of this domain.
    ///
    /// The position is clamped into range and integral domains truncate toward zero. NaN yields
    /// `default`. For vector domains only `component` of `current` is replaced.
    pub(crate) fn slider_to_value(
        &self,
        position: f32,
        current: SettingValue,
        default: SettingValue,
        component: Option<Axis>,
    ) -> Option<SettingValue> {
        match (*self, component, current, default) {
            (Self::Int { min, max }, None, _, SettingValue::Int(default)) => {
                let value = if position.is_nan() {
                    default
                } else {
                    position.clamp(min as f32, max as f32) as i32
                };
                Some(SettingValue::Int(value))
            }
            (Self::Float { min, max }, None, _, SettingValue::Float(default)) => Some(
                SettingValue::Float(clamp_or(position, min, max, default)),
            ),
            (
                Self::Vec3 { min, max },
                Some(axis),
                SettingValue::Vec3(current),
                SettingValue::Vec3(default),
            ) => Some(SettingValue::Vec3(current.with_component(
                axis,
                clamp_or(position, min, max, default[axis]),
            ))),
            _ => None,
        }
    }

    /// Convert a value of this domain into a slider position.
    #[must_use]
    pub(crate) fn slider_position(value: SettingValue, component: Option<Axis>) -> Option<f32> {
        match (value, component) {
            (SettingValue::Int(value), None) => Some(value as f32),
            (SettingValue::Float(value), None) => Some(value),
            (SettingValue::Vec3(value), Some(axis)) => Some(value[axis]),
            _ => None,
        }
    }
}

fn clamp_or(value: f32, min: f32, max: f32, default: f32) -> f32 {
    if value.is_nan() {
        default
    } else {
        value.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_order() {
        assert_eq!(SettingKey::ALL.len(), 39);
        assert!(SettingKey::ALL.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(
            SettingKey::ALL.iter().filter(|key| key.is_camera()).count(),
            8
        );
        assert!(!SettingKey::AnisotropicFiltering.is_camera());
    }

    #[test]
    fn names_are_unique() {
        for key in SettingKey::ALL {
            assert_eq!(SettingKey::from_name(key.name()), Some(key));
        }
        assert_eq!(SettingKey::from_name("motion_blur"), None);
    }

    #[test]
    fn contains() {
        let domain = SettingKey::AsyncUploadTimeSlice.domain();
        assert!(domain.contains(SettingValue::Int(1)));
        assert!(domain.contains(SettingValue::Int(33)));
        assert!(!domain.contains(SettingValue::Int(34)));
        assert!(!domain.contains(SettingValue::Float(2.0)));
        assert!(!SettingKey::LodBias
            .domain()
            .contains(SettingValue::Float(f32::NAN)));
        assert!(!SettingKey::ShadowCascade4Split
            .domain()
            .contains(SettingValue::Vec3(vec3!(0.1, 1.5, 0.2))));
        assert!(SettingKey::AntiAliasing
            .domain()
            .contains(SettingValue::Int(8)));
        assert!(!SettingKey::AntiAliasing
            .domain()
            .contains(SettingValue::Int(3)));
    }

    #[test]
    fn sanitize() {
        let domain = SettingKey::ShadowDistance.domain();
        let default = SettingValue::Float(20.0);
        assert_eq!(
            domain.sanitize(SettingValue::Float(250.0), default),
            SettingValue::Float(100.0)
        );
        assert_eq!(domain.sanitize(SettingValue::Float(f32::NAN), default), default);
        assert_eq!(
            SettingKey::AntiAliasing
                .domain()
                .sanitize(SettingValue::Int(3), SettingValue::Int(0)),
            SettingValue::Int(0)
        );
        assert_eq!(
            SettingKey::SkinWeights.domain().sanitize(
                SettingValue::SkinWeights(SkinWeights::None),
                SettingValue::SkinWeights(SkinWeights::TwoBones)
            ),
            SettingValue::SkinWeights(SkinWeights::TwoBones)
        );
    }

    #[test]
    fn slider_positions() {
        let domain = SettingKey::PixelLightCount.domain();
        let default = SettingValue::Int(1);
        assert_eq!(
            domain.slider_to_value(7.9, default, default, None),
            Some(SettingValue::Int(7))
        );
        assert_eq!(
            domain.slider_to_value(-3.0, default, default, None),
            Some(SettingValue::Int(0))
        );
        assert_eq!(
            domain.slider_to_value(f32::NAN, default, default, None),
            Some(default)
        );
        assert_eq!(domain.slider_to_value(1.0, default, default, Some(Axis::X)), None);
        assert_eq!(
            Domain::slider_position(SettingValue::Vec3(vec3!(0.1, 0.2, 0.3)), Some(Axis::Z)),
            Some(0.3)
        );
        assert_eq!(Domain::slider_position(SettingValue::Bool(true), None), None);
    }
}
