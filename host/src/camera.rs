//! Main camera properties.

/// A single write to the camera sub-surface.
///
/// `Bloom` and `FilmGrain` toggle the post-processing components attached to the main camera, the
/// rest map onto the camera itself.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[must_use]
pub enum CameraProperty {
    Bloom(bool),
    FilmGrain(bool),
    AllowDynamicResolution(bool),
    AllowHdr(bool),
    AllowMsaa(bool),
    UseOcclusionCulling(bool),
    UsePhysicalProperties(bool),
}

/// The camera properties as last written to a surface.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[must_use]
pub struct CameraState {
    pub bloom: bool,
    pub film_grain: bool,
    pub allow_dynamic_resolution: bool,
    pub allow_hdr: bool,
    pub allow_msaa: bool,
    pub use_occlusion_culling: bool,
    pub use_physical_properties: bool,
}

impl CameraState {
    /// Write a single property.
    pub fn set(&mut self, property: CameraProperty) {
        match property {
            CameraProperty::Bloom(enabled) => self.bloom = enabled,
            CameraProperty::FilmGrain(enabled) => self.film_grain = enabled,
            CameraProperty::AllowDynamicResolution(allowed) => {
                self.allow_dynamic_resolution = allowed;
            }
            CameraProperty::AllowHdr(allowed) => self.allow_hdr = allowed,
            CameraProperty::AllowMsaa(allowed) => self.allow_msaa = allowed,
            CameraProperty::UseOcclusionCulling(enabled) => self.use_occlusion_culling = enabled,
            CameraProperty::UsePhysicalProperties(enabled) => {
                self.use_physical_properties = enabled;
            }
        }
    }
}
