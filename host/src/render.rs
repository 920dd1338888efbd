//! Traits and types for the host rendering surface.

use crate::{
    camera::{CameraProperty, CameraState},
    quality::{QualityProperty, QualityState},
};

/// The main camera sub-surface.
pub trait CameraSurface {
    /// Write a camera property. The host accepts any in-domain value unconditionally.
    fn set_camera(&mut self, property: CameraProperty);
}

/// The global quality sub-surface.
pub trait QualitySurface {
    /// Write a quality property. The host accepts any in-domain value unconditionally.
    fn set_quality(&mut self, property: QualityProperty);
}

/// A rendering surface exposing both sub-surfaces.
pub trait RenderSurface: CameraSurface + QualitySurface {}

impl<T: CameraSurface + QualitySurface> RenderSurface for T {}

/// A surface with no renderer behind it that records every write.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
#[must_use]
pub struct HeadlessSurface {
    camera: CameraState,
    quality: QualityState,
    writes: usize,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The camera state as last written.
    #[inline]
    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    /// The quality state as last written.
    #[inline]
    pub fn quality(&self) -> &QualityState {
        &self.quality
    }

    /// Total number of property writes received.
    #[inline]
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl CameraSurface for HeadlessSurface {
    fn set_camera(&mut self, property: CameraProperty) {
        tracing::trace!("camera <- {property:?}");
        self.camera.set(property);
        self.writes += 1;
    }
}

impl QualitySurface for HeadlessSurface {
    fn set_quality(&mut self, property: QualityProperty) {
        tracing::trace!("quality <- {property:?}");
        self.quality.set(property);
        self.writes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quality::ShadowResolution;

    #[test]
    fn headless_surface_records_writes() {
        let mut surface = HeadlessSurface::new();
        surface.set_camera(CameraProperty::AllowHdr(true));
        surface.set_quality(QualityProperty::ShadowResolution(ShadowResolution::High));
        assert!(surface.camera().allow_hdr);
        assert_eq!(surface.quality().shadow_resolution, ShadowResolution::High);
        assert_eq!(surface.writes(), 2);
    }
}
