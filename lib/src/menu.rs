//! Declarative description of the in-game options menu.
//!
//! Drawing is left to the host's menu system, which reads the elements in order and wires each
//! widget to the matching getter and setter on [`GraphicOptions`](crate::options::GraphicOptions).

use crate::setting::{Domain, SettingKey};
use graphic_options_host::prelude::*;

/// A single menu row.
#[derive(Debug, Copy, Clone, PartialEq)]
#[must_use]
pub enum Element {
    /// A section heading.
    TextPanel(&'static str),
    /// A left/right selector over a fixed list of options.
    HorizontalOption {
        key: SettingKey,
        label: &'static str,
        description: &'static str,
        options: &'static [&'static str],
    },
    /// A slider over a numeric range. `component` selects one axis of a vector setting.
    Slider {
        key: SettingKey,
        component: Option<Axis>,
        label: &'static str,
        min: f32,
        max: f32,
        whole_numbers: bool,
    },
}

impl Element {
    /// The setting this row edits, if any.
    #[must_use]
    pub fn key(&self) -> Option<SettingKey> {
        match *self {
            Self::TextPanel(_) => None,
            Self::HorizontalOption { key, .. } | Self::Slider { key, .. } => Some(key),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct Menu {
    title: &'static str,
    elements: Vec<Element>,
}

impl Menu {
    pub const TITLE: &'static str = "Graphic Options";

    /// The graphic options menu, one row per setting in declaration order.
    pub fn graphic_options() -> Self {
        let mut elements = Vec::with_capacity(SettingKey::ALL.len() + 4);
        elements.push(Element::TextPanel("Camera Options"));
        for key in SettingKey::ALL {
            if key == SettingKey::AnisotropicFiltering {
                elements.push(Element::TextPanel("Quality Options"));
            }
            let domain = key.domain();
            let label = label(key);
            match (domain.choices(), domain.range()) {
                (Some(choices), _) => elements.push(Element::HorizontalOption {
                    key,
                    label,
                    description: description(key),
                    options: choices.labels(),
                }),
                (None, Some((min, max))) if matches!(domain, Domain::Vec3 { .. }) => {
                    for axis in Axis::ALL {
                        elements.push(Element::Slider {
                            key,
                            component: Some(axis),
                            label: component_label(key, axis),
                            min,
                            max,
                            whole_numbers: false,
                        });
                    }
                }
                (None, Some((min, max))) => elements.push(Element::Slider {
                    key,
                    component: None,
                    label,
                    min,
                    max,
                    whole_numbers: domain.is_whole_numbers(),
                }),
                (None, None) => tracing::warn!("{key} has no menu widget"),
            }
        }
        Self {
            title: Self::TITLE,
            elements,
        }
    }

    #[inline]
    #[must_use]
    pub fn title(&self) -> &'static str {
        self.title
    }

    #[inline]
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

fn label(key: SettingKey) -> &'static str {
    use SettingKey::*;
    match key {
        Bloom => "Bloom",
        Blur => "Blur",
        DynamicResolution => "Dynamic Resolution",
        FilmGrain => "Film Grain",
        Hdr => "Allow HDR",
        Msaa => "Allow MSAA",
        OcclusionCulling => "Occlusion Culling",
        PhysicalProperties => "Physical Properties",
        AnisotropicFiltering => "Anisotropic Filtering",
        AntiAliasing => "Anti Aliasing",
        AsyncUploadBufferSize => "Async Upload Buffer Size",
        AsyncUploadPersistentBuffer => "Async Upload Persist",
        AsyncUploadTimeSlice => "Async Upload Time Slice",
        BillboardsFaceCameraPosition => "Billboards Face Camera",
        LodBias => "LOD Bias",
        MaximumLodLevel => "Maximum LOD Level",
        ParticleRaycastBudget => "Particle Raycast Budget",
        PixelLightCount => "Pixel Light Count",
        RealtimeReflectionProbes => "Realtime Reflection Probes",
        ResolutionScalingFixedDpiFactor => "Resolution Scaling",
        ShadowCascade2Split => "Shadow Cascade 2-Split",
        ShadowCascade4Split => "Shadow Cascade 4-Split",
        ShadowCascades => "Shadow Cascades",
        ShadowDistance => "Shadow Distance",
        ShadowmaskMode => "Shadowmask Mode",
        ShadowNearPlaneOffset => "Shadow Near Limit",
        ShadowProjection => "Shadow Projection",
        ShadowResolution => "Shadow Resolution",
        Shadows => "Shadows",
        SkinWeights => "Skin Weights",
        SoftParticles => "Soft Particles",
        SoftVegetation => "Soft Vegetation",
        StreamingMipmapsActive => "Mipmaps Active",
        StreamingMipmapsAddAllCameras => "Mipmaps All Cameras",
        StreamingMipmapsMaxFileIoRequests => "Mipmaps Max IO",
        StreamingMipmapsMaxLevelReduction => "Mipmaps Max Reduction",
        StreamingMipmapsMemoryBudget => "Mipmaps Memory",
        StreamingMipmapsRenderersPerFrame => "Mipmaps Renderers",
        VSyncCount => "VSync",
    }
}

fn component_label(key: SettingKey, axis: Axis) -> &'static str {
    match (key, axis) {
        (SettingKey::ShadowCascade4Split, Axis::X) => "Shadow Cascade 4-Split - X",
        (SettingKey::ShadowCascade4Split, Axis::Y) => "Shadow Cascade 4-Split - Y",
        (SettingKey::ShadowCascade4Split, Axis::Z) => "Shadow Cascade 4-Split - Z",
        _ => label(key),
    }
}

fn description(key: SettingKey) -> &'static str {
    use SettingKey::*;
    match key {
        Bloom => "Enables or disables bloom.",
        Blur => "Enables or disables the blur effect of the background.",
        DynamicResolution => "Enables or disables dynamic resolution scaling.",
        FilmGrain => "Enables or disables the film grain effect.",
        Hdr => "Enables or disables high dynamic range rendering.",
        Msaa => "Enables or disables MSAA rendering.",
        OcclusionCulling => "Whether or not the Camera will use occlusion culling during rendering.",
        PhysicalProperties => {
            "Enable to use physical camera properties to compute the field of view and the frustum."
        }
        AnisotropicFiltering => "Global anisotropic filtering mode.",
        AntiAliasing => {
            "Choose the level of Multi-Sample Anti-aliasing (MSAA) that the GPU performs."
        }
        AsyncUploadPersistentBuffer => {
            "Make ring buffer allocation persist after all upload operations have completed. \
             Increases memory usage."
        }
        BillboardsFaceCameraPosition => {
            "If enabled, billboards will face towards camera position rather than camera \
             orientation."
        }
        RealtimeReflectionProbes => "Enables real-time reflection probes.",
        ShadowmaskMode => "The rendering mode of Shadowmask.",
        ShadowProjection => "Directional light shadow projection.",
        ShadowResolution => "The default resolution of the shadow maps.",
        Shadows => "Real-time Shadows type to be used.",
        SkinWeights => {
            "The maximum number of bones per vertex that are taken into account during skinning."
        }
        SoftParticles => "Should soft blending be used for particles?",
        SoftVegetation => "Use a two-pass shader for the vegetation in the terrain engine.",
        StreamingMipmapsActive => {
            "Enable automatic streaming of texture mipmap levels based on their distance from \
             all active cameras."
        }
        StreamingMipmapsAddAllCameras => "Process all enabled Cameras for texture streaming.",
        VSyncCount => "The number of vertical syncs that should pass between each frame.",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_setting_listed_once() {
        let menu = Menu::graphic_options();
        assert_eq!(menu.title(), "Graphic Options");
        let mut keys: Vec<_> = menu.elements().iter().filter_map(Element::key).collect();
        keys.dedup();
        assert_eq!(keys, SettingKey::ALL);
        assert_eq!(
            menu.elements()
                .iter()
                .filter(|element| matches!(element, Element::TextPanel(_)))
                .count(),
            2
        );
        assert_eq!(menu.elements().len(), SettingKey::ALL.len() + 2 + 2);
    }

    #[test]
    fn widgets_match_domains() {
        for element in Menu::graphic_options().elements() {
            match *element {
                Element::TextPanel(_) => (),
                Element::HorizontalOption {
                    key,
                    options,
                    description,
                    ..
                } => {
                    let choices = key.domain().choices();
                    assert!(
                        matches!(choices, Some(choices) if choices.len() == options.len()),
                        "{key}"
                    );
                    assert!(!description.is_empty(), "{key} has no description");
                }
                Element::Slider {
                    key,
                    component,
                    min,
                    max,
                    whole_numbers,
                    ..
                } => {
                    let domain = key.domain();
                    assert_eq!(domain.range(), Some((min, max)), "{key}");
                    assert_eq!(domain.is_whole_numbers(), whole_numbers, "{key}");
                    assert_eq!(
                        component.is_some(),
                        key == SettingKey::ShadowCascade4Split,
                        "{key}"
                    );
                }
            }
        }
    }

    #[test]
    fn vsync_labels() {
        let menu = Menu::graphic_options();
        let vsync = menu
            .elements()
            .iter()
            .find(|element| element.key() == Some(SettingKey::VSyncCount));
        assert!(matches!(
            vsync,
            Some(Element::HorizontalOption { options, .. }) if options[2] == "Half Refresh Rate"
        ));
    }
}
