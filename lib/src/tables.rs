//! Ordinal tables for every choice setting.

use crate::ordinal::OrdinalTable;
use graphic_options_host::prelude::*;

pub static TOGGLE: OrdinalTable<bool> = OrdinalTable::new(&[false, true], &["Off", "On"]);

pub static ANISOTROPIC_FILTERING: OrdinalTable<AnisotropicFiltering> = OrdinalTable::new(
    &[
        AnisotropicFiltering::Disable,
        AnisotropicFiltering::Enable,
        AnisotropicFiltering::ForceEnable,
    ],
    &["Off", "On", "Force On"],
);

/// MSAA sample counts.
pub static ANTI_ALIASING: OrdinalTable<i32> = OrdinalTable::new(
    &[0, 2, 4, 8],
    &["Off", "2x MSAA", "4x MSAA", "8x MSAA"],
);

pub static SHADOWMASK_MODE: OrdinalTable<ShadowmaskMode> = OrdinalTable::new(
    &[ShadowmaskMode::Shadowmask, ShadowmaskMode::DistanceShadowmask],
    &["Normal", "Distance"],
);

pub static SHADOW_PROJECTION: OrdinalTable<ShadowProjection> = OrdinalTable::new(
    &[ShadowProjection::CloseFit, ShadowProjection::StableFit],
    &["Close", "Stable"],
);

pub static SHADOW_RESOLUTION: OrdinalTable<ShadowResolution> = OrdinalTable::new(
    &[
        ShadowResolution::Low,
        ShadowResolution::Medium,
        ShadowResolution::High,
        ShadowResolution::VeryHigh,
    ],
    &["Low", "Medium", "High", "Very High"],
);

pub static SHADOWS: OrdinalTable<ShadowQuality> = OrdinalTable::new(
    &[
        ShadowQuality::Disable,
        ShadowQuality::HardOnly,
        ShadowQuality::All,
    ],
    &["Off", "Hard", "All"],
);

/// [`SkinWeights::None`] is deliberately left out.
pub static SKIN_WEIGHTS: OrdinalTable<SkinWeights> = OrdinalTable::new(
    &[
        SkinWeights::OneBone,
        SkinWeights::TwoBones,
        SkinWeights::FourBones,
        SkinWeights::Unlimited,
    ],
    &["One", "Two", "Four", "Unlimited"],
);

/// Vertical syncs between frames.
pub static VSYNC_COUNT: OrdinalTable<i32> = OrdinalTable::new(
    &[0, 1, 2, 3, 4],
    &[
        "Off",
        "Refresh Rate",
        "Half Refresh Rate",
        "Third Refresh Rate",
        "Quarter Refresh Rate",
    ],
);
