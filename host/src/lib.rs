//! Host engine surfaces for the graphic options mod.
//!
//! The mod never talks to a rendering pipeline directly. Everything it touches on the host side is
//! described here as a small set of traits:
//!
//! - [`CameraSurface`](render::CameraSurface) and [`QualitySurface`](render::QualitySurface), the
//!   flat property bags the settings are pushed into.
//! - [`SceneGraph`](scene::SceneGraph), used to look up named objects in the active scene.
//! - [`BindingSource`](context::input::BindingSource), which reports whether a key or button
//!   binding was pressed since the last tick.
//!
//! Headless implementations of each are provided so the mod can run without a game engine.

#![warn(
    anonymous_parameters,
    bare_trait_objects,
    clippy::branches_sharing_code,
    clippy::map_unwrap_or,
    clippy::match_wildcard_for_single_variants,
    // clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::needless_for_each,
    clippy::redundant_closure_for_method_calls,
    clippy::semicolon_if_nothing_returned,
    clippy::unreadable_literal,
    clippy::unwrap_used,
    clippy::expect_used,
    deprecated_in_future,
    ellipsis_inclusive_range_patterns,
    future_incompatible,
    missing_copy_implementations,
    missing_debug_implementations,
    // missing_docs,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    rustdoc::bare_urls,
    rustdoc::broken_intra_doc_links,
    rustdoc::invalid_html_tags,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::private_intra_doc_links,
    single_use_lifetimes,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused,
    variant_size_differences
)]

pub mod camera;
pub mod context;
pub mod event;
pub mod quality;
pub mod render;
pub mod scene;
pub mod vector;

/// Results that can be returned from this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can be returned from this crate.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("scene `{scene}` already contains an object named `{name}`")]
    DuplicateObject { scene: String, name: String },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub mod prelude {
    //! Most commonly used exports for wiring up a host.

    pub use crate::{
        camera::{CameraProperty, CameraState},
        context::{
            input::{Binding, BindingSource, InputTracker},
            Context,
        },
        event::{ControllerButton, Event, InputState, KeyCode, ModifierKeys},
        quality::{
            AnisotropicFiltering, QualityProperty, QualityState, ShadowProjection, ShadowQuality,
            ShadowResolution, ShadowmaskMode, SkinWeights,
        },
        render::{CameraSurface, HeadlessSurface, QualitySurface, RenderSurface},
        scene::{GameObject, Scene, SceneGraph, SceneObject},
        vector::{Axis, Vec3},
    };

    // Macros
    pub use crate::vec3;
}
