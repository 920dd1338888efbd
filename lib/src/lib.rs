//! Graphic options mod.
//!
//! Exposes the host's camera and quality properties through an in-game options menu, keeps the
//! chosen values in a single owned [`SettingsStore`], persists them between sessions and re-applies
//! the whole bundle to the host whenever one of them changes.
//!
//! Enumerated settings are edited with horizontal option widgets that speak in ordinals; the
//! [`OrdinalTable`](ordinal::OrdinalTable) for each setting translates in both directions and never
//! fails. Numeric settings are edited with sliders and clamped into range.
//!
//! ```no_run
//! use graphic_options::{trace, Config, GraphicOptions};
//!
//! # fn main() -> graphic_options::Result<()> {
//! let config = Config::from_env();
//! let _trace = trace::initialize(&config.log_directory);
//! let options = GraphicOptions::load_sync(config)?;
//! # drop(options);
//! # Ok(())
//! # }
//! ```

#![warn(
    anonymous_parameters,
    bare_trait_objects,
    clippy::branches_sharing_code,
    clippy::map_unwrap_or,
    clippy::match_wildcard_for_single_variants,
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
    // clippy::missing_errors_doc,
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

use graphic_options_host::prelude::Axis;

pub mod apply;
pub mod bindings;
pub mod config;
pub mod menu;
pub mod options;
pub mod ordinal;
pub mod setting;
pub mod settings;
pub mod store;
pub mod tables;
pub mod trace;

pub use config::Config;
pub use options::GraphicOptions;
pub use setting::{SettingKey, SettingValue};
pub use settings::GraphicsSettings;
pub use store::SettingsStore;
pub use trace::Trace;

/// Results that can be returned from this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can be returned from this crate.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{value} is outside the legal values of `{key}`")]
    OutOfDomain { key: SettingKey, value: SettingValue },
    #[error("`{key}` can not hold {value:?}")]
    TypeMismatch { key: SettingKey, value: SettingValue },
    #[error("unknown setting `{0}`")]
    UnknownSetting(String),
    #[error("`{0}` is not a choice setting")]
    NotAChoice(SettingKey),
    #[error("`{0}` is not a slider setting")]
    NotASlider(SettingKey),
    #[error("`{key}` has no slider for component {component:?}")]
    NoComponent {
        key: SettingKey,
        component: Option<Axis>,
    },
    /// The settings file could not be loaded or saved.
    #[error(transparent)]
    Load(#[from] anyhow::Error),
}
