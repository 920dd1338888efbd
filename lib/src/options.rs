//! The graphic options controller wired to host callbacks.

use crate::{
    apply,
    bindings::{self, BindingPoller},
    config::Config,
    menu::Menu,
    setting::{Domain, SettingKey},
    settings::GraphicsSettings,
    store::SettingsStore,
    Error, Result,
};
use anyhow::Context as _;
use graphic_options_host::prelude::*;
use settings_loader::Settings;

/// Owns the settings and pushes them to the host whenever they change.
///
/// The host calls [`GraphicOptions::initialize`] once the main camera exists,
/// [`GraphicOptions::on_scene_changed`] after every active scene change and
/// [`GraphicOptions::on_update`] once per tick. Menu widgets read and write through
/// [`GraphicOptions::option_index`]/[`GraphicOptions::select_option`] and
/// [`GraphicOptions::slider_value`]/[`GraphicOptions::set_slider_value`].
#[derive(Debug, Clone)]
#[must_use]
pub struct GraphicOptions {
    config: Config,
    store: SettingsStore,
    bindings: BindingPoller,
    menu: Menu,
}

impl GraphicOptions {
    /// Create the controller with every setting at its default.
    pub fn new(config: Config) -> Self {
        Self::with_store(config, SettingsStore::new())
    }

    /// Create the controller from a previously loaded record.
    pub fn with_settings(config: Config, settings: GraphicsSettings) -> Self {
        Self::with_store(config, SettingsStore::from_settings(settings))
    }

    fn with_store(config: Config, store: SettingsStore) -> Self {
        Self {
            config,
            store,
            bindings: BindingPoller::new(),
            menu: Menu::graphic_options(),
        }
    }

    /// Create the controller from the settings file named in `config`.
    ///
    /// # Errors
    ///
    /// If the settings file exists but can't be read or parsed.
    pub async fn load(config: Config) -> Result<Self> {
        let settings = GraphicsSettings::load(config.settings_path.clone())
            .await
            .with_context(|| format!("failed to load {:?}", config.settings_path))?;
        Ok(Self::with_settings(config, settings))
    }

    /// Blocking version of [`GraphicOptions::load`].
    ///
    /// # Errors
    ///
    /// If the settings file exists but can't be read or parsed.
    pub fn load_sync(config: Config) -> Result<Self> {
        let settings = GraphicsSettings::load_sync(config.settings_path.clone())
            .with_context(|| format!("failed to load {:?}", config.settings_path))?;
        Ok(Self::with_settings(config, settings))
    }

    /// Save the current settings to the file named in the config.
    ///
    /// # Errors
    ///
    /// If the settings file can't be written.
    pub async fn save(&self) -> Result<()> {
        let path = &self.config.settings_path;
        self.store
            .settings()
            .save(path)
            .await
            .with_context(|| format!("failed to save {path:?}"))?;
        Ok(())
    }

    /// Blocking version of [`GraphicOptions::save`].
    ///
    /// # Errors
    ///
    /// If the settings file can't be written.
    pub fn save_sync(&self) -> Result<()> {
        let path = &self.config.settings_path;
        self.store
            .settings()
            .save_sync(path)
            .with_context(|| format!("failed to save {path:?}"))?;
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn store(&self) -> &SettingsStore {
        &self.store
    }

    #[inline]
    #[must_use]
    pub fn settings(&self) -> &GraphicsSettings {
        self.store.settings()
    }

    #[inline]
    #[must_use]
    pub fn bindings(&self) -> &BindingPoller {
        &self.bindings
    }

    #[inline]
    #[must_use]
    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Apply every setting and the blur toggle.
    pub fn initialize<S, G>(&mut self, cx: &mut Context<S, G>)
    where
        S: RenderSurface,
        G: SceneGraph,
    {
        tracing::info!("initializing graphic options");
        apply::apply_all(cx.surface_mut(), self.store.settings());
        self.apply_blur(cx);
    }

    /// Re-apply the blur toggle to the new active scene.
    pub fn on_scene_changed<S, G: SceneGraph>(&mut self, cx: &mut Context<S, G>) {
        self.apply_blur(cx);
    }

    /// Advance every setting whose binding was pressed since the last tick.
    ///
    /// # Errors
    ///
    /// If a bound setting can't be advanced.
    pub fn on_update<S, G>(&mut self, cx: &mut Context<S, G>) -> Result<()>
    where
        S: RenderSurface,
        G: SceneGraph,
    {
        for key in self.bindings.poll(cx.input()) {
            let value = bindings::advance(&mut self.store, key)?;
            tracing::debug!("binding advanced {key} to {value}");
            self.commit(cx, key);
        }
        Ok(())
    }

    /// The widget ordinal of a choice setting.
    ///
    /// # Errors
    ///
    /// If `key` is not a choice setting.
    pub fn option_index(&self, key: SettingKey) -> Result<i32> {
        let choices = key.domain().choices().ok_or(Error::NotAChoice(key))?;
        Ok(choices.ordinal_of(self.store.get(key)))
    }

    /// Set a choice setting from a widget ordinal and apply it. Out of range ordinals select the
    /// first entry.
    ///
    /// # Errors
    ///
    /// If `key` is not a choice setting.
    pub fn select_option<S, G>(
        &mut self,
        cx: &mut Context<S, G>,
        key: SettingKey,
        ordinal: i32,
    ) -> Result<()>
    where
        S: RenderSurface,
        G: SceneGraph,
    {
        let choices = key.domain().choices().ok_or(Error::NotAChoice(key))?;
        self.store.set(key, choices.value_at(ordinal))?;
        self.commit(cx, key);
        Ok(())
    }

    /// The slider position of a numeric setting, or of one component of a vector setting.
    ///
    /// # Errors
    ///
    /// If `key` is not a slider setting or `component` doesn't match its shape.
    pub fn slider_value(&self, key: SettingKey, component: Option<Axis>) -> Result<f32> {
        if key.domain().is_choice() {
            return Err(Error::NotASlider(key));
        }
        Domain::slider_position(self.store.get(key), component)
            .ok_or(Error::NoComponent { key, component })
    }

    /// Set a numeric setting from a slider position and apply it.
    ///
    /// The position is clamped into range, integral settings truncate toward zero and NaN
    /// restores the default. For vector settings only `component` is replaced.
    ///
    /// # Errors
    ///
    /// If `key` is not a slider setting or `component` doesn't match its shape.
    pub fn set_slider_value<S, G>(
        &mut self,
        cx: &mut Context<S, G>,
        key: SettingKey,
        component: Option<Axis>,
        position: f32,
    ) -> Result<()>
    where
        S: RenderSurface,
        G: SceneGraph,
    {
        let domain = key.domain();
        if domain.is_choice() {
            return Err(Error::NotASlider(key));
        }
        let value = domain
            .slider_to_value(
                position,
                self.store.get(key),
                GraphicsSettings::default_value(key),
                component,
            )
            .ok_or(Error::NoComponent { key, component })?;
        self.store.set(key, value)?;
        self.commit(cx, key);
        Ok(())
    }

    /// Restore and apply every default.
    pub fn reset_to_defaults<S, G>(&mut self, cx: &mut Context<S, G>)
    where
        S: RenderSurface,
        G: SceneGraph,
    {
        self.store.reset_all();
        apply::apply_all(cx.surface_mut(), self.store.settings());
        self.apply_blur(cx);
    }

    /// Bind a choice setting so that pressing `binding` advances it.
    ///
    /// # Errors
    ///
    /// If `key` is not a choice setting.
    pub fn bind(&mut self, key: SettingKey, binding: Binding) -> Result<Option<Binding>> {
        self.bindings.bind(key, binding)
    }

    pub fn unbind(&mut self, key: SettingKey) -> Option<Binding> {
        self.bindings.unbind(key)
    }

    /// Push a changed setting to the host. Blur lives in the scene, everything else is a full
    /// re-apply.
    fn commit<S, G>(&self, cx: &mut Context<S, G>, key: SettingKey)
    where
        S: RenderSurface,
        G: SceneGraph,
    {
        if key == SettingKey::Blur {
            self.apply_blur(cx);
        } else {
            apply::apply_all(cx.surface_mut(), self.store.settings());
        }
    }

    fn apply_blur<S, G: SceneGraph>(&self, cx: &mut Context<S, G>) {
        apply::apply_blur(
            cx.scene_mut(),
            &self.config.blur_object,
            self.store.settings().camera.blur,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setting::SettingValue;
    use std::path::PathBuf;

    type Cx = Context<HeadlessSurface, Scene>;

    fn scene_with_blur(name: &str, active: bool) -> Scene {
        let mut scene = Scene::new(name);
        assert!(scene.add_object(GameObject::new("BlurPlane", active)).is_ok());
        scene
    }

    fn blur_active(cx: &Cx) -> Option<bool> {
        cx.scene().object("BlurPlane").map(SceneObject::is_active)
    }

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("graphic_options_{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn select_shadows() -> Result<()> {
        let mut options = GraphicOptions::new(Config::new());
        let mut cx = Cx::new(HeadlessSurface::new(), Scene::new("Menu"));
        options.initialize(&mut cx);
        assert_eq!(options.option_index(SettingKey::Shadows)?, 0);
        assert_eq!(cx.surface().quality().shadows, ShadowQuality::Disable);

        options.select_option(&mut cx, SettingKey::Shadows, 2)?;
        assert_eq!(options.settings().quality.shadows, ShadowQuality::All);
        assert_eq!(cx.surface().quality().shadows, ShadowQuality::All);
        assert_eq!(options.option_index(SettingKey::Shadows)?, 2);
        Ok(())
    }

    #[test]
    fn select_out_of_range_uses_fallback() -> Result<()> {
        let mut options = GraphicOptions::new(Config::new());
        let mut cx = Cx::new(HeadlessSurface::new(), Scene::new("Menu"));
        options.select_option(&mut cx, SettingKey::AntiAliasing, 3)?;
        assert_eq!(cx.surface().quality().anti_aliasing, 8);
        options.select_option(&mut cx, SettingKey::AntiAliasing, 7)?;
        assert_eq!(cx.surface().quality().anti_aliasing, 0);
        options.select_option(&mut cx, SettingKey::ShadowProjection, -1)?;
        assert_eq!(
            cx.surface().quality().shadow_projection,
            ShadowProjection::CloseFit
        );
        assert!(matches!(
            options.select_option(&mut cx, SettingKey::LodBias, 1),
            Err(Error::NotAChoice(SettingKey::LodBias))
        ));
        Ok(())
    }

    #[test]
    fn blur_follows_scene_changes() -> Result<()> {
        let mut options = GraphicOptions::new(Config::new());
        let mut cx = Cx::new(HeadlessSurface::new(), Scene::new("Menu"));
        options.initialize(&mut cx);

        options.select_option(&mut cx, SettingKey::Blur, 1)?;
        assert_eq!(blur_active(&cx), None);
        assert!(options.settings().camera.blur);

        let _menu = cx.change_scene(scene_with_blur("Town", false));
        options.on_scene_changed(&mut cx);
        assert_eq!(blur_active(&cx), Some(true));

        options.select_option(&mut cx, SettingKey::Blur, 0)?;
        assert_eq!(blur_active(&cx), Some(false));
        let writes = cx.surface().writes();
        options.select_option(&mut cx, SettingKey::Blur, 1)?;
        assert_eq!(blur_active(&cx), Some(true));
        assert_eq!(cx.surface().writes(), writes);
        Ok(())
    }

    #[test]
    fn custom_blur_object() {
        let mut options = GraphicOptions::new(Config::new().with_blur_object("Vignette"));
        let mut scene = Scene::new("Town");
        assert!(scene.add_object(GameObject::new("Vignette", false)).is_ok());
        let mut cx = Cx::new(HeadlessSurface::new(), scene);
        options.initialize(&mut cx);
        assert_eq!(
            cx.scene().object("Vignette").map(SceneObject::is_active),
            Some(true)
        );
    }

    #[test]
    fn split_components_are_isolated() -> Result<()> {
        let mut options = GraphicOptions::new(Config::new());
        let mut cx = Cx::new(HeadlessSurface::new(), Scene::new("Menu"));
        options.initialize(&mut cx);
        let before = options.settings().quality.shadow_cascade_4_split;

        options.set_slider_value(&mut cx, SettingKey::ShadowCascade4Split, Some(Axis::X), 0.5)?;
        let after = cx.surface().quality().shadow_cascade_4_split;
        assert_eq!(after, vec3!(0.5, before.y, before.z));

        for axis in Axis::ALL {
            assert_eq!(
                options.slider_value(SettingKey::ShadowCascade4Split, Some(axis))?,
                after[axis]
            );
        }
        assert!(matches!(
            options.slider_value(SettingKey::ShadowCascade4Split, None),
            Err(Error::NoComponent { .. })
        ));
        Ok(())
    }

    #[test]
    fn sliders_clamp_and_truncate() -> Result<()> {
        let mut options = GraphicOptions::new(Config::new());
        let mut cx = Cx::new(HeadlessSurface::new(), Scene::new("Menu"));

        options.set_slider_value(&mut cx, SettingKey::PixelLightCount, None, 12.7)?;
        assert_eq!(cx.surface().quality().pixel_light_count, 12);
        options.set_slider_value(&mut cx, SettingKey::AsyncUploadTimeSlice, None, 99.0)?;
        assert_eq!(cx.surface().quality().async_upload_time_slice, 33);
        options.set_slider_value(&mut cx, SettingKey::ShadowDistance, None, -4.0)?;
        assert_eq!(cx.surface().quality().shadow_distance, 0.0);
        options.set_slider_value(&mut cx, SettingKey::LodBias, None, f32::NAN)?;
        assert_eq!(
            options.store().get(SettingKey::LodBias),
            SettingValue::Float(0.7)
        );
        assert_eq!(options.slider_value(SettingKey::PixelLightCount, None)?, 12.0);
        assert!(matches!(
            options.set_slider_value(&mut cx, SettingKey::Shadows, None, 1.0),
            Err(Error::NotASlider(SettingKey::Shadows))
        ));
        assert!(matches!(
            options.set_slider_value(&mut cx, SettingKey::LodBias, Some(Axis::Y), 1.0),
            Err(Error::NoComponent { .. })
        ));
        Ok(())
    }

    #[test]
    fn binding_wraps_shadow_resolution() -> Result<()> {
        let mut options = GraphicOptions::new(Config::new());
        let mut cx = Cx::new(HeadlessSurface::new(), Scene::new("Menu"));
        options.initialize(&mut cx);
        options.select_option(&mut cx, SettingKey::ShadowResolution, 3)?;
        options.bind(SettingKey::ShadowResolution, Binding::key(KeyCode::F5))?;

        cx.input_mut().key_input(KeyCode::F5, InputState::Pressed);
        options.on_update(&mut cx)?;
        assert_eq!(options.option_index(SettingKey::ShadowResolution)?, 0);
        assert_eq!(
            cx.surface().quality().shadow_resolution,
            ShadowResolution::Low
        );

        cx.end_frame();
        options.on_update(&mut cx)?;
        assert_eq!(options.option_index(SettingKey::ShadowResolution)?, 0);

        cx.input_mut().key_input(KeyCode::F5, InputState::Released);
        cx.end_frame();
        cx.input_mut().key_input(KeyCode::F5, InputState::Pressed);
        options.on_update(&mut cx)?;
        assert_eq!(options.option_index(SettingKey::ShadowResolution)?, 1);
        Ok(())
    }

    #[test]
    fn binding_catches_taps_between_updates() -> Result<()> {
        let mut options = GraphicOptions::new(Config::new());
        let mut cx = Cx::new(HeadlessSurface::new(), Scene::new("Menu"));
        options.initialize(&mut cx);
        options.bind(SettingKey::Shadows, Binding::key(KeyCode::F5))?;

        cx.handle_event(Event::KeyInput {
            keycode: KeyCode::F5,
            state: InputState::Pressed,
        });
        cx.handle_event(Event::KeyInput {
            keycode: KeyCode::F5,
            state: InputState::Released,
        });
        options.on_update(&mut cx)?;
        assert_eq!(options.option_index(SettingKey::Shadows)?, 1);
        assert_eq!(cx.surface().quality().shadows, ShadowQuality::HardOnly);

        cx.end_frame();
        options.on_update(&mut cx)?;
        assert_eq!(options.option_index(SettingKey::Shadows)?, 1);
        Ok(())
    }

    #[test]
    fn simultaneous_bindings_apply_in_order() -> Result<()> {
        let mut options = GraphicOptions::new(Config::new());
        let mut cx = Cx::new(HeadlessSurface::new(), scene_with_blur("Town", true));
        options.initialize(&mut cx);
        options.bind(SettingKey::VSyncCount, Binding::button(ControllerButton::DPadUp))?;
        options.bind(SettingKey::Blur, Binding::button(ControllerButton::DPadUp))?;
        options.bind(SettingKey::Hdr, Binding::button(ControllerButton::DPadUp))?;
        assert!(matches!(
            options.bind(SettingKey::ShadowDistance, Binding::key(KeyCode::F6)),
            Err(Error::NotAChoice(_))
        ));

        let writes = cx.surface().writes();
        cx.input_mut()
            .button_input(ControllerButton::DPadUp, InputState::Pressed);
        options.on_update(&mut cx)?;
        assert_eq!(blur_active(&cx), Some(false));
        assert!(cx.surface().camera().allow_hdr);
        assert_eq!(cx.surface().quality().vsync_count, 2);
        assert_eq!(cx.surface().writes(), writes + 2 * (7 + 31));
        Ok(())
    }

    #[test]
    fn reset_to_defaults() -> Result<()> {
        let mut options = GraphicOptions::new(Config::new());
        let mut cx = Cx::new(HeadlessSurface::new(), scene_with_blur("Town", true));
        options.initialize(&mut cx);
        options.select_option(&mut cx, SettingKey::Blur, 0)?;
        options.select_option(&mut cx, SettingKey::Msaa, 0)?;
        options.reset_to_defaults(&mut cx);
        assert_eq!(options.store(), &SettingsStore::new());
        assert!(cx.surface().camera().allow_msaa);
        assert_eq!(blur_active(&cx), Some(true));
        Ok(())
    }

    #[tokio::test]
    async fn save_and_load() -> Result<()> {
        let config = Config::new().with_settings_path(scratch_path("save_and_load.json"));
        let mut options = GraphicOptions::load(config.clone()).await?;
        assert_eq!(options.store(), &SettingsStore::new());

        let mut cx = Cx::new(HeadlessSurface::new(), Scene::new("Menu"));
        options.select_option(&mut cx, SettingKey::SkinWeights, 3)?;
        options.set_slider_value(&mut cx, SettingKey::LodBias, None, 2.5)?;
        options.save().await?;

        let loaded = GraphicOptions::load(config).await?;
        assert_eq!(loaded.settings(), options.settings());
        Ok(())
    }

    #[test]
    fn save_and_load_sync() -> Result<()> {
        let config = Config::new().with_settings_path(scratch_path("save_and_load_sync.json"));
        let mut options = GraphicOptions::load_sync(config.clone())?;
        let mut cx = Cx::new(HeadlessSurface::new(), Scene::new("Menu"));
        options.select_option(&mut cx, SettingKey::VSyncCount, 0)?;
        options.save_sync()?;

        let json: serde_json::Value = serde_json::from_slice(
            &std::fs::read(&config.settings_path).map_err(anyhow::Error::from)?,
        )
        .map_err(anyhow::Error::from)?;
        assert_eq!(json["version"], 1);
        assert_eq!(json["settings"]["quality"]["vsync_count"], 0);

        let loaded = GraphicOptions::load_sync(config)?;
        assert_eq!(loaded.settings().quality.vsync_count, 0);
        Ok(())
    }

    #[test]
    fn load_keeps_valid_fields_of_hand_edited_file() -> Result<()> {
        let config = Config::new().with_settings_path("tests/hand_edited.json");
        let options = GraphicOptions::load_sync(config)?;
        assert!(!options.settings().camera.bloom);
        assert!(!options.settings().camera.hdr);
        assert_eq!(options.option_index(SettingKey::Shadows)?, 0);
        assert_eq!(options.option_index(SettingKey::ShadowResolution)?, 2);
        assert_eq!(options.option_index(SettingKey::AntiAliasing)?, 0);
        Ok(())
    }

    #[test]
    fn load_rejects_newer_versions() {
        let config = Config::new().with_settings_path("tests/newer_version.json");
        assert!(matches!(
            GraphicOptions::load_sync(config),
            Err(Error::Load(_))
        ));
    }
}
