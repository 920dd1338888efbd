//! Scene graph lookups.

use crate::{Error, Result};
use fnv::FnvHashMap;

/// An object living in a scene that can be switched on and off.
pub trait SceneObject {
    fn name(&self) -> &str;
    fn is_active(&self) -> bool;
    fn set_active(&mut self, active: bool);
}

/// The currently active scene.
pub trait SceneGraph {
    /// Name of the scene.
    fn scene_name(&self) -> &str;

    /// Find an object by name. Many scenes legitimately lack a given object.
    fn find_object_mut(&mut self, name: &str) -> Option<&mut dyn SceneObject>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct GameObject {
    name: String,
    active: bool,
}

impl GameObject {
    pub fn new(name: impl Into<String>, active: bool) -> Self {
        Self {
            name: name.into(),
            active,
        }
    }
}

impl SceneObject for GameObject {
    #[inline]
    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// An in-memory scene of named objects.
#[derive(Default, Debug, Clone)]
#[must_use]
pub struct Scene {
    name: String,
    objects: FnvHashMap<String, GameObject>,
}

impl Scene {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            objects: FnvHashMap::default(),
        }
    }

    /// Add an object to the scene.
    ///
    /// # Errors
    ///
    /// If an object with the same name already exists.
    pub fn add_object(&mut self, object: GameObject) -> Result<()> {
        if self.objects.contains_key(object.name()) {
            return Err(Error::DuplicateObject {
                scene: self.name.clone(),
                name: object.name,
            });
        }
        self.objects.insert(object.name.clone(), object);
        Ok(())
    }

    /// Builder-style [`Scene::add_object`].
    ///
    /// # Errors
    ///
    /// If an object with the same name already exists.
    pub fn with_object(mut self, object: GameObject) -> Result<Self> {
        self.add_object(object)?;
        Ok(self)
    }

    /// Look up an object by name.
    #[must_use]
    pub fn object(&self, name: &str) -> Option<&GameObject> {
        self.objects.get(name)
    }
}

impl SceneGraph for Scene {
    #[inline]
    fn scene_name(&self) -> &str {
        &self.name
    }

    fn find_object_mut(&mut self, name: &str) -> Option<&mut dyn SceneObject> {
        let object: &mut dyn SceneObject = self.objects.get_mut(name)?;
        Some(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_object() -> Result<()> {
        let mut scene = Scene::new("Town").with_object(GameObject::new("BlurPlane", true))?;
        assert!(scene.find_object_mut("Missing").is_none());
        let object = scene.find_object_mut("BlurPlane");
        assert!(object.is_some());
        if let Some(object) = object {
            object.set_active(false);
        }
        assert_eq!(scene.object("BlurPlane").map(SceneObject::is_active), Some(false));
        Ok(())
    }

    #[test]
    fn duplicate_object() {
        let mut scene = Scene::new("Town");
        assert!(scene.add_object(GameObject::new("BlurPlane", true)).is_ok());
        assert!(matches!(
            scene.add_object(GameObject::new("BlurPlane", false)),
            Err(Error::DuplicateObject { .. })
        ));
    }
}
