//! String-keyed registry of host-loaded resources.

use ahash::AHashMap;

use super::{FontHandle, ImageHandle};

/// Maps logical names to font/image handles. The host engine registers
/// handles after loading; toolkit code only does read-only lookups.
#[derive(Debug, Default)]
pub struct Resources {
    fonts: AHashMap<String, FontHandle>,
    images: AHashMap<String, ImageHandle>,
}

impl Resources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_font(&mut self, name: impl Into<String>, handle: FontHandle) {
        self.fonts.insert(name.into(), handle);
    }

    pub fn register_image(&mut self, name: impl Into<String>, handle: ImageHandle) {
        self.images.insert(name.into(), handle);
    }

    pub fn font(&self, name: &str) -> Option<FontHandle> {
        self.fonts.get(name).copied()
    }

    pub fn image(&self, name: &str) -> Option<ImageHandle> {
        self.images.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_registered_handles() {
        let mut resources = Resources::new();
        resources.register_font("ui", FontHandle(3));
        resources.register_image("logo", ImageHandle(7));

        assert_eq!(resources.font("ui"), Some(FontHandle(3)));
        assert_eq!(resources.image("logo"), Some(ImageHandle(7)));
    }

    #[test]
    fn test_unknown_names_return_none() {
        let resources = Resources::new();
        assert_eq!(resources.font("missing"), None);
        assert_eq!(resources.image("missing"), None);
    }
}
