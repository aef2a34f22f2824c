#![allow(missing_docs)] // Derive macros generate undocumented methods.

cfg_if::cfg_if!(
    if #[cfg(feature = "assets")] {
        use std::borrow::Cow;

        use gpui::Result;
        use rust_embed::RustEmbed;

        use crate::assets::assets::AssetProvider;

        /// Embedded assets bundled with the crate.
        #[derive(RustEmbed)]
        #[folder = "assets/"]
        #[include = "icons/**/*.svg"]
        #[exclude = "*.DS_Store"]
        pub struct CircuitAssets;

        impl AssetProvider for CircuitAssets {
            fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
                <Self as RustEmbed>::get(path).map(|f| f.data)
            }

            fn list(&self, path: &str) -> Result<Vec<SharedString>> {
                Ok(CircuitAssets::iter()
                    .filter_map(|p| p.starts_with(path).then(|| p.into()))
                    .collect())
            }
        }
    }
);

use enum_assoc::Assoc;
use gpui::SharedString;

/// Built-in icon identifiers that map to bundled SVG assets.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn path(&self) -> SharedString)]
pub enum CircuitIconKind {
    /// Heart icon for favorite toggles.
    #[assoc(path = "icons/heart.svg".into())]
    Heart,

    /// Checkmark icon for completion badges.
    #[assoc(path = "icons/check.svg".into())]
    Check,
}

impl Into<SharedString> for CircuitIconKind {
    fn into(self) -> SharedString {
        self.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_paths() {
        assert_eq!(CircuitIconKind::Heart.path(), "icons/heart.svg");
        assert_eq!(CircuitIconKind::Check.path(), "icons/check.svg");
    }

    #[cfg(feature = "assets")]
    #[test]
    fn test_bundled_icons_exist() {
        for icon in [CircuitIconKind::Heart, CircuitIconKind::Check] {
            assert!(
                CircuitAssets.get(icon.path().as_ref()).is_some(),
                "icon asset {:?} should be embedded",
                icon.path()
            );
        }
    }
}
