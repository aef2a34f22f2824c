use std::borrow::Cow;

use anyhow::anyhow;
use gpui::{AssetSource, Result, SharedString};

/// A single source of embedded or on-disk assets.
pub trait AssetProvider: Send + Sync {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>>;
    fn list(&self, path: &str) -> Result<Vec<SharedString>>;
}

/// An [`AssetSource`] that consults an ordered chain of providers, so an app
/// can layer its own assets over the ones bundled with this crate. The first
/// provider that knows a path wins.
#[derive(Default)]
pub struct Assets {
    providers: Vec<Box<dyn AssetProvider>>,
}

impl Assets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a provider to the end of the chain.
    pub fn with(mut self, provider: impl AssetProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }
}

#[macro_export]
macro_rules! assets {
    ( $( $item:expr ),* $(,)? ) => {
        $crate::Assets::new()$( .with($item) )*
    };
}

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }

        self.providers
            .iter()
            .find_map(|provider| provider.get(path))
            .map(Some)
            .ok_or_else(|| anyhow!("no asset provider knows the path {path:?}"))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut entries = Vec::new();

        for provider in &self.providers {
            entries.extend(provider.list(path)?);
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str, &'static [u8]);

    impl AssetProvider for Fixed {
        fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
            (path == self.0).then_some(Cow::Borrowed(self.1))
        }

        fn list(&self, path: &str) -> Result<Vec<SharedString>> {
            Ok(self
                .0
                .starts_with(path)
                .then(|| self.0.into())
                .into_iter()
                .collect())
        }
    }

    #[test]
    fn test_first_provider_wins() {
        let assets = assets![Fixed("icons/a.svg", b"first"), Fixed("icons/a.svg", b"second")];

        let loaded = assets.load("icons/a.svg").unwrap().unwrap();
        assert_eq!(loaded.as_ref(), b"first");
    }

    #[test]
    fn test_falls_through_to_later_providers() {
        let assets = assets![Fixed("icons/a.svg", b"a"), Fixed("icons/b.svg", b"b")];

        let loaded = assets.load("icons/b.svg").unwrap().unwrap();
        assert_eq!(loaded.as_ref(), b"b");
    }

    #[test]
    fn test_empty_path_is_not_an_error() {
        let assets = assets![Fixed("icons/a.svg", b"a")];

        assert!(assets.load("").unwrap().is_none());
    }

    #[test]
    fn test_unknown_path_errors() {
        let assets = assets![Fixed("icons/a.svg", b"a")];

        assert!(assets.load("icons/missing.svg").is_err());
    }

    #[test]
    fn test_list_merges_providers() {
        let assets = assets![Fixed("icons/a.svg", b"a"), Fixed("icons/b.svg", b"b")];

        let entries = assets.list("icons/").unwrap();
        assert_eq!(entries, vec!["icons/a.svg", "icons/b.svg"]);
    }
}
