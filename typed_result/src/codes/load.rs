//! Layering a [`CodeMap`] from configuration providers.

use std::collections::BTreeMap;
use std::path::Path;

use figment::Figment;
use figment::providers::Env;
use serde::Deserialize;
use uncased::UncasedStr;

use super::CodeMap;
use crate::{CodeMapError, Kind, UnknownKind};

/// Prefix of environment variables read by [`providers`].
pub const ENV_PREFIX: &str = "TYPED_RESULT_";

/// Raw settings before kind names are resolved.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CodeSettings {
    success: Option<u16>,
    fallback: Option<u16>,
    codes: BTreeMap<String, u16>,
}

/// Build the default provider stack for a code map.
///
/// `path` is read as TOML when the `toml` feature is enabled and may be
/// absent. Environment variables prefixed with [`ENV_PREFIX`] are merged on
/// top, with `__` separating nested keys, so
/// `TYPED_RESULT_CODES__CONFLICT=499` overrides `codes.Conflict`.
#[must_use]
pub fn providers(path: impl AsRef<Path>) -> Figment {
    file_layer(Figment::new(), path.as_ref()).merge(Env::prefixed(ENV_PREFIX).split("__"))
}

#[cfg(feature = "toml")]
fn file_layer(figment: Figment, path: &Path) -> Figment {
    use figment::providers::{Format, Toml};

    figment.merge(Toml::file(path))
}

#[cfg(not(feature = "toml"))]
fn file_layer(figment: Figment, path: &Path) -> Figment {
    tracing::debug!(path = %path.display(), "toml support disabled; skipping code map file");
    figment
}

impl<K: Kind> CodeMap<K> {
    /// Layer settings extracted from `figment` over this table.
    ///
    /// Recognised keys are `success`, `fallback` and a `codes` table keyed by
    /// kind name. Kind names match case-insensitively and ignore `_` and `-`,
    /// so `NotFound`, `not_found` and `NOT-FOUND` name the same kind.
    ///
    /// # Errors
    ///
    /// Returns [`CodeMapError::Gathering`] when the providers cannot be
    /// extracted and [`CodeMapError::UnknownKind`] when a key names a kind
    /// outside `K`.
    pub fn merge_from(mut self, figment: &Figment) -> Result<Self, CodeMapError> {
        let settings: CodeSettings = figment.extract()?;

        if let Some(code) = settings.success {
            tracing::debug!(code, "overriding success code");
            self.success = code;
        }
        if let Some(code) = settings.fallback {
            tracing::debug!(code, "overriding fallback code");
            self.fallback = code;
        }
        for (key, code) in settings.codes {
            let kind = resolve_kind::<K>(&key)?;
            tracing::debug!(%kind, code, "overriding outcome code");
            self.codes.insert(kind, code);
        }
        Ok(self)
    }
}

fn normalise(name: &str) -> String {
    name.chars().filter(|c| !matches!(c, '_' | '-')).collect()
}

fn resolve_kind<K: Kind>(key: &str) -> Result<K, UnknownKind> {
    let wanted = normalise(key);
    K::ALL
        .iter()
        .copied()
        .find(|kind| UncasedStr::new(&normalise(kind.name())) == UncasedStr::new(&wanted))
        .ok_or_else(|| UnknownKind::new::<K>(key))
}
