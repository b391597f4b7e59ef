//! Name-to-constructor registry for codecs
//!
//! Codecs are referenced by string identifiers so that pipelines can be
//! assembled from user input. Lookups are case-insensitive and tolerate
//! surrounding whitespace. The process-wide registry is a lazily-initialized,
//! lock-protected map populated with every built-in codec family on first
//! use; there is no hidden initialization ordering between families.

use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use indexmap::IndexMap;

use crate::codec::{Base64, Base64Scheme, Codec, Hex, Text, TextEncoding, Ulid, Uuid};
use crate::error::{BinpipeError, Result};

/// Factory function type for creating codec instances
pub type CodecFactory = Arc<dyn Fn() -> Box<dyn Codec> + Send + Sync>;

struct Entry {
    factory: CodecFactory,
    alias: bool,
}

/// Registry mapping normalized names to codec constructors. Aliases map to
/// the same constructor as their canonical name but are excluded from
/// [`CodecRegistry::list_names`].
pub struct CodecRegistry {
    entries: IndexMap<String, Entry>,
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

impl CodecRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Create a registry populated with every built-in codec family.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();

        registry.register(
            "base64",
            || Box::new(Base64::new(Base64Scheme::Standard)),
            &["b64"],
        );
        registry.register(
            "base64-std",
            || Box::new(Base64::new(Base64Scheme::Standard)),
            &["base64std", "b64std"],
        );
        registry.register(
            "base64-raw",
            || Box::new(Base64::new(Base64Scheme::RawStandard)),
            &["base64raw", "b64raw"],
        );
        registry.register(
            "base64-url",
            || Box::new(Base64::new(Base64Scheme::UrlSafe)),
            &["base64url", "b64url"],
        );
        registry.register(
            "base64-rawurl",
            || Box::new(Base64::new(Base64Scheme::RawUrlSafe)),
            &["base64rawurl", "b64rawurl"],
        );

        registry.register("hex", || Box::new(Hex::new()), &[]);

        registry.register(
            "text",
            || Box::new(Text::new(TextEncoding::Utf8)),
            &["utf-8", "utf8", "txt"],
        );
        registry.register("ascii", || Box::new(Text::new(TextEncoding::Ascii)), &[]);
        registry.register("latin1", || Box::new(Text::new(TextEncoding::Latin1)), &[]);

        registry.register("uuid", || Box::new(Uuid::new()), &["uuid4", "uuid5"]);
        registry.register("ulid", || Box::new(Ulid::new()), &[]);

        registry
    }

    /// Register a codec factory under a canonical name and any number of
    /// aliases. Names are normalized; a later registration for the same name
    /// silently replaces the earlier one.
    pub fn register<F>(&mut self, name: &str, factory: F, aliases: &[&str])
    where
        F: Fn() -> Box<dyn Codec> + Send + Sync + 'static,
    {
        let factory: CodecFactory = Arc::new(factory);
        self.insert(name, factory.clone(), false);
        for alias in aliases {
            self.insert(alias, factory.clone(), true);
        }
    }

    fn insert(&mut self, name: &str, factory: CodecFactory, alias: bool) {
        self.entries.insert(normalize(name), Entry { factory, alias });
    }

    /// Create a fresh, unpopulated codec instance by name.
    pub fn new_by_name(&self, name: &str) -> Result<Box<dyn Codec>> {
        let key = normalize(name);
        match self.entries.get(&key) {
            Some(entry) => Ok((entry.factory)()),
            None => Err(BinpipeError::UnknownCodec(key)),
        }
    }

    /// Check if a codec is registered under the given name or alias
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&normalize(name))
    }

    /// List the canonical (non-alias) codec names, lexicographically sorted.
    pub fn list_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| !entry.alias)
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        names
    }

    /// Get the number of registered names, aliases included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static REGISTRY: LazyLock<RwLock<CodecRegistry>> =
    LazyLock::new(|| RwLock::new(CodecRegistry::with_builtins()));

/// Register a codec factory with the process-wide registry.
pub fn register_codec<F>(name: &str, factory: F, aliases: &[&str])
where
    F: Fn() -> Box<dyn Codec> + Send + Sync + 'static,
{
    REGISTRY
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .register(name, factory, aliases);
}

/// Create a fresh codec instance from the process-wide registry.
pub fn new_codec(name: &str) -> Result<Box<dyn Codec>> {
    REGISTRY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .new_by_name(name)
}

/// List the canonical codec names in the process-wide registry, sorted.
pub fn codec_names() -> Vec<String> {
    REGISTRY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .list_names()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_names_are_sorted_and_canonical() {
        let registry = CodecRegistry::with_builtins();
        let names = registry.list_names();
        assert_eq!(
            names,
            vec![
                "ascii",
                "base64",
                "base64-raw",
                "base64-rawurl",
                "base64-std",
                "base64-url",
                "hex",
                "latin1",
                "text",
                "ulid",
                "uuid",
            ]
        );
        // Aliases resolve but are not listed.
        assert!(registry.contains("b64raw"));
        assert!(!names.contains(&"b64raw".to_string()));

        // 11 canonical names plus 14 aliases, and nothing else.
        assert_eq!(registry.len(), 25);
        assert!(!registry.contains("iso-8859-1"));
    }

    #[test]
    fn lookup_normalizes_case_and_whitespace() {
        let registry = CodecRegistry::with_builtins();
        assert!(registry.new_by_name(" UUID ").is_ok());
        assert!(registry.new_by_name("UuId").is_ok());
        assert!(registry.new_by_name("uuid").is_ok());
    }

    #[test]
    fn last_registration_wins() {
        let mut registry = CodecRegistry::new();
        registry.register("step", || Box::new(Hex::new()), &[]);
        registry.register("step", || Box::new(Base64::new(Base64Scheme::Standard)), &[]);
        assert_eq!(registry.len(), 1);

        // The replacement factory produces base64 codecs, so "zz" is no
        // longer a decodable string.
        let codec = registry.new_by_name("step").unwrap();
        assert!(codec.decode_string("zz").is_err());
        assert!(codec.decode_string("aGVsbG8=").is_ok());
    }
}
