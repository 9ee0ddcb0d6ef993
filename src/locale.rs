//! Locale value type.
//!
//! A deliberately small subset of BCP 47: enough structure to key caches,
//! derive canonical language tags, and produce the legacy underscore names
//! that older tag sets still carry.

use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;

/// A language/script/region/variant/extension combination.
///
/// Equality and hashing cover every subtag. Multiple variants are stored
/// joined with `_`, extensions as their canonical `-` joined tag form
/// (e.g. `u-ca-japanese`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale {
    language: Cow<'static, str>,
    script: Cow<'static, str>,
    region: Cow<'static, str>,
    variant: Cow<'static, str>,
    extensions: Cow<'static, str>,
}

impl Locale {
    /// The root locale: every subtag empty. Matches everything.
    pub const ROOT: Locale = Locale::from_static("", "", "", "", "");

    /// Japanese imperial calendar locale, historically written `ja_JP_JP`.
    pub const JA_JP_JP: Locale = Locale::from_static("ja", "", "JP", "JP", "u-ca-japanese");

    /// Thai digits locale, historically written `th_TH_TH`.
    pub const TH_TH_TH: Locale = Locale::from_static("th", "", "TH", "TH", "u-nu-thai");

    /// Norwegian Nynorsk, historically written `no_NO_NY`.
    pub const NO_NO_NY: Locale = Locale::from_static("no", "", "NO", "NY", "");

    const fn from_static(
        language: &'static str,
        script: &'static str,
        region: &'static str,
        variant: &'static str,
        extensions: &'static str,
    ) -> Self {
        Self {
            language: Cow::Borrowed(language),
            script: Cow::Borrowed(script),
            region: Cow::Borrowed(region),
            variant: Cow::Borrowed(variant),
            extensions: Cow::Borrowed(extensions),
        }
    }

    /// Build a locale from already separated subtags, normalizing case.
    ///
    /// Multiple variants may be passed separated by `_` or `-`.
    pub fn from_parts(language: &str, script: &str, region: &str, variant: &str) -> Self {
        let variant = variant
            .split(['_', '-'])
            .filter(|v| !v.is_empty())
            .collect::<Vec<_>>()
            .join("_");

        Self {
            language: Cow::Owned(normalize_language(language)),
            script: Cow::Owned(titlecase(script)),
            region: Cow::Owned(region.to_ascii_uppercase()),
            variant: Cow::Owned(variant),
            extensions: Cow::Borrowed(""),
        }
    }

    /// Parse a language tag. Accepts `-` or `_` as separators.
    ///
    /// Parsing never fails: a tag whose leading subtag is not a language
    /// yields [`Locale::ROOT`], and unrecognized trailing subtags are read as
    /// variants.
    pub fn parse(tag: &str) -> Locale {
        let mut subtags = tag.split(['-', '_']).filter(|s| !s.is_empty()).peekable();

        let language = match subtags.next() {
            Some(s) if is_language(s) => normalize_language(s),
            _ => return Locale::ROOT,
        };

        let script = subtags
            .next_if(|s| is_script(s))
            .map(titlecase)
            .unwrap_or_default();

        let region = subtags
            .next_if(|s| is_region(s))
            .map(str::to_ascii_uppercase)
            .unwrap_or_default();

        let mut variants = Vec::new();
        while let Some(v) = subtags.next_if(|s| s.len() > 1) {
            variants.push(v);
        }

        let mut extensions: Vec<String> = Vec::new();
        while let Some(singleton) = subtags.next() {
            let singleton = singleton.to_ascii_lowercase();
            let body: Vec<String> = if singleton == "x" {
                // Private use swallows everything after it.
                subtags.by_ref().map(str::to_ascii_lowercase).collect()
            } else {
                let mut body = Vec::new();
                while let Some(s) = subtags.next_if(|s| s.len() > 1) {
                    body.push(s.to_ascii_lowercase());
                }
                body
            };

            if !body.is_empty() {
                extensions.push(format!("{}-{}", singleton, body.join("-")));
            }
        }
        extensions.sort_by_key(|e| (e.starts_with("x-"), e.clone()));

        Locale {
            language: Cow::Owned(language),
            script: Cow::Owned(script),
            region: Cow::Owned(region),
            variant: Cow::Owned(variants.join("_")),
            extensions: Cow::Owned(extensions.join("-")),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn script(&self) -> &str {
        &self.script
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Variant subtags joined with `_`.
    pub fn variant(&self) -> &str {
        &self.variant
    }

    pub fn extensions(&self) -> &str {
        &self.extensions
    }

    pub fn is_root(&self) -> bool {
        *self == Locale::ROOT
    }

    /// Same locale without any extension subtags.
    pub fn strip_extensions(&self) -> Locale {
        if self.extensions.is_empty() {
            return self.clone();
        }
        Locale {
            extensions: Cow::Borrowed(""),
            ..self.clone()
        }
    }

    /// Canonical `-` separated language tag. The root locale is `und`.
    pub fn to_language_tag(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(5);
        parts.push(if self.language.is_empty() {
            "und"
        } else {
            &*self.language
        });
        if !self.script.is_empty() {
            parts.push(&self.script);
        }
        if !self.region.is_empty() {
            parts.push(&self.region);
        }
        parts.extend(self.variant.split('_').filter(|v| !v.is_empty()));
        if !self.extensions.is_empty() {
            parts.push(&self.extensions);
        }
        parts.join("-")
    }

    /// Legacy underscore name, e.g. `ja_JP_JP` or `zh_TW_#Hant`.
    ///
    /// Empty inner fields are kept as empty segments (`en__POSIX`) and the
    /// script and extensions follow a `#` marker.
    pub fn legacy_name(&self) -> String {
        let l = !self.language.is_empty();
        let s = !self.script.is_empty();
        let r = !self.region.is_empty();
        let v = !self.variant.is_empty();
        let e = !self.extensions.is_empty();

        let mut name = self.language.to_string();
        if r || (l && (v || s || e)) {
            name.push('_');
            name.push_str(&self.region);
        }
        if v && (l || r) {
            name.push('_');
            name.push_str(&self.variant);
        }
        if s && (l || r) {
            name.push_str("_#");
            name.push_str(&self.script);
        }
        if e && (l || r) {
            name.push('_');
            if !s {
                name.push('#');
            }
            name.push_str(&self.extensions);
        }
        name
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::ROOT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_language_tag())
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn is_language(s: &str) -> bool {
    (2..=8).contains(&s.len()) && s.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_script(s: &str) -> bool {
    s.len() == 4 && s.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_region(s: &str) -> bool {
    (s.len() == 2 && s.chars().all(|c| c.is_ascii_alphabetic()))
        || (s.len() == 3 && s.chars().all(|c| c.is_ascii_digit()))
}

fn normalize_language(s: &str) -> String {
    let lower = s.to_ascii_lowercase();
    if lower == "und" {
        String::new()
    } else {
        lower
    }
}

fn titlecase(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => std::iter::once(first.to_ascii_uppercase())
            .chain(chars.map(|c| c.to_ascii_lowercase()))
            .collect(),
        None => String::new(),
    }
}
