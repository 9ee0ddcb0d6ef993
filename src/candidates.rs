//! Candidate locale chains for resource lookup.

use crate::locale::Locale;

/// Produces the ordered list of locales to try when loading a resource
/// bundle, most specific first, ending at the root locale.
pub trait CandidateLocaleResolver: Send + Sync {
    fn candidate_locales(&self, base_name: &str, locale: &Locale) -> Vec<Locale>;
}

/// Default chain with no fallback to any other locale.
///
/// For `language-Script-REGION-variant` the chain drops variants right to
/// left, then the region, then the script, then repeats without the script,
/// and ends with root. Extensions never take part.
///
/// This is the plain structural chain only. Language-specific rewrites such
/// as Norwegian `no-NO-NY` to `nn-NO` or inferring a Chinese script from the
/// region are not applied; supply a custom [`CandidateLocaleResolver`] when
/// those are needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCandidates;

impl CandidateLocaleResolver for DefaultCandidates {
    fn candidate_locales(&self, _base_name: &str, locale: &Locale) -> Vec<Locale> {
        let locale = locale.strip_extensions();
        if locale.is_root() {
            return vec![Locale::ROOT];
        }

        let language = locale.language();
        let script = locale.script();
        let region = locale.region();
        let variants: Vec<&str> = locale.variant().split('_').filter(|v| !v.is_empty()).collect();

        let mut chain: Vec<Locale> = Vec::new();
        let mut push = |candidate: Locale| {
            if !chain.contains(&candidate) {
                chain.push(candidate);
            }
        };

        if !script.is_empty() {
            for end in (1..=variants.len()).rev() {
                push(Locale::from_parts(language, script, region, &variants[..end].join("_")));
            }
            if !region.is_empty() {
                push(Locale::from_parts(language, script, region, ""));
            }
            push(Locale::from_parts(language, script, "", ""));
        }

        for end in (1..=variants.len()).rev() {
            push(Locale::from_parts(language, "", region, &variants[..end].join("_")));
        }
        if !region.is_empty() {
            push(Locale::from_parts(language, "", region, ""));
        }
        if !language.is_empty() {
            push(Locale::from_parts(language, "", "", ""));
        }
        push(Locale::ROOT);

        chain
    }
}
