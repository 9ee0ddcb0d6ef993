use super::tagset::TagSet;
use crate::locale::Locale;

/// Legacy locale names that are always supported, whatever the tag set says.
const LEGACY_TAGS: [&str; 3] = ["ja-JP-JP", "th-TH-TH", "no-NO-NY"];

/// Whether `locale` is supported by a provider declaring `tags`.
///
/// The root locale always matches. Otherwise the locale, stripped of
/// extensions, matches if its language tag or its legacy name (with `_`
/// turned into `-`) is in `tags`, or if the legacy name is one of the three
/// historic aliases.
pub fn is_supported_provider_locale(locale: &Locale, tags: &TagSet) -> bool {
    if locale.is_root() {
        return true;
    }

    let locale = locale.strip_extensions();
    if tags.contains(&locale.to_language_tag()) {
        return true;
    }

    let legacy = locale.legacy_name().replace('_', "-");
    tags.contains(&legacy) || LEGACY_TAGS.contains(&legacy.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::tagset::split_tags;
    use proptest::prelude::*;

    #[test]
    fn test_root_always_supported() {
        assert!(is_supported_provider_locale(&Locale::ROOT, &TagSet::new()));
    }

    #[test]
    fn test_language_tag_membership() {
        let tags = split_tags("en en-US");
        assert!(is_supported_provider_locale(&Locale::parse("en-US"), &tags));
        assert!(is_supported_provider_locale(&Locale::parse("en"), &tags));
        assert!(!is_supported_provider_locale(&Locale::parse("en-GB"), &tags));
    }

    #[test]
    fn test_extensions_ignored() {
        let tags = split_tags("de-DE");
        assert!(is_supported_provider_locale(
            &Locale::parse("de-DE-u-co-phonebk"),
            &tags
        ));
    }

    #[test]
    fn test_legacy_name_membership() {
        // Script locales have a legacy name distinct from their tag.
        let tags = split_tags("zh-TW-#Hant");
        assert!(is_supported_provider_locale(&Locale::parse("zh-Hant-TW"), &tags));
    }

    #[test]
    fn test_legacy_aliases_always_supported() {
        let empty = TagSet::new();
        assert!(is_supported_provider_locale(&Locale::parse("no-NO-NY"), &empty));
        assert!(is_supported_provider_locale(&Locale::parse("ja-JP-JP"), &empty));
        assert!(is_supported_provider_locale(&Locale::parse("th-TH-TH"), &empty));
        assert!(is_supported_provider_locale(&Locale::JA_JP_JP, &empty));
        assert!(is_supported_provider_locale(&Locale::TH_TH_TH, &empty));
    }

    #[test]
    fn test_unknown_locale_unsupported() {
        assert!(!is_supported_provider_locale(&Locale::parse("xx-YY"), &TagSet::new()));
    }

    #[test]
    fn test_empty_set_rejects_non_root() {
        let empty = TagSet::new();
        for tag in ["en", "en-US", "fr-FR", "ja-JP"] {
            assert!(!is_supported_provider_locale(&Locale::parse(tag), &empty));
        }
    }

    proptest! {
        #[test]
        fn prop_listed_tag_is_supported(lang in "[a-z]{2,3}", region in "[A-Z]{2}") {
            let tag = format!("{}-{}", lang, region);
            let tags = split_tags(&tag);
            prop_assert!(is_supported_provider_locale(&Locale::parse(&tag), &tags));
        }
    }
}
