//! Fixed allow-list of known top-level domains.
//!
//! A hostname whose final label is not in this table is rejected before any
//! network I/O happens. The table covers the ISO country codes plus the
//! generic TLDs that actually show up in shortened links; it is not meant to
//! track the full IANA root zone.

/// Generic and sponsored TLDs.
const GENERIC_TLDS: &[&str] = &[
    "aero", "agency", "ai", "app", "asia", "biz", "blog", "cat", "cloud", "club",
    "com", "coop", "dev", "digital", "edu", "email", "gov", "info", "int", "io",
    "jobs", "link", "live", "media", "mil", "mobi", "museum", "name", "net", "network",
    "news", "online", "org", "page", "pro", "shop", "site", "space", "store", "systems",
    "tech", "tel", "today", "travel", "website", "world", "xyz", "zone",
];

/// Country-code TLDs (ISO 3166).
const COUNTRY_TLDS: &[&str] = &[
    "ac", "ad", "ae", "af", "ag", "al", "am", "ao", "aq", "ar",
    "as", "at", "au", "aw", "ax", "az", "ba", "bb", "bd", "be",
    "bf", "bg", "bh", "bi", "bj", "bm", "bn", "bo", "br", "bs",
    "bt", "bw", "by", "bz", "ca", "cc", "cd", "cf", "cg", "ch",
    "ci", "ck", "cl", "cm", "cn", "co", "cr", "cu", "cv", "cw",
    "cx", "cy", "cz", "de", "dj", "dk", "dm", "do", "dz", "ec",
    "ee", "eg", "er", "es", "et", "eu", "fi", "fj", "fk", "fm",
    "fo", "fr", "ga", "gd", "ge", "gf", "gg", "gh", "gi", "gl",
    "gm", "gn", "gp", "gq", "gr", "gs", "gt", "gu", "gw", "gy",
    "hk", "hm", "hn", "hr", "ht", "hu", "id", "ie", "il", "im",
    "in", "iq", "ir", "is", "it", "je", "jm", "jo", "jp", "ke",
    "kg", "kh", "ki", "km", "kn", "kp", "kr", "kw", "ky", "kz",
    "la", "lb", "lc", "li", "lk", "lr", "ls", "lt", "lu", "lv",
    "ly", "ma", "mc", "md", "me", "mg", "mh", "mk", "ml", "mm",
    "mn", "mo", "mp", "mq", "mr", "ms", "mt", "mu", "mv", "mw",
    "mx", "my", "mz", "na", "nc", "ne", "nf", "ng", "ni", "nl",
    "no", "np", "nr", "nu", "nz", "om", "pa", "pe", "pf", "pg",
    "ph", "pk", "pl", "pm", "pn", "pr", "ps", "pt", "pw", "py",
    "qa", "re", "ro", "rs", "ru", "rw", "sa", "sb", "sc", "sd",
    "se", "sg", "sh", "si", "sk", "sl", "sm", "sn", "so", "sr",
    "ss", "st", "sv", "sx", "sy", "sz", "tc", "td", "tf", "tg",
    "th", "tj", "tk", "tl", "tm", "tn", "to", "tr", "tt", "tv",
    "tw", "tz", "ua", "ug", "uk", "us", "uy", "uz", "va", "vc",
    "ve", "vg", "vi", "vn", "vu", "wf", "ws", "ye", "yt", "za",
    "zm", "zw",
];

/// Second-level labels allowed to be shorter than the registrable minimum,
/// covering registry suffixes like `co.uk`, `ac.jp`, or `go.kr`.
pub const SHORT_SLD_EXCEPTIONS: &[&str] = &["co", "ac", "go", "or", "ne", "com"];

/// Returns true if `tld` (lowercase, no leading dot) is in the allow-list.
pub fn is_known_tld(tld: &str) -> bool {
    GENERIC_TLDS.contains(&tld) || COUNTRY_TLDS.contains(&tld)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_generic_tlds_are_known() {
        for tld in ["com", "org", "net", "io", "dev", "app"] {
            assert!(is_known_tld(tld), "expected '{tld}' to be known");
        }
    }

    #[test]
    fn test_country_tlds_are_known() {
        for tld in ["uk", "de", "jp", "br", "es", "mx"] {
            assert!(is_known_tld(tld), "expected '{tld}' to be known");
        }
    }

    #[test]
    fn test_garbage_tlds_are_unknown() {
        for tld in ["notatld", "localdomain", "internal", "lan", "x"] {
            assert!(!is_known_tld(tld), "expected '{tld}' to be unknown");
        }
    }

    #[test]
    fn test_tables_are_lowercase_and_nonempty() {
        for tld in GENERIC_TLDS.iter().chain(COUNTRY_TLDS) {
            assert!(!tld.is_empty());
            assert_eq!(**tld, tld.to_lowercase());
        }
    }
}
