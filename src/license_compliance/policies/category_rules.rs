//! Exact-match license category rules.
//!
//! Each rule lists the combined license expressions (already passed through
//! the conversion table) that belong to one report category. Rules are
//! evaluated in declaration order and the first match wins, so an expression
//! listed under two categories lands in the earlier one.

use crate::license_compliance::domain::LicenseCategory;

/// One category and the exact expression strings that select it
#[derive(Debug)]
pub struct CategoryRule {
    pub category: LicenseCategory,
    pub expressions: &'static [&'static str],
}

/// Category rules in priority order
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: LicenseCategory::Apache2,
        expressions: APACHE_2,
    },
    CategoryRule {
        category: LicenseCategory::AdvertisingClause,
        expressions: ADVERTISING_CLAUSE,
    },
    CategoryRule {
        category: LicenseCategory::Attribution,
        expressions: ATTRIBUTION,
    },
    CategoryRule {
        category: LicenseCategory::Cc0OrPublicDomain,
        expressions: CC0_OR_PUBLIC_DOMAIN,
    },
    CategoryRule {
        category: LicenseCategory::Copyleft,
        expressions: COPYLEFT,
    },
    CategoryRule {
        category: LicenseCategory::Json,
        expressions: JSON,
    },
    CategoryRule {
        category: LicenseCategory::ProprietaryNotices,
        expressions: PROPRIETARY_NOTICES,
    },
    CategoryRule {
        category: LicenseCategory::StandardsBodies,
        expressions: STANDARDS_BODIES,
    },
    CategoryRule {
        category: LicenseCategory::UseRestrictions,
        expressions: USE_RESTRICTIONS,
    },
    CategoryRule {
        category: LicenseCategory::WeakCopyleft,
        expressions: WEAK_COPYLEFT,
    },
];

const APACHE_2: &[&str] = &[
    "Apache-2.0",
];

const ADVERTISING_CLAUSE: &[&str] = &[
    "Apache-2.0 AND BSD-4-Clause",
    "BSD-3-Clause AND BSD-4-Clause",
    "BSD-4-Clause",
];

const ATTRIBUTION: &[&str] = &[
    "AFL-2.1",
    "AFL-2.1 AND Apache-2.0",
    "ANTLR-PD AND BSD-3-Clause",
    "Apache",
    "Apache AND BSD AND Public Domain",
    "Apache-1.1",
    "Apache-1.1 AND Apache-2.0",
    "Apache-1.1 AND Apache-2.0 AND BSD-2-Clause AND BSD-3-Clause AND Public Domain AND XPP-1.1.1 AND XPP-1.2",
    "Apache-1.1 AND Apache-2.0 AND BSD-2-Clause AND BSD-3-Clause AND XPP-1.1.1 AND XPP-1.2",
    "Apache-1.1 AND Apache-2.0 AND BSD-2-Clause AND ISC AND MIT",
    "Apache-1.1 AND Apache-2.0 AND BSD-3-Clause",
    "Apache-1.1 AND Apache-2.0 AND BSD-3-Clause AND ISC AND MIT AND Non-Standard AND Public Domain AND Python-2.0 AND SMLNJ AND Zlib",
    "Apache-1.1 AND Apache-2.0 AND MIT",
    "Apache-1.1 AND Apache-2.0 AND Public Domain AND SMLNJ AND W3C",
    "Apache-1.1 AND Apache-2.0 AND XPP-1.2",
    "Apache-1.1 AND BSD-3-Clause",
    "Apache-1.1 AND Public Domain AND XPP-1.1.1 AND XPP-1.2",
    "Apache-2.0 AND BSD",
    "Apache-2.0 AND BSD AND BSD-3-Clause",
    "Apache-2.0 AND BSD-2-Clause",
    "Apache-2.0 AND BSD-2-Clause AND BSD-3-Clause",
    "Apache-2.0 AND BSD-2-Clause AND BSD-3-Clause AND MIT",
    "Apache-2.0 AND BSD-2-Clause AND BSD-3-Clause AND Non-Standard",
    "Apache-2.0 AND BSD-2-Clause AND Public Domain",
    "Apache-2.0 AND BSD-3-Clause",
    "Apache-2.0 AND BSD-3-Clause AND CC-BY-2.5",
    "Apache-2.0 AND BSD-3-Clause AND MIT",
    "Apache-2.0 AND BSD-3-Clause AND MIT AND Public Domain",
    "Apache-2.0 AND BSD-3-Clause AND EDL-1.0 AND MIT",
    "Apache-2.0 AND CC-BY-2.5",
    "Apache-2.0 AND EDL-1.0",
    "Apache-2.0 AND ISC",
    "Apache-2.0 AND MIT",
    "Apache-2.0 AND MIT AND OFL-1.1",
    "Apache-2.0 AND Public Domain",
    "Apache-2.0 AND Public Domain AND W3C",
    "Apache-2.0 AND W3C",
    "Artistic-2.0",
    "Bouncycastle-license AND MIT",
    "BSD",
    "BSD AND MIT",
    "BSD AND WTFPL",
    "BSD-2-Clause",
    "BSD-2-Clause AND BSD-3-Clause",
    "BSD-2-Clause AND BSD-3-Clause AND MIT",
    "BSD-2-Clause AND ISC",
    "BSD-2-Clause AND MIT",
    "BSD-2-Clause AND WTFPL",
    "BSD-3-Clause",
    "BSD-3-Clause AND EDL-1.0 AND Public Domain",
    "BSD-3-Clause AND MIT",
    "BSD-3-Clause AND Public Domain",
    "BSD-3-Clause or MIT",
    "BSD-3-Clause AND WTFPL",
    "CC-BY-2.5",
    "CC-BY-2.5 AND MIT",
    "CC-BY-3.0 AND MIT",
    "CC-BY-3.0 AND MIT AND OFL-1.1",
    "CC-PDDC AND MIT",
    "DOM4j-License",
    "EDL-1.0 AND Public Domain",
    "ISC",
    "ISC AND MIT",
    "MIT",
    "MIT AND OFL-1.1",
    "MIT AND Public Domain",
    "MIT AND X11",
    "NTP",
    "PostgreSQL",
    "Public Domain AND W3C",
    "Public Domain AND W3C AND Zlib",
    "Public Domain AND XPP-1.2",
    "Python",
    "Unicode",
    "W3C",
    "XPP-1.1.1",
    "Zlib",
];

const CC0_OR_PUBLIC_DOMAIN: &[&str] = &[
    "Apache-2.0 AND CC0-1.0",
    "Apache-2.0 AND CC0-1.0 AND Public Domain",
    "BSD-2-Clause AND CC0-1.0 AND Public Domain",
    "BSD-3-Clause AND CC0-1.0",
    "CC-PDDC",
    "CC0-1.0",
    "CC0-1.0 AND MIT",
    "CC0-1.0 AND Public Domain",
    "Public Domain",
];

const COPYLEFT: &[&str] = &[
    "Apache-1.1 AND Apache-2.0 AND GPL-3.0",
    "Apache-2.0 AND BSD-3-Clause AND GPL-2.0-with-classpath-exception AND MIT",
    "Apache-2.0 AND GPL-2.0 AND Non-Standard",
    "Apache-2.0 AND GPL-3.0",
    "Apache-2.0 AND MongoDB-SSPL-1.0 AND Non-Standard",
    "BSD-3-Clause AND GPL-2.0-with-classpath-exception",
    "GPL",
    "GPL-2.0",
    "GPL-2.0-with-classpath-exception",
    "GPL-2.0-with-classpath-exception AND LGPL-2.1",
    "GPL-2.0-with-classpath-exception AND MIT",
    "GPL-3.0",
    "GPL-3.0 AND MIT",
    "MongoDB-SSPL-1.0 AND Non-Standard",
];

const JSON: &[&str] = &[
    "Apache-2.0 AND JSON",
    "JSON",
];

const PROPRIETARY_NOTICES: &[&str] = &[
    "Apache-1.1 AND Sun-IP",
    "Apache-2.0 AND CDDL-1.1 AND JSON AND Sun-IP",
    "Apache-2.0 AND Public Domain AND Sun-IP AND W3C",
    "Oracle-FUTC-RD10082018",
    "Sun",
    "Sun-IP",
    "Sun-Restricted",
    "MIT AND Public Domain AND Sun-IP",
    "Apache-1.1 AND Apache-2.0 AND CDDL-1.0 AND Sun-IP AND Sun-Restricted",
    "Apache-1.1 AND Apache-2.0 AND Sun-IP",
    "Apache-2.0 AND Sun-IP AND Sun-Restricted",
];

const STANDARDS_BODIES: &[&str] = &[
    "Apache-2.0 AND BSD-2-Clause AND BSD-3-Clause AND ISO-8879",
    "Apache-2.0 AND OASIS AND W3C AND WS-Addressing-200408",
    "Apache-2.0 AND W3C AND WS-Addressing-200403 AND WS-Addressing-200408",
    "Apache-2.0 AND OASIS",
    "Apache-2.0 AND OASIS AND W3C",
    "Apache-2.0 AND OASIS AND WS-Addressing-200408",
    "ISO-8879",
    "OASIS",
    "OASIS AND WS-Addressing-200408",
    "WS-Addressing-200403 AND WS-Addressing-200408",
    "WS-Addressing-200408",
];

const USE_RESTRICTIONS: &[&str] = &[
    "ATT",
    "CC-BY-NC-3.0",
    "COMMERCIAL",
    "AGPL-3.0 AND Apache-2.0 AND BSD-2-Clause AND CDDL-1.0 AND COMMERCIAL AND CPL-1.0 AND ISC AND LGPL-3.0 AND MIT AND Plexus",
    "Apache-2.0 AND BSD-2-Clause AND CDDL-1.0 AND COMMERCIAL AND CPL-1.0 AND EPL-1.0 AND ISC AND LGPL-3.0 AND MIT AND Plexus",
    "Apache-2.0 AND COMMERCIAL AND EPL-1.0 AND LGPL-2.1 AND MIT",
    "Apache-2.0 AND COMMERCIAL AND MIT",
];

const WEAK_COPYLEFT: &[&str] = &[
    "Adobe-AFM AND Apache AND BSD-3-Clause AND CC-BY-2.5 AND MIT AND MPL-1.1 AND Non-Standard AND Public Domain AND Unicode",
    "Adobe-AFM AND Apache-2.0 AND BSD-3-Clause AND MPL-1.1 AND Non-Standard AND Public Domain AND Unicode",
    "Apache-1.1 AND Apache-2.0 AND BSD-3-Clause AND EPL-1.0 AND Generic-Liberal-Clause AND HPND AND ISC AND LGPL-2.1 AND MIT AND MPL-2.0 AND Public Domain AND Python-2.0 AND Zlib",
    "Apache-1.1 AND Apache-2.0 AND BSD-3-Clause AND CPL-1.0 AND EPL-1.0 AND EPL-2.0",
    "Apache-1.1 AND Apache-2.0 AND BSD-3-Clause AND Generic-Liberal-Clause AND HPND AND ISC AND LGPL-2.1 AND MIT AND Public Domain AND Zlib",
    "Apache-1.1 AND Apache-2.0 AND CDDL-1.1",
    "Apache-1.1 AND Apache-2.0 AND LGPL-2.1 AND Non-Standard AND W3C",
    "Apache-1.1 AND BSD-3-Clause AND EPL-1.0 AND EPL-2.0",
    "Apache-1.1 AND CDDL-1.1 AND Sun-Restricted",
    "Apache-1.1 AND CPL-1.0 AND EPL-1.0",
    "Apache-1.1 AND EPL-1.0",
    "Apache-1.1 AND LGPL-3.0",
    "Apache-2.0 AND BSD-2-Clause AND EPL AND MIT AND Public Domain AND Ruby AND Zlib",
    "Apache-2.0 AND BSD-2-Clause AND BSD-3-Clause AND CC0-1.0 AND EDL-1.0 AND EPL-2.0 AND MIT AND Public Domain AND W3C",
    "Apache-2.0 AND BSD-2-Clause AND BSD-3-Clause AND CC0-1.0 AND EPL-2.0 AND MIT AND Public Domain AND W3C",
    "Apache-2.0 AND BSD-3-Clause AND CC-BY-2.5 AND CPL-1.0 AND Public Domain",
    "Apache-2.0 AND BSD-3-Clause AND CC0-1.0 AND EPL-2.0 AND MIT AND Public Domain AND W3C",
    "Apache-2.0 AND BSD-3-Clause AND CC0-1.0 AND CDDL-1.1 AND Public Domain",
    "Apache-2.0 AND BSD-3-Clause AND CDDL-1.0 AND CDDL-1.1 AND EPL-1.0 AND MIT AND Non-Standard AND Public Domain AND Sun-IP",
    "Apache-2.0 AND BSD-3-Clause AND CDDL-1.1",
    "Apache-2.0 AND BSD-3-Clause AND CDDL-1.1 AND MIT",
    "Apache-2.0 AND BSD-3-Clause AND CPL-1.0 AND Public Domain",
    "Apache-2.0 AND BSD-3-Clause AND CPL-1.0 AND EPL-1.0 AND EPL-2.0 AND MPL-1.1 AND Public Domain",
    "Apache-2.0 AND BSD-3-Clause AND EPL-1.0",
    "Apache-2.0 AND BSD-3-Clause AND EPL-1.0 AND MIT AND MPL-1.1 AND Non-Standard AND Public Domain AND Sun-IP AND Sun-Restricted AND W3C",
    "Apache-2.0 AND BSD-3-Clause AND EPL-2.0",
    "Apache-2.0 AND BSD-3-Clause AND EPL-2.0 AND MPL-1.1 AND Public Domain",
    "Apache-2.0 AND CC0-1.0 AND CDDL-1.1 AND Public Domain",
    "Apache-2.0 AND CC0-1.0 AND CDDL-1.1 AND MIT",
    "Apache-2.0 AND CC0-1.0 AND EPL-2.0",
    "Apache-2.0 AND CC0-1.0 AND EPL-2.0 AND Public Domain",
    "Apache-2.0 AND CC0-1.0 AND LGPL-2.1",
    "Apache-2.0 AND CDDL-1.0",
    "Apache-2.0 AND CDDL-1.0 AND CDDL-1.1",
    "Apache-2.0 AND CDDL-1.0 AND CDDL-1.1 AND EPL-1.0 AND Sun-IP",
    "Apache-2.0 AND CDDL-1.1",
    "Apache-2.0 AND CDDL-1.1 AND EPL-1.0",
    "Apache-2.0 AND CDDL-1.1 AND LGPL-2.1",
    "Apache-2.0 AND CDDL-1.1 AND Public Domain",
    "Apache-2.0 AND CPL-1.0 AND MIT",
    "Apache-2.0 AND CPL-1.0 AND Public Domain",
    "Apache-2.0 AND EPL-1.0",
    "Apache-2.0 AND EPL-1.0 AND EPL-2.0",
    "Apache-2.0 AND EPL-1.0 AND ISC",
    "Apache-2.0 AND EPL-1.0 AND MIT",
    "Apache-2.0 AND EPL-1.0 AND MIT AND W3C",
    "Apache-2.0 AND EPL-2.0",
    "Apache-2.0 AND HPND AND LGPL-2.1",
    "Apache-2.0 AND ISO-8879 AND LGPL-3.0 AND W3C",
    "Apache-2.0 AND LGPL-2.1",
    "Apache-2.0 AND LGPL-2.1 AND MIT",
    "Apache-2.0 AND LGPL-2.1 AND LGPL-3.0",
    "Apache-2.0 AND LGPL-2.1 AND Public Domain",
    "Apache-2.0 AND LGPL-3.0",
    "Apache-2.0 AND MIT AND MPL-2.0",
    "Apache-2.0 AND MPL-1.1",
    "Apache-2.0 AND MPL-1.1 AND Public Domain",
    "Apache-1.1 AND Apache-2.0 AND CPL-1.0 AND LGPL-2.1",
    "Apache-1.1 AND Apache-2.0 AND EPL-1.0",
    "BSD-2-Clause AND BSD-3-Clause AND CC-BY-SA-3.0",
    "BSD-3-Clause AND CC-BY-SA-3.0",
    "BSD-3-Clause AND CDDL-1.0",
    "BSD-3-Clause AND CDDL-1.0 AND CDDL-1.1",
    "BSD-3-Clause AND CDDL-1.1",
    "BSD-3-Clause AND EPL-1.0",
    "BSD-3-Clause AND EPL-1.0 AND EPL-2.0",
    "BSD-3-Clause AND EPL-1.0 AND MIT",
    "BSD-3-Clause AND EPL-2.0",
    "BSD-3-Clause AND EPL-2.0 AND WS-Addressing-200408",
    "BSD-3-Clause AND LGPL-2.1",
    "BSD-3-Clause AND MPL-2.0",
    "BSD-3-Clause AND MPL-2.0 AND Public Domain",
    "BSD-4-Clause AND EPL-1.0",
    "CC-BY-2.5 AND LGPL-2.1",
    "CC-BY-2.5 AND LGPL-3.0",
    "CC-BY-2.5 AND LGPL-3.0 AND MIT",
    "CDDL-1.0",
    "CDDL-1.0 AND Sun-IP",
    "CDDL-1.0 AND Sun-IP AND Sun-Restricted",
    "CDDL-1.1",
    "CDDL-1.1 AND Sun-IP",
    "CDDL-1.1 or GPL-2.0",
    "CDDL-1.1 or GPL-2.0 AND CDDL-1.1 or GPL-2.0-CPE",
    "CPL-1.0",
    "CPL-1.0 AND EPL-2.0",
    "CPL-1.0 AND ISO-8879",
    "CPL-1.0 AND MIT",
    "EPL-1.0",
    "EPL-1.0 AND BSD-3-Clause",
    "EPL-1.0 AND EPL-2.0",
    "EPL-1.0 AND MIT",
    "EPL-2.0",
    "LGPL",
    "LGPL-2.1",
    "LGPL-2.1 AND LGPL-3.0 AND MIT",
    "LGPL-2.1 AND MIT",
    "LGPL-2.1 AND Public Domain",
    "LGPL-3.0",
    "MPL-1.1",
    "MPL-2.0",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rules_follow_report_order() {
        let categories: Vec<LicenseCategory> = CATEGORY_RULES.iter().map(|r| r.category).collect();
        assert_eq!(
            categories,
            vec![
                LicenseCategory::Apache2,
                LicenseCategory::AdvertisingClause,
                LicenseCategory::Attribution,
                LicenseCategory::Cc0OrPublicDomain,
                LicenseCategory::Copyleft,
                LicenseCategory::Json,
                LicenseCategory::ProprietaryNotices,
                LicenseCategory::StandardsBodies,
                LicenseCategory::UseRestrictions,
                LicenseCategory::WeakCopyleft,
            ]
        );
    }

    #[test]
    fn test_no_rule_is_empty() {
        assert!(CATEGORY_RULES.iter().all(|r| !r.expressions.is_empty()));
    }

    #[test]
    fn test_no_duplicate_within_a_rule() {
        for rule in CATEGORY_RULES {
            let unique: HashSet<&str> = rule.expressions.iter().copied().collect();
            assert_eq!(unique.len(), rule.expressions.len(), "{}", rule.category);
        }
    }
}
