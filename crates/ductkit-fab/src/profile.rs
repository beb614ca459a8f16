//! Structural profile cross-sections.
//!
//! Profile names as extracted from documents often embed the section size
//! ("TDC 30x30", "U-Profil 40x20"). Scraping dimensions out of free text
//! is fragile, so it lives in this one narrowly-scoped utility with an
//! explicit fallback; nothing else in the engine parses numbers out of
//! names.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Default lip width when a profile name carries no third dimension, mm.
pub const DEFAULT_LIP: f64 = 10.0;

/// Cross-section of a folded structural profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileSection {
    /// Central web width, mm.
    pub web: f64,
    /// Flange width on both sides of the web, mm.
    pub flange: f64,
    /// Return lip width on both flange ends, mm.
    pub lip: f64,
}

impl ProfileSection {
    /// Ordered outer segment lengths, lip to lip, for flattening.
    pub fn segments(&self) -> [f64; 5] {
        [self.lip, self.flange, self.web, self.flange, self.lip]
    }
}

fn dimension_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(\d+(?:\.\d+)?)\s*[xX]\s*(\d+(?:\.\d+)?)").expect("invalid dimension regex")
    })
}

/// Derive a cross-section from the digits embedded in a profile name,
/// falling back to the supplied nominal web/flange when the name carries
/// none. The lip is always [`DEFAULT_LIP`].
pub fn section_from_name(name: &str, fallback_web: f64, fallback_flange: f64) -> ProfileSection {
    if let Some(caps) = dimension_regex().captures(name) {
        // Both captures are digit groups; parse cannot fail here.
        let web = caps[1].parse().unwrap_or(fallback_web);
        let flange = caps[2].parse().unwrap_or(fallback_flange);
        return ProfileSection {
            web,
            flange,
            lip: DEFAULT_LIP,
        };
    }
    ProfileSection {
        web: fallback_web,
        flange: fallback_flange,
        lip: DEFAULT_LIP,
    }
}
