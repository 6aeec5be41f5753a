//! Cuts one generated text blob into the six named guide sections.
//!
//! The splitter anchors on the first case-insensitive occurrence of each
//! heading keyword anywhere in the text (headings are not required to start
//! a line) and is total: every keyword maps either to the substring running
//! from its anchor to the next recognized anchor, or to the "Not found"
//! sentinel.

use serde::{Deserialize, Serialize};

/// Literal stored for a section whose heading keyword never occurs.
pub const NOT_FOUND: &str = "Not found";

/// The six fixed heading keywords, in canonical order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Itinerary,
    Accommodations,
    Safety,
    Health,
    Environmental,
    Tips,
}

impl SectionKind {
    pub const ALL: [SectionKind; 6] = [
        SectionKind::Itinerary,
        SectionKind::Accommodations,
        SectionKind::Safety,
        SectionKind::Health,
        SectionKind::Environmental,
        SectionKind::Tips,
    ];

    /// The heading keyword anchoring this section in the raw text.
    pub fn keyword(self) -> &'static str {
        match self {
            SectionKind::Itinerary => "ITINERARY",
            SectionKind::Accommodations => "FLIGHTS & ACCOMMODATIONS",
            SectionKind::Safety => "SAFETY AND CRIME",
            SectionKind::Health => "HEALTH INFORMATION",
            SectionKind::Environmental => "ENVIRONMENTAL AND DISASTERS",
            SectionKind::Tips => "TRAVEL TIPS",
        }
    }

    /// URL-friendly name used by the HTTP surface.
    pub fn slug(self) -> &'static str {
        match self {
            SectionKind::Itinerary => "itinerary",
            SectionKind::Accommodations => "accommodations",
            SectionKind::Safety => "safety",
            SectionKind::Health => "health",
            SectionKind::Environmental => "environmental",
            SectionKind::Tips => "tips",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }
}

/// The six raw section texts cut from one model response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sections {
    pub itinerary: String,
    pub accommodations: String,
    pub safety: String,
    pub health: String,
    pub environmental: String,
    pub tips: String,
}

impl Sections {
    pub fn get(&self, kind: SectionKind) -> &str {
        match kind {
            SectionKind::Itinerary => &self.itinerary,
            SectionKind::Accommodations => &self.accommodations,
            SectionKind::Safety => &self.safety,
            SectionKind::Health => &self.health,
            SectionKind::Environmental => &self.environmental,
            SectionKind::Tips => &self.tips,
        }
    }
}

/// Split `text` at every recognized heading anchor and map each keyword to
/// its first anchored segment. The heading line itself stays inside the
/// section's text; missing keywords map to [`NOT_FOUND`].
pub fn split_sections(text: &str) -> Sections {
    let anchors = find_anchors(text);
    let mut segments: [Option<&str>; 6] = [None; 6];

    for (i, &(pos, kind)) in anchors.iter().enumerate() {
        let end = anchors.get(i + 1).map_or(text.len(), |next| next.0);
        let slot = &mut segments[kind as usize];
        // First matching segment wins; later duplicates are ignored.
        if slot.is_none() {
            *slot = Some(&text[pos..end]);
        }
    }

    let section = |kind: SectionKind| {
        segments[kind as usize]
            .unwrap_or(NOT_FOUND)
            .to_string()
    };

    Sections {
        itinerary: section(SectionKind::Itinerary),
        accommodations: section(SectionKind::Accommodations),
        safety: section(SectionKind::Safety),
        health: section(SectionKind::Health),
        environmental: section(SectionKind::Environmental),
        tips: section(SectionKind::Tips),
    }
}

/// Every byte position where one of the six keywords begins, in text order.
/// Keywords are ASCII, so a case-insensitive byte comparison is exact and
/// every anchor lands on a char boundary.
fn find_anchors(text: &str) -> Vec<(usize, SectionKind)> {
    let bytes = text.as_bytes();
    let mut anchors = Vec::new();

    for pos in 0..bytes.len() {
        for kind in SectionKind::ALL {
            let keyword = kind.keyword().as_bytes();
            if bytes.len() - pos >= keyword.len()
                && bytes[pos..pos + keyword.len()].eq_ignore_ascii_case(keyword)
            {
                anchors.push((pos, kind));
                // Keywords start with distinct letters, so at most one can
                // match at any position.
                break;
            }
        }
    }

    anchors
}
