// Viewport visibility bookkeeping for the navbar and scroll reveals.
//
// The browser delivers intersection batches; these types decide what the
// page should do with them, independent of any DOM handles.

use super::constants::{
    REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, SECTION_ROOT_MARGIN, SECTION_THRESHOLD,
};

/// Options passed to the browser's intersection observer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl ObserverOptions {
    pub const fn sections() -> Self {
        Self {
            threshold: SECTION_THRESHOLD,
            root_margin: SECTION_ROOT_MARGIN,
        }
    }

    pub const fn reveal() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            root_margin: REVEAL_ROOT_MARGIN,
        }
    }
}

/// One entry of an intersection batch, reduced to what the trackers need.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityChange<'a> {
    pub id: &'a str,
    pub intersecting: bool,
    pub ratio: f64,
}

#[derive(Clone, Debug, PartialEq)]
struct Section {
    id: String,
    visible: bool,
}

/// Tracks which navigable section is active.
pub struct SectionTracker {
    sections: Vec<Section>,
    threshold: f64,
    active: Option<usize>,
}

impl SectionTracker {
    pub fn new<I, S>(ids: I, threshold: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sections = ids
            .into_iter()
            .map(|id| Section {
                id: id.into(),
                visible: false,
            })
            .collect();
        Self {
            sections,
            threshold,
            active: None,
        }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn active(&self) -> Option<&str> {
        self.active.map(|i| self.sections[i].id.as_str())
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.sections.iter().any(|s| s.id == id && s.visible)
    }

    /// Apply one batch. Returns the section to highlight when the batch
    /// contained at least one visible section (the last one wins), or `None`
    /// when highlighting should stay as it is.
    pub fn apply(&mut self, batch: &[VisibilityChange<'_>]) -> Option<&str> {
        let mut newly_active = None;
        for change in batch {
            let Some(i) = self.sections.iter().position(|s| s.id == change.id) else {
                continue;
            };
            let visible = change.intersecting && change.ratio >= self.threshold;
            self.sections[i].visible = visible;
            if visible {
                newly_active = Some(i);
            }
        }
        let i = newly_active?;
        self.active = Some(i);
        Some(self.sections[i].id.as_str())
    }
}

/// Slide-in direction of a reveal element, taken from its class list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealKind {
    Left,
    Right,
    Up,
}

impl RevealKind {
    pub const SELECTOR: &'static str = ".slide-in-left, .slide-in-right, .slide-in-up";

    /// Classify from a class-membership test; left takes priority, then right,
    /// anything else slides up.
    pub fn classify(has_class: impl Fn(&str) -> bool) -> Self {
        if has_class("slide-in-left") {
            RevealKind::Left
        } else if has_class("slide-in-right") {
            RevealKind::Right
        } else {
            RevealKind::Up
        }
    }

    pub fn settled_transform(self) -> &'static str {
        match self {
            RevealKind::Left | RevealKind::Right => "translateX(0)",
            RevealKind::Up => "translateY(0)",
        }
    }
}

/// Final inline style applied to a revealed element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealStyle {
    pub opacity: &'static str,
    pub transform: &'static str,
}

/// One-way hidden → shown state for every reveal element on the page.
#[derive(Default)]
pub struct RevealSet {
    elements: Vec<(RevealKind, bool)>,
}

impl RevealSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element; the returned key identifies it in later calls.
    pub fn register(&mut self, kind: RevealKind) -> usize {
        self.elements.push((kind, false));
        self.elements.len() - 1
    }

    pub fn is_shown(&self, key: usize) -> bool {
        self.elements.get(key).is_some_and(|(_, shown)| *shown)
    }

    /// Returns the style to apply when this event reveals the element for the
    /// first time; every later event yields `None`.
    pub fn on_visibility(&mut self, key: usize, intersecting: bool) -> Option<RevealStyle> {
        let (kind, shown) = self.elements.get_mut(key)?;
        if !intersecting || *shown {
            return None;
        }
        *shown = true;
        Some(RevealStyle {
            opacity: "1",
            transform: kind.settled_transform(),
        })
    }
}
