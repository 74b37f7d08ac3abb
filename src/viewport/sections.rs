use log::debug;

/// Anchorable page sections, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Home,
    About,
    Services,
    Projects,
    Testimonials,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Services,
        SectionId::Projects,
        SectionId::Testimonials,
        SectionId::Contact,
    ];

    /// DOM id, also used as the `#fragment` in nav links.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Services => "services",
            SectionId::Projects => "projects",
            SectionId::Testimonials => "testimonials",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Services => "Services",
            SectionId::Projects => "Projects",
            SectionId::Testimonials => "Testimonials",
            SectionId::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        SectionId::ALL.into_iter().find(|s| s.as_str() == id)
    }

    pub fn href(self) -> String {
        format!("#{}", self.as_str())
    }
}

/// Immutable observation of one section at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilitySnapshot {
    pub section: SectionId,
    pub ratio: f64,
    pub at_ms: f64,
}

/// Decides which section is active from batches of visibility snapshots.
///
/// A section is reported when its ratio rises from below `threshold` to at
/// or above it. Reports inside one batch are taken in registration order and
/// the last one wins, so when several sections cross together the one
/// registered latest becomes active.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveSectionTracker {
    registered: Vec<SectionId>,
    above: Vec<SectionId>,
    active: SectionId,
    threshold: f64,
    last_batch_at: Option<f64>,
}

impl ActiveSectionTracker {
    pub const DEFAULT_THRESHOLD: f64 = 0.5;

    pub fn new(initial: SectionId) -> Self {
        Self {
            registered: Vec::new(),
            above: Vec::new(),
            active: initial,
            threshold: Self::DEFAULT_THRESHOLD,
            last_batch_at: None,
        }
    }

    pub fn with_sections(initial: SectionId, sections: &[SectionId]) -> Self {
        let mut tracker = Self::new(initial);
        for &section in sections {
            tracker.register(section);
        }
        tracker
    }

    /// Adds a section, keeping the registry in document order. Registering
    /// twice is a no-op.
    pub fn register(&mut self, section: SectionId) {
        if let Err(pos) = self.registered.binary_search(&section) {
            self.registered.insert(pos, section);
        }
    }

    /// Drops a section. If it was active, the nearest preceding registered
    /// section takes over, else the nearest following one.
    pub fn unregister(&mut self, section: SectionId) {
        let Some(pos) = self.registered.iter().position(|&s| s == section) else {
            return;
        };
        self.registered.remove(pos);
        self.above.retain(|&s| s != section);

        if self.active != section {
            return;
        }
        let before = self.registered.iter().filter(|&&s| s < section).max().copied();
        let after = self.registered.iter().filter(|&&s| s > section).min().copied();
        if let Some(fallback) = before.or(after) {
            debug!("active section {} removed, falling back to {}", section.as_str(), fallback.as_str());
            self.active = fallback;
        }
    }

    /// Applies one observation pass and returns the active section.
    pub fn observe(&mut self, batch: &[VisibilitySnapshot]) -> SectionId {
        let Some(batch_at) = batch.iter().map(|s| s.at_ms).reduce(f64::max) else {
            return self.active;
        };
        if matches!(self.last_batch_at, Some(last) if batch_at < last) {
            return self.active;
        }
        self.last_batch_at = Some(batch_at);

        let mut reported = None;
        for &section in &self.registered {
            let Some(snapshot) = batch.iter().rev().find(|s| s.section == section) else {
                continue;
            };
            let was_above = self.above.contains(&section);
            let is_above = snapshot.ratio > 0.0 && snapshot.ratio >= self.threshold;
            if is_above && !was_above {
                reported = Some(section);
            }
            if is_above != was_above {
                if is_above {
                    self.above.push(section);
                } else {
                    self.above.retain(|&s| s != section);
                }
            }
        }

        if let Some(section) = reported {
            self.active = section;
        }
        self.active
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn registered(&self) -> &[SectionId] {
        &self.registered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(section: SectionId, ratio: f64, at_ms: f64) -> VisibilitySnapshot {
        VisibilitySnapshot { section, ratio, at_ms }
    }

    #[test]
    fn ids_round_trip_through_dom_strings() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_id(section.as_str()), Some(section));
        }
        assert_eq!(SectionId::from_id("stats"), None);
        assert_eq!(SectionId::Services.href(), "#services");
    }

    #[test]
    fn simultaneous_crossings_resolve_to_last_registered() {
        use SectionId::*;
        let mut tracker = ActiveSectionTracker::with_sections(Home, &[Home, About, Services]);
        let active = tracker.observe(&[snap(Services, 0.6, 10.0), snap(About, 0.7, 10.0), snap(Home, 0.1, 10.0)]);
        assert_eq!(active, Services);
    }

    #[test]
    fn no_sections_keeps_initial_value() {
        let mut tracker = ActiveSectionTracker::new(SectionId::Home);
        assert_eq!(tracker.observe(&[snap(SectionId::Contact, 1.0, 1.0)]), SectionId::Home);
    }

    #[test]
    fn only_new_crossings_change_the_active_section() {
        use SectionId::*;
        let mut tracker = ActiveSectionTracker::with_sections(Home, &SectionId::ALL);
        assert_eq!(tracker.observe(&[snap(Home, 1.0, 0.0)]), Home);
        assert_eq!(tracker.observe(&[snap(Home, 0.8, 5.0), snap(About, 0.5, 5.0)]), About);
        // Home is still above the threshold but did not cross again.
        assert_eq!(tracker.observe(&[snap(Home, 0.9, 6.0), snap(About, 0.2, 6.0)]), About);
        // Home dropped out and came back: that is a fresh report.
        tracker.observe(&[snap(Home, 0.1, 7.0)]);
        assert_eq!(tracker.observe(&[snap(Home, 0.6, 8.0)]), Home);
    }

    #[test]
    fn below_threshold_is_never_reported() {
        use SectionId::*;
        let mut tracker = ActiveSectionTracker::with_sections(Home, &SectionId::ALL);
        assert_eq!(tracker.observe(&[snap(Projects, 0.49, 1.0)]), Home);
    }

    #[test]
    fn stale_batches_and_unknown_sections_are_ignored() {
        use SectionId::*;
        let mut tracker = ActiveSectionTracker::with_sections(Home, &[Home, About]);
        tracker.observe(&[snap(About, 0.9, 100.0)]);
        assert_eq!(tracker.observe(&[snap(Home, 0.1, 120.0)]), About);
        assert_eq!(tracker.observe(&[snap(Home, 0.9, 50.0)]), About);
        assert_eq!(tracker.observe(&[snap(Contact, 1.0, 200.0)]), About);
    }

    #[test]
    fn section_that_reappears_is_tracked_again() {
        use SectionId::*;
        let mut tracker = ActiveSectionTracker::with_sections(Home, &SectionId::ALL);
        tracker.unregister(Services);
        assert_eq!(tracker.observe(&[snap(Services, 0.9, 1.0)]), Home);

        tracker.register(Services);
        tracker.register(Services);
        assert_eq!(tracker.registered(), &SectionId::ALL);
        assert_eq!(tracker.observe(&[snap(Services, 0.9, 2.0), snap(About, 0.8, 2.0)]), Services);
    }

    #[test]
    fn removing_the_active_section_falls_back_to_the_previous_one() {
        use SectionId::*;
        let mut tracker = ActiveSectionTracker::with_sections(Home, &[Home, Services, Projects]);
        tracker.observe(&[snap(Projects, 1.0, 1.0)]);
        tracker.unregister(Projects);
        assert_eq!(tracker.active(), Services);

        let mut tracker = ActiveSectionTracker::with_sections(About, &[About, Contact]);
        tracker.unregister(About);
        assert_eq!(tracker.active(), Contact);

        let mut tracker = ActiveSectionTracker::with_sections(About, &[About]);
        tracker.unregister(About);
        assert_eq!(tracker.active(), About);
        assert!(tracker.registered().is_empty());
    }
}
