//! Page-level UI state: one owned container, changed only through
//! [`PageAction`]s so that the DOM side effects can hang off a single
//! update point.

use std::rc::Rc;

use log::debug;
use yew::Reducible;

use crate::viewport::sections::{ActiveSectionTracker, SectionId, VisibilitySnapshot};

#[derive(Clone, Debug, PartialEq)]
pub struct PageState {
    pub dark: bool,
    pub menu_open: bool,
    sections: ActiveSectionTracker,
}

pub enum PageAction {
    ToggleDark,
    ToggleMenu,
    CloseMenu,
    Observe(Vec<VisibilitySnapshot>),
    Register(SectionId),
    Unregister(SectionId),
}

impl PageState {
    pub fn new(dark: bool) -> Self {
        Self {
            dark,
            menu_open: false,
            sections: ActiveSectionTracker::with_sections(SectionId::Home, &SectionId::ALL),
        }
    }

    pub fn active(&self) -> SectionId {
        self.sections.active()
    }

    pub fn apply(&mut self, action: PageAction) {
        match action {
            PageAction::ToggleDark => self.dark = !self.dark,
            PageAction::ToggleMenu => self.menu_open = !self.menu_open,
            PageAction::CloseMenu => self.menu_open = false,
            PageAction::Observe(batch) => {
                let before = self.sections.active();
                let after = self.sections.observe(&batch);
                if before != after {
                    debug!("active section {} -> {}", before.as_str(), after.as_str());
                }
            }
            PageAction::Register(section) => self.sections.register(section),
            PageAction::Unregister(section) => self.sections.unregister(section),
        }
    }
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            return self;
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_home_with_menu_closed() {
        let state = PageState::new(true);
        assert!(state.dark);
        assert!(!state.menu_open);
        assert_eq!(state.active(), SectionId::Home);
    }

    #[test]
    fn menu_toggles_and_closes() {
        let mut state = PageState::new(false);
        state.apply(PageAction::ToggleMenu);
        assert!(state.menu_open);
        state.apply(PageAction::CloseMenu);
        state.apply(PageAction::CloseMenu);
        assert!(!state.menu_open);
    }

    #[test]
    fn observations_drive_the_active_section() {
        let mut state = PageState::new(false);
        state.apply(PageAction::Observe(vec![
            VisibilitySnapshot { section: SectionId::About, ratio: 0.9, at_ms: 1.0 },
            VisibilitySnapshot { section: SectionId::Services, ratio: 0.55, at_ms: 1.0 },
        ]));
        assert_eq!(state.active(), SectionId::Services);
        state.apply(PageAction::Unregister(SectionId::Services));
        assert_eq!(state.active(), SectionId::About);
    }

    #[test]
    fn section_back_in_the_document_is_registered_again() {
        let mut state = PageState::new(false);
        state.apply(PageAction::Unregister(SectionId::Projects));
        state.apply(PageAction::Observe(vec![VisibilitySnapshot { section: SectionId::Projects, ratio: 1.0, at_ms: 1.0 }]));
        assert_eq!(state.active(), SectionId::Home);

        state.apply(PageAction::Register(SectionId::Projects));
        state.apply(PageAction::Observe(vec![VisibilitySnapshot { section: SectionId::Projects, ratio: 1.0, at_ms: 2.0 }]));
        assert_eq!(state.active(), SectionId::Projects);
    }

    #[test]
    fn registering_a_known_section_keeps_the_same_rc() {
        let state = Rc::new(PageState::new(false));
        let next = state.clone().reduce(PageAction::Register(SectionId::About));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn unchanged_state_keeps_the_same_rc() {
        let state = Rc::new(PageState::new(false));
        let next = state.clone().reduce(PageAction::CloseMenu);
        assert!(Rc::ptr_eq(&state, &next));
        let toggled = state.clone().reduce(PageAction::ToggleDark);
        assert!(toggled.dark);
    }
}
