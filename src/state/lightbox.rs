use std::rc::Rc;

use log::debug;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxAction {
    Open(usize),
    Close,
    Navigate(Direction),
}

impl LightboxAction {
    /// Keyboard bindings while the overlay is showing.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(LightboxAction::Close),
            "ArrowLeft" => Some(LightboxAction::Navigate(Direction::Previous)),
            "ArrowRight" => Some(LightboxAction::Navigate(Direction::Next)),
            _ => None,
        }
    }
}

/// Open/closed overlay over a fixed number of gallery items.
/// `current_index` stays in `0..len` and is only meaningful while open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lightbox {
    len: usize,
    is_open: bool,
    current_index: usize,
}

impl Lightbox {
    pub fn new(len: usize) -> Self {
        Self { len, is_open: false, current_index: 0 }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn open(&mut self, index: usize) {
        if index >= self.len {
            debug!("ignoring lightbox open at {} (only {} items)", index, self.len);
            return;
        }
        self.current_index = index;
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn navigate(&mut self, direction: Direction) {
        if !self.is_open {
            return;
        }
        self.current_index = match direction {
            Direction::Next => (self.current_index + 1) % self.len,
            Direction::Previous if self.current_index == 0 => self.len - 1,
            Direction::Previous => self.current_index - 1,
        };
    }

    pub fn apply(&mut self, action: LightboxAction) {
        match action {
            LightboxAction::Open(index) => self.open(index),
            LightboxAction::Close => self.close(),
            LightboxAction::Navigate(direction) => self.navigate(direction),
        }
    }

    /// Caption for the current index, if the store has one.
    pub fn caption<'a>(&self, captions: &[&'a str]) -> Option<&'a str> {
        captions.get(self.current_index).copied()
    }
}

impl Reducible for Lightbox {
    type Action = LightboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::captions::CAPTIONS;

    fn opened_at(index: usize) -> Lightbox {
        let mut lightbox = Lightbox::new(CAPTIONS.len());
        lightbox.open(index);
        lightbox
    }

    #[test]
    fn full_rotation_returns_to_start() {
        for start in 0..CAPTIONS.len() {
            let mut lightbox = opened_at(start);
            for _ in 0..CAPTIONS.len() {
                lightbox.navigate(Direction::Next);
            }
            assert_eq!(lightbox.current_index(), start);
        }
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut lightbox = opened_at(0);
        lightbox.navigate(Direction::Previous);
        assert_eq!(lightbox.current_index(), 5);
    }

    #[test]
    fn next_from_last_wraps_to_first() {
        let mut lightbox = opened_at(5);
        lightbox.navigate(Direction::Next);
        assert_eq!(lightbox.current_index(), 0);
    }

    #[test]
    fn open_shows_that_items_caption() {
        for (k, expected) in CAPTIONS.iter().enumerate() {
            let lightbox = opened_at(k);
            assert!(lightbox.is_open());
            assert_eq!(lightbox.caption(&CAPTIONS), Some(*expected));
        }
    }

    #[test]
    fn out_of_range_open_is_ignored() {
        let mut lightbox = Lightbox::new(CAPTIONS.len());
        lightbox.open(CAPTIONS.len());
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.current_index(), 0);
    }

    #[test]
    fn navigate_while_closed_does_nothing() {
        let mut lightbox = opened_at(2);
        lightbox.close();
        lightbox.navigate(Direction::Next);
        assert_eq!(lightbox.current_index(), 2);
        assert!(!lightbox.is_open());
    }

    #[test]
    fn empty_gallery_never_opens() {
        let mut lightbox = Lightbox::new(0);
        lightbox.apply(LightboxAction::Open(0));
        lightbox.apply(LightboxAction::Navigate(Direction::Previous));
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.caption(&[]), None);
    }

    #[test]
    fn keys_map_to_actions() {
        assert_eq!(LightboxAction::from_key("Escape"), Some(LightboxAction::Close));
        assert_eq!(
            LightboxAction::from_key("ArrowLeft"),
            Some(LightboxAction::Navigate(Direction::Previous))
        );
        assert_eq!(
            LightboxAction::from_key("ArrowRight"),
            Some(LightboxAction::Navigate(Direction::Next))
        );
        assert_eq!(LightboxAction::from_key("Enter"), None);
    }

    #[test]
    fn reducer_keeps_same_state_for_noops() {
        let closed = Rc::new(Lightbox::new(CAPTIONS.len()));
        let after = closed.clone().reduce(LightboxAction::Navigate(Direction::Next));
        assert!(Rc::ptr_eq(&closed, &after));

        let opened = closed.reduce(LightboxAction::Open(3));
        assert!(opened.is_open());
        assert_eq!(opened.current_index(), 3);
    }
}
