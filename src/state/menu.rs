use std::rc::Rc;

use yew::Reducible;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Toggle,
    Close,
}

impl MenuState {
    pub fn next(self, action: MenuAction) -> Self {
        match (self, action) {
            (MenuState::Closed, MenuAction::Toggle) => MenuState::Open,
            (MenuState::Open, MenuAction::Toggle) => MenuState::Closed,
            (_, MenuAction::Close) => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.next(action);
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

    #[test]
    fn toggle_flips() {
        assert_eq!(MenuState::Closed.next(MenuAction::Toggle), MenuState::Open);
        assert_eq!(MenuState::Open.next(MenuAction::Toggle), MenuState::Closed);
    }

    #[test]
    fn close_is_idempotent() {
        assert_eq!(MenuState::Open.next(MenuAction::Close), MenuState::Closed);
        assert_eq!(MenuState::Closed.next(MenuAction::Close), MenuState::Closed);
    }
}
