//! The navigation state machine.
//!
//! Holds the current level and one cursor per level, and turns decoded
//! encoder steps and accepted button presses into [`NavigationEvent`]s.
//! All state lives in this object; inputs are total over their domains
//! and there are no runtime error paths.

use crate::input::Step;
use crate::menu::{MenuLevel, MenuModel, NavigationEvent};

/// Current position within the menu hierarchy.
///
/// The root cursor survives a trip into a child list: entering resets
/// only the child cursor, and returning leaves the root cursor where it
/// was before the descent.
pub struct Navigator {
    model: MenuModel,
    level: MenuLevel,
    root_cursor: usize,
    child_cursor: usize,
}

impl Navigator {
    /// Start at the root list with both cursors on the first entry.
    pub fn new(model: MenuModel) -> Self {
        Self {
            model,
            level: MenuLevel::Root,
            root_cursor: 0,
            child_cursor: 0,
        }
    }

    pub fn model(&self) -> &MenuModel {
        &self.model
    }

    pub fn level(&self) -> MenuLevel {
        self.level
    }

    pub fn root_cursor(&self) -> usize {
        self.root_cursor
    }

    pub fn child_cursor(&self) -> usize {
        self.child_cursor
    }

    /// Cursor of the level currently being navigated.
    pub fn cursor(&self) -> usize {
        match self.level {
            MenuLevel::Root => self.root_cursor,
            MenuLevel::Child => self.child_cursor,
        }
    }

    /// Move the active cursor by one decoded encoder step.
    ///
    /// The cursor wraps at both ends of the active list, so it is always
    /// a valid index. Any non-`None` step produces a `CursorMoved` event,
    /// even when a single-entry list wraps back onto the same index.
    pub fn apply_step(&mut self, step: Step) -> Option<NavigationEvent> {
        if step == Step::None {
            return None;
        }

        let count = self.model.level_count(self.level);
        let cursor = match self.level {
            MenuLevel::Root => &mut self.root_cursor,
            MenuLevel::Child => &mut self.child_cursor,
        };

        *cursor = if step == Step::Cw {
            if *cursor + 1 >= count {
                0
            } else {
                *cursor + 1
            }
        } else if *cursor == 0 {
            count - 1
        } else {
            *cursor - 1
        };

        Some(NavigationEvent::CursorMoved {
            level: self.level,
            index: *cursor,
        })
    }

    /// Apply one accepted button press.
    ///
    /// At root level this opens the child list for the highlighted entry,
    /// with the child cursor reset to the top. At child level it closes
    /// the list again if the cursor sits on "Return"; on any other child
    /// entry the press does nothing here - acting on plain child items
    /// belongs to the application layer.
    pub fn apply_activate(&mut self) -> Option<NavigationEvent> {
        match self.level {
            MenuLevel::Root => {
                self.level = MenuLevel::Child;
                self.child_cursor = 0;
                Some(NavigationEvent::ChildOpened {
                    root_index: self.root_cursor,
                })
            }
            MenuLevel::Child => {
                if self.child_cursor == self.model.return_index() {
                    self.level = MenuLevel::Root;
                    Some(NavigationEvent::ChildClosed)
                } else {
                    None
                }
            }
        }
    }
}
