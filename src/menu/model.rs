//! Static menu geometry and item labels.

use core::fmt::Write;

use crate::error::ConfigError;
use crate::menu::MenuLevel;

/// Maximum rendered length of a single menu item label.
pub const LABEL_LEN: usize = 16;

/// A menu item label, e.g. `"Item 3"` or `"Subitem 2-1"`.
pub type Label = heapless::String<LABEL_LEN>;

/// Fixed two-level menu geometry. Read-only after construction; every
/// child list shares the same size, with "Return" reserved at the last
/// index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuModel {
    root_count: usize,
    child_count: usize,
}

impl MenuModel {
    /// Validate and build the geometry.
    ///
    /// `root_count` must be at least 1 and `child_count` at least 2
    /// (one real entry plus "Return"); anything smaller would make the
    /// cursor wraparound arithmetic meaningless.
    pub fn new(root_count: usize, child_count: usize) -> Result<Self, ConfigError> {
        if root_count < 1 {
            return Err(ConfigError::NoRootItems);
        }
        if child_count < 2 {
            return Err(ConfigError::ChildListTooShort);
        }
        Ok(Self {
            root_count,
            child_count,
        })
    }

    pub fn root_count(&self) -> usize {
        self.root_count
    }

    pub fn child_count(&self) -> usize {
        self.child_count
    }

    /// Item count of the list navigated at `level`.
    pub fn level_count(&self, level: MenuLevel) -> usize {
        match level {
            MenuLevel::Root => self.root_count,
            MenuLevel::Child => self.child_count,
        }
    }

    /// Index of the reserved "Return" entry within a child list.
    pub fn return_index(&self) -> usize {
        self.child_count - 1
    }

    /// Label of root entry `index`. Entries are numbered from 1.
    pub fn root_label(&self, index: usize) -> Label {
        let mut label = Label::new();
        let _ = write!(label, "Item {}", index + 1);
        label
    }

    /// Label of child entry `index` under root entry `parent`. The last
    /// entry is always "Return".
    pub fn child_label(&self, parent: usize, index: usize) -> Label {
        let mut label = Label::new();
        if index == self.return_index() {
            let _ = label.push_str("Return");
        } else {
            let _ = write!(label, "Subitem {}-{}", parent + 1, index + 1);
        }
        label
    }
}
