//! Menu subsystem - the two-level hierarchy and its navigation state.
//!
//! The menu has exactly two levels: a root list, and one child list
//! opened from whichever root entry was active. The last child entry is
//! reserved as "Return" and closes the child list again. Navigation is
//! expressed as declarative [`NavigationEvent`]s for a rendering layer
//! to consume; nothing here touches a display.

pub mod model;
pub mod nav;

pub use model::MenuModel;
pub use nav::Navigator;

/// Which list the cursor currently navigates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuLevel {
    /// The top-level list.
    Root,
    /// A child list opened from a root entry.
    Child,
}

/// At most one of these is produced per polling tick. Consumed
/// immediately by the renderer; never buffered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavigationEvent {
    /// The highlight moved to `index` within `level`'s list.
    CursorMoved { level: MenuLevel, index: usize },
    /// A child list was opened from root entry `root_index`.
    ChildOpened { root_index: usize },
    /// The child list was closed via its "Return" entry.
    ChildClosed,
}
