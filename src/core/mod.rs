pub mod registry;

pub use self::registry::Registry;

use std::hash::Hash;

/// Opaque identifier convention shared by every bridge entry point.
///
/// Handles are machine-word-sized and carry no meaning beyond identity. Zero
/// is reserved as the null handle; identifiers are handed out starting at one
/// and never reused, so a handle kept past its object's destruction fails the
/// registry lookup instead of aliasing a newer object.
pub trait Handle: Copy + Eq + Hash {
    /// The null handle, never associated with a live object
    fn null() -> Self;

    /// Wraps a raw identifier
    fn from_id(id: u32) -> Self;

    /// Returns the raw identifier
    fn id(self) -> u32;

    /// Returns whether this is the null handle
    fn is_null(self) -> bool {
        self.id() == 0
    }
}

/// A unique identifier for a collision shape registered with the bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeHandle(pub(crate) u32);

/// A unique identifier for a rigid body owned by the bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub(crate) u32);

/// A unique identifier for a motion state owned by the bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateHandle(pub(crate) u32);

impl Handle for ShapeHandle {
    fn null() -> Self {
        Self(0)
    }

    fn from_id(id: u32) -> Self {
        Self(id)
    }

    fn id(self) -> u32 {
        self.0
    }
}

impl Handle for BodyHandle {
    fn null() -> Self {
        Self(0)
    }

    fn from_id(id: u32) -> Self {
        Self(id)
    }

    fn id(self) -> u32 {
        self.0
    }
}

impl Handle for StateHandle {
    fn null() -> Self {
        Self(0)
    }

    fn from_id(id: u32) -> Self {
        Self(id)
    }

    fn id(self) -> u32 {
        self.0
    }
}
