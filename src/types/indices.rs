//! Strongly-typed mesh id newtypes.
//!
//! Gmsh ids are 1-based and assigned by the mesher, so they are never used
//! as array positions. Wrapping them keeps node ids and element ids apart.

use std::fmt;

/// Macro to generate id newtypes with common functionality.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident, $display_prefix:literal
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name(usize);

        impl $name {
            /// Create a new id.
            #[inline]
            pub const fn new(id: usize) -> Self {
                Self(id)
            }

            /// Get the raw id value.
            #[inline]
            pub const fn get(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<usize> for $name {
            #[inline]
            fn from(id: usize) -> Self {
                Self(id)
            }
        }

        impl From<$name> for usize {
            #[inline]
            fn from(id: $name) -> usize {
                id.0
            }
        }
    };
}

define_id!(
    /// Node id as declared in the `$Nodes` section.
    ///
    /// # Example
    ///
    /// ```
    /// use tilegrid::types::NodeId;
    ///
    /// let node = NodeId::new(7);
    /// assert_eq!(node.get(), 7);
    /// assert_eq!(node.to_string(), "n7");
    /// ```
    NodeId,
    "n"
);

define_id!(
    /// Element id as declared in the `$Elements` section.
    ElementId,
    "e"
);
