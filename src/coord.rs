//! We give a general description of a coordinate, which is a small enumeration (an orientation, an
//! octant around a card, a slot on the panel) that can be packed into a dense integer.

/// A coordinate type: a finite set of values numbered `0..count()`.
pub trait Coordinate: Copy + Eq {
    /// The number of possible coordinate states.
    const COUNT: usize;

    /// A representation of this coordinate as a usize, for use in table lookups.
    fn repr(self) -> usize;

    /// Convert the representation of a coordinate to the coordinate itself.
    ///
    /// Panics if `n >= Self::COUNT`; use the `TryFrom` impls for unchecked input.
    fn from_repr(n: usize) -> Self;

    /// Iterator over every coordinate in order of representation.
    fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT).map(Self::from_repr)
    }
}
