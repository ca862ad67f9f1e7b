use smallvec::SmallVec;

/// Arity marker attached to an option declaration.
///
/// Each marker stands for one trailing argument; chaining markers declares
/// several sequential arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    /// `:`
    Required,
    /// `;`
    Optional,
}

/// Marker sequence of one option. Real grammars rarely chain more than a few.
pub type Markers = SmallVec<[Marker; 4]>;

impl Marker {
    pub const REQUIRED_CHAR: char = ':';
    pub const OPTIONAL_CHAR: char = ';';

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            Self::REQUIRED_CHAR => Some(Marker::Required),
            Self::OPTIONAL_CHAR => Some(Marker::Optional),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Marker::Required => Self::REQUIRED_CHAR,
            Marker::Optional => Self::OPTIONAL_CHAR,
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, Marker::Required)
    }

    /// Whether a value consumed for `self` may be followed by one for `next`.
    ///
    /// A required chain continues into another required slot, and any slot may
    /// be followed by optional ones. An optional slot never leads back into a
    /// required one.
    pub fn chains_into(self, next: Marker) -> bool {
        match (self, next) {
            (_, Marker::Optional) => true,
            (Marker::Required, Marker::Required) => true,
            (Marker::Optional, Marker::Required) => false,
        }
    }
}
