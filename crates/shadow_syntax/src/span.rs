//! Byte ranges into the rendered command line.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteIndex(pub u32);

/// Half-open byte range `[start, end)` inside `CommandLine::as_str()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: ByteIndex,
    pub end: ByteIndex,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Self {
            start: ByteIndex(start),
            end: ByteIndex(end.max(start)),
        }
    }

    pub fn len(self) -> u32 {
        self.end.0 - self.start.0
    }

    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    pub fn range(self) -> std::ops::Range<usize> {
        self.start.0 as usize..self.end.0 as usize
    }
}
