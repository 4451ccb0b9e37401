#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl std::fmt::Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "index {} out of bounds (len {})", self.index, self.len)
    }
}

impl std::error::Error for IndexOutOfBounds {}
