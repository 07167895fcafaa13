/// A contiguous slice of a larger text, sized to fit a per-call limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub index: usize,
    pub text: String,
    /// Character offset of the first character within the source text.
    pub offset: usize,
}

impl Chunk {
    pub fn new(index: usize, text: String, offset: usize) -> Self {
        Self {
            index,
            text,
            offset,
        }
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
