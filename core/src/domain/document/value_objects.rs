/// Outcome of reading a document that may legitimately not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentLoad<T> {
    Found(T),
    Absent,
}

impl<T> DocumentLoad<T> {
    pub fn unwrap_or_else(self, default: impl FnOnce() -> T) -> T {
        match self {
            DocumentLoad::Found(value) => value,
            DocumentLoad::Absent => default(),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, DocumentLoad::Absent)
    }
}
