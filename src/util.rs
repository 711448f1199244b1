/// The outcome of removing an element from a subtree. Removal reports through this value rather
/// than through a success flag shared with its caller.
#[derive(Debug)]
pub(crate) enum Removal<T> {
    /// The element wasn't found so the subtree is untouched.
    NotFound,
    /// The element was found and unlinked. The stored instance is handed back.
    Removed(T),
}

impl<T> Removal<T> {
    pub(crate) fn into_removed(self) -> Option<T> {
        match self {
            Self::NotFound => None,
            Self::Removed(element) => Some(element),
        }
    }
}
