use std::sync::Arc;

/// Ordered comments in insertion order.
///
/// The backing slice is never mutated: [`appended`](Self::appended) and
/// [`without`](Self::without) build a fresh list, so a renderer can tell a
/// changed list from an unchanged one with [`ptr_eq`](Self::ptr_eq).
#[derive(Clone, Debug, Default)]
pub struct CommentList {
    items: Arc<[String]>,
}

impl CommentList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn appended(&self, comment: String) -> CommentList {
        let items: Vec<String> = self
            .items
            .iter()
            .cloned()
            .chain(std::iter::once(comment))
            .collect();
        CommentList { items: items.into() }
    }

    /// Every entry equal to `comment` is dropped, not just the first.
    pub fn without(&self, comment: &str) -> CommentList {
        let items: Vec<String> = self
            .items
            .iter()
            .filter(|c| c.as_str() != comment)
            .cloned()
            .collect();
        CommentList { items: items.into() }
    }

    pub fn ptr_eq(&self, other: &CommentList) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.items.to_vec()
    }
}

impl PartialEq for CommentList {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl Eq for CommentList {}

impl<S: Into<String>> FromIterator<S> for CommentList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let items: Vec<String> = iter.into_iter().map(Into::into).collect();
        CommentList { items: items.into() }
    }
}
