// src/effect/images.rs

/// Geordnete Liste der Bildquellen. Ein einzelner Pfad wird zu einer
/// einelementigen Liste, fehlende Angaben zu einer leeren.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSet {
    paths: Vec<String>,
    current: Option<usize>,
}

impl ImageSet {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
            current: None,
        }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current(&self) -> Option<&str> {
        self.current.and_then(|i| self.paths.get(i)).map(String::as_str)
    }

    /// Springt zum nächsten Bild, nach dem letzten wieder zum ersten.
    pub fn advance(&mut self) -> Option<&str> {
        if self.paths.is_empty() {
            return None;
        }
        let next = match self.current {
            Some(i) if i + 1 < self.paths.len() => i + 1,
            _ => 0,
        };
        self.current = Some(next);
        self.current()
    }
}

impl From<&str> for ImageSet {
    fn from(path: &str) -> Self {
        Self::new([path])
    }
}

impl From<String> for ImageSet {
    fn from(path: String) -> Self {
        Self::new([path])
    }
}

impl<S: Into<String>> From<Vec<S>> for ImageSet {
    fn from(paths: Vec<S>) -> Self {
        Self::new(paths)
    }
}

impl<S: Into<String>> From<Option<S>> for ImageSet {
    fn from(path: Option<S>) -> Self {
        Self::new(path)
    }
}
