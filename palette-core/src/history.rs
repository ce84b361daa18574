//! Navigation history the picker pushes share URLs into.

/// A location bar with push-style history.
pub trait History {
    /// Current location, `path?query`.
    fn location(&self) -> String;

    /// Add a new entry and make it current.
    fn push_state(&mut self, url: &str);
}

impl<T: History + ?Sized> History for &mut T {
    fn location(&self) -> String {
        (**self).location()
    }

    fn push_state(&mut self, url: &str) {
        (**self).push_state(url)
    }
}

/// In-memory history with back/forward navigation.
///
/// Pushing drops any forward entries, as browsers do.
#[derive(Debug, Clone)]
pub struct SessionHistory {
    entries: Vec<String>,
    current: usize,
}

impl Default for SessionHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl SessionHistory {
    /// Start a session at `location`.
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            entries: vec![location.into()],
            current: 0,
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn can_go_back(&self) -> bool {
        self.current > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.current + 1 < self.entries.len()
    }

    /// Step back; returns the new current location.
    pub fn back(&mut self) -> Option<&str> {
        if !self.can_go_back() {
            return None;
        }
        self.current -= 1;
        Some(&self.entries[self.current])
    }

    /// Step forward; returns the new current location.
    pub fn forward(&mut self) -> Option<&str> {
        if !self.can_go_forward() {
            return None;
        }
        self.current += 1;
        Some(&self.entries[self.current])
    }
}

impl History for SessionHistory {
    fn location(&self) -> String {
        self.entries[self.current].clone()
    }

    fn push_state(&mut self, url: &str) {
        self.entries.truncate(self.current + 1);
        self.entries.push(url.to_string());
        self.current = self.entries.len() - 1;
        tracing::debug!("History push: {}", url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_navigate() {
        let mut history = SessionHistory::new("/");
        history.push_state("/?colour=a");
        history.push_state("/?colour=b");
        assert_eq!(history.len(), 3);
        assert_eq!(history.location(), "/?colour=b");

        assert_eq!(history.back(), Some("/?colour=a"));
        assert_eq!(history.back(), Some("/"));
        assert_eq!(history.back(), None);
        assert_eq!(history.forward(), Some("/?colour=a"));
    }

    #[test]
    fn test_push_drops_forward_entries() {
        let mut history = SessionHistory::new("/");
        history.push_state("/?colour=a");
        history.push_state("/?colour=b");
        history.back();
        history.push_state("/?colour=c");

        assert_eq!(history.entries(), ["/", "/?colour=a", "/?colour=c"]);
        assert!(!history.can_go_forward());
    }
}
