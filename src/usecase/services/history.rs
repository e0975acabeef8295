use crate::usecase::ports::navigator::VisitRequest;

/// In-app history of visited URLs. Filter visits replace the current entry
/// so that back navigation skips intermediate filter states.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionHistory {
    entries: Vec<String>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, request: &VisitRequest) {
        let url = request.url();
        if request.options.replace {
            self.replace(url);
        } else {
            self.push(url);
        }
    }

    pub fn push(&mut self, url: String) {
        if self.entries.last() == Some(&url) {
            return;
        }
        self.entries.push(url);
    }

    pub fn replace(&mut self, url: String) {
        match self.entries.last_mut() {
            Some(current) => *current = url,
            None => self.entries.push(url),
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    /// Drops the current entry and returns the one before it.
    pub fn back(&mut self) -> Option<String> {
        if !self.can_go_back() {
            return None;
        }
        self.entries.pop();
        self.entries.last().cloned()
    }
}
