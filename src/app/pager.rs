use crate::catalog::LocationAreaPage;

/// Links to the pages around the last location page shown.
#[derive(Debug, Default)]
pub struct Pager {
    next: Option<String>,
    previous: Option<String>,
}

impl Pager {
    pub fn new() -> Self {
        Self {
            next: None,
            previous: None,
        }
    }

    pub fn update(&mut self, page: &LocationAreaPage) {
        self.next = page.next.clone();
        self.previous = page.previous.clone();
    }

    /// `None` before the first page and after the last one.
    pub fn next(&self) -> Option<&str> {
        self.next.as_deref()
    }

    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }
}
