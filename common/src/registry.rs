//! Ordered, cyclable list of debug pages.
//!
//! The list is a borrowed slice terminated by [`MenuEntry::End`]. The
//! terminator is a wrap marker only and is never shown; a slice without one
//! ends at its last element.

use crate::pages::DebugPage;

/// One slot of the page list.
#[derive(Clone, Copy)]
pub enum MenuEntry<'a> {
    /// A page with the title shown next to the page indicator.
    Page {
        title: &'static str,
        page: &'a dyn DebugPage,
    },
    /// End of the list.
    End,
}

impl<'a> MenuEntry<'a> {
    pub const fn page(
        title: &'static str,
        page: &'a dyn DebugPage,
    ) -> Self {
        Self::Page { title, page }
    }

    #[inline]
    pub const fn is_end(&self) -> bool { matches!(self, Self::End) }
}

/// Page list as seen by the debug menu.
#[derive(Clone, Copy)]
pub struct Registry<'a> {
    entries: &'a [MenuEntry<'a>],
    len: usize,
}

impl<'a> Registry<'a> {
    pub const fn new(entries: &'a [MenuEntry<'a>]) -> Self {
        let mut len = 0;
        while len < entries.len() {
            if entries[len].is_end() {
                break;
            }
            len += 1;
        }
        Self { entries, len }
    }

    /// Number of pages before the terminator.
    #[inline]
    pub const fn len(&self) -> usize { self.len }

    #[inline]
    pub const fn is_empty(&self) -> bool { self.len == 0 }

    /// Title and page at `index`, `None` past the terminator.
    pub fn entry(
        &self,
        index: usize,
    ) -> Option<(&'static str, &'a dyn DebugPage)> {
        if index >= self.len {
            return None;
        }
        match self.entries[index] {
            MenuEntry::Page { title, page } => Some((title, page)),
            MenuEntry::End => None,
        }
    }

    /// Title of the page at `index`.
    pub fn title(
        &self,
        index: usize,
    ) -> Option<&'static str> {
        self.entry(index).map(|(title, _)| title)
    }

    /// Index following `index`, wrapping to 0 at the terminator.
    #[inline]
    pub const fn next(
        &self,
        index: usize,
    ) -> usize {
        if index + 1 >= self.len { 0 } else { index + 1 }
    }
}
