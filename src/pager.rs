// src/pager.rs

/// Previous/next cursor over `len` results; both ends wrap around.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pager {
    index: usize,
    len: usize,
}

impl Pager {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize { self.index }
    pub fn len(&self) -> usize { self.len }
    pub fn is_empty(&self) -> bool { self.len == 0 }

    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.index = if self.index == 0 { self.len - 1 } else { self.index - 1 };
        }
        self.index
    }

    /// Jump straight to `index`; out-of-range is ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    /// "2/5", or "0/0" when empty.
    pub fn label(&self) -> String {
        if self.len == 0 {
            s!("0/0")
        } else {
            format!("{}/{}", self.index + 1, self.len)
        }
    }
}
