use crate::error::ParseError;

/// Nesting limit for open elements. Real statements are a dozen or so levels deep.
pub(crate) const MAX_DEPTH: usize = 1000;

/// The names of the elements open at the current point in the stream, innermost last.
#[derive(Debug, Clone)]
pub(crate) struct PathStack {
    names: Vec<String>,
    max_depth: usize,
}

impl PathStack {
    pub(crate) fn new(max_depth: usize) -> Self {
        Self {
            names: Vec::new(),
            max_depth,
        }
    }

    /// Opens `name`. Fails rather than growing past `max_depth`.
    pub(crate) fn push(&mut self, name: &str) -> Result<(), ParseError> {
        if self.names.len() >= self.max_depth {
            return Err(ParseError::PathTooDeep {
                depth: self.max_depth,
            });
        }
        self.names.push(name.to_string());
        Ok(())
    }

    pub(crate) fn top(&self) -> Option<&str> {
        self.names.last().map(String::as_str)
    }

    pub(crate) fn pop(&mut self) -> Option<String> {
        self.names.pop()
    }

    pub(crate) fn len(&self) -> usize {
        self.names.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
