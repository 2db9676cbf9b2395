//! Search and filter prompt input (pure state transitions).
//!
//! The prompt owns the text being typed. Submitting hands the text back to
//! the caller, which runs the search or filter; nothing here touches the log
//! view.

/// What the prompt's text is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// `/` search.
    Search,
    /// `\` filter.
    Filter,
}

impl PromptKind {
    /// Leading character shown in the status bar.
    pub fn sigil(&self) -> char {
        match self {
            PromptKind::Search => '/',
            PromptKind::Filter => '\\',
        }
    }
}

/// Text being typed, with a cursor counted in chars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    kind: PromptKind,
    text: String,
    cursor: usize,
}

impl Prompt {
    /// Empty prompt with the cursor at 0.
    pub fn open(kind: PromptKind) -> Self {
        Self {
            kind,
            text: String::new(),
            cursor: 0,
        }
    }

    /// Prompt kind.
    pub fn kind(&self) -> PromptKind {
        self.kind
    }

    /// Text typed so far.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(offset, _)| offset)
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Result of submitting a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// Run a search or filter with `text`.
    Submitted {
        /// Prompt kind.
        kind: PromptKind,
        /// Non-empty text.
        text: String,
    },
    /// Nothing to do.
    Cancelled,
}

/// Insert `ch` at the cursor and advance it.
pub fn handle_char_input(mut prompt: Prompt, ch: char) -> Prompt {
    let offset = prompt.byte_offset(prompt.cursor);
    prompt.text.insert(offset, ch);
    prompt.cursor += 1;
    prompt
}

/// Delete the char before the cursor. No-op at position 0.
pub fn handle_backspace(mut prompt: Prompt) -> Prompt {
    if prompt.cursor > 0 {
        let offset = prompt.byte_offset(prompt.cursor - 1);
        prompt.text.remove(offset);
        prompt.cursor -= 1;
    }
    prompt
}

/// Move the cursor one char left, saturating at 0.
pub fn handle_cursor_left(mut prompt: Prompt) -> Prompt {
    prompt.cursor = prompt.cursor.saturating_sub(1);
    prompt
}

/// Move the cursor one char right, saturating at the end of the text.
pub fn handle_cursor_right(mut prompt: Prompt) -> Prompt {
    prompt.cursor = (prompt.cursor + 1).min(prompt.char_len());
    prompt
}

/// Finish input. Empty text cancels.
pub fn submit(prompt: Prompt) -> PromptOutcome {
    if prompt.text.is_empty() {
        PromptOutcome::Cancelled
    } else {
        PromptOutcome::Submitted {
            kind: prompt.kind,
            text: prompt.text,
        }
    }
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
