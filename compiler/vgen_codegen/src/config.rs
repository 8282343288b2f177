//! Generation settings.

/// Knobs for one generator instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodegenConfig {
    /// Prefix added to every line of a nested statement body.
    pub indent: String,
    /// Comment line width; wrapped text is three columns narrower to leave room for `// `.
    pub comment_wrap: usize,
    /// When set, delay statements hoist a `` `timescale `` directive with this value.
    pub timescale: Option<String>,
    /// Names the allocator must never hand out, on top of the Verilog keywords.
    pub reserved_words: Vec<String>,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        CodegenConfig {
            indent: "  ".to_string(),
            comment_wrap: 60,
            timescale: None,
            reserved_words: Vec::new(),
        }
    }
}

impl CodegenConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    #[must_use]
    pub fn with_comment_wrap(mut self, width: usize) -> Self {
        self.comment_wrap = width;
        self
    }

    #[must_use]
    pub fn with_timescale(mut self, timescale: impl Into<String>) -> Self {
        self.timescale = Some(timescale.into());
        self
    }

    #[must_use]
    pub fn with_reserved_word(mut self, word: impl Into<String>) -> Self {
        self.reserved_words.push(word.into());
        self
    }
}
