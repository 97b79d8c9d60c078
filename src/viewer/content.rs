/// What the content pane shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentPane<'a> {
    /// No active file
    Placeholder,
    /// The active file, content verbatim
    File {
        name: &'a str,
        /// `/`-separated name path from the roots
        path: String,
        language: &'a str,
        content: &'a str,
    },
}

impl<'a> ContentPane<'a> {
    /// Content text, empty for the placeholder
    pub fn text(&self) -> &'a str {
        match self {
            ContentPane::Placeholder => "",
            ContentPane::File { content, .. } => content,
        }
    }

    /// Number of lines the content spans (an empty file still has one)
    pub fn line_count(&self) -> usize {
        match self {
            ContentPane::Placeholder => 0,
            ContentPane::File { content, .. } => content.lines().count().max(1),
        }
    }
}
