/// Modal overlay currently shown on top of the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) enum ActiveDialog {
    #[default]
    None,
    /// A rejected comparison toggle; holds the message to show.
    ComparisonFull(String),
}

impl ActiveDialog {
    pub(crate) fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}
