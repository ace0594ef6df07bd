/// Configuration for the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// ASCII lower-case attribute values when they are committed to a tag.
    ///
    /// On by default so that `<html lAnG='eN'>` yields `lang="en"`. The
    /// published algorithm only folds names; turn this off to keep values
    /// verbatim.
    pub fold_attribute_values: bool,

    /// Keep recoverable parse errors in [`HTMLTokenizer::errors`](super::HTMLTokenizer::errors).
    /// They are logged either way.
    pub collect_parse_errors: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            fold_attribute_values: true,
            collect_parse_errors: true,
        }
    }
}

impl TokenizerConfig {
    /// The one place attribute values are case-folded.
    pub(super) fn fold_attribute_value(self, value: &mut String) {
        if self.fold_attribute_values {
            value.make_ascii_lowercase();
        }
    }
}
