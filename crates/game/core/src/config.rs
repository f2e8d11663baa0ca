/// Deconstructor configuration: command name, narration templates and host limits.
///
/// Templates use positional placeholders: `%1` is the icon index, `%2` the item
/// name and `%3` (obtained only) the quantity. See [`crate::format_template`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DeconConfig {
    /// Plugin command name routed to the deconstructor.
    pub command: String,

    /// Title line emitted once per resolution: `%1` icon, `%2` name.
    pub text_deconstructing: String,

    /// Line emitted per obtained material: `%1` icon, `%2` name, `%3` quantity.
    pub text_obtained: String,

    /// Maximum quantity the party can hold of a single item.
    pub max_item_stack: u32,
}

impl DeconConfig {
    pub const DEFAULT_COMMAND: &'static str = "Deconstructor";
    pub const DEFAULT_TEXT_DECONSTRUCTING: &'static str = r"Deconstructing \I[%1]\C[1]%2\C[0]";
    pub const DEFAULT_TEXT_OBTAINED: &'static str =
        r"\C[1]+ \C[0]Obtained \I[%1]\C[1]%2\C[0] x \C[1]%3\C[0]";
    pub const DEFAULT_MAX_ITEM_STACK: u32 = 99;

    pub fn new() -> Self {
        Self {
            command: Self::DEFAULT_COMMAND.to_string(),
            text_deconstructing: Self::DEFAULT_TEXT_DECONSTRUCTING.to_string(),
            text_obtained: Self::DEFAULT_TEXT_OBTAINED.to_string(),
            max_item_stack: Self::DEFAULT_MAX_ITEM_STACK,
        }
    }

    /// Replaces both narration templates.
    #[must_use]
    pub fn with_templates(
        mut self,
        deconstructing: impl Into<String>,
        obtained: impl Into<String>,
    ) -> Self {
        self.text_deconstructing = deconstructing.into();
        self.text_obtained = obtained.into();
        self
    }
}

impl Default for DeconConfig {
    fn default() -> Self {
        Self::new()
    }
}
