//! The ordered scenario set.

/// One scenario in the fixed execution order.
///
/// Later variants depend on state left behind by earlier ones, so the
/// ordering of [`Scenario::ordered`] is a correctness requirement, not a
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// Create a story with valid fields and remember its identifier.
    CreateStory,
    /// Edit the remembered story with new field values.
    EditStory,
    /// List all stories.
    ListStories,
    /// Delete the remembered story.
    DeleteStory,
    /// Create with an empty payload.
    CreateWithoutFields,
    /// Edit an identifier that was never created.
    EditUnknownStory,
    /// Delete an identifier that was never created.
    DeleteUnknownStory,
}

impl Scenario {
    /// All scenarios in execution order.
    #[must_use]
    pub const fn ordered() -> &'static [Self] {
        &[
            Self::CreateStory,
            Self::EditStory,
            Self::ListStories,
            Self::DeleteStory,
            Self::CreateWithoutFields,
            Self::EditUnknownStory,
            Self::DeleteUnknownStory,
        ]
    }

    /// Short human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CreateStory => "create story with valid fields",
            Self::EditStory => "edit the created story",
            Self::ListStories => "list all stories",
            Self::DeleteStory => "delete the created story",
            Self::CreateWithoutFields => "create story without fields",
            Self::EditUnknownStory => "edit a story that does not exist",
            Self::DeleteUnknownStory => "delete a story that does not exist",
        }
    }
}
