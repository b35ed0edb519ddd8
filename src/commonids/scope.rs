use crate::resourceids::{impl_resource_id_traits, ParseResult, ResourceId, ResourceIdError, Segment};

/// Any Resource ID used as the scope of another resource, e.g. a role
/// assignment or a diagnostic setting.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScopeId {
    /// The scope, always with a leading `/`.
    pub scope: String,
}

impl ScopeId {
    /// Creates a Scope ID, adding a leading `/` if missing.
    #[must_use]
    pub fn new(scope: impl Into<String>) -> Self {
        let scope = scope.into();
        let scope = if scope.starts_with('/') {
            scope
        } else {
            format!("/{scope}")
        };
        Self { scope }
    }
}

impl ResourceId for ScopeId {
    const DISPLAY_NAME: &'static str = "Scope";

    fn segments() -> &'static [Segment] {
        const SEGMENTS: &[Segment] = &[Segment::scope("scope")];
        SEGMENTS
    }

    fn from_parse_result(result: &ParseResult) -> Result<Self, ResourceIdError> {
        Ok(Self {
            scope: result.require("scope")?,
        })
    }

    fn id(&self) -> String {
        self.scope.clone()
    }

    fn components(&self) -> Vec<String> {
        vec![format!("Scope: {:?}", self.scope)]
    }
}

impl_resource_id_traits!(ScopeId);
