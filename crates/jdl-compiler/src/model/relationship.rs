use jdl_core::RelationshipKind;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Relationship {
    kind: RelationshipKind,
    from: RelationshipSide,
    to: RelationshipSide,
}

impl Relationship {
    pub fn new(kind: RelationshipKind, from: RelationshipSide, to: RelationshipSide) -> Self {
        Self { kind, from, to }
    }

    pub fn kind(&self) -> RelationshipKind {
        self.kind
    }

    pub fn from(&self) -> &RelationshipSide {
        &self.from
    }

    pub fn to(&self) -> &RelationshipSide {
        &self.to
    }

    /// Check if either endpoint is `entity`.
    pub fn involves(&self, entity: &str) -> bool {
        self.from.entity == entity || self.to.entity == entity
    }
}

/// One endpoint: the entity plus the field injected into it, if any.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipSide {
    entity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    injected_field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
    required: bool,
}

impl RelationshipSide {
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            injected_field: None,
            comment: None,
            required: false,
        }
    }

    pub fn with_injected_field(mut self, field: impl Into<String>) -> Self {
        self.injected_field = Some(field.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn entity(&self) -> &str {
        &self.entity
    }

    pub fn injected_field(&self) -> Option<&str> {
        self.injected_field.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }
}
