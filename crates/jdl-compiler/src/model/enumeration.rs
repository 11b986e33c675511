/// A named, ordered set of symbolic values usable as a field type.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Enumeration {
    name: String,
    values: Vec<String>,
}

impl Enumeration {
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value labels in declaration order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }
}
