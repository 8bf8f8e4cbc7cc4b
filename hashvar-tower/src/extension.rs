use bytes::Bytes;
use smol_str::SmolStr;

/// Hash variables evaluated for a request.
///
/// Inserted into request extensions by
/// [`HashVariablesService`](crate::service::HashVariablesService). A
/// variable that evaluated to a not found value is recorded without data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvaluatedVariables {
    values: Vec<(SmolStr, Option<Bytes>)>,
}

impl EvaluatedVariables {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        EvaluatedVariables {
            values: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn insert(&mut self, name: SmolStr, value: Option<Bytes>) {
        self.values.push((name, value));
    }

    /// Value of `name`, `None` when absent or not evaluated.
    pub fn get(&self, name: &str) -> Option<&Bytes> {
        self.values
            .iter()
            .find(|(key, _)| key == name)
            .and_then(|(_, value)| value.as_ref())
    }

    /// Value of `name` as text.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name)
            .and_then(|value| std::str::from_utf8(value).ok())
    }

    /// Whether `name` was evaluated, found or not.
    pub fn contains(&self, name: &str) -> bool {
        self.values.iter().any(|(key, _)| key == name)
    }

    /// Evaluated variables in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Bytes>)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_ref()))
    }

    /// Number of evaluated variables.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no variables were evaluated.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
