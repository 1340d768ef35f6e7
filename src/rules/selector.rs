//! Selectors: which fields of a validation type to resolve.

/// Caller-specified description of which rules to resolve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selector {
    /// Every key defined directly under the validation type.
    #[default]
    AllKeys,
    /// Only this field's rule.
    SingleKey(String),
    /// An ordered list of entries. Order decides the order of the resolved map.
    KeySpec(Vec<SelectorEntry>),
}

/// One entry of a [`Selector::KeySpec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorEntry {
    /// A field resolved in full.
    Plain(String),
    /// A group key and the sub-keys to pick from it.
    ///
    /// Each sub-key resolves to the rule stored under `group.sub_key`, or to the
    /// sub-key itself when nothing is configured there (so `"max:10"` can be passed
    /// through as a literal rule).
    Grouped(String, Vec<String>),
}

impl Selector {
    /// Shorthand for [`Selector::SingleKey`].
    pub fn key(field: impl Into<String>) -> Self {
        Selector::SingleKey(field.into())
    }

    /// Start an empty [`Selector::KeySpec`] to be filled with [`Selector::field`]
    /// and [`Selector::group`].
    pub fn spec() -> Self {
        Selector::KeySpec(Vec::new())
    }

    /// Append a plain field entry.
    ///
    /// On `AllKeys` or `SingleKey` the selector is first turned into an equivalent
    /// `KeySpec` (`SingleKey(f)` becomes `[Plain(f)]`; `AllKeys` becomes `[]`).
    pub fn field(self, field: impl Into<String>) -> Self {
        self.push(SelectorEntry::Plain(field.into()))
    }

    /// Append a grouped entry.
    pub fn group<I, S>(self, group: impl Into<String>, sub_keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push(SelectorEntry::Grouped(
            group.into(),
            sub_keys.into_iter().map(Into::into).collect(),
        ))
    }

    fn push(self, entry: SelectorEntry) -> Self {
        let mut entries = match self {
            Selector::AllKeys => Vec::new(),
            Selector::SingleKey(field) => vec![SelectorEntry::Plain(field)],
            Selector::KeySpec(entries) => entries,
        };
        entries.push(entry);
        Selector::KeySpec(entries)
    }
}

impl From<&str> for Selector {
    fn from(field: &str) -> Self {
        Selector::SingleKey(field.to_string())
    }
}

impl From<String> for Selector {
    fn from(field: String) -> Self {
        Selector::SingleKey(field)
    }
}

impl<T: Into<Selector>> From<Option<T>> for Selector {
    fn from(selector: Option<T>) -> Self {
        selector.map(Into::into).unwrap_or(Selector::AllKeys)
    }
}

impl From<Vec<SelectorEntry>> for Selector {
    fn from(entries: Vec<SelectorEntry>) -> Self {
        Selector::KeySpec(entries)
    }
}

impl From<&str> for SelectorEntry {
    fn from(field: &str) -> Self {
        SelectorEntry::Plain(field.to_string())
    }
}

impl From<String> for SelectorEntry {
    fn from(field: String) -> Self {
        SelectorEntry::Plain(field)
    }
}
