/// A single answer given to a question.
///
/// This is the value stored in `AnswerSet` for each answered question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// The value of the chosen option (from single-choice questions).
    Single(String),

    /// The values of all chosen options (from multi-choice questions).
    ///
    /// Kept in the order the options were picked, without duplicates.
    Multi(Vec<String>),

    /// Free text (from free-text questions).
    Text(String),
}

impl Answer {
    /// Build a multi-choice answer, dropping repeated values.
    pub fn multi<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut picked: Vec<String> = Vec::new();
        for value in values {
            let value = value.into();
            if !picked.contains(&value) {
                picked.push(value);
            }
        }
        Self::Multi(picked)
    }

    /// Try to get this answer as a chosen option value.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            _ => None,
        }
    }

    /// Try to get this answer as chosen option values.
    pub fn as_multi(&self) -> Option<&[String]> {
        match self {
            Self::Multi(values) => Some(values),
            _ => None,
        }
    }

    /// Try to get this answer as free text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Whether this answer counts as "not answered".
    ///
    /// Blank text, an empty selection and an empty option value are all blank.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Single(value) => value.is_empty(),
            Self::Multi(values) => values.is_empty(),
            Self::Text(text) => text.trim().is_empty(),
        }
    }

    /// Get the type name of this answer for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Single(_) => "Single",
            Self::Multi(_) => "Multi",
            Self::Text(_) => "Text",
        }
    }
}

impl From<Vec<String>> for Answer {
    fn from(values: Vec<String>) -> Self {
        Self::multi(values)
    }
}

impl From<Vec<&str>> for Answer {
    fn from(values: Vec<&str>) -> Self {
        Self::multi(values)
    }
}
