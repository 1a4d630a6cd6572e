use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Classification tag used for grouping and colour-coding.
///
/// Serialized as its plain stored spelling. Strings outside the five fixed
/// values load as [`Category::Other`] so that hand-edited or older stores
/// still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    KnippenSnijden,
    Boren,
    Schuren,
    Lijmen,
    VervenMaskeren,
    Other(String),
}

impl Category {
    /// The fixed categories, in selector order.
    pub const ALL: [Category; 5] = [
        Category::KnippenSnijden,
        Category::Boren,
        Category::Schuren,
        Category::Lijmen,
        Category::VervenMaskeren,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Category::KnippenSnijden => "knippen/snijden",
            Category::Boren => "boren",
            Category::Schuren => "schuren",
            Category::Lijmen => "lijmen",
            Category::VervenMaskeren => "verven/maskeren",
            Category::Other(s) => s,
        }
    }

    /// Human-facing label shown in the category selector.
    pub fn label(&self) -> &str {
        match self {
            Category::KnippenSnijden => "Knippen/snijden",
            Category::Boren => "Boren",
            Category::Schuren => "Schuren",
            Category::Lijmen => "Lijmen",
            Category::VervenMaskeren => "Verven/maskeren",
            Category::Other(s) => s,
        }
    }

    pub fn is_fixed(&self) -> bool {
        !matches!(self, Category::Other(_))
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        match s {
            "knippen/snijden" => Category::KnippenSnijden,
            "boren" => Category::Boren,
            "schuren" => Category::Schuren,
            "lijmen" => Category::Lijmen,
            "verven/maskeren" => Category::VervenMaskeren,
            other => Category::Other(other.to_string()),
        }
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        match Category::from(s.as_str()) {
            Category::Other(_) => Category::Other(s),
            fixed => fixed,
        }
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        match c {
            Category::Other(s) => s,
            fixed => fixed.as_str().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lendable item registered by its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub name: String,
    pub category: Category,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub owner_email: String,
    /// Name of the current borrower. Set once, never cleared. A stored empty
    /// name reads as nobody.
    #[serde(default, deserialize_with = "non_empty")]
    pub borrowed_by: Option<String>,
}

fn non_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

impl Tool {
    pub fn new(
        name: impl Into<String>,
        category: Category,
        owner: impl Into<String>,
        owner_email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            owner: owner.into(),
            owner_email: owner_email.into(),
            borrowed_by: None,
        }
    }

    pub fn is_borrowed(&self) -> bool {
        self.borrowed_by.is_some()
    }
}
