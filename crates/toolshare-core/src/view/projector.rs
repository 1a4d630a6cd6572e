use std::collections::HashMap;
use std::fmt;

use super::collation::compare_base;
use crate::model::{Category, Tool};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

/// Heading colour for categories outside the fixed table.
pub const DEFAULT_COLOUR: Colour = Colour::rgb(0x00, 0x00, 0x00);

const CATEGORY_COLOURS: &[(&str, Colour)] = &[
    ("knippen/snijden", Colour::rgb(0x00, 0x7B, 0xFF)), // blue
    ("boren", Colour::rgb(0x28, 0xA7, 0x45)),           // green
    ("schuren", Colour::rgb(0xFF, 0x98, 0x00)),         // orange
    ("lijmen", Colour::rgb(0x9C, 0x27, 0xB0)),          // purple
    ("verven/maskeren", Colour::rgb(0xE9, 0x1E, 0x63)), // pink
];

pub fn category_colour(category: &Category) -> Colour {
    CATEGORY_COLOURS
        .iter()
        .find(|(name, _)| *name == category.as_str())
        .map(|(_, c)| *c)
        .unwrap_or(DEFAULT_COLOUR)
}

/// A tool as shown in the borrow view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolView {
    /// Position in the registry. Borrow actions address this, not the
    /// position within the sorted group.
    pub original_index: usize,
    pub name: String,
    pub owner: String,
    pub owner_email: String,
    pub borrowed_by: Option<String>,
}

impl ToolView {
    fn from_tool(index: usize, tool: &Tool) -> Self {
        Self {
            original_index: index,
            name: tool.name.clone(),
            owner: tool.owner.clone(),
            owner_email: tool.owner_email.clone(),
            borrowed_by: tool.borrowed_by.clone(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.borrowed_by.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub category: Category,
    pub colour: Colour,
    pub tools: Vec<ToolView>,
}

/// Tools grouped by category, ready to render.
///
/// `order` lists each category once, in the order it was first seen in the
/// registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projection {
    order: Vec<Category>,
    groups: HashMap<Category, CategoryGroup>,
}

impl Projection {
    pub fn categories(&self) -> &[Category] {
        &self.order
    }

    pub fn group(&self, category: &Category) -> Option<&CategoryGroup> {
        self.groups.get(category)
    }

    /// Groups in display order.
    pub fn groups(&self) -> impl Iterator<Item = &CategoryGroup> {
        self.order.iter().filter_map(|c| self.groups.get(c))
    }

    /// Every tool view in display order, flattened across groups.
    pub fn rows(&self) -> impl Iterator<Item = &ToolView> {
        self.groups().flat_map(|g| g.tools.iter())
    }

    pub fn names_in(&self, category: &Category) -> Vec<&str> {
        self.group(category)
            .map(|g| g.tools.iter().map(|t| t.name.as_str()).collect())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

pub fn project(tools: &[Tool]) -> Projection {
    let mut order: Vec<Category> = Vec::new();
    let mut groups: HashMap<Category, CategoryGroup> = HashMap::new();

    for (index, tool) in tools.iter().enumerate() {
        let group = groups.entry(tool.category.clone()).or_insert_with(|| {
            order.push(tool.category.clone());
            CategoryGroup {
                category: tool.category.clone(),
                colour: category_colour(&tool.category),
                tools: Vec::new(),
            }
        });
        group.tools.push(ToolView::from_tool(index, tool));
    }

    // Stable: names equal at base strength keep registry order.
    for group in groups.values_mut() {
        group.tools.sort_by(|a, b| compare_base(&a.name, &b.name));
    }

    Projection { order, groups }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool(name: &str, category: &str) -> Tool {
        Tool::new(name, Category::from(category), "Owner", "owner@example.nl")
    }

    #[test]
    fn sorts_case_insensitively_within_group() {
        let tools = vec![tool("Zaag", "boren"), tool("accu", "boren")];
        let p = project(&tools);
        assert_eq!(p.names_in(&Category::Boren), vec!["accu", "Zaag"]);
    }

    #[test]
    fn keeps_original_index_after_sorting() {
        let tools = vec![
            tool("Zaag", "boren"),
            tool("Kwast", "verven/maskeren"),
            tool("accu", "boren"),
        ];
        let p = project(&tools);
        let boren = p.group(&Category::Boren).unwrap();
        let indices: Vec<usize> = boren.tools.iter().map(|t| t.original_index).collect();
        assert_eq!(indices, vec![2, 0]);
    }

    #[test]
    fn group_order_follows_first_encounter() {
        let tools = vec![
            tool("Schuurblok", "schuren"),
            tool("Boor", "boren"),
            tool("Schuurpapier", "schuren"),
            tool("Tape", "verven/maskeren"),
            tool("Houtlijm", "lijmen"),
        ];
        let p = project(&tools);
        assert_eq!(
            p.categories(),
            &[
                Category::Schuren,
                Category::Boren,
                Category::VervenMaskeren,
                Category::Lijmen
            ]
        );
        let group_names: Vec<&str> = p.groups().map(|g| g.category.as_str()).collect();
        assert_eq!(group_names, vec!["schuren", "boren", "verven/maskeren", "lijmen"]);
    }

    #[test]
    fn colours_come_from_table_with_default_fallback() {
        let tools = vec![tool("Mes", "knippen/snijden"), tool("Troffel", "metselen")];
        let p = project(&tools);
        assert_eq!(
            p.group(&Category::KnippenSnijden).unwrap().colour.hex(),
            "#007BFF"
        );
        assert_eq!(
            p.group(&Category::Other("metselen".into())).unwrap().colour,
            DEFAULT_COLOUR
        );
        assert_eq!(category_colour(&Category::VervenMaskeren).hex(), "#E91E63");
    }

    #[test]
    fn equal_names_keep_registry_order() {
        let mut a = tool("Hamer", "boren");
        a.owner = "Eerste".into();
        let mut b = tool("hamer", "boren");
        b.owner = "Tweede".into();
        let p = project(&[a, b]);
        let owners: Vec<&str> = p
            .group(&Category::Boren)
            .unwrap()
            .tools
            .iter()
            .map(|t| t.owner.as_str())
            .collect();
        assert_eq!(owners, vec!["Eerste", "Tweede"]);
    }

    #[test]
    fn projection_does_not_touch_input_order() {
        let tools = vec![tool("Zaag", "boren"), tool("accu", "boren")];
        let before = tools.clone();
        let _ = project(&tools);
        assert_eq!(tools, before);
    }

    #[test]
    fn empty_registry_projects_empty() {
        let p = project(&[]);
        assert!(p.is_empty());
        assert_eq!(p.rows().count(), 0);
    }
}
