use tracing::{error, info, warn};

use crate::model::{Category, Tool};
use crate::outcome::Outcome;
use crate::store::{KvStore, TOOLS_KEY};

/// Ordered collection of every registered tool.
///
/// Insertion order is authoritative: positions handed out by the registry
/// (and carried through the view as `original_index`) stay valid for the
/// lifetime of the session because tools are only ever appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolRegistry {
    tools: Vec<Tool>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tools(tools: Vec<Tool>) -> Self {
        Self { tools }
    }

    /// Load the registry from `store`. Missing or malformed data yields an
    /// empty registry; the problem is logged, never returned.
    pub fn load<S: KvStore + ?Sized>(store: &S) -> Self {
        let raw = match store.get(TOOLS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::new(),
            Err(e) => {
                warn!("Failed to read tools from store: {}", e);
                return Self::new();
            }
        };
        match Self::decode(&raw) {
            Ok(registry) => {
                info!(count = registry.len(), "tools loaded");
                registry
            }
            Err(e) => {
                warn!("Discarding malformed tools data: {}", e);
                Self::new()
            }
        }
    }

    pub fn decode(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Vec<Tool>>(raw).map(Self::from_tools)
    }

    pub fn encode(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.tools)
    }

    /// Overwrite the stored copy with the full sequence.
    pub fn save<S: KvStore + ?Sized>(&self, store: &S) -> anyhow::Result<()> {
        let json = self.encode()?;
        store.set(TOOLS_KEY, &json)?;
        Ok(())
    }

    /// Append a new, unborrowed tool. Name and category must be non-empty.
    pub fn add_tool<S: KvStore + ?Sized>(
        &mut self,
        name: &str,
        category: &str,
        owner: &str,
        owner_email: &str,
        store: &S,
    ) -> Outcome {
        if name.is_empty() || category.is_empty() {
            return Outcome::RejectedEmptyField;
        }
        let tool = Tool::new(name, Category::from(category), owner, owner_email);
        info!(tool = %tool.name, category = %tool.category, owner = %tool.owner, "tool added");
        self.tools.push(tool);
        self.persist(store);
        Outcome::Accepted
    }

    /// Mark the tool at `index` as borrowed by `borrower`. A tool can only be
    /// borrowed while nobody else has it; there is no return flow.
    pub fn borrow_tool<S: KvStore + ?Sized>(
        &mut self,
        index: usize,
        borrower: &str,
        store: &S,
    ) -> Outcome {
        let Some(tool) = self.tools.get_mut(index) else {
            return Outcome::RejectedUnknownTool;
        };
        if tool.borrowed_by.is_some() {
            return Outcome::RejectedAlreadyBorrowed;
        }
        tool.borrowed_by = Some(borrower.to_string());
        info!(tool = %tool.name, borrower = %borrower, "tool borrowed");
        self.persist(store);
        Outcome::Accepted
    }

    fn persist<S: KvStore + ?Sized>(&self, store: &S) {
        if let Err(e) = self.save(store) {
            error!("Failed to persist tools: {}", e);
        }
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn get(&self, index: usize) -> Option<&Tool> {
        self.tools.get(index)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
