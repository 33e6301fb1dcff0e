//! # Project Data Structures
//!
//! The `Project` struct is the root container for all calculation data.
//! Projects serialize to `.mepj` files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, engineer, job info, timestamps)
//! ├── settings: GlobalSettings (supply defaults, ambient temperature)
//! └── items: HashMap<Uuid, CalculationItem> (all calculations)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use mep_core::project::Project;
//!
//! let mut project = Project::new("Jane Engineer", "25-042", "ACME Developments");
//!
//! // Serialize to JSON
//! let json = serde_json::to_string_pretty(&project).unwrap();
//!
//! // Save to file (see file_io module for atomic saves)
//! std::fs::write("project.mepj", &json).unwrap();
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::CalculationItem;
use crate::tables::cable::{Insulation, Phase};

/// Current schema version for .mepj files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
///
/// This is the top-level struct that gets serialized to `.mepj` files.
/// Items are stored in a flat UUID-keyed map for O(1) lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, engineer, job info)
    pub meta: ProjectMetadata,

    /// Global settings (supply defaults, ambient temperature)
    pub settings: GlobalSettings,

    /// All calculation items, keyed by UUID
    ///
    /// Using a HashMap instead of a Vec provides:
    /// - O(1) lookup by item reference
    /// - No duplicate ID issues
    /// - Stable references when items are reordered in a UI
    pub items: HashMap<Uuid, CalculationItem>,
}

impl Project {
    /// Create a new empty project.
    ///
    /// # Arguments
    ///
    /// * `engineer` - Name of the responsible engineer
    /// * `job_id` - Job/project number (e.g., "25-001")
    /// * `client` - Client name
    ///
    /// # Example
    ///
    /// ```rust
    /// use mep_core::project::Project;
    ///
    /// let project = Project::new("John Doe", "25-001", "Client Corp");
    /// assert_eq!(project.meta.engineer, "John Doe");
    /// ```
    pub fn new(
        engineer: impl Into<String>,
        job_id: impl Into<String>,
        client: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                job_id: job_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            settings: GlobalSettings::default(),
            items: HashMap::new(),
        }
    }

    /// Add a calculation item to the project.
    ///
    /// Returns the UUID assigned to the item.
    pub fn add_item(&mut self, item: CalculationItem) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(id, item);
        self.touch();
        id
    }

    /// Remove a calculation item by UUID.
    ///
    /// Returns the removed item if it existed.
    pub fn remove_item(&mut self, id: &Uuid) -> Option<CalculationItem> {
        let item = self.items.remove(id);
        if item.is_some() {
            self.touch();
        }
        item
    }

    /// Get a calculation item by UUID.
    pub fn get_item(&self, id: &Uuid) -> Option<&CalculationItem> {
        self.items.get(id)
    }

    /// Get a mutable reference to a calculation item by UUID.
    ///
    /// Note: This method updates the modified timestamp when an item is
    /// found. The caller should be aware that getting a mutable reference
    /// marks the project as modified.
    pub fn get_item_mut(&mut self, id: &Uuid) -> Option<&mut CalculationItem> {
        if self.items.contains_key(id) {
            self.meta.modified = Utc::now();
            self.items.get_mut(id)
        } else {
            None
        }
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Number of calculation items in the project.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Job/project number
    pub job_id: String,

    /// Client name
    pub client: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// Global project settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Wiring regulations edition the project is designed to
    pub wiring_code: String,

    /// Default ambient temperature for cable calculations (°C)
    pub ambient_temp_c: f64,

    /// Default conductor insulation for new circuits
    pub default_insulation: Insulation,

    /// Default supply arrangement for new circuits
    pub default_phase: Phase,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        GlobalSettings {
            wiring_code: "BS7671:2018+A2".to_string(),
            ambient_temp_c: 30.0,
            default_insulation: Insulation::Pvc,
            default_phase: Phase::SinglePhase,
        }
    }
}
