//! Chart file loading
//!
//! A chart file is a TOML document bundling the family-tree records with the
//! layout computed for them:
//!
//! ```toml
//! title = "The Example Family"
//!
//! [[individuals]]
//! id = "@I1@"
//! name = "John Example"
//! sex = "male"
//! birth = { year = 1901, month = 3 }
//! death = "ABT 1970"
//! spouse_of = ["@F1@"]
//!
//! [[families]]
//! id = "@F1@"
//!
//! [layout]
//! width = 600
//! height = 400
//! ```

use crate::core::error::ChartError;
use crate::core::layout::Layout;
use crate::core::models::{Family, FamilyId, FamilyTree, Individual};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One individual as written in a chart file
#[derive(Debug, Clone, Deserialize)]
pub struct IndividualRecord {
    /// The individual itself
    #[serde(flatten)]
    pub individual: Individual,

    /// Families in which this individual is a spouse (GEDCOM `FAMS`)
    #[serde(default)]
    pub spouse_of: Vec<FamilyId>,

    /// Families in which this individual is a child (GEDCOM `FAMC`)
    #[serde(default)]
    pub child_of: Vec<FamilyId>,
}

/// Parsed contents of a chart file
#[derive(Debug, Clone, Deserialize)]
pub struct ChartFile {
    /// Page title, overriding the configured default
    #[serde(default)]
    pub title: Option<String>,

    /// Individual records in display order
    #[serde(default)]
    pub individuals: Vec<IndividualRecord>,

    /// Family records in display order
    #[serde(default)]
    pub families: Vec<Family>,

    /// Precomputed geometry
    #[serde(default)]
    pub layout: Layout,
}

/// A loaded chart: relationship index plus layout
#[derive(Debug, Clone)]
pub struct Chart {
    /// Page title from the chart file, if any
    pub title: Option<String>,
    /// Individuals, families and their links
    pub tree: FamilyTree,
    /// Precomputed geometry
    pub layout: Layout,
}

impl ChartFile {
    /// Parse a chart from TOML text
    ///
    /// # Errors
    /// Returns an error if the text is not a valid chart document
    pub fn from_toml(toml_str: &str) -> Result<Self, ChartError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Read and parse a chart file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ChartError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ChartError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Build the relationship index
    ///
    /// Entities are added in file order; links are added afterwards in
    /// individual order, so a family's spouses and children appear in the
    /// order their individuals are listed.
    ///
    /// # Errors
    /// Returns an error on duplicate or empty ids
    pub fn into_chart(self) -> Result<Chart, ChartError> {
        let mut tree = FamilyTree::new();

        for family in self.families {
            tree.add_family(family)?;
        }

        let mut links = Vec::with_capacity(self.individuals.len());
        for record in self.individuals {
            links.push((record.individual.id.clone(), record.spouse_of, record.child_of));
            tree.add_individual(record.individual)?;
        }

        for (individual, spouse_of, child_of) in &links {
            for family in spouse_of {
                tree.link_spouse(individual, family);
            }
            for family in child_of {
                tree.link_child(individual, family);
            }
        }

        Ok(Chart {
            title: self.title,
            tree,
            layout: self.layout,
        })
    }
}

impl Chart {
    /// Read, parse and index a chart file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or indexed
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ChartError> {
        ChartFile::load(path)?.into_chart()
    }

    /// Parse and index a chart from TOML text
    ///
    /// # Errors
    /// Returns an error if the text cannot be parsed or indexed
    pub fn from_toml(toml_str: &str) -> Result<Self, ChartError> {
        ChartFile::from_toml(toml_str)?.into_chart()
    }
}
