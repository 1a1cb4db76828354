//! Family records and canonical folder naming.
//!
//! A [`Family`] is a transient, in-memory record. Its only lasting effect
//! is the directory tree built from it by [`crate::scaffold::build_folder`].

use serde::{Deserialize, Serialize};

use crate::normalize::remove_accents;

/// Member unit holding the records shared by the whole family.
pub const FAMILY_UNIT: &str = "family";

/// One family unit: two parents and an ordered list of children.
///
/// The canonical folder name is derived once at construction and never
/// recomputed, even if the name fields are edited afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "FamilyFields", rename_all = "camelCase")]
pub struct Family {
    pub father_given_name: String,
    pub father_family_name: String,
    pub mother_given_name: String,
    pub mother_family_name: String,
    pub children: Vec<String>,
    folder_name: String,
}

/// Raw input shape for deserialization; the derived folder name is always
/// recomputed through [`Family::new`], never trusted from input.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FamilyFields {
    father_given_name: String,
    father_family_name: String,
    mother_given_name: String,
    mother_family_name: String,
    #[serde(default)]
    children: Vec<String>,
}

impl From<FamilyFields> for Family {
    fn from(fields: FamilyFields) -> Self {
        Family::new(
            &fields.father_given_name,
            &fields.father_family_name,
            &fields.mother_given_name,
            &fields.mother_family_name,
            fields.children,
        )
    }
}

impl Family {
    /// Build a record from caller-supplied names.
    ///
    /// No validation is performed: empty strings, digits, and symbols are
    /// normalized verbatim like any other text.
    pub fn new(
        father_given_name: &str,
        father_family_name: &str,
        mother_given_name: &str,
        mother_family_name: &str,
        children: Vec<String>,
    ) -> Self {
        let folder_name = format!(
            "{}_{}",
            name_part(father_given_name, father_family_name),
            name_part(mother_given_name, mother_family_name)
        );

        Self {
            father_given_name: father_given_name.to_string(),
            father_family_name: father_family_name.to_string(),
            mother_given_name: mother_given_name.to_string(),
            mother_family_name: mother_family_name.to_string(),
            children,
            folder_name,
        }
    }

    /// Canonical, accent-free root folder name for this family.
    pub fn folder_name(&self) -> &str {
        &self.folder_name
    }

    /// Member-unit folder names in creation order: [`FAMILY_UNIT`] first,
    /// then one unit per child, in the order the children were supplied.
    pub fn member_units(&self) -> Vec<String> {
        let mut units = Vec::with_capacity(1 + self.children.len());
        units.push(FAMILY_UNIT.to_string());
        units.extend(
            self.children
                .iter()
                .map(|child| child_unit_name(child, &self.father_family_name)),
        );
        units
    }
}

/// `{accent-free lowercased given}{accent-free uppercased family}`, no
/// separator. Applied to each parent independently.
fn name_part(given: &str, family: &str) -> String {
    format!(
        "{}{}",
        remove_accents(given).to_lowercase(),
        remove_accents(family).to_uppercase()
    )
}

/// Per-child unit name. Children inherit the father's family name, and the
/// whole unit is normalized in a single pass over the concatenation; both
/// points are part of the on-disk naming scheme.
fn child_unit_name(child_given: &str, father_family: &str) -> String {
    remove_accents(&format!(
        "{}{}",
        child_given.to_lowercase(),
        father_family.to_uppercase()
    ))
}
