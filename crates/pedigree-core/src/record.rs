//! Read-only genealogical record consumed by the graph builder.
//!
//! The record is produced elsewhere (a GEDCOM parser, a JSON export, a test fixture). This module
//! only stores persons and families in record order and indexes the memberships the builder
//! walks: the families a person is a spouse in and the families a person is a child of.

use crate::{Error, Result};
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M", alias = "m", alias = "male", alias = "Male")]
    Male,
    #[serde(rename = "F", alias = "f", alias = "female", alias = "Female")]
    Female,
    #[default]
    #[serde(rename = "U", alias = "u", alias = "unknown", alias = "Unknown")]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    /// GEDCOM-style name, surname between slashes (`"John /Smith/"`).
    #[serde(default)]
    pub name: Option<String>,
    /// Explicit display label; wins over `name` when present.
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub sex: Sex,
    #[serde(default)]
    pub dead: bool,
    #[serde(default)]
    pub birth: Option<String>,
    #[serde(default)]
    pub death: Option<String>,
}

impl Person {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            label: None,
            sex: Sex::Unknown,
            dead: false,
            birth: None,
            death: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = sex;
        self
    }

    pub fn with_death(mut self, date: impl Into<String>) -> Self {
        self.death = Some(date.into());
        self
    }

    pub fn is_dead(&self) -> bool {
        self.dead || self.death.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Family {
    pub id: String,
    #[serde(default)]
    pub husband: Option<String>,
    #[serde(default)]
    pub wife: Option<String>,
    #[serde(default, rename = "marriageDate", alias = "marriage_date")]
    pub marriage_date: Option<String>,
    #[serde(default)]
    pub children: Vec<String>,
}

impl Family {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_husband(mut self, id: impl Into<String>) -> Self {
        self.husband = Some(id.into());
        self
    }

    pub fn with_wife(mut self, id: impl Into<String>) -> Self {
        self.wife = Some(id.into());
        self
    }

    pub fn with_marriage_date(mut self, date: impl Into<String>) -> Self {
        self.marriage_date = Some(date.into());
        self
    }

    pub fn with_children<I, S>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Spouses in display order: husband first.
    pub fn spouses(&self) -> impl Iterator<Item = &str> {
        self.husband
            .as_deref()
            .into_iter()
            .chain(self.wife.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize)]
struct RecordJson {
    #[serde(default)]
    persons: Vec<Person>,
    #[serde(default)]
    families: Vec<Family>,
}

#[derive(Debug, Clone, Default)]
pub struct Record {
    persons: IndexMap<String, Person>,
    families: IndexMap<String, Family>,
    spouse_of: FxHashMap<String, Vec<String>>,
    child_of: FxHashMap<String, Vec<String>>,
}

impl Record {
    /// Builds the record and its membership indexes.
    ///
    /// Memberships keep record order: a person's spouse families are listed in the order the
    /// families appear, which is the order the builder materializes units in.
    pub fn new(
        persons: impl IntoIterator<Item = Person>,
        families: impl IntoIterator<Item = Family>,
    ) -> Result<Self> {
        let mut record = Self::default();

        for person in persons {
            if record.persons.contains_key(&person.id) {
                return Err(Error::InvalidRecord {
                    message: format!("duplicate person id {}", person.id),
                });
            }
            record.persons.insert(person.id.clone(), person);
        }

        for family in families {
            if record.families.contains_key(&family.id) {
                return Err(Error::InvalidRecord {
                    message: format!("duplicate family id {}", family.id),
                });
            }
            for member in family.spouses().chain(family.children.iter().map(String::as_str)) {
                if !record.persons.contains_key(member) {
                    return Err(Error::InvalidRecord {
                        message: format!("family {} references unknown person {member}", family.id),
                    });
                }
            }
            for spouse in family.spouses() {
                record
                    .spouse_of
                    .entry(spouse.to_string())
                    .or_default()
                    .push(family.id.clone());
            }
            for child in &family.children {
                record
                    .child_of
                    .entry(child.clone())
                    .or_default()
                    .push(family.id.clone());
            }
            record.families.insert(family.id.clone(), family);
        }

        Ok(record)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let raw: RecordJson = serde_json::from_str(text)?;
        Self::new(raw.persons, raw.families)
    }

    pub fn from_json_value(value: &serde_json::Value) -> Result<Self> {
        let raw = RecordJson::deserialize(value)?;
        Self::new(raw.persons, raw.families)
    }

    pub fn person(&self, id: &str) -> Option<&Person> {
        self.persons.get(id)
    }

    pub fn family(&self, id: &str) -> Option<&Family> {
        self.families.get(id)
    }

    pub fn persons(&self) -> impl Iterator<Item = &Person> {
        self.persons.values()
    }

    pub fn families(&self) -> impl Iterator<Item = &Family> {
        self.families.values()
    }

    /// Families in which `id` is husband or wife, in record order.
    pub fn spouse_families<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a Family> + use<'a> {
        self.memberships(&self.spouse_of, id)
    }

    /// Families in which `id` is a child, in record order.
    pub fn parent_families<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a Family> + use<'a> {
        self.memberships(&self.child_of, id)
    }

    fn memberships<'a>(
        &'a self,
        index: &'a FxHashMap<String, Vec<String>>,
        id: &str,
    ) -> impl Iterator<Item = &'a Family> + use<'a> {
        index
            .get(id)
            .into_iter()
            .flatten()
            .filter_map(|family_id| self.families.get(family_id))
    }
}
