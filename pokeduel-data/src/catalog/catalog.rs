use std::slice;

use ahash::HashMap;
use serde_json::Value;
use unicase::UniCase;

use crate::{
    DataError,
    LookupError,
    SearchQuery,
    SpeciesData,
    validate::validate_id,
};

/// The highest catalog number a numeric search considers.
const MAX_SEARCH_NUMBER: i64 = 65535;

/// An immutable, validated collection of species.
///
/// A catalog can only be created by [`CatalogLoader`][`crate::CatalogLoader`]. Catalog order is
/// the order of the source records.
#[derive(Debug, Clone)]
pub struct Catalog {
    species: Vec<SpeciesData>,
    by_id: HashMap<u32, usize>,
}

impl Catalog {
    pub(crate) fn new(species: Vec<SpeciesData>, by_id: HashMap<u32, usize>) -> Self {
        Self { species, by_id }
    }

    /// The number of species in the catalog.
    pub fn len(&self) -> usize {
        self.species.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    /// Iterates over all species, in catalog order.
    pub fn iter(&self) -> slice::Iter<'_, SpeciesData> {
        self.species.iter()
    }

    /// All species, in catalog order.
    pub fn species(&self) -> &[SpeciesData] {
        &self.species
    }

    /// Finds a species by name.
    ///
    /// Names are compared case-insensitively, and the first match in catalog order wins.
    pub fn find_by_name(&self, name: &str) -> Result<&SpeciesData, LookupError> {
        if name.is_empty() {
            return Err(DataError::DataMissing("name is empty".to_owned()).into());
        }
        let name = UniCase::new(name);
        self.species
            .iter()
            .find(|species| UniCase::new(species.name()) == name)
            .ok_or_else(|| LookupError::NotFound(format!("species {name}")))
    }

    /// Finds a species by catalog number.
    pub fn find_by_id(&self, id: u32) -> Result<&SpeciesData, LookupError> {
        self.by_id
            .get(&id)
            .and_then(|index| self.species.get(*index))
            .ok_or_else(|| LookupError::NotFound(format!("species #{id}")))
    }

    /// Finds a species by a raw catalog number, which may be a string.
    pub fn find_by_number(&self, value: &Value) -> Result<&SpeciesData, LookupError> {
        let id = match validate_id(value) {
            Ok(id) => id,
            // Numbers that cannot be catalog numbers simply match nothing.
            Err(DataError::InvalidRange(_)) => {
                return Err(LookupError::NotFound(format!("species #{value}")));
            }
            Err(error) => return Err(error.into()),
        };
        self.find_by_id(id)
    }

    /// Searches the catalog.
    ///
    /// A number matches the species with that exact catalog number first, followed by every other
    /// species whose catalog number contains the number's digits. Text matches every species whose
    /// name contains it, case-insensitively. Results are in catalog order.
    pub fn search<Q>(&self, query: Q) -> Vec<&SpeciesData>
    where
        Q: Into<SearchQuery>,
    {
        match query.into().normalize() {
            SearchQuery::Text(text) if text.is_empty() => self.species.iter().collect(),
            SearchQuery::Text(text) => self.search_name(&text),
            SearchQuery::Number(number) => self.search_number(number),
        }
    }

    fn search_name(&self, text: &str) -> Vec<&SpeciesData> {
        let text = text.to_lowercase();
        self.species
            .iter()
            .filter(|species| species.name().to_lowercase().contains(&text))
            .collect()
    }

    fn search_number(&self, number: i64) -> Vec<&SpeciesData> {
        if number <= 0 || number > MAX_SEARCH_NUMBER {
            return Vec::new();
        }
        let digits = number.to_string();
        let exact = u32::try_from(number)
            .ok()
            .and_then(|id| self.find_by_id(id).ok());
        exact
            .into_iter()
            .chain(self.species.iter().filter(|species| {
                i64::from(species.id()) != number && species.id().to_string().contains(&digits)
            }))
            .collect()
    }
}

impl<'c> IntoIterator for &'c Catalog {
    type Item = &'c SpeciesData;
    type IntoIter = slice::Iter<'c, SpeciesData>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
