//! Closet CSV import: converts the simplified item rows a closet export
//! carries into the engine's garment shape.

mod mapping;
mod normalizer;
mod parser;

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use crate::workflows::outfits::domain::{Category, Garment, GarmentId, OwnerId};
use parser::ClosetRecord;

#[derive(Debug)]
pub enum ClosetImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for ClosetImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClosetImportError::Io(err) => write!(f, "failed to read closet export: {}", err),
            ClosetImportError::Csv(err) => write!(f, "invalid closet CSV data: {}", err),
        }
    }
}

impl std::error::Error for ClosetImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClosetImportError::Io(err) => Some(err),
            ClosetImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ClosetImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ClosetImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct ClosetCsvImporter;

impl ClosetCsvImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        owner: &OwnerId,
    ) -> Result<Vec<Garment>, ClosetImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, owner)
    }

    /// Imports every recognizable row; rows with an unknown category or a
    /// duplicate id are skipped, matching the noise real exports carry.
    pub fn from_reader<R: Read>(
        reader: R,
        owner: &OwnerId,
    ) -> Result<Vec<Garment>, ClosetImportError> {
        let mut garments = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for record in parser::parse_records(reader)? {
            let Some(category) = mapping::category_for_label(&record.category) else {
                continue;
            };
            if record.id.is_empty() || !seen.insert(record.id.clone()) {
                continue;
            }

            garments.push(build_garment(record, category, owner));
        }

        Ok(garments)
    }
}

fn build_garment(record: ClosetRecord, category: Category, owner: &OwnerId) -> Garment {
    Garment {
        id: GarmentId(record.id),
        owner_id: owner.clone(),
        category,
        primary_color: record
            .color
            .map(|color| color.to_lowercase())
            .unwrap_or_else(|| "unspecified".to_string()),
        material: record.material.map(|material| material.to_lowercase()),
        season: mapping::season_for_label(record.season.as_deref()),
        tags: record.tags.into_iter().collect(),
    }
}
