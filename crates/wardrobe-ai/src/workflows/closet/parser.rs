use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug)]
pub(crate) struct ClosetRecord {
    pub(crate) id: String,
    pub(crate) category: String,
    pub(crate) color: Option<String>,
    pub(crate) material: Option<String>,
    pub(crate) season: Option<String>,
    pub(crate) tags: Vec<String>,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<ClosetRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<ClosetRow>() {
        let row = record?;
        let tags = row.tag_list();

        records.push(ClosetRecord {
            id: row.item_id.trim().to_string(),
            category: row.category,
            color: row.color,
            material: row.material,
            season: row.season,
            tags,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct ClosetRow {
    #[serde(rename = "Item ID")]
    item_id: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Color", default, deserialize_with = "empty_string_as_none")]
    color: Option<String>,
    #[serde(rename = "Material", default, deserialize_with = "empty_string_as_none")]
    material: Option<String>,
    #[serde(rename = "Season", default, deserialize_with = "empty_string_as_none")]
    season: Option<String>,
    #[serde(rename = "Tags", default, deserialize_with = "empty_string_as_none")]
    tags: Option<String>,
}

impl ClosetRow {
    fn tag_list(&self) -> Vec<String> {
        self.tags
            .as_deref()
            .map(|raw| {
                raw.split(';')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .map(str::to_lowercase)
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
