use serde::{Deserialize, Deserializer};
use std::io::Read;

/// One raw CSV row; validation happens in the importer so errors can name the row.
#[derive(Debug, Deserialize)]
pub(crate) struct DocketRow {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) agency: String,
    pub(crate) jurisdiction: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) status: Option<String>,
    pub(crate) submitted_date: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) deadline_date: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) response_date: Option<String>,
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<DocketRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader.deserialize::<DocketRow>().collect()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
