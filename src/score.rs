use csv::{ReaderBuilder, WriterBuilder};
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, TableError};

/// One row of a lexicon score table. Extra columns are ignored.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ScoreRow {
    pub group_id: String,
    pub group_norm: f64,
}

pub fn scores_from_csv(text: &str) -> Result<Vec<ScoreRow>, Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let rows = reader
        .deserialize::<ScoreRow>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ComparisonRow {
    pub id: String,
    pub original_score: f64,
    pub transformed_score: f64,
    pub score_difference: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Comparison {
    rows: Vec<ComparisonRow>,
}

/// Joins the two score tables on message id, in the original table's order.
/// Messages missing from either side are dropped. When the transformed table
/// repeats an id, its first row is used.
pub fn compare(original: &[ScoreRow], transformed: &[ScoreRow]) -> Comparison {
    let mut lookup = HashMap::with_capacity(transformed.len());
    for row in transformed {
        lookup.entry(row.group_id.as_str()).or_insert(row.group_norm);
    }

    let rows = original
        .iter()
        .filter_map(|row| {
            lookup.get(row.group_id.as_str()).map(|&transformed_score| ComparisonRow {
                id: row.group_id.clone(),
                original_score: row.group_norm,
                transformed_score,
                score_difference: row.group_norm - transformed_score,
            })
        })
        .collect();

    Comparison { rows }
}

impl Comparison {
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[ComparisonRow] {
        &self.rows
    }

    /// Mean of `original - transformed` over the joined messages.
    pub fn average(&self) -> Result<f64, TableError> {
        if self.rows.is_empty() {
            return Err(TableError::EmptyComparison);
        }

        let total: f64 = self.rows.iter().map(|row| row.score_difference).sum();
        Ok(total / self.rows.len() as f64)
    }

    pub fn to_csv(&self) -> Result<Vec<u8>, Error> {
        let mut writer = WriterBuilder::new().from_writer(Vec::new());

        // Header is written by the first `serialize`; write it explicitly so
        // an empty comparison still yields a valid table.
        if self.rows.is_empty() {
            writer.write_record(["id", "original_score", "transformed_score", "score_difference"])?;
        }
        for row in &self.rows {
            writer.serialize(row)?;
        }

        writer
            .into_inner()
            .map_err(|error| TableError::Csv(error.to_string()).into())
    }
}
