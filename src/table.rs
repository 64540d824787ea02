//! Feature tables exported from the message store.
//!
//! Tables are kept schema-agnostic: the header and records are carried as
//! read, and only the named columns are inspected or rewritten.

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use hashbrown::HashSet;

use regender::{
    normalizer::{PronounReplacer, PronounSwapper, TextNormalizer},
    token::Tokens,
    Gender,
};

use crate::error::{Error, TableError};

/// How the feature column is rewritten.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Remap {
    /// Tokens of `from` become their `to` counterpart.
    Replace { from: Gender, to: Gender },
    /// Tokens of either gender become the other one.
    Swap { a: Gender, b: Gender },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeatureTable {
    headers: StringRecord,
    rows: Vec<StringRecord>,
}

impl FeatureTable {
    pub fn new(headers: StringRecord, rows: Vec<StringRecord>) -> Self {
        Self { headers, rows }
    }

    pub fn from_csv(text: &str) -> Result<Self, Error> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(text.as_bytes());

        let headers = reader.headers()?.clone();
        let rows = reader.records().collect::<Result<Vec<_>, _>>()?;

        Ok(Self { headers, rows })
    }

    pub fn to_csv(&self) -> Result<Vec<u8>, Error> {
        let mut writer = WriterBuilder::new().from_writer(Vec::new());

        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }

        writer
            .into_inner()
            .map_err(|error| TableError::Csv(error.to_string()).into())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }

    pub fn column(&self, name: &str) -> Result<usize, TableError> {
        self.headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| TableError::MissingColumn(name.to_string()))
    }

    /// Values of `column`, in row order.
    pub fn values(&self, column: &str) -> Result<Vec<&str>, TableError> {
        let index = self.column(column)?;
        Ok(self
            .rows
            .iter()
            .map(|row| row.get(index).unwrap_or_default())
            .collect())
    }

    /// Ids in `group_column` of the rows whose `feature_column` equals
    /// `value`, unique and in first-seen order.
    pub fn group_ids_with(
        &self,
        group_column: &str,
        feature_column: &str,
        value: &str,
    ) -> Result<BaseTable, TableError> {
        let group = self.column(group_column)?;
        let feature = self.column(feature_column)?;

        let mut base = BaseTable::default();
        self.rows
            .iter()
            .filter(|row| row.get(feature) == Some(value))
            .filter_map(|row| row.get(group))
            .for_each(|id| base.insert(id));

        Ok(base)
    }

    /// Keeps the rows whose `group_column` id is in `base`.
    pub fn select_groups(&mut self, group_column: &str, base: &BaseTable) -> Result<(), TableError> {
        let group = self.column(group_column)?;
        self.rows
            .retain(|row| row.get(group).is_some_and(|id| base.contains(id)));
        Ok(())
    }

    /// Rewrites every cell of `column` and returns how many changed. Row
    /// count and order are untouched.
    pub fn remap(&mut self, column: &str, remap: Remap) -> Result<usize, TableError> {
        let index = self.column(column)?;

        let mut tokens = self
            .rows
            .iter()
            .map(|row| row.get(index).unwrap_or_default().into())
            .collect::<Tokens>();

        let rewritten = match remap {
            Remap::Replace { from, to } => {
                let mut normalizer = PronounReplacer::new(from, to);
                normalizer.normalize(&mut tokens);
                normalizer.rewritten()
            }
            Remap::Swap { a, b } => {
                let mut normalizer = PronounSwapper::new(a, b);
                normalizer.normalize(&mut tokens);
                normalizer.rewritten()
            }
        };

        for (row, token) in self.rows.iter_mut().zip(tokens) {
            let rebuilt = row
                .iter()
                .enumerate()
                .map(|(position, field)| if position == index { token.as_str() } else { field })
                .collect::<StringRecord>();
            *row = rebuilt;
        }

        Ok(rewritten)
    }
}

/// Ids of the messages under study.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BaseTable {
    ids: Vec<String>,
    seen: HashSet<String>,
}

impl BaseTable {
    pub fn insert(&mut self, id: &str) {
        if self.seen.insert(id.to_string()) {
            self.ids.push(id.to_string());
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// One-column `sid` table.
    pub fn to_csv(&self) -> Result<Vec<u8>, Error> {
        let mut writer = WriterBuilder::new().from_writer(Vec::new());

        writer.write_record(["sid"])?;
        for id in &self.ids {
            writer.write_record([id])?;
        }

        writer
            .into_inner()
            .map_err(|error| TableError::Csv(error.to_string()).into())
    }
}

impl FromIterator<String> for BaseTable {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut base = BaseTable::default();
        iter.into_iter().for_each(|id| base.insert(&id));
        base
    }
}
