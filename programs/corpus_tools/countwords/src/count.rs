use crate::error::CountError;
use bstr::ByteSlice;
use fnv::FnvHashMap;
use std::io::Read;
use std::sync::Arc;

/// Occurrence count per distinct token, keyed by the token's raw bytes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: FnvHashMap<Arc<[u8]>, usize>,
    total: usize,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, token: impl AsRef<[u8]>) {
        let token = token.as_ref();
        if let Some(count) = self.counts.get_mut(token) {
            *count += 1;
        } else {
            self.counts.insert(Arc::from(token), 1);
        }
        self.total += 1;
    }

    pub fn get(&self, token: impl AsRef<[u8]>) -> Option<usize> {
        self.counts.get(token.as_ref()).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[u8], usize)> + '_ {
        self.counts.iter().map(|(word, count)| (&word[..], *count))
    }
}

impl<T: AsRef<[u8]>> Extend<T> for FrequencyTable {
    fn extend<I: IntoIterator<Item = T>>(&mut self, tokens: I) {
        tokens.into_iter().for_each(|token| self.add(token));
    }
}

impl<T: AsRef<[u8]>> FromIterator<T> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = T>>(tokens: I) -> Self {
        let mut table = Self::new();
        table.extend(tokens);
        table
    }
}

/// Bytes that are not valid UTF-8 are never whitespace and stay in their token.
pub fn count_words<R: Read>(mut reader: R) -> Result<FrequencyTable, CountError> {
    let mut bytes = Vec::with_capacity(1 << 16);
    reader.read_to_end(&mut bytes).map_err(CountError::Read)?;
    Ok(bytes.fields_with(char::is_whitespace).collect())
}
