use crate::count::FrequencyTable;
use bstr::ByteSlice;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WordCount<'a> {
    #[serde(serialize_with = "lossy_str")]
    pub word: &'a [u8],
    pub count: usize,
}

fn lossy_str<S: Serializer>(word: &&[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&word.to_str_lossy())
}

/// Equal counts are ordered by token bytes, ascending, in both directions.
pub fn rank(table: &FrequencyTable, reverse: bool) -> Vec<WordCount<'_>> {
    let mut words: Vec<_> = table
        .iter()
        .map(|(word, count)| WordCount { word, count })
        .collect();
    words.sort_unstable_by(|a, b| by_count(a, b, reverse).then_with(|| a.word.cmp(b.word)));
    words
}

fn by_count(a: &WordCount, b: &WordCount, reverse: bool) -> Ordering {
    match reverse {
        true => a.count.cmp(&b.count),
        false => b.count.cmp(&a.count),
    }
}
