//! Fixed-size, chained hash table mapping reserved spellings to token kinds.

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::tokens::{TokenKind, RESERVED_WORDS};

pub const BUCKET_COUNT: usize = 101;

#[derive(Debug, Clone)]
struct Entry {
    key: String,
    kind: TokenKind,
}

#[derive(Debug, Clone)]
pub struct KeywordTable {
    buckets: Vec<Vec<Entry>>,
    len: usize,
}

/// Polynomial rolling hash over the bytes of `spelling`, reduced to a bucket index.
pub fn hash(spelling: &str) -> usize {
    let mut hashval: u32 = 0;
    for byte in spelling.bytes() {
        hashval = u32::from(byte).wrapping_add(hashval.wrapping_mul(31));
    }

    hashval as usize % BUCKET_COUNT
}

impl KeywordTable {
    pub fn new() -> Self {
        KeywordTable {
            buckets: (0..BUCKET_COUNT).map(|_| Vec::new()).collect(),
            len: 0,
        }
    }

    /// Builds a table holding every entry of [`RESERVED_WORDS`].
    pub fn with_reserved_words() -> Result<Self, Error> {
        let mut table = KeywordTable::new();
        for (spelling, kind) in RESERVED_WORDS {
            table.insert(spelling, kind)?;
        }

        Ok(table)
    }

    pub fn lookup(&self, spelling: &str) -> Option<TokenKind> {
        self.buckets[hash(spelling)]
            .iter()
            .find(|entry| entry.key == spelling)
            .map(|entry| entry.kind)
    }

    /// Stores `kind` under `spelling`, replacing the kind of an existing entry.
    /// Returns the kind now held by the entry.
    pub fn insert(&mut self, spelling: &str, kind: TokenKind) -> Result<TokenKind, Error> {
        let bucket = &mut self.buckets[hash(spelling)];

        match bucket.iter().position(|entry| entry.key == spelling) {
            Some(index) => bucket[index].kind = kind,
            None => {
                let mut key = String::new();
                key.try_reserve_exact(spelling.len())
                    .map_err(|_| allocation_failure("copying a keyword"))?;
                key.push_str(spelling);

                bucket
                    .try_reserve(1)
                    .map_err(|_| allocation_failure("growing a keyword bucket"))?;
                bucket.push(Entry { key, kind });
                self.len += 1;
            }
        }

        Ok(kind)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        KeywordTable::new()
    }
}

fn allocation_failure(context: &'static str) -> Error {
    Error::new(ErrorImpl::AllocationFailure { context }, Position::null())
}
