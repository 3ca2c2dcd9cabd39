//! Image identifiers and the image pool.

use std::collections::VecDeque;
use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

/// Position of the breed segment in `https://images.dog.ceo/breeds/<breed>/<file>`
/// once the URL is split on `/`.
pub const BREED_SEGMENT: usize = 4;

/// Opaque image URL as returned by the dog API. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ImageRecord(String);

impl ImageRecord {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Raw breed segment, e.g. `hound-afghan`.
    pub fn breed(&self) -> Option<&str> {
        self.0
            .split('/')
            .nth(BREED_SEGMENT)
            .filter(|segment| !segment.is_empty())
    }

    /// Human readable breed, sub-breed first: `hound-afghan` becomes `afghan hound`.
    pub fn breed_label(&self) -> Option<String> {
        self.breed()
            .map(|breed| breed.split('-').rev().collect::<Vec<_>>().join(" "))
    }

    pub fn contains_space(&self) -> bool {
        self.0.contains(' ')
    }
}

impl From<String> for ImageRecord {
    fn from(url: String) -> Self {
        Self(url)
    }
}

impl From<&str> for ImageRecord {
    fn from(url: &str) -> Self {
        Self(url.to_owned())
    }
}

impl Display for ImageRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

/// Fetched images awaiting use, oldest first.
///
/// Grows at the back when a batch arrives and shrinks from the front when a
/// question is consumed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImagePool {
    images: VecDeque<ImageRecord>,
}

impl ImagePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageRecord> {
        self.images.iter()
    }

    pub fn front(&self) -> Option<&ImageRecord> {
        self.images.front()
    }

    pub fn get(&self, index: usize) -> Option<&ImageRecord> {
        self.images.get(index)
    }

    pub fn append(&mut self, images: impl IntoIterator<Item = ImageRecord>) {
        self.images.extend(images);
    }

    /// Remove up to `n` images from the front.
    pub fn drop_front(&mut self, n: usize) {
        let n = n.min(self.images.len());
        self.images.drain(..n);
    }
}

impl FromIterator<ImageRecord> for ImagePool {
    fn from_iter<T: IntoIterator<Item = ImageRecord>>(iter: T) -> Self {
        Self {
            images: iter.into_iter().collect(),
        }
    }
}
