//! Breed deduplication of fetched batches.

use std::collections::HashSet;
use std::str::FromStr;

use crate::domain::image::ImageRecord;
use crate::domain::rules::whole_questions_len;
use crate::errors::domain::DomainError;

/// Which key two images must share to count as duplicates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DedupeMode {
    /// At most one photo per breed segment.
    #[default]
    Breed,
    /// At most one photo per literal URL; several photos of a breed may survive.
    Filename,
}

impl FromStr for DedupeMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "breed" => Ok(DedupeMode::Breed),
            "filename" => Ok(DedupeMode::Filename),
            other => Err(DomainError::validation(format!(
                "unknown dedupe mode '{other}' (expected 'breed' or 'filename')"
            ))),
        }
    }
}

/// Keep the first image per dedupe key, skip images whose URL holds a space,
/// then trim to a whole number of questions.
///
/// Images without a breed segment are skipped in either mode since they
/// cannot label a question.
pub fn dedupe<I>(images: I, mode: DedupeMode) -> Vec<ImageRecord>
where
    I: IntoIterator<Item = ImageRecord>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique: Vec<ImageRecord> = images
        .into_iter()
        .filter(|image| {
            if image.contains_space() {
                return false;
            }
            let Some(breed) = image.breed() else {
                return false;
            };
            let key = match mode {
                DedupeMode::Breed => breed,
                DedupeMode::Filename => image.as_str(),
            };
            seen.insert(key.to_owned())
        })
        .collect();

    unique.truncate(whole_questions_len(unique.len()));
    unique
}
