//! # Listing draft and validation
//!
//! [`ListingForm`] holds the transient [`ListingDraft`] a seller fills in,
//! the [`DropZone`] highlight state, and the rules from
//! [`ListingConfig`](crate::config::ListingConfig).
//!
//! Submission rules, first failure wins:
//!
//! 1. story shorter than `min_story_chars` → [`ListingError::StoryTooShort`]
//! 2. category or condition unset → [`ListingError::MissingRequiredField`]
//!
//! A successful submission resets the draft to [`ListingDraft::default`].
//! Nothing is persisted or sent anywhere.

use thiserror::Error;

use crate::config::ListingConfig;
use crate::models::{Category, Condition, PhotoRef};

/// Why a draft was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ListingError {
    #[error("Stories must be at least {min} characters. Help buyers connect with your item!")]
    StoryTooShort { min: usize, actual: usize },
    #[error("Please fill in all required fields to share your story.")]
    MissingRequiredField,
}

impl ListingError {
    /// Short heading for the error toast.
    pub fn title(&self) -> &'static str {
        match self {
            ListingError::StoryTooShort { .. } => "Story too short",
            ListingError::MissingRequiredField => "Missing information",
        }
    }
}

/// Fields of a new listing as typed by the seller.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListingDraft {
    pub title: String,
    pub story: String,
    pub category: Option<Category>,
    pub condition: Option<Condition>,
    /// Raw numeric input, may be empty.
    pub price: String,
    pub location: String,
    pub why_letting_go: String,
    pub description: String,
    pub photos: Vec<PhotoRef>,
}

impl ListingDraft {
    /// Story length in UTF-16 code units, the unit browser inputs count in.
    pub fn story_len(&self) -> usize {
        self.story.encode_utf16().count()
    }

    /// Check the draft against `rules` without modifying it.
    pub fn validate(&self, rules: &ListingConfig) -> Result<(), ListingError> {
        let actual = self.story_len();
        if actual < rules.min_story_chars {
            return Err(ListingError::StoryTooShort {
                min: rules.min_story_chars,
                actual,
            });
        }
        if self.category.is_none() || self.condition.is_none() {
            return Err(ListingError::MissingRequiredField);
        }
        Ok(())
    }
}

/// Highlight state of the photo drop target.
///
/// Purely presentational; a drop always leaves it inactive so one drag
/// session never bleeds into the next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DropZone {
    active: bool,
}

impl DropZone {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn drag_enter(&mut self) {
        self.active = true;
    }

    pub fn drag_over(&mut self) {
        self.active = true;
    }

    pub fn drag_leave(&mut self) {
        self.active = false;
    }

    pub fn drop(&mut self) {
        self.active = false;
    }
}

/// The sell-item form: draft, drop zone and rules.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListingForm {
    draft: ListingDraft,
    drop_zone: DropZone,
    rules: ListingConfig,
}

impl ListingForm {
    pub fn new(rules: ListingConfig) -> Self {
        Self {
            draft: ListingDraft::default(),
            drop_zone: DropZone::default(),
            rules,
        }
    }

    pub fn draft(&self) -> &ListingDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ListingDraft {
        &mut self.draft
    }

    pub fn drop_zone(&self) -> DropZone {
        self.drop_zone
    }

    pub fn drop_zone_mut(&mut self) -> &mut DropZone {
        &mut self.drop_zone
    }

    pub fn rules(&self) -> &ListingConfig {
        &self.rules
    }

    /// Whether the story counter should render as below the minimum.
    pub fn story_below_minimum(&self) -> bool {
        self.draft.story_len() < self.rules.min_story_chars
    }

    /// Replace the attached photos with `photos`, keeping at most
    /// `max_photos`. An empty payload leaves the draft untouched.
    /// Returns the number of photos now attached, or `None` when ignored.
    /// A zero `max_photos` ignores every payload.
    pub fn attach_photos(&mut self, mut photos: Vec<PhotoRef>) -> Option<usize> {
        if photos.is_empty() || self.rules.max_photos == 0 {
            return None;
        }
        if photos.len() > self.rules.max_photos {
            tracing::debug!(
                dropped = photos.len() - self.rules.max_photos,
                "Photo payload over limit"
            );
            photos.truncate(self.rules.max_photos);
        }
        self.draft.photos = photos;
        Some(self.draft.photos.len())
    }

    /// Handle a drop on the target: clear the highlight, then attach.
    pub fn drop_photos(&mut self, photos: Vec<PhotoRef>) -> Option<usize> {
        self.drop_zone.drop();
        self.attach_photos(photos)
    }

    /// Validate; on success reset the draft to empty.
    pub fn submit(&mut self) -> Result<(), ListingError> {
        self.draft.validate(&self.rules)?;
        tracing::info!(title = %self.draft.title, "Listing submitted");
        self.draft = ListingDraft::default();
        Ok(())
    }
}
