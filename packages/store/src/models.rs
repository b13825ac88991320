//! # Domain models for listings and users
//!
//! Plain data carried between the stores, the catalog source and the UI.
//! Every type here is `Serialize + Deserialize` so the persisted ones
//! ([`User`], favorite ids) can be written to durable client storage as JSON.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Item`] | A read-only listing with its narrative, price and seller details. |
//! | [`Category`] | The fixed set of browse categories. |
//! | [`Condition`] | The fixed set of wear grades a seller can pick. |
//! | [`User`] | The mocked signed-in user record. |
//! | [`PhotoRef`] | A reference to an attached photo; contents are never read. |

use serde::{Deserialize, Serialize};

/// Stable identifier of a catalog item.
pub type ItemId = u32;

/// Browse category of an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Books & Literature")]
    BooksLiterature,
    #[serde(rename = "Vintage Fashion")]
    VintageFashion,
    #[serde(rename = "Electronics")]
    Electronics,
    #[serde(rename = "Home & Decor")]
    HomeDecor,
    #[serde(rename = "Collectibles")]
    Collectibles,
    #[serde(rename = "Handmade")]
    Handmade,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 6] = [
        Category::BooksLiterature,
        Category::VintageFashion,
        Category::Electronics,
        Category::HomeDecor,
        Category::Collectibles,
        Category::Handmade,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::BooksLiterature => "Books & Literature",
            Category::VintageFashion => "Vintage Fashion",
            Category::Electronics => "Electronics",
            Category::HomeDecor => "Home & Decor",
            Category::Collectibles => "Collectibles",
            Category::Handmade => "Handmade",
        }
    }

    /// Inverse of [`Category::label`]. Used by `<select>` change handlers.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

/// Wear grade of an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    #[serde(rename = "Like New")]
    LikeNew,
    #[serde(rename = "Excellent")]
    Excellent,
    #[serde(rename = "Good")]
    Good,
    #[serde(rename = "Fair")]
    Fair,
    #[serde(rename = "Well-Loved")]
    WellLoved,
}

impl Condition {
    pub const ALL: [Condition; 5] = [
        Condition::LikeNew,
        Condition::Excellent,
        Condition::Good,
        Condition::Fair,
        Condition::WellLoved,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Condition::LikeNew => "Like New",
            Condition::Excellent => "Excellent",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
            Condition::WellLoved => "Well-Loved",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

/// A listing in the catalog. Immutable once defined.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    /// Short excerpt shown on the browse card.
    pub story: String,
    /// Full narrative shown in the detail view.
    pub full_story: String,
    pub price: f64,
    pub category: Category,
    pub condition: Condition,
    pub seller_name: String,
    /// 0.0 to 5.0
    pub seller_rating: f32,
    pub seller_image: String,
    pub location: String,
    /// Display string, e.g. "2 days ago".
    pub listed_date: String,
    pub image: String,
    pub views: u32,
}

impl Item {
    /// Price with cents only when needed: `$85` or `$12.50`.
    pub fn display_price(&self) -> String {
        if self.price.fract() == 0.0 {
            format!("${:.0}", self.price)
        } else {
            format!("${:.2}", self.price)
        }
    }

    /// First letter of the seller's name, for avatar fallbacks.
    pub fn seller_initial(&self) -> String {
        self.seller_name.chars().next().map(String::from).unwrap_or_default()
    }
}

/// The signed-in user. Persisted as a camelCase JSON object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub join_date: String,
    pub trust_score: f32,
    pub items_sold: u32,
    pub stories_shared: u32,
}

impl User {
    /// Uppercased first letter of the name, for avatar fallbacks.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// A photo handed over by the file picker or a drop event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRef {
    pub name: String,
    /// Size in bytes as reported by the attachment source.
    pub size: u64,
}

impl PhotoRef {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.label()), Some(category));
        }
        assert_eq!(Category::from_label(""), None);
        assert_eq!(Category::from_label("Toys"), None);
    }

    #[test]
    fn test_condition_serializes_as_label() {
        let json = serde_json::to_string(&Condition::WellLoved).unwrap();
        assert_eq!(json, "\"Well-Loved\"");
    }

    #[test]
    fn test_user_json_uses_camel_case_keys() {
        let user = User {
            id: 1,
            name: "emma".to_string(),
            email: "emma@example.com".to_string(),
            avatar: "/placeholder.svg".to_string(),
            join_date: "January 2024".to_string(),
            trust_score: 4.8,
            items_sold: 12,
            stories_shared: 18,
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["joinDate"], "January 2024");
        assert_eq!(value["itemsSold"], 12);
        assert_eq!(value["storiesShared"], 18);
        assert_eq!(user.initial(), "E");
    }
}
