//! # Catalog source
//!
//! [`CatalogSource`] is the read-only listing service the browse and detail
//! views read from. [`StaticCatalog`] serves the fixed seed listings; a
//! backend-backed source can replace it without touching the views.
//!
//! Also provides the per-category browse summaries shown on the category
//! grid ([`category_summaries`]).

use store::{Category, Condition, Item, ItemId};

/// Read-only access to listings.
pub trait CatalogSource {
    fn list_items(&self) -> Vec<Item>;

    fn item(&self, id: ItemId) -> Option<Item> {
        self.list_items().into_iter().find(|item| item.id == id)
    }
}

/// The built-in seed listings.
#[derive(Clone, Debug)]
pub struct StaticCatalog {
    items: Vec<Item>,
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new(seed_items())
    }
}

impl StaticCatalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }
}

impl CatalogSource for StaticCatalog {
    fn list_items(&self) -> Vec<Item> {
        self.items.clone()
    }

    fn item(&self, id: ItemId) -> Option<Item> {
        self.items.iter().find(|item| item.id == id).cloned()
    }
}

/// A tile on the category grid.
#[derive(Clone, Debug, PartialEq)]
pub struct CategorySummary {
    pub category: Category,
    /// Number of listings advertised on the tile.
    pub count: u32,
    /// Tailwind text colour for the icon.
    pub color: &'static str,
}

/// Category tiles in display order.
pub fn category_summaries() -> Vec<CategorySummary> {
    Category::ALL
        .into_iter()
        .map(|category| {
            let (count, color) = match category {
                Category::BooksLiterature => (324, "text-emerald-600"),
                Category::VintageFashion => (189, "text-pink-600"),
                Category::Electronics => (156, "text-blue-600"),
                Category::HomeDecor => (267, "text-orange-600"),
                Category::Collectibles => (98, "text-purple-600"),
                Category::Handmade => (143, "text-red-600"),
            };
            CategorySummary {
                category,
                count,
                color,
            }
        })
        .collect()
}

const PLACEHOLDER: &str = "/placeholder.svg";

fn seed_items() -> Vec<Item> {
    vec![
        Item {
            id: 1,
            title: "Grandmother's Poetry Collection".into(),
            story: "These leather-bound volumes hold 40 years of my grandmother's original poetry. Each page whispers of Sunday afternoons spent in her garden...".into(),
            full_story: "These leather-bound volumes hold 40 years of my grandmother's original poetry. Each page whispers of Sunday afternoons spent in her garden, where she'd write verses about the changing seasons. She passed down her love of words through these books, reading them aloud during family gatherings. The margins are filled with her notes about life, love, and the beauty she saw in everyday moments. I'm moving across the country and hope these find someone who will treasure them as much as she did. They're not just books – they're a piece of a beautiful soul who believed poetry could heal the world.".into(),
            price: 85.0,
            category: Category::BooksLiterature,
            condition: Condition::Good,
            seller_name: "Emma Chen".into(),
            seller_rating: 4.9,
            seller_image: PLACEHOLDER.into(),
            location: "Portland, OR".into(),
            listed_date: "2 days ago".into(),
            image: PLACEHOLDER.into(),
            views: 127,
        },
        Item {
            id: 2,
            title: "Vintage Wedding Teacups Set".into(),
            story: "Six delicate porcelain teacups from my 1960s wedding. They hosted countless conversations, celebrations, and quiet morning moments...".into(),
            full_story: "Six delicate porcelain teacups from my 1960s wedding. They hosted countless conversations, celebrations, and quiet morning moments between my husband and me over 58 years of marriage. Each cup has served tea to grandchildren learning to hold grown-up cups, friends sharing secrets, and Sunday visits with family. The roses painted on each one have faded slightly, but their beauty remains. After my husband's passing, I'm downsizing but want these to continue creating moments of connection. They deserve a table where love is shared daily.".into(),
            price: 120.0,
            category: Category::HomeDecor,
            condition: Condition::Excellent,
            seller_name: "Margaret Foster".into(),
            seller_rating: 5.0,
            seller_image: PLACEHOLDER.into(),
            location: "Charleston, SC".into(),
            listed_date: "5 days ago".into(),
            image: PLACEHOLDER.into(),
            views: 89,
        },
        Item {
            id: 3,
            title: "Dad's Film Camera Collection".into(),
            story: "My father's prized Nikon FM from 1978. It captured my childhood, family vacations, and his artistic journey through black and white photography...".into(),
            full_story: "My father's prized Nikon FM from 1978. It captured my childhood, family vacations, and his artistic journey through black and white photography. He spent hours in his darkroom, teaching me about light, composition, and patience. This camera documented births, graduations, holidays, and ordinary Tuesday evenings that felt extraordinary through his lens. The leather is worn smooth from decades of adventures, and it still works perfectly. Dad would love knowing it will help someone else discover the magic of film photography and slow, intentional image-making.".into(),
            price: 350.0,
            category: Category::Electronics,
            condition: Condition::Good,
            seller_name: "David Park".into(),
            seller_rating: 4.8,
            seller_image: PLACEHOLDER.into(),
            location: "Austin, TX".into(),
            listed_date: "1 week ago".into(),
            image: PLACEHOLDER.into(),
            views: 203,
        },
        Item {
            id: 4,
            title: "Hand-Knitted Baby Blanket".into(),
            story: "Lovingly crafted during my pregnancy, this soft wool blanket kept my daughter warm through countless nights and adventures...".into(),
            full_story: "Lovingly crafted during my pregnancy, this soft wool blanket kept my daughter warm through countless nights and adventures. I knitted every stitch with hopes and dreams, choosing colors that would grow with her. It traveled to grandparents' houses, provided comfort during illness, and was dragged to every sleepover until she was ten. Now she's heading to college, and this blanket needs a new little one to love. The wool is still incredibly soft, and it carries so much love in every fiber. Perfect for a family expecting their own miracle.".into(),
            price: 45.0,
            category: Category::Handmade,
            condition: Condition::LikeNew,
            seller_name: "Sarah Mitchell".into(),
            seller_rating: 4.9,
            seller_image: PLACEHOLDER.into(),
            location: "Denver, CO".into(),
            listed_date: "3 days ago".into(),
            image: PLACEHOLDER.into(),
            views: 156,
        },
    ]
}
