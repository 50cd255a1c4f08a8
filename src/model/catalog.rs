//! The restaurant menu.
//!
//! The catalog is hardcoded and trusted: every item is well-formed at build
//! time, so nothing here validates or fails at runtime.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A menu category, in the order the category filter shows them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Starters,
    Mains,
    Desserts,
    Drinks,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Starters,
        Category::Mains,
        Category::Desserts,
        Category::Drinks,
    ];

    /// Stable identifier used by the category filter.
    pub fn id(&self) -> &'static str {
        match self {
            Category::Starters => "starters",
            Category::Mains => "mains",
            Category::Desserts => "desserts",
            Category::Drinks => "drinks",
        }
    }

    /// Label shown on the filter button.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Starters => "Starters",
            Category::Mains => "Main Dishes",
            Category::Desserts => "Desserts",
            Category::Drinks => "Drinks",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Starters => "🥢",
            Category::Mains => "🍜",
            Category::Desserts => "🍮",
            Category::Drinks => "🧋",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// A dish as listed on the menu.
///
/// `image` is an asset reference resolved by the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    pub description: String,
}

impl CatalogItem {
    /// Creates a new CatalogItem instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (e.g. `starter-1`)
    /// * `name` - Dish name
    /// * `price` - Unit price in dollars
    /// * `image` - Asset reference
    /// * `description` - One-line blurb shown on the menu card
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        image: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
            description: description.into(),
        }
    }
}

/// The full menu, grouped by category.
#[derive(Debug, Clone)]
pub struct Menu {
    sections: Vec<(Category, Vec<CatalogItem>)>,
}

impl Menu {
    /// The house menu.
    pub fn standard() -> Self {
        let starters = vec![
            CatalogItem::new(
                "starter-1",
                "Spring Rolls",
                dec!(8.99),
                "spring-rolls.jpg",
                "Crispy golden rolls with fresh vegetables and sweet & sour sauce",
            ),
            CatalogItem::new(
                "starter-2",
                "Chicken Satay",
                dec!(12.99),
                "chicken-satay.jpg",
                "Grilled chicken skewers with aromatic peanut sauce",
            ),
            CatalogItem::new(
                "starter-3",
                "Summer Rolls",
                dec!(9.99),
                "summer-rolls.jpg",
                "Fresh rolls with shrimp, vegetables, and hoisin dipping sauce",
            ),
        ];
        let mains = vec![
            CatalogItem::new(
                "main-1",
                "Beef Noodle Soup",
                dec!(16.99),
                "beef-noodle-soup.jpg",
                "Traditional soup with tender beef, fresh noodles, and herbs",
            ),
            CatalogItem::new(
                "main-2",
                "Vegetable Stir-Fry",
                dec!(14.99),
                "vegetable-stir-fry.jpg",
                "Colorful vegetables and tofu in savory garlic sauce",
            ),
            CatalogItem::new(
                "main-3",
                "Teriyaki Salmon",
                dec!(22.99),
                "teriyaki-salmon.jpg",
                "Grilled salmon with teriyaki glaze, rice, and vegetables",
            ),
        ];
        let desserts = vec![
            CatalogItem::new(
                "dessert-1",
                "Mango Sticky Rice",
                dec!(7.99),
                "mango-sticky-rice.jpg",
                "Traditional Thai dessert with sweet coconut rice",
            ),
            CatalogItem::new(
                "dessert-2",
                "Green Tea Ice Cream",
                dec!(6.99),
                "green-tea-ice-cream.jpg",
                "Creamy ice cream with authentic matcha flavor",
            ),
            CatalogItem::new(
                "dessert-3",
                "Red Bean Pancakes",
                dec!(8.99),
                "red-bean-pancakes.jpg",
                "Soft pancakes filled with sweet red bean paste",
            ),
        ];
        // Drinks have no photography yet and borrow other dishes' images.
        let drinks = vec![
            CatalogItem::new(
                "drink-1",
                "Thai Iced Tea",
                dec!(4.99),
                "spring-rolls.jpg",
                "Traditional Thai tea with condensed milk",
            ),
            CatalogItem::new(
                "drink-2",
                "Fresh Coconut Water",
                dec!(5.99),
                "summer-rolls.jpg",
                "Pure coconut water served in coconut shell",
            ),
            CatalogItem::new(
                "drink-3",
                "Green Tea",
                dec!(3.99),
                "green-tea-ice-cream.jpg",
                "Premium jasmine green tea",
            ),
        ];

        Self {
            sections: vec![
                (Category::Starters, starters),
                (Category::Mains, mains),
                (Category::Desserts, desserts),
                (Category::Drinks, drinks),
            ],
        }
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.sections.iter().map(|(category, _)| *category)
    }

    /// Items listed under `category`, in menu order.
    pub fn items(&self, category: Category) -> &[CatalogItem] {
        self.sections
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, items)| items.as_slice())
            .unwrap_or(&[])
    }

    /// Looks up an item by id across all categories.
    pub fn find(&self, id: &str) -> Option<&CatalogItem> {
        self.sections
            .iter()
            .flat_map(|(_, items)| items.iter())
            .find(|item| item.id == id)
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::standard()
    }
}
