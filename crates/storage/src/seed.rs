//! First-use sample catalog.
//!
//! An empty slot is seeded once with these records so the dashboard is not
//! blank on first launch. Identifiers are freshly generated; timestamps are
//! synthetic instants in the recent past, spread deterministically so
//! reseeding in tests stays reproducible.

use chrono::{DateTime, Duration, Utc};

use shelfstack_catalog::{Product, ProductId};

struct SeedRow {
    name: &'static str,
    description: &'static str,
    price: f64,
    category: &'static str,
    stock: u32,
    image_url: &'static str,
}

const SEED_ROWS: [SeedRow; 8] = [
    SeedRow {
        name: "iPhone 15 Pro",
        description: "Latest iPhone with A17 Pro chip, titanium design, and advanced camera system",
        price: 999.99,
        category: "Electronics",
        stock: 25,
        image_url: "https://images.unsplash.com/photo-1592750475338-74b7b21085ab?w=400",
    },
    SeedRow {
        name: "MacBook Air M2",
        description: "Lightweight laptop with M2 chip, 13.6-inch display, and all-day battery life",
        price: 1199.99,
        category: "Electronics",
        stock: 15,
        image_url: "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?w=400",
    },
    SeedRow {
        name: "Nike Air Max 270",
        description: "Comfortable running shoes with Max Air cushioning and breathable mesh upper",
        price: 149.99,
        category: "Sports",
        stock: 50,
        image_url: "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=400",
    },
    SeedRow {
        name: "Levi's 501 Original Jeans",
        description: "Classic straight-leg jeans made from premium denim with authentic styling",
        price: 89.99,
        category: "Clothing",
        stock: 0,
        image_url: "https://images.unsplash.com/photo-1542272604-787c3835535d?w=400",
    },
    SeedRow {
        name: "The Great Gatsby",
        description: "Classic American novel by F. Scott Fitzgerald, first published in 1925",
        price: 12.99,
        category: "Books",
        stock: 100,
        image_url: "https://images.unsplash.com/photo-1544947950-fa07a98d237f?w=400",
    },
    SeedRow {
        name: "Coffee Table",
        description: "Modern wooden coffee table perfect for living room, made from sustainable oak",
        price: 299.99,
        category: "Home & Garden",
        stock: 8,
        image_url: "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?w=400",
    },
    SeedRow {
        name: "LEGO Creator Set",
        description: "Building blocks set with 500+ pieces for creative construction and hours of fun",
        price: 79.99,
        category: "Toys",
        stock: 30,
        image_url: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=400",
    },
    SeedRow {
        name: "Skincare Routine Kit",
        description: "Complete skincare set including cleanser, toner, serum, and moisturizer",
        price: 129.99,
        category: "Beauty",
        stock: 0,
        image_url: "https://images.unsplash.com/photo-1556228578-dd7e24b2a564?w=400",
    },
];

/// Build the 8-record sample catalog with fresh identifiers.
///
/// Creation instants land a few weeks back, last-modified instants within
/// the past day, so the records read as organically accumulated.
pub fn sample_catalog(now: DateTime<Utc>) -> Vec<Product> {
    SEED_ROWS
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let offset = index as i64;
            Product {
                id: ProductId::generate(),
                name: row.name.to_string(),
                description: row.description.to_string(),
                price: row.price,
                category: row.category.to_string(),
                stock: row.stock,
                image_url: Some(row.image_url.to_string()),
                in_stock: row.stock > 0,
                created_at: now - Duration::days((8 - offset) * 3),
                updated_at: now - Duration::hours(12 + offset),
            }
        })
        .collect()
}
