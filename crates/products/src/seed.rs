//! Built-in showcase catalog.

use std::collections::BTreeMap;

use showcase_core::{CatalogResult, ProductId};

use crate::category::Category;
use crate::product::{NewProduct, Price, Product, Rating};

fn specs(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The six seeded products, in catalog order.
pub fn seed_products() -> CatalogResult<Vec<Product>> {
    let products = vec![
        NewProduct {
            id: ProductId::new("1")?,
            name: "Wireless Bluetooth Headphones".to_string(),
            price: Price::from_cents(19999),
            category: Category::Electronics,
            brand: "AudioTech".to_string(),
            description: "Premium wireless headphones with noise cancellation and 30-hour battery life. Perfect for music lovers and professionals.".to_string(),
            image: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?auto=format&fit=crop&w=800&q=80".to_string(),
            features: strings(&[
                "Active Noise Cancellation",
                "30-hour battery life",
                "Quick charge (15 min = 3 hours)",
                "Premium sound quality",
                "Comfortable over-ear design",
            ]),
            specifications: specs(&[
                ("Battery Life", "30 hours"),
                ("Charging Time", "2 hours"),
                ("Weight", "250g"),
                ("Connectivity", "Bluetooth 5.0"),
                ("Frequency Response", "20Hz - 20kHz"),
            ]),
            in_stock: true,
            rating: Rating::from_tenths(48)?,
            reviews: 342,
        },
        NewProduct {
            id: ProductId::new("2")?,
            name: "Smartphone Camera Lens Kit".to_string(),
            price: Price::from_cents(8999),
            category: Category::Photography,
            brand: "LensMaster".to_string(),
            description: "Professional-grade smartphone camera lenses including wide-angle, macro, and telephoto lenses. Transform your mobile photography.".to_string(),
            image: "https://images.unsplash.com/photo-1606983340126-99ab4feaa64a?auto=format&fit=crop&w=800&q=80".to_string(),
            features: strings(&[
                "3-lens kit (wide, macro, telephoto)",
                "Universal smartphone compatibility",
                "Premium optical glass",
                "Portable carrying case",
                "Easy clip-on design",
            ]),
            specifications: specs(&[
                ("Lens Types", "Wide-angle, Macro, Telephoto"),
                ("Compatibility", "Universal smartphones"),
                ("Material", "Aluminum alloy + Optical glass"),
                ("Weight", "150g"),
                ("Warranty", "2 years"),
            ]),
            in_stock: true,
            rating: Rating::from_tenths(46)?,
            reviews: 128,
        },
        NewProduct {
            id: ProductId::new("3")?,
            name: "Ergonomic Office Chair".to_string(),
            price: Price::from_cents(44999),
            category: Category::Furniture,
            brand: "ComfortWork".to_string(),
            description: "Premium ergonomic office chair with lumbar support, adjustable height, and breathable mesh back. Designed for 8+ hour workdays.".to_string(),
            image: "https://images.unsplash.com/photo-1586023492125-27b2c045efd7?auto=format&fit=crop&w=800&q=80".to_string(),
            features: strings(&[
                "Lumbar support system",
                "Breathable mesh back",
                "Adjustable seat height",
                "360° swivel base",
                "Premium fabric upholstery",
            ]),
            specifications: specs(&[
                ("Weight Capacity", "150kg"),
                ("Seat Height", "45-55cm adjustable"),
                ("Material", "Mesh + Fabric"),
                ("Assembly", "Required"),
                ("Warranty", "5 years"),
            ]),
            in_stock: true,
            rating: Rating::from_tenths(49)?,
            reviews: 89,
        },
        NewProduct {
            id: ProductId::new("4")?,
            name: "Smart Fitness Watch".to_string(),
            price: Price::from_cents(29999),
            category: Category::Electronics,
            brand: "FitTracker".to_string(),
            description: "Advanced fitness tracker with heart rate monitoring, GPS, sleep tracking, and 7-day battery life. Perfect for active lifestyles.".to_string(),
            image: "https://images.unsplash.com/photo-1544117519-31a4b719223d?auto=format&fit=crop&w=800&q=80".to_string(),
            features: strings(&[
                "Heart rate monitoring",
                "Built-in GPS",
                "Sleep tracking",
                "7-day battery life",
                "Waterproof design",
            ]),
            specifications: specs(&[
                ("Display", "1.4 AMOLED"),
                ("Battery", "7 days"),
                ("Water Rating", "5ATM"),
                ("Sensors", "Heart rate, GPS, Accelerometer"),
                ("Compatibility", "iOS & Android"),
            ]),
            in_stock: false,
            rating: Rating::from_tenths(47)?,
            reviews: 256,
        },
        NewProduct {
            id: ProductId::new("5")?,
            name: "Minimalist Desk Organizer".to_string(),
            price: Price::from_cents(7999),
            category: Category::Office,
            brand: "CleanSpace".to_string(),
            description: "Beautifully crafted wooden desk organizer with multiple compartments for pens, papers, and accessories. Sustainable bamboo construction.".to_string(),
            image: "https://images.unsplash.com/photo-1558618047-3c8c76ca7d13?auto=format&fit=crop&w=800&q=80".to_string(),
            features: strings(&[
                "Sustainable bamboo construction",
                "Multiple compartments",
                "Phone stand included",
                "Cable management",
                "Minimalist design",
            ]),
            specifications: specs(&[
                ("Material", "Bamboo wood"),
                ("Dimensions", "30 x 15 x 8 cm"),
                ("Weight", "400g"),
                ("Finish", "Natural oil"),
                ("Assembly", "No assembly required"),
            ]),
            in_stock: true,
            rating: Rating::from_tenths(45)?,
            reviews: 67,
        },
        NewProduct {
            id: ProductId::new("6")?,
            name: "Portable Coffee Maker".to_string(),
            price: Price::from_cents(12999),
            category: Category::Kitchen,
            brand: "BrewMaster".to_string(),
            description: "Compact espresso maker for perfect coffee anywhere. Battery-powered with professional-grade pressure system.".to_string(),
            image: "https://images.unsplash.com/photo-1559056199-641a0ac8b55e?auto=format&fit=crop&w=800&q=80".to_string(),
            features: strings(&[
                "Battery-powered operation",
                "Professional pressure system",
                "Compact & portable",
                "Easy cleanup",
                "Compatible with ground coffee",
            ]),
            specifications: specs(&[
                ("Battery Life", "20 cups per charge"),
                ("Pressure", "15 bar"),
                ("Weight", "800g"),
                ("Capacity", "Single shot"),
                ("Charging", "USB-C"),
            ]),
            in_stock: true,
            rating: Rating::from_tenths(44)?,
            reviews: 94,
        },
    ];

    products.into_iter().map(Product::new).collect()
}
