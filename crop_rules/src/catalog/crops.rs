//! Built-in threshold table.

use super::{CropCategory, CropThreshold};

const fn crop(
    crop_name: &'static str,
    min_rainfall_mm: f64,
    max_temperature_c: f64,
    ideal_ph: f64,
    min_humidity_pct: f64,
    category: CropCategory,
) -> CropThreshold {
    CropThreshold {
        crop_name,
        min_rainfall_mm,
        max_temperature_c,
        ideal_ph,
        min_humidity_pct,
        category,
    }
}

/// Thresholds for every supported crop. The first row is the default crop.
pub static CROP_THRESHOLDS: &[CropThreshold] = &[
    // Cereals
    crop("Rice", 150.0, 35.0, 6.0, 70.0, CropCategory::Cereal),
    crop("Wheat", 50.0, 25.0, 6.5, 40.0, CropCategory::Cereal),
    crop("Maize", 60.0, 32.0, 6.2, 50.0, CropCategory::Cereal),
    crop("Bajra", 40.0, 35.0, 7.5, 30.0, CropCategory::Cereal),
    crop("Jowar", 45.0, 35.0, 7.0, 35.0, CropCategory::Cereal),
    crop("Ragi", 50.0, 32.0, 6.5, 50.0, CropCategory::Cereal),

    // Pulses
    crop("Gram", 40.0, 30.0, 7.0, 35.0, CropCategory::Pulse),
    crop("Tur", 60.0, 32.0, 6.5, 50.0, CropCategory::Pulse),
    crop("Moong", 50.0, 35.0, 7.0, 40.0, CropCategory::Pulse),
    crop("Urad", 50.0, 35.0, 7.0, 40.0, CropCategory::Pulse),
    crop("Masoor", 35.0, 25.0, 6.8, 35.0, CropCategory::Pulse),

    // Cash crops and oilseeds
    crop("Sugarcane", 200.0, 40.0, 7.0, 70.0, CropCategory::CashCrop),
    crop("Cotton", 60.0, 40.0, 6.5, 50.0, CropCategory::CashCrop),
    crop("Groundnut", 50.0, 35.0, 6.2, 40.0, CropCategory::Oilseed),
    crop("Mustard", 40.0, 25.0, 7.0, 35.0, CropCategory::Oilseed),
    crop("Soybean", 60.0, 32.0, 6.5, 50.0, CropCategory::Oilseed),
    crop("Sunflower", 50.0, 30.0, 6.5, 45.0, CropCategory::Oilseed),

    // Vegetables and spices
    crop("Tomato", 60.0, 30.0, 6.5, 60.0, CropCategory::Vegetable),
    crop("Potato", 50.0, 25.0, 5.8, 60.0, CropCategory::Vegetable),
    crop("Onion", 50.0, 32.0, 6.5, 50.0, CropCategory::Vegetable),
    crop("Cabbage", 50.0, 25.0, 6.5, 70.0, CropCategory::Vegetable),
    crop("Cauliflower", 50.0, 25.0, 6.5, 70.0, CropCategory::Vegetable),
    crop("Carrot", 40.0, 28.0, 6.5, 60.0, CropCategory::Vegetable),
    crop("Brinjal", 60.0, 35.0, 6.5, 60.0, CropCategory::Vegetable),
    crop("Okra", 60.0, 35.0, 6.5, 60.0, CropCategory::Vegetable),
    crop("Green Chili", 60.0, 32.0, 6.5, 60.0, CropCategory::Vegetable),
    crop("Ginger", 150.0, 32.0, 6.0, 80.0, CropCategory::Vegetable),
    crop("Turmeric", 150.0, 32.0, 6.0, 80.0, CropCategory::Spice),

    // Fruits
    crop("Mango", 100.0, 40.0, 6.5, 50.0, CropCategory::Fruit),
    crop("Banana", 150.0, 35.0, 6.5, 70.0, CropCategory::Fruit),
    crop("Papaya", 100.0, 35.0, 6.5, 60.0, CropCategory::Fruit),
    crop("Guava", 100.0, 35.0, 7.0, 50.0, CropCategory::Fruit),
    crop("Pomegranate", 50.0, 40.0, 7.0, 40.0, CropCategory::Fruit),
    crop("Citrus", 100.0, 35.0, 6.5, 60.0, CropCategory::Fruit),
    crop("Grapes", 50.0, 35.0, 6.5, 50.0, CropCategory::Fruit),

    // Plantation and commercial
    crop("Coffee", 150.0, 28.0, 5.5, 80.0, CropCategory::Commercial),
    crop("Tea", 150.0, 28.0, 5.0, 80.0, CropCategory::Commercial),
    crop("Rubber", 200.0, 32.0, 5.5, 80.0, CropCategory::Commercial),
    crop("Tobacco", 50.0, 35.0, 6.0, 50.0, CropCategory::Commercial),

    // Fodder
    crop("Berseem", 80.0, 28.0, 7.0, 60.0, CropCategory::Fodder),
    crop("Lucerne", 80.0, 30.0, 7.0, 50.0, CropCategory::Fodder),
];
