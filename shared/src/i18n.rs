//! Multilingual crop names
//!
//! Display names for every catalog crop in English, Hindi and Bengali.
//! Lookups for unknown crops fall back to the canonical key itself — a
//! missing translation must never break a response.

use serde::{Deserialize, Serialize};

use crate::types::Language;

/// All display names for one crop, as embedded in API responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocalizedCropName {
    pub english: String,
    pub hindi: String,
    pub bengali: String,
}

/// Display name of a crop in the requested language, falling back to the
/// canonical key when no translation exists.
pub fn crop_display_name(crop: &str, language: Language) -> &str {
    let translated = match language {
        Language::English => english_name(crop),
        Language::Hindi => hindi_name(crop),
        Language::Bengali => bengali_name(crop),
    };
    translated.unwrap_or(crop)
}

/// All three display names for a crop.
pub fn localized_names(crop: &str) -> LocalizedCropName {
    LocalizedCropName {
        english: crop_display_name(crop, Language::English).to_string(),
        hindi: crop_display_name(crop, Language::Hindi).to_string(),
        bengali: crop_display_name(crop, Language::Bengali).to_string(),
    }
}

fn english_name(crop: &str) -> Option<&'static str> {
    let name = match crop {
        "rice" => "Rice",
        "wheat" => "Wheat",
        "maize" => "Maize",
        "cotton" => "Cotton",
        "sugarcane" => "Sugarcane",
        "jute" => "Jute",
        "coffee" => "Coffee",
        "coconut" => "Coconut",
        "papaya" => "Papaya",
        "orange" => "Orange",
        "apple" => "Apple",
        "muskmelon" => "Muskmelon",
        "watermelon" => "Watermelon",
        "grapes" => "Grapes",
        "mango" => "Mango",
        "banana" => "Banana",
        "pomegranate" => "Pomegranate",
        "lentil" => "Lentil",
        "blackgram" => "Black Gram",
        "mungbean" => "Mung Bean",
        "mothbeans" => "Moth Beans",
        "pigeonpeas" => "Pigeon Peas",
        "kidneybeans" => "Kidney Beans",
        "chickpea" => "Chickpea",
        _ => return None,
    };
    Some(name)
}

fn hindi_name(crop: &str) -> Option<&'static str> {
    let name = match crop {
        "rice" => "चावल",
        "wheat" => "गेहूं",
        "maize" => "मक्का",
        "cotton" => "कपास",
        "sugarcane" => "गन्ना",
        "jute" => "जूट",
        "coffee" => "कॉफी",
        "coconut" => "नारियल",
        "papaya" => "पपीता",
        "orange" => "संतरा",
        "apple" => "सेब",
        "muskmelon" => "खरबूजा",
        "watermelon" => "तरबूज",
        "grapes" => "अंगूर",
        "mango" => "आम",
        "banana" => "केला",
        "pomegranate" => "अनार",
        "lentil" => "मसूर",
        "blackgram" => "उड़द",
        "mungbean" => "मूंग",
        "mothbeans" => "मोठ",
        "pigeonpeas" => "अरहर",
        "kidneybeans" => "राजमा",
        "chickpea" => "चना",
        _ => return None,
    };
    Some(name)
}

fn bengali_name(crop: &str) -> Option<&'static str> {
    let name = match crop {
        "rice" => "ধান",
        "wheat" => "গম",
        "maize" => "ভুট্টা",
        "cotton" => "তুলা",
        "sugarcane" => "আখ",
        "jute" => "পাট",
        "coffee" => "কফি",
        "coconut" => "নারকেল",
        "papaya" => "পেঁপে",
        "orange" => "কমলা",
        "apple" => "আপেল",
        "muskmelon" => "খরমুজ",
        "watermelon" => "তরমুজ",
        "grapes" => "আঙুর",
        "mango" => "আম",
        "banana" => "কলা",
        "pomegranate" => "ডালিম",
        "lentil" => "মসুর",
        "blackgram" => "কালো ছোলা",
        "mungbean" => "মুগ",
        "mothbeans" => "মথ",
        "pigeonpeas" => "অড়হর",
        "kidneybeans" => "রাজমা",
        "chickpea" => "ছোলা",
        _ => return None,
    };
    Some(name)
}
