use pokeduel_data::{
    Catalog,
    CatalogLoader,
};
use serde_json::{
    Value,
    json,
};

/// Multipliers in catalog key order: bug, dark, dragon, electric, fairy, fight, fire, flying,
/// ghost, grass, ground, ice, normal, poison, psychic, rock, steel, water.
fn special_strength(multipliers: [f64; 18]) -> Value {
    const KEYS: [&str; 18] = [
        "against_bug",
        "against_dark",
        "against_dragon",
        "against_electric",
        "against_fairy",
        "against_fight",
        "against_fire",
        "against_flying",
        "against_ghost",
        "against_grass",
        "against_ground",
        "against_ice",
        "against_normal",
        "against_poison",
        "against_psychic",
        "against_rock",
        "against_steel",
        "against_water",
    ];
    Value::Object(
        KEYS.iter()
            .zip(multipliers)
            .map(|(key, multiplier)| (key.to_string(), json!(multiplier)))
            .collect(),
    )
}

pub fn bulbasaur_record() -> Value {
    json!({
        "pokedex_number": 1,
        "name": "Bulbasaur",
        "abilities": "['Overgrow', 'Chlorophyll']",
        "stats": {
            "hp": 45,
            "attack": 49,
            "defense": 49,
            "speed": 45,
            "type1": "grass",
            "type2": "poison",
            "classfication": "Seed Pokémon",
            "experience_growth": 1059860
        },
        "special_strength": special_strength([
            1.0, 1.0, 1.0, 0.5, 0.5, 0.5, 2.0, 2.0, 1.0, 0.25, 1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 1.0,
            0.5,
        ]),
        "other": {
            "percentage_male": 88.1,
            "height_m": 0.7,
            "weight_kg": 6.9,
            "generation": 1
        }
    })
}

pub fn charmander_record() -> Value {
    json!({
        "pokedex_number": 4,
        "name": "Charmander",
        "abilities": "['Blaze', 'Solar Power']",
        "stats": {
            "hp": 39,
            "attack": 52,
            "defense": 43,
            "speed": 65,
            "type1": "fire",
            "type2": null,
            "classfication": "Lizard Pokémon",
            "experience_growth": 1059860
        },
        "special_strength": special_strength([
            0.5, 1.0, 1.0, 1.0, 0.5, 1.0, 0.5, 1.0, 1.0, 0.5, 2.0, 0.5, 1.0, 1.0, 1.0, 2.0, 0.5,
            2.0,
        ]),
        "other": {
            "percentage_male": 88.1,
            "height_m": 0.6,
            "weight_kg": 8.5,
            "generation": 1
        }
    })
}

pub fn squirtle_record() -> Value {
    json!({
        "pokedex_number": 7,
        "name": "Squirtle",
        "abilities": "['Torrent', 'Rain Dish']",
        "stats": {
            "hp": 44,
            "attack": 48,
            "defense": 65,
            "speed": 43,
            "type1": "water",
            "type2": "",
            "classfication": "Tiny Turtle Pokémon",
            "experience_growth": 1059860
        },
        "special_strength": special_strength([
            1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 0.5, 1.0, 1.0, 2.0, 1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 0.5,
            0.5,
        ]),
        "other": {
            "percentage_male": 88.1,
            "height_m": 0.5,
            "weight_kg": 9.0,
            "generation": 1
        }
    })
}

pub fn clefairy_record() -> Value {
    json!({
        "pokedex_number": 35,
        "name": "Clefairy",
        "abilities": "['Cute Charm', 'Magic Guard', 'Friend Guard']",
        "stats": {
            "hp": 70,
            "attack": 45,
            "defense": 48,
            "speed": 35,
            "type1": "fairy",
            "type2": null,
            "classfication": "Fairy Pokémon",
            "experience_growth": 800000
        },
        "special_strength": special_strength([
            0.5, 0.5, 0.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 2.0,
            1.0,
        ]),
        "other": {
            "percentage_male": 24.6,
            "height_m": 0.6,
            "weight_kg": 7.5,
            "generation": 1
        }
    })
}

pub fn magnemite_record() -> Value {
    json!({
        "pokedex_number": 81,
        "name": "Magnemite",
        "abilities": "['Magnet Pull', 'Sturdy', 'Analytic']",
        "stats": {
            "hp": 25,
            "attack": 35,
            "defense": 70,
            "speed": 45,
            "type1": "electric",
            "type2": "steel",
            "classfication": "Magnet Pokémon",
            "experience_growth": 1000000
        },
        "special_strength": special_strength([
            0.5, 1.0, 0.5, 0.5, 0.5, 2.0, 2.0, 0.25, 1.0, 0.5, 4.0, 0.5, 0.5, 0.0, 0.5, 0.5, 0.25,
            1.0,
        ]),
        "other": {
            "percentage_male": null,
            "height_m": 0.3,
            "weight_kg": 6.0,
            "generation": 1
        }
    })
}

/// A species whose primary type is not one of the known types.
///
/// Catalog loading accepts any type name, so special attacks against this species fail.
pub fn shadow_lugia_record() -> Value {
    json!({
        "pokedex_number": 10249,
        "name": "Shadow Lugia",
        "abilities": "['Pressure']",
        "stats": {
            "hp": 106,
            "attack": 90,
            "defense": 130,
            "speed": 110,
            "type1": "shadow",
            "type2": "flying",
            "classfication": "Diving Pokémon",
            "experience_growth": 1250000
        },
        "special_strength": special_strength([1.0; 18]),
        "other": {
            "percentage_male": "",
            "height_m": 5.2,
            "weight_kg": 216.0,
            "generation": 2
        }
    })
}

/// A valid record with the given catalog number and name, based on Bulbasaur.
pub fn record_with_id(id: u32, name: &str) -> Value {
    let mut record = bulbasaur_record();
    record["pokedex_number"] = json!(id);
    record["name"] = json!(name);
    record
}

/// Records of every species in [`test_catalog`], in catalog order.
pub fn test_catalog_records() -> Vec<Value> {
    vec![
        bulbasaur_record(),
        charmander_record(),
        squirtle_record(),
        clefairy_record(),
        magnemite_record(),
        shadow_lugia_record(),
    ]
}

/// A small catalog for tests.
pub fn test_catalog() -> Catalog {
    match CatalogLoader::load(&test_catalog_records()) {
        Ok(catalog) => catalog,
        Err(err) => panic!("failed to load test catalog: {err}"),
    }
}
