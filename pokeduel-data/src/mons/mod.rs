mod gender;
mod species_data;
mod r#type;

pub use gender::Gender;
pub use species_data::SpeciesData;
pub use r#type::{
    Type,
    TypeTable,
};
