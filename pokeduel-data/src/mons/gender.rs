use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The gender of a battle entity.
///
/// Species without a male percentage are genderless, which is [`Gender::Unknown`].
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Gender {
    #[string = "unknown"]
    #[alias = "U"]
    #[default]
    Unknown,
    #[string = "female"]
    #[alias = "F"]
    Female,
    #[string = "male"]
    #[alias = "M"]
    Male,
}
