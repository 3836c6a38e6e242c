use crate::error::ValidationError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Store-assigned identifier of a steel item. Never reused once assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub i64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Input fields that take part in validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Code,
    Weight,
    Length,
    Thickness,
}

impl Field {
    /// Returns the human readable field label (e.g., "weight")
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Code => "code",
            Field::Weight => "weight",
            Field::Length => "length",
            Field::Thickness => "thickness",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted steel stock item.
///
/// Weight is in tonnes, length in meters. Thickness is fixed for a code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SteelItem {
    pub id: ItemId,
    pub name: Option<String>,
    pub code: String,
    pub weight: Decimal,
    pub length: Decimal,
    pub thickness: Decimal,
}

impl SteelItem {
    /// Returns the name, or an empty string when the item has none
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Merges an add request for the same code into this item.
    ///
    /// Weight and length accumulate; the thickness must match exactly and
    /// neither sum may overflow, otherwise the item is left untouched.
    pub fn absorb(&mut self, input: &SteelInput) -> Result<(), ValidationError> {
        if self.thickness != input.thickness {
            return Err(ValidationError::ThicknessMismatch {
                code: self.code.clone(),
                existing: self.thickness,
                requested: input.thickness,
            });
        }
        let weight = self
            .weight
            .checked_add(input.weight)
            .ok_or(ValidationError::QuantityOverflow(Field::Weight))?;
        let length = self
            .length
            .checked_add(input.length)
            .ok_or(ValidationError::QuantityOverflow(Field::Length))?;
        self.weight = weight;
        self.length = length;
        Ok(())
    }
}

/// Raw text of the add/edit form, exactly as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SteelForm {
    pub name: String,
    pub code: String,
    pub weight: String,
    pub length: String,
    pub thickness: String,
}

impl SteelForm {
    /// Populates a form from an existing item, rendering each decimal as text
    pub fn from_item(item: &SteelItem) -> Self {
        Self {
            name: item.display_name().to_string(),
            code: item.code.clone(),
            weight: item.weight.to_string(),
            length: item.length.to_string(),
            thickness: item.thickness.to_string(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A validated add request. Only constructible through [`SteelInput::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SteelInput {
    pub name: Option<String>,
    pub code: String,
    pub weight: Decimal,
    pub length: Decimal,
    pub thickness: Decimal,
}

impl SteelInput {
    /// Validates the raw form.
    ///
    /// Checks run in a fixed order: every required field for emptiness first,
    /// then weight, length and thickness for numeric format. A blank name
    /// becomes `None`.
    pub fn parse(form: &SteelForm) -> Result<Self, ValidationError> {
        let required = [
            (Field::Code, &form.code),
            (Field::Weight, &form.weight),
            (Field::Length, &form.length),
            (Field::Thickness, &form.thickness),
        ];
        if let Some((field, _)) = required.iter().find(|(_, text)| text.trim().is_empty()) {
            return Err(ValidationError::MissingField(*field));
        }

        let weight = parse_quantity(Field::Weight, &form.weight)?;
        let length = parse_quantity(Field::Length, &form.length)?;
        let thickness = parse_quantity(Field::Thickness, &form.thickness)?;

        let name = if form.name.trim().is_empty() {
            None
        } else {
            Some(form.name.clone())
        };

        Ok(Self {
            name,
            code: form.code.trim().to_string(),
            weight,
            length,
            thickness,
        })
    }
}

/// Parses a non-negative decimal, accepting a comma as the decimal separator.
///
/// A negative zero such as "-0" is accepted and returned without its sign.
pub fn parse_quantity(field: Field, text: &str) -> Result<Decimal, ValidationError> {
    let text = text.trim();
    let normalized = if text.contains(',') && !text.contains('.') {
        text.replacen(',', ".", 1)
    } else {
        text.to_string()
    };

    match Decimal::from_str(&normalized) {
        Ok(value) if value >= Decimal::ZERO => Ok(value.abs()),
        _ => Err(ValidationError::InvalidNumber(field)),
    }
}
