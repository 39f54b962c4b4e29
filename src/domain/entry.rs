use std::fmt;
use std::hash::Hash;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationError;

pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Closed category set for one entry kind. Labels outside the set collapse
/// into the fallback variant instead of being dropped.
pub trait Category: Copy + Eq + Hash + fmt::Display {
    fn fallback() -> Self;
    fn from_label(label: &str) -> Self;
}

/// A single expense or income record belonging to a household.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry<C> {
    pub id: Uuid,
    pub amount: Decimal,
    pub category: C,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub household_id: Uuid,
}

impl<C: Category> Entry<C> {
    pub fn new(
        household_id: Uuid,
        amount: Decimal,
        category: C,
        date: NaiveDate,
    ) -> Result<Self, ValidationError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(ValidationError::NegativeAmount(amount));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            amount,
            category,
            description: None,
            date,
            created_at: Utc::now(),
            household_id,
        })
    }

    pub fn with_description(mut self, text: impl Into<String>) -> Result<Self, ValidationError> {
        self.set_description(Some(text.into()))?;
        Ok(self)
    }

    pub fn set_description(&mut self, text: Option<String>) -> Result<(), ValidationError> {
        if let Some(text) = &text {
            let len = text.chars().count();
            if len > MAX_DESCRIPTION_LEN {
                return Err(ValidationError::DescriptionTooLong(len));
            }
        }
        self.description = text.filter(|t| !t.is_empty());
        Ok(())
    }

    /// Applies a partial edit. Identity and creation instant never change;
    /// a rejected patch leaves the entry untouched.
    pub fn apply(&mut self, patch: EntryPatch<C>) -> Result<(), ValidationError> {
        if let Some(amount) = patch.amount {
            if amount.is_sign_negative() && !amount.is_zero() {
                return Err(ValidationError::NegativeAmount(amount));
            }
        }
        if let Some(Some(text)) = &patch.description {
            let len = text.chars().count();
            if len > MAX_DESCRIPTION_LEN {
                return Err(ValidationError::DescriptionTooLong(len));
            }
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(description) = patch.description {
            self.description = description.filter(|t| !t.is_empty());
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        Ok(())
    }
}

/// Field-wise edit of an entry; `None` leaves the field untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryPatch<C> {
    pub amount: Option<Decimal>,
    pub category: Option<C>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,
    pub date: Option<NaiveDate>,
}

impl<C> Default for EntryPatch<C> {
    fn default() -> Self {
        Self {
            amount: None,
            category: None,
            description: None,
            date: None,
        }
    }
}

macro_rules! category_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
            Other,
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let label = match self {
                    $(Self::$variant => $label,)+
                    Self::Other => "Other",
                };
                f.write_str(label)
            }
        }

        impl Category for $name {
            fn fallback() -> Self {
                Self::Other
            }

            fn from_label(label: &str) -> Self {
                match label {
                    $($label => Self::$variant,)+
                    _ => Self::fallback(),
                }
            }
        }

        // The wire format is the human label; labels outside the closed
        // set deserialize as the fallback instead of failing.
        impl Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let label = String::deserialize(deserializer)?;
                Ok(Self::from_label(&label))
            }
        }
    };
}

category_enum! {
    /// Expense categories offered by the entry forms.
    ExpenseCategory {
        Fuel => "Fuel",
        SchoolFees => "School fees",
        Sports => "Sports",
        Groceries => "Groceries",
        Bakery => "Bakery",
        Produce => "Produce",
        Butcher => "Butcher",
        Poultry => "Poultry",
        Restaurants => "Restaurants",
        Clothing => "Clothing",
        Coffee => "Coffee",
        CreditCards => "Credit cards",
        Loans => "Loans",
        Pets => "Pets",
        Utilities => "Utilities",
        Pharmacy => "Pharmacy",
        Entertainment => "Entertainment",
        Kiosk => "Kiosk",
        Rent => "Rent",
    }
}

category_enum! {
    /// Income categories offered by the entry forms.
    IncomeCategory {
        Salary => "Salary",
        Freelance => "Freelance",
        Rental => "Rental",
        Sales => "Sales",
        Investments => "Investments",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn date(raw: &str) -> NaiveDate {
        NaiveDate::from_str(raw).unwrap()
    }

    fn amount(raw: &str) -> Decimal {
        raw.parse().unwrap()
    }

    #[test]
    fn rejects_negative_amounts() {
        let err = Entry::new(
            Uuid::new_v4(),
            amount("-1.50"),
            ExpenseCategory::Groceries,
            date("2024-01-05"),
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::NegativeAmount(_)));
    }

    #[test]
    fn zero_amounts_are_allowed() {
        let entry = Entry::new(
            Uuid::new_v4(),
            Decimal::ZERO,
            ExpenseCategory::Kiosk,
            date("2024-01-05"),
        );
        assert!(entry.is_ok());
    }

    #[test]
    fn caps_description_length() {
        let entry = Entry::new(
            Uuid::new_v4(),
            amount("10"),
            ExpenseCategory::Groceries,
            date("2024-01-05"),
        )
        .unwrap();
        let err = entry.with_description("x".repeat(501)).unwrap_err();
        assert_eq!(err, ValidationError::DescriptionTooLong(501));
    }

    #[test]
    fn patch_edits_fields_and_keeps_identity() {
        let mut entry = Entry::new(
            Uuid::new_v4(),
            amount("10"),
            ExpenseCategory::Groceries,
            date("2024-01-05"),
        )
        .unwrap()
        .with_description("weekly shop")
        .unwrap();
        let id = entry.id;

        entry
            .apply(EntryPatch {
                amount: Some(amount("12.50")),
                category: Some(ExpenseCategory::Bakery),
                description: Some(None),
                date: Some(date("2024-01-06")),
            })
            .unwrap();

        assert_eq!(entry.id, id);
        assert_eq!(entry.amount, amount("12.50"));
        assert_eq!(entry.category, ExpenseCategory::Bakery);
        assert_eq!(entry.description, None);
        assert_eq!(entry.date, date("2024-01-06"));
    }

    #[test]
    fn patch_rejects_negative_amount_without_partial_update() {
        let mut entry = Entry::new(
            Uuid::new_v4(),
            amount("10"),
            ExpenseCategory::Groceries,
            date("2024-01-05"),
        )
        .unwrap();
        let err = entry
            .apply(EntryPatch {
                amount: Some(amount("-3")),
                ..EntryPatch::default()
            })
            .unwrap_err();
        assert!(matches!(err, ValidationError::NegativeAmount(_)));
        assert_eq!(entry.amount, amount("10"));
    }

    #[test]
    fn unknown_labels_fall_back_to_other() {
        assert_eq!(
            ExpenseCategory::from_label("Spaceships"),
            ExpenseCategory::Other
        );
        assert_eq!(IncomeCategory::from_label("Salary"), IncomeCategory::Salary);
    }

    #[test]
    fn categories_travel_as_their_labels() {
        assert_eq!(
            serde_json::to_string(&ExpenseCategory::SchoolFees).unwrap(),
            "\"School fees\""
        );
        let parsed: ExpenseCategory = serde_json::from_str("\"School fees\"").unwrap();
        assert_eq!(parsed, ExpenseCategory::SchoolFees);
    }

    #[test]
    fn unknown_wire_categories_deserialize_as_other() {
        let parsed: IncomeCategory = serde_json::from_str("\"Lottery\"").unwrap();
        assert_eq!(parsed, IncomeCategory::Other);
    }
}
