//! Turns loosely-typed JSON documents into [`ApplicationRecord`]s.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::domain::{ApplicationRecord, RequiredField};

/// Why a document could not be turned into an [`ApplicationRecord`].
///
/// Rejections are not errors: the evaluator converts them into denied decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeRejection {
    MissingField(RequiredField),
    InvalidField(RequiredField),
}

impl IntakeRejection {
    pub fn field(self) -> RequiredField {
        match self {
            IntakeRejection::MissingField(field) | IntakeRejection::InvalidField(field) => field,
        }
    }
}

impl fmt::Display for IntakeRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntakeRejection::MissingField(field) => {
                write!(f, "Missing required application field: '{}'", field.key())
            }
            IntakeRejection::InvalidField(field) => write!(
                f,
                "Invalid value for required application field: '{}'",
                field.key()
            ),
        }
    }
}

/// Failures reading an application document from disk.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("Error: File not found at {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("Error: Could not decode JSON from {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Error reading file: {source}")]
    Read {
        #[source]
        source: io::Error,
    },
}

/// Reads and parses the JSON document at `path` without interpreting its contents.
pub fn load_application<P: AsRef<Path>>(path: P) -> Result<Value, IntakeError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(IntakeError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let raw = fs::read(path).map_err(|source| IntakeError::Read { source })?;

    serde_json::from_slice(&raw).map_err(|source| IntakeError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

impl ApplicationRecord {
    /// Extracts the seven required fields, reporting the first missing or invalid one.
    ///
    /// Anything that is not a JSON object exposes no keys and is reported as missing
    /// `annualIncome`. Extra keys are ignored.
    pub fn from_value(value: &Value) -> Result<Self, IntakeRejection> {
        match value.as_object() {
            Some(fields) => Self::from_fields(fields),
            None => Err(IntakeRejection::MissingField(RequiredField::ALL[0])),
        }
    }

    pub fn from_fields(fields: &Map<String, Value>) -> Result<Self, IntakeRejection> {
        let reader = FieldReader { fields };

        Ok(Self {
            annual_income: reader.amount(RequiredField::AnnualIncome)?,
            credit_score: reader.integer(RequiredField::CreditScore)?,
            monthly_debt: reader.amount(RequiredField::MonthlyDebt)?,
            employment_months: reader.count(RequiredField::EmploymentMonths)?,
            is_first_time_buyer: reader.flag(RequiredField::IsFirstTimeBuyer)?,
            is_self_employed: reader.flag(RequiredField::IsSelfEmployed)?,
            requested_amount: reader.amount(RequiredField::RequestedAmount)?,
        })
    }
}

struct FieldReader<'a> {
    fields: &'a Map<String, Value>,
}

impl FieldReader<'_> {
    fn get(&self, field: RequiredField) -> Result<&Value, IntakeRejection> {
        self.fields
            .get(field.key())
            .ok_or(IntakeRejection::MissingField(field))
    }

    /// Non-negative number.
    fn amount(&self, field: RequiredField) -> Result<f64, IntakeRejection> {
        self.get(field)?
            .as_f64()
            .filter(|amount| amount.is_finite() && *amount >= 0.0)
            .ok_or(IntakeRejection::InvalidField(field))
    }

    fn integer(&self, field: RequiredField) -> Result<i64, IntakeRejection> {
        let value = self.get(field)?;
        value
            .as_i64()
            .or_else(|| integral_f64(value).map(|whole| whole as i64))
            .ok_or(IntakeRejection::InvalidField(field))
    }

    /// Non-negative integer.
    fn count(&self, field: RequiredField) -> Result<u64, IntakeRejection> {
        let value = self.get(field)?;
        value
            .as_u64()
            .or_else(|| {
                integral_f64(value)
                    .filter(|whole| *whole >= 0.0)
                    .map(|whole| whole as u64)
            })
            .ok_or(IntakeRejection::InvalidField(field))
    }

    fn flag(&self, field: RequiredField) -> Result<bool, IntakeRejection> {
        self.get(field)?
            .as_bool()
            .ok_or(IntakeRejection::InvalidField(field))
    }
}

fn integral_f64(value: &Value) -> Option<f64> {
    value
        .as_f64()
        .filter(|number| number.is_finite() && number.fract() == 0.0)
        .filter(|number| number.abs() <= i64::MAX as f64)
}
