use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Customer identity extracted from a discovery call.
///
/// `company_name`, `industry` and `contact_person` are required and must not be
/// blank after trimming. Values are stored exactly as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CustomerInfoRecord")]
pub struct CustomerInfo {
    pub company_name: String,
    pub industry: String,
    pub contact_person: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Unvalidated wire shape; every deserialization goes through `CustomerInfo::new`.
#[derive(Debug, Deserialize)]
struct CustomerInfoRecord {
    company_name: String,
    industry: String,
    contact_person: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
}

impl TryFrom<CustomerInfoRecord> for CustomerInfo {
    type Error = AppError;

    fn try_from(record: CustomerInfoRecord) -> Result<Self, Self::Error> {
        CustomerInfo::new(
            record.company_name,
            record.industry,
            record.contact_person,
            record.email,
            record.phone,
        )
    }
}

impl CustomerInfo {
    pub fn new(
        company_name: impl Into<String>,
        industry: impl Into<String>,
        contact_person: impl Into<String>,
        email: Option<String>,
        phone: Option<String>,
    ) -> Result<Self, AppError> {
        let customer = CustomerInfo {
            company_name: company_name.into(),
            industry: industry.into(),
            contact_person: contact_person.into(),
            email,
            phone,
        };

        for (field, value) in [
            ("company_name", &customer.company_name),
            ("industry", &customer.industry),
            ("contact_person", &customer.contact_person),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{field} cannot be empty")));
            }
        }

        Ok(customer)
    }
}
