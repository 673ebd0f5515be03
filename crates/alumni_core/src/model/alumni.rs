//! Alumni records and forms.

use crate::model::form::{
    optional, parse_int, parse_selection, require_all, required, FormResult, ValidationError,
};
use serde::{Deserialize, Serialize};

/// Company stored when the operator leaves it blank.
pub const COMPANY_NOT_PROVIDED: &str = "Not Provided";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alumni {
    pub alumni_id: i64,
    pub name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub graduation_year: i64,
    pub company: String,
    pub dept_id: i64,
}

/// Operator input for `alumni.add`.
///
/// `department` accepts `"<id>"` or a `"<id> - <name>"` selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlumniForm {
    pub alumni_id: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub graduation_year: String,
    pub company: String,
    pub department: String,
}

impl AlumniForm {
    pub fn parse(&self) -> FormResult<Alumni> {
        require_all(&[
            ("Alumni ID", &self.alumni_id),
            ("Name", &self.name),
            ("Email", &self.email),
            ("Graduation Year", &self.graduation_year),
            ("Department", &self.department),
        ])?;
        Ok(Alumni {
            alumni_id: parse_int("Alumni ID", &self.alumni_id)?,
            name: required("Name", &self.name)?,
            email: required("Email", &self.email)?,
            phone_number: optional(&self.phone_number),
            graduation_year: parse_int("Graduation Year", &self.graduation_year)?,
            company: optional(&self.company).unwrap_or_else(|| COMPANY_NOT_PROVIDED.to_string()),
            dept_id: parse_selection("Department", &self.department)?,
        })
    }
}

/// Operator input for `alumni.update_company`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyForm {
    pub alumni_id: String,
    pub company: String,
}

impl CompanyForm {
    pub fn parse(&self) -> FormResult<(i64, String)> {
        require_all(&[("Alumni ID", &self.alumni_id), ("New Company", &self.company)])?;
        Ok((
            parse_int("Alumni ID", &self.alumni_id)?,
            required("New Company", &self.company)?,
        ))
    }
}

/// Parsed `alumni.update_contact` request; at least one field is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactUpdate {
    pub alumni_id: i64,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

/// Operator input for `alumni.update_contact`; blank fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub alumni_id: String,
    pub email: String,
    pub phone_number: String,
}

impl ContactForm {
    pub fn parse(&self) -> FormResult<ContactUpdate> {
        let alumni_id = parse_int("Alumni ID", &self.alumni_id)?;
        let email = optional(&self.email);
        let phone_number = optional(&self.phone_number);
        if email.is_none() && phone_number.is_none() {
            return Err(ValidationError::NoUpdateField {
                fields: &["New Email", "New Phone"],
            });
        }
        Ok(ContactUpdate {
            alumni_id,
            email,
            phone_number,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{AlumniForm, ContactForm, COMPANY_NOT_PROVIDED};
    use crate::model::form::ValidationError;

    fn form() -> AlumniForm {
        AlumniForm {
            alumni_id: "100".to_string(),
            name: "Jane".to_string(),
            email: "j@x.com".to_string(),
            phone_number: String::new(),
            graduation_year: "2020".to_string(),
            company: String::new(),
            department: "1 - CS".to_string(),
        }
    }

    #[test]
    fn blank_optional_fields_get_defaults() {
        let alumni = form().parse().expect("valid alumni form");
        assert_eq!(alumni.phone_number, None);
        assert_eq!(alumni.company, COMPANY_NOT_PROVIDED);
        assert_eq!(alumni.dept_id, 1);
    }

    #[test]
    fn required_fields_are_checked_before_types() {
        let mut invalid = form();
        invalid.alumni_id = "abc".to_string();
        invalid.email = String::new();
        assert_eq!(
            invalid.parse(),
            Err(ValidationError::Required { field: "Email" })
        );
    }

    #[test]
    fn contact_update_needs_one_field() {
        let empty = ContactForm {
            alumni_id: "1".to_string(),
            ..ContactForm::default()
        };
        assert!(matches!(
            empty.parse(),
            Err(ValidationError::NoUpdateField { .. })
        ));

        let both = ContactForm {
            alumni_id: "1".to_string(),
            email: "new@x.com".to_string(),
            phone_number: "555".to_string(),
        };
        let update = both.parse().expect("both fields may change together");
        assert_eq!(update.email.as_deref(), Some("new@x.com"));
        assert_eq!(update.phone_number.as_deref(), Some("555"));
    }
}
