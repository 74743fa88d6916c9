//! Seed configuration: the employee directory and admin credentials.
//!
//! All data in this system originates from a [`SeedConfig`] -- there is
//! no persistence, so every process start begins from the seed. The
//! built-in default matches the demo dataset; deployments that want a
//! different roster load one from JSON.

use serde::Deserialize;

use crate::error::Error;
use crate::types::employee::Employee;

/// Admin login credentials.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCredentials {
    /// Admin login email.
    pub email: String,
    /// Admin login password, matched by string equality.
    pub password: String,
}

/// The seed table: admin credentials plus the employee roster.
///
/// # Defaults
///
/// | Field       | Default                                        |
/// |-------------|------------------------------------------------|
/// | `admin`     | `admin@example.com` / `123`                    |
/// | `employees` | `e1`..`e5`, `employee<N>@example.com` / `123`  |
///
/// # Examples
///
/// ```
/// use taskdesk::SeedConfig;
///
/// let seed = SeedConfig::default();
/// assert_eq!(seed.admin.email, "admin@example.com");
/// assert_eq!(seed.employees.len(), 5);
/// assert_eq!(seed.employees[0].id, "e1");
/// ```
///
/// Loading a custom roster:
///
/// ```
/// use taskdesk::SeedConfig;
///
/// let seed = SeedConfig::from_json_str(r#"{
///     "admin": { "email": "boss@corp.test", "password": "s3cret" },
///     "employees": [
///         { "id": "e1", "name": "Mika", "email": "mika@corp.test",
///           "password": "pw", "salary": 48000 }
///     ]
/// }"#).unwrap();
/// assert_eq!(seed.employees[0].name, "Mika");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedConfig {
    /// Admin credentials.
    pub admin: AdminCredentials,
    /// Employee roster, in display order.
    pub employees: Vec<Employee>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        let names = ["Asha Rao", "Birgit Keller", "Chinedu Okafor", "Daniela Costa", "Emil Novak"];
        let salaries = [52_000, 61_000, 47_500, 58_000, 50_500];

        let employees = names
            .iter()
            .zip(salaries)
            .enumerate()
            .map(|(i, (name, salary))| Employee {
                id: format!("e{}", i + 1),
                name: (*name).to_string(),
                email: format!("employee{}@example.com", i + 1),
                password: "123".to_string(),
                salary,
            })
            .collect();

        Self {
            admin: AdminCredentials {
                email: "admin@example.com".to_string(),
                password: "123".to_string(),
            },
            employees,
        }
    }
}

impl SeedConfig {
    /// Parses and validates a seed config from a JSON string.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] if the JSON is malformed or the parsed
    /// seed fails [`validate`](SeedConfig::validate).
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let seed: Self = serde_json::from_str(json).map_err(|e| Error::Validation {
            message: format!("invalid seed config: {e}"),
        })?;
        seed.validate()?;
        Ok(seed)
    }

    /// Checks the seed for duplicate employee ids, duplicate emails,
    /// and an employee email colliding with the admin email.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] naming the offending id or email.
    pub fn validate(&self) -> Result<(), Error> {
        let mut ids = std::collections::HashSet::new();
        let mut emails = std::collections::HashSet::new();

        for employee in &self.employees {
            if !ids.insert(employee.id.as_str()) {
                return Err(Error::Validation {
                    message: format!("duplicate employee id: {}", employee.id),
                });
            }
            if !emails.insert(employee.email.as_str()) {
                return Err(Error::Validation {
                    message: format!("duplicate employee email: {}", employee.email),
                });
            }
            if employee.email == self.admin.email {
                return Err(Error::Validation {
                    message: format!("employee email collides with admin: {}", employee.email),
                });
            }
        }

        Ok(())
    }
}
