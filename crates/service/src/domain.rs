use serde::{Deserialize, Serialize};

/// Company as seen by callers. `employees` is derived from employee rows on
/// every read and is never written back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: Option<i32>,
    pub name: String,
    #[serde(default)]
    pub employees: Vec<Employee>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Option<i32>,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub salary: i32,
    pub company_id: Option<i32>,
}

impl Company {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    pub(crate) fn from_row(row: models::company::Model, employees: Vec<Employee>) -> Self {
        Self { id: Some(row.id), name: row.name, employees }
    }
}

impl From<models::employee::Model> for Employee {
    fn from(row: models::employee::Model) -> Self {
        Self {
            id: Some(row.id),
            name: row.name,
            age: row.age,
            gender: row.gender,
            salary: row.salary,
            company_id: row.company_id,
        }
    }
}

impl Employee {
    pub(crate) fn fields(&self) -> models::employee::Fields<'_> {
        models::employee::Fields {
            name: &self.name,
            age: self.age,
            gender: &self.gender,
            salary: self.salary,
            company_id: self.company_id,
        }
    }
}
