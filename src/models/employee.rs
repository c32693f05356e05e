use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub designation: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct EmployeesData {
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub total: u64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct NewEmployee {
    pub name: String,
    pub phone: String,
    pub department: Option<String>,
    pub designation: Option<String>,
}
