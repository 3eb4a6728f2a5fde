use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A payroll-relevant employee record.
///
/// `id` is assigned by the repository at creation and never changes
/// afterwards. Allowances (subsídios de alimentação/transporte) are
/// tax-exempt; the bonus is taxable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub base_salary: Decimal,
    pub allowances: Decimal,
    pub bonus: Decimal,
}

/// For creating new employees (no id yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub base_salary: Decimal,
    pub allowances: Decimal,
    pub bonus: Decimal,
}

impl NewEmployee {
    /// Attach a repository-assigned id, producing the stored shape.
    pub fn with_id(self, id: impl Into<String>) -> Employee {
        Employee {
            id: id.into(),
            name: self.name,
            base_salary: self.base_salary,
            allowances: self.allowances,
            bonus: self.bonus,
        }
    }
}
