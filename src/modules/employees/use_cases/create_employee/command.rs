// Command data type for creating an employee.
//
// - `amount` is the requested leave entitlement. It only gates validity; the
//   starting balance is always the default.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEmployee {
    pub first_name: String,
    pub surname: String,
    pub amount: i64,
}
