#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateEmployee {
    pub id: String,
    pub first_name: String,
    pub surname: String,
}
