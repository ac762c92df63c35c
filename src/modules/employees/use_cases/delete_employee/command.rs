#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteEmployee {
    pub id: String,
}
