#[derive(Debug, Clone)]
pub struct AddShoppingItemInput {
    pub name: String,
}
