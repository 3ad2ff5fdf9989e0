use crate::domain::llm::ports::ImagePayload;

/// At most this many photos are sent to the model in one scan.
pub const MAX_SCAN_IMAGES: usize = 5;

#[derive(Debug, Clone)]
pub struct AddIngredientInput {
    pub name: String,
    pub quantity: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ScanInventoryInput {
    pub images: Vec<ImagePayload>,
}
