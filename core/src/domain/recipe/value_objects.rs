pub const DEFAULT_RATING: u8 = 3;

#[derive(Debug, Clone)]
pub struct RejectRecipeInput {
    pub recipe_id: String,
    pub reason: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CookRecipeInput {
    pub recipe_id: String,
    /// 1 to 5, [`DEFAULT_RATING`] when not given
    pub rating: Option<u8>,
    pub notes: Option<String>,
}
