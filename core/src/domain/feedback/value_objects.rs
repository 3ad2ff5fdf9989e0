use crate::domain::feedback::entities::FeedbackKind;

#[derive(Debug, Clone)]
pub struct SubmitFeedbackInput {
    pub kind: FeedbackKind,
    pub message: String,
}
