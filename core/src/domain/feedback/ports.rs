use std::future::Future;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    feedback::{entities::FeedbackEntry, value_objects::SubmitFeedbackInput},
};

pub trait FeedbackService: Send + Sync {
    /// Submitted feedback, newest first
    fn get_feedback(
        &self,
        identity: &Identity,
    ) -> impl Future<Output = Result<Vec<FeedbackEntry>, CoreError>> + Send;

    fn submit_feedback(
        &self,
        identity: &Identity,
        input: SubmitFeedbackInput,
    ) -> impl Future<Output = Result<FeedbackEntry, CoreError>> + Send;
}
