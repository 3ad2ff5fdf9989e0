#[derive(Debug, Clone)]
pub struct InviteMemberInput {
    pub email: String,
}
