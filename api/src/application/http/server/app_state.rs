use std::sync::Arc;

use scantry_core::application::ScantryService;

use crate::{application::auth::Authenticator, args::Args};

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: ScantryService,
    pub authenticator: Authenticator,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: ScantryService, authenticator: Authenticator) -> Self {
        Self {
            args,
            service,
            authenticator,
        }
    }
}
