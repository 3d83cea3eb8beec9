use std::sync::Arc;

use nutrimood_core::application::NutrimoodService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: NutrimoodService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: NutrimoodService) -> Self {
        Self { args, service }
    }
}
