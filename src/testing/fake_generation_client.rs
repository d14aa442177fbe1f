use std::cell::RefCell;
use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::{GenerationClient, GenerationRequest};

/// Scripted generation client that records every request it receives.
#[derive(Default)]
pub struct FakeGenerationClient {
    responses: RefCell<VecDeque<Result<String, AppError>>>,
    requests: RefCell<Vec<GenerationRequest>>,
}

impl FakeGenerationClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply.
    pub fn reply(self, text: impl Into<String>) -> Self {
        self.responses.borrow_mut().push_back(Ok(text.into()));
        self
    }

    /// Queue a failing reply.
    pub fn fail(self, error: AppError) -> Self {
        self.responses.borrow_mut().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.borrow().clone()
    }
}

impl GenerationClient for FakeGenerationClient {
    fn generate(&self, request: &GenerationRequest) -> Result<String, AppError> {
        self.requests.borrow_mut().push(request.clone());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::provider("no scripted response")))
    }
}
