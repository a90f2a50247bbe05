use std::sync::Arc;
use log::{debug, info};

use crate::prompts::{self, RewriteInputs};
use crate::providers::CompletionBackend;

/// Results of the three analysis prompts, in display order
#[derive(Debug, Clone, PartialEq)]
pub struct Review
{   pub issues: crate::CompletionReply
  , pub improvements: crate::CompletionReply
  , pub standards: crate::CompletionReply
}

impl Review
{   /// Flatten into `(issues, improvements, standards)` display strings
    pub fn into_texts(self) -> (String, String, String)
    {   (
          crate::error::render(self.issues)
        , crate::error::render(self.improvements)
        , crate::error::render(self.standards)
        )
    }

    pub fn all_ok(&self) -> bool
    {   self.issues.is_ok()
          && self.improvements.is_ok()
          && self.standards.is_ok()
    }
}

/// Composite review actions over a shared completion backend
#[derive(Clone)]
pub struct Reviewer
{   backend: Arc<dyn CompletionBackend>
}

impl Reviewer
{   pub fn new(backend: Arc<dyn CompletionBackend>) -> Self
    {   Reviewer
        {   backend
        }
    }

    /// Run analyze, improve and standards one after another.
    ///
    /// Calls are sequential; a failure in one does not stop the others.
    pub async fn review(&self, code: &str, model: &str) -> Review
    {   info!("Reviewing {} bytes of code with {}", code.len(), model);
        let backend = self.backend.as_ref();

        let issues = prompts::analyze(backend, code, model).await;
        let improvements = prompts::improve(backend, code, model).await;
        let standards = prompts::standards(backend, code, model).await;

        let review = Review
        {   issues
          , improvements
          , standards
        };
        debug!("Review finished, all_ok={}", review.all_ok());
        review
    }

    /// Rewrite `code` using reports from an earlier review
    pub async fn apply_rewrite(
      &self
    , code: &str
    , issues: &str
    , improvements: &str
    , standards: &str
    , model: &str
    ) -> crate::CompletionReply
    {   info!("Rewriting {} bytes of code with {}", code.len(), model);
        prompts::rewrite(
          self.backend.as_ref(),
          RewriteInputs
          {   code
            , issues
            , improvements
            , standards
          },
          model
        ).await
    }
}
