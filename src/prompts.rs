//! The four fixed review prompts
//!
//! Each task has a pure `*_messages` function that builds its
//! system/user pair and an async wrapper that hands those messages
//! to a [`CompletionBackend`] and returns whatever it answers.

use log::debug;

use crate::providers::CompletionBackend;
use crate::request::ChatMessage;

fn fenced(code: &str) -> String
{   format!("```python\n{}\n```", code)
}

pub fn analyze_messages(code: &str) -> Vec<ChatMessage>
{   vec![
      ChatMessage::system(
        "You are a helpful coding assistant. Identify bugs."
      )
    , ChatMessage::user(format!(
        "Review this code and list syntax errors, logical bugs, and fixes:\n{}",
        fenced(code)
      ))
    ]
}

pub fn improve_messages(code: &str) -> Vec<ChatMessage>
{   vec![
      ChatMessage::system(
        "You are an expert in code optimisation."
      )
    , ChatMessage::user(format!(
        "Suggest performance, naming, logic, and memory improvements for:\n{}",
        fenced(code)
      ))
    ]
}

pub fn standards_messages(code: &str) -> Vec<ChatMessage>
{   vec![
      ChatMessage::system(
        "You are a PEP-8 and design-guideline expert."
      )
    , ChatMessage::user(format!(
        "Evaluate this code for PEP-8 compliance, naming, documentation, \
         error handling and organisation:\n{}",
        fenced(code)
      ))
    ]
}

/// Prior reports fed back into the rewrite prompt
#[derive(Debug, Clone, Copy)]
pub struct RewriteInputs<'a>
{   pub code: &'a str
  , pub issues: &'a str
  , pub improvements: &'a str
  , pub standards: &'a str
}

pub fn rewrite_messages(inputs: RewriteInputs<'_>) -> Vec<ChatMessage>
{   vec![
      ChatMessage::system(
        "You are a senior software engineer rewriting the code."
      )
    , ChatMessage::user(format!(
        "Rewrite the following code, fixing all issues, applying \
         improvements, and adhering to best standards. \
         Return *only* the new code:\n\n\
         Original code:\n{}\n\n\
         Detected issues:\n{}\n\n\
         Suggested improvements:\n{}\n\n\
         Standards feedback:\n{}",
        fenced(inputs.code),
        inputs.issues,
        inputs.improvements,
        inputs.standards
      ))
    ]
}

/// List syntax errors, logical bugs and fixes
pub async fn analyze<B>(backend: &B, code: &str, model: &str)
  -> crate::CompletionReply
where B: CompletionBackend + ?Sized
{   debug!("analyze: {} bytes of code", code.len());
    backend.complete(&analyze_messages(code), model, None).await
}

/// Suggest performance, naming, logic and memory improvements
pub async fn improve<B>(backend: &B, code: &str, model: &str)
  -> crate::CompletionReply
where B: CompletionBackend + ?Sized
{   debug!("improve: {} bytes of code", code.len());
    backend.complete(&improve_messages(code), model, None).await
}

/// Review style-guide compliance
pub async fn standards<B>(backend: &B, code: &str, model: &str)
  -> crate::CompletionReply
where B: CompletionBackend + ?Sized
{   debug!("standards: {} bytes of code", code.len());
    backend.complete(&standards_messages(code), model, None).await
}

/// Produce corrected code from the original and the three reports
pub async fn rewrite<B>(
  backend: &B
, inputs: RewriteInputs<'_>
, model: &str
) -> crate::CompletionReply
where B: CompletionBackend + ?Sized
{   debug!("rewrite: {} bytes of code", inputs.code.len());
    backend.complete(&rewrite_messages(inputs), model, None).await
}
