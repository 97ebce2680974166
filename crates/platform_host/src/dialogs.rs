//! Blocking-style confirmation and notice dialogs exposed as async host services.

use std::{
    cell::RefCell,
    collections::VecDeque,
    future::Future,
    pin::Pin,
};

/// Object-safe boxed future used by [`DialogService`].
pub type DialogFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for user confirmations and notices.
pub trait DialogService {
    /// Asks the user to confirm `message`; resolves `true` only on explicit acceptance.
    fn confirm<'a>(&'a self, message: &'a str) -> DialogFuture<'a, bool>;

    /// Shows an informational notice.
    fn alert<'a>(&'a self, message: &'a str) -> DialogFuture<'a, ()>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Dialog service that declines every confirmation and drops notices.
pub struct NoopDialogService;

impl DialogService for NoopDialogService {
    fn confirm<'a>(&'a self, _message: &'a str) -> DialogFuture<'a, bool> {
        Box::pin(async { false })
    }

    fn alert<'a>(&'a self, _message: &'a str) -> DialogFuture<'a, ()> {
        Box::pin(async {})
    }
}

/// Dialog shown through [`ScriptedDialogService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogPrompt {
    /// Confirmation text.
    Confirm(String),
    /// Notice text.
    Alert(String),
}

#[derive(Debug, Default)]
/// Dialog service that answers confirmations from a queue and records every prompt.
///
/// An exhausted queue declines.
pub struct ScriptedDialogService {
    answers: RefCell<VecDeque<bool>>,
    prompts: RefCell<Vec<DialogPrompt>>,
}

impl ScriptedDialogService {
    /// Creates a service that answers confirmations in order.
    pub fn answering(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            prompts: RefCell::default(),
        }
    }

    /// Returns every prompt shown so far.
    pub fn prompts(&self) -> Vec<DialogPrompt> {
        self.prompts.borrow().clone()
    }
}

impl DialogService for ScriptedDialogService {
    fn confirm<'a>(&'a self, message: &'a str) -> DialogFuture<'a, bool> {
        Box::pin(async move {
            self.prompts
                .borrow_mut()
                .push(DialogPrompt::Confirm(message.to_string()));
            self.answers.borrow_mut().pop_front().unwrap_or(false)
        })
    }

    fn alert<'a>(&'a self, message: &'a str) -> DialogFuture<'a, ()> {
        Box::pin(async move {
            self.prompts
                .borrow_mut()
                .push(DialogPrompt::Alert(message.to_string()));
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    #[test]
    fn scripted_dialogs_decline_once_exhausted() {
        let dialogs = ScriptedDialogService::answering([true]);
        assert!(block_on(dialogs.confirm("first?")));
        assert!(!block_on(dialogs.confirm("second?")));
        block_on(dialogs.alert("done"));

        assert_eq!(
            dialogs.prompts(),
            vec![
                DialogPrompt::Confirm("first?".to_string()),
                DialogPrompt::Confirm("second?".to_string()),
                DialogPrompt::Alert("done".to_string()),
            ]
        );
    }
}
