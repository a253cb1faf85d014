//! Submit-and-navigate flow.

use reqwest::StatusCode;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::api::{CreatedUser, RegisterError, RegistrationClient};
use super::form::{RegistrationForm, Route};

/// Successful registration and where to go next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub status: StatusCode,
    pub user: CreatedUser,
    /// `Some(Route::Home)` only when the backend answered `200 OK`.
    pub redirect: Option<Route>,
}

/// Validates the form, submits it and decides the next route.
///
/// A password that violates the policy fails with [`RegisterError::Policy`]
/// without touching the network. Cancelling `token` while the request is in
/// flight fails with [`RegisterError::Cancelled`].
pub async fn submit_registration(
    client: &RegistrationClient,
    form: &RegistrationForm,
    token: CancellationToken,
) -> Result<SubmitOutcome, RegisterError> {
    let evaluation = form.evaluate_password();
    if !evaluation.is_acceptable() {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            "registration blocked: {} policy violation(s)",
            evaluation.violations.len()
        );
        return Err(RegisterError::Policy(evaluation));
    }

    let response = tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("registration cancelled");
            return Err(RegisterError::Cancelled);
        }
        result = client.register(form) => result?,
    };

    let redirect = (response.status == StatusCode::OK).then_some(Route::Home);

    Ok(SubmitOutcome {
        status: response.status,
        user: response.user,
        redirect,
    })
}

/// A registration running in the background.
///
/// Dropping the task cancels the submission, so it never outlives its owner.
#[derive(Debug)]
pub struct RegistrationTask {
    token: CancellationToken,
    handle: Option<JoinHandle<Result<SubmitOutcome, RegisterError>>>,
}

impl RegistrationTask {
    /// Spawns [`submit_registration`] on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn spawn(client: RegistrationClient, form: RegistrationForm) -> Self {
        let token = CancellationToken::new();
        let child = token.child_token();

        let handle =
            tokio::spawn(async move { submit_registration(&client, &form, child).await });

        Self {
            token,
            handle: Some(handle),
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Token cancelled when this task is cancelled or dropped.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Waits for the submission to finish.
    pub async fn join(mut self) -> Result<SubmitOutcome, RegisterError> {
        let handle = self.handle.take().ok_or(RegisterError::Aborted)?;
        match handle.await {
            Ok(result) => result,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::error!("registration task failed: {}", _e);
                Err(RegisterError::Aborted)
            }
        }
    }
}

impl Drop for RegistrationTask {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
