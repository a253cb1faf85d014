//! Password policy evaluator - runs every section in rule order.

use secrecy::SecretString;

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{
    SectionResult, digit_section, length_section, lowercase_section, special_character_section,
    uppercase_section,
};
use crate::violation::PolicyEvaluation;

/// Delay applied by [`evaluate_password_tx`] before evaluating.
#[cfg(feature = "async")]
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Evaluates a password against the policy.
///
/// Every rule is checked independently; all failures are reported in the
/// order length, uppercase, lowercase, digit, special. Any input, including
/// the empty string, is accepted.
pub fn evaluate_password(password: &SecretString) -> PolicyEvaluation {
    // Orchestrator: execute sections in sequence
    let sections: [(&str, fn(&SecretString) -> SectionResult); 5] = [
        ("length", length_section),
        ("uppercase", uppercase_section),
        ("lowercase", lowercase_section),
        ("digit", digit_section),
        ("special", special_character_section),
    ];

    let mut violations = Vec::new();
    for (_section_name, section_fn) in sections {
        if let Some(violation) = section_fn(password) {
            #[cfg(feature = "tracing")]
            tracing::trace!("password policy section failed: {}", _section_name);
            violations.push(violation);
        }
    }

    PolicyEvaluation { violations }
}

/// Returns the violation messages for a password, empty if it is acceptable.
pub fn validate_password(password: &SecretString) -> Vec<String> {
    evaluate_password(password).messages()
}

/// `true` iff the password violates no rule.
pub fn is_valid_password(password: &SecretString) -> bool {
    evaluate_password(password).is_acceptable()
}

/// Debounced evaluation for live feedback while the user types.
///
/// Waits [`DEBOUNCE`], then sends the evaluation via channel. Nothing is sent
/// if `token` is cancelled first, so a newer keystroke can supersede this one.
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PolicyEvaluation>,
) {
    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("password evaluation cancelled");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let evaluation = evaluate_password(password);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        evaluate_password_tx(&secret("Valid123$"), token, tx).await;

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert!(evaluation.is_acceptable());
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_tx_cancelled_before_start() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        evaluate_password_tx(&secret("short"), token, tx).await;

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_tx_cancelled_during_debounce() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let child = token.clone();
        let handle = tokio::spawn(async move {
            let pwd = SecretString::new("short".to_string().into());
            evaluate_password_tx(&pwd, child, tx).await;
        });

        tokio::time::sleep(DEBOUNCE / 2).await;
        token.cancel();
        handle.await.expect("task should finish");

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_tx_closed_receiver() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        // Must not panic
        evaluate_password_tx(&secret("short"), CancellationToken::new(), tx).await;
    }
}
