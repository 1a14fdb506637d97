//! Terminal styling, spinners and prompt handling shared by the commands.

use anyhow::Result;
use inquire::InquireError;

mod spinner;
mod style;

pub use spinner::Spinner;
pub use style::Style;

/// True for Ctrl+C and Esc at an `inquire` prompt.
pub const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Runs an interactive flow such as `configure`, treating a cancelled prompt
/// as a clean exit. Any other error is returned unchanged.
pub fn handle_prompt_cancellation<F>(f: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    match f() {
        Ok(()) => Ok(()),
        Err(e)
            if e.downcast_ref::<InquireError>()
                .is_some_and(is_prompt_cancelled) =>
        {
            println!();
            Ok(())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_cancelled_endpoint_prompt_exits_cleanly() {
        for cancel in [
            InquireError::OperationCanceled,
            InquireError::OperationInterrupted,
        ] {
            let result = handle_prompt_cancellation(|| Err(cancel.into()));
            assert!(result.is_ok());
        }
    }

    #[test]
    fn test_save_failure_still_reported() {
        let result = handle_prompt_cancellation(|| {
            Err(std::io::Error::from(std::io::ErrorKind::PermissionDenied))
                .context("Failed to write config file: /etc/chatloop/config.toml")
        });

        let Err(err) = result else {
            panic!("expected an error");
        };
        assert!(err.to_string().contains("Failed to write config file"));
    }

    #[test]
    fn test_rejected_input_is_not_a_cancellation() {
        assert!(!is_prompt_cancelled(&InquireError::Custom(
            "Invalid endpoint URL".into()
        )));
        assert!(is_prompt_cancelled(&InquireError::OperationInterrupted));
    }
}
