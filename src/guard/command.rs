//! Command input guard
//!
//! First gate for every tokenized line, before any argument-specific guard.

use crate::error::ErrorKind;
use crate::guard::outcome::ValidationOutcome;
use crate::guard::policy::{MAX_ARGUMENT_COUNT, MAX_COMMAND_LENGTH, MAX_PATH_LENGTH};
use crate::middleware::rate_limit::{Clock, RateLimiter};

pub fn check_command(command: &str, args: &[String]) -> ValidationOutcome {
    if command.len() > MAX_COMMAND_LENGTH {
        return ValidationOutcome::deny(ErrorKind::TooLong, "Command name too long");
    }

    if args.len() > MAX_ARGUMENT_COUNT {
        return ValidationOutcome::deny(ErrorKind::TooManyArguments, "Too many arguments");
    }

    if command.contains('\0') {
        return ValidationOutcome::deny(ErrorKind::IllegalCharacter, "Invalid command");
    }

    check_arguments(args)
}

fn check_arguments(args: &[String]) -> ValidationOutcome {
    for arg in args {
        if arg.len() > MAX_PATH_LENGTH {
            return ValidationOutcome::deny(ErrorKind::TooLong, "Argument too long");
        }
        if arg.contains('\0') {
            return ValidationOutcome::deny(ErrorKind::IllegalCharacter, "Invalid argument");
        }
    }
    ValidationOutcome::Allowed
}

/// [`check_command`] followed by the sliding-window limiter.
///
/// The limiter only records the command when the input itself was allowed.
pub fn check_command_rate_limited<C: Clock>(
    command: &str,
    args: &[String],
    limiter: &mut RateLimiter<C>,
) -> ValidationOutcome {
    let outcome = check_command(command, args);
    if outcome.is_denied() {
        return outcome;
    }
    if !limiter.is_allowed() {
        return ValidationOutcome::deny(
            ErrorKind::RateLimited,
            "Too many commands, slow down and try again",
        );
    }
    ValidationOutcome::Allowed
}
