//! Command handlers for the GX shell.
//!
//! Runs the command input gate, parses the line and dispatches it to the
//! matching action. Every failure is turned into a `CommandResult` so the
//! REPL keeps running.

use log::debug;

use crate::actions::{files, navigate, system, view};
use crate::config::ShellConfig;
use crate::error::ShellResult;
use crate::error::handlers::{error_to_message, handle_error};
use crate::error::ShellError;
use crate::guard::check_command_rate_limited;
use crate::middleware::logging::{log_command, log_denial};
use crate::middleware::rate_limit::{Clock, RateLimiter, SystemClock};
use crate::shell::commands::{Command, CommandResult, CommandStatus, parse_command, tokenize};
use crate::shell::help::EXTENDED_HELP;
use crate::shell::Session;

pub const GOODBYE: &str = "Exiting GX Shell. Bye!";

/// One interactive shell: session state, settings and the command limiter.
pub struct Shell<C: Clock = SystemClock> {
    session: Session,
    config: ShellConfig,
    limiter: RateLimiter<C>,
}

impl Shell<SystemClock> {
    pub fn new(session: Session, config: ShellConfig) -> Self {
        let limiter = config.rate_limiter();
        Self::with_limiter(session, config, limiter)
    }
}

impl<C: Clock> Shell<C> {
    pub fn with_limiter(session: Session, config: ShellConfig, limiter: RateLimiter<C>) -> Self {
        Self {
            session,
            config,
            limiter,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Validates, parses and executes one input line.
    pub fn execute_line(&mut self, line: &str) -> CommandResult {
        let Some((command, args)) = tokenize(line) else {
            return CommandResult::silent();
        };

        if let Err(denial) =
            check_command_rate_limited(&command, &args, &mut self.limiter).into_result()
        {
            log_denial(&command, &denial);
            return failure(ShellError::Denied(denial));
        }

        let parsed = match parse_command(&command, &args) {
            Ok(parsed) => parsed,
            Err(err) => return failure(err),
        };

        log_command(&command, &args);
        match handle_command(&mut self.session, &parsed, &self.config) {
            Ok(_) if parsed == Command::Exit => CommandResult {
                status: CommandStatus::Exit,
                message: Some(GOODBYE.to_string()),
            },
            Ok(output) => CommandResult::success(output),
            Err(err) => {
                if let ShellError::Denied(denial) = &err {
                    log_denial(&command, denial);
                }
                failure(err)
            }
        }
    }
}

fn failure(err: ShellError) -> CommandResult {
    handle_error(&err);
    let message = error_to_message(&err);
    CommandResult {
        status: CommandStatus::Failure(err.to_string()),
        message: Some(message),
    }
}

/// Dispatches a parsed command to its action.
pub fn handle_command(
    session: &mut Session,
    command: &Command,
    config: &ShellConfig,
) -> ShellResult<String> {
    debug!("Dispatching {:?}", command);
    match command {
        Command::Create(name) => files::create_item(session, name),
        Command::Delete(name) => files::delete_item(session, name),
        Command::ChangeDir(path) => navigate::change_directory(session, path),
        Command::List => navigate::list_items(session),
        Command::Size(path) => navigate::show_size(session, path),
        Command::Move { src, dst } => files::move_item(session, src, dst),
        Command::Copy { src, dst } => files::copy_file(session, src, dst),
        Command::Find(term) => navigate::find_files(session, term),
        Command::Echo { text, file } => {
            files::echo_to_file(session, text, file, config.max_echo_length)
        }
        Command::Duplicate(name) => files::duplicate_file(session, name),
        Command::Cat(name) => view::view_file(session, name),
        Command::Head(name) => view::head_file(session, name, config.preview_lines),
        Command::Tail(name) => view::tail_file(session, name, config.preview_lines),
        Command::Grep { term, file } => view::grep_file(session, term, file),
        Command::Stat(name) => view::file_stats(session, name),
        Command::Pwd => Ok(navigate::print_working_dir(session)),
        Command::Date => Ok(system::show_date_time()),
        Command::Info => Ok(system::show_system_info(session)),
        Command::Which(name) => system::which_command(name),
        Command::Tree(path) => navigate::show_tree(session, path),
        Command::Count(path) => navigate::count_files(session, path),
        Command::Empty(name) => files::create_empty_file(session, name),
        Command::Mkdir(name) => files::create_directory(session, name),
        Command::Touch(name) => files::touch_file(session, name),
        Command::Hash(name) => view::hash_file(session, name),
        Command::Lines(name) => view::count_lines(session, name),
        Command::Replace { old, new, file } => files::replace_in_file(session, old, new, file),
        Command::Help => Ok(EXTENDED_HELP.to_string()),
        Command::Exit => Ok(String::new()),
    }
}
