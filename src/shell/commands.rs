//! Module `commands`
//!
//! Tokenizes a command line and maps it onto the `Command` enum, along with
//! the result types returned by the dispatcher.

use crate::error::{ShellError, ShellResult};

/// A shell command with its arguments.
///
/// Arguments are raw tokens; each handler runs its own guards on them.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Command {
    Create(String),                                     // gx
    Delete(String),                                     // gxd
    ChangeDir(String),                                  // gxc
    List,                                               // gxl
    Size(String),                                       // gxs
    Move { src: String, dst: String },                  // gxmv
    Copy { src: String, dst: String },                  // gxcp
    Find(String),                                       // gxfind
    Echo { text: String, file: String },                // gxecho
    Duplicate(String),                                  // gxdup
    Cat(String),                                        // gxcat
    Head(String),                                       // gxhead
    Tail(String),                                       // gxtail
    Grep { term: String, file: String },                // gxgrep
    Stat(String),                                       // gxstat
    Pwd,                                                // gxpwd
    Date,                                               // gxdate
    Info,                                               // gxinfo
    Which(String),                                      // gxwhich
    Tree(String),                                       // gxtree
    Count(String),                                      // gxcount
    Empty(String),                                      // gxempty
    Mkdir(String),                                      // gxmkdir
    Touch(String),                                      // gxtouch
    Hash(String),                                       // gxhash
    Lines(String),                                      // gxlines
    Replace { old: String, new: String, file: String }, // gxreplace
    Help,                                               // gxhelp
    Exit,                                               // exit, Ctrl+X
}

/// Outcome status of executing a command.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    Failure(String),
    Exit,
}

/// Full result of a command execution.
#[derive(Debug)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: Option<String>,
}

impl CommandResult {
    pub fn success(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            status: CommandStatus::Success,
            message: (!message.is_empty()).then_some(message),
        }
    }

    pub fn silent() -> Self {
        Self {
            status: CommandStatus::Success,
            message: None,
        }
    }
}

/// Splits a line on whitespace into the command token and its arguments.
///
/// Returns `None` for blank lines.
pub fn tokenize(line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = line.split_whitespace().map(str::to_string);
    let command = parts.next()?;
    Some((command, parts.collect()))
}

fn arg(args: &[String], idx: usize, usage: &str) -> ShellResult<String> {
    args.get(idx)
        .cloned()
        .ok_or_else(|| ShellError::Usage(usage.to_string()))
}

/// Maps a validated command token and its arguments onto a [`Command`].
///
/// Missing required arguments yield [`ShellError::Usage`]; surplus ones are
/// ignored.
pub fn parse_command(command: &str, args: &[String]) -> ShellResult<Command> {
    let parsed = match command {
        "exit" | "\x18" => Command::Exit,
        "gx" => Command::Create(arg(args, 0, "gx [name]")?),
        "gxd" => Command::Delete(arg(args, 0, "gxd [name]")?),
        "gxc" => Command::ChangeDir(arg(args, 0, "gxc [path]")?),
        "gxl" => Command::List,
        "gxs" => Command::Size(arg(args, 0, "gxs [name]")?),
        "gxmv" => {
            let usage = "gxmv [source] [destination]";
            Command::Move {
                src: arg(args, 0, usage)?,
                dst: arg(args, 1, usage)?,
            }
        }
        "gxcp" => {
            let usage = "gxcp [source] [destination]";
            Command::Copy {
                src: arg(args, 0, usage)?,
                dst: arg(args, 1, usage)?,
            }
        }
        "gxfind" => Command::Find(arg(args, 0, "gxfind [name]")?),
        "gxecho" => match args.split_last() {
            Some((file, text)) if !text.is_empty() => Command::Echo {
                text: text.join(" "),
                file: file.clone(),
            },
            _ => return Err(ShellError::Usage("gxecho [text] [file]".into())),
        },
        "gxdup" => Command::Duplicate(arg(args, 0, "gxdup [file]")?),
        "gxcat" => Command::Cat(arg(args, 0, "gxcat [file]")?),
        "gxhead" => Command::Head(arg(args, 0, "gxhead [file]")?),
        "gxtail" => Command::Tail(arg(args, 0, "gxtail [file]")?),
        "gxgrep" => {
            let usage = "gxgrep [text] [file]";
            Command::Grep {
                term: arg(args, 0, usage)?,
                file: arg(args, 1, usage)?,
            }
        }
        "gxstat" => Command::Stat(arg(args, 0, "gxstat [file]")?),
        "gxpwd" => Command::Pwd,
        "gxdate" => Command::Date,
        "gxinfo" => Command::Info,
        "gxwhich" => Command::Which(arg(args, 0, "gxwhich [cmd]")?),
        "gxtree" => Command::Tree(args.first().cloned().unwrap_or_else(|| ".".into())),
        "gxcount" => Command::Count(args.first().cloned().unwrap_or_else(|| ".".into())),
        "gxempty" => Command::Empty(arg(args, 0, "gxempty [file]")?),
        "gxmkdir" => Command::Mkdir(arg(args, 0, "gxmkdir [dir]")?),
        "gxtouch" => Command::Touch(arg(args, 0, "gxtouch [file]")?),
        "gxhash" => Command::Hash(arg(args, 0, "gxhash [file]")?),
        "gxlines" => Command::Lines(arg(args, 0, "gxlines [file]")?),
        "gxreplace" => {
            let usage = "gxreplace [old] [new] [file]";
            Command::Replace {
                old: arg(args, 0, usage)?,
                new: arg(args, 1, usage)?,
                file: arg(args, 2, usage)?,
            }
        }
        "gxhelp" => Command::Help,
        other => return Err(ShellError::UnknownCommand(other.to_string())),
    };
    Ok(parsed)
}
