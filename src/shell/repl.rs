//! Interactive read-eval-print loop.
//!
//! Reads one line at a time and fully executes it before reading the next.

use log::{error, info};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::middleware::rate_limit::Clock;
use crate::shell::commands::CommandStatus;
use crate::shell::handlers::Shell;
use crate::shell::help::BANNER;

/// Runs the shell until `exit`, Ctrl+X or end of input.
pub async fn run_shell<C, R, W>(
    shell: &mut Shell<C>,
    reader: R,
    mut writer: W,
) -> std::io::Result<()>
where
    C: Clock,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    if shell.config().show_banner {
        writer.write_all(BANNER.as_bytes()).await?;
        writer.write_all(b"\n").await?;
    }

    let mut lines = reader.lines();
    loop {
        let prompt = format!(
            "\n{}\n{}",
            shell.session().current_dir().display(),
            shell.config().prompt
        );
        writer.write_all(prompt.as_bytes()).await?;
        writer.flush().await?;

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                info!("End of input, leaving shell");
                break;
            }
            Err(e) => {
                error!("Failed to read input: {}", e);
                return Err(e);
            }
        };

        let result = shell.execute_line(&line);
        if let Some(message) = result.message {
            writer.write_all(message.as_bytes()).await?;
            writer.write_all(b"\n").await?;
        }
        if result.status == CommandStatus::Exit {
            break;
        }
    }

    writer.flush().await
}
