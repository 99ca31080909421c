use crate::backend::CounterBackend;
use crate::controller::CounterSyncController;
use crate::display::CounterDisplay;
use std::io::{self, Write};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Increment,
    Decrement,
    Enable,
    Disable,
    Load,
    Check,
    Mode,
    Value,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Option<Self> {
        let command = match line.trim().to_ascii_lowercase().as_str() {
            "inc" | "+" | "increment" => Command::Increment,
            "dec" | "-" | "decrement" => Command::Decrement,
            "enable" => Command::Enable,
            "disable" => Command::Disable,
            "load" => Command::Load,
            "check" => Command::Check,
            "mode" => Command::Mode,
            "value" => Command::Value,
            "quit" | "exit" => Command::Quit,
            _ => return None,
        };
        Some(command)
    }
}

/// Reads commands line by line until `quit` or end of input.
pub async fn run_session<B, D, R, W>(
    controller: &CounterSyncController<B, D>,
    reader: R,
    out: &mut W,
) -> io::Result<()>
where
    B: CounterBackend,
    D: CounterDisplay,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match Command::parse(&line) {
            Some(Command::Quit) => break,
            Some(command) => execute(controller, command, out).await?,
            None => warn!("unknown command: {}", line.trim()),
        }
    }
    Ok(())
}

pub async fn execute<B, D, W>(
    controller: &CounterSyncController<B, D>,
    command: Command,
    out: &mut W,
) -> io::Result<()>
where
    B: CounterBackend,
    D: CounterDisplay,
    W: Write,
{
    match command {
        Command::Increment => {
            controller.increment().await;
        }
        Command::Decrement => {
            controller.decrement().await;
        }
        Command::Enable => controller.enable().await,
        Command::Disable => controller.disable().await,
        Command::Load => {
            controller.load_from_backend().await;
        }
        Command::Check => {
            let status = if controller.check_connection().await {
                "connected"
            } else {
                "unreachable"
            };
            writeln!(out, "{status}")?;
        }
        Command::Mode => writeln!(out, "mode: {}", controller.mode().await)?,
        Command::Value => writeln!(out, "value: {}", controller.value().await)?,
        Command::Quit => {}
    }
    out.flush()
}
