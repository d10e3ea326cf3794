use crate::navigation::{NavEvent, Page};
use crate::pages::{App, Outcome};
use anyhow::{Context, Result};
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

pub const HELP: &str = "\
Commands:
  home | properties | contact     switch page
  go <page> [id]                  navigate, optionally selecting a property
  open <n|id>                     open listing number n (or by id)
  back                            back to the listings
  filters                         show/hide the filter panel
  set <field> <value...>          edit a filter (query, type, listing, min, max,
                                  beds, city) or form field (name, email, phone, message)
  search | reset                  apply or clear the filters
  send                            submit the form on this page
  show | help | quit";

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Go(NavEvent),
    Open(String),
    Back,
    ToggleFilters,
    Set { field: String, value: String },
    Search,
    Reset,
    Send,
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "" | "show" => Ok(Command::Show),
            "home" => Ok(Command::Go(NavEvent::to(Page::Home))),
            "properties" | "listings" => Ok(Command::Go(NavEvent::to(Page::Properties))),
            "contact" => Ok(Command::Go(NavEvent::to(Page::Contact))),
            "go" => {
                let mut args = rest.split_whitespace();
                let page = args
                    .next()
                    .ok_or_else(|| "usage: go <page> [id]".to_string())?
                    .parse::<Page>()?;
                Ok(Command::Go(NavEvent {
                    page,
                    property_id: args.next().map(str::to_string),
                }))
            }
            "open" if !rest.is_empty() => Ok(Command::Open(rest.to_string())),
            "open" => Err("usage: open <n|id>".to_string()),
            "back" => Ok(Command::Back),
            "filters" => Ok(Command::ToggleFilters),
            "set" => {
                let (field, value) = match rest.split_once(char::is_whitespace) {
                    Some((field, value)) => (field, value.trim()),
                    None => (rest, ""),
                };
                if field.is_empty() {
                    return Err("usage: set <field> <value...>".to_string());
                }
                Ok(Command::Set {
                    field: field.to_string(),
                    value: value.to_string(),
                })
            }
            "search" => Ok(Command::Search),
            "reset" => Ok(Command::Reset),
            "send" | "submit" => Ok(Command::Send),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(format!("unknown command '{}' (try `help`)", other)),
        }
    }
}

/// Read commands until `quit` or end of input, writing each outcome
pub async fn run<R, W>(app: &mut App, input: R, mut output: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    write_out(&mut output, &app.render()).await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        debug!("Command: {}", line);

        let outcome = match line.parse::<Command>() {
            Ok(command) => app.execute(command).await,
            Err(message) => Outcome::Notice(message),
        };

        match outcome {
            Outcome::Screen(screen) => write_out(&mut output, &screen).await?,
            Outcome::Notice(message) => write_out(&mut output, &message).await?,
            Outcome::Alert(message) => {
                write_out(&mut output, &format!("⚠️  {}", message)).await?
            }
            Outcome::Quit => break,
        }
    }

    info!("👋 Goodbye");
    Ok(())
}

async fn write_out<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> Result<()> {
    output.write_all(text.as_bytes()).await?;
    if !text.ends_with('\n') {
        output.write_all(b"\n").await?;
    }
    output.write_all(b"> ").await?;
    output.flush().await.context("Failed to write output")?;
    Ok(())
}
