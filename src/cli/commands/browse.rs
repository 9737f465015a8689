//! Interactive browser: one line of input is one user interaction.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::cli::error::CliResult;
use crate::cli::render::render_view;
use crate::users::{DataController, FilterField, QueryAction, SortField, UserSource};

pub const HELP: &str = "\
Commands:
  n, next              go to the Next button's page
  p, prev              go to the Prev button's page
  page N | N           jump to page N
  sort id|name|age|gender
                       sort by a column (again to flip the order)
  gender VALUE|all     filter by gender; `all` clears it and the sort
  country VALUE|all    filter by country
  r, refresh           fetch the current page again
  h, help              show this help
  q, quit              leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Action(QueryAction),
    Next,
    Prev,
    Refresh,
    Help,
    Quit,
}

/// `all`, `any`, or nothing at all mean no constraint.
fn filter_value(rest: &[&str]) -> Option<String> {
    let value = rest.join(" ");
    match value.to_ascii_lowercase().as_str() {
        "" | "all" | "any" => None,
        _ => Some(value),
    }
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<BrowseCommand>, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((head, rest)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match head.to_ascii_lowercase().as_str() {
        "n" | "next" => BrowseCommand::Next,
        "p" | "prev" => BrowseCommand::Prev,
        "r" | "refresh" => BrowseCommand::Refresh,
        "h" | "help" | "?" => BrowseCommand::Help,
        "q" | "quit" | "exit" => BrowseCommand::Quit,
        "page" => {
            let n = rest.first().ok_or("usage: page N")?;
            let page = n
                .parse::<u32>()
                .map_err(|_| format!("not a page number: {}", n))?;
            BrowseCommand::Action(QueryAction::GoToPage(page))
        }
        "sort" => {
            let field = rest.first().ok_or("usage: sort id|name|age|gender")?;
            BrowseCommand::Action(QueryAction::ToggleSort(field.parse::<SortField>()?))
        }
        "gender" => BrowseCommand::Action(QueryAction::SetFilter {
            field: FilterField::Gender,
            value: filter_value(rest),
        }),
        "country" => BrowseCommand::Action(QueryAction::SetFilter {
            field: FilterField::Country,
            value: filter_value(rest),
        }),
        other => match other.parse::<u32>() {
            Ok(page) => BrowseCommand::Action(QueryAction::GoToPage(page)),
            Err(_) => return Err(format!("unknown command: {} (try `help`)", head)),
        },
    };
    Ok(Some(command))
}

async fn write_block<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> CliResult<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await?;
    Ok(())
}

/// Run the interactive loop until `quit` or end of input.
///
/// Fetch failures are logged and the previous page stays on screen.
pub async fn browse<S, R, W>(source: S, input: R, output: &mut W, format: &str) -> CliResult<()>
where
    S: UserSource,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut controller = DataController::new(source);
    controller.refresh().await;
    write_block(output, &render_view(&controller, format)?).await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                write_block(output, &message).await?;
                continue;
            }
        };
        debug!(?command, "Browse command");

        let action = match command {
            BrowseCommand::Quit => break,
            BrowseCommand::Help => {
                write_block(output, HELP).await?;
                continue;
            }
            BrowseCommand::Refresh => {
                controller.refresh().await;
                write_block(output, &render_view(&controller, format)?).await?;
                continue;
            }
            BrowseCommand::Next => match controller.pagination().next {
                Some(page) => QueryAction::GoToPage(page),
                None => {
                    write_block(output, "Already showing the last pages.").await?;
                    continue;
                }
            },
            BrowseCommand::Prev => match controller.pagination().prev {
                Some(page) => QueryAction::GoToPage(page),
                None => {
                    write_block(output, "Already showing the first pages.").await?;
                    continue;
                }
            },
            BrowseCommand::Action(action) => action,
        };

        controller.dispatch(action).await;
        write_block(output, &render_view(&controller, format)?).await?;
    }

    Ok(())
}
