//! Line-oriented front-end: parses input into commands and prints the
//! regions each command invalidates.

use std::io::{BufRead, Write};

use digimenu_catalog::Category;
use digimenu_core::ProductId;

use crate::error::KioskError;
use crate::render::render_regions;
use crate::session::{MenuSession, UiCommand};

pub const HELP: &str = "\
comandos:
  cat <categoria>   lanches | pasteis | bebidas | sobremesas
  add <id>          adiciona uma unidade
  rm <id>           remove uma unidade
  review            abre a revisão do pedido
  close             fecha a revisão
  checkout          mostra o link do WhatsApp
  json              estado da tela em JSON
  help              esta ajuda
  quit              sair
";

/// One parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellInput {
    Command(UiCommand),
    Checkout,
    Json,
    Help,
    Quit,
}

fn product_arg(verb: &str, arg: Option<&str>) -> Result<ProductId, KioskError> {
    let raw = arg.ok_or_else(|| KioskError::input(format!("usage: {verb} <id>")))?;
    Ok(raw.parse::<ProductId>()?)
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<ShellInput>, KioskError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let arg = words.next();
    if words.next().is_some() {
        return Err(KioskError::input(format!("too many arguments for '{verb}'")));
    }

    let input = match verb.to_lowercase().as_str() {
        "cat" | "category" => {
            let raw = arg.ok_or_else(|| KioskError::input("usage: cat <categoria>"))?;
            ShellInput::Command(UiCommand::SelectCategory(raw.parse()?))
        }
        "add" | "+" => ShellInput::Command(UiCommand::Add(product_arg(verb, arg)?)),
        "rm" | "remove" | "-" => ShellInput::Command(UiCommand::Remove(product_arg(verb, arg)?)),
        "review" => ShellInput::Command(UiCommand::OpenReview),
        "close" => ShellInput::Command(UiCommand::CloseReview),
        "checkout" => ShellInput::Checkout,
        "json" => ShellInput::Json,
        "help" | "?" => ShellInput::Help,
        "quit" | "exit" | "q" => ShellInput::Quit,
        other => match (other.parse::<Category>(), arg) {
            // A bare category name behaves like its button.
            (Ok(category), None) => ShellInput::Command(UiCommand::SelectCategory(category)),
            _ => return Err(KioskError::input(format!("unknown command '{verb}' (try help)"))),
        },
    };
    Ok(Some(input))
}

/// Drive `session` from `input` until EOF or `quit`.
///
/// Input and command errors are printed and the loop continues; only IO and
/// serialization failures end it.
pub fn run<R: BufRead, W: Write>(
    session: &mut MenuSession,
    input: R,
    mut output: W,
) -> Result<(), KioskError> {
    write!(output, "{}", session.view())?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        let parsed = match parse_line(&line) {
            Ok(Some(parsed)) => parsed,
            Ok(None) => continue,
            Err(e) => {
                writeln!(output, "erro: {e}")?;
                continue;
            }
        };

        match parsed {
            ShellInput::Command(command) => match session.update(command) {
                Ok(redraw) => write!(output, "{}", render_regions(&session.view(), redraw))?,
                Err(e) => writeln!(output, "erro: {e}")?,
            },
            ShellInput::Checkout => writeln!(output, "{}", session.checkout_link())?,
            ShellInput::Json => writeln!(output, "{}", serde_json::to_string_pretty(&session.view())?)?,
            ShellInput::Help => write!(output, "{HELP}")?,
            ShellInput::Quit => break,
        }
        output.flush()?;
    }

    tracing::info!(
        session_id = %session.id(),
        items = session.cart().total_item_count(),
        "menu session ended"
    );
    Ok(())
}
