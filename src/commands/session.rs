//! Line-oriented event loops for the interactive `session` commands.
//!
//! One input line is one event; each handler runs to completion before the
//! next line is read. Domain errors are reported and the loop keeps going.

use crate::commands::contacts::{is_yes, DELETE_PROMPT};
use crate::domain::{ContactError, ContactField};
use crate::services::contact_store::ContactStore;
use crate::services::editor::{ContactEditor, DialogOutcome};
use crate::services::session::Session;
use std::io::{BufRead, Lines, Write};

const CONTACT_HELP: &str = "\
commands:
  list               show the visible contacts
  filter [TERM]      live filter on name or phone (empty clears)
  select <ROW>       select a row from the visible list
  clear              clear the selection
  show               show the selected contact
  add                add a contact
  edit               edit the selected contact
                     (blank keeps a field, `-` clears it, `.` cancels)
  delete             delete the selected contact
  quit               leave the session";

/// Input lines plus the writer prompts and results go to.
pub struct Console<R, W> {
    lines: Lines<R>,
    out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self {
            lines: input.lines(),
            out,
        }
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    /// `None` on end of input.
    pub fn prompt(&mut self, text: &str) -> anyhow::Result<Option<String>> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        self.next_line()
    }

    pub fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        match self.lines.next() {
            Some(line) => Ok(Some(line?)),
            None => Ok(None),
        }
    }

    pub fn say(&mut self, text: impl std::fmt::Display) -> anyhow::Result<()> {
        writeln!(self.out, "{}", text)?;
        Ok(())
    }
}

pub fn run_contact_session<R: BufRead, W: Write>(
    store: &mut ContactStore,
    mut console: Console<R, W>,
) -> anyhow::Result<Console<R, W>> {
    let mut session = Session::new();
    print_rows(&mut console, &session, store)?;
    while let Some(line) = console.prompt("> ")? {
        let line = line.trim();
        let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();
        let result = match cmd {
            "" => Ok(()),
            "quit" | "exit" => break,
            "help" => console.say(CONTACT_HELP),
            "list" => print_rows(&mut console, &session, store),
            "filter" => {
                session.set_filter(store, rest);
                print_rows(&mut console, &session, store)
            }
            "select" => select(&mut console, &mut session, store, rest),
            "clear" => {
                session.clear_selection();
                Ok(())
            }
            "show" => show(&mut console, &session, store),
            "add" => add(&mut console, &mut session, store),
            "edit" => edit(&mut console, &mut session, store),
            "delete" => delete(&mut console, &mut session, store),
            other => console.say(format!("unknown command: {} (try `help`)", other)),
        };
        if let Err(e) = result {
            match e.downcast::<ContactError>() {
                Ok(domain) => report(&mut console, &domain)?,
                Err(fatal) => return Err(fatal),
            }
        }
    }
    Ok(console)
}

type Step = anyhow::Result<()>;

fn report<R: BufRead, W: Write>(console: &mut Console<R, W>, e: &ContactError) -> Step {
    match e {
        ContactError::Io { .. } => {
            tracing::warn!(error = %e, "save failed, change discarded");
            console.say(format!("warning: {} (change discarded)", e))
        }
        _ => console.say(format!("error: {}", e)),
    }
}

fn print_rows<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &Session,
    store: &ContactStore,
) -> Step {
    let rows = session.visible_rows(store);
    if rows.is_empty() {
        return console.say("(no contacts)");
    }
    for (i, row) in rows.iter().enumerate() {
        let marker = if session.selection() == Some(row.id) { '*' } else { ' ' };
        console.say(format!("{}{:>3}  {}", marker, i + 1, row.label))?;
    }
    Ok(())
}

fn select<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut Session,
    store: &ContactStore,
    arg: &str,
) -> Step {
    let row: usize = match arg.parse() {
        Ok(n) if n > 0 => n,
        _ => return console.say("usage: select <ROW> (rows start at 1)"),
    };
    match session.select_row(store, row - 1) {
        Ok(_) => print_rows(console, session, store),
        Err(ContactError::NoSuchRow { visible, .. }) => {
            console.say(format!("error: no row {} ({} shown)", row, visible))
        }
        Err(e) => Err(e.into()),
    }
}

fn show<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &Session,
    store: &ContactStore,
) -> Step {
    let contact = session.selected(store).ok_or(ContactError::NoSelection)?;
    for field in ContactField::ALL {
        console.say(format!("{}: {}", field.label(), contact.record.get(field)))?;
    }
    Ok(())
}

fn add<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut Session,
    store: &mut ContactStore,
) -> Step {
    let outcome = run_editor(console, ContactEditor::new())?;
    match session.add(store, outcome)? {
        Some(id) => {
            let label = store.get(id).map(|c| c.record.label()).unwrap_or_default();
            console.say(format!("added {}", label))?;
            print_rows(console, session, store)
        }
        None => console.say("cancelled"),
    }
}

fn edit<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut Session,
    store: &mut ContactStore,
) -> Step {
    let editor = match session.selected(store) {
        Some(contact) => ContactEditor::edit(contact),
        None => return Err(ContactError::NoSelection.into()),
    };
    let outcome = run_editor(console, editor)?;
    if session.update_selected(store, outcome)? {
        console.say("updated")?;
        print_rows(console, session, store)
    } else {
        console.say("cancelled")
    }
}

fn delete<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut Session,
    store: &mut ContactStore,
) -> Step {
    if session.selected(store).is_none() {
        return Err(ContactError::NoSelection.into());
    }
    let answer = console.prompt(&format!("{}: ", DELETE_PROMPT))?;
    let confirmed = answer.as_deref().map(is_yes).unwrap_or(false);
    match session.delete_selected(store, confirmed)? {
        Some(removed) => {
            console.say(format!("deleted {}", removed.record.label()))?;
            print_rows(console, session, store)
        }
        None => console.say("cancelled"),
    }
}

/// Prompts for each field. In edit mode a blank answer keeps the current
/// value and a lone `-` empties it. A lone `.` or end of input cancels.
fn run_editor<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    mut editor: ContactEditor,
) -> anyhow::Result<DialogOutcome> {
    for field in ContactField::ALL {
        let text = if editor.is_editing() {
            format!("{} [{}]: ", field.label(), editor.field(field))
        } else {
            format!("{}: ", field.label())
        };
        let Some(answer) = console.prompt(&text)? else {
            return Ok(editor.cancel());
        };
        match answer.trim() {
            "." => return Ok(editor.cancel()),
            "" if editor.is_editing() => {}
            "-" if editor.is_editing() => {
                editor.set(field, "");
            }
            _ => {
                editor.set(field, answer);
            }
        }
    }
    Ok(editor.confirm())
}
