use crate::cli::{Cli, Commands, EditContactArgs, NewContactArgs};
use crate::commands::session::{run_contact_session, Console};
use crate::domain::{Contact, ContactError, ContactField, ContactRecord};
use crate::services::contact_store::ContactStore;
use crate::services::editor::ContactEditor;
use crate::services::output::{print_one, print_out};
use std::io::BufRead;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this contact? [y/N]";

pub fn handle_contact_commands(cli: &Cli, store: &mut ContactStore) -> anyhow::Result<()> {
    match &cli.command {
        Commands::List => {
            let all: Vec<&Contact> = store.iter().collect();
            print_out(cli.json, &all, row_line)?;
        }
        Commands::Search { term } => {
            let hits: Vec<&Contact> = store.search(term.as_deref().unwrap_or("")).collect();
            print_out(cli.json, &hits, row_line)?;
        }
        Commands::Show { id } => {
            let contact = store.get(*id).ok_or(ContactError::NotFound(*id))?;
            print_one(cli.json, contact, detail_text)?;
        }
        Commands::Add { fields } => {
            let id = store.add(new_record(fields))?;
            let contact = store.get(id).ok_or(ContactError::NotFound(id))?;
            print_one(cli.json, contact, |c| format!("added {}\t{}", c.id, c.record.label()))?;
        }
        Commands::Update { id, fields } => {
            let current = store.get(*id).ok_or(ContactError::NotFound(*id))?;
            let record = apply_edits(ContactEditor::edit(current), fields)
                .confirm()
                .into_record()
                .unwrap_or_default();
            store.update(*id, record)?;
            let contact = store.get(*id).ok_or(ContactError::NotFound(*id))?;
            print_one(cli.json, contact, |c| {
                format!("updated {}\t{}", c.id, c.record.label())
            })?;
        }
        Commands::Delete { id, yes } => {
            if store.get(*id).is_none() {
                return Err(ContactError::NotFound(*id).into());
            }
            if !*yes && !confirm_on_stdin()? {
                print_one(cli.json, "cancelled", |_| "delete cancelled".to_string())?;
                return Ok(());
            }
            let removed = store.delete(*id)?;
            print_one(cli.json, removed, |c| {
                format!("deleted {}\t{}", c.id, c.record.label())
            })?;
        }
        Commands::Session => {
            let stdin = std::io::stdin();
            let console = Console::new(stdin.lock(), std::io::stdout());
            run_contact_session(store, console)?;
        }
    }
    Ok(())
}

fn row_line(c: &&Contact) -> String {
    format!("{}\t{}", c.id, c.record.label())
}

fn detail_text(c: &&Contact) -> String {
    let mut lines = vec![format!("id: {}", c.id)];
    for field in ContactField::ALL {
        lines.push(format!(
            "{}: {}",
            field.label().to_lowercase(),
            c.record.get(field)
        ));
    }
    lines.join("\n")
}

fn new_record(fields: &NewContactArgs) -> ContactRecord {
    let mut editor = ContactEditor::new();
    editor
        .set(ContactField::Name, fields.name.as_str())
        .set(ContactField::Phone, fields.phone.as_str())
        .set(ContactField::Email, fields.email.as_str())
        .set(ContactField::Address, fields.address.as_str());
    editor.confirm().into_record().unwrap_or_default()
}

fn apply_edits(mut editor: ContactEditor, fields: &EditContactArgs) -> ContactEditor {
    let edits = [
        (ContactField::Name, &fields.name),
        (ContactField::Phone, &fields.phone),
        (ContactField::Email, &fields.email),
        (ContactField::Address, &fields.address),
    ];
    for (field, value) in edits {
        if let Some(v) = value {
            editor.set(field, v.as_str());
        }
    }
    editor
}

fn confirm_on_stdin() -> anyhow::Result<bool> {
    eprint!("{}: ", DELETE_PROMPT);
    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

pub(crate) fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
