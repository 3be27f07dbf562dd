//! Shell command parsing and dispatch.

use roster_core::RegistrationNumber;
use roster_executor::{FormValues, Notification, Roster};

use crate::render;

const HELP: &str = "\
Commands:
  list                               show all users
  json                               show all users as JSON
  get <regno>                        show one user
  add <name> <designation> <regno>   add a user
  edit <regno> <name> <designation>  change a user's name and designation
  delete <regno>                     remove a user
  help                               show this message
  quit                               leave the shell";

/// A parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    List,
    Json,
    Get(String),
    Add {
        name: String,
        designation: String,
        reg_no: String,
    },
    Edit {
        reg_no: String,
        name: String,
        designation: String,
    },
    Delete(String),
    Help,
    Quit,
}

/// Whether the shell should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Split a line with shell quoting rules and map it to a command.
///
/// Blank lines parse to `None`.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, String> {
    let words = shlex::split(line).ok_or_else(|| "unbalanced quotes".to_string())?;
    let Some((head, args)) = words.split_first() else {
        return Ok(None);
    };

    let cmd = match (head.to_ascii_lowercase().as_str(), args) {
        ("list" | "ls", []) => ShellCommand::List,
        ("json", []) => ShellCommand::Json,
        ("get", [reg_no]) => ShellCommand::Get(reg_no.clone()),
        ("add", [name, designation, reg_no]) => ShellCommand::Add {
            name: name.clone(),
            designation: designation.clone(),
            reg_no: reg_no.clone(),
        },
        ("edit", [reg_no, name, designation]) => ShellCommand::Edit {
            reg_no: reg_no.clone(),
            name: name.clone(),
            designation: designation.clone(),
        },
        ("delete" | "del" | "rm", [reg_no]) => ShellCommand::Delete(reg_no.clone()),
        ("help" | "?", []) => ShellCommand::Help,
        ("quit" | "exit", []) => ShellCommand::Quit,
        (name, _) => return Err(format!("unknown command or wrong arguments: {}", name)),
    };
    Ok(Some(cmd))
}

/// Run a command. `Err` means the roster rejected it; the message has
/// already been printed.
pub fn run(roster: &mut Roster, cmd: ShellCommand) -> Result<Flow, ()> {
    match cmd {
        ShellCommand::List => println!("{}", render::table(roster.records())),
        ShellCommand::Json => match render::json(roster.records()) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("(error) {}", e);
                return Err(());
            }
        },
        ShellCommand::Get(reg_no) => {
            let key = parse_key(&reg_no)?;
            match roster.get(key) {
                Ok(Some(record)) => println!("{}", render::table(std::slice::from_ref(&record))),
                Ok(None) => println!("(nil)"),
                Err(e) => return report(Notification::from_error(&e)),
            }
        }
        ShellCommand::Add {
            name,
            designation,
            reg_no,
        } => {
            if let Err(e) = roster.open_create() {
                return report(Notification::from_error(&e));
            }
            submit(roster, FormValues::new(name, designation, reg_no))?;
        }
        ShellCommand::Edit {
            reg_no,
            name,
            designation,
        } => {
            let key = parse_key(&reg_no)?;
            let view = match roster.open_edit(key) {
                Ok(view) => view,
                Err(e) => return report(Notification::from_error(&e)),
            };
            submit(
                roster,
                FormValues::new(name, designation, view.values.registration_number),
            )?;
        }
        ShellCommand::Delete(reg_no) => {
            let key = parse_key(&reg_no)?;
            report(roster.delete_row(key))?;
        }
        ShellCommand::Help => println!("{}", HELP),
        ShellCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

/// Submit the open dialog. The shell has no dialog to leave open, so a
/// rejected submit cancels it.
fn submit(roster: &mut Roster, values: FormValues) -> Result<(), ()> {
    match roster.submit(values) {
        Ok(note) => report(note).map(|_| ()),
        Err(e) => {
            let _ = roster.cancel();
            report(Notification::from_error(&e)).map(|_| ())
        }
    }
}

fn report(note: Notification) -> Result<Flow, ()> {
    if note.is_success() {
        println!("(ok) {}", note);
        Ok(Flow::Continue)
    } else {
        eprintln!("(error) {}", note);
        Err(())
    }
}

fn parse_key(text: &str) -> Result<RegistrationNumber, ()> {
    text.parse::<RegistrationNumber>().map_err(|_| {
        eprintln!("(error) Reg No must be a whole number");
    })
}
