//! Interactive menu - the console adapter in front of `UserStore`
//!
//! The menu owns nothing but its streams; the store is borrowed so the
//! caller decides when the connection is released.

use std::io::{self, BufRead, Write};
use std::str::FromStr;
use crate::storage::UserStore;
use crate::ui;
use crate::user::User;
use crate::{Error, Result};

/// A numbered entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Create,
    List,
    Update,
    Delete,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::Create,
        MenuChoice::List,
        MenuChoice::Update,
        MenuChoice::Delete,
        MenuChoice::Exit,
    ];

    pub fn number(&self) -> u8 {
        match self {
            MenuChoice::Create => 1,
            MenuChoice::List => 2,
            MenuChoice::Update => 3,
            MenuChoice::Delete => 4,
            MenuChoice::Exit => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Create => "Create user",
            MenuChoice::List => "List users",
            MenuChoice::Update => "Update user",
            MenuChoice::Delete => "Delete user",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1" => Ok(MenuChoice::Create),
            "2" => Ok(MenuChoice::List),
            "3" => Ok(MenuChoice::Update),
            "4" => Ok(MenuChoice::Delete),
            "5" => Ok(MenuChoice::Exit),
            other => Err(Error::InvalidInput(format!("unknown menu choice '{}'", other))),
        }
    }
}

/// Blocking prompt loop over any line reader and writer
pub struct Menu<'a, R, W> {
    store: &'a UserStore,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(store: &'a UserStore, input: R, output: W) -> Self {
        Self { store, input, output }
    }

    /// Run until the user picks Exit or input ends.
    ///
    /// A non-numeric id or age aborts the session with `Error::InvalidInput`.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;

            let Some(line) = self.read_line("Enter your choice: ")? else {
                tracing::debug!("Input closed, leaving menu");
                return Ok(());
            };

            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(_) => {
                    ui::warn(&mut self.output, "Invalid choice, please try again.")?;
                    continue;
                }
            };

            tracing::debug!(?choice, "Menu selection");
            match choice {
                MenuChoice::Create => self.create()?,
                MenuChoice::List => self.list()?,
                MenuChoice::Update => self.update()?,
                MenuChoice::Delete => self.delete()?,
                MenuChoice::Exit => {
                    writeln!(self.output, "Exiting...")?;
                    return Ok(());
                }
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        ui::section(&mut self.output, "Choose an option:")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.number(), choice.label())?;
        }
        Ok(())
    }

    fn create(&mut self) -> Result<()> {
        let name = self.prompt("Enter name: ")?;
        let age = self.prompt_number("Enter age: ")?;

        match self.store.create_user(&name, age) {
            Ok(id) => {
                let user = User::new(id, name, age);
                ui::success(&mut self.output, "User created successfully!")?;
                ui::info(&mut self.output, "Created", &user.to_string())?;
            }
            Err(Error::ConstraintViolation(reason)) => {
                ui::error(&mut self.output, &format!("Could not create user: {}", reason))?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn list(&mut self) -> Result<()> {
        let users = self.store.list_users()?;

        ui::section(&mut self.output, "Users in the database:")?;
        if users.is_empty() {
            writeln!(self.output, "{}", ui::muted("No users found."))?;
        } else {
            writeln!(self.output, "{}", ui::users_table(&users))?;
        }
        Ok(())
    }

    fn update(&mut self) -> Result<()> {
        let id = self.prompt_number("Enter id of user to update: ")?;
        let name = self.prompt("Enter new name: ")?;
        let age = self.prompt_number("Enter new age: ")?;

        match self.store.update_user(id, &name, age) {
            Ok(true) => {
                let user = User::new(id, name, age);
                ui::success(&mut self.output, "User updated successfully!")?;
                ui::info(&mut self.output, "Now", &user.to_string())?;
            }
            Ok(false) => ui::warn(&mut self.output, "User not found.")?,
            Err(Error::ConstraintViolation(reason)) => {
                ui::error(&mut self.output, &format!("Could not update user: {}", reason))?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        let id = self.prompt_number("Enter id of user to delete: ")?;

        if self.store.delete_user(id)? {
            ui::success(&mut self.output, "User deleted successfully!")?;
        } else {
            ui::warn(&mut self.output, "User not found.")?;
        }
        Ok(())
    }

    /// The line as typed, minus its line ending; `None` on end of input
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let typed = line.strip_suffix('\n').unwrap_or(&line);
        let typed = typed.strip_suffix('\r').unwrap_or(typed);
        Ok(Some(typed.to_string()))
    }

    fn prompt(&mut self, prompt: &str) -> Result<String> {
        self.read_line(prompt)?.ok_or_else(|| {
            Error::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended in the middle of an entry",
            ))
        })
    }

    fn prompt_number(&mut self, prompt: &str) -> Result<i64> {
        let raw = self.prompt(prompt)?;
        raw.trim()
            .parse::<i64>()
            .map_err(|_| Error::InvalidInput(format!("'{}' is not a whole number", raw)))
    }
}
