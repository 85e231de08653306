//! Interactive admin menu

use std::io::{self, BufRead, Write};

use crate::application::AccountService;
use crate::domain::{CreateAdminDto, IdentityProvider};

pub const MENU_PROMPT: &str = "\n1. Create Admin\n2. Delete Admin\n3. Exit\nChoose: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateAdmin,
    DeleteAdmin,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::CreateAdmin),
            "2" => Some(Self::DeleteAdmin),
            "3" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Menu loop over any line source and sink.
///
/// A failed operation prints one error line and the menu comes back; only
/// "Exit" or end of input stops the loop.
pub struct AdminMenu<'a, P: IdentityProvider, R, W> {
    service: &'a AccountService<P>,
    input: R,
    output: W,
}

impl<'a, P, R, W> AdminMenu<'a, P, R, W>
where
    P: IdentityProvider,
    R: BufRead,
    W: Write,
{
    pub fn new(service: &'a AccountService<P>, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub async fn run(&mut self) -> io::Result<()> {
        loop {
            let Some(line) = self.prompt(MENU_PROMPT)? else {
                return Ok(());
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::CreateAdmin) => self.create_admin().await?,
                Some(MenuChoice::DeleteAdmin) => self.delete_admin().await?,
                Some(MenuChoice::Exit) => return Ok(()),
                None => {}
            }
        }
    }

    async fn create_admin(&mut self) -> io::Result<()> {
        writeln!(self.output, "--- CREATING NEW ADMIN ---")?;
        let Some(email) = self.prompt("Enter Admin Email: ")? else {
            return Ok(());
        };
        let Some(password) = self.prompt("Enter Temporary Password (min 6 chars): ")? else {
            return Ok(());
        };

        let dto = CreateAdminDto::new(email.trim(), password);
        match self.service.create_admin(dto).await {
            Ok(created) => {
                writeln!(
                    self.output,
                    "✅ Success! Admin created with UID: {}",
                    created.uid
                )?;
                writeln!(self.output, "They can now log in to the Dashboard.")?;
            }
            Err(e) => writeln!(self.output, "❌ Error: {}", e)?,
        }
        Ok(())
    }

    async fn delete_admin(&mut self) -> io::Result<()> {
        let Some(email) = self.prompt("Enter Email to DELETE: ")? else {
            return Ok(());
        };
        let email = email.trim();

        match self.service.delete_admin(email).await {
            Ok(uid) => writeln!(self.output, "🗑️ User {} ({}) has been deleted.", email, uid)?,
            Err(e) => writeln!(self.output, "❌ Error: {}", e)?,
        }
        Ok(())
    }

    /// Print `label` and read one line; `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
