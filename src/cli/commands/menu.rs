//! Interactive numbered menu, the terminal front end of the tracker.
//!
//! The menu reads from any `BufRead` and writes to any `Write`, so whole
//! sessions can be scripted.

use crate::cli::commands::{audit, open_store};
use crate::cli::parser::Commands;
use crate::cli::views::{NO_APPLICATIONS, render_records, render_stats};
use crate::config::Config;
use crate::core::ApplicationStore;
use crate::errors::{AppError, AppResult};
use crate::models::NewApplication;
use crate::table::TableBackend;
use crate::ui::prompt::{ask_line, ask_yes_no};
use crate::utils::date;
use std::io::{self, BufRead, Write};

const MENU: &str = "\n=== Job Application Tracker ===
1. Add a new application
2. View all applications
3. Follow-ups pending
4. View application stats
5. Delete an application
6. Exit";

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Menu) {
        let mut store = open_store(cfg)?;
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut out = io::stdout();

        let menu = Menu::new(cfg);
        menu.run(&mut store, &mut input, &mut out, |op, target, msg| {
            audit(cfg, op, target, msg)
        })?;
    }
    Ok(())
}

pub struct Menu {
    statuses: Vec<String>,
    default_status: String,
}

/// What the loop should do after an action.
enum Flow {
    Continue,
    Quit,
}

impl Menu {
    pub fn new(cfg: &Config) -> Self {
        Self {
            statuses: cfg.statuses.clone(),
            default_status: cfg.default_status.clone(),
        }
    }

    /// Run until the user picks "Exit" or input ends.
    ///
    /// `on_change(operation, target, message)` is called after every
    /// successful add or delete.
    pub fn run<B, R, W, F>(
        &self,
        store: &mut ApplicationStore<B>,
        input: &mut R,
        out: &mut W,
        mut on_change: F,
    ) -> AppResult<()>
    where
        B: TableBackend,
        R: BufRead,
        W: Write,
        F: FnMut(&str, &str, &str),
    {
        loop {
            writeln!(out, "{MENU}")?;
            let Some(choice) = ask_line(input, out, "Enter your choice (1-6): ")? else {
                break;
            };

            let flow = match choice.as_str() {
                "1" => self.add(store, input, out, &mut on_change)?,
                "2" => self.view(store, out)?,
                "3" => self.follow_ups(store, out)?,
                "4" => self.stats(store, out)?,
                "5" => self.delete(store, input, out, &mut on_change)?,
                "6" => {
                    writeln!(out, "Goodbye!")?;
                    Flow::Quit
                }
                _ => {
                    writeln!(out, "Invalid choice. Please enter a number between 1 and 6.")?;
                    Flow::Continue
                }
            };

            if let Flow::Quit = flow {
                break;
            }
        }
        Ok(())
    }

    fn add<B: TableBackend, R: BufRead, W: Write>(
        &self,
        store: &mut ApplicationStore<B>,
        input: &mut R,
        out: &mut W,
        on_change: &mut impl FnMut(&str, &str, &str),
    ) -> AppResult<Flow> {
        let status_prompt = format!(
            "Status ({}) [{}]: ",
            self.statuses.join(", "),
            self.default_status
        );

        let prompts = [
            "Enter application date (YYYY-MM-DD) or leave blank for today: ",
            "Enter company name: ",
            "Enter role: ",
            "Application method (e.g., email, portal): ",
            "Contact person (optional): ",
            status_prompt.as_str(),
            "Follow-up date (YYYY-MM-DD or leave blank): ",
            "Notes (optional): ",
        ];

        let mut answers = Vec::with_capacity(prompts.len());
        for (i, prompt) in prompts.iter().enumerate() {
            let Some(answer) = ask_line(input, out, prompt)? else {
                return Ok(Flow::Quit);
            };

            // date fields: explain the substitution the store is going to make
            if i == 0 && !answer.is_empty() && date::parse_date(&answer).is_none() {
                writeln!(out, "Invalid date format! Using today's date.")?;
            }
            if i == 6 && !answer.is_empty() && date::parse_date(&answer).is_none() {
                writeln!(out, "Invalid follow-up date! Leaving blank.")?;
            }
            answers.push(answer);
        }

        let mut fields = answers.into_iter();
        let mut next = || fields.next().unwrap_or_default();
        let mut new_app = NewApplication {
            date: next(),
            company: next(),
            role: next(),
            method: next(),
            contact: next(),
            status: next(),
            follow_up: next(),
            notes: next(),
        };
        if new_app.status.is_empty() {
            new_app.status = self.default_status.clone();
        }

        let record = store.add(&new_app)?;
        on_change("add", &record.label(), &format!("Added on {}", record.date_str()));
        writeln!(out, "\nApplication added: {}\n", record.label())?;
        Ok(Flow::Continue)
    }

    fn view<B: TableBackend, W: Write>(
        &self,
        store: &ApplicationStore<B>,
        out: &mut W,
    ) -> AppResult<Flow> {
        let records = store.list_all()?;
        if records.is_empty() {
            writeln!(out, "\n{NO_APPLICATIONS}\n")?;
        } else {
            write!(
                out,
                "{}",
                render_records("All Job Applications", &records, date::today())
            )?;
        }
        Ok(Flow::Continue)
    }

    fn follow_ups<B: TableBackend, W: Write>(
        &self,
        store: &ApplicationStore<B>,
        out: &mut W,
    ) -> AppResult<Flow> {
        if store.count()? == 0 {
            writeln!(out, "\n{NO_APPLICATIONS}\n")?;
            return Ok(Flow::Continue);
        }

        let today = date::today();
        let pending = store.pending_follow_ups(today)?;
        if pending.is_empty() {
            writeln!(out, "\nNo follow-ups pending today.\n")?;
        } else {
            write!(out, "{}", render_records("Follow-ups Pending", &pending, today))?;
        }
        Ok(Flow::Continue)
    }

    fn stats<B: TableBackend, W: Write>(
        &self,
        store: &ApplicationStore<B>,
        out: &mut W,
    ) -> AppResult<Flow> {
        match store.stats(date::today()) {
            Ok(report) => write!(out, "{}", render_stats(&report))?,
            Err(AppError::EmptyStore) => writeln!(out, "\n{NO_APPLICATIONS}\n")?,
            Err(e) => return Err(e),
        }
        Ok(Flow::Continue)
    }

    fn delete<B: TableBackend, R: BufRead, W: Write>(
        &self,
        store: &mut ApplicationStore<B>,
        input: &mut R,
        out: &mut W,
        on_change: &mut impl FnMut(&str, &str, &str),
    ) -> AppResult<Flow> {
        let records = store.list_all()?;
        if records.is_empty() {
            writeln!(out, "\n{NO_APPLICATIONS}\n")?;
            return Ok(Flow::Continue);
        }
        write!(
            out,
            "{}",
            render_records("All Job Applications", &records, date::today())
        )?;

        let Some(answer) = ask_line(
            input,
            out,
            "\nEnter the number of the application to delete: ",
        )?
        else {
            return Ok(Flow::Quit);
        };

        let Ok(number) = answer.parse::<i64>() else {
            writeln!(out, "Invalid input. Please enter a number.")?;
            return Ok(Flow::Continue);
        };

        if number < 1 || number as usize > records.len() {
            writeln!(out, "Invalid number. No application deleted.")?;
            return Ok(Flow::Continue);
        }
        let index = number as usize;
        let label = records[index - 1].record.label();

        let question = format!("Are you sure you want to delete '{}'?", label);
        if !ask_yes_no(input, out, &question) {
            writeln!(out, "\nDeletion cancelled.\n")?;
            return Ok(Flow::Continue);
        }

        let removed = store.delete(index)?;
        on_change("del", &removed.label(), &format!("Deleted application #{}", index));
        writeln!(out, "\nApplication deleted successfully.\n")?;
        Ok(Flow::Continue)
    }
}
