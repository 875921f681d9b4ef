//! The interactive menu loop and the operations it dispatches to.

use std::io::{BufRead, Write};

use anyhow::Context;
use colored::Colorize;
use stockroom_store::{Inventory, InventoryFile, StoreError};
use stockroom_types::{format_decimal, parse_cost, parse_quantity, ShoeRecord};
use tracing::{debug, error};

use crate::config::{SavePolicy, StockroomConfig};
use crate::console::Console;
use crate::menu::{Menu, MenuChoice};

const NO_ITEMS: &str = "No shoes in inventory.";

/// Whether the menu loop keeps going after an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// One operator session: the inventory, its backing file, and the console.
pub struct Session<R, W> {
    inventory: Inventory,
    file: InventoryFile,
    config: StockroomConfig,
    console: Console<R, W>,
    /// Records added since the file was last written.
    unsaved: usize,
    /// The file exists but could not be read; saving would discard its contents.
    load_failed: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Load the inventory file and start a session over it.
    ///
    /// A missing or unreadable file is reported and the session starts with an
    /// empty inventory. Malformed lines are reported and left out. An existing
    /// file that could not be read is never overwritten by this session.
    pub fn open(config: StockroomConfig, mut console: Console<R, W>) -> anyhow::Result<Self> {
        let file = InventoryFile::new(config.file.clone());
        let mut load_failed = false;
        let inventory = match file.load() {
            Ok(report) => {
                for skipped in &report.skipped {
                    console.say(
                        format!(
                            "Warning: skipped line {} ({}): {}",
                            skipped.line_number, skipped.error, skipped.content
                        )
                        .yellow(),
                    )?;
                }
                console.say("Inventory loaded successfully.".green())?;
                report.inventory
            }
            Err(StoreError::MissingFile(path)) => {
                console.say(format!("Error: {} file not found.", path.display()).red())?;
                Inventory::new()
            }
            Err(e) => {
                error!(path = %file.path().display(), error = %e, "failed to load inventory");
                console.say(format!("An unexpected error occurred: {e}").red())?;
                console.say(
                    format!("Changes will not be saved to {}.", file.path().display()).yellow(),
                )?;
                load_failed = true;
                Inventory::new()
            }
        };

        Ok(Self {
            inventory,
            file,
            config,
            console,
            unsaved: 0,
            load_failed,
        })
    }

    /// Show the menu and dispatch choices until the operator exits or input ends.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.console.say(Menu)?;
            let Some(input) = self.console.prompt("Enter your choice: ")? else {
                break;
            };
            let flow = match MenuChoice::from_input(&input) {
                Some(choice) => self.dispatch(choice)?,
                None => {
                    self.console.say("Invalid choice. Please try again.".red())?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                break;
            }
        }
        self.farewell()
    }

    fn dispatch(&mut self, choice: MenuChoice) -> anyhow::Result<Flow> {
        debug!(?choice, "menu choice");
        match choice {
            MenuChoice::ViewAll => self.view_all()?,
            MenuChoice::Add => return self.capture(),
            MenuChoice::Restock => return self.restock_lowest(),
            MenuChoice::Search => {
                let Some(code) = self.console.prompt("Enter shoe code to search: ")? else {
                    return Ok(Flow::Exit);
                };
                self.search_by_code(&code)?;
            }
            MenuChoice::ValuePerItem => self.value_per_item()?,
            MenuChoice::HighestQuantity => self.highest_quantity()?,
            MenuChoice::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    /// Print every record in insertion order.
    pub fn view_all(&mut self) -> anyhow::Result<()> {
        if self.inventory.is_empty() {
            self.console.say(NO_ITEMS)?;
            return Ok(());
        }
        self.console.say(format!("\n{}", "=== ALL SHOES ===".bold()))?;
        for record in &self.inventory {
            self.console.say(record)?;
        }
        Ok(())
    }

    /// Ask for the five fields of a new record and add it.
    pub fn capture(&mut self) -> anyhow::Result<Flow> {
        let Some(record) = self.read_record()? else {
            return Ok(Flow::Exit);
        };
        self.add_record(record)?;
        Ok(Flow::Continue)
    }

    fn read_record(&mut self) -> anyhow::Result<Option<ShoeRecord>> {
        let c = &mut self.console;
        let Some(country) = c.prompt_field("Enter country: ")? else {
            return Ok(None);
        };
        let Some(code) = c.prompt_field("Enter shoe code: ")? else {
            return Ok(None);
        };
        let Some(product) = c.prompt_field("Enter product name: ")? else {
            return Ok(None);
        };
        let Some(cost) = c.prompt_with("Enter cost: ", "enter a decimal number", parse_cost)? else {
            return Ok(None);
        };
        let Some(quantity) = c.prompt_with("Enter quantity: ", "enter a whole number", parse_quantity)?
        else {
            return Ok(None);
        };
        Ok(Some(ShoeRecord::new(country, code, product, cost, quantity)))
    }

    /// Append a record; it reaches the file on the next save.
    pub fn add_record(&mut self, record: ShoeRecord) -> anyhow::Result<()> {
        self.inventory.add(record);
        self.unsaved += 1;
        self.console.say("Shoe added successfully.".green())?;
        if self.config.autosave == SavePolicy::EveryChange {
            self.save()?;
        }
        Ok(())
    }

    /// Offer to restock the record with the lowest quantity.
    pub fn restock_lowest(&mut self) -> anyhow::Result<Flow> {
        let Some(position) = self.inventory.lowest_stock() else {
            self.console.say(NO_ITEMS)?;
            return Ok(Flow::Continue);
        };
        if let Some(lowest) = self.inventory.get(position) {
            self.console.say(format!("Lowest stock item:\n{lowest}"))?;
        }

        let Some(answer) = self
            .console
            .prompt("Would you like to restock this item? (yes/no): ")?
        else {
            return Ok(Flow::Exit);
        };
        if !answer.trim().eq_ignore_ascii_case("yes") {
            return Ok(Flow::Continue);
        }

        let Some(amount) = self
            .console
            .prompt_parsed::<u64>("Enter quantity to add: ", "enter a whole number of zero or more")?
        else {
            return Ok(Flow::Exit);
        };
        match self.inventory.restock(position, amount) {
            Ok(_) => {
                self.console.say("Stock updated.".green())?;
                self.save()?;
            }
            Err(e @ StoreError::QuantityOverflow { .. }) => {
                self.console.say(format!("Stock not updated: {e}").red())?;
            }
            Err(e) => return Err(e.into()),
        }
        Ok(Flow::Continue)
    }

    /// Look up the first record with exactly this code.
    pub fn search_by_code(&mut self, code: &str) -> anyhow::Result<Option<ShoeRecord>> {
        match self.inventory.find_by_code(code).cloned() {
            Some(record) => {
                self.console.say("Shoe found:".green())?;
                self.console.say(&record)?;
                Ok(Some(record))
            }
            None => {
                self.console.say("Shoe not found.".yellow())?;
                Ok(None)
            }
        }
    }

    /// Print `cost * quantity` for every record.
    pub fn value_per_item(&mut self) -> anyhow::Result<()> {
        self.console.say(format!("\n{}", "=== VALUE PER ITEM ===".bold()))?;
        for item in self.inventory.valuations() {
            self.console.say(format!(
                "{}: {}{}",
                item.product,
                self.config.currency,
                format_decimal(item.value)
            ))?;
        }
        Ok(())
    }

    /// Show the record with the highest quantity as the item for sale.
    pub fn highest_quantity(&mut self) -> anyhow::Result<()> {
        let Some(record) = self
            .inventory
            .highest_stock()
            .and_then(|position| self.inventory.get(position))
        else {
            self.console.say(NO_ITEMS)?;
            return Ok(());
        };
        self.console.say(format!("\n{}", "*** FOR SALE ***".bold()))?;
        self.console.say(record)?;
        Ok(())
    }

    fn save(&mut self) -> anyhow::Result<()> {
        if self.load_failed {
            anyhow::bail!(
                "refusing to overwrite {}: it could not be read when the session started",
                self.file.path().display()
            );
        }
        self.file
            .save(&self.inventory)
            .with_context(|| format!("failed to save {}", self.file.path().display()))?;
        self.unsaved = 0;
        Ok(())
    }

    fn farewell(&mut self) -> anyhow::Result<()> {
        if self.unsaved > 0 {
            self.console.say(
                format!(
                    "Warning: {} added shoe(s) were not written to {}.",
                    self.unsaved,
                    self.file.path().display()
                )
                .yellow(),
            )?;
        }
        self.console.say("Goodbye.")?;
        Ok(())
    }

    #[cfg(test)]
    fn inventory(&self) -> &Inventory {
        &self.inventory
    }
}
