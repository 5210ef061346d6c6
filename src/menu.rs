//! Interactive menu driving an [`InventoryEngine`] from a line-based console.

use std::io::{BufRead, Write};

use crate::engine::InventoryEngine;
use crate::error::Result;
use crate::item::{parse_price, parse_quantity, Item, ItemUpdate};
use crate::table;

const TITLE: &str = "Stationery Shop - Inventory";
const RULE_WIDTH: usize = 50;

/// A menu entry, numbered as shown to the operator
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Choice {
    Add,
    Remove,
    Update,
    Search,
    ListActive,
    ListRemoved,
    Exit,
}

impl Choice {
    const ALL: [Choice; 7] = [
        Choice::Add,
        Choice::Remove,
        Choice::Update,
        Choice::Search,
        Choice::ListActive,
        Choice::ListRemoved,
        Choice::Exit,
    ];

    /// Parse a menu selection such as `"3"`
    pub fn parse(input: &str) -> Option<Self> {
        let n = input.trim().parse::<usize>().ok()?;
        Self::ALL.get(n.checked_sub(1)?).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Choice::Add => "Add new item",
            Choice::Remove => "Remove item",
            Choice::Update => "Update item",
            Choice::Search => "Search items",
            Choice::ListActive => "Show all items",
            Choice::ListRemoved => "Show removed items",
            Choice::Exit => "Exit",
        }
    }
}

// Whether the menu loop keeps going after an action
enum Flow {
    Continue,
    Exit,
}

// One line of operator input
enum Answer<T> {
    Given(T),
    Blank,
    Closed,
}

pub struct Menu<E, R, W> {
    engine: E,
    input: R,
    output: W,

    // Abort on malformed numbers instead of asking again
    strict: bool,
}

impl<E, R, W> Menu<E, R, W>
where
    E: InventoryEngine,
    R: BufRead,
    W: Write,
{
    pub fn new(engine: E, input: R, output: W) -> Self {
        Self {
            engine,
            input,
            output,
            strict: false,
        }
    }

    /// Make invalid numeric input end the session with an error.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn into_engine(self) -> E {
        self.engine
    }

    /// Run until the operator picks "Exit" or the input is closed.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.show_menu()?;

            let selection = match self.ask("Select an option: ")? {
                Answer::Given(s) => s,
                Answer::Blank => String::new(),
                Answer::Closed => break,
            };

            let flow = match Choice::parse(&selection) {
                Some(Choice::Add) => self.add()?,
                Some(Choice::Remove) => self.remove()?,
                Some(Choice::Update) => self.update()?,
                Some(Choice::Search) => self.search()?,
                Some(Choice::ListActive) => {
                    writeln!(self.output, "*********** Items in stock ***********")?;
                    let rendered = table::render(self.engine.list_active());
                    self.output.write_all(rendered.as_bytes())?;
                    Flow::Continue
                }
                Some(Choice::ListRemoved) => {
                    writeln!(self.output, "*********** Removed items ***********")?;
                    let rendered = table::render(self.engine.list_removed());
                    self.output.write_all(rendered.as_bytes())?;
                    Flow::Continue
                }
                Some(Choice::Exit) => {
                    writeln!(self.output, "Thank you for using the inventory system. Goodbye!")?;
                    Flow::Exit
                }
                None => {
                    log::debug!("Unrecognized menu choice {:?}", selection);
                    writeln!(self.output, "Invalid option. Please try again.")?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                break;
            }

            if let Answer::Closed = self.ask("\nPress Enter to continue...")? {
                break;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn show_menu(&mut self) -> Result<()> {
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(self.output)?;
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output, "{:^width$}", TITLE, width = RULE_WIDTH)?;
        writeln!(self.output, "{}", rule)?;
        for (i, choice) in Choice::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, choice.label())?;
        }
        writeln!(self.output, "{}", rule)?;

        Ok(())
    }

    fn add(&mut self) -> Result<Flow> {
        let identifier = match self.ask_text("Enter unique item ID: ")? {
            Some(s) => s,
            None => return Ok(Flow::Exit),
        };

        // Checked up front so the operator is not asked for the other fields
        if self.engine.get(&identifier).is_some() {
            writeln!(self.output, "Error: ID already exists in the inventory.")?;
            return Ok(Flow::Continue);
        }

        let name = match self.ask_text("Enter item name: ")? {
            Some(s) => s,
            None => return Ok(Flow::Exit),
        };
        let quantity = match self.ask_number("Enter quantity: ", parse_quantity, false)? {
            Answer::Given(n) => n,
            _ => return Ok(Flow::Exit),
        };
        let price = match self.ask_number("Enter price: ", parse_price, false)? {
            Answer::Given(p) => p,
            _ => return Ok(Flow::Exit),
        };

        match self.engine.add(Item::new(identifier, name, quantity, price)) {
            Ok(()) => writeln!(self.output, "Item added successfully.")?,
            Err(e) if e.is_recoverable() => writeln!(self.output, "Error: {}.", e)?,
            Err(e) => return Err(e),
        }

        Ok(Flow::Continue)
    }

    fn remove(&mut self) -> Result<Flow> {
        let identifier = match self.ask_text("Enter ID of the item to remove: ")? {
            Some(s) => s,
            None => return Ok(Flow::Exit),
        };

        match self.engine.remove(&identifier) {
            Ok(_) => writeln!(self.output, "Item removed successfully.")?,
            Err(e) if e.is_recoverable() => writeln!(self.output, "Error: ID not found.")?,
            Err(e) => return Err(e),
        }

        Ok(Flow::Continue)
    }

    fn update(&mut self) -> Result<Flow> {
        let identifier = match self.ask_text("Enter ID of the item to update: ")? {
            Some(s) => s,
            None => return Ok(Flow::Exit),
        };

        let current = match self.engine.get(&identifier) {
            Some(item) => table::render(std::iter::once(item)),
            None => {
                writeln!(self.output, "Error: ID not found.")?;
                return Ok(Flow::Continue);
            }
        };

        writeln!(self.output, "Current item data:")?;
        self.output.write_all(current.as_bytes())?;

        let name = match self.ask("New name (Enter to keep current): ")? {
            Answer::Given(s) => Some(s),
            Answer::Blank => None,
            Answer::Closed => return Ok(Flow::Exit),
        };
        let quantity = match self.ask_number("New quantity (Enter to keep current): ", parse_quantity, true)? {
            Answer::Given(n) => Some(n),
            Answer::Blank => None,
            Answer::Closed => return Ok(Flow::Exit),
        };
        let price = match self.ask_number("New price (Enter to keep current): ", parse_price, true)? {
            Answer::Given(p) => Some(p),
            Answer::Blank => None,
            Answer::Closed => return Ok(Flow::Exit),
        };

        let update = ItemUpdate {
            name,
            quantity,
            price,
        };

        match self.engine.update(&identifier, update) {
            Ok(_) => writeln!(self.output, "Item updated successfully.")?,
            Err(e) if e.is_recoverable() => writeln!(self.output, "Error: ID not found.")?,
            Err(e) => return Err(e),
        }

        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow> {
        let query = match self.ask_text("Enter name or part of the name to search: ")? {
            Some(s) => s,
            None => return Ok(Flow::Exit),
        };

        let rendered = table::render(self.engine.search(&query));
        self.output.write_all(rendered.as_bytes())?;

        Ok(Flow::Continue)
    }

    // Print `prompt` and read one line, without its line ending
    fn ask(&mut self, prompt: &str) -> Result<Answer<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            log::debug!("Input closed");
            return Ok(Answer::Closed);
        }

        let line = line.trim_end_matches(&['\r', '\n'][..]);
        if line.is_empty() {
            Ok(Answer::Blank)
        } else {
            Ok(Answer::Given(line.to_owned()))
        }
    }

    // Free text where a blank line is a valid (empty) answer; `None` once input is closed
    fn ask_text(&mut self, prompt: &str) -> Result<Option<String>> {
        Ok(match self.ask(prompt)? {
            Answer::Given(s) => Some(s),
            Answer::Blank => Some(String::new()),
            Answer::Closed => None,
        })
    }

    // Ask until `parse` accepts the answer. In strict mode the first parse
    // failure is returned to the caller.
    fn ask_number<T>(
        &mut self,
        prompt: &str,
        parse: fn(&str) -> Result<T>,
        allow_blank: bool,
    ) -> Result<Answer<T>> {
        loop {
            let raw = match self.ask(prompt)? {
                Answer::Given(s) => s,
                Answer::Blank if allow_blank => return Ok(Answer::Blank),
                Answer::Blank => String::new(),
                Answer::Closed => return Ok(Answer::Closed),
            };

            match parse(&raw) {
                Ok(value) => return Ok(Answer::Given(value)),
                Err(e) if self.strict => return Err(e),
                Err(e) => writeln!(self.output, "Error: {}. Please try again.", e)?,
            }
        }
    }
}
