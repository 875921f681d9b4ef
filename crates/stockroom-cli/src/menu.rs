use std::fmt;

/// One entry of the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    ViewAll,
    Add,
    Restock,
    Search,
    ValuePerItem,
    HighestQuantity,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::ViewAll,
        MenuChoice::Add,
        MenuChoice::Restock,
        MenuChoice::Search,
        MenuChoice::ValuePerItem,
        MenuChoice::HighestQuantity,
        MenuChoice::Exit,
    ];

    /// The key the operator types to pick this entry.
    pub fn key(self) -> char {
        match self {
            MenuChoice::ViewAll => '1',
            MenuChoice::Add => '2',
            MenuChoice::Restock => '3',
            MenuChoice::Search => '4',
            MenuChoice::ValuePerItem => '5',
            MenuChoice::HighestQuantity => '6',
            MenuChoice::Exit => '7',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::ViewAll => "View all shoes",
            MenuChoice::Add => "Add new shoe",
            MenuChoice::Restock => "Restock lowest quantity",
            MenuChoice::Search => "Search shoe by code",
            MenuChoice::ValuePerItem => "View value per item",
            MenuChoice::HighestQuantity => "View highest quantity (for sale)",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Match operator input against the menu keys.
    pub fn from_input(input: &str) -> Option<Self> {
        let mut chars = input.trim().chars();
        let key = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Self::ALL.into_iter().find(|choice| choice.key() == key)
    }
}

/// The full menu as shown before each choice.
pub struct Menu;

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "======== MENU ========")?;
        for choice in MenuChoice::ALL {
            writeln!(f, "{} - {}", choice.key(), choice.label())?;
        }
        Ok(())
    }
}
