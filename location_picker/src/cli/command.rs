use clap::{Parser, Subcommand};

/// One line typed into the picker session.
#[derive(Parser, Debug)]
#[command(name = "picker", no_binary_name = true, disable_help_flag = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Search for a place by name or address
    Search {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Resolve the n-th result of the last search (1-based)
    Pick { index: usize },
    /// Use the device's current position
    Locate,
    /// Move the map marker to a new position
    Drag {
        #[arg(allow_negative_numbers = true)]
        latitude: f64,
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
    },
    /// Choose the category (Home, Office, Friends & Family or any label)
    Category { label: Vec<String> },
    /// Save the current address with the chosen category
    Save,
    /// Delete a saved address by id
    Delete { id: u64 },
    /// Reload and print the saved addresses
    List,
    /// Print the current position, address and category
    Show,
    /// Leave the session
    Quit,
}

impl SessionLine {
    pub fn parse_line(line: &str) -> Result<Self, clap::Error> {
        SessionLine::try_parse_from(line.split_whitespace())
    }
}
