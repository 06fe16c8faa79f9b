//! Parsing of the kiosk's typed commands.

use crate::model::MenuItemId;
use std::str::FromStr;
use thiserror::Error;

/// One line of customer input outside the payment prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Menu,
    Add(MenuItemId),
    Remove(usize),
    Order,
    Checkout,
    Restart,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GestureError {
    #[error("Unknown command `{0}`. Type `help` for the list of commands.")]
    Unknown(String),

    #[error("`{0}` needs a number, e.g. `{0} 1`.")]
    MissingArgument(&'static str),

    #[error("`{value}` is not a valid number for `{command}`.")]
    BadNumber { command: &'static str, value: String },

    #[error("`{0}` takes no arguments.")]
    UnexpectedArgument(&'static str),
}

impl FromStr for Gesture {
    type Err = GestureError;

    /// Words are case-insensitive and surrounding whitespace is ignored.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or_default().to_ascii_lowercase();
        let argument = words.next();
        if words.next().is_some() {
            return Err(GestureError::Unknown(line.trim().to_string()));
        }

        let gesture = match command.as_str() {
            "menu" => no_argument("menu", argument, Gesture::Menu)?,
            "order" => no_argument("order", argument, Gesture::Order)?,
            "checkout" => no_argument("checkout", argument, Gesture::Checkout)?,
            "restart" => no_argument("restart", argument, Gesture::Restart)?,
            "help" | "?" => no_argument("help", argument, Gesture::Help)?,
            "quit" | "exit" => no_argument("quit", argument, Gesture::Quit)?,
            "add" => Gesture::Add(MenuItemId(number("add", argument)?)),
            "remove" => Gesture::Remove(number("remove", argument)?),
            _ => return Err(GestureError::Unknown(line.trim().to_string())),
        };
        Ok(gesture)
    }
}

fn no_argument(
    command: &'static str,
    argument: Option<&str>,
    gesture: Gesture,
) -> Result<Gesture, GestureError> {
    match argument {
        None => Ok(gesture),
        Some(_) => Err(GestureError::UnexpectedArgument(command)),
    }
}

fn number<N: FromStr>(command: &'static str, argument: Option<&str>) -> Result<N, GestureError> {
    let value = argument.ok_or(GestureError::MissingArgument(command))?;
    value.parse().map_err(|_| GestureError::BadNumber {
        command,
        value: value.to_string(),
    })
}
