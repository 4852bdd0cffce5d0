//! Mechanism for loading settings from simple configuration files
//!
//! Configuration files follow the format of the Fortran-era steering files:
//! the first whitespace-separated chunk of text on each line is the value of
//! the next setting, and whatever follows it on the line is free commentary.
//! Blank lines are ignored, and so are lines whose first chunk starts with `#`.

use crate::Result;

use eyre::{format_err, Error, WrapErr};

use std::{fs::File, io::Read, path::Path, str::FromStr};

/// Read out a configuration file or die trying
pub fn read_file(file_name: impl AsRef<Path>) -> Result<String> {
    let file_name = file_name.as_ref();
    let mut config_file = File::open(file_name)
        .wrap_err_with(|| format!("Could not open {}", file_name.display()))?;
    let mut buffer = String::new();
    config_file.read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Ordered sequence of configuration values
pub struct ConfigItems<'data> {
    values: Box<dyn Iterator<Item = &'data str> + 'data>,
}
//
impl<'data> ConfigItems<'data> {
    /// Prepare to iterate over the values of a configuration file's contents
    pub fn new(text: &'data str) -> Self {
        let values = text
            .lines()
            .filter_map(|line| line.split_whitespace().next())
            .filter(|value| !value.starts_with('#'));
        Self {
            values: Box::new(values),
        }
    }

    /// Fetch the next configuration item, tagging it with the name of the
    /// setting which it is supposed to fill to ease error reporting
    pub fn next_item(&mut self, name: &'static str) -> Result<ConfigItem<'data>> {
        self.values
            .next()
            .map(|data| ConfigItem::new(name, data))
            .ok_or_else(|| format_err!("Missing configuration of {}", name))
    }
}

/// A value from the configuration file, tagged with the setting which it
/// is supposed to map for error reporting purposes.
pub struct ConfigItem<'data> {
    name: &'static str,
    data: &'data str,
}
//
impl<'data> ConfigItem<'data> {
    /// Build a config item from a setting tag and raw data
    fn new(name: &'static str, data: &'data str) -> Self {
        Self { name, data }
    }

    /// Raw text of this item
    pub fn as_str(&self) -> &'data str {
        self.data
    }

    /// Parse this data using Rust's standard parsing logic
    pub fn parse<T: FromStr>(self) -> Result<T>
    where
        <T as FromStr>::Err: ::std::error::Error + Send + Sync + 'static,
    {
        self.data
            .parse::<T>()
            .map_err(Error::new)
            .wrap_err(format!("Could not parse configuration of {}", self.name))
    }

    /// Parse this data using special logic which handles Fortran's bool syntax
    pub fn parse_bool(self) -> Result<bool> {
        match self.data.to_lowercase().as_str() {
            // Handle FORTRAN booleans as a special case
            ".true." => Ok(true),
            ".false." => Ok(false),
            // Integer switches are common in steering files too
            "0" => Ok(false),
            "1" => Ok(true),
            // Delegate other booleans to the standard Rust parser
            _ => self.parse::<bool>(),
        }
    }

    /// Parse a count where any negative value stands for "no limit"
    pub fn parse_limit(self) -> Result<Option<usize>> {
        let name = self.name;
        let value = self.parse::<i64>()?;
        if value < 0 {
            Ok(None)
        } else {
            usize::try_from(value)
                .map(Some)
                .wrap_err(format!("Configuration of {} is out of range", name))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_come_in_order() {
        let text = "12   num_things\n\n   # commented out\n.TRUE. flag\n-1 limit\n";
        let mut items = ConfigItems::new(text);
        assert_eq!(items.next_item("num").unwrap().parse::<u32>().unwrap(), 12);
        assert!(items.next_item("flag").unwrap().parse_bool().unwrap());
        assert_eq!(items.next_item("limit").unwrap().parse_limit().unwrap(), None);
        let missing = items.next_item("extra").err().unwrap();
        assert!(missing.to_string().contains("extra"));
    }

    #[test]
    fn parse_errors_name_the_setting() {
        let mut items = ConfigItems::new("abc");
        let err = items.next_item("energy").unwrap().parse::<f64>().unwrap_err();
        assert!(format!("{err:?}").contains("energy"));
    }

    #[test]
    fn bool_syntaxes() {
        for (text, expected) in [(".false.", false), ("1", true), ("true", true), ("0", false)] {
            let mut items = ConfigItems::new(text);
            assert_eq!(items.next_item("b").unwrap().parse_bool().unwrap(), expected);
        }
        let mut items = ConfigItems::new("maybe");
        assert!(items.next_item("b").unwrap().parse_bool().is_err());
    }

    #[test]
    fn limits() {
        let mut items = ConfigItems::new("250\n-1");
        assert_eq!(items.next_item("a").unwrap().parse_limit().unwrap(), Some(250));
        assert_eq!(items.next_item("b").unwrap().parse_limit().unwrap(), None);
    }
}
