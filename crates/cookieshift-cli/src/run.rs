//! Batch conversion of JSON cookie documents.

use std::io::Read;
use std::path::Path;

use cookieshift_convert::{
    to_browser_format, to_browser_format_all, to_jar_format, to_jar_format_all, BrowserCookie,
    JarCookie,
};
use cookieshift_core::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Which way to translate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    ToJar,
    ToBrowser,
}

impl Direction {
    pub fn from_command(command: &str) -> Option<Self> {
        match command {
            "to-jar" => Some(Self::ToJar),
            "to-browser" => Some(Self::ToBrowser),
            _ => None,
        }
    }
}

/// A document holds either a single cookie object or an array of them;
/// the output keeps the same outer shape.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum Batch<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> Batch<T> {
    fn len(&self) -> usize {
        match self {
            Self::Many(items) => items.len(),
            Self::One(_) => 1,
        }
    }
}

/// Read the input document from a file, or stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

/// Convert a JSON document and render the result.
///
/// A jar cookie without a domain fails the whole document.
pub fn convert(direction: Direction, input: &str, pretty: bool) -> Result<String> {
    match direction {
        Direction::ToJar => {
            let batch: Batch<BrowserCookie> = serde_json::from_str(input)?;
            let converted = match batch {
                Batch::Many(cookies) => Batch::Many(to_jar_format_all(&cookies)),
                Batch::One(cookie) => Batch::One(to_jar_format(&cookie)),
            };
            info!("Converted {} browser cookies to jar form", converted.len());
            render(&converted, pretty)
        }
        Direction::ToBrowser => {
            let batch: Batch<JarCookie> = serde_json::from_str(input)?;
            let converted = match batch {
                Batch::Many(cookies) => Batch::Many(to_browser_format_all(&cookies)?),
                Batch::One(cookie) => Batch::One(to_browser_format(&cookie)?),
            };
            info!("Converted {} jar cookies to browser form", converted.len());
            render(&converted, pretty)
        }
    }
}

fn render<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
