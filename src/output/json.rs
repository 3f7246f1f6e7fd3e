//! JSON output formatting

use std::io;

use super::Listing;

/// Print the listing as pretty-printed JSON to stdout.
pub fn print_json(listing: &Listing) -> io::Result<()> {
    let json = serde_json::to_string_pretty(listing).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
