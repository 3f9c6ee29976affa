//! Terminal rendering for the spin animation and the committed pick.

use std::io::{self, Write};

use roulette_core::links;
use roulette_core::models::{Entry, Status};

const RESET: &str = "\x1b[0m";

/// Overwrite the current line with an interim spin title.
pub fn spin_frame(title: &str) {
    print!("\r\x1b[2K  {title}");
    let _ = io::stdout().flush();
}

/// Clear the spin line before printing the result.
pub fn end_spin() {
    print!("\r\x1b[2K");
    let _ = io::stdout().flush();
}

/// ANSI color approximating the list's status palette.
fn status_color(status: Status) -> &'static str {
    match status {
        Status::Playable => "\x1b[32m",
        Status::Ingame => "\x1b[33m",
        Status::Intro => "\x1b[38;5;208m",
        Status::Loadable => "\x1b[31m",
        Status::Nothing => "\x1b[90m",
    }
}

/// Print the committed pick with its metadata, icon, and links.
pub fn result(entry: &Entry, icon_url: &str, dark: bool) {
    let title_style = if dark { "\x1b[1;97m" } else { "\x1b[1m" };
    println!("{title_style}{}{RESET}", entry.display_title());
    println!(
        "  ID: {}  Status: {}{}{RESET}  Region: {}  Media: {}  Date: {}",
        entry.id,
        status_color(entry.status),
        entry.status,
        entry.region().full_name(),
        entry.media_type(),
        entry.display_date(),
    );
    println!("  Icon:  {icon_url}");
    println!("  Wiki:  {}", links::wiki_url(entry));
    if let Some(url) = links::forum_url(entry) {
        println!("  Forum: {url}");
    }
    if let Some(url) = links::store_url(entry) {
        println!("  Store: {url}");
    }
}
