//! # Rendering Module
//!
//! Terminal output for the drink list, the running total and one-line
//! messages. Layout calculations (width, truncation, padding) happen in Rust
//! because they require Unicode-aware processing; styles come from
//! [`super::styles`] and degrade to plain text when stdout is not a terminal.

use super::styles;
use chrono::Utc;
use dramlogapp::model::Drink;
use dramlogapp::store::StoreWarning;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Configuration for list rendering.
pub const LINE_WIDTH: usize = 78;
pub const TIME_WIDTH: usize = 14;

// "NN. " + strength + volume + quantity + gap before the time column.
const FIXED_WIDTH: usize = 4 + 6 + 9 + 8 + 2;
const NAME_WIDTH: usize = LINE_WIDTH - FIXED_WIDTH - TIME_WIDTH;

/// Formats a derived quantity with the single decimal the tracker promises.
pub fn format_quantity(value: f64) -> String {
    format!("{:.1}", value)
}

/// Renders the drink list, newest first, as the list command shows it.
pub fn render_drink_list(drinks: &[Drink]) -> String {
    if drinks.is_empty() {
        return "No drinks logged yet.\n".to_string();
    }

    let now = Utc::now();
    let formatter = timeago::Formatter::new();
    let mut out = String::new();

    for (i, drink) in drinks.iter().rev().enumerate() {
        let age = (now - drink.created_at).to_std().unwrap_or_default();
        let time_ago = formatter.convert(age);

        let index_str = format!("{:>2}. ", i + 1);
        let name_str = pad(&truncate(&drink.name, NAME_WIDTH), NAME_WIDTH);
        let strength_str = format!("{:>6}", format!("{}%", drink.strength_percent));
        let volume_str = format!("{:>9}", format!("{} ml", drink.volume_ml));
        let quantity_str = format!("{:>8}", format!("{} g", format_quantity(drink.pure_alcohol)));
        let time_str = format!("{:>width$}", time_ago, width = TIME_WIDTH);

        out.push_str(&format!(
            "{}{}{}{}{}  {}\n",
            styles::INDEX.apply_to(index_str),
            name_str,
            strength_str,
            volume_str,
            styles::QUANTITY.apply_to(quantity_str),
            styles::TIME.apply_to(time_str),
        ));
    }

    out
}

/// Renders the running-total footer.
pub fn render_total(total: f64) -> String {
    format!(
        "{}\n",
        styles::TOTAL.apply_to(format!("Total: {} g pure alcohol", format_quantity(total)))
    )
}

pub fn print_success(message: &str) {
    println!("{}", styles::SUCCESS.apply_to(message));
}

pub fn print_warning(message: &str) {
    eprintln!("{}", styles::WARNING.apply_to(message));
}

pub fn print_store_warning(warning: &StoreWarning) {
    match warning {
        StoreWarning::CorruptData { detail } => print_warning(&format!(
            "Warning: stored data could not be read ({}); starting fresh",
            detail
        )),
    }
}

/// Truncates to the given display width, ellipsis included.
fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Pads to the given display width (format! counts chars, not width).
fn pad(text: &str, width: usize) -> String {
    let current = text.width();
    let mut out = text.to_string();
    if current < width {
        out.push_str(&" ".repeat(width - current));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn drink(name: &str, pure_alcohol: f64) -> Drink {
        Drink {
            id: Uuid::new_v4(),
            name: name.to_string(),
            strength_percent: 5.0,
            volume_ml: 500.0,
            pure_alcohol,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn empty_list_shows_placeholder() {
        assert_eq!(render_drink_list(&[]), "No drinks logged yet.\n");
    }

    #[test]
    fn list_is_rendered_newest_first() {
        let drinks = vec![drink("Oldest", 20.0), drink("Newest", 20.0)];
        let output = render_drink_list(&drinks);

        let newest_pos = output.find("Newest").unwrap();
        let oldest_pos = output.find("Oldest").unwrap();
        assert!(newest_pos < oldest_pos);
        assert!(output.starts_with(" 1. "));
    }

    #[test]
    fn list_shows_quantity_and_unit() {
        let output = render_drink_list(&[drink("Beer", 20.0)]);
        assert!(output.contains("20.0 g"));
        assert!(output.contains("500 ml"));
        assert!(output.contains("5%"));
    }

    #[test]
    fn long_names_are_truncated_with_ellipsis() {
        let long = "a".repeat(NAME_WIDTH * 2);
        let output = render_drink_list(&[drink(&long, 20.0)]);
        assert!(output.contains('…'));
        assert!(!output.contains(&long));
    }

    #[test]
    fn total_renders_with_one_decimal() {
        assert_eq!(render_total(0.0), "Total: 0.0 g pure alcohol\n");
        assert_eq!(render_total(12.34), "Total: 12.3 g pure alcohol\n");
    }

    #[test]
    fn truncate_respects_display_width() {
        assert_eq!(truncate("short", 10), "short");
        let cut = truncate("abcdefghij", 5);
        assert_eq!(cut, "abcd…");
        assert_eq!(cut.width(), 5);
    }

    #[test]
    fn pad_counts_display_width() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("full", 4), "full");
    }
}
