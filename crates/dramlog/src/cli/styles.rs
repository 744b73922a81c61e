use console::Style;
use once_cell::sync::Lazy;

pub static INDEX: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static QUANTITY: Lazy<Style> = Lazy::new(|| Style::new().cyan());
pub static TIME: Lazy<Style> = Lazy::new(|| Style::new().color256(245).italic());
pub static TOTAL: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static WARNING: Lazy<Style> = Lazy::new(|| Style::new().yellow());
