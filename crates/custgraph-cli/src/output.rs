//! Terminal output formatting.

use colored::Colorize;
use custgraph_core::Customer;

const MISSING: &str = "-";

/// Print customers as a table.
pub fn print_customers_table(customers: &[Customer]) {
    if customers.is_empty() {
        println!("{}", "No customers found.".dimmed());
        return;
    }

    println!(
        "{:<24} {:<28} {:<32} {:<16}",
        "Contact".bold(),
        "Company".bold(),
        "Address".bold(),
        "Phone".bold()
    );
    println!("{}", "-".repeat(100));

    for customer in customers {
        println!(
            "{:<24} {:<28} {:<32} {:<16}",
            truncate(customer.contact_name.as_deref(), 24).cyan(),
            truncate(customer.company_name.as_deref(), 28),
            truncate(customer.address.as_deref(), 32),
            truncate(customer.phone.as_deref(), 16),
        );
    }

    println!();
    println!("{}", format!("{} customer(s)", customers.len()).dimmed());
}

/// Fit a possibly absent value into `width` characters.
fn truncate(value: Option<&str>, width: usize) -> String {
    let value = value.unwrap_or(MISSING);
    if value.chars().count() <= width {
        return value.to_string();
    }
    let kept: String = value.chars().take(width.saturating_sub(3)).collect();
    format!("{kept}...")
}
