use crate::prelude::{println, *};
use colored::Colorize;
use countries_core::country::CountryRecord;

pub mod below;
pub mod list;
pub mod search;

// Re-export public data functions
pub use below::countries_below_data;
pub use list::list_countries_data;
pub use search::search_countries_data;

/// Print records either as pretty JSON or as a table
pub fn output_countries(countries: &[CountryRecord], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(countries)?);
        return Ok(());
    }

    println!(
        "{}\n",
        f!("Found {} country(ies)", countries.len()).bright_cyan().bold()
    );

    if countries.is_empty() {
        println!("{}", "No countries matched.".yellow());
        return Ok(());
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["Common", "Official", "Region", "Population"]);

    for country in countries {
        table.add_row(prettytable::row![
            &country.name.common,
            &country.name.official,
            &country.region,
            country.population
        ]);
    }

    table.printstd();

    Ok(())
}
