#![allow(unused)]

use crate::prelude::*;
use clap::Parser;

mod error;
mod lookup;
mod prelude;
mod server;
mod upstream;

#[cfg(test)]
mod test_support;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Filter, sort and limit the REST Countries API, over HTTP or from the shell"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// REST Countries endpoint returning the full country list
    #[clap(
        long,
        env = "RESTCOUNTRIES_API_URL",
        global = true,
        default_value = upstream::DEFAULT_API_URL
    )]
    api_url: String,

    /// Upstream request timeout in seconds
    #[clap(long, env = "RESTCOUNTRIES_TIMEOUT", global = true, default_value = "30")]
    timeout: u64,

    /// Whether to display additional information.
    #[clap(long, env = "COUNTRIES_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Serve the countries HTTP API
    Serve(crate::server::ServeOptions),

    /// Filter, sort and limit the country list
    List(crate::lookup::list::ListOptions),

    /// Search countries by common name
    Search(crate::lookup::search::SearchOptions),

    /// List countries below a population given in millions
    Below(crate::lookup::below::BelowOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Serve(options) => crate::server::run(options, app.global).await,
        SubCommands::List(options) => crate::lookup::list::run(options, app.global).await,
        SubCommands::Search(options) => crate::lookup::search::run(options, app.global).await,
        SubCommands::Below(options) => crate::lookup::below::run(options, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        App::command().debug_assert();
    }

    #[test]
    fn test_global_defaults() {
        let app = App::parse_from(["countries", "search", "can"]);

        assert_eq!(app.global.timeout, 30);
        assert_eq!(app.global.api_url, upstream::DEFAULT_API_URL);
        assert!(app
            .global
            .api_url
            .contains("fields=name,population,region"));
        assert!(!app.global.verbose);
        assert!(matches!(app.command, SubCommands::Search(ref o) if o.name == "can"));
    }

    #[test]
    fn test_list_options_parse() {
        let app = App::parse_from([
            "countries",
            "list",
            "--region",
            "asia",
            "--sort-order",
            "descend",
            "--limit",
            "5",
            "--api-url",
            "http://localhost:9000/all",
        ]);

        assert_eq!(app.global.api_url, "http://localhost:9000/all");
        let SubCommands::List(options) = app.command else {
            panic!("expected list subcommand");
        };
        assert_eq!(options.region.as_deref(), Some("asia"));
        assert_eq!(options.sort_order.as_deref(), Some("descend"));
        assert_eq!(options.limit, Some(5));
    }

    #[test]
    fn test_negative_population_arguments_parse() {
        let app = App::parse_from(["countries", "list", "--min-population", "-5"]);
        let SubCommands::List(options) = app.command else {
            panic!("expected list subcommand");
        };
        assert_eq!(options.min_population, Some(-5));

        let app = App::parse_from(["countries", "below", "-1"]);
        assert!(matches!(app.command, SubCommands::Below(ref o) if o.millions == -1));
    }
}
