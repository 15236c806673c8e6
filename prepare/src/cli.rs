use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use unicode_tables_prepare::output;
use unicode_tables_prepare::tables::UnicodeTables;
use unicode_tables_prepare::PrepareError;
use unicode_tables_source::PropertySet;

/// подготовка таблиц Unicode (категории, CCC, регистр, декомпозиция, композиция,
/// кодовые страницы) из файлов UCD
#[derive(Debug, Parser)]
#[command(name = "unicode_tables_prepare", version)]
pub struct Cli
{
    /// каталог с UnicodeData.txt, CaseFolding.txt и SpecialCasing.txt
    #[arg(long, value_name = "DIR", default_value = "./../data/ucd")]
    pub ucd: PathBuf,

    /// каталог с таблицами кодовых страниц (cp1252.txt, iso-8859-2.txt, ...)
    #[arg(long, value_name = "DIR")]
    pub code_pages: Option<PathBuf>,

    /// каталог для подготовленных данных
    #[arg(long, short, value_name = "DIR", default_value = "./../data/output")]
    pub output: PathBuf,

    /// подробный вывод
    #[arg(long, short, conflicts_with = "quiet")]
    pub verbose: bool,

    /// без вывода
    #[arg(long, short)]
    pub quiet: bool,
}

/// --quiet - вывода нет, --verbose - debug, иначе RUST_LOG или info
pub fn init_tracing(cli: &Cli)
{
    let filter = match (cli.quiet, cli.verbose) {
        (true, _) => tracing_subscriber::EnvFilter::new("off"),
        (false, true) => tracing_subscriber::EnvFilter::new("debug"),
        (false, false) => {
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run(cli: &Cli) -> Result<(), PrepareError>
{
    info!("чтение UCD из {}", cli.ucd.display());

    let properties = PropertySet::load(&cli.ucd)?;
    info!("кодпоинтов в UCD: {}", properties.unicode.len());

    let tables = UnicodeTables::prepare(&properties, cli.code_pages.as_deref())?;

    output::write(&tables, &cli.output)?;

    Ok(())
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn arguments()
    {
        let cli = Cli::parse_from(["prepare", "--ucd", "ucd", "-o", "out", "-v"]);

        assert_eq!(cli.ucd, PathBuf::from("ucd"));
        assert_eq!(cli.output, PathBuf::from("out"));
        assert_eq!(cli.code_pages, None);
        assert!(cli.verbose);
        assert!(!cli.quiet);

        assert!(Cli::try_parse_from(["prepare", "-v", "-q"]).is_err());
    }
}
