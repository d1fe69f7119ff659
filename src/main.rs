mod args;
mod checklist;
mod search;
mod style;
#[cfg(test)]
mod test_utils;

use anyhow::Result;
use args::{Args, Command, FindArgs};
use checklist::{electricity, DiskFs, Verifier};
use clap::Parser;
use search::{ContextWindow, SearchConfig};

fn main() -> Result<()> {
    let args = Args::parse();
    let painter = args.color.painter();
    let mut stdout = std::io::stdout().lock();

    match args.command {
        Command::Functions { file } => {
            search::run(&SearchConfig::functions(file)?, painter, &mut stdout)?;
        }
        Command::Welcome { file } => {
            search::run(&SearchConfig::welcome(file)?, painter, &mut stdout)?;
        }
        Command::Find(find) => {
            search::run(&find_config(find)?, painter, &mut stdout)?;
        }
        Command::Verify { base } => {
            // The printed report is the whole result: failed checks never change the exit status.
            let _tally =
                Verifier::new(&base, DiskFs, painter).run(&electricity::checklist(), &mut stdout)?;
        }
    }

    Ok(())
}

fn find_config(find: FindArgs) -> Result<SearchConfig> {
    SearchConfig::from(find.keywords, find.paths)?
        .window(ContextWindow::new(find.before, find.after))
        .case_insensitive(find.ignore_case)
        .search_hidden(find.search_hidden)
        .globs(find.glob)
}
