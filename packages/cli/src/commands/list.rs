use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use propfile_parser::Properties;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Path to the properties file
    pub file: PathBuf,

    /// Emit the table as JSON instead of `key = value` lines
    #[arg(long)]
    pub json: bool,
}

pub fn list(args: ListArgs) -> anyhow::Result<()> {
    let props = Properties::open(&args.file);

    // Sorted for stable output; the table itself is unordered.
    let table: BTreeMap<&String, &String> = props.all().iter().collect();

    if let Some(failure) = props.load_failure() {
        eprintln!("{} {failure}", "warning:".yellow().bold());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&table)?);
    } else {
        for (key, value) in table {
            println!("{} = {}", key.cyan(), value);
        }
    }

    Ok(())
}
