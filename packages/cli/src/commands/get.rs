use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use propfile_parser::Properties;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Path to the properties file
    pub file: PathBuf,

    /// Name of the property to look up
    pub key: String,

    /// Value to print when the property is missing
    #[arg(short, long)]
    pub default: Option<String>,
}

pub fn get(args: GetArgs) -> anyhow::Result<()> {
    let props = Properties::open(&args.file);

    match props.get(&args.key) {
        Ok(value) => {
            println!("{value}");
            Ok(())
        }
        Err(_) if args.default.is_some() => {
            println!("{}", args.default.unwrap());
            Ok(())
        }
        Err(err) => {
            if let Some(failure) = props.load_failure() {
                eprintln!("{} {failure}", "error:".red().bold());
            }
            Err(err.into())
        }
    }
}
