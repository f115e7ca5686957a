use std::env;
use std::process;

use anyhow::{Context, Result};
use cedict_lookup::{Config, Dictionary, Field};

fn main() {
    let args: Vec<String> = env::args().collect();

    let (field, headwords) = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            eprintln!(
                "Usage: {} [--field <definitions|pinyin|simplified|traditional>] <headword>...",
                args.first().map(String::as_str).unwrap_or("cedict")
            );
            process::exit(1);
        }
    };

    // Dictionary data loading
    let dict = match load() {
        Ok(dict) => dict,
        Err(e) => {
            eprintln!("ERROR: {:#}", e);
            process::exit(1);
        }
    };

    let mut missing = false;
    for headword in headwords {
        match lookup(&dict, headword, field) {
            Ok(Some(json)) => println!("{}", json),
            Ok(None) => {
                eprintln!("{}: not found", headword);
                missing = true;
            }
            Err(e) => {
                eprintln!("ERROR: {:#}", e);
                process::exit(1);
            }
        }
    }

    if missing {
        process::exit(1);
    }
}

fn parse_args(args: &[String]) -> Result<(Option<Field>, Vec<&str>)> {
    let mut field = None;
    let mut headwords = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--field" {
            let name = iter.next().context("--field flag requires an argument")?;
            field = Some(name.parse::<Field>()?);
        } else {
            headwords.push(arg.as_str());
        }
    }

    if headwords.is_empty() {
        anyhow::bail!("no headword given");
    }
    Ok((field, headwords))
}

fn load() -> Result<Dictionary> {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    config
        .load_dictionary()
        .context("Failed to load dictionary")
}

fn lookup(dict: &Dictionary, headword: &str, field: Option<Field>) -> Result<Option<String>> {
    let json = match field {
        Some(field) => dict
            .get_field(headword, field)
            .map(|value| serde_json::to_string_pretty(&value))
            .transpose()?,
        None => dict
            .get_entry(headword)
            .map(serde_json::to_string_pretty)
            .transpose()?,
    };
    Ok(json)
}
