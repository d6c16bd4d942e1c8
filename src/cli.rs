// src/cli.rs
use color_eyre::eyre::{Result, WrapErr, bail};

use crate::config::options::FetchOptions;
use crate::runner;

/// Entry point for the binary: no arguments, report on stdout.
pub fn run() -> Result<()> {
    color_eyre::install()?;
    crate::log::init();

    let opts = parse_cli(std::env::args().skip(1))?;
    let report = runner::run(&opts).wrap_err("could not check the planning for open slots")?;
    println!("{report}");
    Ok(())
}

/// The program takes no arguments; anything given is an error.
pub fn parse_cli<I: IntoIterator<Item = String>>(args: I) -> Result<FetchOptions> {
    if let Some(arg) = args.into_iter().next() {
        bail!("Unexpected argument: {arg} (calypso_slots takes no arguments)");
    }
    Ok(FetchOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_gives_defaults() {
        let opts = parse_cli(Vec::<String>::new()).unwrap();
        assert_eq!(opts, FetchOptions::default());
    }

    #[test]
    fn any_arg_is_rejected() {
        let err = parse_cli(vec![String::from("--help")]).unwrap_err();
        assert!(err.to_string().contains("--help"));
    }
}
