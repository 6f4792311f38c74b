use rockphy::base::{PhaseMixture, RockPhysError};
use rockphy::effective::berryman_self_consistent;
use rockphy::solver::SolverControl;
use serde::Deserialize;
use std::fs;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "rockphy_sc",
    about = "Computes the Berryman self-consistent moduli of the composite described in a JSON file"
)]
struct Options {
    /// Input file with the phases and (optionally) the solver control
    input: String,

    /// Prints the nonlinear iterations
    #[structopt(short, long)]
    verbose: bool,
}

/// Holds the input data
#[derive(Deserialize)]
struct Input {
    #[serde(flatten)]
    mixture: PhaseMixture,

    #[serde(default)]
    control: SolverControl,
}

fn main() -> Result<(), RockPhysError> {
    // parse options
    let options = Options::from_args();

    // load data
    let json = fs::read_to_string(&options.input)?;
    let mut input: Input = serde_json::from_str(&json)?;
    input.mixture.validate()?;
    if options.verbose {
        input.control.set_verbose_iterations(true);
    }

    // run
    let (k, g, x, alpha) = input.mixture.columns();
    let (k_sc, g_sc) = berryman_self_consistent(&k, &g, &x, &alpha, &input.control)?;

    // message
    let thin_line = format!("{:─^1$}", "", 40);
    println!("\n{}", thin_line);
    println!("K_sc = {:>12.6} GPa", k_sc);
    println!("G_sc = {:>12.6} GPa", g_sc);
    println!("{}\n", thin_line);
    Ok(())
}
