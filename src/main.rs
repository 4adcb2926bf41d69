// Copyright (c) Addison Crump, 2025, licensed under the EUPL-1.2-or-later.

//! Solves the example block-stacking puzzle and prints every configuration on the way.

use block_towers::{Configuration, Dimensions, find_solution};
use std::error::Error;
use std::process::ExitCode;

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let dim = Dimensions::try_from((3usize, 4usize))?;
    let start = Configuration::new(dim, [vec![1u8], vec![2], vec![3, 4, 5]])?;
    let goal = Configuration::new(dim, [vec![], vec![4], vec![1, 2, 3, 5]])?;

    match find_solution(&start, &goal) {
        Ok(solution) => {
            for config in solution.configurations() {
                println!("{config}\n");
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{err}");
            Ok(ExitCode::FAILURE)
        }
    }
}
