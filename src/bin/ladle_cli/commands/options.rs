// ABOUTME: Options command for ladle-cli
// ABOUTME: Prints the cuisine and diet values the filters understand
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use ladle::{
    constants::filters::{ALL, CUISINE_OPTIONS, DIET_OPTIONS},
    errors::AppResult,
};
use serde_json::json;

use crate::helpers::display::{print_json, OutputFormat};

/// Print the known filter values
pub fn run(format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Json => print_json(&json!({
            "any": ALL,
            "cuisines": CUISINE_OPTIONS,
            "diets": DIET_OPTIONS,
        })),
        OutputFormat::Text => {
            println!("Cuisines ({ALL} for any):");
            for cuisine in CUISINE_OPTIONS {
                println!("   {cuisine}");
            }
            println!("\nDiets ({ALL} for any):");
            for diet in DIET_OPTIONS {
                println!("   {diet}");
            }
            Ok(())
        }
    }
}
