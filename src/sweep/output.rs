use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::sweep::evaluation::CellResult;

/// Write every cell to a CSV file.
pub fn write_csv(results: &[CellResult], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "calories",
        "meals",
        "trials",
        "feasible_meals",
        "total_meals",
        "feasibility_rate",
        "avg_items_per_meal",
        "avg_distinct_foods",
        "plans_with_repeats",
    ])?;

    for r in results {
        wtr.write_record([
            format!("{:.0}", r.calories),
            r.meals.to_string(),
            r.trials.to_string(),
            r.feasible_meals.to_string(),
            r.total_meals.to_string(),
            format!("{:.3}", r.feasibility_rate()),
            format!("{:.2}", r.avg_items_per_meal),
            format!("{:.2}", r.avg_distinct_foods),
            r.plans_with_repeats.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the overall summary and the weakest cells as JSON.
pub fn write_summary_json(results: &[CellResult], path: &Path) -> Result<()> {
    let total_meals: usize = results.iter().map(|r| r.total_meals).sum();
    let feasible_meals: usize = results.iter().map(|r| r.feasible_meals).sum();

    let mut weakest: Vec<&CellResult> = results.iter().collect();
    weakest.sort_by(|a, b| {
        a.feasibility_rate()
            .partial_cmp(&b.feasibility_rate())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let weakest_cells: Vec<&CellResult> = weakest.into_iter().take(5).collect();

    let rate = if total_meals > 0 {
        feasible_meals as f64 / total_meals as f64
    } else {
        0.0
    };

    let json = serde_json::json!({
        "total_meals": total_meals,
        "feasible_meals": feasible_meals,
        "feasibility_rate": rate,
        "weakest_cells": weakest_cells,
    });

    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&json)?.as_bytes())?;
    Ok(())
}

/// Print the grid to stdout.
pub fn print_table(results: &[CellResult]) {
    println!();
    println!(
        "{:>8} {:>6} {:>10} {:>10} {:>10} {:>8}",
        "kcal", "meals", "feasible", "items", "distinct", "repeats"
    );

    for r in results {
        println!(
            "{:>8.0} {:>6} {:>9.1}% {:>10.2} {:>10.2} {:>8}",
            r.calories,
            r.meals,
            r.feasibility_rate() * 100.0,
            r.avg_items_per_meal,
            r.avg_distinct_foods,
            r.plans_with_repeats
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn cell(feasible: usize) -> CellResult {
        CellResult {
            calories: 2000.0,
            meals: 3,
            trials: 2,
            feasible_meals: feasible,
            total_meals: 6,
            avg_items_per_meal: 3.0,
            avg_distinct_foods: 8.5,
            plans_with_repeats: 0,
        }
    }

    #[test]
    fn test_write_csv_rows() {
        let file = NamedTempFile::new().unwrap();
        write_csv(&[cell(6), cell(3)], file.path()).unwrap();

        let mut rdr = csv::Reader::from_path(file.path()).unwrap();
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][5], "0.500");
    }

    #[test]
    fn test_write_summary_json() {
        let file = NamedTempFile::new().unwrap();
        write_summary_json(&[cell(6), cell(3)], file.path()).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(file.path()).unwrap()).unwrap();
        assert_eq!(value["total_meals"], 12);
        assert_eq!(value["feasible_meals"], 9);
        assert_eq!(value["weakest_cells"][0]["feasible_meals"], 3);
    }
}
