//! File I/O for seeds and simulation results

use anyhow::{Context, Result};
use std::path::Path;

/// Load a seed string from a text file
///
/// All ASCII whitespace is stripped, so both flat bit strings and
/// one-row-per-line grid files are accepted. Character validation is left to
/// `Grid::from_seed`.
pub fn load_seed_from_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read seed file: {}", path.as_ref().display()))?;

    Ok(content.split_whitespace().collect())
}

/// Save simulation output to a text file
pub fn save_output_to_file<P: AsRef<Path>>(content: &str, path: P) -> Result<()> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write output to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Create example seed files for testing
///
/// Each file is written one row per line; `load_seed_from_file` flattens the
/// rows back into the seed string.
pub fn create_example_seeds<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    // Blinker oscillator, side 5
    let blinker_content = "00000\n00100\n00100\n00100\n00000\n";
    std::fs::write(dir.join("blinker.txt"), blinker_content)
        .context("Failed to write blinker.txt")?;

    // Block still life, side 6
    let block_content = "000000\n000000\n001100\n001100\n000000\n000000\n";
    std::fs::write(dir.join("block.txt"), block_content).context("Failed to write block.txt")?;

    // Beacon oscillator, side 6
    let beacon_content = "000000\n011000\n011000\n000110\n000110\n000000\n";
    std::fs::write(dir.join("beacon.txt"), beacon_content).context("Failed to write beacon.txt")?;

    // Glider, side 8; it drowns at the dead border after a few dozen steps
    let glider_content =
        "00000000\n00100000\n00010000\n01110000\n00000000\n00000000\n00000000\n00000000\n";
    std::fs::write(dir.join("glider.txt"), glider_content).context("Failed to write glider.txt")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::Grid;
    use tempfile::tempdir;

    #[test]
    fn test_load_flat_seed() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("seed.txt");
        std::fs::write(&path, "010101010\n").unwrap();

        assert_eq!(load_seed_from_file(&path).unwrap(), "010101010");
    }

    #[test]
    fn test_load_row_per_line_seed() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("seed.txt");
        std::fs::write(&path, "010\n101\n010\n").unwrap();

        let seed = load_seed_from_file(&path).unwrap();
        assert_eq!(seed, "010101010");
        assert!(Grid::from_seed(&seed, 3).is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = tempdir().unwrap();
        assert!(load_seed_from_file(temp_dir.path().join("missing.txt")).is_err());
    }

    #[test]
    fn test_save_output_creates_parents() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nested/dir/result.txt");

        save_output_to_file("000000000", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "000000000");
    }

    #[test]
    fn test_create_example_seeds() {
        let temp_dir = tempdir().unwrap();
        create_example_seeds(temp_dir.path()).unwrap();

        for name in ["blinker.txt", "block.txt", "beacon.txt", "glider.txt"] {
            assert!(temp_dir.path().join(name).exists());
        }

        let blinker = load_seed_from_file(temp_dir.path().join("blinker.txt")).unwrap();
        let grid = Grid::from_seed(&blinker, 5).unwrap();
        assert_eq!(grid.living_count(), 3);

        let glider = load_seed_from_file(temp_dir.path().join("glider.txt")).unwrap();
        let grid = Grid::from_seed(&glider, 8).unwrap();
        assert_eq!(grid.living_count(), 5);
    }
}
